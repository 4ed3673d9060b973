use serde::{Deserialize, Serialize};

use crate::types::field::{Field, FieldDelete};
use crate::types::shared::User;

/// App do Podio
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Application {
    #[serde(skip_serializing_if = "crate::types::is_unset_id")]
    pub app_id: u64,

    /// App original, quando este é uma cópia
    #[serde(rename = "original", skip_serializing_if = "Option::is_none")]
    pub original_id: Option<u64>,

    /// Revisão do app original no momento da cópia
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_revision: Option<u64>,

    /// "active", "inactive" ou "deleted"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub space_id: Option<u64>,

    /// Token usado para autenticar como o app
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub mailbox: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<User>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<AppConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub integration: Option<AppIntegration>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub rights: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<Field>>,
}

/// Configuração de um app
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// "standard", "meeting" ou "contact"
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub app_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Nome de cada item do app
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_edit: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_view: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_attachments: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_comments: Option<bool>,

    /// Criações de items não aparecem no stream
    #[serde(skip_serializing_if = "Option::is_none")]
    pub silent_creates: Option<bool>,

    /// Edições de items não aparecem no stream
    #[serde(skip_serializing_if = "Option::is_none")]
    pub silent_edits: Option<bool>,

    #[serde(rename = "fivestar", skip_serializing_if = "Option::is_none")]
    pub five_star: Option<bool>,

    #[serde(rename = "fivestar_label", skip_serializing_if = "Option::is_none")]
    pub five_star_label: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub approved: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbs: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbs_label: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub rsvp: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub rsvp_label: Option<String>,

    #[serde(rename = "yesno", skip_serializing_if = "Option::is_none")]
    pub yes_no: Option<bool>,

    #[serde(rename = "yesno_label", skip_serializing_if = "Option::is_none")]
    pub yes_no_label: Option<String>,

    /// Tarefas criadas automaticamente junto com cada item
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tasks: Option<Vec<AppTask>>,
}

/// Tarefa automática de um app
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppTask {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub responsible: Option<Vec<User>>,
}

/// Estado da integração de um app, se houver
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppIntegration {
    /// "inactive", "active", "disabled" ou "error"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub integration_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub updating: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated_on: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_refresh_on: Option<String>,
}

/// Parâmetros para criar (`POST /app/`) ou atualizar (`PUT /app/{id}`) um app
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateApplicationParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<AppConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<Field>>,

    /// Só na criação; preenchido a partir do `space_id` informado
    #[serde(skip_serializing_if = "Option::is_none")]
    pub space_id: Option<u64>,

    /// Só em atualizações
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields_to_delete: Option<Vec<FieldDelete>>,
}

impl CreateApplicationParams {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config: Some(config),
            ..Self::default()
        }
    }

    pub fn field(mut self, field: Field) -> Self {
        self.fields.get_or_insert_with(Vec::new).push(field);
        self
    }

    pub fn delete_field(mut self, field_id: u64, delete_values: bool) -> Self {
        self.fields_to_delete.get_or_insert_with(Vec::new).push(FieldDelete {
            field_id: Some(field_id),
            delete_values: Some(delete_values),
        });
        self
    }
}

/// Resposta do `POST /app/`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AppCreated {
    pub app_id: u64,
}
