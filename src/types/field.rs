use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Campo de um app
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Field {
    /// Ausente em campos novos enviados na criação de um app
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_id: Option<u64>,

    /// Tipo do campo ("text", "number", "category", ...)
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub field_type: Option<String>,

    /// Gerado automaticamente pelo Podio e nunca muda
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<FieldConfig>,
}

/// Configuração de um campo
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    /// Rótulo exibido aos usuários
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Ordem do campo em relação aos demais
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delta: Option<i64>,

    /// Depende do tipo do campo, por isso fica como JSON livre
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings: Option<Value>,

    /// Mapeamento para apps do tipo "meeting"/"contact" (ex.: "contact_email")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mapping: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
}

impl FieldConfig {
    pub fn labeled(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            ..Self::default()
        }
    }
}

/// Campo a remover numa atualização de app
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldDelete {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_id: Option<u64>,

    /// Também apaga os valores já gravados nos items
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete_values: Option<bool>,
}

/// Parâmetros do `POST /app/{app_id}/field/`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateFieldParams {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub field_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<FieldConfig>,
}

impl CreateFieldParams {
    pub fn new(field_type: impl Into<String>, config: FieldConfig) -> Self {
        Self {
            field_type: Some(field_type.into()),
            config: Some(config),
        }
    }
}

/// Resposta da criação de campo
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FieldCreated {
    pub field_id: u64,
}
