use serde::{Deserialize, Serialize};

use crate::types::shared::User;

/// Space (área de trabalho) do Podio
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Space {
    #[serde(skip_serializing_if = "crate::types::is_unset_id")]
    pub space_id: u64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub org_id: Option<u64>,

    /// "open" ou "closed"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub privacy: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_join: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_label: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_on_new_app: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_on_new_member: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub rights: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscribed: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_on: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<User>,
}

/// Parâmetros para criar ou atualizar um space
///
/// Usado tanto no `POST /space/` quanto no `PUT /space/{id}`; em
/// atualizações, só os campos definidos são enviados.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateSpaceParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub org_id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub privacy: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_on_new_app: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_on_new_member: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_join: Option<bool>,
}

impl CreateSpaceParams {
    /// Parâmetros mínimos para criar um space numa organização
    pub fn new(org_id: u64, name: impl Into<String>) -> Self {
        Self {
            org_id: Some(org_id),
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Apenas renomeia (atualização parcial)
    pub fn rename(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn privacy(mut self, privacy: impl Into<String>) -> Self {
        self.privacy = Some(privacy.into());
        self
    }

    pub fn auto_join(mut self, auto_join: bool) -> Self {
        self.auto_join = Some(auto_join);
        self
    }

    pub fn post_on_new_app(mut self, post: bool) -> Self {
        self.post_on_new_app = Some(post);
        self
    }

    pub fn post_on_new_member(mut self, post: bool) -> Self {
        self.post_on_new_member = Some(post);
        self
    }
}

/// Resposta do `POST /space/`: só o ID e a URL, o resto vem da releitura
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SpaceCreated {
    pub space_id: u64,
    #[serde(default)]
    pub url: Option<String>,
}
