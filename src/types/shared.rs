//! Tipos compartilhados entre recursos (usuários e imagens)

use serde::{Deserialize, Serialize};

/// Usuário/perfil do Podio, como aparece em `created_by`, `owner` etc.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub space_id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// ID do arquivo do avatar
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<u64>,

    /// Tipo do perfil ("user", "app", ...)
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub user_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_seen_on: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub org_id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<Image>,
}

/// Imagem hospedada (avatar, logo)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Image {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hosted_by: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub hosted_by_humanized_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_link: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_file_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_target: Option<String>,
}
