use serde::{Deserialize, Serialize};

use crate::types::shared::{Image, User};
use crate::types::space::Space;

/// Organização do Podio
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Organization {
    #[serde(skip_serializing_if = "crate::types::is_unset_id")]
    pub org_id: u64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_label: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub premium: Option<bool>,

    /// ID do arquivo do logo (a imagem completa vem em `image`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_limit: Option<u64>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub org_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub segment: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tier: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sales_agent_id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub domains: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_on: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<User>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<Image>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub rights: Option<Vec<String>>,

    /// Presente apenas na listagem `GET /org/`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spaces: Option<Vec<Space>>,
}
