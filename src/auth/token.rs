use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::{ClientOptions, Credentials};

/// Token OAuth2 devolvido pelo endpoint `/oauth/token`
///
/// Apenas `access_token` é usado nas requisições; os demais campos são
/// guardados para o chamador, mas não há renovação automática.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct OAuthToken {
    pub access_token: String,
    #[serde(default)]
    pub token_type: String,
    #[serde(default)]
    pub expires_in: Option<u64>,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default, rename = "ref")]
    pub reference: Option<TokenReference>,
}

/// Entidade autenticada pelo token (usuário, app...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenReference {
    #[serde(rename = "type")]
    pub ref_type: String,
    pub id: u64,
}

impl fmt::Debug for OAuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OAuthToken")
            .field("access_token", &"***")
            .field("token_type", &self.token_type)
            .field("expires_in", &self.expires_in)
            .field("refresh_token", &self.refresh_token.as_ref().map(|_| "***"))
            .field("reference", &self.reference)
            .finish()
    }
}

impl OAuthToken {
    /// Valor do header `authorization` no formato aceito pelo Podio
    pub fn authorization_header(&self) -> String {
        format!("OAuth2 {}", self.access_token)
    }
}

/// Corpo do password grant (`grant_type=password`)
#[derive(Clone, PartialEq)]
pub struct PasswordGrant<'a> {
    pub username: &'a str,
    pub password: &'a str,
    pub client_id: &'a str,
    pub client_secret: &'a str,
}

impl<'a> PasswordGrant<'a> {
    pub fn new(options: &'a ClientOptions, credentials: &'a Credentials) -> Self {
        Self {
            username: &credentials.username,
            password: &credentials.password,
            client_id: &options.api_key,
            client_secret: &options.api_secret,
        }
    }

    /// Pares do formulário, na ordem enviada ao servidor
    pub fn form_pairs(&self) -> [(&'static str, &'a str); 5] {
        [
            ("grant_type", "password"),
            ("username", self.username),
            ("password", self.password),
            ("client_id", self.client_id),
            ("client_secret", self.client_secret),
        ]
    }
}
