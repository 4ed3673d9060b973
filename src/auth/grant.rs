use reqwest::{Method, StatusCode};

use crate::auth::token::{OAuthToken, PasswordGrant};
use crate::error::{PodioError, PodioResult};
use crate::transport::{ApiRequest, AuthenticatedTransport};

/// Endpoint de emissão de tokens
pub const TOKEN_PATH: &str = "/oauth/token";

/// Troca usuário/senha + credenciais do cliente por um token de acesso
///
/// Deve receber um transporte sem token: é o bootstrap da autenticação.
pub async fn request_password_grant(
    transport: &AuthenticatedTransport,
    grant: &PasswordGrant<'_>,
) -> PodioResult<OAuthToken> {
    tracing::debug!("Solicitando token OAuth2 (password grant) para {}", grant.username);

    let request = ApiRequest::post(TOKEN_PATH).form(&grant.form_pairs());
    let response = transport.deliver(request).await?;

    let status = response.status();
    let body = response.text().await.map_err(|source| PodioError::Transport {
        method: Method::POST,
        path: TOKEN_PATH.to_string(),
        source,
    })?;

    if status != StatusCode::OK {
        tracing::warn!("Token OAuth2 recusado pelo servidor: {}", status);
        return Err(PodioError::Authentication { status, body });
    }

    serde_json::from_str(&body).map_err(|e| PodioError::decode_error("OAuth token", e))
}
