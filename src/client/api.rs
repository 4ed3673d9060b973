use std::sync::Arc;

use arc_swap::ArcSwap;
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::auth::{request_password_grant, OAuthToken, PasswordGrant};
use crate::config::{ClientOptions, Credentials};
use crate::error::{PodioError, PodioResult};
use crate::transport::{ApiRequest, AuthenticatedTransport};

/// Cliente HTTP para interagir com a API do Podio
///
/// O transporte ativo fica num [`ArcSwap`]: cada chamada captura um
/// snapshot ao montar a requisição, e `authenticate` só publica um novo
/// snapshot quando a troca de credenciais dá certo. Clones compartilham
/// o mesmo estado de autenticação.
///
/// Não há bloqueio entre `authenticate` e requisições em andamento: uma
/// chamada iniciada antes da troca termina com o token antigo.
#[derive(Debug, Clone)]
pub struct PodioClient {
    options: Arc<ClientOptions>,
    transport: Arc<ArcSwap<AuthenticatedTransport>>,
}

impl PodioClient {
    /// Cria um novo cliente (ainda não autenticado)
    ///
    /// Falha com erro de configuração se faltar `api_key`/`api_secret` ou
    /// se a URL base for inválida.
    pub fn new(options: ClientOptions) -> PodioResult<Self> {
        let transport = AuthenticatedTransport::from_options(&options)?;

        Ok(Self {
            options: Arc::new(options),
            transport: Arc::new(ArcSwap::from_pointee(transport)),
        })
    }

    /// Cria o cliente a partir das variáveis `PODIO_*`
    pub fn from_env() -> PodioResult<Self> {
        Self::new(ClientOptions::from_env()?)
    }

    pub fn options(&self) -> &ClientOptions {
        &self.options
    }

    pub fn api_url(&self) -> Url {
        self.transport.load().api_url().clone()
    }

    /// Snapshot do transporte ativo
    fn transport(&self) -> Arc<AuthenticatedTransport> {
        self.transport.load_full()
    }

    /// Verifica se o cliente já possui um token
    pub fn is_authenticated(&self) -> bool {
        self.transport.load().token().is_some()
    }

    /// Token atual (cópia), incluindo refresh token e expiração
    pub fn token(&self) -> Option<OAuthToken> {
        self.transport.load().token().cloned()
    }

    /// Autentica via OAuth2 password grant e troca o token do cliente
    ///
    /// A troca é feita por um transporte sem token. Em caso de erro o token
    /// anterior (se houver) continua valendo.
    pub async fn authenticate(&self, credentials: &Credentials) -> PodioResult<()> {
        let current = self.transport();
        let grant = PasswordGrant::new(&self.options, credentials);

        let token = request_password_grant(&current.without_token(), &grant).await?;

        self.transport.store(Arc::new(current.with_token(token)));
        tracing::info!("🔑 Autenticado no Podio como {}", credentials.username);

        Ok(())
    }

    pub async fn authenticate_with_credentials(
        &self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> PodioResult<()> {
        self.authenticate(&Credentials::new(username, password)).await
    }

    /// Executa um GET e decodifica o JSON (exige 200)
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> PodioResult<T> {
        let body = self.send(ApiRequest::get(path), &[StatusCode::OK]).await?;
        decode(&body, path)
    }

    /// Executa um DELETE (aceita 200 ou 204)
    pub async fn delete(&self, path: &str) -> PodioResult<()> {
        self.send(ApiRequest::delete(path), &[StatusCode::OK, StatusCode::NO_CONTENT])
            .await?;
        Ok(())
    }

    /// POST com corpo JSON, exige 200 e decodifica a confirmação
    pub(crate) async fn post_json<B, T>(&self, path: &str, body: &B) -> PodioResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = ApiRequest::post(path).json(body)?;
        let response = self.send(request, &[StatusCode::OK]).await?;
        decode(&response, path)
    }

    /// PUT com corpo JSON; o corpo da resposta é descartado
    pub(crate) async fn put_json<B>(&self, path: &str, body: &B, accepted: &[StatusCode]) -> PodioResult<()>
    where
        B: Serialize + ?Sized,
    {
        let request = ApiRequest::put(path).json(body)?;
        self.send(request, accepted).await?;
        Ok(())
    }

    /// Envia a requisição e lê o corpo inteiro
    ///
    /// O corpo é sempre consumido, inclusive em erro, para liberar a conexão.
    async fn send(&self, request: ApiRequest, accepted: &[StatusCode]) -> PodioResult<String> {
        let method: Method = request.method().clone();
        let path = request.target().to_string();

        let response = self.transport().deliver(request).await?;

        let status = response.status();
        let body = response.text().await.map_err(|source| PodioError::Transport {
            method: method.clone(),
            path: path.clone(),
            source,
        })?;

        if !accepted.contains(&status) {
            tracing::error!("Podio API error ({} {}): {}", method, path, status);
            return Err(PodioError::Api {
                method,
                path,
                status,
                body,
            });
        }

        Ok(body)
    }
}

fn decode<T: DeserializeOwned>(body: &str, path: &str) -> PodioResult<T> {
    serde_json::from_str(body).map_err(|e| PodioError::decode_error(format!("response from {}", path), e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};
    use wiremock::matchers::{body_string_contains, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> PodioClient {
        PodioClient::new(
            ClientOptions::new("client", "shh")
                .with_api_url(server.uri())
                .with_user_agent("podio-test"),
        )
        .unwrap()
    }

    async fn mount_token(server: &MockServer, password: &str, status: u16, body: Value) {
        Mock::given(method("POST"))
            .and(path("/oauth/token"))
            .and(body_string_contains(format!("password={}", password)))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .mount(server)
            .await;
    }

    #[test]
    fn test_client_creation() {
        let client = PodioClient::new(ClientOptions::new("client", "shh")).unwrap();

        assert_eq!(client.api_url().as_str(), "https://api.podio.com/");
        assert_eq!(client.options().api_key, "client");
        assert!(!client.is_authenticated());
        assert!(client.token().is_none());
    }

    #[test]
    fn test_client_creation_missing_credentials() {
        let result = PodioClient::new(ClientOptions::new("", ""));
        assert!(matches!(result, Err(PodioError::Config(_))));
    }

    #[tokio::test]
    async fn test_authenticate_then_requests_carry_token() {
        let server = MockServer::start().await;
        mount_token(
            &server,
            "pw",
            200,
            json!({"access_token": "T", "token_type": "bearer", "expires_in": 3600}),
        )
        .await;

        Mock::given(method("GET"))
            .and(path("/org/1"))
            .and(header("authorization", "OAuth2 T"))
            .and(header("user-agent", "podio-test"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"org_id": 1})))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        client.authenticate_with_credentials("ana", "pw").await.unwrap();

        assert!(client.is_authenticated());
        assert_eq!(client.token().unwrap().expires_in, Some(3600));

        let org: Value = client.get("/org/1").await.unwrap();
        assert_eq!(org["org_id"], 1);
    }

    #[tokio::test]
    async fn test_debug_output_hides_secret_and_token() {
        let server = MockServer::start().await;
        mount_token(
            &server,
            "pw",
            200,
            json!({"access_token": "live-token", "refresh_token": "live-refresh"}),
        )
        .await;

        let client = client_for(&server);
        client.authenticate_with_credentials("ana", "pw").await.unwrap();

        let debug = format!("{:?}", client);
        assert!(debug.contains("podio-test"));
        assert!(!debug.contains("shh"));
        assert!(!debug.contains("live-token"));
        assert!(!debug.contains("live-refresh"));
    }

    #[tokio::test]
    async fn test_failed_reauthentication_keeps_previous_token() {
        let server = MockServer::start().await;
        mount_token(&server, "good", 200, json!({"access_token": "T", "token_type": "bearer"})).await;
        mount_token(&server, "bad", 400, json!({"error": "invalid_grant"})).await;

        Mock::given(method("GET"))
            .and(path("/space/1"))
            .and(header("authorization", "OAuth2 T"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"space_id": 1})))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        client.authenticate_with_credentials("ana", "good").await.unwrap();

        let error = client
            .authenticate_with_credentials("ana", "bad")
            .await
            .unwrap_err();
        assert!(matches!(error, PodioError::Authentication { .. }));

        assert_eq!(client.token().unwrap().access_token, "T");
        let _: Value = client.get("/space/1").await.unwrap();
    }

    #[tokio::test]
    async fn test_failed_authentication_leaves_client_unauthenticated() {
        let server = MockServer::start().await;
        mount_token(&server, "bad", 401, json!({"error": "unauthorized"})).await;

        let client = client_for(&server);
        let result = client.authenticate_with_credentials("ana", "bad").await;

        assert!(result.is_err());
        assert!(!client.is_authenticated());
    }

    #[tokio::test]
    async fn test_clones_share_authentication() {
        let server = MockServer::start().await;
        mount_token(&server, "pw", 200, json!({"access_token": "T"})).await;

        let client = client_for(&server);
        let clone = client.clone();
        client.authenticate_with_credentials("ana", "pw").await.unwrap();

        assert!(clone.is_authenticated());
    }

    #[tokio::test]
    async fn test_token_exchange_does_not_send_previous_token() {
        let server = MockServer::start().await;
        mount_token(&server, "pw", 200, json!({"access_token": "T"})).await;

        let client = client_for(&server);
        client.authenticate_with_credentials("ana", "pw").await.unwrap();
        client.authenticate_with_credentials("ana", "pw").await.unwrap();

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 2);
        assert!(requests.iter().all(|r| !r.headers.contains_key("authorization")));
    }

    #[tokio::test]
    async fn test_get_non_200_embeds_status_and_body() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/app/9"))
            .respond_with(ResponseTemplate::new(403).set_body_string("forbidden by trust level"))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let error = client.get::<Value>("/app/9").await.unwrap_err();

        assert_eq!(error.status(), Some(StatusCode::FORBIDDEN));
        assert!(error.to_string().contains("403"));
        assert!(error.to_string().contains("forbidden by trust level"));
        assert!(error.is_trust_level());
    }

    #[tokio::test]
    async fn test_get_invalid_json_is_decode_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/org/1"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let error = client.get::<Value>("/org/1").await.unwrap_err();

        assert!(matches!(error, PodioError::Decode { .. }));
    }

    #[tokio::test]
    async fn test_delete_accepts_204_and_200() {
        let server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/space/1"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/space/2"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let client = client_for(&server);
        client.delete("/space/1").await.unwrap();
        client.delete("/space/2").await.unwrap();
    }

    #[tokio::test]
    async fn test_delete_404_reports_status_and_body() {
        let server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/space/3"))
            .respond_with(
                ResponseTemplate::new(404).set_body_string(r#"{"error":"not_found","error_description":"No space"}"#),
            )
            .mount(&server)
            .await;

        let client = client_for(&server);
        let error = client.delete("/space/3").await.unwrap_err();
        let message = error.to_string();

        assert!(error.is_not_found());
        assert!(message.contains("404"));
        assert!(message.contains(r#"{"error":"not_found","error_description":"No space"}"#));
    }

    #[tokio::test]
    async fn test_concurrent_requests_share_client() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
            .expect(3)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let (a, b, c) = tokio::join!(
            client.get::<Value>("/org/1"),
            client.get::<Value>("/org/2"),
            client.get::<Value>("/org/3"),
        );

        assert!(a.is_ok() && b.is_ok() && c.is_ok());
    }
}
