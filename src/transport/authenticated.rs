use std::fmt;

use reqwest::header::{HeaderValue, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use reqwest::{Body, Client, Request, Response};
use url::Url;

use crate::auth::token::OAuthToken;
use crate::config::{ClientOptions, DEFAULT_USER_AGENT};
use crate::error::{PodioError, PodioResult};
use crate::transport::request::ApiRequest;

/// Transporte que decora cada requisição com user-agent, token e host
///
/// É um snapshot imutável: trocar o token significa construir um novo
/// transporte com [`AuthenticatedTransport::with_token`].
#[derive(Clone)]
pub struct AuthenticatedTransport {
    http: Client,
    api_url: Url,
    user_agent: String,
    token: Option<OAuthToken>,
}

impl fmt::Debug for AuthenticatedTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthenticatedTransport")
            .field("api_url", &self.api_url.as_str())
            .field("user_agent", &self.user_agent)
            .field("token", &self.token)
            .finish_non_exhaustive()
    }
}

impl AuthenticatedTransport {
    /// Cria um transporte sem token
    pub fn new(http: Client, api_url: Url, user_agent: impl Into<String>) -> Self {
        let user_agent = user_agent.into();
        let user_agent = if user_agent.trim().is_empty() {
            DEFAULT_USER_AGENT.to_string()
        } else {
            user_agent
        };

        Self {
            http,
            api_url,
            user_agent,
            token: None,
        }
    }

    /// Constrói o transporte (e o cliente HTTP por baixo) a partir das opções
    ///
    /// # Timeouts
    ///
    /// - Total: `options.timeout` (padrão 30s)
    pub fn from_options(options: &ClientOptions) -> PodioResult<Self> {
        let api_url = options.validate()?;

        let http = Client::builder()
            .timeout(options.timeout)
            .build()
            .map_err(|e| PodioError::config_error(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self::new(http, api_url, options.effective_user_agent()))
    }

    /// Novo snapshot com o mesmo cliente HTTP e o token informado
    pub fn with_token(&self, token: OAuthToken) -> Self {
        Self {
            token: Some(token),
            ..self.clone()
        }
    }

    /// Novo snapshot sem token (usado no bootstrap da autenticação)
    pub fn without_token(&self) -> Self {
        Self {
            token: None,
            ..self.clone()
        }
    }

    pub fn token(&self) -> Option<&OAuthToken> {
        self.token.as_ref()
    }

    pub fn api_url(&self) -> &Url {
        &self.api_url
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Resolve o alvo da requisição
    ///
    /// URLs absolutas com host são mantidas; caminhos relativos recebem o
    /// esquema, host e porta da URL base.
    pub fn resolve(&self, target: &str) -> PodioResult<Url> {
        match Url::parse(target) {
            Ok(url) if url.has_host() => Ok(url),
            Ok(url) => {
                let mut resolved = self.api_url.clone();
                resolved.set_path(url.path());
                resolved.set_query(url.query());
                Ok(resolved)
            }
            Err(url::ParseError::RelativeUrlWithoutBase) => {
                self.api_url.join(target).map_err(|source| PodioError::InvalidUrl {
                    url: target.to_string(),
                    source,
                })
            }
            Err(source) => Err(PodioError::InvalidUrl {
                url: target.to_string(),
                source,
            }),
        }
    }

    /// Aplica user-agent, authorization e host, sem enviar
    pub fn decorate(&self, request: ApiRequest) -> PodioResult<Request> {
        let (method, target, content_type, body) = request.into_parts();
        let url = self.resolve(&target)?;

        let mut http_request = Request::new(method, url);
        let headers = http_request.headers_mut();

        let user_agent = HeaderValue::from_str(&self.user_agent)
            .map_err(|e| PodioError::config_error(format!("invalid user agent: {}", e)))?;
        headers.insert(USER_AGENT, user_agent);

        if let Some(token) = self.token.as_ref().filter(|t| !t.access_token.is_empty()) {
            let mut authorization = HeaderValue::from_str(&token.authorization_header())
                .map_err(|e| PodioError::config_error(format!("invalid access token: {}", e)))?;
            authorization.set_sensitive(true);
            headers.insert(AUTHORIZATION, authorization);
        }

        if let Some(content_type) = content_type {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
        }

        if let Some(body) = body {
            *http_request.body_mut() = Some(Body::from(body));
        }

        Ok(http_request)
    }

    /// Decora e envia a requisição, devolvendo a resposta sem interpretá-la
    ///
    /// Erros de rede são propagados como `Transport`, com método e caminho.
    pub async fn deliver(&self, request: ApiRequest) -> PodioResult<Response> {
        let method = request.method().clone();
        let path = request.target().to_string();
        let http_request = self.decorate(request)?;

        tracing::debug!("{} {}", http_request.method(), http_request.url());

        let response = self
            .http
            .execute(http_request)
            .await
            .map_err(|source| PodioError::Transport {
                method,
                path,
                source,
            })?;

        tracing::debug!("Response status: {}", response.status());

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::Method;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn token(access_token: &str) -> OAuthToken {
        OAuthToken {
            access_token: access_token.to_string(),
            token_type: "bearer".to_string(),
            expires_in: Some(3600),
            refresh_token: None,
            reference: None,
        }
    }

    fn transport(api_url: &str, user_agent: &str) -> AuthenticatedTransport {
        AuthenticatedTransport::new(Client::new(), Url::parse(api_url).unwrap(), user_agent)
    }

    #[test]
    fn test_relative_request_gets_host_and_user_agent() {
        let transport = transport("https://api.podio.com", "podio-cli");
        let request = transport.decorate(ApiRequest::get("/space/42")).unwrap();

        assert_eq!(request.url().as_str(), "https://api.podio.com/space/42");
        assert_eq!(request.headers()[USER_AGENT], "podio-cli");
        assert!(request.headers().get(AUTHORIZATION).is_none());
    }

    #[test]
    fn test_token_sets_authorization_header() {
        let transport = transport("https://api.podio.com", "podio-cli").with_token(token("T"));
        let request = transport.decorate(ApiRequest::get("/org/1")).unwrap();

        assert_eq!(request.headers()[AUTHORIZATION], "OAuth2 T");
    }

    #[test]
    fn test_empty_user_agent_uses_default() {
        let transport = transport("https://api.podio.com", "");
        let request = transport.decorate(ApiRequest::get("/org/1")).unwrap();

        assert_eq!(request.headers()[USER_AGENT], DEFAULT_USER_AGENT);
    }

    #[test]
    fn test_absolute_url_keeps_host() {
        let transport = transport("https://api.podio.com", "podio-cli").with_token(token("T"));
        let request = transport
            .decorate(ApiRequest::get("https://files.podio.com/123"))
            .unwrap();

        assert_eq!(request.url().host_str(), Some("files.podio.com"));
        assert_eq!(request.headers()[AUTHORIZATION], "OAuth2 T");
    }

    #[test]
    fn test_relative_request_keeps_port_and_query() {
        let transport = transport("http://127.0.0.1:8089", "podio-cli");
        let request = transport
            .decorate(ApiRequest::get("/app/space/9/?include_inactive=false"))
            .unwrap();

        assert_eq!(
            request.url().as_str(),
            "http://127.0.0.1:8089/app/space/9/?include_inactive=false"
        );
    }

    #[test]
    fn test_body_and_content_type_are_forwarded() {
        let transport = transport("https://api.podio.com", "podio-cli");
        let request = transport
            .decorate(ApiRequest::post("/oauth/token").form(&[("grant_type", "password")]))
            .unwrap();

        assert_eq!(request.method(), &Method::POST);
        assert_eq!(
            request.headers()[CONTENT_TYPE],
            "application/x-www-form-urlencoded"
        );
        assert_eq!(
            request.body().and_then(|b| b.as_bytes()),
            Some(&b"grant_type=password"[..])
        );
    }

    #[test]
    fn test_without_token_drops_authorization() {
        let transport = transport("https://api.podio.com", "podio-cli")
            .with_token(token("T"))
            .without_token();
        let request = transport.decorate(ApiRequest::get("/org/1")).unwrap();

        assert!(transport.token().is_none());
        assert!(request.headers().get(AUTHORIZATION).is_none());
    }

    #[test]
    fn test_from_options_rejects_missing_secret() {
        let options = ClientOptions::new("key", "");
        assert!(AuthenticatedTransport::from_options(&options).is_err());
    }

    #[tokio::test]
    async fn test_deliver_sends_decorated_request() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/space/42"))
            .and(header("user-agent", "podio-cli"))
            .and(header("authorization", "OAuth2 T"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
            .expect(1)
            .mount(&server)
            .await;

        let transport = transport(&server.uri(), "podio-cli").with_token(token("T"));
        let response = transport.deliver(ApiRequest::get("/space/42")).await.unwrap();

        assert_eq!(response.status(), 200);
    }

    #[tokio::test]
    async fn test_deliver_absolute_url_reaches_its_own_host() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/file/7"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        // A URL base aponta para outro host; a requisição absoluta não pode ser redirecionada
        let transport = transport("http://127.0.0.1:9", "podio-cli");
        let target = format!("{}/file/7", server.uri());
        let response = transport.deliver(ApiRequest::get(target)).await.unwrap();

        assert_eq!(response.status(), 200);
    }

    #[tokio::test]
    async fn test_deliver_returns_non_success_verbatim() {
        let server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let transport = transport(&server.uri(), "podio-cli");
        let response = transport.deliver(ApiRequest::delete("/app/1")).await.unwrap();

        assert_eq!(response.status(), 500);
        assert_eq!(response.text().await.unwrap(), "boom");
    }

    #[tokio::test]
    async fn test_deliver_wraps_connection_failure() {
        // Porta 9 (discard) não tem nada escutando no ambiente de teste
        let transport = transport("http://127.0.0.1:9", "podio-cli");
        let error = transport.deliver(ApiRequest::get("/org/1")).await.unwrap_err();

        match error {
            PodioError::Transport { method, path, .. } => {
                assert_eq!(method, Method::GET);
                assert_eq!(path, "/org/1");
            }
            other => panic!("expected transport error, got {:?}", other),
        }
    }
}
