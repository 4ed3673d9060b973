use std::env;
use std::fmt;
use std::path::Path;
use std::time::Duration;

use url::Url;

use crate::error::{PodioError, PodioResult};

/// URL padrão da API de produção do Podio
pub const DEFAULT_API_URL: &str = "https://api.podio.com";

/// User-Agent enviado quando nenhum é configurado
pub const DEFAULT_USER_AGENT: &str = "podio-rs";

/// Timeout total padrão por requisição
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Opções do cliente Podio
///
/// Imutáveis depois que o cliente é construído; apenas o token do
/// transporte é trocado quando a autenticação tem sucesso.
#[derive(Clone, PartialEq)]
pub struct ClientOptions {
    pub api_key: String,
    pub api_secret: String,
    pub api_url: String,
    pub user_agent: String,
    pub timeout: Duration,
}

impl fmt::Debug for ClientOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientOptions")
            .field("api_key", &self.api_key)
            .field("api_secret", &"***")
            .field("api_url", &self.api_url)
            .field("user_agent", &self.user_agent)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl ClientOptions {
    /// Cria opções com os valores padrão de URL, user-agent e timeout
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
            api_url: DEFAULT_API_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Carrega as opções das variáveis de ambiente (e do `.env`, se existir)
    ///
    /// Obrigatórias: `PODIO_CLIENT_ID`, `PODIO_CLIENT_SECRET`.
    /// Opcionais: `PODIO_API_URL`, `PODIO_USER_AGENT`, `PODIO_TIMEOUT_SECS`.
    pub fn from_env() -> PodioResult<Self> {
        // Durante testes, as variáveis são configuradas diretamente
        if cfg!(not(test)) && Path::new(".env").exists() {
            dotenvy::dotenv()
                .map_err(|e| PodioError::config_error(format!("failed to load .env: {}", e)))?;
        }

        let mut options = Self::new(
            required_var("PODIO_CLIENT_ID")?,
            required_var("PODIO_CLIENT_SECRET")?,
        );

        if let Some(api_url) = optional_var("PODIO_API_URL") {
            options.api_url = api_url;
        }

        if let Some(user_agent) = optional_var("PODIO_USER_AGENT") {
            options.user_agent = user_agent;
        }

        if let Some(timeout) = optional_var("PODIO_TIMEOUT_SECS") {
            let secs: u64 = timeout.parse().map_err(|_| {
                PodioError::config_error(format!("PODIO_TIMEOUT_SECS must be a number of seconds, got {}", timeout))
            })?;
            options.timeout = Duration::from_secs(secs);
        }

        Ok(options)
    }

    /// Valida as opções e devolve a URL base já interpretada
    pub fn validate(&self) -> PodioResult<Url> {
        if self.api_key.trim().is_empty() || self.api_secret.trim().is_empty() {
            return Err(PodioError::config_error("api_key and api_secret are required"));
        }

        let api_url = Url::parse(&self.api_url).map_err(|source| PodioError::InvalidUrl {
            url: self.api_url.clone(),
            source,
        })?;

        if !api_url.has_host() {
            return Err(PodioError::config_error(format!(
                "API URL must include a host: {}",
                self.api_url
            )));
        }

        Ok(api_url)
    }

    /// User-Agent efetivo (o padrão quando vazio)
    pub fn effective_user_agent(&self) -> &str {
        if self.user_agent.trim().is_empty() {
            DEFAULT_USER_AGENT
        } else {
            &self.user_agent
        }
    }
}

/// Credenciais do usuário para o password grant
///
/// Usadas somente na troca pelo token; o cliente não as guarda.
#[derive(Clone, PartialEq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Lê `PODIO_USERNAME` e `PODIO_PASSWORD`
    pub fn from_env() -> PodioResult<Self> {
        Ok(Self::new(
            required_var("PODIO_USERNAME")?,
            required_var("PODIO_PASSWORD")?,
        ))
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

/// Obtém variável de ambiente obrigatória (vazia conta como ausente)
fn required_var(key: &str) -> PodioResult<String> {
    optional_var(key).ok_or_else(|| PodioError::config_error(format!("{} must be set", key)))
}

fn optional_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}
