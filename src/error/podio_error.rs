use reqwest::{Method, StatusCode};
use thiserror::Error;

/// Tipos de erro do cliente Podio
///
/// Separa "o servidor rejeitou" (`Api`, `Authentication`) de
/// "o servidor aceitou mas não conseguimos ler a resposta" (`Decode`).
#[derive(Error, Debug)]
pub enum PodioError {
    /// Configuração inválida na construção do cliente
    #[error("podio: invalid configuration: {0}")]
    Config(String),

    /// URL base da API não pôde ser interpretada
    #[error("podio: failed to parse API URL {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// Identificador que precisa ser numérico não é
    #[error("podio: invalid {kind} id, must parse to int: {value}")]
    InvalidId { kind: &'static str, value: String },

    /// Endpoint de token respondeu com status diferente de 200
    #[error("podio: failed to request OAuth token: {status}; body: {body}")]
    Authentication { status: StatusCode, body: String },

    /// Falha de rede, DNS ou timeout
    #[error("podio: failed to {method} {path}: {source}")]
    Transport {
        method: Method,
        path: String,
        #[source]
        source: reqwest::Error,
    },

    /// Status HTTP inesperado (corpo preservado sem alteração)
    #[error("podio: failed to {method} {path}: {status}\nPayload: {body}")]
    Api {
        method: Method,
        path: String,
        status: StatusCode,
        body: String,
    },

    /// Corpo da resposta não é JSON válido ou não bate com o formato esperado
    #[error("podio: failed to decode {context}: {source}")]
    Decode {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// Parâmetros não puderam ser serializados
    #[error("podio: failed to encode {context}: {source}")]
    Encode {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}

impl PodioError {
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn decode_error(context: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Decode {
            context: context.into(),
            source,
        }
    }

    pub fn encode_error(context: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Encode {
            context: context.into(),
            source,
        }
    }

    /// Status HTTP retornado pelo servidor, quando houver
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Api { status, .. } | Self::Authentication { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Corpo bruto da resposta de erro, quando houver
    pub fn body(&self) -> Option<&str> {
        match self {
            Self::Api { body, .. } | Self::Authentication { body, .. } => Some(body),
            _ => None,
        }
    }

    /// Recurso não encontrado (404)
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Api { status, .. } if *status == StatusCode::NOT_FOUND)
    }

    /// A chave da API está abaixo do nível de confiança exigido pela chamada.
    ///
    /// O Podio exige trust level >= 2 para várias operações de escrita e
    /// responde 403 mencionando o "trust level" no corpo.
    pub fn is_trust_level(&self) -> bool {
        match self {
            Self::Api { status, body, .. } => {
                *status == StatusCode::FORBIDDEN && body.to_lowercase().contains("trust")
            }
            _ => false,
        }
    }
}

/// Tipo de resultado padrão do crate
pub type PodioResult<T> = Result<T, PodioError>;
