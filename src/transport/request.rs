use reqwest::Method;
use serde::Serialize;
use url::form_urlencoded;

use crate::error::{PodioError, PodioResult};

pub const CONTENT_TYPE_JSON: &str = "application/json";
pub const CONTENT_TYPE_FORM: &str = "application/x-www-form-urlencoded";

/// Descrição de uma requisição antes de passar pelo transporte
///
/// O `target` normalmente é um caminho relativo (`/space/42`); o
/// transporte completa esquema e host a partir da URL base.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    method: Method,
    target: String,
    content_type: Option<&'static str>,
    body: Option<Vec<u8>>,
}

impl ApiRequest {
    pub fn new(method: Method, target: impl Into<String>) -> Self {
        Self {
            method,
            target: target.into(),
            content_type: None,
            body: None,
        }
    }

    pub fn get(target: impl Into<String>) -> Self {
        Self::new(Method::GET, target)
    }

    pub fn post(target: impl Into<String>) -> Self {
        Self::new(Method::POST, target)
    }

    pub fn put(target: impl Into<String>) -> Self {
        Self::new(Method::PUT, target)
    }

    pub fn delete(target: impl Into<String>) -> Self {
        Self::new(Method::DELETE, target)
    }

    /// Serializa `body` como JSON (`application/json`)
    pub fn json<T: Serialize + ?Sized>(mut self, body: &T) -> PodioResult<Self> {
        let encoded = serde_json::to_vec(body).map_err(|e| {
            PodioError::encode_error(format!("{} {} request body", self.method, self.target), e)
        })?;

        self.content_type = Some(CONTENT_TYPE_JSON);
        self.body = Some(encoded);
        Ok(self)
    }

    /// Codifica os pares como formulário (`application/x-www-form-urlencoded`)
    pub fn form(mut self, pairs: &[(&str, &str)]) -> Self {
        let encoded = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(pairs)
            .finish();

        self.content_type = Some(CONTENT_TYPE_FORM);
        self.body = Some(encoded.into_bytes());
        self
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn content_type(&self) -> Option<&'static str> {
        self.content_type
    }

    pub fn body(&self) -> Option<&[u8]> {
        self.body.as_deref()
    }

    pub(crate) fn into_parts(self) -> (Method, String, Option<&'static str>, Option<Vec<u8>>) {
        (self.method, self.target, self.content_type, self.body)
    }
}
