use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Method;
use serde::Serialize;

use super::ApiError;

/// Per-call options for [`ApiClient::fetch`](super::ApiClient::fetch).
///
/// Headers set here are merged over the client defaults. The bearer header
/// is always applied last, so callers cannot drop or replace it.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub method: Method,
    pub headers: HeaderMap,
    pub body: Option<String>,
}

impl RequestOptions {
    pub fn new(method: Method) -> Self {
        Self {
            method,
            ..Default::default()
        }
    }

    pub fn get() -> Self {
        Self::new(Method::GET)
    }

    pub fn post() -> Self {
        Self::new(Method::POST)
    }

    pub fn put() -> Self {
        Self::new(Method::PUT)
    }

    pub fn patch() -> Self {
        Self::new(Method::PATCH)
    }

    pub fn delete() -> Self {
        Self::new(Method::DELETE)
    }

    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.append(name, value);
        self
    }

    /// Serialize `body` as the JSON request body.
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self, ApiError> {
        let encoded = serde_json::to_string(body)
            .map_err(|e| ApiError::InvalidRequest(format!("failed to encode body: {}", e)))?;
        self.body = Some(encoded);
        Ok(self)
    }

    /// Use an already-encoded JSON body verbatim.
    pub fn raw_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_get_without_body() {
        let opts = RequestOptions::default();
        assert_eq!(opts.method, Method::GET);
        assert!(opts.headers.is_empty());
        assert!(opts.body.is_none());
    }

    #[test]
    fn test_json_body() {
        let opts = RequestOptions::post()
            .json(&serde_json::json!({"emails": ["a@b.c"]}))
            .unwrap();
        assert_eq!(opts.method, Method::POST);
        assert_eq!(opts.body.as_deref(), Some(r#"{"emails":["a@b.c"]}"#));
    }

    #[test]
    fn test_header_appends() {
        let name = HeaderName::from_static("x-trace-id");
        let opts = RequestOptions::get()
            .header(name.clone(), HeaderValue::from_static("one"))
            .header(name.clone(), HeaderValue::from_static("two"));
        assert_eq!(opts.headers.get_all(&name).iter().count(), 2);
    }
}
