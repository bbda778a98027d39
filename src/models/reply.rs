//! Command reply
//!
//! Tri-state outcome of a single command: success flag, an optional value
//! (only a successful GET carries one) and an error kind.

use serde::Serialize;

use crate::error::{ErrorKind, Result};

/// Outcome of one engine operation as seen at the command boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reply {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    pub error: ErrorKind,
}

impl Reply {
    /// Success without a value.
    pub fn ok() -> Self {
        Self {
            success: true,
            value: None,
            error: ErrorKind::None,
        }
    }

    /// Success carrying a looked-up value.
    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            success: true,
            value: Some(value.into()),
            error: ErrorKind::None,
        }
    }

    pub fn failed(error: ErrorKind) -> Self {
        Self {
            success: false,
            value: None,
            error,
        }
    }
}

impl From<Result<()>> for Reply {
    fn from(result: Result<()>) -> Self {
        match result {
            Ok(()) => Reply::ok(),
            Err(e) => Reply::failed(e.kind()),
        }
    }
}

impl From<Result<String>> for Reply {
    fn from(result: Result<String>) -> Self {
        match result {
            Ok(value) => Reply::with_value(value),
            Err(e) => Reply::failed(e.kind()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CacheError;

    #[test]
    fn test_from_unit_result() {
        assert_eq!(Reply::from(Ok::<(), CacheError>(())), Reply::ok());
        let reply = Reply::from(Err::<(), _>(CacheError::InvalidKey("empty".into())));
        assert!(!reply.success);
        assert_eq!(reply.error, ErrorKind::InvalidKey);
    }

    #[test]
    fn test_from_value_result() {
        let reply = Reply::from(Ok::<_, CacheError>("42".to_string()));
        assert_eq!(reply.value.as_deref(), Some("42"));
        assert_eq!(reply.error, ErrorKind::None);

        let reply = Reply::from(Err::<String, _>(CacheError::Expired("k".into())));
        assert_eq!(reply, Reply::failed(ErrorKind::KeyNotFound));
    }

    #[test]
    fn test_reply_serialize() {
        let json = serde_json::to_string(&Reply::with_value("v")).unwrap();
        assert_eq!(json, r#"{"success":true,"value":"v","error":"NONE"}"#);

        let json = serde_json::to_string(&Reply::failed(ErrorKind::KeyNotFound)).unwrap();
        assert_eq!(json, r#"{"success":false,"error":"KEY_NOT_FOUND"}"#);
    }
}
