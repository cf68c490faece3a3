//! Response envelopes used by the collection endpoints.
//!
//! Reads wrap the collection in a top-level `data` field, mutations answer
//! with a human readable `message` (and, where the server has one, the
//! stored record in `data`). Errors are a bare `{ "message": ... }` body.

use serde::{Deserialize, Serialize};

/// `GET /{resource}` body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListEnvelope<T> {
    pub data: Option<Vec<T>>,
}

impl<T> ListEnvelope<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { data: Some(items) }
    }

    /// Items of the envelope, empty when the server omitted `data`
    pub fn into_items(self) -> Vec<T> {
        self.data.unwrap_or_default()
    }
}

/// `POST`/`PUT`/`DELETE` body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MutationEnvelope<T> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> MutationEnvelope<T> {
    pub fn new(message: impl Into<String>, data: Option<T>) -> Self {
        Self {
            message: Some(message.into()),
            data,
        }
    }
}

/// Body of any non-2xx response
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_data_is_empty_list() {
        let env: ListEnvelope<i64> = serde_json::from_str("{}").unwrap();
        assert!(env.into_items().is_empty());

        let env: ListEnvelope<i64> = serde_json::from_str(r#"{"data":[1,2]}"#).unwrap();
        assert_eq!(env.into_items(), vec![1, 2]);
    }

    #[test]
    fn test_mutation_envelope_omits_empty_fields() {
        let env: MutationEnvelope<i64> = MutationEnvelope {
            message: None,
            data: None,
        };
        assert_eq!(serde_json::to_string(&env).unwrap(), "{}");

        let env: MutationEnvelope<i64> = serde_json::from_str(r#"{"message":"ok"}"#).unwrap();
        assert_eq!(env.message.as_deref(), Some("ok"));
        assert!(env.data.is_none());
    }
}
