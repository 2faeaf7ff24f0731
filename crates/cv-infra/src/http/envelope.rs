use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};

use cv_core::ports::ApiError;

/// Common response wrapper.
#[derive(Debug, Deserialize)]
pub(crate) struct Envelope {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Envelope {
    /// `success: false` becomes [`ApiError::Rejected`] carrying the server message.
    pub fn into_accepted(self) -> Result<Accepted, ApiError> {
        if self.success {
            Ok(Accepted {
                message: self.message,
                fields: self.fields,
            })
        } else {
            Err(ApiError::Rejected {
                message: self.message,
            })
        }
    }
}

/// Payload of a successful response.
#[derive(Debug)]
pub(crate) struct Accepted {
    pub message: Option<String>,
    pub fields: Map<String, Value>,
}

impl Accepted {
    pub fn take<T: DeserializeOwned>(&mut self, key: &str) -> Result<T, ApiError> {
        let value = self
            .fields
            .remove(key)
            .ok_or_else(|| ApiError::Transport(format!("response is missing `{key}`")))?;
        serde_json::from_value(value)
            .map_err(|e| ApiError::Transport(format!("malformed `{key}` in response: {e}")))
    }

    /// Read the payload from the envelope's top level (`{success, balance, ...}`).
    pub fn into_payload<T: DeserializeOwned>(self) -> Result<T, ApiError> {
        serde_json::from_value(Value::Object(self.fields))
            .map_err(|e| ApiError::Transport(format!("malformed response payload: {e}")))
    }

    /// Payload under `key` when present, otherwise at the top level.
    pub fn nested_or_top_level<T: DeserializeOwned>(mut self, key: &str) -> Result<T, ApiError> {
        match self.fields.get(key) {
            Some(Value::Object(_)) => self.take(key),
            _ => self.into_payload(),
        }
    }

    /// Server confirmation, unless blank.
    pub fn into_message(self) -> Option<String> {
        self.message.filter(|m| !m.trim().is_empty())
    }
}
