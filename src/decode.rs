//! Entry points turning an API response body into a model.
//!
//! Decoding is pure: the same input always yields the same model or the same
//! error. Unknown keys are ignored so that fields added upstream do not break
//! existing callers.

use std::error::Error as StdError;

use serde::de::DeserializeOwned;
use serde_json::error::Category;
use serde_json::Value;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModelError {
    /// The input is not valid JSON: a syntax error, truncated input, or bytes
    /// that are not UTF-8 anywhere in the document.
    #[error("Malformed JSON input: {0}")]
    MalformedInput(#[source] Box<dyn StdError + Send + Sync>),

    /// The document does not fit the model's shape. Mostly a value whose JSON
    /// type differs from its field's declared type; a key repeated within one
    /// object lands here too, with `field` pointing at that object.
    #[error("Type mismatch at `{field}`: {source}")]
    TypeMismatch {
        /// Path of the offending field, e.g. `troops[2].level`.
        field: String,
        source: serde_json::Error,
    },
}

impl ModelError {
    /// Path of the offending field, for type mismatches.
    pub fn field(&self) -> Option<&str> {
        match self {
            ModelError::MalformedInput(_) => None,
            ModelError::TypeMismatch { field, .. } => Some(field),
        }
    }

    fn from_path_error(err: serde_path_to_error::Error<serde_json::Error>) -> Self {
        let field = err.path().to_string();
        let inner = err.into_inner();

        match inner.classify() {
            Category::Data => ModelError::TypeMismatch {
                field,
                source: inner,
            },
            Category::Syntax | Category::Eof | Category::Io => ModelError::malformed(inner),
        }
    }

    fn malformed(err: impl Into<Box<dyn StdError + Send + Sync>>) -> Self {
        ModelError::MalformedInput(err.into())
    }
}

/// Decodes a model from JSON text.
pub fn from_str<T: DeserializeOwned>(json: &str) -> Result<T, ModelError> {
    let mut de = serde_json::Deserializer::from_str(json);
    let model = serde_path_to_error::deserialize(&mut de).map_err(ModelError::from_path_error)?;
    // Anything but whitespace after the document is a syntax error.
    de.end().map_err(ModelError::malformed)?;

    Ok(model)
}

/// Decodes a model from raw bytes, e.g. a response body that was not turned
/// into a string. Invalid UTF-8 is reported as malformed input.
pub fn from_slice<T: DeserializeOwned>(json: &[u8]) -> Result<T, ModelError> {
    // serde_json skips the values of ignored keys without checking their
    // encoding, so the whole input is validated up front.
    let json = std::str::from_utf8(json).map_err(ModelError::malformed)?;
    from_str(json)
}

/// Decodes a model from an already parsed JSON tree.
///
/// The tree is necessarily well formed, so this can only fail with
/// [`ModelError::TypeMismatch`].
pub fn from_value<T: DeserializeOwned>(value: &Value) -> Result<T, ModelError> {
    serde_path_to_error::deserialize(value).map_err(ModelError::from_path_error)
}
