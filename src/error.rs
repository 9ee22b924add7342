//! Crate error type and boundary helpers.
//!
//! Decoding fails only for structural problems (malformed JSON, type
//! mismatch, missing required key); everything else the spec calls
//! "validation" is opt-in via [`validator::Validate`]. `decode_validated`
//! bundles both steps for callers that want a single boundary check.

use serde::de::DeserializeOwned;
use serde::Serialize;
use validator::Validate;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The wire payload is structurally malformed: not JSON, wrong type for
    /// a field, or a required key is absent.
    #[error("malformed payload: {0}")]
    Json(#[from] serde_json::Error),

    /// The payload decoded but violates a spec rule the type system cannot
    /// express (empty required array, asset with no media variant, ...).
    #[error("invalid object: {0}")]
    Validation(#[from] validator::ValidationErrors),
}

/// Decodes a JSON payload and runs the object's validation rules.
pub fn decode_validated<T>(payload: &[u8]) -> Result<T, Error>
where
    T: DeserializeOwned + Validate,
{
    let value: T = serde_json::from_slice(payload)?;
    value.validate()?;
    Ok(value)
}

/// Encodes an object to its JSON wire form.
pub fn encode<T: Serialize>(value: &T) -> Result<String, Error> {
    Ok(serde_json::to_string(value)?)
}

#[cfg(test)]
mod tests {
    use crate::request::BidRequest;

    use super::*;

    #[test]
    fn structural_failure_is_json_error() {
        let err = decode_validated::<BidRequest>(b"{not json").unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn missing_required_key_is_json_error() {
        // `id` is required; serde reports it as a structural failure.
        let err = decode_validated::<BidRequest>(b"{\"imp\":[]}").unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn empty_imp_is_validation_error() {
        let err = decode_validated::<BidRequest>(b"{\"id\":\"r1\",\"imp\":[]}").unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }
}
