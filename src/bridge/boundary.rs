// In: src/bridge/boundary.rs

//! The capability every host adapter implements.
//!
//! An adapter knows how to turn the host's argument representation into a Rust
//! string (`decode`) and how to turn an `AnalysisResult` into the host's value
//! representation (`encode`). The counting itself never sees host types.

use serde_json::Value;

use crate::bridge::format::AnalysisResult;
use crate::bridge::stateless_api;
use crate::config::INVALID_ARGUMENT_MESSAGE;
use crate::error::EseError;

/// **CONTRACT:** Translates between one host runtime's values and the core's
/// native input and output types.
pub trait TextBoundary {
    /// The host's representation of the call arguments.
    type Input;
    /// The host's representation of the returned record.
    type Output;

    /// Extracts the text argument. Must fail with `EseError::InvalidArgument`
    /// when the call does not carry exactly one string.
    fn decode(&self, input: Self::Input) -> Result<String, EseError>;

    /// Converts the result into the host's record type.
    fn encode(&self, result: AnalysisResult) -> Result<Self::Output, EseError>;

    /// Runs the counter. Adapters override this to release host locks around
    /// the scan.
    fn scan(&self, text: &str) -> AnalysisResult {
        stateless_api::analyze_text(text)
    }
}

/// A host-free adapter over JSON values.
///
/// The input is the argument list of the call, the output is a JSON object.
/// This is the adapter used when ese-core is driven from Rust or from a
/// message-passing host.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonBoundary;

impl TextBoundary for JsonBoundary {
    type Input = Vec<Value>;
    type Output = Value;

    fn decode(&self, input: Vec<Value>) -> Result<String, EseError> {
        let mut args = input.into_iter();
        match (args.next(), args.next()) {
            (Some(Value::String(text)), None) => Ok(text),
            _ => Err(EseError::InvalidArgument(
                INVALID_ARGUMENT_MESSAGE.to_string(),
            )),
        }
    }

    fn encode(&self, result: AnalysisResult) -> Result<Value, EseError> {
        Ok(serde_json::to_value(result)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_json_decode_accepts_a_single_string() {
        let text = JsonBoundary.decode(vec![json!("a b")]).unwrap();
        assert_eq!(text, "a b");
    }

    #[test]
    fn test_json_decode_rejects_wrong_arity_and_types() {
        let bad_inputs = vec![
            vec![],
            vec![json!(42)],
            vec![json!(null)],
            vec![json!(["a", "b"])],
            vec![json!("a"), json!("b")],
        ];
        for input in bad_inputs {
            let err = JsonBoundary.decode(input.clone()).unwrap_err();
            assert!(
                matches!(err, EseError::InvalidArgument(ref msg) if msg == INVALID_ARGUMENT_MESSAGE),
                "{:?} should be rejected",
                input
            );
        }
    }

    #[test]
    fn test_json_encode_produces_an_object() {
        let value = JsonBoundary.encode(AnalysisResult::processed(3)).unwrap();
        assert_eq!(value["word_count"], 3);
        assert!(value["status"].is_string());
    }
}
