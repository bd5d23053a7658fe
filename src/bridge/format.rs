// In: src/bridge/format.rs

//! Defines the record handed back across the host boundary.

use serde::Serialize;

use crate::config::STATUS_PROCESSED;

/// The outcome of one `analyzeText` call.
///
/// Built fresh per call and never mutated: the fields are private and only
/// readable through accessors. Serializes as
/// `{"word_count": <n>, "status": "<status>"}`.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisResult {
    word_count: usize,
    status: &'static str,
}

impl AnalysisResult {
    /// A result produced by the native counting path.
    pub fn processed(word_count: usize) -> Self {
        Self {
            word_count,
            status: STATUS_PROCESSED,
        }
    }

    pub fn word_count(&self) -> usize {
        self.word_count
    }

    pub fn status(&self) -> &'static str {
        self.status
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_with_exactly_two_fields() {
        let value = serde_json::to_value(AnalysisResult::processed(7)).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 2);
        assert_eq!(object["word_count"], 7);
        assert_eq!(object["status"], STATUS_PROCESSED);
    }
}
