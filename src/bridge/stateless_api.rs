// In: src/bridge/stateless_api.rs

use crate::bridge::boundary::TextBoundary;
use crate::bridge::format::AnalysisResult;
use crate::config::GREETING;
use crate::error::EseError;
use crate::kernels::word_count;

/// The fixed greeting exposed as `hello()`.
pub fn hello() -> &'static str {
    GREETING
}

/// Counts the words in `text` and wraps the count in an `AnalysisResult`.
/// Never fails.
pub fn analyze_text(text: &str) -> AnalysisResult {
    let word_count = word_count::count_words(text);
    log_metric!("event" = "analyze_text", "bytes" = text.len(), "word_count" = word_count);
    AnalysisResult::processed(word_count)
}

/// Drives one full call through a host adapter: decode the arguments, count,
/// encode the result. Argument errors surface before any counting happens.
pub fn analyze_with<B: TextBoundary>(boundary: &B, input: B::Input) -> Result<B::Output, EseError> {
    // 1. Marshal the host's arguments into a native string.
    let text = boundary.decode(input)?;

    // 2. Run the pure kernel.
    let result = boundary.scan(&text);

    // 3. Hand the record back in the host's representation.
    boundary.encode(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::STATUS_PROCESSED;

    #[test]
    fn test_analyze_text_sets_fixed_status() {
        let result = analyze_text("  hello   world  ");
        assert_eq!(result.word_count(), 2);
        assert_eq!(result.status(), STATUS_PROCESSED);
        assert_eq!(analyze_text("").status(), STATUS_PROCESSED);
    }

    #[test]
    fn test_hello_is_constant() {
        assert_eq!(hello(), GREETING);
        assert_eq!(hello(), hello());
    }
}
