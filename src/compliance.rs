//! Regulatory disclaimer guard
//!
//! Every response that leaves the engine must carry the disclaimer exactly
//! once, no matter which synthesis path produced it.

/// Full disclaimer sentence appended to responses.
pub const DISCLAIMER: &str =
    "This analysis is informational only and is not investment advice.";

/// Distinguishing substring used for the presence check.
pub const DISCLAIMER_MARKER: &str = "not investment advice";

/// Append the disclaimer iff its marker is not already present.
///
/// Idempotent: repeated application, or application to text that already
/// embeds the disclaimer (the default overview does), never doubles it.
pub fn ensure_disclaimer(text: String) -> String {
    if text.contains(DISCLAIMER_MARKER) {
        text
    } else {
        format!("{}\n\n{}", text.trim_end(), DISCLAIMER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count_disclaimers(text: &str) -> usize {
        text.matches(DISCLAIMER_MARKER).count()
    }

    #[test]
    fn test_appends_when_absent() {
        let out = ensure_disclaimer("Your drawdown is -8.2%.".to_string());
        assert_eq!(count_disclaimers(&out), 1);
        assert!(out.ends_with(DISCLAIMER));
    }

    #[test]
    fn test_idempotent() {
        let once = ensure_disclaimer("Some analysis.".to_string());
        let twice = ensure_disclaimer(once.clone());
        assert_eq!(once, twice);
        assert_eq!(count_disclaimers(&twice), 1);
    }

    #[test]
    fn test_respects_embedded_disclaimer() {
        let embedded = format!("Overview text. {}", DISCLAIMER);
        let out = ensure_disclaimer(embedded.clone());
        assert_eq!(out, embedded);
        assert_eq!(count_disclaimers(&out), 1);
    }
}
