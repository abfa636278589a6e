//! Compose step for the name form
//!
//! Blankness is decided on trimmed input, but the composed name keeps the
//! values exactly as typed.

/// True when `s` is empty or contains only whitespace.
pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// How many of the two name fields hold non-blank text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    Empty,
    Partial,
    Complete,
}

impl FormState {
    pub fn classify(first: &str, last: &str) -> Self {
        match (is_blank(first), is_blank(last)) {
            (true, true) => FormState::Empty,
            (false, false) => FormState::Complete,
            _ => FormState::Partial,
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, FormState::Complete)
    }
}

/// Join first and last name with a single space.
///
/// Returns `None` unless both parts are non-blank.
pub fn compose_full_name(first: &str, last: &str) -> Option<String> {
    if FormState::classify(first, last).is_complete() {
        Some(format!("{} {}", first, last))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("", true)]
    #[case("   ", true)]
    #[case("\t\n", true)]
    #[case("\u{3000}", true)]
    #[case("a", false)]
    #[case("  a  ", false)]
    fn test_is_blank(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(is_blank(input), expected);
    }

    #[rstest]
    #[case("", "", FormState::Empty)]
    #[case(" ", "\t", FormState::Empty)]
    #[case("John", "", FormState::Partial)]
    #[case("", "Doe", FormState::Partial)]
    #[case("John", "  ", FormState::Partial)]
    #[case("John", "Doe", FormState::Complete)]
    fn test_classify(#[case] first: &str, #[case] last: &str, #[case] expected: FormState) {
        assert_eq!(FormState::classify(first, last), expected);
    }

    #[test]
    fn test_compose_joins_with_single_space() {
        assert_eq!(compose_full_name("John", "Doe"), Some("John Doe".to_string()));
    }

    #[test]
    fn test_compose_keeps_untrimmed_values() {
        assert_eq!(
            compose_full_name(" John", "Doe "),
            Some(" John Doe ".to_string())
        );
    }

    #[test]
    fn test_compose_special_characters() {
        assert_eq!(
            compose_full_name("Jean-Pierre", "O'Connor123"),
            Some("Jean-Pierre O'Connor123".to_string())
        );
    }

    #[rstest]
    #[case("", "Doe")]
    #[case("John", "")]
    #[case("", "")]
    #[case("   ", "Doe")]
    #[case("John", "\t")]
    fn test_compose_rejects_blank(#[case] first: &str, #[case] last: &str) {
        assert_eq!(compose_full_name(first, last), None);
    }

    #[test]
    fn test_compose_accepts_arbitrary_text() {
        assert_eq!(
            compose_full_name("Zoë", "Łukasiewicz"),
            Some("Zoë Łukasiewicz".to_string())
        );
    }
}
