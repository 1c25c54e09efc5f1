use crate::types::IntonationDirection;

/// Leading words that mark a wh-question. Fixed table; matched
/// case-insensitively as a whole leading word.
const WH_WORDS: [&str; 9] = [
    "what", "where", "when", "who", "whom", "whose", "which", "why", "how",
];

/// Classify the likely intonation direction of a sentence from its written
/// form. Yes/no questions (trailing `?`, no leading wh-word) rise; statements,
/// wh-questions, and exclamations fall. A lexical heuristic over the leading
/// word and trailing punctuation only; it does not parse grammar.
pub fn intonation_direction(text: &str) -> IntonationDirection {
    let trimmed = text.trim();
    if trimmed.ends_with('?') && !starts_with_wh_word(trimmed) {
        return IntonationDirection::Rising;
    }
    IntonationDirection::Falling
}

fn starts_with_wh_word(text: &str) -> bool {
    let lowered = text.to_lowercase();
    WH_WORDS.iter().any(|wh| {
        lowered
            .strip_prefix(wh)
            .is_some_and(|rest| match rest.chars().next() {
                None => true,
                Some(c) => !(c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_'),
            })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yes_no_question_rises() {
        assert_eq!(
            intonation_direction("Are you ready?"),
            IntonationDirection::Rising
        );
        assert_eq!(
            intonation_direction("Could you say that again?"),
            IntonationDirection::Rising
        );
    }

    #[test]
    fn wh_question_falls() {
        assert_eq!(
            intonation_direction("What time is it?"),
            IntonationDirection::Falling
        );
        assert_eq!(
            intonation_direction("how are you?"),
            IntonationDirection::Falling
        );
        assert_eq!(
            intonation_direction("Whose coat is this?"),
            IntonationDirection::Falling
        );
    }

    #[test]
    fn statement_falls() {
        assert_eq!(
            intonation_direction("I am ready."),
            IntonationDirection::Falling
        );
        assert_eq!(
            intonation_direction("Watch out!"),
            IntonationDirection::Falling
        );
    }

    #[test]
    fn trailing_whitespace_is_trimmed_before_the_check() {
        assert_eq!(
            intonation_direction("  Is that so?  "),
            IntonationDirection::Rising
        );
    }

    #[test]
    fn empty_text_falls() {
        assert_eq!(intonation_direction(""), IntonationDirection::Falling);
        assert_eq!(intonation_direction("   "), IntonationDirection::Falling);
    }

    #[test]
    fn wh_prefix_without_word_boundary_does_not_count() {
        // "whoever" is not in the table and "who" does not end at a word
        // boundary here, so this reads as a yes/no shape.
        assert_eq!(
            intonation_direction("Whoever said that?"),
            IntonationDirection::Rising
        );
    }

    #[test]
    fn contracted_wh_word_still_counts() {
        // "who's" boundary falls at the apostrophe.
        assert_eq!(
            intonation_direction("Who's there?"),
            IntonationDirection::Falling
        );
    }
}
