/// Normalize raw text into comparable word tokens: lower-case, keep only
/// ASCII letters, digits, apostrophes, and whitespace, then split on
/// whitespace runs. Tokens compare by exact string equality downstream, so
/// everything that should not distinguish two readings is stripped here.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let cleaned: String = lowered
        .chars()
        .filter(|&c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '\'' || c.is_whitespace())
        .collect();
    cleaned.split_whitespace().map(str::to_owned).collect()
}
