use crate::types::{WordOp, WordStatus};

/// Accuracy as an integer percentage of reference words read correctly.
///
/// The denominator is the non-inserted entry count, which equals the
/// reference length. An empty reference scores 100.
pub fn accuracy_pct(ops: &[WordOp]) -> u8 {
    let correct = ops
        .iter()
        .filter(|op| op.status == WordStatus::Correct)
        .count();
    let reference_len = ops.iter().filter(|op| op.status.from_reference()).count();
    if reference_len == 0 {
        return 100;
    }
    (100.0 * correct as f64 / reference_len as f64).round() as u8
}

/// Speaking rate in words per minute. A non-positive duration carries no
/// rate information and yields 0 rather than an error.
pub fn words_per_minute(word_count: usize, duration_sec: f64) -> u32 {
    if duration_sec <= 0.0 {
        return 0;
    }
    (word_count as f64 / duration_sec * 60.0).round() as u32
}
