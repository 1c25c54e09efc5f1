use std::cmp::Ordering;

use serde::Serialize;

use crate::config::ScorerConfig;
use crate::types::{AttemptInput, AttemptScore, IntonationDirection, WordOp, WordStatus};

const OUTLIER_TOP_N: usize = 10;

#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub schema_version: u32,
    pub meta: Meta,
    pub attempts: Vec<AttemptReport>,
    pub aggregates: AggregateReport,
}

#[derive(Debug, Clone, Serialize)]
pub struct Meta {
    pub generated_at: String,
    pub case_count: usize,
    pub pass_accuracy_pct: u8,
}

#[derive(Debug, Clone, Serialize)]
pub struct AttemptReport {
    pub id: String,
    pub reference: String,
    pub transcript: String,
    pub words: Vec<WordOp>,
    pub counts: OpCounts,
    pub accuracy_pct: u8,
    pub words_per_minute: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pace: Option<PaceBand>,
    pub intonation: IntonationDirection,
    pub passed: bool,
    pub notes: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct OpCounts {
    pub correct: u32,
    pub substituted: u32,
    pub deleted: u32,
    pub inserted: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PaceBand {
    Slow,
    Normal,
    Fast,
}

#[derive(Debug, Clone, Serialize)]
pub struct AggregateReport {
    pub counts: AggregateCounts,
    pub accuracy_pct: Option<MetricDistribution>,
    pub words_per_minute: Option<MetricDistribution>,
    pub pass_rate: f32,
    pub outliers: OutlierReport,
}

#[derive(Debug, Clone, Serialize)]
pub struct AggregateCounts {
    pub total: u32,
    pub passed: u32,
    pub failed: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct MetricDistribution {
    pub mean: f32,
    pub p50: f32,
    pub p90: f32,
    pub min: f32,
    pub max: f32,
}

#[derive(Debug, Clone, Serialize)]
pub struct OutlierReport {
    pub worst_accuracy_pct: Vec<OutlierEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct OutlierEntry {
    pub id: String,
    pub value: f32,
}

pub fn op_counts(ops: &[WordOp]) -> OpCounts {
    let mut counts = OpCounts::default();
    for op in ops {
        match op.status {
            WordStatus::Correct => counts.correct += 1,
            WordStatus::Substituted => counts.substituted += 1,
            WordStatus::Deleted => counts.deleted += 1,
            WordStatus::Inserted => counts.inserted += 1,
        }
    }
    counts
}

pub fn compute_attempt_report(
    id: &str,
    input: &AttemptInput,
    score: &AttemptScore,
    config: &ScorerConfig,
) -> AttemptReport {
    let mut notes = Vec::new();
    if input.reference.trim().is_empty() {
        notes.push("empty_reference".to_string());
    }
    if input.transcript.trim().is_empty() {
        notes.push("empty_transcript".to_string());
    }

    let pace = if input.duration_sec > 0.0 {
        Some(pace_band(score.words_per_minute, config))
    } else {
        notes.push("unknown_duration".to_string());
        None
    };

    AttemptReport {
        id: id.to_string(),
        reference: input.reference.clone(),
        transcript: input.transcript.clone(),
        words: score.ops.clone(),
        counts: op_counts(&score.ops),
        accuracy_pct: score.accuracy_pct,
        words_per_minute: score.words_per_minute,
        pace,
        intonation: score.intonation,
        passed: score.accuracy_pct >= config.pass_accuracy_pct,
        notes,
    }
}

fn pace_band(words_per_minute: u32, config: &ScorerConfig) -> PaceBand {
    if words_per_minute < config.slow_wpm {
        PaceBand::Slow
    } else if words_per_minute > config.fast_wpm {
        PaceBand::Fast
    } else {
        PaceBand::Normal
    }
}

pub fn aggregate_reports(attempts: &[AttemptReport]) -> AggregateReport {
    let passed = attempts.iter().filter(|attempt| attempt.passed).count();
    let total = attempts.len();

    let accuracy_values: Vec<f64> = attempts
        .iter()
        .map(|attempt| attempt.accuracy_pct as f64)
        .collect();
    let wpm_values: Vec<f64> = attempts
        .iter()
        .map(|attempt| attempt.words_per_minute as f64)
        .collect();

    let pass_rate = if total == 0 {
        0.0
    } else {
        passed as f32 / total as f32
    };

    AggregateReport {
        counts: AggregateCounts {
            total: to_u32(total),
            passed: to_u32(passed),
            failed: to_u32(total - passed),
        },
        accuracy_pct: distribution_or_none(&accuracy_values),
        words_per_minute: distribution_or_none(&wpm_values),
        pass_rate,
        outliers: OutlierReport {
            worst_accuracy_pct: worst_accuracy(attempts, OUTLIER_TOP_N),
        },
    }
}

/// Lowest-accuracy attempts, worst first, ties broken by id so report output
/// is stable across runs.
fn worst_accuracy(attempts: &[AttemptReport], top_n: usize) -> Vec<OutlierEntry> {
    let mut entries: Vec<OutlierEntry> = attempts
        .iter()
        .map(|attempt| OutlierEntry {
            id: attempt.id.clone(),
            value: attempt.accuracy_pct as f32,
        })
        .collect();

    entries.sort_by(|a, b| {
        a.value
            .partial_cmp(&b.value)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.id.cmp(&b.id))
    });
    entries.truncate(top_n);
    entries
}

fn distribution_or_none(values: &[f64]) -> Option<MetricDistribution> {
    if values.is_empty() {
        return None;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));

    Some(MetricDistribution {
        mean: mean(&sorted) as f32,
        p50: percentile_sorted(&sorted, 0.5) as f32,
        p90: percentile_sorted(&sorted, 0.9) as f32,
        min: sorted[0] as f32,
        max: sorted[sorted.len() - 1] as f32,
    })
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

fn percentile_sorted(sorted_values: &[f64], percentile: f64) -> f64 {
    if sorted_values.is_empty() {
        return 0.0;
    }
    if sorted_values.len() == 1 {
        return sorted_values[0];
    }

    let clamped = percentile.clamp(0.0, 1.0);
    let max_index = (sorted_values.len() - 1) as f64;
    let rank = clamped * max_index;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;
    if lower == upper {
        sorted_values[lower]
    } else {
        let weight = rank - lower as f64;
        sorted_values[lower] * (1.0 - weight) + sorted_values[upper] * weight
    }
}

fn to_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}
