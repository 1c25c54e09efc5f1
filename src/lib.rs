pub mod config;
pub mod error;
pub mod pipeline;
pub mod scoring;
pub mod types;

pub use config::ScorerConfig;
pub use error::ScoreError;
pub use pipeline::builder::SpeakingScorerBuilder;
pub use pipeline::runtime::SpeakingScorer;
pub use pipeline::traits::{IntonationClassifier, SequenceAligner, Tokenizer};
pub use scoring::align::{align_words, edit_cost};
pub use scoring::intonation::intonation_direction;
pub use scoring::metrics::{accuracy_pct, words_per_minute};
pub use scoring::report::{
    aggregate_reports, compute_attempt_report, op_counts, AggregateCounts, AggregateReport,
    AttemptReport, Meta, MetricDistribution, OpCounts, OutlierEntry, OutlierReport, PaceBand,
    Report,
};
pub use scoring::tokenize::tokenize;
pub use types::{AttemptInput, AttemptScore, IntonationDirection, WordOp, WordStatus};
