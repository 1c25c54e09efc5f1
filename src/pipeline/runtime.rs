use crate::config::ScorerConfig;
use crate::pipeline::traits::{IntonationClassifier, SequenceAligner, Tokenizer};
use crate::scoring::metrics::{accuracy_pct, words_per_minute};
use crate::types::{AttemptInput, AttemptScore, WordStatus};

pub struct SpeakingScorer {
    config: ScorerConfig,
    tokenizer: Box<dyn Tokenizer>,
    sequence_aligner: Box<dyn SequenceAligner>,
    intonation_classifier: Box<dyn IntonationClassifier>,
}

pub(crate) struct SpeakingScorerParts {
    pub config: ScorerConfig,
    pub tokenizer: Box<dyn Tokenizer>,
    pub sequence_aligner: Box<dyn SequenceAligner>,
    pub intonation_classifier: Box<dyn IntonationClassifier>,
}

impl SpeakingScorer {
    pub(crate) fn from_parts(parts: SpeakingScorerParts) -> Self {
        Self {
            config: parts.config,
            tokenizer: parts.tokenizer,
            sequence_aligner: parts.sequence_aligner,
            intonation_classifier: parts.intonation_classifier,
        }
    }

    pub fn config(&self) -> &ScorerConfig {
        &self.config
    }

    /// Score one attempt. Total over any input: empty texts and non-positive
    /// durations follow the documented edge-case rules instead of failing.
    pub fn score(&self, input: &AttemptInput) -> AttemptScore {
        if input.duration_sec <= 0.0 {
            tracing::warn!(
                duration_sec = input.duration_sec,
                "attempt has no usable duration; speaking rate reported as 0"
            );
        }

        let reference = self.tokenizer.tokenize(&input.reference);
        let hypothesis = self.tokenizer.tokenize(&input.transcript);
        tracing::debug!(
            reference_words = reference.len(),
            hypothesis_words = hypothesis.len(),
            "scoring attempt"
        );

        let ops = self.sequence_aligner.align(&reference, &hypothesis);
        debug_assert_eq!(
            ops.iter().filter(|op| op.status.from_reference()).count(),
            reference.len(),
            "alignment must cover every reference token exactly once"
        );
        debug_assert_eq!(
            ops.iter()
                .filter(|op| op.status != WordStatus::Deleted)
                .count(),
            hypothesis.len(),
            "alignment must cover every hypothesis token exactly once"
        );

        AttemptScore {
            accuracy_pct: accuracy_pct(&ops),
            words_per_minute: words_per_minute(hypothesis.len(), input.duration_sec),
            intonation: self.intonation_classifier.classify(&input.reference),
            ops,
        }
    }
}
