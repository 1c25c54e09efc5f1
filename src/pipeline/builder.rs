use crate::config::ScorerConfig;
use crate::error::ScoreError;
use crate::pipeline::defaults::{
    AsciiWordTokenizer, EditDistanceAligner, WhWordIntonationClassifier,
};
use crate::pipeline::runtime::{SpeakingScorer, SpeakingScorerParts};
use crate::pipeline::traits::{IntonationClassifier, SequenceAligner, Tokenizer};

pub struct SpeakingScorerBuilder {
    config: ScorerConfig,
    tokenizer: Option<Box<dyn Tokenizer>>,
    sequence_aligner: Option<Box<dyn SequenceAligner>>,
    intonation_classifier: Option<Box<dyn IntonationClassifier>>,
}

impl SpeakingScorerBuilder {
    pub fn new(config: ScorerConfig) -> Self {
        Self {
            config,
            tokenizer: None,
            sequence_aligner: None,
            intonation_classifier: None,
        }
    }

    pub fn with_tokenizer(mut self, tokenizer: Box<dyn Tokenizer>) -> Self {
        self.tokenizer = Some(tokenizer);
        self
    }

    pub fn with_sequence_aligner(mut self, sequence_aligner: Box<dyn SequenceAligner>) -> Self {
        self.sequence_aligner = Some(sequence_aligner);
        self
    }

    pub fn with_intonation_classifier(
        mut self,
        intonation_classifier: Box<dyn IntonationClassifier>,
    ) -> Self {
        self.intonation_classifier = Some(intonation_classifier);
        self
    }

    pub fn build(self) -> Result<SpeakingScorer, ScoreError> {
        self.config.validate()?;

        Ok(SpeakingScorer::from_parts(SpeakingScorerParts {
            config: self.config,
            tokenizer: self
                .tokenizer
                .unwrap_or_else(|| Box::new(AsciiWordTokenizer)),
            sequence_aligner: self
                .sequence_aligner
                .unwrap_or_else(|| Box::new(EditDistanceAligner)),
            intonation_classifier: self
                .intonation_classifier
                .unwrap_or_else(|| Box::new(WhWordIntonationClassifier)),
        }))
    }
}
