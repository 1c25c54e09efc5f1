use crate::pipeline::traits::{IntonationClassifier, SequenceAligner, Tokenizer};
use crate::scoring::align::align_words;
use crate::scoring::intonation::intonation_direction;
use crate::scoring::tokenize::tokenize;
use crate::types::{IntonationDirection, WordOp};

pub struct AsciiWordTokenizer;

impl Tokenizer for AsciiWordTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        tokenize(text)
    }
}

pub struct EditDistanceAligner;

impl SequenceAligner for EditDistanceAligner {
    fn align(&self, reference: &[String], hypothesis: &[String]) -> Vec<WordOp> {
        align_words(reference, hypothesis)
    }
}

pub struct WhWordIntonationClassifier;

impl IntonationClassifier for WhWordIntonationClassifier {
    fn classify(&self, reference_text: &str) -> IntonationDirection {
        intonation_direction(reference_text)
    }
}
