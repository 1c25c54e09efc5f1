use serde::Serialize;

/// One learner attempt at a known reference sentence, with the transcript
/// produced by the external speech-to-text collaborator.
#[derive(Debug, Clone)]
pub struct AttemptInput {
    pub reference: String,
    pub transcript: String,
    /// Recording length in seconds. Non-positive means unknown; the speaking
    /// rate is reported as 0 in that case.
    pub duration_sec: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WordStatus {
    Correct,
    Substituted,
    Deleted,
    Inserted,
}

impl WordStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Correct => "correct",
            Self::Substituted => "substituted",
            Self::Deleted => "deleted",
            Self::Inserted => "inserted",
        }
    }

    /// Entries other than `Inserted` originate from the reference sequence.
    pub fn from_reference(self) -> bool {
        self != Self::Inserted
    }
}

/// One classified alignment element. `Correct`/`Substituted`/`Deleted`
/// entries carry the reference word; `Inserted` entries carry the hypothesis
/// word and have no reference counterpart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordOp {
    pub word: String,
    pub status: WordStatus,
}

impl WordOp {
    pub fn new(word: impl Into<String>, status: WordStatus) -> Self {
        Self {
            word: word.into(),
            status,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IntonationDirection {
    Rising,
    Falling,
}

impl IntonationDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Rising => "rising",
            Self::Falling => "falling",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AttemptScore {
    /// Ordered alignment; excluding insertions it covers every reference
    /// token exactly once, in original order.
    pub ops: Vec<WordOp>,
    pub accuracy_pct: u8,
    pub words_per_minute: u32,
    pub intonation: IntonationDirection,
}
