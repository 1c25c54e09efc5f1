use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use libtest_mimic::{Arguments, Failed, Trial};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Deserialize;
use speakscore_rs::{
    align_words, edit_cost, tokenize, AttemptInput, ScorerConfig, SpeakingScorerBuilder,
    WordStatus,
};

const SUITE_NAME: &str = "scoring_reference";
const PROPERTY_SEED: u64 = 42;
const PROPERTY_ROUNDS: usize = 300;

#[derive(Debug, Clone, Deserialize)]
struct ReferenceCase {
    id: String,
    reference: String,
    transcript: String,
    #[serde(default)]
    duration_sec: f64,
    expected: CaseExpectation,
}

#[derive(Debug, Clone, Deserialize)]
struct CaseExpectation {
    words: Vec<ExpectedWord>,
    accuracy_pct: u8,
    words_per_minute: u32,
    intonation: String,
}

#[derive(Debug, Clone, Deserialize)]
struct ExpectedWord {
    word: String,
    status: String,
}

fn main() {
    let args = Arguments::from_args();

    let repo_root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let cases = match load_cases(&repo_root.join("test-data/cases.json")) {
        Ok(cases) => cases,
        Err(err) => {
            run_setup_failure(&args, err);
            return;
        }
    };
    if cases.is_empty() {
        run_setup_failure(&args, "No cases found in test-data/cases.json.".to_string());
        return;
    }

    let mut tests = Vec::with_capacity(cases.len() + 3);
    for case in cases {
        let test_name = format!("{SUITE_NAME}::case::{}", case.id);
        tests.push(Trial::test(test_name, move || {
            run_reference_case(&case).map_err(Failed::from)
        }));
    }

    tests.push(Trial::test(
        format!("{SUITE_NAME}::property::alignment_invariants"),
        || run_alignment_invariants().map_err(Failed::from),
    ));
    tests.push(Trial::test(
        format!("{SUITE_NAME}::property::identity_alignment"),
        || run_identity_alignment().map_err(Failed::from),
    ));
    tests.push(Trial::test(
        format!("{SUITE_NAME}::property::tokenizer_alphabet"),
        || run_tokenizer_alphabet().map_err(Failed::from),
    ));

    libtest_mimic::run(&args, tests).exit();
}

fn run_setup_failure(args: &Arguments, message: String) {
    let test = Trial::test(format!("{SUITE_NAME}::setup"), move || {
        Err(Failed::from(message))
    });
    libtest_mimic::run(args, vec![test]).exit();
}

fn load_cases(path: &Path) -> Result<Vec<ReferenceCase>, String> {
    let file = File::open(path)
        .map_err(|err| format!("Failed to open fixture '{}': {err}", path.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .map_err(|err| format!("Failed to parse fixture '{}': {err}", path.display()))
}

fn run_reference_case(case: &ReferenceCase) -> Result<(), String> {
    let scorer = SpeakingScorerBuilder::new(ScorerConfig::default())
        .build()
        .map_err(|err| format!("{}: failed to build scorer: {err}", case.id))?;

    let score = scorer.score(&AttemptInput {
        reference: case.reference.clone(),
        transcript: case.transcript.clone(),
        duration_sec: case.duration_sec,
    });

    if score.ops.len() != case.expected.words.len() {
        return Err(format!(
            "{}: op count mismatch (expected {}, got {})",
            case.id,
            case.expected.words.len(),
            score.ops.len()
        ));
    }
    for (idx, (expected, observed)) in case.expected.words.iter().zip(score.ops.iter()).enumerate()
    {
        if observed.word != expected.word || observed.status.as_str() != expected.status {
            return Err(format!(
                "{}: op mismatch at index {idx} (expected '{}'/{}, got '{}'/{})",
                case.id,
                expected.word,
                expected.status,
                observed.word,
                observed.status.as_str()
            ));
        }
    }

    if score.accuracy_pct != case.expected.accuracy_pct {
        return Err(format!(
            "{}: accuracy mismatch (expected {}, got {})",
            case.id, case.expected.accuracy_pct, score.accuracy_pct
        ));
    }
    if score.words_per_minute != case.expected.words_per_minute {
        return Err(format!(
            "{}: wpm mismatch (expected {}, got {})",
            case.id, case.expected.words_per_minute, score.words_per_minute
        ));
    }
    if score.intonation.as_str() != case.expected.intonation {
        return Err(format!(
            "{}: intonation mismatch (expected {}, got {})",
            case.id,
            case.expected.intonation,
            score.intonation.as_str()
        ));
    }

    // The alignment must also agree with the raw tokenization, not just the
    // fixture: every non-inserted op covers one reference token in order.
    let reference_tokens = tokenize(&case.reference);
    let covered: Vec<&str> = score
        .ops
        .iter()
        .filter(|op| op.status.from_reference())
        .map(|op| op.word.as_str())
        .collect();
    let expected_coverage: Vec<&str> = reference_tokens.iter().map(String::as_str).collect();
    if covered != expected_coverage {
        return Err(format!(
            "{}: non-inserted ops do not cover the reference tokens in order",
            case.id
        ));
    }

    Ok(())
}

const PROPERTY_VOCAB: [&str; 12] = [
    "the", "a", "cat", "dog", "sat", "ran", "on", "under", "mat", "rug", "big", "red",
];

fn random_sequence(rng: &mut StdRng, max_len: usize) -> Vec<String> {
    let len = rng.gen_range(0..=max_len);
    (0..len)
        .map(|_| PROPERTY_VOCAB[rng.gen_range(0..PROPERTY_VOCAB.len())].to_string())
        .collect()
}

fn run_alignment_invariants() -> Result<(), String> {
    let mut rng = StdRng::seed_from_u64(PROPERTY_SEED);

    for round in 0..PROPERTY_ROUNDS {
        let reference = random_sequence(&mut rng, 12);
        let hypothesis = random_sequence(&mut rng, 12);
        let ops = align_words(&reference, &hypothesis);

        let from_reference = ops.iter().filter(|op| op.status.from_reference()).count();
        if from_reference != reference.len() {
            return Err(format!(
                "round {round}: reference coverage {from_reference} != {} (ref={reference:?}, hyp={hypothesis:?})",
                reference.len()
            ));
        }
        let from_hypothesis = ops
            .iter()
            .filter(|op| op.status != WordStatus::Deleted)
            .count();
        if from_hypothesis != hypothesis.len() {
            return Err(format!(
                "round {round}: hypothesis coverage {from_hypothesis} != {} (ref={reference:?}, hyp={hypothesis:?})",
                hypothesis.len()
            ));
        }

        // Cost implied by the classified alignment must equal the plain
        // word-level Levenshtein distance computed independently.
        let expected_distance = levenshtein_words(&reference, &hypothesis);
        let observed_cost = edit_cost(&ops);
        if observed_cost != expected_distance {
            return Err(format!(
                "round {round}: edit cost {observed_cost} != levenshtein {expected_distance} (ref={reference:?}, hyp={hypothesis:?})"
            ));
        }
    }
    Ok(())
}

fn run_identity_alignment() -> Result<(), String> {
    let mut rng = StdRng::seed_from_u64(PROPERTY_SEED.wrapping_add(1));

    for round in 0..PROPERTY_ROUNDS {
        let sequence = random_sequence(&mut rng, 16);
        let ops = align_words(&sequence, &sequence);
        if ops.len() != sequence.len() {
            return Err(format!(
                "round {round}: identity alignment length {} != {}",
                ops.len(),
                sequence.len()
            ));
        }
        if !ops.iter().all(|op| op.status == WordStatus::Correct) {
            return Err(format!(
                "round {round}: identity alignment contains non-correct ops ({sequence:?})"
            ));
        }
    }
    Ok(())
}

fn run_tokenizer_alphabet() -> Result<(), String> {
    let mut rng = StdRng::seed_from_u64(PROPERTY_SEED.wrapping_add(2));
    let charset: Vec<char> = "abcXYZ09'?!,. \t-—üé".chars().collect();

    for round in 0..PROPERTY_ROUNDS {
        let len = rng.gen_range(0..40);
        let text: String = (0..len)
            .map(|_| charset[rng.gen_range(0..charset.len())])
            .collect();
        for token in tokenize(&text) {
            if token.is_empty() {
                return Err(format!("round {round}: empty token from {text:?}"));
            }
            if !token
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '\'')
            {
                return Err(format!(
                    "round {round}: token {token:?} outside [a-z0-9'] from {text:?}"
                ));
            }
        }
    }
    Ok(())
}

/// Independent word-level Levenshtein distance with a rolling array, used
/// only to cross-check the classified alignment's implied cost.
fn levenshtein_words(a: &[String], b: &[String]) -> usize {
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }
    let (short, long) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let m = short.len();
    let mut prev: Vec<usize> = (0..=m).collect();
    let mut curr = vec![0usize; m + 1];

    for i in 1..=long.len() {
        curr[0] = i;
        for j in 1..=m {
            let cost = usize::from(long[i - 1] != short[j - 1]);
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[m]
}
