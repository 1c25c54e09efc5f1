use crate::types::{WordOp, WordStatus};

/// Word-level minimum-edit alignment between a reference and a hypothesis
/// token sequence. Unit cost for insertion, deletion, and substitution; zero
/// cost for an exact match.
///
/// Ties in the backtrack prefer insertion, then deletion, then substitution.
/// Multiple minimum-cost alignments exist and downstream feedback depends on
/// which one is chosen, so this order must stay stable.
pub fn align_words(reference: &[String], hypothesis: &[String]) -> Vec<WordOp> {
    let n = reference.len();
    let m = hypothesis.len();

    let mut dist = vec![vec![0usize; m + 1]; n + 1];
    for (j, cell) in dist[0].iter_mut().enumerate() {
        *cell = j;
    }
    for (i, row) in dist.iter_mut().enumerate() {
        row[0] = i;
    }
    for i in 1..=n {
        for j in 1..=m {
            dist[i][j] = if reference[i - 1] == hypothesis[j - 1] {
                dist[i - 1][j - 1]
            } else {
                1 + dist[i - 1][j - 1].min(dist[i - 1][j]).min(dist[i][j - 1])
            };
        }
    }

    let mut ops = Vec::with_capacity(n.max(m));
    let mut i = n;
    let mut j = m;
    while i > 0 || j > 0 {
        if i > 0 && j > 0 && reference[i - 1] == hypothesis[j - 1] {
            ops.push(WordOp::new(reference[i - 1].clone(), WordStatus::Correct));
            i -= 1;
            j -= 1;
        } else if j > 0
            && (i == 0 || (dist[i][j - 1] <= dist[i - 1][j] && dist[i][j - 1] <= dist[i - 1][j - 1]))
        {
            ops.push(WordOp::new(hypothesis[j - 1].clone(), WordStatus::Inserted));
            j -= 1;
        } else if i > 0
            && (j == 0 || (dist[i - 1][j] <= dist[i][j - 1] && dist[i - 1][j] <= dist[i - 1][j - 1]))
        {
            ops.push(WordOp::new(reference[i - 1].clone(), WordStatus::Deleted));
            i -= 1;
        } else {
            ops.push(WordOp::new(
                reference[i - 1].clone(),
                WordStatus::Substituted,
            ));
            i -= 1;
            j -= 1;
        }
    }
    ops.reverse();
    ops
}

/// Number of non-match edits implied by an alignment. Equals the word-level
/// Levenshtein distance between the two sequences that produced it.
pub fn edit_cost(ops: &[WordOp]) -> usize {
    ops.iter()
        .filter(|op| op.status != WordStatus::Correct)
        .count()
}
