use speakscore_rs::{AttemptReport, Report, WordStatus};

/// Plain-text rendering for terminal inspection. Word markup: `word` correct,
/// `*word*` substituted, `-word-` deleted, `+word+` inserted.
pub fn print_report(report: &Report) {
    println!(
        "speakscore report  generated_at={}  cases={}  pass_threshold={}%",
        report.meta.generated_at, report.meta.case_count, report.meta.pass_accuracy_pct
    );
    println!();

    for attempt in &report.attempts {
        print_attempt(attempt);
    }

    let counts = &report.aggregates.counts;
    println!(
        "passed {}/{} ({:.0}%)",
        counts.passed,
        counts.total,
        report.aggregates.pass_rate * 100.0
    );
    if let Some(accuracy) = report.aggregates.accuracy_pct.as_ref() {
        println!(
            "accuracy  mean={:.1} p50={:.0} p90={:.0} min={:.0} max={:.0}",
            accuracy.mean, accuracy.p50, accuracy.p90, accuracy.min, accuracy.max
        );
    }
    if let Some(wpm) = report.aggregates.words_per_minute.as_ref() {
        println!(
            "wpm       mean={:.1} p50={:.0} p90={:.0} min={:.0} max={:.0}",
            wpm.mean, wpm.p50, wpm.p90, wpm.min, wpm.max
        );
    }
}

fn print_attempt(attempt: &AttemptReport) {
    let verdict = if attempt.passed { "PASS" } else { "FAIL" };
    let pace = attempt
        .pace
        .map(|band| format!("{band:?}").to_lowercase())
        .unwrap_or_else(|| "unknown".to_string());
    println!(
        "[{verdict}] {}  accuracy={}%  wpm={} ({pace})  intonation={}",
        attempt.id,
        attempt.accuracy_pct,
        attempt.words_per_minute,
        attempt.intonation.as_str()
    );

    let marked: Vec<String> = attempt
        .words
        .iter()
        .map(|op| match op.status {
            WordStatus::Correct => op.word.clone(),
            WordStatus::Substituted => format!("*{}*", op.word),
            WordStatus::Deleted => format!("-{}-", op.word),
            WordStatus::Inserted => format!("+{}+", op.word),
        })
        .collect();
    println!("       {}", marked.join(" "));

    if !attempt.notes.is_empty() {
        println!("       notes: {}", attempt.notes.join(", "));
    }
    println!();
}
