use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use chrono::Utc;
use clap::{Parser, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use serde::Deserialize;
use speakscore_rs::{
    aggregate_reports, compute_attempt_report, AttemptInput, AttemptReport, Meta, Report,
    ScorerConfig, SpeakingScorerBuilder,
};

#[path = "score_report/json_report_formatter.rs"]
mod json_report_formatter;
#[path = "score_report/text_report_formatter.rs"]
mod text_report_formatter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Json,
    Text,
}

#[derive(Debug, Parser)]
#[command(name = "score_report")]
#[command(about = "Score transcribed speaking attempts against their reference sentences")]
struct Args {
    #[arg(
        long,
        env = "SPEAKSCORE_REPORT_CASES",
        default_value = "test-data/cases.json"
    )]
    cases: PathBuf,
    #[arg(long, env = "SPEAKSCORE_REPORT_CONFIG")]
    config: Option<PathBuf>,
    #[arg(long, env = "SPEAKSCORE_REPORT_OUT")]
    out: Option<PathBuf>,
    #[arg(long, env = "SPEAKSCORE_REPORT_LIMIT")]
    limit: Option<usize>,
    #[arg(long, env = "SPEAKSCORE_REPORT_OFFSET", default_value_t = 0)]
    offset: usize,
    #[arg(
        long,
        env = "SPEAKSCORE_REPORT_FORMAT",
        value_enum,
        default_value_t = OutputFormat::Json
    )]
    output_format: OutputFormat,
}

#[derive(Debug, Clone, Deserialize)]
struct Case {
    id: String,
    reference: String,
    transcript: String,
    #[serde(default)]
    duration_sec: f64,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = Args::parse();
    let repo_root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));

    let config = match args.config.as_ref() {
        Some(path) => ScorerConfig::load(&resolve_path(&repo_root, path))
            .map_err(|err| format!("Failed to load scorer config: {err}"))?,
        None => ScorerConfig::default(),
    };

    let cases_path = resolve_path(&repo_root, &args.cases);
    let mut cases = load_cases(&cases_path)?;

    if args.offset > 0 {
        cases = cases.into_iter().skip(args.offset).collect();
    }
    if let Some(limit) = args.limit {
        cases.truncate(limit);
    }
    if cases.is_empty() {
        return Err("No cases selected after applying offset/limit.".to_string());
    }

    let pass_accuracy_pct = config.pass_accuracy_pct;
    let scorer = SpeakingScorerBuilder::new(config)
        .build()
        .map_err(|err| format!("Failed to build scorer: {err}"))?;

    let progress = ProgressBar::new(cases.len() as u64);
    progress.set_style(
        ProgressStyle::with_template(
            "[{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} ({eta}) {msg}",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("=>-"),
    );
    progress.set_message("starting...");

    let mut attempts: Vec<AttemptReport> = Vec::with_capacity(cases.len());
    for case in &cases {
        progress.set_message(case.id.clone());
        let input = AttemptInput {
            reference: case.reference.clone(),
            transcript: case.transcript.clone(),
            duration_sec: case.duration_sec,
        };
        let score = scorer.score(&input);
        attempts.push(compute_attempt_report(&case.id, &input, &score, scorer.config()));
        progress.inc(1);
    }
    progress.finish_with_message("scoring pass complete");

    let aggregates = aggregate_reports(&attempts);
    let report = Report {
        schema_version: 1,
        meta: Meta {
            generated_at: Utc::now().to_rfc3339(),
            case_count: attempts.len(),
            pass_accuracy_pct,
        },
        attempts,
        aggregates,
    };

    match args.output_format {
        OutputFormat::Json => {
            let out_path = resolve_out_path(&repo_root, args.out.as_ref());
            json_report_formatter::write_report(&out_path, &report)?;
            println!("{}", out_path.display());
        }
        OutputFormat::Text => {
            text_report_formatter::print_report(&report);
        }
    }

    Ok(())
}

fn load_cases(path: &Path) -> Result<Vec<Case>, String> {
    let file = File::open(path)
        .map_err(|err| format!("Failed to open cases file '{}': {err}", path.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .map_err(|err| format!("Failed to parse cases file '{}': {err}", path.display()))
}

fn resolve_path(repo_root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        repo_root.join(path)
    }
}

fn resolve_out_path(repo_root: &Path, out: Option<&PathBuf>) -> PathBuf {
    match out {
        Some(path) => resolve_path(repo_root, path),
        None => repo_root.join("reports/score-report.json"),
    }
}
