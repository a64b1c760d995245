use std::path::PathBuf;

use chrono::Utc;
use clap::Parser;
use tasmee_rs::{
    build_report, load_session, AlignConfig, AlignmentError, RecitationAlignerBuilder,
};

#[derive(Debug, Parser)]
#[command(name = "tasmee_report")]
#[command(about = "Align a recorded recitation session and emit a JSON verdict report")]
struct Args {
    /// Session JSON: verse structure plus the spoken tokens of one attempt.
    #[arg(long, env = "TASMEE_REPORT_SESSION")]
    session: PathBuf,
    /// Scoring config JSON; defaults are used when omitted.
    #[arg(long, env = "TASMEE_REPORT_CONFIG")]
    config: Option<PathBuf>,
    /// Write the report to this path instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,
    /// Pretty-print the JSON output.
    #[arg(long)]
    pretty: bool,
}

fn main() {
    let args = Args::parse();
    if let Err(err) = run(&args) {
        eprintln!("tasmee_report: {err}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), AlignmentError> {
    let config = match &args.config {
        Some(path) => AlignConfig::load(path)?,
        None => AlignConfig::default(),
    };

    let session = load_session(&args.session)?;
    let aligner = RecitationAlignerBuilder::new(config).build()?;
    let outcome = aligner.align_with_steps(&session.verses, &session.spoken_tokens);
    let report = build_report(&outcome, session.spoken_tokens.len(), Utc::now().to_rfc3339());

    let json = if args.pretty {
        serde_json::to_string_pretty(&report)
    } else {
        serde_json::to_string(&report)
    }
    .map_err(|e| AlignmentError::Json {
        context: "serialize report",
        source: e,
    })?;

    match &args.out {
        Some(path) => std::fs::write(path, json).map_err(|e| AlignmentError::Io {
            context: "write report file",
            source: e,
        })?,
        None => println!("{json}"),
    }

    Ok(())
}
