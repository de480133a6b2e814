use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use std::{fs, path::PathBuf};

use analysis_engine::{build_plot, summarize, AnalysisError};
use models::{AnalysisMetadata, AnalysisOutput, AppraisalInput};

#[derive(Parser, Debug)]
#[command(
    name = "analyze-appraisal",
    about = "Run the adjustment sensitivity analysis on a parsed appraisal document."
)]
struct Args {
    /// Path to the parsed appraisal JSON (subject_property + comparables)
    #[arg(short, long)]
    input: PathBuf,

    /// Output path for the analysis artifact
    #[arg(short, long, default_value = "analysis/analysis.json")]
    output: PathBuf,

    /// Pretty-print the output JSON
    #[arg(long, default_value_t = false)]
    pretty: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let raw = fs::read_to_string(&args.input)
        .with_context(|| format!("reading {}", args.input.display()))?;
    let doc: AppraisalInput = serde_json::from_str(&raw)
        .with_context(|| format!("parsing {}", args.input.display()))?;

    let summary = match summarize(&doc.comparables) {
        Ok(stats) => Some(stats),
        Err(AnalysisError::NoSaleRecords) => {
            eprintln!("[WARN] no sale records in input; writing empty analysis");
            None
        }
    };
    let plot = build_plot(&doc.comparables, doc.subject_property.as_ref());

    let output = AnalysisOutput {
        metadata: AnalysisMetadata {
            generated_at: Utc::now().to_rfc3339(),
            source: args
                .input
                .file_name()
                .map(|n| n.to_string_lossy().into_owned()),
        },
        summary,
        plot,
    };

    write_analysis(&args.output, &output, args.pretty)?;
    println!("Wrote {}", args.output.display());
    Ok(())
}

/// Writes the analysis artifact, creating parent directories as needed.
fn write_analysis(path: &PathBuf, output: &AnalysisOutput, pretty: bool) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Creating output dir: {}", parent.display()))?;
        }
    }

    let json = if pretty {
        serde_json::to_string_pretty(output)?
    } else {
        serde_json::to_string(output)?
    };

    fs::write(path, json).with_context(|| format!("Writing output file: {}", path.display()))?;
    Ok(())
}
