use anyhow::{Context, Result};
use serde::Serialize;
use std::io::Read;
use std::path::{Path, PathBuf};

use volley_insight::config::{Config, OutputFormat};
use volley_insight::engine::metrics::research_reference;
use volley_insight::{analyze_game, AnalysisResult, RawStats};

const USAGE: &str = "usage: volley-insight [--config PATH] [--json] [--validate] [--reference] <STATS.json | ->";

#[derive(Debug, Default)]
struct Args {
    config: Option<PathBuf>,
    json: bool,
    validate: bool,
    reference: bool,
    input: Option<String>,
}

fn parse_args() -> Result<Args> {
    let mut args = Args::default();
    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" => {
                let path = iter.next().context("--config needs a path")?;
                args.config = Some(PathBuf::from(path));
            }
            "--json" => args.json = true,
            "--validate" => args.validate = true,
            "--reference" => args.reference = true,
            "-h" | "--help" => {
                println!("{USAGE}");
                std::process::exit(0);
            }
            _ if arg.starts_with("--") => anyhow::bail!("unknown flag {arg}\n{USAGE}"),
            _ => args.input = Some(arg),
        }
    }
    Ok(args)
}

/// JSON output envelope.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Report<'a> {
    analyzed_at: chrono::DateTime<chrono::Utc>,
    #[serde(flatten)]
    result: &'a AnalysisResult,
}

fn read_stats(input: &str) -> Result<RawStats> {
    if input == "-" {
        let mut raw = String::new();
        std::io::stdin()
            .read_to_string(&mut raw)
            .context("Failed to read stats from stdin")?;
        RawStats::from_json(&raw)
    } else {
        RawStats::load(Path::new(input))
    }
}

fn init_logging(config: &Config) -> Result<()> {
    let builder = tracing_subscriber::fmt().with_env_filter(config.logging.filter.as_str());
    match &config.logging.log_file {
        Some(path) => {
            let log_file = std::fs::File::create(path)
                .with_context(|| format!("Failed to create log file: {}", path.display()))?;
            builder.with_writer(log_file).init();
        }
        None => builder.with_writer(std::io::stderr).init(),
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = parse_args()?;
    let config = Config::resolve(args.config.as_deref())?;
    init_logging(&config)?;

    if args.reference {
        print!("{}", research_reference());
        return Ok(());
    }

    let input = args.input.context(USAGE)?;
    let stats = read_stats(&input)?;
    if args.validate {
        stats.validate()?;
    }

    let result = analyze_game(&stats);
    tracing::info!(input = %input, total_impact = result.total_impact(), "analysis complete");

    let format = if args.json { OutputFormat::Json } else { config.output.format };
    match format {
        OutputFormat::Text => println!("{}", result.narrative),
        OutputFormat::Json => {
            let report = Report {
                analyzed_at: chrono::Utc::now(),
                result: &result,
            };
            let out = if config.output.pretty {
                serde_json::to_string_pretty(&report)?
            } else {
                serde_json::to_string(&report)?
            };
            println!("{out}");
        }
    }
    Ok(())
}
