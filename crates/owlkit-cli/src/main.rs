use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use owlkit_core::{analyze, convert, Bucket, PrimitiveAxiomGenerator, Rf2Reader, RunConfig};
use tracing::info;

mod logging;

#[derive(Parser, Debug)]
#[command(name = "owlkit")]
#[command(about = "Report and convert extension stated relationships on international concepts")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Log level (debug, info, warn, error); RUST_LOG overrides
    #[arg(long, global = true, default_value = "info")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Classify the extension edits and write one report file per bucket
    Analyze {
        #[command(flatten)]
        common: CommonArgs,

        /// Directory receiving the report files
        #[arg(short, long)]
        report_dir: Option<PathBuf>,
    },

    /// Retire the extension edits and write axioms for one bucket into a zip archive
    Convert {
        #[command(flatten)]
        common: CommonArgs,

        /// Output archive path
        #[arg(short, long)]
        output: PathBuf,

        /// Effective date (YYYYMMDD) embedded in entry names
        #[arg(short, long)]
        effective_date: Option<String>,

        /// Strategy bucket to convert
        #[arg(short, long)]
        bucket: Option<Bucket>,
    },
}

#[derive(Args, Debug)]
struct CommonArgs {
    /// International and extension snapshots: zip archives, directories, or table files
    #[arg(required = true)]
    sources: Vec<PathBuf>,

    /// TOML run configuration
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl CommonArgs {
    fn load(&self) -> Result<(Rf2Reader, RunConfig), owlkit_core::Error> {
        let config = match &self.config {
            Some(path) => RunConfig::from_toml_file(path)?,
            None => RunConfig::default(),
        };
        Ok((Rf2Reader::new(self.sources.iter().cloned()), config))
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    logging::init_with_filter(&cli.log_level);

    info!("owlkit {}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Command::Analyze { common, report_dir } => {
            let (reader, mut config) = common.load()?;
            if let Some(dir) = report_dir {
                config.report_dir = dir;
            }

            let summary = analyze(&reader, &config)?;
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        Command::Convert {
            common,
            output,
            effective_date,
            bucket,
        } => {
            let (reader, mut config) = common.load()?;
            if let Some(date) = effective_date {
                config.effective_date = date;
            }
            if let Some(bucket) = bucket {
                config.target_bucket = bucket;
            }
            config.validate()?;

            let generator = PrimitiveAxiomGenerator::new(config.axiom_refset_id);
            let sink = BufWriter::new(File::create(&output)?);
            let (mut sink, summary) = convert(&reader, &config, &generator, sink)?;
            sink.flush()?;

            info!(path = %output.display(), "archive written");
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_args() {
        let cli = Cli::parse_from([
            "owlkit",
            "convert",
            "int.zip",
            "ext",
            "--output",
            "out.zip",
            "--bucket",
            "needs-manual-is-a",
            "--effective-date",
            "20240301",
        ]);
        match cli.command {
            Command::Convert {
                common,
                output,
                effective_date,
                bucket,
            } => {
                assert_eq!(common.sources, vec![PathBuf::from("int.zip"), PathBuf::from("ext")]);
                assert_eq!(output, PathBuf::from("out.zip"));
                assert_eq!(effective_date.as_deref(), Some("20240301"));
                assert_eq!(bucket, Some(Bucket::NeedsManualIsA));
            }
            other => panic!("unexpected command {other:?}"),
        }
        assert_eq!(cli.log_level, "info");
    }

    #[test]
    fn test_unknown_bucket_rejected() {
        let result = Cli::try_parse_from([
            "owlkit", "convert", "int.zip", "--output", "out.zip", "--bucket", "everything",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_analyze_requires_sources() {
        assert!(Cli::try_parse_from(["owlkit", "analyze"]).is_err());
    }
}
