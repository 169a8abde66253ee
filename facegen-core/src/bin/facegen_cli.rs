//! facegen CLI - font build step for front-end pipelines
//!
//! Commands: generate, inspect, copy-sources, build-fonts
//! Outputs JSON to stdout
//! Returns non-zero on failure

use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};

use facegen_core::{copy_sources, generate, plan, GeneratorConfig};

#[derive(Parser)]
#[command(name = "facegen-cli", version)]
#[command(about = "facegen CLI - @font-face stylesheet generator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to a JSON config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the @font-face stylesheet for a fonts directory
    Generate {
        /// Directory with converted .woff2 files
        #[arg(short, long)]
        fonts_dir: Option<PathBuf>,

        /// Stylesheet to (over)write
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the descriptors without writing anything
    Inspect {
        #[arg(short, long)]
        fonts_dir: Option<PathBuf>,
    },

    /// Copy raw outline fonts into the fonts directory
    CopySources {
        #[arg(short, long)]
        source_dir: Option<PathBuf>,

        #[arg(short, long)]
        fonts_dir: Option<PathBuf>,
    },

    /// copy-sources followed by generate
    BuildFonts,
}

fn init_tracing(verbose: u8) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    // stdout carries the JSON result, logs go to stderr
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => println!(r#"{{"success": false, "error": "Serialization failed: {}"}}"#, e),
    }
}

fn fail(e: impl std::error::Error) -> ExitCode {
    let mut message = e.to_string();
    let mut source = e.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    error!("{}", message);
    print_json(&serde_json::json!({
        "success": false,
        "error": message,
    }));
    ExitCode::FAILURE
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = match &cli.config {
        Some(path) => match GeneratorConfig::load(path) {
            Ok(c) => c,
            Err(e) => return fail(e),
        },
        None => GeneratorConfig::default(),
    };

    match cli.command {
        Commands::Generate { fonts_dir, output } => {
            let fonts_dir = fonts_dir.unwrap_or(config.fonts_dir);
            let output = output.unwrap_or(config.output_file);

            match generate(&fonts_dir, &output) {
                Ok(report) => {
                    info!(
                        fonts = report.font_count,
                        output = %report.output_file.display(),
                        "font stylesheet generated"
                    );
                    print_json(&report);
                    ExitCode::SUCCESS
                }
                Err(e) => fail(e),
            }
        }

        Commands::Inspect { fonts_dir } => {
            let fonts_dir = fonts_dir.unwrap_or(config.fonts_dir);
            match plan(&fonts_dir) {
                Ok(planned) => {
                    print_json(&planned.descriptors);
                    ExitCode::SUCCESS
                }
                Err(e) => fail(e),
            }
        }

        Commands::CopySources { source_dir, fonts_dir } => {
            let source_dir = source_dir.unwrap_or(config.source_dir);
            let fonts_dir = fonts_dir.unwrap_or(config.fonts_dir);

            match copy_sources(&source_dir, &fonts_dir, &config.source_extensions) {
                Ok(summary) => {
                    print_json(&summary);
                    ExitCode::SUCCESS
                }
                Err(e) => fail(e),
            }
        }

        Commands::BuildFonts => {
            let copied = match copy_sources(
                &config.source_dir,
                &config.fonts_dir,
                &config.source_extensions,
            ) {
                Ok(summary) => summary,
                Err(e) => return fail(e),
            };

            match generate(&config.fonts_dir, &config.output_file) {
                Ok(report) => {
                    info!(fonts = report.font_count, "font stylesheet generated");
                    print_json(&serde_json::json!({
                        "success": true,
                        "copied": copied,
                        "stylesheet": report,
                    }));
                    ExitCode::SUCCESS
                }
                Err(e) => fail(e),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_flags_parse() {
        let cli = Cli::parse_from(["facegen-cli", "generate", "-f", "dist/fonts", "-o", "out.scss"]);
        match cli.command {
            Commands::Generate { fonts_dir, output } => {
                assert_eq!(fonts_dir, Some(PathBuf::from("dist/fonts")));
                assert_eq!(output, Some(PathBuf::from("out.scss")));
            }
            _ => panic!("expected generate"),
        }
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_verbosity_counts() {
        let cli = Cli::parse_from(["facegen-cli", "-vv", "--config", "facegen.json", "build-fonts"]);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config, Some(PathBuf::from("facegen.json")));
        assert!(matches!(cli.command, Commands::BuildFonts));
    }
}
