//! Program entry: argument parsing, configuration merge and dispatch.

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Commands};
use crate::commands::{run_analyze, run_cc, run_hal, AnalyzeOptions, CcOptions, HalOptions};
use crate::config::Config;

/// Runs the analyzer with the given arguments using stdout as the writer.
///
/// # Errors
///
/// Returns an error if command execution fails.
pub fn run_with_args(args: Vec<String>) -> Result<i32> {
    run_with_args_to(args, &mut std::io::stdout())
}

/// Runs the analyzer with the given arguments, writing output to the
/// specified writer. This is the testable version of `run_with_args`.
///
/// # Errors
///
/// Returns an error if command execution fails.
pub fn run_with_args_to<W: std::io::Write>(args: Vec<String>, writer: &mut W) -> Result<i32> {
    let mut program_args = vec!["codecompass".to_owned()];
    program_args.extend(args);
    let cli = match Cli::try_parse_from(program_args) {
        Ok(c) => c,
        Err(e) => {
            match e.kind() {
                clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                    // Let clap print help/version as intended, but captured by redirect
                    write!(writer, "{e}")?;
                    writer.flush()?;
                    return Ok(0);
                }
                _ => {
                    eprint!("{e}");
                    return Ok(1);
                }
            }
        }
    };

    let config = Config::load();
    let merge_excludes = |cli_excludes: Vec<String>| -> Vec<String> {
        let mut merged = cli_excludes;
        merged.extend(config.exclude_folders.iter().cloned());
        merged
    };

    match cli.command {
        Some(Commands::Cc {
            path,
            json,
            exclude_folders,
            average,
            total_average,
            order,
            fail_threshold,
            output_file,
        }) => {
            run_cc(
                &path,
                CcOptions {
                    json,
                    exclude: merge_excludes(exclude_folders),
                    average,
                    total_average,
                    order: order.or_else(|| config.order.clone()),
                    fail_threshold,
                    output_file,
                },
                writer,
            )?;
        }
        Some(Commands::Hal {
            path,
            json,
            exclude_folders,
            functions,
            output_file,
        }) => {
            run_hal(
                &path,
                HalOptions {
                    json,
                    exclude: merge_excludes(exclude_folders),
                    functions,
                    output_file,
                },
                writer,
            )?;
        }
        None => {
            run_analyze(
                &cli.paths,
                AnalyzeOptions {
                    json: cli.json,
                    mode: cli.mode,
                    exclude: merge_excludes(cli.exclude_folders),
                    order: cli.order.or_else(|| config.order.clone()),
                    output_file: cli.output_file,
                },
                writer,
            )?;
        }
    }
    Ok(0)
}
