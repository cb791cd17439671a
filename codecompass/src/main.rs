//! Main binary entry point for the `codecompass` complexity analyzer.
//!
//! This binary simply delegates to the shared `entry_point::run_with_args()`
//! function so the CLI and the library surface stay in sync.

use anyhow::Result;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let code = codecompass::entry_point::run_with_args(args)?;
    std::process::exit(code);
}
