//! CLI entry point for the socket-constrained maze solver

use clap::Parser;
use sockettile::io::cli::{Cli, MazeRunner};
use tracing_subscriber::EnvFilter;

// Allow print for delivering the rendering on standard output
#[allow(clippy::print_stdout)]
fn main() -> sockettile::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut runner = MazeRunner::new(cli);
    let report = runner.run()?;

    if !report.written {
        print!("{}", report.rendering);
    }
    Ok(())
}
