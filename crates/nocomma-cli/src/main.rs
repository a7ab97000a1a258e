// crates/nocomma-cli/src/main.rs

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cmd;
mod io;

#[derive(Parser)]
#[command(name = "nocomma")]
#[command(
    about = "Rewrite commas after the first TAB of each line into spaces (stdin -> stdout)",
    long_about = None
)]
pub struct Cli {
    #[command(flatten)]
    pub rewrite: cmd::rewrite::RewriteArgs,
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    cmd::rewrite::run(cli.rewrite)
}

/// Diagnostics go to stderr only; stdout carries the data stream.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
