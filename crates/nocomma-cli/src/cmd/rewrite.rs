// crates/nocomma-cli/src/cmd/rewrite.rs

use anyhow::Context;
use clap::Args;
use nocomma_core::config::DEFAULT_BUF_BYTES;
use nocomma_core::validate::validate_config;
use nocomma_core::{pump, StreamConfig};
use tracing::debug;

use crate::io::stdio;

#[derive(Args, Debug)]
pub struct RewriteArgs {
    /// Input path (default: stdin)
    #[arg(long)]
    pub r#in: Option<String>,

    /// Output path, created or truncated (default: stdout)
    #[arg(long)]
    pub out: Option<String>,

    /// Bytes per read; also the output buffer size
    #[arg(long, default_value_t = DEFAULT_BUF_BYTES)]
    pub buf_bytes: usize,

    /// Print KEY=VALUE counters to stderr when done
    #[arg(long, default_value_t = false)]
    pub stats: bool,
}

pub fn run(args: RewriteArgs) -> anyhow::Result<()> {
    let cfg = StreamConfig::with_buf_bytes(args.buf_bytes);
    validate_config(&cfg)?;

    let input = stdio::open_input(args.r#in.as_deref())?;
    let output = stdio::open_output(args.out.as_deref(), cfg.buf_bytes)?;

    let stats = match pump(input, output, &cfg) {
        Ok(s) => s,
        Err(e) if e.is_broken_pipe() => {
            // Downstream stopped reading; nothing left to deliver.
            debug!("output closed early, stopping");
            return Ok(());
        }
        Err(e) => {
            let src = args.r#in.as_deref().unwrap_or("<stdin>");
            let dst = args.out.as_deref().unwrap_or("<stdout>");
            return Err(e).with_context(|| format!("rewrite {src} -> {dst}"));
        }
    };

    if args.stats {
        eprintln!("--- nocomma ---");
        for line in stats.report_lines() {
            eprintln!("{line}");
        }
    }

    Ok(())
}
