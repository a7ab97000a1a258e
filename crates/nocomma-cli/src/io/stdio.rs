// crates/nocomma-cli/src/io/stdio.rs

use std::fs::File;
use std::io::{BufWriter, Read, Write};

use anyhow::Context;

/// File at `path`, or locked stdin when absent.
///
/// Unbuffered: the pump reads in `buf_bytes` chunks itself.
pub fn open_input(path: Option<&str>) -> anyhow::Result<Box<dyn Read>> {
    match path {
        Some(p) => {
            let f = File::open(p).with_context(|| format!("open input: {p}"))?;
            Ok(Box::new(f))
        }
        None => Ok(Box::new(std::io::stdin().lock())),
    }
}

/// File at `path` (created or truncated), or locked stdout when absent.
pub fn open_output(path: Option<&str>, buf_bytes: usize) -> anyhow::Result<Box<dyn Write>> {
    match path {
        Some(p) => {
            let f = File::create(p).with_context(|| format!("create output: {p}"))?;
            Ok(Box::new(BufWriter::with_capacity(buf_bytes, f)))
        }
        None => Ok(Box::new(BufWriter::with_capacity(
            buf_bytes,
            std::io::stdout().lock(),
        ))),
    }
}
