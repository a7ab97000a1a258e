// crates/nocomma-core/src/stream.rs
//
// Buffered plumbing around the rewriter.
//
// pump():        read chunk -> rewrite in place -> write chunk, until a 0-byte read.
// RewriteReader: the same rewrite as a Read adapter, for io::copy style pipelines.

use std::io::{self, ErrorKind, Read, Write};

use tracing::{debug, trace};

use crate::config::StreamConfig;
use crate::error::Result;
use crate::machine::rewriter::Rewriter;
use crate::stats::StreamStats;
use crate::validate::validate_config;

/// Rewrite everything `r` yields into `w`, then flush `w`.
///
/// Returns once `r` reports end of input. The writer is flushed before
/// returning, so a `BufWriter` needs no extra handling by the caller.
pub fn pump<R: Read, W: Write>(mut r: R, mut w: W, cfg: &StreamConfig) -> Result<StreamStats> {
    validate_config(cfg)?;

    let mut buf = vec![0u8; cfg.buf_bytes];
    let mut rw = Rewriter::new();
    let mut chunks = 0u64;

    loop {
        let n = match r.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        };

        let chunk = &mut buf[..n];
        rw.rewrite_in_place(chunk);
        w.write_all(chunk)?;

        chunks += 1;
        trace!(chunk = chunks, bytes = n, "chunk rewritten");
    }

    w.flush()?;

    let stats = rw.finish();
    debug!(
        bytes = stats.bytes,
        lines = stats.lines,
        commas_rewritten = stats.commas_rewritten,
        chunks,
        "end of input"
    );
    Ok(stats)
}

/// `Read` adapter that hands out rewritten bytes.
#[derive(Debug)]
pub struct RewriteReader<R> {
    inner: R,
    rw: Rewriter,
}

impl<R: Read> RewriteReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            rw: Rewriter::new(),
        }
    }

    pub fn stats(&self) -> &StreamStats {
        self.rw.stats()
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read> Read for RewriteReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.inner.read(buf)?;
        self.rw.rewrite_in_place(&mut buf[..n]);
        Ok(n)
    }
}
