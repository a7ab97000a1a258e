// crates/nocomma-core/src/machine/rewriter.rs

use crate::machine::state::LinePosition;
use crate::stats::StreamStats;

/// Chunk-at-a-time driver for [`LinePosition`].
///
/// The line position survives between calls, so a stream may be fed in
/// slices of any size (a line split across two reads is still handled).
#[derive(Clone, Debug, Default)]
pub struct Rewriter {
    pos: LinePosition,
    stats: StreamStats,
}

impl Rewriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(&self) -> LinePosition {
        self.pos
    }

    pub fn stats(&self) -> &StreamStats {
        &self.stats
    }

    pub fn finish(self) -> StreamStats {
        self.stats
    }

    /// Rewrite `buf` in place. Length never changes.
    pub fn rewrite_in_place(&mut self, buf: &mut [u8]) {
        let mut pos = self.pos;
        for b in buf.iter_mut() {
            self.stats.observe(*b, pos);
            let (next, out) = pos.step(*b);
            *b = out;
            pos = next;
        }
        self.pos = pos;
        self.stats.checksum(buf);
    }

    /// Append the rewrite of `input` to `out`.
    pub fn rewrite(&mut self, input: &[u8], out: &mut Vec<u8>) {
        let start = out.len();
        out.extend_from_slice(input);
        self.rewrite_in_place(&mut out[start..]);
    }
}

/// One-shot rewrite of a whole buffer, starting at the beginning of a line.
pub fn rewrite_bytes(input: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(input.len());
    Rewriter::new().rewrite(input, &mut out);
    out
}
