// crates/nocomma-core/src/stats.rs

use crate::machine::state::{LinePosition, COMMA, NEWLINE, TAB};

/// Counters observed while rewriting one stream.
///
/// `bytes` counts both directions: the rewrite never inserts or drops a byte.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StreamStats {
    pub bytes: u64,
    pub lines: u64,
    pub tabs: u64,
    pub commas_rewritten: u64,
    pub commas_kept: u64,
    /// Completed lines that never reached a TAB.
    pub lines_without_tab: u64,
    crc: u32,
}

impl StreamStats {
    /// Account for one input byte, given the state it was read in.
    #[inline]
    pub fn observe(&mut self, b: u8, prior: LinePosition) {
        self.bytes += 1;
        match b {
            TAB => self.tabs += 1,
            NEWLINE => {
                self.lines += 1;
                if !prior.is_after_separator() {
                    self.lines_without_tab += 1;
                }
            }
            COMMA if prior.is_after_separator() => self.commas_rewritten += 1,
            COMMA => self.commas_kept += 1,
            _ => {}
        }
    }

    /// Fold an already-rewritten chunk into the output checksum.
    pub fn checksum(&mut self, out: &[u8]) {
        let mut h = crc32fast::Hasher::new_with_initial(self.crc);
        h.update(out);
        self.crc = h.finalize();
    }

    /// CRC-32 of every output byte checksummed so far.
    pub fn crc32(&self) -> u32 {
        self.crc
    }

    /// `KEY=VALUE` pairs in report order.
    pub fn report_lines(&self) -> Vec<String> {
        vec![
            format!("BYTES={}", self.bytes),
            format!("LINES={}", self.lines),
            format!("TABS={}", self.tabs),
            format!("COMMAS_REWRITTEN={}", self.commas_rewritten),
            format!("COMMAS_KEPT={}", self.commas_kept),
            format!("LINES_WITHOUT_TAB={}", self.lines_without_tab),
            format!("OUT_CRC32=0x{:08X}", self.crc),
        ]
    }
}
