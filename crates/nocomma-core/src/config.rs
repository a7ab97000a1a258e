// crates/nocomma-core/src/config.rs

/// 64 KiB.
pub const DEFAULT_BUF_BYTES: usize = 64 * 1024;

/// Upper bound accepted by validation (64 MiB).
pub const MAX_BUF_BYTES: usize = 64 * 1024 * 1024;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StreamConfig {
    /// Bytes requested per read; also the size of the single working buffer.
    pub buf_bytes: usize,
}

impl StreamConfig {
    pub fn with_buf_bytes(buf_bytes: usize) -> Self {
        Self { buf_bytes }
    }
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            buf_bytes: DEFAULT_BUF_BYTES,
        }
    }
}
