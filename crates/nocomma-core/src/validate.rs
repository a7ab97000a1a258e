use crate::config::{StreamConfig, MAX_BUF_BYTES};
use crate::error::{NcError, Result};

pub fn validate_config(c: &StreamConfig) -> Result<()> {
    // A zero-length read buffer would look like end of input on the first read.
    if c.buf_bytes == 0 {
        return Err(NcError::Validation("buf_bytes must be non-zero".into()));
    }
    if c.buf_bytes > MAX_BUF_BYTES {
        return Err(NcError::Validation(format!(
            "buf_bytes must be <= {} (got {})",
            MAX_BUF_BYTES, c.buf_bytes
        )));
    }
    Ok(())
}
