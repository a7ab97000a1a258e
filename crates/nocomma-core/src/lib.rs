pub mod error;
pub mod validate;

pub mod config;
pub mod machine;
pub mod stats;
pub mod stream;

pub use crate::config::StreamConfig;
pub use crate::machine::rewriter::{rewrite_bytes, Rewriter};
pub use crate::machine::state::LinePosition;
pub use crate::stats::StreamStats;
pub use crate::stream::{pump, RewriteReader};
