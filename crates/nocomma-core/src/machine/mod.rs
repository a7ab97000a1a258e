// crates/nocomma-core/src/machine/mod.rs

pub mod rewriter;
pub mod state;
