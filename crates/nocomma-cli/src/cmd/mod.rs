// crates/nocomma-cli/src/cmd/mod.rs

pub mod rewrite;
