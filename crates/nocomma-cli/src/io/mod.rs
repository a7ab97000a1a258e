// crates/nocomma-cli/src/io/mod.rs

pub mod stdio;
