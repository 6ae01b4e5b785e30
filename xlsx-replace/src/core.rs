// src/core.rs
pub mod escape;
pub mod replacer;
pub mod rewriter;
pub mod terms;
pub mod walker;
