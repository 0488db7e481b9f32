//! Descriptor synthesis core for the hsg Servant stub generator.
//!
//! Turns a parsed OpenAPI document into typed route descriptions,
//! handler signatures, naming for annotation-directed inline types,
//! stub example expressions, and a deduplicated status-code registry.
//! The template-rendering stage that turns descriptors into source text
//! lives outside this crate.

pub mod ast;
pub mod config;
pub mod descriptor;
pub mod diagnostics;
pub mod error;
pub mod naming;
pub mod synth;

pub use synth::{Synthesis, synthesize};
