//! Orchestration of the two engines across identifiers.

pub mod context;
pub mod runner;
pub mod symbols;

pub use context::PipelineContext;
pub use runner::{Pipeline, PipelineSettings};
pub use symbols::{parse_symbol_list, read_symbol_file};
