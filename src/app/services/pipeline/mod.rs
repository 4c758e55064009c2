//! HMPI computation pipeline
//!
//! This module composes the sample parser, index calculator, and classifier
//! into a single pass over one upload, producing the ordered
//! [`EnrichedRecord`](crate::app::models::EnrichedRecord) sequence consumed
//! by all presentation collaborators.
//!
//! ## Architecture
//!
//! - [`processor`] - Pipeline orchestration
//! - [`enrichment`] - Per-record presentation defaulting and computation
//! - [`stats`] - Pipeline statistics and result structures

pub mod enrichment;
pub mod processor;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use processor::PipelineProcessor;
pub use stats::{PipelineResult, PipelineStats};
