//! The extraction, aggregation, enrichment and rendering stages of the
//! attacker report, plus the adapters they read through.
//!
//! [`pipeline::Pipeline`] runs the stages in order:
//! [`source`] → [`extractor`] → [`aggregator`] → [`geo`] → [`render`].

pub mod aggregator;
pub mod extractor;
pub mod geo;
pub mod pipeline;
pub mod render;
pub mod source;
