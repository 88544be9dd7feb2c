//! Shared types for the `attackr` workspace.
//!
//! * **[`models`]**: value types that flow through the report pipeline.
//! * **[`config`]**: the run configuration handed to the pipeline.
//! * **[`error`]**: typed errors for the log source and geolocation lookups.
//! * **[`source`]** and **[`geo`]**: the traits the core drives its collaborators through.

pub mod config;
pub mod error;
pub mod geo;
pub mod models;
pub mod source;
