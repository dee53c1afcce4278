//! Agentic accommodation-selection pipeline for airline crew layovers.
//!
//! The `workflows::layover` module hosts the planning core: a fixed sequence of
//! stateless decision stages that turn a validated crew pairing into a ranked,
//! auditable hotel selection. `reference` holds the airport/hotel directory
//! seams, `config` the environment-driven runtime settings.

pub mod config;
pub mod error;
pub mod reference;
pub mod telemetry;
pub mod workflows;
