//! Core library for the crewmatch staffing platform: the worker-project
//! matching engine plus the configuration and telemetry plumbing shared by
//! the service binaries.

pub mod config;
pub mod error;
pub mod matching;
pub mod telemetry;
