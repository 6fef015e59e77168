//! Core workflows for the Franklin County dog license application portal.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
