//! HTTP handlers for the writing service.

pub mod assistant;
pub mod health;
pub mod metrics;
