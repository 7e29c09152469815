//! Subtrack - Subscription spend tracking
//!
//! Normalizes recurring charges to monthly and yearly equivalents, derives
//! dashboard metrics from a user's active subscriptions, and validates
//! create/edit forms into sparse payloads for the lifecycle gateway.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod observability;
pub mod ports;
