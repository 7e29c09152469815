//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, error codes)
//! - `subscription` - Subscription aggregate, cost normalization and payload building
//! - `dashboard` - Spend aggregation into dashboard metrics

pub mod dashboard;
pub mod foundation;
pub mod subscription;
