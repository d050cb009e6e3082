//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `analysis` - Pure domain services for requirements-to-criteria matching
//!   (scoring engine, classification, design options, reports)

pub mod analysis;
