//! BRCMA - Business Requirements / Criteria Matching Analysis
//!
//! This crate scores how well a set of weighted requirements is satisfied by
//! a set of weighted evaluation criteria, classifies requirements into
//! strong, weak and risky tiers and proposes candidate design options. The
//! analysis is exposed over a small REST API.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
