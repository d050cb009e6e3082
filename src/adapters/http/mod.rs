//! HTTP adapters - REST API implementations.

pub mod analysis;
pub mod app;
pub mod health;

pub use analysis::{analysis_router, AnalysisAppState};
pub use app::build_router;
