//! Service layer containing business logic orchestration.

mod adapter;
mod resolve_service;

pub use adapter::FormatAdapter;
pub use resolve_service::{ResolveService, VALIDATION_EXIT_CODE};
