//! Immoflow core domain.
//!
//! Database-agnostic domain models, repository traits and services for the
//! real-estate backend: listings, leads, platform connections, the publish
//! fan-out and subscription billing. Storage lives behind the repository
//! traits (`immoflow-storage-sqlite` in production, in-memory mocks in
//! tests); platform publishing is delegated to `immoflow-social`.

pub mod billing;
pub mod connections;
pub mod errors;
pub mod leads;
pub mod listings;
pub mod publish;

pub use errors::{Error, Result};
