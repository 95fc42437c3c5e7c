//! npm-registry - popular npm packages as a validated dataset
//!
//! This library fetches package metadata from the npm registry search API,
//! accumulates it into a resumable checkpoint, and turns the result into a
//! fixed-schema table that is validated before it is uploaded and published.
//! It follows hexagonal architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`registry_ingest`, `dataset`): records, checkpoint
//!   state, rate-limit and retry policies, the field rule table and the
//!   data-quality contract
//! - **Application Layer** (`application`): the ingest and transform use cases
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use npm_registry::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! // Create adapters
//! let fetcher = ResilientFetcher::new(
//!     ReqwestFetcher::new()?,
//!     SystemClock::new(),
//!     RateLimitPolicy::default(),
//!     RetryPolicy::default(),
//! );
//! let search = NpmSearchClient::new(fetcher, DEFAULT_SEARCH_URL);
//!
//! // Ingest into data/
//! let ingest = IngestPackagesUseCase::new(
//!     search,
//!     JsonStateStore::new(PathBuf::from("data/state")),
//!     RawJsonStore::new(PathBuf::from("data/raw")),
//!     StderrProgressReporter::new(),
//!     SystemClock::new(),
//! );
//! let summary = ingest.execute(&IngestPlan::default())?;
//! println!("{} packages", summary.total);
//!
//! // Transform, validate and publish
//! let transform = TransformPackagesUseCase::new(
//!     RawJsonStore::new(PathBuf::from("data/raw")),
//!     LocalDatasetSink::new(PathBuf::from("data/datasets")),
//!     StderrProgressReporter::new(),
//! );
//! transform.execute(&TransformRequest::default())?;
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod dataset;
pub mod environment;
pub mod logging;
pub mod ports;
pub mod registry_ingest;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        JsonStateStore, LocalDatasetSink, RawJsonStore,
    };
    pub use crate::adapters::outbound::network::{
        NpmSearchClient, ReqwestFetcher, ResilientFetcher,
    };
    pub use crate::adapters::outbound::system::SystemClock;
    pub use crate::application::dto::{IngestSummary, TransformRequest, TransformSummary};
    pub use crate::application::use_cases::{IngestPackagesUseCase, TransformPackagesUseCase};
    pub use crate::dataset::{DatasetMetadata, SchemaContract, Table};
    pub use crate::ports::outbound::{
        Clock, DatasetSink, HttpFetcher, PackageSearch, ProgressReporter, RawStore, StateStore,
        WriteMode,
    };
    pub use crate::registry_ingest::domain::ingest_plan::DEFAULT_SEARCH_URL;
    pub use crate::registry_ingest::domain::{IngestPlan, IngestState, PackageRecord};
    pub use crate::registry_ingest::policies::{RateLimitPolicy, RetryPolicy};
    pub use crate::shared::Result;
}
