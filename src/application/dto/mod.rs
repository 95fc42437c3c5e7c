/// Data Transfer Objects for the application layer
mod ingest_summary;
mod transform_request;
mod transform_summary;

pub use ingest_summary::IngestSummary;
pub use transform_request::TransformRequest;
pub use transform_summary::TransformSummary;
