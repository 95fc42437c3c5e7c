/// Use cases - Application business logic
mod ingest_packages;
mod transform_packages;

pub use ingest_packages::IngestPackagesUseCase;
pub use transform_packages::TransformPackagesUseCase;
