/// Application layer - Use cases and DTOs
///
/// This layer orchestrates the ingest and transform phases, coordinating the
/// domain types with infrastructure through ports.
pub mod dto;
pub mod use_cases;
