/// Ports module defining interfaces for hexagonal architecture
///
/// Outbound (driven) ports are the interfaces the use cases call to reach the
/// registry, durable storage, the publish destination and the console.
pub mod outbound;
