/// Adapters layer - Infrastructure implementations
///
/// Concrete implementations of the ports: filesystem access, console
/// diagnostics and SBOM formatters.
pub mod outbound;
