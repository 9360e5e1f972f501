//! Runtime configuration for the advisor.

/// The 'Configuration' type collects all the information necessary to talk to
/// the warehouse at runtime: every secret has been resolved to a plain value.
///
/// 'ParsedConfiguration' deals with the serialized on-disk format, where
/// secrets may still be references to environment variables. Values of this
/// type are produced from a 'ParsedConfiguration' using
/// 'make_runtime_configuration'.
#[derive(Debug, Clone)]
pub struct Configuration {
    /// Base URL of the warehouse statement endpoint.
    pub endpoint: String,
    /// Bearer token presented on every request.
    pub access_token: String,
    /// Compute resource the statements run on.
    pub warehouse_id: String,
    /// Fully qualified name of the analytics table driving advisories.
    pub advisory_table: String,
}
