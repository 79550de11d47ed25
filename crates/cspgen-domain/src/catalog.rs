use cspgen_types::ServiceDefinition;

/// Read-only service lookup consumed by the engine.
///
/// Implementations are built once and shared; lookups must be cheap (hash
/// lookups) and must not perform IO.
pub trait ServiceCatalog {
    /// Exact match on a primary id.
    fn lookup_by_id(&self, id: &str) -> Option<&ServiceDefinition>;

    /// Map an alias to its canonical id.
    fn lookup_by_alias(&self, alias: &str) -> Option<&str>;
}
