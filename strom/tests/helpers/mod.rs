use strom::{Region, SourceConnector};

/// Connector that advertises no capabilities at all; drives the
/// unsupported-capability paths.
pub struct NoopConnector;

impl SourceConnector for NoopConnector {
    fn name(&self) -> &'static str {
        "strom-noop"
    }

    fn supports_region(&self, _region: Region) -> bool {
        true
    }
}
