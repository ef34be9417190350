use crate::types::HealthRes;

/// Simple health service for the REST API and the CLI.
#[derive(Clone, Default)]
pub struct HealthService;

impl HealthService {
    /// Check health without creating an instance.
    ///
    /// # Returns
    /// A `HealthRes` indicating the service is healthy.
    pub fn check_health() -> HealthRes {
        HealthRes {
            ok: true,
            message: "Surveylytic is alive".into(),
        }
    }
}
