//! In-memory platform clients for adapter and service tests.

pub mod mock_calcom_client;
pub mod mock_calendly_client;

#[allow(unused_imports)]
pub use mock_calcom_client::MockCalcomClient;
#[allow(unused_imports)]
pub use mock_calendly_client::MockCalendlyClient;
