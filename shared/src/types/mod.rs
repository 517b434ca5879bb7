//! Response wrappers shared by the HTTP layer

pub mod response;

pub use response::HealthResponse;
