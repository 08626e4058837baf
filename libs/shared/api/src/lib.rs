pub mod clinic;

pub use clinic::ClinicApiClient;
