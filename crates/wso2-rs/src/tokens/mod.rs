pub mod endpoints;
pub mod models;

pub use endpoints::MANAGEMENT_SCOPES;
