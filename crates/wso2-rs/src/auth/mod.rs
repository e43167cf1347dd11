//! Credentials used to authenticate against IS and APIM.

pub mod models;

pub use models::{AdminAccount, Credential};
