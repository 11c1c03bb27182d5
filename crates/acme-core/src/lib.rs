use error::AcmeError;

pub mod backend;
pub mod client;
pub mod constants;
pub mod error;
pub mod firmware;
pub mod plugin;

pub use client::AcmeClient;

pub type AcmeResult<T> = std::result::Result<T, AcmeError>;
