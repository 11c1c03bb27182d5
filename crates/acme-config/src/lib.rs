pub mod action;
pub mod annotations;
pub mod backend;
pub mod certificate;
pub mod config;
pub mod de;
pub mod display;
pub mod error;
pub mod settings;

#[cfg(test)]
pub mod test_utils;
