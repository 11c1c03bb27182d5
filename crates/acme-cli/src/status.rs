use std::process::ExitCode;

use acme_core::{backend::Backend, AcmeClient};
use nu_ansi_term::Color::{Green, Red};
use tracing::info;

use crate::utils::{icon_or, Colored, Icons};

pub fn display_status<B: Backend>(client: &AcmeClient<B>, check_certificates: bool) -> ExitCode {
    let settings = &client.config().settings;
    let enabled = client.is_enabled(check_certificates);
    let active_certificates = client
        .config()
        .certificates
        .iter()
        .filter(|certificate| certificate.enabled)
        .count();

    let state = if enabled {
        format!("{} {}", icon_or(Icons::INSTALLED, "+"), Colored(Green, "enabled"))
    } else {
        format!("{} {}", icon_or(Icons::CROSS, "-"), Colored(Red, "disabled"))
    };

    info!(
        enabled = enabled,
        check_certificates = check_certificates,
        environment = %settings.environment,
        active_certificates = active_certificates,
        "ACME client: {} ({}, {} of {} certificates active)",
        state,
        settings.environment,
        active_certificates,
        client.config().certificates.len()
    );

    if enabled {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
