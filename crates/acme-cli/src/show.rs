use acme_core::{backend::Backend, error::AcmeError, AcmeClient, AcmeResult};
use nu_ansi_term::Color::{Blue, Cyan};
use tabled::{
    builder::Builder,
    settings::{themes::BorderCorrection, Panel, Style},
};
use tracing::{debug, info};

use crate::utils::{icon_or, yes_no, Colored, Icons};

pub fn show_certificate<B: Backend>(client: &AcmeClient<B>, id: &str) -> AcmeResult<()> {
    debug!(certificate_id = id, "looking up certificate");

    let certificate = client
        .get_by_certificate_id(id)
        .ok_or_else(|| AcmeError::CertificateNotFound(id.to_string()))?;
    let actions = client.restart_actions(id)?;

    let mut builder = Builder::new();
    builder.push_record(["Id".to_string(), certificate.id.clone()]);
    builder.push_record(["Name".to_string(), certificate.name.clone()]);
    builder.push_record([
        "Enabled".to_string(),
        yes_no(certificate.enabled).to_string(),
    ]);
    builder.push_record([
        "Domains".to_string(),
        certificate.domains().collect::<Vec<_>>().join(", "),
    ]);
    builder.push_record([
        "Account".to_string(),
        certificate.account.clone().unwrap_or_default(),
    ]);
    builder.push_record([
        "Validation".to_string(),
        certificate.validation_method.clone().unwrap_or_default(),
    ]);
    builder.push_record(["Key".to_string(), certificate.key_length.clone()]);
    builder.push_record([
        "Auto renewal".to_string(),
        format!(
            "{} (every {} days)",
            yes_no(certificate.auto_renewal),
            certificate.renew_interval
        ),
    ]);
    builder.push_record([
        "Restart actions".to_string(),
        actions
            .iter()
            .map(|action| format!("{} ({})", action.name, action.uuid))
            .collect::<Vec<_>>()
            .join("\n"),
    ]);
    if let Some(description) = &certificate.description {
        builder.push_record(["Description".to_string(), description.clone()]);
    }

    let table = builder
        .build()
        .with(Panel::header(format!(
            "{} Certificate",
            icon_or(Icons::CERTIFICATE, "#")
        )))
        .with(Style::rounded())
        .with(BorderCorrection {})
        .to_string();

    info!(
        certificate_id = certificate.id,
        name = certificate.name,
        enabled = certificate.enabled,
        restart_actions = actions.len(),
        "\n{table}"
    );

    Ok(())
}

pub fn show_action<B: Backend>(client: &AcmeClient<B>, uuid: &str) -> AcmeResult<()> {
    debug!(uuid = uuid, "looking up action");

    let action = client
        .get_by_action_id(uuid)
        .ok_or_else(|| AcmeError::ActionNotFound(uuid.to_string()))?;

    info!(
        uuid = action.uuid,
        name = action.name,
        enabled = action.enabled,
        action_type = action.action_type,
        "{} {} [{}] {}{}",
        icon_or(Icons::ACTION, "*"),
        Colored(Blue, &action.name),
        Colored(Cyan, &action.uuid),
        if action.enabled { "enabled" } else { "disabled" },
        action
            .action_type
            .as_ref()
            .map(|action_type| format!(" | {action_type}"))
            .unwrap_or_default()
    );

    if let Some(command) = &action.command {
        info!("  command: {command}");
    }
    if let Some(description) = &action.description {
        info!("  {description}");
    }

    Ok(())
}
