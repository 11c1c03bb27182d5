use std::process::ExitCode;

use acme_core::{backend::Backend, AcmeClient, AcmeResult};
use nu_ansi_term::Color::{Blue, Green, LightRed, Red};
use tabled::{
    builder::Builder,
    settings::{themes::BorderCorrection, Panel, Style},
};
use tracing::{debug, info};

use crate::utils::{icon_or, yes_no, Colored, Icons};

pub fn check_plugin<B: Backend>(client: &AcmeClient<B>, name: &str) -> AcmeResult<ExitCode> {
    debug!(plugin = name, "checking plugin installation");

    let installed = client.is_plugin_installed(name)?;

    if installed {
        info!(
            plugin = name,
            installed = true,
            "[{}] {} is installed",
            icon_or(Icons::INSTALLED, "+"),
            Colored(Blue, name)
        );
        Ok(ExitCode::SUCCESS)
    } else {
        info!(
            plugin = name,
            installed = false,
            "[{}] {} is {}",
            icon_or(Icons::NOT_INSTALLED, "-"),
            Colored(Blue, name),
            Colored(Red, "not installed")
        );
        Ok(ExitCode::FAILURE)
    }
}

pub fn list_plugins<B: Backend>(client: &AcmeClient<B>) -> AcmeResult<()> {
    let inventory = client.installed_plugins()?;

    if inventory.is_empty() {
        info!("No plugins installed");
        return Ok(());
    }

    let mut builder = Builder::new();
    builder.push_record(
        ["Name", "Version", "Size", "Locked", "License", "Comment"].map(String::from),
    );

    for record in inventory.iter() {
        debug!(
            name = record.name,
            version = record.version,
            flatsize = record.flatsize,
            locked = record.locked,
            license = record.license,
            "installed plugin"
        );
        builder.push_record([
            format!("{}", Colored(Blue, &record.name)),
            format!("{}", Colored(LightRed, &record.version)),
            record.flatsize.clone(),
            yes_no(record.locked).to_string(),
            record.license.clone(),
            record.comment.clone(),
        ]);
    }

    let table = builder
        .build()
        .with(Panel::header(format!(
            "{} Installed plugins ({})",
            icon_or(Icons::PACKAGE, "#"),
            Colored(Green, inventory.len())
        )))
        .with(Style::rounded())
        .with(BorderCorrection {})
        .to_string();

    info!(plugins = inventory.len(), "\n{table}");

    Ok(())
}
