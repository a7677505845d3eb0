//! Command dispatch

use std::io;
use std::path::Path;

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use tracing::{debug, instrument};

use crate::application::ApplicationError;
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::{error_chain, CliError, CliResult};
use crate::cli::menu::Menu;
use crate::cli::output;
use crate::config::{global_config_path, Settings};
use crate::domain::DomainError;
use crate::infrastructure::di::ServiceContainer;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let settings = Settings::load(cli.config.as_deref())?;
    debug!("settings: {:?}", settings);
    let container = ServiceContainer::new(settings);

    match &cli.command {
        None => cmd_menu(&container, None),
        Some(Commands::Menu { load }) => cmd_menu(&container, load.as_deref()),
        Some(Commands::List { file }) => cmd_list(&container, file),
        Some(Commands::Search { file, name }) => cmd_search(&container, file, name),
        Some(Commands::Config { command }) => cmd_config(&container, command),
        Some(Commands::Completion { shell }) => cmd_completion(*shell),
    }
}

#[instrument(skip(container))]
fn cmd_menu(container: &ServiceContainer, load: Option<&Path>) -> CliResult<()> {
    let mut directory = container.directory();

    if let Some(file) = load {
        match directory.load_contacts_from_file(file, &mut io::stdout().lock()) {
            Ok(count) => debug!("preloaded {} contacts", count),
            Err(e @ ApplicationError::FileUnavailable { .. }) => {
                output::warning(&error_chain(&e))
            }
            Err(e) => return Err(e.into()),
        }
    }

    let mut menu = Menu::new(
        &mut directory,
        io::stdin().lock(),
        io::stdout().lock(),
        io::stderr(),
    )
    .with_default_file(container.settings.default_file.clone());
    menu.run()?;
    Ok(())
}

#[instrument(skip(container))]
fn cmd_list(container: &ServiceContainer, file: &Path) -> CliResult<()> {
    let mut directory = container.directory();
    directory.load_contacts_from_file(file, &mut io::sink())?;
    directory.display_contacts(&mut io::stdout().lock())?;
    Ok(())
}

#[instrument(skip(container))]
fn cmd_search(container: &ServiceContainer, file: &Path, name: &str) -> CliResult<()> {
    if name.trim().is_empty() {
        return Err(CliError::InvalidArgs(
            "contact name must not be empty".to_string(),
        ));
    }
    let mut directory = container.directory();
    directory.load_contacts_from_file(file, &mut io::sink())?;
    match directory.search_contact(name, &mut io::stdout().lock())? {
        Some(_) => Ok(()),
        None => Err(ApplicationError::from(DomainError::ContactNotFound(name.to_string())).into()),
    }
}

fn cmd_config(container: &ServiceContainer, command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => output::info(&container.settings.to_toml()?),
        ConfigCommands::Template => output::info(&Settings::template()),
        ConfigCommands::Path => match global_config_path() {
            Some(path) => output::info(&path.display()),
            None => output::warning("no home directory, global config unavailable"),
        },
    }
    Ok(())
}

fn cmd_completion(shell: Shell) -> CliResult<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}
