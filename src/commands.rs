use crate::cli::Commands;
use crate::config::Config;
use crate::descriptor;
use crate::error::{Error, Result};
use crate::files;
use crate::homebrew;
use crate::host::Host;
use crate::profile;
use crate::resolver;
use crate::service::Action;
use crate::status;
use std::io::Write;

/// Routes a parsed command to its component. Descriptors are scanned afresh
/// for every command that needs them.
pub fn execute(command: Commands, config: &Config, host: &dyn Host, out: &mut impl Write) -> Result<()> {
    match command {
        Commands::List { pattern } => {
            let descriptors = descriptor::locate(&config.search_dirs());
            let pattern = pattern.unwrap_or_default();
            for d in descriptor::matching(&descriptors, &pattern) {
                writeln!(out, "{}", d.name)?;
            }
        }
        Commands::Status { pattern } => {
            let descriptors = descriptor::locate(&config.search_dirs());
            status::status(host, &descriptors, pattern.as_deref(), out)?;
        }
        Commands::Start { name } => control(Action::Start, name, config, host, out)?,
        Commands::Stop { name } => control(Action::Stop, name, config, host, out)?,
        Commands::Restart { name } => control(Action::Restart, name, config, host, out)?,
        Commands::Show { name } => {
            let name = required(name, "name required")?;
            files::show(&descriptor::locate(&config.search_dirs()), &name, out)?;
        }
        Commands::Edit { name } => {
            let name = required(name, "name required")?;
            let descriptors = descriptor::locate(&config.search_dirs());
            files::edit(host, config.editor.as_deref(), &descriptors, &name)?;
        }
        Commands::Install { path } => {
            let path = required(path, "path required")?;
            files::install(&config.install_dirs(), &path, out)?;
        }
        Commands::Remove { name } => {
            let name = required(name, "name required")?;
            files::remove(&descriptor::locate(&config.search_dirs()), &name, out)?;
        }
        Commands::Scan { path } => {
            let path = required(path, "path required")?;
            for d in homebrew::scan(host, &path) {
                writeln!(out, "{}", d.name)?;
            }
        }
    }
    Ok(())
}

fn required<T>(arg: Option<T>, message: &str) -> Result<T> {
    arg.ok_or_else(|| Error::usage(message))
}

/// start/stop/restart: a named agent, else the working directory's profile.
fn control(
    action: Action,
    name: Option<String>,
    config: &Config,
    host: &dyn Host,
    out: &mut impl Write,
) -> Result<()> {
    let Some(name) = name else {
        return match config.profile_path().filter(|_| config.profile_exists()) {
            Some(path) => profile::run(host, &path, &config.search_dirs(), action, out),
            None => Err(Error::usage("name required")),
        };
    };

    let descriptors = descriptor::locate(&config.search_dirs());
    let descriptor = resolver::resolve(&descriptors, &name)?;
    action.apply(host, descriptor, out)?;
    Ok(())
}
