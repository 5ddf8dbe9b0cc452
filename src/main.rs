use anyhow::Result;
use clap::{CommandFactory, Parser};
use std::io;
use std::process;

mod cli;
mod commands;
mod config;
mod descriptor;
mod error;
mod files;
mod homebrew;
mod host;
mod log;
mod profile;
mod resolver;
mod service;
mod status;

use cli::Cli;
use config::Config;
use host::SystemHost;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            process::exit(cli::exit_code(&err));
        }
    };

    if let Err(err) = run(cli) {
        eprintln!("{:#}", err);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    crate::log::init(cli.verbose);

    let Some(command) = cli.command else {
        let _ = Cli::command().write_long_help(&mut io::stderr());
        process::exit(1);
    };

    let config = Config::load(cli.config.as_deref())?;
    ::log::debug!("Searching {:?}", config.search_dirs());

    let host = SystemHost::new(&config.settings.launchctl, &config.settings.brew);
    let mut stdout = io::stdout().lock();
    commands::execute(command, &config, &host, &mut stdout)?;

    Ok(())
}
