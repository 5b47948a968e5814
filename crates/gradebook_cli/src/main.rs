//! Terminal front end for the gradebook.
//!
//! # Responsibility
//! - Resolve configuration, start logging, and log the user in.
//! - Stand in for the desktop form: read commands, print list and totals.

mod command;
mod config;
mod terminal_view;

use clap::Parser;
use command::HELP_TEXT;
use config::CliConfig;
use gradebook_core::{
    init_logging, FileConnectionProvider, GradebookService, SqliteSubjectRepository,
};
use log::error;
use std::process::ExitCode;
use terminal_view::TerminalView;

fn main() -> ExitCode {
    let config = CliConfig::parse();

    let log_dir = config.log_dir();
    if let Err(err) = init_logging(config.log_level(), &log_dir.to_string_lossy()) {
        eprintln!("gradebook: file logging disabled: {err}");
    }

    let repo = SqliteSubjectRepository::new(FileConnectionProvider::new(config.db_path()));
    let mut service = GradebookService::new(repo, TerminalView::new(std::io::stdout()))
        .with_policy(config.write_through_policy());

    service.set_logged_in_user(config.username.as_str());
    service.view_mut().message(HELP_TEXT);

    match command::run(&mut service, std::io::stdin().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("event=cli_input module=cli status=error error={}", err);
            eprintln!("gradebook: failed to read input: {err}");
            ExitCode::FAILURE
        }
    }
}
