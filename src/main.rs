mod cmd;
mod config;
mod context;
mod domain;
mod error;
mod infra;
mod logging;
mod services;
mod workflow;

use std::sync::Arc;

use clap::{Parser, Subcommand};

use crate::cmd::ChangelogCommand;
use crate::cmd::generate::GenerateArgs;
use crate::cmd::new::NewArgs;
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::error::{AppError, AppResult, EXIT_SUCCESS};
use crate::infra::file::FileSink;
use crate::infra::github::GitHubClient;
use crate::infra::markdown::PulldownMarkdown;
use crate::logging::Verbosity;
use crate::workflow::changelog::ChangelogOutcome;

#[derive(Parser)]
#[command(
    name = "changelog-gen",
    author,
    version,
    about = "Generate a changelog from the descriptions of a repository's pull requests"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a new or overwrite an existing changelog file.
    New(NewArgs),
    /// Generate a changelog for a specific milestone.
    Generate(GenerateArgs),
    #[command(external_subcommand)]
    Unknown(Vec<String>),
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let command: ChangelogCommand = match cli.command {
        Some(Commands::New(args)) => args.into(),
        Some(Commands::Generate(args)) => args.into(),
        Some(Commands::Unknown(args)) => {
            cmd::unknown::run(&args);
            return;
        }
        None => {
            cmd::unknown::run(&[]);
            return;
        }
    };

    let config = match AppConfig::load(command.common.clone().into()) {
        Ok(config) => config,
        Err(err) => {
            report(&err, Verbosity::default());
            std::process::exit(err.exit_code());
        }
    };
    let verbosity = config.verbosity;
    verbosity.init_tracing();

    match run(config, &command).await {
        Ok(outcome) => {
            println!(
                "Changelog written to {} ({} pull requests).",
                outcome.output.display(),
                outcome.pull_requests
            );
            std::process::exit(EXIT_SUCCESS);
        }
        Err(err) => {
            report(&err, verbosity);
            std::process::exit(err.exit_code());
        }
    }
}

async fn run(config: AppConfig, command: &ChangelogCommand) -> AppResult<ChangelogOutcome> {
    let repository = Arc::new(GitHubClient::new(
        config.api_url.clone(),
        config.token.clone(),
    ));
    let context = AppContext::new(
        config,
        repository,
        Arc::new(PulldownMarkdown::new()),
        Arc::new(FileSink::new()),
    );

    cmd::run(&context, command).await
}

fn report(err: &AppError, verbosity: Verbosity) {
    eprintln!("Error: {err}");
    if verbosity.is_verbose() {
        if let Some(detail) = err.detail() {
            eprintln!("{detail}");
        }
    } else {
        eprintln!("The application has unexpectedly terminated. Use --verbose for more information.");
    }
}
