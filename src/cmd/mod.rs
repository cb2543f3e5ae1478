pub mod generate;
pub mod new;
pub mod unknown;

use std::path::PathBuf;

use clap::Args;
use tracing::debug;

use crate::config::{ConfigInput, DEFAULT_OUTPUT};
use crate::context::AppContext;
use crate::domain::pull_request::PullRequestFilter;
use crate::error::AppResult;
use crate::workflow::changelog::{ChangelogOutcome, write_changelog};

/// Options shared by every changelog command.
#[derive(Args, Debug, Clone)]
pub struct CommonArgs {
    /// Owner of the repository.
    #[arg(long)]
    pub owner: String,
    /// Name of the repository.
    #[arg(long)]
    pub repository: String,
    /// GitHub authentication token.
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,
    /// Output file name.
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,
    /// Be verbose.
    #[arg(short, long)]
    pub verbose: bool,
}

impl From<CommonArgs> for ConfigInput {
    fn from(args: CommonArgs) -> Self {
        ConfigInput {
            owner: args.owner,
            repository: args.repository,
            token: args.token,
            output: args.output,
            verbose: args.verbose,
        }
    }
}

/// A parsed command that writes a changelog.
#[derive(Debug, Clone)]
pub struct ChangelogCommand {
    pub common: CommonArgs,
    pub filter: PullRequestFilter,
    pub description: String,
}

pub async fn run(ctx: &AppContext, command: &ChangelogCommand) -> AppResult<ChangelogOutcome> {
    debug!("{}", command.description);
    write_changelog(ctx, &command.filter).await
}
