use clap::Args;

use crate::cmd::{ChangelogCommand, CommonArgs};
use crate::domain::pull_request::PullRequestFilter;

#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub common: CommonArgs,
    /// Title of the milestone.
    #[arg(long)]
    pub milestone: String,
}

impl From<GenerateArgs> for ChangelogCommand {
    fn from(args: GenerateArgs) -> Self {
        ChangelogCommand {
            description: format!("Generate changelog for {}.", args.milestone),
            common: args.common,
            filter: PullRequestFilter::Milestone(args.milestone),
        }
    }
}
