use clap::Args;

use crate::cmd::{ChangelogCommand, CommonArgs};
use crate::domain::pull_request::PullRequestFilter;

#[derive(Args, Debug, Clone)]
pub struct NewArgs {
    #[command(flatten)]
    pub common: CommonArgs,
    /// Exclude pull requests without milestones.
    #[arg(long)]
    pub exclude_unknown: bool,
}

impl From<NewArgs> for ChangelogCommand {
    fn from(args: NewArgs) -> Self {
        let filter = if args.exclude_unknown {
            PullRequestFilter::ExcludeUnknown
        } else {
            PullRequestFilter::All
        };
        ChangelogCommand {
            common: args.common,
            filter,
            description: "Create full changelog".to_string(),
        }
    }
}
