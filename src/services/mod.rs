pub mod changelog_sink;
pub mod markdown;
pub mod repository;

pub use changelog_sink::ChangelogSink;
pub use markdown::MarkdownBlocks;
pub use repository::RepositoryService;
