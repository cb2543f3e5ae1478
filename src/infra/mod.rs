pub mod file;
pub mod github;
pub mod markdown;
