pub mod entry;
pub mod milestone;
pub mod pull_request;
pub mod version;
