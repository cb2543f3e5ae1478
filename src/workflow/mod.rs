pub mod changelog;
pub mod extract;
pub mod render;
