pub mod config;
pub mod dump;
pub mod render;
