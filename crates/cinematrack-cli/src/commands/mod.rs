pub mod config;
pub mod parser;
pub mod prompts;
pub mod render;
pub mod session;
