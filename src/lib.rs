pub mod config;
pub mod document;
pub mod env;
pub mod error;
pub mod figma;
pub mod fs;
pub mod naming;
pub mod output;
pub mod prompt;
pub mod registry;
pub mod scaffold;
pub mod sync;
pub mod workspace;
