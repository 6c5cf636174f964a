use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "astrum-figma")]
#[command(
    about = "Import Figma components into an Astrum pattern library",
    long_about = "Import Figma components into an Astrum pattern library.\n\n\
                  Without a subcommand, prompts for Figma settings when none are stored \
                  and otherwise shows this help."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Display the current Figma settings
    Info,

    /// Edit the Figma settings
    Edit,

    /// Fetch components from Figma and add them to the pattern library
    #[command(alias = "sync")]
    Fetch,
}
