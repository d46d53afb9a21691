use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for zulu-bloom
/// Spaced-repetition flashcards for English/Zulu vocabulary
#[derive(Parser)]
#[command(
    name = "zulu-bloom",
    version = env!("CARGO_PKG_VERSION"),
    about = "Spaced-repetition flashcards for English/Zulu vocabulary pairs",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Override the seed file (JSON array of {english, zulu})
    #[arg(global = true, long = "seed", value_name = "FILE")]
    pub seed: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Add a single vocabulary pair
    Add {
        /// English side
        front: String,

        /// Zulu side
        back: String,
    },

    /// Bulk import `english = zulu` lines from a file (or stdin)
    Import {
        #[arg(long, value_name = "FILE", help = "Text file to read (default: stdin)")]
        file: Option<String>,
    },

    /// Load a built-in practice module (e.g. `days`)
    Module {
        /// Module name
        name: String,
    },

    /// List stored pairs
    List {
        #[arg(long = "due", help = "Show only pairs due now")]
        due: bool,
    },

    /// Show deck, due and streak summary
    Status,

    /// Start an interactive review session
    Review,

    /// Export pairs (scheduling data stripped)
    Export {
        #[arg(long, value_enum, help = "Output format (default from config)")]
        format: Option<ExportFormat>,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}
