use clap::Subcommand;

/// Programme Taking Stock commands.
#[derive(Clone, Debug, Subcommand)]
pub enum TakingStockCommands {
    /// Show the stored Taking Stock document.
    Show {
        #[arg(long)]
        programme: String,
    },
    /// Synthesize (or refresh) the Taking Stock document from current
    /// evaluations and save it. Team inputs on an existing document survive.
    Synthesize {
        #[arg(long)]
        programme: String,
    },
    /// Save an edited Taking Stock document from a JSON payload.
    Save {
        /// Path to the JSON payload; stdin when omitted.
        #[arg(long)]
        file: Option<String>,
    },
}
