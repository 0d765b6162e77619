use clap::Subcommand;

/// SMART goal commands.
#[derive(Clone, Debug, Subcommand)]
pub enum GoalCommands {
    /// List a programme's goals.
    List {
        #[arg(long)]
        programme: String,
    },
    /// Seed one blank goal per theme when the programme has none yet.
    Seed {
        #[arg(long)]
        programme: String,
    },
    /// Add a blank goal under a theme.
    Add {
        #[arg(long)]
        programme: String,
        #[arg(long)]
        theme: String,
    },
    /// Replace a programme's goals from a JSON payload.
    Save {
        #[arg(long)]
        programme: String,
        /// Path to the JSON payload; stdin when omitted.
        #[arg(long)]
        file: Option<String>,
    },
    /// Remove a goal by ID.
    Remove { id: String },
}
