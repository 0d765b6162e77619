use clap::Subcommand;

/// Programme profile and team roster commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ProfileCommands {
    /// Get a programme's profile for the academic year.
    Get {
        #[arg(long)]
        programme: String,
    },
    /// Upsert a programme profile from a JSON payload.
    Save {
        #[arg(long)]
        programme: String,
        /// Path to the JSON payload; stdin when omitted.
        #[arg(long)]
        file: Option<String>,
    },
    /// List the programme team for the academic year.
    Team {
        #[arg(long)]
        programme: String,
    },
    /// Replace the programme team roster from a JSON payload.
    SaveTeam {
        #[arg(long)]
        programme: String,
        /// Path to the JSON payload; stdin when omitted.
        #[arg(long)]
        file: Option<String>,
    },
}
