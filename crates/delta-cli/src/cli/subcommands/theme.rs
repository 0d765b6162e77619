use clap::Subcommand;

/// Priority theme commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ThemeCommands {
    /// Generate themes from the selected priorities (existing themes win),
    /// seeding one blank goal per theme on a fresh action plan.
    Generate {
        #[arg(long)]
        programme: String,
    },
    /// List a programme's themes.
    List {
        #[arg(long)]
        programme: String,
    },
    /// Replace a programme's themes from a JSON payload.
    Save {
        #[arg(long)]
        programme: String,
        /// Path to the JSON payload; stdin when omitted.
        #[arg(long)]
        file: Option<String>,
    },
}
