use clap::Subcommand;

/// Programme entity commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ProgrammeCommands {
    /// Create a programme chaired by the logged-in user.
    Add {
        #[arg(long)]
        code: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        school: Option<String>,
        #[arg(long)]
        faculty: Option<String>,
        #[arg(long)]
        discipline_area: Option<String>,
        #[arg(long)]
        nfq_level: Option<String>,
        #[arg(long)]
        mode: Option<String>,
    },
    /// Update a programme. An empty value clears an optional field.
    Update {
        id: String,
        #[arg(long)]
        code: Option<String>,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        school: Option<String>,
        #[arg(long)]
        faculty: Option<String>,
        #[arg(long)]
        discipline_area: Option<String>,
        #[arg(long)]
        nfq_level: Option<String>,
        #[arg(long)]
        mode: Option<String>,
    },
    /// Get a programme by ID.
    Get { id: String },
    /// List all programmes.
    List,
    /// List programmes chaired by the logged-in user.
    Mine,
    /// Per-category score summary across the programme's evaluated modules.
    Overview { id: String },
}
