use clap::Subcommand;

/// Priority selection commands.
#[derive(Clone, Debug, Subcommand)]
pub enum PriorityCommands {
    /// The candidate priority list built from the Taking Stock improvements.
    List {
        #[arg(long)]
        programme: String,
    },
    /// Mark the given priority IDs selected (and everything else unselected),
    /// then save the list.
    Select {
        #[arg(long)]
        programme: String,
        #[arg(long, value_delimiter = ',')]
        ids: Vec<String>,
    },
    /// Saved priorities currently marked selected.
    Selected {
        #[arg(long)]
        programme: String,
    },
}
