use clap::Subcommand;

/// Module and programme-module link commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ModuleCommands {
    /// Link a module into a programme, creating it when no --module-id is given.
    Add {
        #[arg(long)]
        programme: String,
        #[arg(long)]
        module_id: Option<String>,
        #[arg(long)]
        code: Option<String>,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        credits: Option<u32>,
        #[arg(long, default_value_t = 1)]
        stage: u8,
        /// autumn, spring, or year_long
        #[arg(long, default_value = "autumn")]
        semester: String,
        /// core or elective
        #[arg(long, default_value = "core")]
        core: String,
    },
    /// Update a module record.
    Update {
        id: String,
        #[arg(long)]
        code: Option<String>,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        credits: Option<u32>,
    },
    /// Update a programme-module link (stage/semester/core).
    UpdateLink {
        id: String,
        #[arg(long)]
        stage: Option<u8>,
        #[arg(long)]
        semester: Option<String>,
        #[arg(long)]
        core: Option<String>,
    },
    /// Unlink a module from its programme. The module record survives.
    Remove { link_id: String },
    /// Assign a user as the sole owner of a module.
    AssignOwner {
        #[arg(long)]
        module: String,
        #[arg(long)]
        user: String,
    },
    /// Get a module by ID.
    Get { id: String },
    /// List modules, or a programme's links when --programme is given.
    List {
        #[arg(long)]
        programme: Option<String>,
    },
    /// List modules led by the logged-in user.
    Mine,
}
