use clap::Subcommand;

/// Module evaluation commands.
#[derive(Clone, Debug, Subcommand)]
pub enum EvaluationCommands {
    /// Save an evaluation from a JSON payload (file or stdin).
    ///
    /// The payload carries answers keyed "{category_index}_{question_index}"
    /// with 1-5 values, plus optional evidence summaries, artefacts, headline,
    /// and module metadata. Scores and levels are derived on save.
    Save {
        #[arg(long)]
        module: String,
        /// Path to the JSON payload; stdin when omitted.
        #[arg(long)]
        file: Option<String>,
    },
    /// Get the evaluation for a module (latest when no --year is given).
    Get {
        #[arg(long)]
        module: String,
    },
    /// List a module's evaluation history, newest version first.
    History {
        #[arg(long)]
        module: String,
    },
}
