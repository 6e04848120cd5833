use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Show the board, one lane per workflow stage
    Board {
        /// Filter cards by id suffix or client/business name
        #[arg(long)]
        search: Option<String>,
    },

    /// Drag a case to another stage
    Move {
        /// Case id
        id: String,
        /// Target stage: quotation, approval, invoice or delivery
        stage: String,
        /// Place the card just above this card in the target stage
        #[arg(long, conflicts_with = "after")]
        before: Option<String>,
        /// Place the card just below this card in the target stage
        #[arg(long)]
        after: Option<String>,
    },

    /// Complete a case (delivery stage only)
    Complete {
        /// Case id
        id: String,
    },

    /// Move a case to the trash
    Trash {
        /// Case id
        id: String,
    },
}
