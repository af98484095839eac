use clap::Subcommand;

/// Document entity commands.
#[derive(Clone, Debug, Subcommand)]
pub enum DocumentCommands {
    /// Add a document, general or tied to a university.
    Add {
        #[arg(long)]
        name: String,
        /// sop, cv, recommendation, transcript, other
        #[arg(long = "type")]
        doc_type: String,
        #[arg(long)]
        university: Option<String>,
        #[arg(long)]
        content: Option<String>,
        #[arg(long)]
        file_url: Option<String>,
    },
    /// Update a document.
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long = "type")]
        doc_type: Option<String>,
        #[arg(long, conflicts_with = "general")]
        university: Option<String>,
        /// Detach from its university.
        #[arg(long)]
        general: bool,
        #[arg(long)]
        content: Option<String>,
        #[arg(long)]
        file_url: Option<String>,
        /// Increment the version when content or file changes.
        #[arg(long)]
        bump_version: bool,
    },
    /// Get a document by ID.
    Get { id: String },
    /// List documents with optional filters.
    List {
        #[arg(long, conflicts_with = "general")]
        university: Option<String>,
        /// Only documents not tied to a university.
        #[arg(long)]
        general: bool,
        #[arg(long = "type")]
        doc_type: Option<String>,
        #[arg(long)]
        search: Option<String>,
    },
    /// Delete a document.
    Delete { id: String },
}
