use clap::Subcommand;

/// University entity commands.
#[derive(Clone, Debug, Subcommand)]
pub enum UniversityCommands {
    /// Track a university program.
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        program: String,
        #[arg(long)]
        location: String,
        /// Application deadline (YYYY-MM-DD).
        #[arg(long)]
        deadline: String,
        #[arg(long)]
        url: Option<String>,
        /// researching, applied, admitted, rejected, pending
        #[arg(long)]
        status: Option<String>,
        /// reach, target, safety
        #[arg(long)]
        tag: Option<String>,
        /// Application fee in whole currency units.
        #[arg(long)]
        fee: Option<i64>,
        #[arg(long)]
        notes: Option<String>,
    },
    /// Update a university.
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        program: Option<String>,
        #[arg(long)]
        location: Option<String>,
        #[arg(long)]
        deadline: Option<String>,
        #[arg(long)]
        url: Option<String>,
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        tag: Option<String>,
        #[arg(long)]
        fee: Option<i64>,
        #[arg(long)]
        notes: Option<String>,
    },
    /// Get a university by ID.
    Get { id: String },
    /// List universities with optional filters.
    List {
        /// Substring of name, program or location.
        #[arg(long)]
        search: Option<String>,
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        tag: Option<String>,
        #[arg(long)]
        location: Option<String>,
        /// name, deadline, location, status
        #[arg(long)]
        sort: Option<String>,
        /// Sort descending.
        #[arg(long)]
        desc: bool,
    },
    /// Delete one or more universities and their dependent records.
    Delete {
        #[arg(required = true)]
        ids: Vec<String>,
    },
    /// Distinct locations across tracked universities.
    Locations,
}
