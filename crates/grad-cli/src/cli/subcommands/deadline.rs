use clap::Subcommand;

/// Deadline entity commands.
#[derive(Clone, Debug, Subcommand)]
pub enum DeadlineCommands {
    /// Add a deadline to a university.
    Add {
        #[arg(long)]
        university: String,
        #[arg(long)]
        title: String,
        /// Due date (YYYY-MM-DD).
        #[arg(long)]
        date: String,
        /// application, document, recommendation, other
        #[arg(long = "type")]
        deadline_type: Option<String>,
        #[arg(long)]
        notes: Option<String>,
    },
    /// Update a deadline.
    Update {
        id: String,
        #[arg(long)]
        university: Option<String>,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        date: Option<String>,
        #[arg(long = "type")]
        deadline_type: Option<String>,
        #[arg(long)]
        notes: Option<String>,
    },
    /// Get a deadline by ID.
    Get { id: String },
    /// List deadlines with optional filters.
    List {
        #[arg(long)]
        university: Option<String>,
        #[arg(long = "type")]
        deadline_type: Option<String>,
        /// Only completed deadlines.
        #[arg(long, conflicts_with = "open")]
        done: bool,
        /// Only open deadlines.
        #[arg(long)]
        open: bool,
        #[arg(long)]
        search: Option<String>,
    },
    /// Mark a deadline completed.
    Complete { id: String },
    /// Mark a completed deadline open again.
    Reopen { id: String },
    /// Delete a deadline.
    Delete { id: String },
    /// Open deadlines due soon.
    Upcoming {
        /// Window in days (defaults to `general.upcoming_window_days`).
        #[arg(long)]
        days: Option<i64>,
    },
    /// Month grid with deadline markers, or one day's deadlines.
    Calendar {
        /// Month to render (YYYY-MM), defaults to the current month.
        #[arg(long)]
        month: Option<String>,
        /// List deadlines on one day (YYYY-MM-DD).
        #[arg(long, conflicts_with = "month")]
        day: Option<String>,
    },
}
