use clap::Subcommand;

/// Post-graduation info commands, keyed by university ID.
#[derive(Clone, Debug, Subcommand)]
pub enum PostGradCommands {
    /// Create or replace a university's post-graduation info.
    Set {
        university_id: String,
        #[arg(long)]
        opt: bool,
        #[arg(long)]
        stem: bool,
        #[arg(long)]
        h1b: bool,
        /// Average starting salary.
        #[arg(long, default_value_t = 0)]
        salary: i64,
        /// Top employer (repeatable).
        #[arg(long = "employer")]
        employers: Vec<String>,
        /// Job placement rate, 0-100.
        #[arg(long, default_value_t = 0.0)]
        placement_rate: f64,
        #[arg(long)]
        notes: Option<String>,
    },
    /// Get a university's post-graduation info.
    Get { university_id: String },
    /// List all post-graduation info.
    List,
    /// Aggregate counts and averages.
    Summary,
    /// Delete a university's post-graduation info.
    Delete { university_id: String },
}
