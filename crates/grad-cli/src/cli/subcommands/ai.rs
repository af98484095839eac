use clap::Subcommand;

/// AI search commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AiCommands {
    /// Search universities matching a free-text query.
    Search {
        query: String,
        /// Save the result at this index (0-based) as a tracked university.
        #[arg(long)]
        save: Option<usize>,
    },
    /// Details for one university.
    Details { name: String },
    /// Recommendations for an applicant profile.
    Recommend {
        /// Field of interest (repeatable).
        #[arg(long = "interest")]
        interests: Vec<String>,
        /// Preferred location (repeatable).
        #[arg(long = "location")]
        locations: Vec<String>,
        #[arg(long, default_value = "")]
        budget: String,
        #[arg(long, default_value = "")]
        background: String,
        /// Save the recommendation at this index (0-based) as a tracked university.
        #[arg(long)]
        save: Option<usize>,
    },
}
