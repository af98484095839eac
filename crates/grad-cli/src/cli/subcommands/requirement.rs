use clap::Subcommand;

/// Requirement commands, keyed by university ID.
#[derive(Clone, Debug, Subcommand)]
pub enum RequirementCommands {
    /// Create or replace a university's requirements. Zero means not required.
    Set {
        university_id: String,
        #[arg(long, default_value_t = 0)]
        gre: u32,
        #[arg(long, default_value_t = 0)]
        toefl: u32,
        #[arg(long, default_value_t = 0.0)]
        gpa: f64,
        #[arg(long)]
        background: Option<String>,
        #[arg(long)]
        notes: Option<String>,
    },
    /// Get a university's requirements.
    Get { university_id: String },
    /// List all requirements.
    List,
    /// Compare requirements against the applicant's scores.
    Check {
        /// Check one university (all when omitted).
        university_id: Option<String>,
        /// Override `applicant.gre`.
        #[arg(long)]
        gre: Option<u32>,
        /// Override `applicant.toefl`.
        #[arg(long)]
        toefl: Option<u32>,
        /// Override `applicant.gpa`.
        #[arg(long)]
        gpa: Option<f64>,
    },
    /// Delete a university's requirements.
    Delete { university_id: String },
}
