use clap::{Args, Subcommand};

use crate::cli::subcommands::{
    AiCommands, DeadlineCommands, DocumentCommands, PostGradCommands, ProfileCommands,
    RequirementCommands, UniversityCommands,
};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Create the database and the local profile.
    Init,
    /// The local applicant profile.
    Profile {
        #[command(subcommand)]
        action: ProfileCommands,
    },
    /// Tracked universities and programs.
    University {
        #[command(subcommand)]
        action: UniversityCommands,
    },
    /// Deadlines tied to a university.
    Deadline {
        #[command(subcommand)]
        action: DeadlineCommands,
    },
    /// Application documents.
    Document {
        #[command(subcommand)]
        action: DocumentCommands,
    },
    /// Admission requirements per university.
    Requirement {
        #[command(subcommand)]
        action: RequirementCommands,
    },
    /// Post-graduation outcomes per university.
    #[command(name = "postgrad")]
    PostGrad {
        #[command(subcommand)]
        action: PostGradCommands,
    },
    /// Status counts, upcoming deadlines and recent universities.
    Dashboard,
    /// Deadline, status and document notices.
    Notifications(NotificationsArgs),
    /// Application-season phases and overall progress.
    Timeline,
    /// AI-assisted university search.
    Ai {
        #[command(subcommand)]
        action: AiCommands,
    },
}

/// Arguments for `gradt notifications`.
#[derive(Clone, Debug, Args)]
pub struct NotificationsArgs {
    /// Days ahead to look for due deadlines.
    #[arg(long)]
    pub days: Option<i64>,
}
