mod ai;
mod deadline;
mod document;
mod post_grad;
mod profile;
mod requirement;
mod university;

pub use ai::AiCommands;
pub use deadline::DeadlineCommands;
pub use document::DocumentCommands;
pub use post_grad::PostGradCommands;
pub use profile::ProfileCommands;
pub use requirement::RequirementCommands;
pub use university::UniversityCommands;
