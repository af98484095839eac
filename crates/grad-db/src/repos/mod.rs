//! Repository methods, one module per table, all as `impl GradService`.

pub mod deadline;
pub mod document;
pub mod post_grad;
pub mod profile;
pub mod requirement;
pub mod university;

pub use deadline::NewDeadline;
pub use document::NewDocument;
pub use post_grad::PostGradInput;
pub use requirement::RequirementInput;
pub use university::NewUniversity;
