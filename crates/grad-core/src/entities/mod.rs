//! Entity structs for all gradtrack records.
//!
//! Each entity maps to a table in the libSQL store (see `grad-db` migrations).
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for JSON
//! output and schema validation.

mod deadline;
mod document;
mod post_grad;
mod profile;
mod requirement;
mod university;

pub use deadline::{Deadline, DeadlineWithUniversity};
pub use document::Document;
pub use post_grad::PostGradInfo;
pub use profile::Profile;
pub use requirement::Requirement;
pub use university::University;
