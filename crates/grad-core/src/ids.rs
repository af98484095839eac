//! ID prefix constants.
//!
//! IDs are `<prefix>-<8 hex chars>`, generated by `grad-db` via `randomblob`.

pub const PREFIX_UNIVERSITY: &str = "uni";
pub const PREFIX_DEADLINE: &str = "ddl";
pub const PREFIX_DOCUMENT: &str = "doc";
pub const PREFIX_REQUIREMENT: &str = "req";
pub const PREFIX_POST_GRAD: &str = "pgi";

pub const ALL_PREFIXES: &[&str] = &[
    PREFIX_UNIVERSITY,
    PREFIX_DEADLINE,
    PREFIX_DOCUMENT,
    PREFIX_REQUIREMENT,
    PREFIX_POST_GRAD,
];

/// Return the prefix part of an ID, if it has one.
#[must_use]
pub fn prefix_of(id: &str) -> Option<&str> {
    id.split_once('-').map(|(prefix, _)| prefix)
}
