//! Update builder types for entity mutations.
//!
//! Each builder produces an update struct with `Option` fields. Only `Some` fields
//! generate SET clauses in the dynamic UPDATE SQL. `Option<Option<_>>` fields
//! distinguish "leave alone" from "clear".

pub mod deadline;
pub mod document;
pub mod profile;
pub mod university;

/// Accumulates `col = ?N` clauses and their parameters for a dynamic UPDATE.
#[derive(Default)]
pub(crate) struct SetClauses {
    sets: Vec<String>,
    params: Vec<libsql::Value>,
}

impl SetClauses {
    pub(crate) fn push(&mut self, column: &str, value: impl Into<libsql::Value>) {
        self.params.push(value.into());
        self.sets.push(format!("{column} = ?{}", self.params.len()));
    }

    /// A clause with no parameter, e.g. `version = version + 1`.
    pub(crate) fn push_raw(&mut self, clause: &str) {
        self.sets.push(clause.to_string());
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    /// Index the next parameter will get.
    pub(crate) fn next_idx(&self) -> usize {
        self.params.len() + 1
    }

    pub(crate) fn extend_params(&mut self, params: impl IntoIterator<Item = libsql::Value>) {
        self.params.extend(params);
    }

    /// Consume into the joined SET list and the parameter vector.
    pub(crate) fn finish(self) -> (String, Vec<libsql::Value>) {
        (self.sets.join(", "), self.params)
    }
}
