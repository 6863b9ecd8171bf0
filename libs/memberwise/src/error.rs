use thiserror::Error;

/// Errors reported by the validation pass and the checked presence query.
///
/// Comparison itself never fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The descriptor table lists the same field path twice.
    #[error("type '{type_name}' declares field '{path}' more than once")]
    DuplicateField {
        type_name: &'static str,
        path: &'static str,
    },

    /// `is_ignored` disagrees with the descriptor table.
    #[error(
        "type '{type_name}' declares field '{path}' with ignored = {declared}, \
         but is_ignored disagrees"
    )]
    InconsistentMarker {
        type_name: &'static str,
        path: &'static str,
        declared: bool,
    },

    /// The queried field is not declared by the type.
    #[error("type '{type_name}' has no field '{path}'")]
    UnknownField {
        type_name: &'static str,
        path: String,
    },
}
