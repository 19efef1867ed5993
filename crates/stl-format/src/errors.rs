/// Errors during STL serialization and parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StlError {
    #[error("mesh has no triangles")]
    EmptyMesh,

    #[error("serialized length {actual} does not match the expected {expected} bytes")]
    SizeMismatch { expected: usize, actual: usize },

    #[error("STL data truncated: {detail}")]
    Truncated { detail: String },

    #[error("STL layout invalid: {detail}")]
    BadLayout { detail: String },
}
