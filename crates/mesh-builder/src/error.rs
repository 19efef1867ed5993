/// Errors during mesh construction. All checks run before any triangle is
/// emitted; construction is all-or-nothing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    #[error(
        "polar mask {columns}x{rows} is too coarse; at least 3 columns and 3 rows are required"
    )]
    InvalidResolution { columns: usize, rows: usize },

    #[error("invalid geometry: {reason}")]
    InvalidGeometry { reason: String },
}

impl BuildError {
    pub(crate) fn geometry(reason: impl Into<String>) -> Self {
        BuildError::InvalidGeometry {
            reason: reason.into(),
        }
    }
}
