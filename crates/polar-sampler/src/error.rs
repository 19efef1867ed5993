/// Errors during silhouette sampling and polar resampling.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SampleError {
    #[error("image is empty: {width}x{height} with {byte_len} pixel bytes")]
    EmptyImage {
        width: usize,
        height: usize,
        byte_len: usize,
    },

    #[error("silhouette is uniformly solid (all dark); lower the threshold")]
    UniformlySolid,

    #[error("silhouette is uniformly empty (all light or transparent); raise the threshold")]
    UniformlyEmpty,

    #[error("angular resolution {columns} is too low; at least 3 columns are required")]
    InvalidResolution { columns: usize },
}
