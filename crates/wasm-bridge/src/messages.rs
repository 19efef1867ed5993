use serde::{Deserialize, Serialize};
use uuid::Uuid;

use shade_types::{GeometryParams, SamplerConfig};
use stl_format::StlArtifact;

/// Messages from the UI (JavaScript main thread) to the engine (WASM
/// Worker). Serialized as JSON for postMessage transfer. Every message
/// carries a request id the response echoes back, so the UI can discard
/// responses from superseded requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum UiToEngine {
    /// Load a silhouette image (RGBA pixels, base64-encoded) and sample
    /// its occupancy field.
    SetImage {
        request_id: Uuid,
        width: usize,
        height: usize,
        pixels: String,
    },
    /// Update the sampling configuration; regenerates when an image is
    /// loaded.
    SetSampler {
        request_id: Uuid,
        config: SamplerConfig,
    },
    /// Update the lampshade geometry; regenerates when an image is loaded.
    SetGeometry {
        request_id: Uuid,
        params: GeometryParams,
    },
    /// Run the full pipeline on the current image and settings.
    Generate { request_id: Uuid },
    /// Serialize the latest mesh as a downloadable STL artifact.
    ExportStl {
        request_id: Uuid,
        format: StlFormat,
        name: String,
    },
}

impl UiToEngine {
    pub fn request_id(&self) -> Uuid {
        match self {
            UiToEngine::SetImage { request_id, .. }
            | UiToEngine::SetSampler { request_id, .. }
            | UiToEngine::SetGeometry { request_id, .. }
            | UiToEngine::Generate { request_id }
            | UiToEngine::ExportStl { request_id, .. } => *request_id,
        }
    }
}

/// Output flavor for STL export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StlFormat {
    Binary,
    Ascii,
}

/// Messages from the engine (WASM Worker) back to the UI.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum EngineToUi {
    /// A regeneration completed. `generation` increases monotonically;
    /// the UI keeps only the highest generation it has seen.
    MeshUpdated {
        request_id: Uuid,
        generation: u64,
        stats: MeshStats,
    },

    /// A setting was stored but no image is loaded yet, so nothing was
    /// regenerated.
    ConfigStored { request_id: Uuid },

    /// An export artifact is ready for download.
    ExportReady {
        request_id: Uuid,
        artifact: StlArtifact,
    },

    /// An error occurred in the engine.
    Error {
        request_id: Option<Uuid>,
        message: String,
    },
}

/// Summary of a generated mesh for the UI status line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeshStats {
    pub triangle_count: usize,
    pub mask_columns: usize,
    pub mask_rows: usize,
    /// Solid cells after the forced-solid policy was applied.
    pub solid_cells: usize,
}
