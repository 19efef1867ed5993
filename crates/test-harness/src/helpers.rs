//! Helper functions: error type, bridge drivers, mesh math.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use uuid::Uuid;

use shade_types::Mesh;
use wasm_bridge::messages::{EngineToUi, UiToEngine};
use wasm_bridge::{dispatch, EngineState};

/// Unified error type for the test harness.
#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    #[error("assertion failed: {detail}")]
    AssertionFailed { detail: String },

    #[error("STL error: {reason}")]
    StlError { reason: String },

    #[error("dispatch error: {message}")]
    DispatchError { message: String },
}

/// Axis-aligned bounding box of a mesh as (min, max) corners.
pub fn mesh_bounding_box(mesh: &Mesh) -> ([f32; 3], [f32; 3]) {
    let mut min = [f32::MAX; 3];
    let mut max = [f32::MIN; 3];
    for tri in &mesh.triangles {
        for v in tri.vertices {
            let p = [v.x, v.y, v.z];
            for i in 0..3 {
                min[i] = min[i].min(p[i]);
                max[i] = max[i].max(p[i]);
            }
        }
    }
    (min, max)
}

/// Load an RGBA buffer into a fresh engine via dispatch, panicking on an
/// error response (tests expecting failure dispatch by hand instead).
pub fn engine_with_image(pixels: &[u8], width: usize, height: usize) -> EngineState {
    let mut state = EngineState::new();
    let response = dispatch(
        &mut state,
        UiToEngine::SetImage {
            request_id: Uuid::new_v4(),
            width,
            height,
            pixels: STANDARD.encode(pixels),
        },
    );
    match response {
        EngineToUi::MeshUpdated { .. } => state,
        other => panic!("image load failed: {other:?}"),
    }
}

/// Dispatch a SetImage and return the raw response (for failure cases).
pub fn try_set_image(
    state: &mut EngineState,
    pixels: &[u8],
    width: usize,
    height: usize,
) -> EngineToUi {
    dispatch(
        state,
        UiToEngine::SetImage {
            request_id: Uuid::new_v4(),
            width,
            height,
            pixels: STANDARD.encode(pixels),
        },
    )
}
