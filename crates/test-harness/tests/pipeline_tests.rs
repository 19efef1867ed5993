//! End-to-end pipeline tests: silhouette image → polar mask → mesh → STL,
//! driven through the same `dispatch()` function the WASM worker calls.

use uuid::Uuid;

use stl_format::read_binary;
use test_harness::assertions::{assert_normals_valid, assert_size_invariant};
use test_harness::helpers::{engine_with_image, try_set_image};
use test_harness::images;
use test_harness::inspect::{inspect_mesh, inspect_stl};
use wasm_bridge::messages::{EngineToUi, StlFormat, UiToEngine};
use wasm_bridge::{dispatch, EngineState};

fn export_binary(state: &mut EngineState) -> Vec<u8> {
    let response = dispatch(
        state,
        UiToEngine::ExportStl {
            request_id: Uuid::new_v4(),
            format: StlFormat::Binary,
            name: "shade".to_string(),
        },
    );
    match response {
        EngineToUi::ExportReady { artifact, .. } => artifact.data,
        other => panic!("expected ExportReady, got {other:?}"),
    }
}

#[test]
fn ring_silhouette_produces_a_manifold_shade() {
    let mut state = engine_with_image(&images::ring(128, 0.35, 0.8), 128, 128);
    let bytes = export_binary(&mut state);

    let report = inspect_stl(&bytes).unwrap();
    assert!(report.triangle_count > 0);
    assert!(
        report.is_manifold(),
        "ring shade leaked:\n{report}"
    );
    assert_size_invariant(&bytes, report.triangle_count, "ring shade").unwrap();
}

#[test]
fn wedge_silhouette_produces_window_columns_and_stays_sealed() {
    let mut state = engine_with_image(&images::wedges(128, 12), 128, 128);
    let stats = state.stats().unwrap().clone();
    let total = stats.mask_columns * stats.mask_rows;
    // Wedges open real windows; the policy keeps the shell partial, not full.
    assert!(stats.solid_cells > 0);
    assert!(stats.solid_cells < total);

    let bytes = export_binary(&mut state);
    let report = inspect_stl(&bytes).unwrap();
    assert!(report.is_manifold(), "wedge shade leaked:\n{report}");
}

#[test]
fn generated_mesh_normals_are_valid() {
    let state = engine_with_image(&images::ring(96, 0.3, 0.85), 96, 96);
    assert_normals_valid(state.mesh().unwrap(), "ring shade").unwrap();
}

#[test]
fn all_black_image_rejected_with_lower_threshold_hint() {
    let mut state = EngineState::new();
    match try_set_image(&mut state, &images::all_black(32), 32, 32) {
        EngineToUi::Error { message, .. } => {
            assert!(message.contains("lower the threshold"), "got: {message}");
        }
        other => panic!("expected Error, got {other:?}"),
    }
}

#[test]
fn all_white_image_rejected_with_raise_threshold_hint() {
    let mut state = EngineState::new();
    match try_set_image(&mut state, &images::all_white(32), 32, 32) {
        EngineToUi::Error { message, .. } => {
            assert!(message.contains("raise the threshold"), "got: {message}");
        }
        other => panic!("expected Error, got {other:?}"),
    }
}

#[test]
fn transparent_image_rejected_like_all_white() {
    let mut state = EngineState::new();
    match try_set_image(&mut state, &images::fully_transparent(32), 32, 32) {
        EngineToUi::Error { message, .. } => {
            assert!(message.contains("raise the threshold"), "got: {message}");
        }
        other => panic!("expected Error, got {other:?}"),
    }
}

#[test]
fn zero_sized_image_rejected() {
    let mut state = EngineState::new();
    match try_set_image(&mut state, &[], 0, 0) {
        EngineToUi::Error { message, .. } => assert!(message.contains("empty")),
        other => panic!("expected Error, got {other:?}"),
    }
}

#[test]
fn binary_round_trip_preserves_geometry() {
    let mut state = engine_with_image(&images::ring(96, 0.4, 0.9), 96, 96);
    let bytes = export_binary(&mut state);

    let model = read_binary(&bytes).unwrap();
    assert_eq!(model.triangle_count(), state.stats().unwrap().triangle_count);

    // Re-serialize the parsed mesh: same layout, same bytes.
    let again = stl_format::write_binary(&model.to_mesh(), "shade").unwrap();
    assert_eq!(bytes.len(), again.len());
    assert_eq!(bytes[84..], again[84..]);
}

#[test]
fn in_memory_and_serialized_inspection_agree() {
    let mut state = engine_with_image(&images::wedges(96, 8), 96, 96);
    let from_mesh = inspect_mesh(state.mesh().unwrap());
    let bytes = export_binary(&mut state);
    let from_stl = inspect_stl(&bytes).unwrap();

    assert_eq!(from_mesh.triangle_count, from_stl.triangle_count);
    assert_eq!(from_mesh.distinct_edges, from_stl.distinct_edges);
    assert_eq!(from_mesh.open_edges, from_stl.open_edges);
    assert_eq!(from_mesh.non_manifold_edges, from_stl.non_manifold_edges);
}
