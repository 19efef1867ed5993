use crate::engine_state::{BridgeError, EngineState};
use crate::messages::{EngineToUi, UiToEngine};

/// Dispatch a UI message to the engine and return a response.
///
/// This is the main entry point for processing messages from the
/// JavaScript main thread; errors become `EngineToUi::Error` responses
/// carrying the originating request id.
pub fn dispatch(state: &mut EngineState, msg: UiToEngine) -> EngineToUi {
    let request_id = msg.request_id();
    match handle_message(state, msg) {
        Ok(response) => response,
        Err(e) => EngineToUi::Error {
            request_id: Some(request_id),
            message: e.to_string(),
        },
    }
}

fn handle_message(state: &mut EngineState, msg: UiToEngine) -> Result<EngineToUi, BridgeError> {
    match msg {
        UiToEngine::SetImage {
            request_id,
            width,
            height,
            pixels,
        } => {
            state.set_image(width, height, &pixels)?;
            regenerated(state, request_id)
        }

        UiToEngine::SetSampler { request_id, config } => {
            state.sampler = config;
            if state.field.is_some() {
                regenerated(state, request_id)
            } else {
                Ok(EngineToUi::ConfigStored { request_id })
            }
        }

        UiToEngine::SetGeometry { request_id, params } => {
            state.geometry = params;
            if state.field.is_some() {
                regenerated(state, request_id)
            } else {
                Ok(EngineToUi::ConfigStored { request_id })
            }
        }

        UiToEngine::Generate { request_id } => regenerated(state, request_id),

        UiToEngine::ExportStl {
            request_id,
            format,
            name,
        } => {
            let artifact = state.export(format, &name)?;
            Ok(EngineToUi::ExportReady {
                request_id,
                artifact,
            })
        }
    }
}

fn regenerated(
    state: &mut EngineState,
    request_id: uuid::Uuid,
) -> Result<EngineToUi, BridgeError> {
    let (generation, stats) = state.regenerate()?;
    Ok(EngineToUi::MeshUpdated {
        request_id,
        generation,
        stats,
    })
}
