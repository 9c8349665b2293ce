//! Route handlers.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use tint_color::{luminosity_ramp, ColorReport};
use tint_config::MAX_PALETTE_STEPS;
use tracing::debug;

use crate::api::{GenerateRequest, HealthResponse, PaletteResponse};
use crate::error::{AppError, AppResult};
use crate::state::AppState;

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// `POST /generate`: every form and conversion of `base`.
pub async fn generate(
    State(state): State<AppState>,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> AppResult<Json<ColorReport>> {
    let request = read_request(payload)?;
    let report = state.color.describe(&request.base)?;

    debug!(input = %report.input, kind = %report.kind, hex = %report.hex, "described color");
    Ok(Json(report))
}

/// `POST /generate/palette`: hue and saturation of `base` held constant
/// across a ramp of luminosity steps.
pub async fn palette(
    State(state): State<AppState>,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> AppResult<Json<PaletteResponse>> {
    let request = read_request(payload)?;
    let options = request.step_options(&state.palette);
    if options.count > MAX_PALETTE_STEPS {
        return Err(AppError::BadRequest(format!(
            "steps = {} exceeds the maximum of {MAX_PALETTE_STEPS}",
            options.count
        )));
    }

    let report = state.color.describe(&request.base)?;
    let steps = options.steps()?;
    let palette = luminosity_ramp(report.hsl, &steps);

    debug!(base = %report.hex, steps = steps.len(), "generated palette");
    Ok(Json(PaletteResponse {
        base: report.hex,
        hsl: report.hsl,
        steps,
        palette,
    }))
}

fn read_request(payload: Result<Json<GenerateRequest>, JsonRejection>) -> AppResult<GenerateRequest> {
    payload
        .map(|Json(request)| request)
        .map_err(|rejection| AppError::BadRequest(rejection.body_text()))
}
