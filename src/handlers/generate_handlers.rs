use actix_web::{HttpResponse, web};
use validator::Validate;

use crate::errors::ApiError;
use crate::models::options::RenderFormat;
use crate::models::qr_record::QrRecord;
use crate::state::app_state::AppState;
use crate::state::preview::Preview;
use crate::structs::generate_request::{GenerateRequest, GenerateResponse};
use crate::utils::logo::decode_logo;
use crate::utils::payload::format_content_by_type;
use crate::utils::render::{png_data_url, render_qr, render_svg};
use crate::utils::validate::validate_content;

/// Run the full generation lifecycle: validate, format, render, publish
/// the preview and persist the record best-effort. SVG renders are
/// stateless and skip the preview slot and history.
pub async fn generate_qr(
    app_state: web::Data<AppState>,
    web::Json(req): web::Json<GenerateRequest>,
) -> Result<HttpResponse, ApiError> {
    if let Err(errors) = req.validate() {
        return Ok(HttpResponse::BadRequest().json(errors));
    }
    req.check_config_shape()?;
    validate_content(req.content_type, &req.effective_content())?;

    let payload = format_content_by_type(
        req.content_type,
        &req.content,
        req.wifi.as_ref(),
        req.location.as_ref(),
    );

    if req.format == RenderFormat::Svg {
        let (content, qr_color, bg_color) =
            (payload, req.qr_color.clone(), req.bg_color.clone());
        let (size, error_correction) = (req.size, req.error_correction);
        let svg = web::block(move || {
            render_svg(&content, &qr_color, &bg_color, size, error_correction)
        })
        .await
        .map_err(|e| ApiError::Render(anyhow::Error::new(e)))?
        .map_err(ApiError::Render)?;

        return Ok(HttpResponse::Ok().json(GenerateResponse {
            success: true,
            data: svg,
            format: RenderFormat::Svg,
            generation_id: None,
        }));
    }

    // Logo type/size rejection happens before the blocking render starts.
    let logo = match &req.logo {
        Some(input) => Some(decode_logo(input)?),
        None => None,
    };

    let generation_id = app_state.preview.begin_generation();

    let (content, qr_color, bg_color) =
        (payload.clone(), req.qr_color.clone(), req.bg_color.clone());
    let (size, error_correction) = (req.size, req.error_correction);
    let data_url = web::block(move || {
        let img = render_qr(
            &content,
            &qr_color,
            &bg_color,
            size,
            error_correction,
            logo.as_ref(),
        )?;
        png_data_url(&img)
    })
    .await
    .map_err(|e| ApiError::Render(anyhow::Error::new(e)))?
    .map_err(ApiError::Render)?;

    let published = app_state
        .preview
        .publish(Preview {
            generation_id,
            data: data_url.clone(),
            format: RenderFormat::Png,
        })
        .await;
    if !published {
        log::debug!("generation {} superseded before display", generation_id);
    }

    // Persist in the background. A failed write only costs the history
    // entry; the rendered code has already been returned.
    let record = QrRecord::new(
        req.content_type,
        payload,
        req.qr_color,
        req.bg_color,
        req.size,
        req.error_correction,
        req.corner_style,
        req.template_name,
        data_url.clone(),
    );
    let db = app_state.db.clone();
    actix_web::rt::spawn(async move {
        let collection = db.collection::<QrRecord>("qr_codes");
        if let Err(e) = collection.insert_one(&record).await {
            log::error!("Failed to save QR code to history: {}", e);
        }
    });

    Ok(HttpResponse::Ok().json(GenerateResponse {
        success: true,
        data: data_url,
        format: RenderFormat::Png,
        generation_id: Some(generation_id),
    }))
}

/// The latest settled preview (the single display slot).
pub async fn get_preview(app_state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    match app_state.preview.latest().await {
        Some(preview) => Ok(HttpResponse::Ok().json(preview)),
        None => Err(ApiError::NotFound("No QR code generated yet".to_owned())),
    }
}

/// Fallback for unexpected verbs on the generate resource.
pub async fn method_not_allowed() -> HttpResponse {
    HttpResponse::MethodNotAllowed().json(serde_json::json!({ "error": "Method not allowed" }))
}
