use actix_web::{HttpResponse, http::header, web};
use futures_util::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};

use crate::errors::ApiError;
use crate::models::options::ExportFormat;
use crate::models::qr_record::QrRecord;
use crate::state::app_state::AppState;
use crate::structs::history_response::{ExportParams, HistoryListParams, HistoryRecordResponse};
use crate::utils::export::{decode_data_url, to_jpeg};
use crate::utils::render::render_svg;

const DEFAULT_HISTORY_LIMIT: i64 = 10;
const MAX_HISTORY_LIMIT: i64 = 50;

/// List generated codes, newest first.
pub async fn get_history(
    app_state: web::Data<AppState>,
    query: web::Query<HistoryListParams>,
) -> Result<HttpResponse, ApiError> {
    let limit = query
        .limit
        .unwrap_or(DEFAULT_HISTORY_LIMIT)
        .clamp(1, MAX_HISTORY_LIMIT);

    let collection = app_state.db.collection::<QrRecord>("qr_codes");
    let records = collection
        .find(doc! {})
        .sort(doc! { "created_at": -1 })
        .limit(limit)
        .await?
        .try_collect::<Vec<QrRecord>>()
        .await?;

    let responses: Vec<HistoryRecordResponse> =
        records.into_iter().map(HistoryRecordResponse::from).collect();

    Ok(HttpResponse::Ok().json(responses))
}

/// Delete a history record. Records are never updated, only removed.
pub async fn delete_history_record(
    app_state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let object_id = ObjectId::parse_str(&id)
        .map_err(|_| ApiError::Validation("Invalid record ID format".to_owned()))?;

    let collection = app_state.db.collection::<QrRecord>("qr_codes");
    let result = collection.delete_one(doc! { "_id": object_id }).await?;

    if result.deleted_count == 0 {
        return Err(ApiError::NotFound("Record not found".to_owned()));
    }

    Ok(HttpResponse::NoContent().finish())
}

/// Export a stored record as a downloadable file.
///
/// PNG returns the stored bytes; JPG re-encodes them onto an opaque white
/// background; SVG re-encodes the stored payload through the vector
/// renderer with the record's colors and size.
pub async fn export_history_record(
    app_state: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<ExportParams>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let object_id = ObjectId::parse_str(&id)
        .map_err(|_| ApiError::Validation("Invalid record ID format".to_owned()))?;

    let collection = app_state.db.collection::<QrRecord>("qr_codes");
    let record = collection
        .find_one(doc! { "_id": object_id })
        .await?
        .ok_or_else(|| ApiError::NotFound("Record not found".to_owned()))?;

    let bytes = match query.format {
        ExportFormat::Png => decode_data_url(&record.qr_data_url).map_err(ApiError::Render)?,
        ExportFormat::Jpg => {
            let png = decode_data_url(&record.qr_data_url).map_err(ApiError::Render)?;
            web::block(move || to_jpeg(&png))
                .await
                .map_err(|e| ApiError::Render(anyhow::Error::new(e)))?
                .map_err(ApiError::Render)?
        }
        ExportFormat::Svg => render_svg(
            &record.content,
            &record.qr_color,
            &record.bg_color,
            record.size,
            record.error_correction,
        )
        .map_err(ApiError::Render)?
        .into_bytes(),
    };

    let basename = query
        .filename
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .unwrap_or("qrcode")
        .replace(['"', '/', '\\'], "_");

    Ok(HttpResponse::Ok()
        .content_type(query.format.content_type())
        .insert_header((
            header::CONTENT_DISPOSITION,
            format!(
                "attachment; filename=\"{}.{}\"",
                basename,
                query.format.extension()
            ),
        ))
        .body(bytes))
}
