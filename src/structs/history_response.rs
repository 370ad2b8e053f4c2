use serde::{Deserialize, Serialize};

use crate::models::options::{ContentType, CornerStyle, ErrorCorrectionLevel, ExportFormat};
use crate::models::qr_record::QrRecord;

/// API-facing view of a history record, with the ObjectId flattened to hex.
#[derive(Serialize, Debug)]
pub struct HistoryRecordResponse {
    pub id: String,
    pub content_type: ContentType,
    pub content: String,
    pub qr_color: String,
    pub bg_color: String,
    pub size: u32,
    pub error_correction: ErrorCorrectionLevel,
    pub corner_style: CornerStyle,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_name: Option<String>,
    pub qr_data_url: String,
    pub created_at: i64,
}

impl From<QrRecord> for HistoryRecordResponse {
    fn from(record: QrRecord) -> Self {
        Self {
            id: record.id.map(|id| id.to_hex()).unwrap_or_default(),
            content_type: record.content_type,
            content: record.content,
            qr_color: record.qr_color,
            bg_color: record.bg_color,
            size: record.size,
            error_correction: record.error_correction,
            corner_style: record.corner_style,
            template_name: record.template_name,
            qr_data_url: record.qr_data_url,
            created_at: record.created_at,
        }
    }
}

#[derive(Deserialize, Debug)]
pub struct HistoryListParams {
    pub limit: Option<i64>,
}

#[derive(Deserialize, Debug)]
pub struct ExportParams {
    pub format: ExportFormat,
    pub filename: Option<String>,
}
