use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::models::options::{ContentType, CornerStyle, ErrorCorrectionLevel};

/// A generated QR code as persisted in the `qr_codes` collection.
/// Records are created once and deleted on request, never updated;
/// restoring one simply feeds its fields back into a new generation.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct QrRecord {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub content_type: ContentType,
    /// The formatted payload handed to the encoder, not the raw user input.
    pub content: String,
    pub qr_color: String,
    pub bg_color: String,
    pub size: u32,
    pub error_correction: ErrorCorrectionLevel,
    pub corner_style: CornerStyle,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_name: Option<String>,
    /// Rendered image as a PNG data URI.
    pub qr_data_url: String,
    pub created_at: i64, // Timestamp in milliseconds
}

impl QrRecord {
    pub fn new(
        content_type: ContentType,
        content: String,
        qr_color: String,
        bg_color: String,
        size: u32,
        error_correction: ErrorCorrectionLevel,
        corner_style: CornerStyle,
        template_name: Option<String>,
        qr_data_url: String,
    ) -> Self {
        Self {
            id: None,
            content_type,
            content,
            qr_color,
            bg_color,
            size,
            error_correction,
            corner_style,
            template_name,
            qr_data_url,
            created_at: chrono::Utc::now().timestamp_millis(),
        }
    }
}
