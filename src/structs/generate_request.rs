use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::errors::ApiError;
use crate::models::options::{
    ContentType, CornerStyle, ErrorCorrectionLevel, RenderFormat, WifiEncryption,
};

#[derive(Deserialize, Debug, Validate)]
pub struct GenerateRequest {
    pub content_type: ContentType,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub wifi: Option<WifiConfig>,
    #[serde(default)]
    pub location: Option<LocationConfig>,
    #[serde(default = "default_qr_color")]
    pub qr_color: String,
    #[serde(default = "default_bg_color")]
    pub bg_color: String,
    #[validate(range(min = 200, max = 800, message = "Size must be between 200 and 800 pixels"))]
    #[serde(default = "default_size")]
    pub size: u32,
    #[serde(default = "default_error_correction")]
    pub error_correction: ErrorCorrectionLevel,
    #[serde(default = "default_corner_style")]
    pub corner_style: CornerStyle,
    #[serde(default)]
    pub template_name: Option<String>,
    /// Optional logo as a data URI or raw base64.
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default = "default_format")]
    pub format: RenderFormat,
}

impl GenerateRequest {
    /// Exactly one of wifi/location may be populated, and only when it
    /// matches the declared content type.
    pub fn check_config_shape(&self) -> Result<(), ApiError> {
        match self.content_type {
            ContentType::Wifi => {
                if self.wifi.is_none() {
                    return Err(ApiError::Validation(
                        "WiFi configuration is required for WiFi content".to_owned(),
                    ));
                }
            }
            ContentType::Location => {
                if self.location.is_none() {
                    return Err(ApiError::Validation(
                        "Location configuration is required for location content".to_owned(),
                    ));
                }
            }
            _ => {}
        }
        if self.wifi.is_some() && self.content_type != ContentType::Wifi {
            return Err(ApiError::Validation(
                "WiFi configuration is only valid for WiFi content".to_owned(),
            ));
        }
        if self.location.is_some() && self.content_type != ContentType::Location {
            return Err(ApiError::Validation(
                "Location configuration is only valid for location content".to_owned(),
            ));
        }
        Ok(())
    }

    /// The string the validator runs against: structured types validate
    /// their own fields, free-form types validate the raw content.
    pub fn effective_content(&self) -> String {
        match (&self.wifi, &self.location, self.content_type) {
            (Some(w), _, ContentType::Wifi) => w.ssid.clone(),
            (_, Some(l), ContentType::Location) => format!("{},{}", l.latitude, l.longitude),
            _ => self.content.clone(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct WifiConfig {
    pub ssid: String,
    #[serde(default)]
    pub password: String,
    pub encryption: WifiEncryption,
    #[serde(default)]
    pub hidden: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy)]
pub struct LocationConfig {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Serialize, Debug)]
pub struct GenerateResponse {
    pub success: bool,
    /// PNG data URI, or SVG markup for vector renders.
    pub data: String,
    pub format: RenderFormat,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_id: Option<u64>,
}

fn default_qr_color() -> String {
    "#000000".to_owned()
}

fn default_bg_color() -> String {
    "#FFFFFF".to_owned()
}

fn default_size() -> u32 {
    300
}

fn default_error_correction() -> ErrorCorrectionLevel {
    ErrorCorrectionLevel::M
}

fn default_corner_style() -> CornerStyle {
    CornerStyle::Square
}

fn default_format() -> RenderFormat {
    RenderFormat::Png
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fill_in_everything_but_type_and_content() {
        let req: GenerateRequest =
            serde_json::from_str(r#"{"content_type":"url","content":"example.com"}"#).unwrap();
        assert_eq!(req.qr_color, "#000000");
        assert_eq!(req.bg_color, "#FFFFFF");
        assert_eq!(req.size, 300);
        assert_eq!(req.error_correction, ErrorCorrectionLevel::M);
        assert_eq!(req.corner_style, CornerStyle::Square);
        assert_eq!(req.format, RenderFormat::Png);
        assert!(req.wifi.is_none());
        assert!(req.logo.is_none());
    }

    #[test]
    fn wifi_content_requires_a_wifi_config() {
        let req: GenerateRequest =
            serde_json::from_str(r#"{"content_type":"wifi","content":"x"}"#).unwrap();
        assert!(req.check_config_shape().is_err());

        let req: GenerateRequest = serde_json::from_str(
            r#"{"content_type":"wifi","wifi":{"ssid":"Home","password":"pw","encryption":"WPA"}}"#,
        )
        .unwrap();
        assert!(req.check_config_shape().is_ok());
        assert_eq!(req.effective_content(), "Home");
    }

    #[test]
    fn mismatched_configs_are_rejected() {
        let req: GenerateRequest = serde_json::from_str(
            r#"{"content_type":"url","content":"example.com","location":{"latitude":1.0,"longitude":2.0}}"#,
        )
        .unwrap();
        assert!(req.check_config_shape().is_err());
    }

    #[test]
    fn size_range_is_enforced_by_the_validator() {
        use validator::Validate;

        let req: GenerateRequest =
            serde_json::from_str(r#"{"content_type":"text","content":"hi","size":100}"#).unwrap();
        assert!(req.validate().is_err());

        let req: GenerateRequest =
            serde_json::from_str(r#"{"content_type":"text","content":"hi","size":800}"#).unwrap();
        assert!(req.validate().is_ok());
    }
}
