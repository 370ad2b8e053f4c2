use base64::{Engine as _, engine::general_purpose};
use image::DynamicImage;

use crate::errors::ApiError;

/// Maximum accepted logo file size, enforced before any pixel decoding.
pub const MAX_LOGO_BYTES: usize = 2 * 1024 * 1024;

/// Request bodies must be able to carry an oversized base64 logo so it is
/// this boundary that rejects it, with a useful message, rather than the
/// transport's payload cap.
pub const JSON_BODY_LIMIT: usize = 6 * 1024 * 1024;

/// Decode an uploaded logo, supplied either as a `data:image/...;base64,`
/// URI or as raw base64. Type and size are checked before the bytes are
/// read as an image; rejected uploads never reach the renderer.
pub fn decode_logo(input: &str) -> Result<DynamicImage, ApiError> {
    let (declared_mime, encoded) = match input.strip_prefix("data:") {
        Some(rest) => {
            let (mime, payload) = rest.split_once(";base64,").ok_or_else(|| {
                ApiError::FileInput("Logo must be supplied as base64 data".to_owned())
            })?;
            (Some(mime), payload)
        }
        None => (None, input),
    };

    if let Some(mime) = declared_mime {
        if !mime.starts_with("image/") {
            return Err(ApiError::FileInput(
                "Please select an image file".to_owned(),
            ));
        }
    }

    // Base64 expands 3 bytes to 4 characters; reject oversized uploads
    // from the encoded length alone, before decoding anything.
    if encoded.len() / 4 * 3 > MAX_LOGO_BYTES {
        return Err(ApiError::FileInput(
            "Image size should be less than 2MB".to_owned(),
        ));
    }

    let bytes = general_purpose::STANDARD
        .decode(encoded.trim())
        .map_err(|_| ApiError::FileInput("Logo is not valid base64 data".to_owned()))?;

    if bytes.len() > MAX_LOGO_BYTES {
        return Err(ApiError::FileInput(
            "Image size should be less than 2MB".to_owned(),
        ));
    }

    // Raw base64 carries no MIME declaration; sniff the container format
    // before handing the bytes to the decoder.
    if declared_mime.is_none() && image::guess_format(&bytes).is_err() {
        return Err(ApiError::FileInput(
            "Please select an image file".to_owned(),
        ));
    }

    image::load_from_memory(&bytes)
        .map_err(|_| ApiError::FileInput("Unable to read the logo image".to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};
    use std::io::Cursor;

    fn tiny_png_base64() -> String {
        let img = RgbaImage::from_pixel(4, 4, Rgba([10, 20, 30, 255]));
        let mut bytes = Vec::new();
        DynamicImage::ImageRgba8(img)
            .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
            .unwrap();
        general_purpose::STANDARD.encode(&bytes)
    }

    #[test]
    fn accepts_a_data_uri_logo() {
        let data_url = format!("data:image/png;base64,{}", tiny_png_base64());
        let logo = decode_logo(&data_url).unwrap();
        assert_eq!(logo.width(), 4);
        assert_eq!(logo.height(), 4);
    }

    #[test]
    fn accepts_raw_base64() {
        let logo = decode_logo(&tiny_png_base64()).unwrap();
        assert_eq!(logo.width(), 4);
    }

    #[test]
    fn oversized_upload_is_refused_before_decoding() {
        // ~3MB of payload once decoded; the reject happens on the encoded
        // length, so the content does not even need to be valid base64.
        let huge = format!("data:image/png;base64,{}", "A".repeat(4 * 1024 * 1024));
        match decode_logo(&huge) {
            Err(ApiError::FileInput(msg)) => assert!(msg.contains("2MB")),
            other => panic!("expected a file input error, got {other:?}"),
        }
    }

    #[test]
    fn non_image_mime_is_refused() {
        let text = general_purpose::STANDARD.encode(b"hello world");
        let data_url = format!("data:text/plain;base64,{}", text);
        assert!(matches!(
            decode_logo(&data_url),
            Err(ApiError::FileInput(_))
        ));
    }

    #[test]
    fn raw_base64_of_non_image_bytes_is_refused() {
        let not_an_image = general_purpose::STANDARD.encode(b"definitely not pixels");
        assert!(matches!(
            decode_logo(&not_an_image),
            Err(ApiError::FileInput(_))
        ));
    }

    #[test]
    fn malformed_base64_is_refused() {
        assert!(matches!(
            decode_logo("data:image/png;base64,@@@@"),
            Err(ApiError::FileInput(_))
        ));
    }
}
