use anyhow::{Context, bail};
use base64::{Engine as _, engine::general_purpose};
use image::codecs::jpeg::JpegEncoder;
use image::{Rgb, RgbImage};

/// Fixed quality factor for the alternate raster format.
const JPEG_QUALITY: u8 = 95;

/// Pull the raw bytes out of a `data:<mime>;base64,` URI.
pub fn decode_data_url(data_url: &str) -> anyhow::Result<Vec<u8>> {
    let Some(rest) = data_url.strip_prefix("data:") else {
        bail!("not a data URI");
    };
    let Some((_, encoded)) = rest.split_once(";base64,") else {
        bail!("data URI is not base64 encoded");
    };
    general_purpose::STANDARD
        .decode(encoded)
        .context("data URI payload is not valid base64")
}

/// Re-encode a stored raster as JPEG: the source is decoded onto an opaque
/// white background (any transparency is lost) and compressed at a fixed
/// quality factor.
pub fn to_jpeg(image_bytes: &[u8]) -> anyhow::Result<Vec<u8>> {
    let source = image::load_from_memory(image_bytes).context("unable to decode source raster")?;
    let rgba = source.to_rgba8();

    let mut flattened = RgbImage::new(rgba.width(), rgba.height());
    for (x, y, pixel) in rgba.enumerate_pixels() {
        let [r, g, b, a] = pixel.0;
        let alpha = u32::from(a);
        // Straight alpha over white.
        let blend = |c: u8| ((u32::from(c) * alpha + 255 * (255 - alpha)) / 255) as u8;
        flattened.put_pixel(x, y, Rgb([blend(r), blend(g), blend(b)]));
    }

    let mut jpeg_bytes = Vec::new();
    let encoder = JpegEncoder::new_with_quality(&mut jpeg_bytes, JPEG_QUALITY);
    flattened
        .write_with_encoder(encoder)
        .context("unable to encode JPEG")?;

    Ok(jpeg_bytes)
}
