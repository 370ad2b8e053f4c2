use base64::{Engine as _, engine::general_purpose};
use image::imageops::FilterType;
use image::{DynamicImage, Rgba, RgbaImage, imageops};
use qrcode::QrCode;
use qrcode::render::svg;
use std::io::Cursor;

use crate::models::options::ErrorCorrectionLevel;
use crate::utils::color::parse_hex_color;

/// Fraction of the overall width the centered logo occupies.
const LOGO_FRACTION: u32 = 5;
/// Opaque padding painted around the logo so no module is left half-covered.
const LOGO_PAD: u32 = 5;

/// Render the payload as an RGBA raster of exactly `size`x`size` pixels.
///
/// The string-to-matrix encoding is delegated to the qrcode crate; this
/// function only applies colors, scales to the requested size and
/// composites the optional logo. A logo covers ~20% of the width, which is
/// inside H-level recovery (~30%) but can exceed what lower levels can
/// repair; callers pick the level, nothing is checked here.
pub fn render_qr(
    content: &str,
    qr_color: &str,
    bg_color: &str,
    size: u32,
    error_correction: ErrorCorrectionLevel,
    logo: Option<&DynamicImage>,
) -> anyhow::Result<RgbaImage> {
    let dark = parse_hex_color(qr_color)?;
    let light = parse_hex_color(bg_color)?;

    let code = QrCode::with_error_correction_level(
        content.as_bytes(),
        error_correction.to_ec_level(),
    )?;

    let rendered = code
        .render::<Rgba<u8>>()
        .dark_color(dark)
        .light_color(light)
        .quiet_zone(true)
        .min_dimensions(size, size)
        .build();

    // Module scaling lands on a multiple of the symbol width; snap to the
    // exact requested size without softening module edges.
    let mut img = if rendered.dimensions() == (size, size) {
        rendered
    } else {
        imageops::resize(&rendered, size, size, FilterType::Nearest)
    };

    if let Some(logo) = logo {
        composite_logo(&mut img, logo, light);
    }

    Ok(img)
}

/// Paint an opaque background square, then draw the logo scaled to 20% of
/// the overall width, centered.
fn composite_logo(img: &mut RgbaImage, logo: &DynamicImage, bg: Rgba<u8>) {
    let size = img.width();
    let logo_size = size / LOGO_FRACTION;
    if logo_size == 0 {
        return;
    }
    let offset = (size - logo_size) / 2;

    let pad_start = offset.saturating_sub(LOGO_PAD);
    let pad_end = (offset + logo_size + LOGO_PAD).min(size);
    for y in pad_start..pad_end {
        for x in pad_start..pad_end {
            img.put_pixel(x, y, bg);
        }
    }

    let scaled = imageops::resize(logo, logo_size, logo_size, FilterType::Triangle);
    imageops::overlay(img, &scaled, i64::from(offset), i64::from(offset));
}

/// Render the payload as a standalone SVG document with the same colors.
pub fn render_svg(
    content: &str,
    qr_color: &str,
    bg_color: &str,
    size: u32,
    error_correction: ErrorCorrectionLevel,
) -> anyhow::Result<String> {
    // Fail on the same malformed colors the raster path rejects instead of
    // emitting broken fill attributes.
    parse_hex_color(qr_color)?;
    parse_hex_color(bg_color)?;

    let code = QrCode::with_error_correction_level(
        content.as_bytes(),
        error_correction.to_ec_level(),
    )?;

    let svg = code
        .render::<svg::Color<'_>>()
        .dark_color(svg::Color(qr_color))
        .light_color(svg::Color(bg_color))
        .quiet_zone(true)
        .min_dimensions(size, size)
        .build();

    Ok(svg)
}

/// Encode a raster as a `data:image/png;base64,...` URI.
pub fn png_data_url(img: &RgbaImage) -> anyhow::Result<String> {
    let mut png_bytes = Vec::new();
    DynamicImage::ImageRgba8(img.clone())
        .write_to(&mut Cursor::new(&mut png_bytes), image::ImageFormat::Png)?;

    Ok(format!(
        "data:image/png;base64,{}",
        general_purpose::STANDARD.encode(&png_bytes)
    ))
}
