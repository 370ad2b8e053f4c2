use anyhow::{Context, bail};
use image::Rgba;

/// Parse a `#RRGGBB` hex string into an opaque RGBA pixel.
pub fn parse_hex_color(hex: &str) -> anyhow::Result<Rgba<u8>> {
    let digits = match hex.strip_prefix('#') {
        Some(d) => d,
        None => bail!("color {:?} must start with '#'", hex),
    };
    if digits.len() != 6 || !digits.is_ascii() {
        bail!("color {:?} must be in #RRGGBB form", hex);
    }

    let r = u8::from_str_radix(&digits[0..2], 16)
        .with_context(|| format!("invalid red channel in {:?}", hex))?;
    let g = u8::from_str_radix(&digits[2..4], 16)
        .with_context(|| format!("invalid green channel in {:?}", hex))?;
    let b = u8::from_str_radix(&digits[4..6], 16)
        .with_context(|| format!("invalid blue channel in {:?}", hex))?;

    Ok(Rgba([r, g, b, 255]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rrggbb() {
        assert_eq!(parse_hex_color("#000000").unwrap(), Rgba([0, 0, 0, 255]));
        assert_eq!(
            parse_hex_color("#FFFFFF").unwrap(),
            Rgba([255, 255, 255, 255])
        );
        assert_eq!(
            parse_hex_color("#0077BE").unwrap(),
            Rgba([0, 0x77, 0xBE, 255])
        );
        assert_eq!(
            parse_hex_color("#e91e63").unwrap(),
            Rgba([0xE9, 0x1E, 0x63, 255])
        );
    }

    #[test]
    fn rejects_malformed_colors() {
        assert!(parse_hex_color("000000").is_err());
        assert!(parse_hex_color("#FFF").is_err());
        assert!(parse_hex_color("#GGGGGG").is_err());
        assert!(parse_hex_color("#12345").is_err());
        assert!(parse_hex_color("").is_err());
    }
}
