use serde::Serialize;

use crate::models::options::{CornerStyle, ErrorCorrectionLevel};

/// A named color/style preset. The catalog is static and read-only.
#[derive(Serialize, Debug, Clone, Copy)]
pub struct Template {
    pub name: &'static str,
    pub description: &'static str,
    pub qr_color: &'static str,
    pub bg_color: &'static str,
    pub corner_style: CornerStyle,
    pub error_correction: ErrorCorrectionLevel,
}

pub const TEMPLATES: [Template; 8] = [
    Template {
        name: "Classic",
        description: "Black on white, timeless design",
        qr_color: "#000000",
        bg_color: "#FFFFFF",
        corner_style: CornerStyle::Square,
        error_correction: ErrorCorrectionLevel::M,
    },
    Template {
        name: "Ocean",
        description: "Deep blue ocean theme",
        qr_color: "#0077BE",
        bg_color: "#E6F3FF",
        corner_style: CornerStyle::Rounded,
        error_correction: ErrorCorrectionLevel::M,
    },
    Template {
        name: "Forest",
        description: "Natural green forest",
        qr_color: "#2D5016",
        bg_color: "#E8F5E9",
        corner_style: CornerStyle::Rounded,
        error_correction: ErrorCorrectionLevel::M,
    },
    Template {
        name: "Sunset",
        description: "Warm sunset colors",
        qr_color: "#D84315",
        bg_color: "#FFF3E0",
        corner_style: CornerStyle::Rounded,
        error_correction: ErrorCorrectionLevel::M,
    },
    Template {
        name: "Elegant",
        description: "Sophisticated dark theme",
        qr_color: "#212121",
        bg_color: "#F5F5F5",
        corner_style: CornerStyle::Dots,
        error_correction: ErrorCorrectionLevel::H,
    },
    Template {
        name: "Neon",
        description: "Vibrant neon style",
        qr_color: "#E91E63",
        bg_color: "#1A1A1A",
        corner_style: CornerStyle::Dots,
        error_correction: ErrorCorrectionLevel::M,
    },
    Template {
        name: "Corporate",
        description: "Professional business look",
        qr_color: "#1565C0",
        bg_color: "#FAFAFA",
        corner_style: CornerStyle::Square,
        error_correction: ErrorCorrectionLevel::H,
    },
    Template {
        name: "Minimal",
        description: "Clean minimal design",
        qr_color: "#424242",
        bg_color: "#FFFFFF",
        corner_style: CornerStyle::Square,
        error_correction: ErrorCorrectionLevel::L,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_ships_eight_presets_classic_first() {
        assert_eq!(TEMPLATES.len(), 8);
        assert_eq!(TEMPLATES[0].name, "Classic");
        assert_eq!(TEMPLATES[0].qr_color, "#000000");
        assert_eq!(TEMPLATES[0].bg_color, "#FFFFFF");
    }
}
