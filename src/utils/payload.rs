use crate::models::options::ContentType;
use crate::structs::generate_request::{LocationConfig, WifiConfig};

/// Build the literal string handed to the QR encoder.
///
/// Pure and deterministic. SSID/password/URL contents are passed through
/// verbatim, including `;`, `:` and `,`; scanning apps that require
/// escaped WIFI records will misread such payloads.
pub fn format_content_by_type(
    content_type: ContentType,
    content: &str,
    wifi: Option<&WifiConfig>,
    location: Option<&LocationConfig>,
) -> String {
    match content_type {
        ContentType::Url => {
            if !content.starts_with("http://") && !content.starts_with("https://") {
                format!("https://{}", content)
            } else {
                content.to_owned()
            }
        }
        ContentType::Email => format!("mailto:{}", content),
        ContentType::Phone => format!("tel:{}", content),
        ContentType::Wifi => match wifi {
            Some(w) => format!(
                "WIFI:T:{};S:{};P:{};H:{};;",
                w.encryption.as_str(),
                w.ssid,
                w.password,
                w.hidden
            ),
            None => content.to_owned(),
        },
        ContentType::Location => match location {
            Some(l) => format!("geo:{},{}", l.latitude, l.longitude),
            None => content.to_owned(),
        },
        ContentType::Text => content.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::options::WifiEncryption;

    #[test]
    fn url_without_scheme_gets_https() {
        let out = format_content_by_type(ContentType::Url, "example.com", None, None);
        assert_eq!(out, "https://example.com");
    }

    #[test]
    fn url_with_scheme_is_unchanged() {
        let out = format_content_by_type(ContentType::Url, "https://example.com", None, None);
        assert_eq!(out, "https://example.com");
        let out = format_content_by_type(ContentType::Url, "http://example.com", None, None);
        assert_eq!(out, "http://example.com");
    }

    #[test]
    fn email_and_phone_get_uri_prefixes() {
        assert_eq!(
            format_content_by_type(ContentType::Email, "a@b.co", None, None),
            "mailto:a@b.co"
        );
        assert_eq!(
            format_content_by_type(ContentType::Phone, "+15551234567", None, None),
            "tel:+15551234567"
        );
    }

    #[test]
    fn wifi_record_has_fixed_field_order() {
        let wifi = WifiConfig {
            ssid: "Home".to_owned(),
            password: "secret1".to_owned(),
            encryption: WifiEncryption::Wpa,
            hidden: false,
        };
        let out = format_content_by_type(ContentType::Wifi, "", Some(&wifi), None);
        assert_eq!(out, "WIFI:T:WPA;S:Home;P:secret1;H:false;;");
    }

    #[test]
    fn wifi_hidden_serializes_as_literal_true() {
        let wifi = WifiConfig {
            ssid: "attic".to_owned(),
            password: String::new(),
            encryption: WifiEncryption::Nopass,
            hidden: true,
        };
        let out = format_content_by_type(ContentType::Wifi, "", Some(&wifi), None);
        assert_eq!(out, "WIFI:T:nopass;S:attic;P:;H:true;;");
    }

    #[test]
    fn wifi_special_characters_pass_through_unescaped() {
        let wifi = WifiConfig {
            ssid: "cafe;guest".to_owned(),
            password: "p:w,d".to_owned(),
            encryption: WifiEncryption::Wep,
            hidden: false,
        };
        let out = format_content_by_type(ContentType::Wifi, "", Some(&wifi), None);
        assert_eq!(out, "WIFI:T:WEP;S:cafe;guest;P:p:w,d;H:false;;");
    }

    #[test]
    fn location_joins_decimal_forms_with_comma() {
        let loc = LocationConfig {
            latitude: 48.8566,
            longitude: 2.3522,
        };
        let out = format_content_by_type(ContentType::Location, "", None, Some(&loc));
        assert_eq!(out, "geo:48.8566,2.3522");
    }

    #[test]
    fn location_out_of_range_passes_through() {
        let loc = LocationConfig {
            latitude: 123.0,
            longitude: -500.25,
        };
        let out = format_content_by_type(ContentType::Location, "", None, Some(&loc));
        assert_eq!(out, "geo:123,-500.25");
    }

    #[test]
    fn text_is_passed_through_unchanged() {
        let out = format_content_by_type(ContentType::Text, "hello; world", None, None);
        assert_eq!(out, "hello; world");
    }

    #[test]
    fn formatting_is_deterministic() {
        let a = format_content_by_type(ContentType::Url, "example.com/a?b=c", None, None);
        let b = format_content_by_type(ContentType::Url, "example.com/a?b=c", None, None);
        assert_eq!(a, b);
    }
}
