use validator::ValidateUrl;

use crate::errors::ApiError;
use crate::models::options::ContentType;

/// Check raw content against its declared type. Runs synchronously before
/// generation and never touches the network or storage.
pub fn validate_content(content_type: ContentType, content: &str) -> Result<(), ApiError> {
    if content.trim().is_empty() {
        return Err(ApiError::Validation("Content cannot be empty".to_owned()));
    }

    match content_type {
        ContentType::Url => {
            if is_valid_url(content) {
                Ok(())
            } else {
                Err(ApiError::Validation("Please enter a valid URL".to_owned()))
            }
        }
        ContentType::Email => {
            if is_valid_email(content) {
                Ok(())
            } else {
                Err(ApiError::Validation(
                    "Please enter a valid email address".to_owned(),
                ))
            }
        }
        ContentType::Phone => {
            if is_valid_phone(content) {
                Ok(())
            } else {
                Err(ApiError::Validation(
                    "Please enter a valid phone number".to_owned(),
                ))
            }
        }
        ContentType::Text | ContentType::Wifi | ContentType::Location => Ok(()),
    }
}

/// Must parse as an absolute URL after defaulting to an https scheme.
fn is_valid_url(url: &str) -> bool {
    if url.starts_with("http") {
        url.validate_url()
    } else {
        format!("https://{}", url).validate_url()
    }
}

/// Simple `local@domain.tld` shape: a non-empty local part, one `@`, and a
/// domain containing a dot with non-empty sides. No whitespace anywhere.
fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty()
        || local.chars().any(char::is_whitespace)
        || domain.contains('@')
        || domain.chars().any(char::is_whitespace)
    {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// Permissive phone shape: optional leading `+`, digits with at most two
/// parenthesized groups and single `-`/`.`/space separators between runs,
/// 3 to 17 digits in total.
fn is_valid_phone(phone: &str) -> bool {
    let rest = phone.strip_prefix('+').unwrap_or(phone);
    let mut digits = 0usize;
    let mut open = false;
    let mut paren_groups = 0u8;
    let mut prev_was_separator = false;

    for c in rest.chars() {
        match c {
            '0'..='9' => {
                digits += 1;
                prev_was_separator = false;
            }
            '(' if !open && paren_groups < 2 => {
                open = true;
                paren_groups += 1;
                prev_was_separator = false;
            }
            ')' if open => {
                open = false;
                prev_was_separator = false;
            }
            '-' | '.' | ' ' if !prev_was_separator => {
                prev_was_separator = true;
            }
            _ => return false,
        }
    }

    !open && (3..=17).contains(&digits)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn error_message(content_type: ContentType, content: &str) -> String {
        match validate_content(content_type, content) {
            Err(ApiError::Validation(msg)) => msg,
            other => panic!("expected a validation error, got {other:?}"),
        }
    }

    #[test]
    fn empty_content_is_rejected_for_every_type() {
        for content_type in [
            ContentType::Url,
            ContentType::Text,
            ContentType::Email,
            ContentType::Phone,
            ContentType::Wifi,
            ContentType::Location,
        ] {
            for content in ["", "   ", "\t\n"] {
                let msg = error_message(content_type, content);
                assert!(!msg.is_empty());
                assert_eq!(msg, "Content cannot be empty");
            }
        }
    }

    #[test]
    fn urls_parse_after_scheme_defaulting() {
        assert!(validate_content(ContentType::Url, "example.com").is_ok());
        assert!(validate_content(ContentType::Url, "https://example.com/path?q=1").is_ok());
        assert_eq!(
            error_message(ContentType::Url, "not a url"),
            "Please enter a valid URL"
        );
    }

    #[test]
    fn email_shape_is_enforced() {
        assert!(validate_content(ContentType::Email, "a@b.co").is_ok());
        assert!(validate_content(ContentType::Email, "first.last@mail.example.org").is_ok());
        assert_eq!(
            error_message(ContentType::Email, "not-an-email"),
            "Please enter a valid email address"
        );
        assert!(validate_content(ContentType::Email, "a@b").is_err());
        assert!(validate_content(ContentType::Email, "a@b.").is_err());
        assert!(validate_content(ContentType::Email, "a@.co").is_err());
        assert!(validate_content(ContentType::Email, "a b@c.co").is_err());
    }

    #[test]
    fn phone_accepts_common_shapes() {
        for phone in [
            "+15551234567",
            "555-123-4567",
            "(555) 123-4567",
            "+33 1 42 68 53 00",
            "555.123.4567",
            "123",
        ] {
            assert!(
                validate_content(ContentType::Phone, phone).is_ok(),
                "rejected {phone}"
            );
        }
    }

    #[test]
    fn phone_rejects_junk() {
        for phone in ["12", "call me", "555--1234", "((555) 1234", "(555)) 1234"] {
            assert!(
                validate_content(ContentType::Phone, phone).is_err(),
                "accepted {phone}"
            );
        }
        assert_eq!(
            error_message(ContentType::Phone, "call me"),
            "Please enter a valid phone number"
        );
    }

    #[test]
    fn text_wifi_location_only_need_content() {
        assert!(validate_content(ContentType::Text, "anything goes ;:,").is_ok());
        assert!(validate_content(ContentType::Wifi, "placeholder").is_ok());
        assert!(validate_content(ContentType::Location, "48.8,2.3").is_ok());
    }
}
