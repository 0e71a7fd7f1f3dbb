use base64::{Engine as _, engine::general_purpose};
use log::warn;
use percent_encoding::{NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};
use serde_json::Value;

use crate::model::RoundSnapshot;
use crate::mvu::error::AppError;

/// Query parameter carrying the encoded round.
pub const SHARE_PARAM: &str = "s";
pub const DEFAULT_SHARE_BASE_URL: &str = "https://scorecard.local/";

/// Base64 of the snapshot's UTF-8 JSON.
///
/// # Errors
///
/// Returns `AppError::Parse` if the snapshot cannot be serialized.
pub fn encode_share_code(snapshot: &RoundSnapshot) -> Result<String, AppError> {
    let json = serde_json::to_string(snapshot)?;
    Ok(general_purpose::STANDARD.encode(json.as_bytes()))
}

/// `base_url` with the encoded round appended as the `s` query parameter.
///
/// # Errors
///
/// Returns `AppError::Parse` if the snapshot cannot be serialized.
pub fn build_share_link(snapshot: &RoundSnapshot, base_url: &str) -> Result<String, AppError> {
    let code = encode_share_code(snapshot)?;
    let base = base_url.split('#').next().unwrap_or_default();
    let separator = if base.contains('?') { '&' } else { '?' };
    Ok(format!(
        "{base}{separator}{SHARE_PARAM}={}",
        utf8_percent_encode(&code, NON_ALPHANUMERIC)
    ))
}

/// Pulls the share code out of a link. Input without a query string is
/// taken to be a bare code.
#[must_use]
pub fn extract_share_code(input: &str) -> Option<String> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }
    let without_fragment = input.split('#').next().unwrap_or_default();
    let Some((_, query)) = without_fragment.split_once('?') else {
        if without_fragment.contains("://") {
            return None;
        }
        return Some(without_fragment.to_string());
    };
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == SHARE_PARAM)
        .map(|(_, value)| value.to_string())
        .filter(|value| !value.is_empty())
}

/// Decodes a share code into raw JSON. The result is untrusted and still
/// needs normalizing. Anything undecodable is `None`.
#[must_use]
pub fn decode_share_code(code: &str) -> Option<Value> {
    let decoded = percent_decode_str(code).decode_utf8().ok()?;
    let cleaned = decoded.trim().replace(' ', "+");

    let bytes = [
        &general_purpose::STANDARD,
        &general_purpose::STANDARD_NO_PAD,
        &general_purpose::URL_SAFE,
        &general_purpose::URL_SAFE_NO_PAD,
    ]
    .iter()
    .find_map(|engine| engine.decode(cleaned.as_bytes()).ok());
    let Some(bytes) = bytes else {
        warn!("share code is not base64");
        return None;
    };

    let text = match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => {
            warn!("share code is not utf-8: {e}");
            return None;
        }
    };
    match serde_json::from_str::<Value>(&text) {
        Ok(value) if value.is_object() => Some(value),
        Ok(_) => {
            warn!("share code does not hold a JSON object");
            None
        }
        Err(e) => {
            warn!("share code JSON is invalid: {e}");
            None
        }
    }
}

/// `extract_share_code` followed by `decode_share_code`.
#[must_use]
pub fn decode_share_link(input: &str) -> Option<Value> {
    let code = extract_share_code(input)?;
    decode_share_code(&code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_from_link() {
        assert_eq!(
            extract_share_code("https://x.test/card?theme=dark&s=abc%3D#top"),
            Some("abc%3D".to_string())
        );
        assert_eq!(extract_share_code("https://x.test/card?theme=dark"), None);
        assert_eq!(extract_share_code("https://x.test/card"), None);
        assert_eq!(extract_share_code("eyJ9"), Some("eyJ9".to_string()));
        assert_eq!(extract_share_code("   "), None);
    }

    #[test]
    fn appends_to_existing_query() {
        let link = build_share_link(&RoundSnapshot::default(), "https://x.test/?a=1").unwrap();
        assert!(link.starts_with("https://x.test/?a=1&s="));
    }
}
