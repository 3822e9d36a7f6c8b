use headers::{Authorization, ContentType, HeaderMapExt};
use reqwest::header::{AUTHORIZATION, HeaderMap};

use crate::gateway::error::ChapaError;

/// Headers attached to every gateway request. The authorization value is marked sensitive so it
/// never shows up in `Debug` output.
pub fn authenticated_headers(api_key: &str) -> Result<HeaderMap, ChapaError> {
    let api_key = api_key.trim();
    if api_key.is_empty() {
        return Err(ChapaError::InvalidApiKey);
    }
    let bearer = Authorization::bearer(api_key).map_err(|_| ChapaError::InvalidApiKey)?;
    let mut map = HeaderMap::new();
    map.typed_insert(bearer);
    map.typed_insert(ContentType::json());
    if let Some(value) = map.get_mut(AUTHORIZATION) {
        value.set_sensitive(true);
    }
    Ok(map)
}

#[cfg(test)]
mod tests {
    use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};

    use super::authenticated_headers;
    use crate::gateway::error::ChapaError;

    #[test]
    fn bearer_and_json_content_type() {
        let headers = authenticated_headers("CHASECK_TEST-abc123").unwrap();
        assert_eq!(headers[AUTHORIZATION], "Bearer CHASECK_TEST-abc123");
        assert_eq!(headers[CONTENT_TYPE], "application/json");
        assert!(headers[AUTHORIZATION].is_sensitive());
    }

    #[test]
    fn key_is_not_leaked_by_debug() {
        let headers = authenticated_headers("CHASECK_TEST-abc123").unwrap();
        assert!(!format!("{headers:?}").contains("abc123"));
    }

    #[test]
    fn rejects_unusable_keys() {
        assert!(matches!(
            authenticated_headers("  "),
            Err(ChapaError::InvalidApiKey)
        ));
        assert!(matches!(
            authenticated_headers("bad\nkey"),
            Err(ChapaError::InvalidApiKey)
        ));
    }
}
