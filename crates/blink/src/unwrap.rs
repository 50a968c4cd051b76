use url::Url;

use crate::codec::strict_decode;

/// Leading character an upstream encoder prepends to the `url` parameter.
pub const SENTINEL: char = 'A';

/// Query parameter of wrapper URLs that carries the real action endpoint.
pub const API_URL_PARAM: &str = "apiUrl";

/// Remove one leading [`SENTINEL`], if present.
///
/// Applied exactly once. A URL that legitimately starts with `A` loses that
/// character too; the upstream scheme gives no way to tell the two apart.
pub fn strip_sentinel(raw: &str) -> &str {
    raw.strip_prefix(SENTINEL).unwrap_or(raw)
}

/// Resolve the URL that serves the action JSON.
///
/// Wrapper URLs (`...?apiUrl=<encoded>`) yield the decoded `apiUrl` value,
/// anything else comes back unchanged. Only one level is unwrapped.
pub fn extract_target(clean: &str) -> String {
    if !clean.contains("apiUrl=") {
        return clean.to_string();
    }

    let Ok(parsed) = Url::parse(clean) else {
        return clean.to_string();
    };

    let api_url = parsed
        .query_pairs()
        .find(|(k, _)| k == API_URL_PARAM)
        .map(|(_, v)| v.into_owned());

    match api_url {
        Some(v) if !v.is_empty() => strict_decode(&v).unwrap_or(v),
        _ => clean.to_string(),
    }
}
