use axum::http::HeaderMap;

pub const UNKNOWN_CLIENT: &str = "unknown";

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
}

/// Best-effort client address from proxy headers.
///
/// Order: `cf-connecting-ip`, first hop of `x-forwarded-for`, `x-real-ip`.
pub fn client_identifier(headers: &HeaderMap) -> String {
    let forwarded_for = || {
        header_str(headers, "x-forwarded-for")
            .and_then(|v| v.split(',').next())
            .map(str::trim)
            .filter(|v| !v.is_empty())
    };

    header_str(headers, "cf-connecting-ip")
        .or_else(forwarded_for)
        .or_else(|| header_str(headers, "x-real-ip"))
        .unwrap_or(UNKNOWN_CLIENT)
        .to_string()
}
