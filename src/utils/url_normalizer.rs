//! Destination URL normalization and validation.

use url::Url;

use crate::error::AppError;

/// Normalizes a destination URL to a canonical absolute form.
///
/// # Normalization Rules
///
/// 1. Input without a scheme gets `https://` prepended
/// 2. The result must parse as an absolute URL with a host
/// 3. Only HTTP and HTTPS are accepted; `javascript:`, `data:`, `file:` and
///    friends are rejected
/// 4. The host is lowercased and default ports dropped by the parser
///
/// # Errors
///
/// Returns [`AppError::InvalidDestination`] for anything that fails the
/// rules above.
///
/// # Examples
///
/// ```
/// use linkstash::utils::url_normalizer::normalize_destination;
///
/// assert_eq!(
///     normalize_destination("example.com/page").unwrap(),
///     "https://example.com/page"
/// );
/// assert!(normalize_destination("not a url").is_err());
/// ```
pub fn normalize_destination(input: &str) -> Result<String, AppError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(AppError::invalid_destination("empty input"));
    }

    let candidate = if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    };

    let url = Url::parse(&candidate)
        .map_err(|e| AppError::invalid_destination(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        other => {
            return Err(AppError::invalid_destination(format!(
                "unsupported scheme '{other}'"
            )));
        }
    }

    if url.host_str().is_none() {
        return Err(AppError::invalid_destination("missing host"));
    }

    Ok(url.to_string())
}
