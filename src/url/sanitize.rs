use crate::{UrlError, UrlResult};
use url::{Position, Url};

/// Resolves an `href` found on `host_url` into an absolute, validated URL
///
/// # Resolution Rules
///
/// 1. `//rest` is protocol-relative: it becomes `scheme://rest` using the
///    scheme of `host_url`
/// 2. `/path` is root-relative: it becomes `scheme://netloc/path` using the
///    scheme and network location (userinfo, host, port) of `host_url`
/// 3. Anything else is taken as-is
///
/// The result must then be an absolute `http` or `https` URL with a host.
/// Valid absolute input is returned unchanged, byte for byte.
///
/// # Arguments
///
/// * `host_url` - The URL of the page the `href` was found on
/// * `href` - The raw value of the `href` attribute
///
/// # Returns
///
/// * `Ok(String)` - The absolute URL
/// * `Err(UrlError)` - The resolved value is not a valid absolute URL
///
/// # Examples
///
/// ```
/// use site_indexer::url::sanitize_href;
///
/// let url = sanitize_href("https://a.com/x/y", "/z").unwrap();
/// assert_eq!(url, "https://a.com/z");
///
/// let url = sanitize_href("https://a.com/x/y", "//cdn.b.com/lib.js").unwrap();
/// assert_eq!(url, "https://cdn.b.com/lib.js");
/// ```
pub fn sanitize_href(host_url: &str, href: &str) -> UrlResult<String> {
    let candidate = if let Some(rest) = href.strip_prefix("//") {
        let host = parse(host_url)?;
        format!("{}://{}", host.scheme(), rest)
    } else if href.starts_with('/') {
        let host = parse(host_url)?;
        format!("{}://{}{}", host.scheme(), network_location(&host), href)
    } else {
        href.to_string()
    };

    validate_absolute(&candidate)?;

    Ok(candidate)
}

/// Returns true if `candidate` is a well-formed absolute `http(s)` URL
///
/// The URL must be written out as `scheme://host...`; scheme-only forms
/// such as `http:example.com` are rejected even though they parse.
pub fn is_valid_absolute_url(candidate: &str) -> bool {
    validate_absolute(candidate).is_ok()
}

/// Like [`is_valid_absolute_url`], but reports why the URL was rejected
pub fn validate_absolute(candidate: &str) -> UrlResult<Url> {
    let url = parse(candidate)?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(UrlError::InvalidScheme(candidate.to_string()));
    }

    let has_authority = candidate
        .split_once(':')
        .map(|(_, rest)| rest.starts_with("//"))
        .unwrap_or(false);
    if !has_authority {
        return Err(UrlError::NotAbsolute(candidate.to_string()));
    }

    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(url),
        _ => Err(UrlError::MissingHost(candidate.to_string())),
    }
}

fn parse(raw: &str) -> UrlResult<Url> {
    Url::parse(raw).map_err(|e| UrlError::Parse {
        url: raw.to_string(),
        reason: e.to_string(),
    })
}

/// `user:pass@host:port` portion of a URL, empty parts omitted
fn network_location(url: &Url) -> &str {
    &url[Position::BeforeUsername..Position::AfterPort]
}
