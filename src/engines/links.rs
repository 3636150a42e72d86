//! Result link normalization shared by the HTML engines

use url::Url;

/// Turn a result-page `href` into an absolute http(s) target URL.
///
/// `redirect_param` names the query parameter an engine uses to wrap the real
/// target in its own click-tracking link (`q` for Google's `/url?q=`, `uddg` for
/// DuckDuckGo's `/l/?uddg=`). Other links back into the engine's own domain,
/// fragments and non-http schemes yield `None`.
pub fn resolve_result_link(href: &str, base: &Url, redirect_param: &str) -> Option<String> {
    let href = href.trim();
    if href.is_empty() || href.starts_with('#') {
        return None;
    }

    let resolved = base.join(href).ok()?;

    if same_site(&resolved, base) {
        return resolved
            .query_pairs()
            .find(|(key, _)| key == redirect_param)
            .and_then(|(_, value)| absolute_http(&value));
    }

    absolute_http(resolved.as_str())
}

fn same_site(url: &Url, base: &Url) -> bool {
    match (url.host_str(), base.host_str()) {
        (Some(host), Some(base_host)) => {
            host == base_host
                || host.ends_with(&format!(".{base_host}"))
                || base_host.ends_with(&format!(".{host}"))
        }
        _ => false,
    }
}

fn absolute_http(candidate: &str) -> Option<String> {
    let url = Url::parse(candidate).ok()?;
    match url.scheme() {
        "http" | "https" if url.host_str().is_some() => Some(url.to_string()),
        _ => None,
    }
}

/// Append `url` unless it is already present.
pub fn push_unique(urls: &mut Vec<String>, url: String) {
    if !urls.contains(&url) {
        urls.push(url);
    }
}
