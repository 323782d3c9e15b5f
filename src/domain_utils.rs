//! URL and domain string utilities.
//!
//! Intake forms submit free-text URLs; competitor detection produces URL
//! candidates of wildly varying shape. These helpers decide whether a string
//! plausibly denotes a public website and reduce candidates to a canonical
//! display form. All functions are total: parse failures become `false` or
//! `None`, never errors.

use tracing::debug;
use url::Url;

/// Check whether a raw string denotes a syntactically plausible public
/// website.
///
/// A missing scheme is tolerated (`https://` is assumed); the hostname must
/// have at least a `domain.tld` shape, the TLD must be all letters and at
/// least 2 characters, and every label must be non-empty `[a-zA-Z0-9-]` that
/// neither starts nor ends with a hyphen.
pub fn validate_url(raw: &str) -> bool {
    let candidate = if raw.starts_with("http") {
        raw.to_string()
    } else {
        format!("https://{}", raw)
    };

    let parsed = match Url::parse(&candidate) {
        Ok(parsed) => parsed,
        Err(e) => {
            debug!("URL validation rejected '{}': {}", raw, e);
            return false;
        }
    };

    let hostname = match parsed.host_str() {
        Some(host) => host,
        None => return false,
    };

    let parts: Vec<&str> = hostname.split('.').collect();

    // Must have at least domain.tld
    if parts.len() < 2 {
        return false;
    }

    // TLD must be at least 2 characters and letters only
    let tld = parts[parts.len() - 1];
    if tld.len() < 2 || !tld.chars().all(|c| c.is_ascii_alphabetic()) {
        return false;
    }

    // Labels: non-empty, [a-zA-Z0-9-], no leading/trailing hyphen
    for part in &parts {
        if part.is_empty()
            || !part.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
            || part.starts_with('-')
            || part.ends_with('-')
        {
            return false;
        }
    }

    true
}

/// Reduce a candidate competitor URL to its canonical display form:
/// `hostname` plus the path when the path is more than a bare `/`.
///
/// The returned string never includes a scheme — it is for display and
/// comparison, not for fetching. Empty or unparseable input yields `None`.
pub fn clean_competitor_url(raw: &str) -> Option<String> {
    if raw.trim().is_empty() {
        return None;
    }

    // Strip exactly one trailing slash
    let mut clean = raw.trim().to_string();
    if clean.ends_with('/') {
        clean.pop();
    }

    if !clean.starts_with("http://") && !clean.starts_with("https://") {
        clean = format!("https://{}", clean);
    }

    let parsed = Url::parse(&clean).ok()?;
    let hostname = parsed.host_str()?;

    let path = parsed.path();
    if path == "/" {
        Some(hostname.to_string())
    } else {
        Some(format!("{}{}", hostname, path))
    }
}

/// Best-effort domain extraction for display enrichment (favicon/logo
/// derivation). Parses with an assumed `https://` scheme; on parse failure
/// falls back to the substring before the first `/`.
pub fn display_domain(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    let candidate = if trimmed.starts_with("http") {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    };

    match Url::parse(&candidate)
        .ok()
        .and_then(|u| u.host_str().map(String::from))
    {
        Some(host) => Some(host),
        None => {
            let first = trimmed.split('/').next().unwrap_or(trimmed);
            if first.is_empty() {
                None
            } else {
                Some(first.to_string())
            }
        }
    }
}
