use url::Url as ParsedUrl;

use crate::types::Url;

/// Canonical form of a URL for keying visit history.
///
/// Lowercases the host, strips `www.`, the scheme, default ports, fragments
/// and tracking query parameters, and trims trailing slashes, so the same
/// page reached through different addresses lands on one history key.
/// Input that does not parse as an absolute URL is returned trimmed but
/// otherwise untouched.
pub fn normalise_url(raw: &str) -> Url {
    let trimmed = raw.trim();
    let Ok(parsed) = ParsedUrl::parse(trimmed) else {
        return trimmed.to_string();
    };
    let Some(host) = parsed.host_str() else {
        return trimmed.to_string();
    };

    let lowered = host.to_ascii_lowercase();
    let host = lowered.strip_prefix("www.").unwrap_or(&lowered);

    let mut out = String::from(host);
    // Url::port() already yields None for the scheme's default port.
    if let Some(port) = parsed.port() {
        out.push(':');
        out.push_str(&port.to_string());
    }
    out.push_str(parsed.path().trim_end_matches('/'));

    let kept: Vec<(String, String)> = parsed
        .query_pairs()
        .filter(|(key, _)| !is_tracking_param(key))
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();
    if !kept.is_empty() {
        out.push('?');
        for (i, (key, value)) in kept.iter().enumerate() {
            if i > 0 {
                out.push('&');
            }
            out.push_str(key);
            if !value.is_empty() {
                out.push('=');
                out.push_str(value);
            }
        }
    }
    out
}

fn is_tracking_param(key: &str) -> bool {
    key.starts_with("utm_") || matches!(key, "fbclid" | "gclid")
}

#[cfg(test)]
mod tests {
    use super::normalise_url;

    #[test]
    fn strips_scheme_www_fragment_and_trailing_slash() {
        assert_eq!(
            normalise_url("https://www.Example.com/some/path/#section"),
            "example.com/some/path"
        );
    }

    #[test]
    fn drops_tracking_params_but_keeps_meaningful_ones() {
        assert_eq!(
            normalise_url("https://example.com/read?utm_source=feed&id=42"),
            "example.com/read?id=42"
        );
        assert_eq!(
            normalise_url("https://example.com/read?utm_source=feed&fbclid=abc"),
            "example.com/read"
        );
    }

    #[test]
    fn keeps_non_default_ports() {
        assert_eq!(
            normalise_url("http://example.com:8080/x"),
            "example.com:8080/x"
        );
        assert_eq!(normalise_url("https://example.com:443/x"), "example.com/x");
    }

    #[test]
    fn bare_host_has_no_trailing_slash() {
        assert_eq!(normalise_url("https://example.com"), "example.com");
    }

    #[test]
    fn is_idempotent_on_its_own_output() {
        let once = normalise_url("https://www.example.com/a/?utm_medium=email");
        assert_eq!(normalise_url(&once), once);
    }

    #[test]
    fn non_absolute_input_is_returned_trimmed() {
        assert_eq!(normalise_url("  example.com/path "), "example.com/path");
    }
}
