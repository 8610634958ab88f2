//! Pagination helpers for GitHub list endpoints
//!
//! GitHub paginates with RFC 8288 `Link` headers. Each page carries a link to
//! the next one until the last page, which has no `rel="next"` entry.

/// Items requested per page (GitHub's maximum).
pub const PER_PAGE: usize = 100;

/// Build the URL of the first page for a list endpoint.
pub fn first_page_url(url: &str) -> String {
    let separator = if url.contains('?') { '&' } else { '?' };
    format!("{}{}per_page={}", url, separator, PER_PAGE)
}

/// Extract the `rel="next"` target from a `Link` header, if any.
///
/// ```ignore
/// let header = r#"<https://api.github.com/orgs/acme/teams?page=2>; rel="next", <https://api.github.com/orgs/acme/teams?page=5>; rel="last""#;
/// assert_eq!(next_page_url(header).unwrap(), "https://api.github.com/orgs/acme/teams?page=2");
/// ```
pub fn next_page_url(link_header: &str) -> Option<String> {
    link_header.split(',').find_map(|entry| {
        let mut parts = entry.split(';');
        let target = parts.next()?.trim();
        let is_next = parts.any(|param| {
            let param = param.trim();
            param == r#"rel="next""# || param == "rel=next"
        });
        if !is_next {
            return None;
        }
        target
            .strip_prefix('<')
            .and_then(|t| t.strip_suffix('>'))
            .map(str::to_string)
    })
}
