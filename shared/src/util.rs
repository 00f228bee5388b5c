/// Current UTC timestamp in milliseconds.
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Milliseconds in one day.
pub const DAY_MS: i64 = 86_400_000;

/// Build a URL-friendly slug from a restaurant name.
///
/// Keeps ASCII alphanumerics, collapses whitespace runs into single
/// hyphens and truncates to 50 characters.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_sep = false;
    for c in name.trim().chars() {
        if c.is_ascii_alphanumeric() {
            if pending_sep && !slug.is_empty() {
                slug.push('-');
            }
            pending_sep = false;
            slug.push(c.to_ascii_lowercase());
        } else if c.is_whitespace() || c == '-' {
            pending_sep = true;
        }
    }
    slug.truncate(50);
    slug
}
