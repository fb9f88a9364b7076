//! # Slug Formatter
//!
//! URL slugs for articles and services. Thai script survives untouched so
//! that Thai titles still produce readable URLs.
//!
//! ```text
//! "Solar Cell โซล่าเซลล์ 2024"  ──►  "solar-cell-โซล่าเซลล์-2024"
//! "Hello@World!#$%"             ──►  "helloworld"
//! ```

/// Thai Unicode block.
const THAI_BLOCK: std::ops::RangeInclusive<char> = '\u{0E00}'..='\u{0E7F}';

/// Turns free text into a URL slug.
///
/// 1. Lowercase
/// 2. Every run of whitespace becomes one `-`
/// 3. Anything other than `[a-z0-9_]`, Thai or `-` is dropped
/// 4. Repeated `-` collapse into one, leading/trailing `-` are trimmed
///
/// ## Example
/// ```rust
/// use solar_core::slug::format_slug;
///
/// assert_eq!(format_slug("Hello World"), "hello-world");
/// assert_eq!(format_slug("-Hello World-"), "hello-world");
/// ```
pub fn format_slug(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut in_whitespace = false;

    for ch in text.chars().flat_map(char::to_lowercase) {
        if ch.is_whitespace() {
            if !in_whitespace {
                push_hyphen(&mut slug);
            }
            in_whitespace = true;
            continue;
        }
        in_whitespace = false;

        if ch == '-' {
            push_hyphen(&mut slug);
        } else if is_slug_char(ch) {
            slug.push(ch);
        }
    }

    slug.trim_matches('-').to_string()
}

/// Formats the explicit slug when one is given, otherwise the title.
///
/// Returns `None` when neither yields anything.
///
/// ```rust
/// use solar_core::slug::slug_or_title;
///
/// assert_eq!(slug_or_title(Some("My Slug"), Some("Title")).as_deref(), Some("my-slug"));
/// assert_eq!(slug_or_title(Some(""), Some("Title")).as_deref(), Some("title"));
/// assert_eq!(slug_or_title(None, None), None);
/// ```
pub fn slug_or_title(slug: Option<&str>, title: Option<&str>) -> Option<String> {
    slug.filter(|s| !s.is_empty())
        .or(title.filter(|t| !t.is_empty()))
        .map(format_slug)
}

fn is_slug_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_' || THAI_BLOCK.contains(&ch)
}

// Never emits two hyphens in a row
fn push_hyphen(slug: &mut String) {
    if !slug.ends_with('-') {
        slug.push('-');
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
