//! Markdown fragment builders shared by the readme-gen crates.
//!
//! Every function here is a pure string transform: no state, no I/O, and
//! identical input always yields identical output. Fragment conventions
//! (trailing blank lines, bullet prefixes, anchor slugs) are fixed because
//! downstream consumers assert on exact substrings.

use thiserror::Error;

#[derive(Clone, Copy, Debug, Error, Eq, PartialEq)]
pub enum FormatError {
    #[error("heading level must be between 1 and 6 (got {0})")]
    InvalidHeadingLevel(u8),
}

/// Renders an ATX heading followed by a blank line.
pub fn header(level: u8, text: &str) -> Result<String, FormatError> {
    if !(1..=6).contains(&level) {
        return Err(FormatError::InvalidHeadingLevel(level));
    }
    Ok(format!("{} {text}\n\n", "#".repeat(level as usize)))
}

/// Wraps content in a centered HTML div block.
pub fn centered_block(content: &str) -> String {
    format!("<div align=\"center\">\n\n{content}\n\n</div>\n\n")
}

/// Renders a fenced code block. The language tag is left empty when
/// `language` is absent or blank.
pub fn code_block(code: &str, language: Option<&str>) -> String {
    let lang = language.map(str::trim).filter(|l| !l.is_empty()).unwrap_or("");
    format!("```{lang}\n{code}\n```\n\n")
}

/// Renders one `- ` bullet per item, dropping blank items. Yields the
/// empty string when no items survive the filter.
pub fn unordered_list<I, S>(items: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let bullets: Vec<String> = items
        .into_iter()
        .filter(|item| !item.as_ref().trim().is_empty())
        .map(|item| format!("- {}", item.as_ref()))
        .collect();

    if bullets.is_empty() {
        return String::new();
    }

    format!("{}\n\n", bullets.join("\n"))
}

/// Splits multi-line text into items (one per line) and renders them as an
/// unordered list.
pub fn unordered_list_from_text(text: &str) -> String {
    if text.trim().is_empty() {
        return String::new();
    }
    unordered_list(text.lines())
}

pub fn link(text: &str, url: &str) -> String {
    format!("[{text}]({url})")
}

pub fn image(alt: &str, url: &str) -> String {
    format!("![{alt}]({url})")
}

pub fn bold(text: &str) -> String {
    format!("**{text}**")
}

pub fn italic(text: &str) -> String {
    format!("*{text}*")
}

pub fn inline_code(code: &str) -> String {
    format!("`{code}`")
}

pub fn horizontal_rule() -> String {
    "---\n\n".to_string()
}

/// Derives the anchor slug for a section title: lower-cased, stripped of
/// everything but letters/digits/whitespace/hyphens, with each whitespace
/// run collapsed to a single hyphen.
///
/// Table-of-contents entries and any external anchor consumers must share
/// this algorithm, otherwise links point at nothing.
pub fn anchor_slug(title: &str) -> String {
    let lowered = title.to_lowercase();
    let mut slug = String::with_capacity(lowered.len());
    let mut pending_hyphen = false;

    for ch in lowered.chars() {
        if ch.is_whitespace() {
            pending_hyphen = true;
            continue;
        }
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-' {
            if pending_hyphen {
                slug.push('-');
                pending_hyphen = false;
            }
            slug.push(ch);
        }
    }

    if pending_hyphen {
        slug.push('-');
    }

    slug
}

/// Renders a table-of-contents bullet linking to the title's anchor.
pub fn toc_link(title: &str) -> String {
    format!("- [{title}](#{})", anchor_slug(title))
}

/// Escapes markdown control characters so arbitrary text can be embedded
/// in prose. Blank input yields the empty string.
pub fn sanitize(text: &str) -> String {
    if text.trim().is_empty() {
        return String::new();
    }

    text.replace('\\', "\\\\")
        .replace('`', "\\`")
        .replace('*', "\\*")
        .replace('_', "\\_")
        .replace('[', "\\[")
        .replace(']', "\\]")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn header_renders_level_and_text() {
        assert_eq!(header(1, "Test").unwrap(), "# Test\n\n");
        assert_eq!(header(3, "Deep").unwrap(), "### Deep\n\n");
    }

    #[test]
    fn header_rejects_out_of_range_levels() {
        assert_eq!(header(0, "x"), Err(FormatError::InvalidHeadingLevel(0)));
        assert_eq!(header(7, "x"), Err(FormatError::InvalidHeadingLevel(7)));
    }

    #[test]
    fn code_block_defaults_to_empty_language() {
        assert_eq!(code_block("ls", None), "```\nls\n```\n\n");
        assert_eq!(code_block("ls", Some("  ")), "```\nls\n```\n\n");
        assert_eq!(code_block("npm install", Some("bash")), "```bash\nnpm install\n```\n\n");
    }

    #[test]
    fn unordered_list_drops_blank_items() {
        assert_eq!(unordered_list(["a", "  ", "b"]), "- a\n- b\n\n");
        assert_eq!(unordered_list(Vec::<String>::new()), "");
        assert_eq!(unordered_list(["  ", ""]), "");
    }

    #[test]
    fn unordered_list_from_text_splits_lines_in_order() {
        assert_eq!(
            unordered_list_from_text("Feature 1\nFeature 2\nFeature 3"),
            "- Feature 1\n- Feature 2\n- Feature 3\n\n"
        );
        assert_eq!(unordered_list_from_text("one\r\ntwo"), "- one\n- two\n\n");
        assert_eq!(unordered_list_from_text("   "), "");
    }

    #[test]
    fn inline_fragments() {
        assert_eq!(link("docs", "https://example.com"), "[docs](https://example.com)");
        assert_eq!(image("logo", "logo.png"), "![logo](logo.png)");
        assert_eq!(bold("x"), "**x**");
        assert_eq!(italic("x"), "*x*");
        assert_eq!(inline_code("cargo run"), "`cargo run`");
        assert_eq!(horizontal_rule(), "---\n\n");
    }

    #[test]
    fn anchor_slug_strips_punctuation_and_joins_with_hyphens() {
        assert_eq!(anchor_slug("API Reference!"), "api-reference");
        assert_eq!(anchor_slug("Table of Contents"), "table-of-contents");
        assert_eq!(anchor_slug("Rate Limiting"), "rate-limiting");
        assert_eq!(anchor_slug("v2.0 (beta)"), "v20-beta");
    }

    #[test]
    fn toc_link_uses_the_anchor_slug() {
        assert_eq!(toc_link("Tech Stack"), "- [Tech Stack](#tech-stack)");
        assert_eq!(toc_link("About"), "- [About](#about)");
    }

    #[test]
    fn sanitize_escapes_markdown_characters() {
        assert_eq!(sanitize("a*b_c"), "a\\*b\\_c");
        assert_eq!(sanitize("[x] `y` \\z"), "\\[x\\] \\`y\\` \\\\z");
        assert_eq!(sanitize("   "), "");
    }
}
