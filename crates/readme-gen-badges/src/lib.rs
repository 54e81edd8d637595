//! shields.io badge markup and the technology badge catalog.
//!
//! The catalog is compile-time constant data: a lookup from technology
//! name to badge color and logo slug. Badge builders return the empty
//! string on blank input so callers can append unconditionally.

use readme_gen_format::image;

const SHIELDS_IO_BASE: &str = "https://img.shields.io";
const BADGE_STYLE: &str = "for-the-badge";
const DEFAULT_TECH_COLOR: &str = "0078D4";

/// Known technology names mapped to `(badge color, logo slug)`.
/// Names are matched exactly; anything else takes the fallback path.
const TECH_CATALOG: &[(&str, &str, &str)] = &[
    ("Java", "ED8B00", "java"),
    ("Spring", "6DB33F", "spring"),
    ("Spring Boot", "6DB33F", "springboot"),
    ("JavaScript", "F7DF1E", "javascript"),
    ("TypeScript", "3178C6", "typescript"),
    ("React", "61DAFB", "react"),
    ("Vue", "4FC08D", "vuedotjs"),
    ("Angular", "DD0031", "angular"),
    ("Python", "3776AB", "python"),
    ("Node.js", "339933", "nodedotjs"),
    ("Go", "00ADD8", "go"),
    ("Rust", "000000", "rust"),
    ("PHP", "777BB4", "php"),
    ("Ruby", "CC342D", "ruby"),
    ("C#", "239120", "csharp"),
    (".NET", "512BD4", "dotnet"),
];

fn catalog_entry(technology: &str) -> Option<(&'static str, &'static str)> {
    TECH_CATALOG
        .iter()
        .find(|(name, _, _)| *name == technology)
        .map(|(_, color, logo)| (*color, *logo))
}

/// Logo slug for technologies the catalog does not know: lower-cased with
/// spaces and dots stripped, matching the simple-icons naming convention.
fn derived_logo(technology: &str) -> String {
    technology.to_lowercase().replace(' ', "").replace('.', "")
}

/// Renders a labelled technology badge with the catalog color and logo,
/// falling back to a neutral color and a derived logo slug for unknown
/// names.
pub fn technology_badge(technology: &str) -> String {
    if technology.trim().is_empty() {
        return String::new();
    }

    let (color, logo) = match catalog_entry(technology) {
        Some((color, logo)) => (color.to_string(), logo.to_string()),
        None => (DEFAULT_TECH_COLOR.to_string(), derived_logo(technology)),
    };

    let label = technology.replace(' ', "_");
    image(
        technology,
        &format!("{SHIELDS_IO_BASE}/badge/{label}-{color}?style={BADGE_STYLE}&logo={logo}&logoColor=white"),
    )
}

pub fn stars_badge(repo_path: &str) -> String {
    if repo_path.trim().is_empty() {
        return String::new();
    }
    image(
        "GitHub stars",
        &format!("{SHIELDS_IO_BASE}/github/stars/{repo_path}?style={BADGE_STYLE}"),
    )
}

pub fn forks_badge(repo_path: &str) -> String {
    if repo_path.trim().is_empty() {
        return String::new();
    }
    image(
        "GitHub forks",
        &format!("{SHIELDS_IO_BASE}/github/forks/{repo_path}?style={BADGE_STYLE}"),
    )
}

pub fn issues_badge(repo_path: &str) -> String {
    if repo_path.trim().is_empty() {
        return String::new();
    }
    image(
        "GitHub issues",
        &format!("{SHIELDS_IO_BASE}/github/issues/{repo_path}?style={BADGE_STYLE}"),
    )
}

pub fn license_badge(license: &str) -> String {
    if license.trim().is_empty() {
        return String::new();
    }
    image(
        "License",
        &format!(
            "{SHIELDS_IO_BASE}/badge/license-{}-blue?style={BADGE_STYLE}",
            license.replace(' ', "_")
        ),
    )
}

/// Reduces a GitHub repository URL to its `owner/repo` path by stripping
/// the scheme/host prefix, a trailing `.git`, and trailing slashes.
/// Blank input maps to the empty string. The remainder is not validated;
/// path-shape checks belong to the caller.
pub fn extract_repo_path(url: &str) -> String {
    let trimmed = url.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    let path = trimmed
        .strip_prefix("https://github.com/")
        .or_else(|| trimmed.strip_prefix("http://github.com/"))
        .unwrap_or(trimmed);
    let path = path.trim_end_matches('/');
    let path = path.strip_suffix(".git").unwrap_or(path);
    path.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn technology_badge_uses_catalog_color_and_logo() {
        let badge = technology_badge("Rust");
        assert_eq!(
            badge,
            "![Rust](https://img.shields.io/badge/Rust-000000?style=for-the-badge&logo=rust&logoColor=white)"
        );
    }

    #[test]
    fn technology_badge_escapes_spaces_in_label() {
        let badge = technology_badge("Spring Boot");
        assert!(badge.contains("/badge/Spring_Boot-6DB33F?"));
        assert!(badge.contains("logo=springboot"));
    }

    #[test]
    fn technology_badge_falls_back_for_unknown_names() {
        let badge = technology_badge("Next.js");
        assert!(badge.contains("-0078D4?"));
        assert!(badge.contains("logo=nextjs"));
    }

    #[test]
    fn badges_are_empty_for_blank_input() {
        assert_eq!(technology_badge("  "), "");
        assert_eq!(stars_badge(""), "");
        assert_eq!(forks_badge(" "), "");
        assert_eq!(issues_badge(""), "");
        assert_eq!(license_badge(""), "");
    }

    #[test]
    fn repo_badges_embed_the_path() {
        assert_eq!(
            stars_badge("octocat/hello"),
            "![GitHub stars](https://img.shields.io/github/stars/octocat/hello?style=for-the-badge)"
        );
        assert!(forks_badge("o/r").contains("github/forks/o/r?"));
        assert!(issues_badge("o/r").contains("github/issues/o/r?"));
    }

    #[test]
    fn license_badge_underscores_spaces() {
        assert_eq!(
            license_badge("Apache 2.0"),
            "![License](https://img.shields.io/badge/license-Apache_2.0-blue?style=for-the-badge)"
        );
    }

    #[test]
    fn extract_repo_path_normalizes_url_variants() {
        assert_eq!(extract_repo_path("https://github.com/o/r"), "o/r");
        assert_eq!(extract_repo_path("https://github.com/o/r/"), "o/r");
        assert_eq!(extract_repo_path("https://github.com/o/r.git"), "o/r");
        assert_eq!(extract_repo_path("http://github.com/o/r"), "o/r");
        assert_eq!(extract_repo_path(""), "");
        assert_eq!(extract_repo_path("   "), "");
    }

    #[test]
    fn extract_repo_path_is_idempotent() {
        let once = extract_repo_path("https://github.com/o/r.git");
        assert_eq!(extract_repo_path(&once), once);
    }
}
