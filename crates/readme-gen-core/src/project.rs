use readme_gen_templates::TemplateType;
use serde::Deserialize;

/// Input for one generation call, immutable for its duration.
///
/// The type itself carries the defaults contract: every optional field has
/// a stated default, applied both by [`Default`] and during
/// deserialization of partial descriptions. Field names follow the
/// camelCase wire format.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ProjectDescription {
    /// Project name, rendered as the document title. Required.
    pub project_name: String,

    /// Short tagline shown under the title.
    pub tagline: Option<String>,

    /// What the project does and why it exists. Required.
    pub description: String,

    /// Template variant contributing extra placeholder sections.
    pub template_type: Option<TemplateType>,

    /// Technologies in display order, used for badges and the tech stack
    /// section.
    pub technologies: Vec<String>,

    /// Key features, one per line.
    pub features: Option<String>,

    /// Shell-style installation snippet.
    pub installation: Option<String>,

    /// Shell-style usage snippet.
    pub usage: Option<String>,

    /// License identifier (e.g. MIT, Apache-2.0).
    pub license: Option<String>,

    pub author: Option<String>,

    /// GitHub repository URL, used for stats badges and the footer.
    pub repository_url: Option<String>,

    pub demo_url: Option<String>,

    pub include_badges: bool,
    pub include_table_of_contents: bool,
    pub include_contributing: bool,
    pub include_license: bool,
    pub include_screenshots: bool,
}

impl Default for ProjectDescription {
    fn default() -> Self {
        Self {
            project_name: String::new(),
            tagline: None,
            description: String::new(),
            template_type: None,
            technologies: Vec::new(),
            features: None,
            installation: None,
            usage: None,
            license: None,
            author: None,
            repository_url: None,
            demo_url: None,
            include_badges: true,
            include_table_of_contents: false,
            include_contributing: true,
            include_license: true,
            include_screenshots: false,
        }
    }
}

/// Whitespace-only values count as absent everywhere in the composer.
pub(crate) fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Returns the original (untrimmed) value when it holds real content.
pub(crate) fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !is_blank(v))
}
