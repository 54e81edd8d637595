//! Template variants and their fixed placeholder section lists.
//!
//! The catalog is static data compiled into the binary; there is no
//! mutation API. Keep the section lists in sync with the documented
//! template behaviour.

use std::fmt;

use serde::Deserialize;

/// Available README template variants. Each contributes a fixed set of
/// extra section titles to the generated document.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq)]
#[serde(rename_all = "UPPERCASE")]
pub enum TemplateType {
    Api,
    Library,
    Frontend,
    Cli,
    Fullstack,
}

impl TemplateType {
    pub const ALL: &'static [TemplateType] = &[
        TemplateType::Api,
        TemplateType::Library,
        TemplateType::Frontend,
        TemplateType::Cli,
        TemplateType::Fullstack,
    ];

    /// Human-readable name of the variant.
    pub fn display_name(self) -> &'static str {
        match self {
            TemplateType::Api => "API",
            TemplateType::Library => "Library",
            TemplateType::Frontend => "Frontend",
            TemplateType::Cli => "CLI",
            TemplateType::Fullstack => "Fullstack",
        }
    }

    /// Ordered section titles this variant adds to a document.
    pub fn sections(self) -> &'static [&'static str] {
        match self {
            TemplateType::Api => &["Authentication", "Endpoints", "Examples", "Rate Limiting"],
            TemplateType::Library => &["Quick Start", "API Reference", "Examples"],
            TemplateType::Frontend => &["Demo", "Features", "Customization"],
            TemplateType::Cli => &["Commands", "Options", "Configuration"],
            TemplateType::Fullstack => &["Tech Stack", "Architecture", "Deployment"],
        }
    }
}

impl fmt::Display for TemplateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl std::str::FromStr for TemplateType {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_uppercase().as_str() {
            "API" => Ok(TemplateType::Api),
            "LIBRARY" => Ok(TemplateType::Library),
            "FRONTEND" => Ok(TemplateType::Frontend),
            "CLI" => Ok(TemplateType::Cli),
            "FULLSTACK" => Ok(TemplateType::Fullstack),
            _ => Err(()),
        }
    }
}
