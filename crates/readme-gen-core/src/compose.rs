use readme_gen_badges::{
    extract_repo_path, forks_badge, issues_badge, license_badge, stars_badge, technology_badge,
};
use readme_gen_format::{
    bold, centered_block, code_block, header, horizontal_rule, image, link, toc_link,
    unordered_list, unordered_list_from_text, FormatError,
};

use crate::error::{ComposeError, ComposeResult};
use crate::project::{is_blank, present, ProjectDescription};

const SCREENSHOT_PLACEHOLDER_URL: &str =
    "https://via.placeholder.com/800x400?text=Add+Your+Screenshot+Here";

type SectionResult = Result<Option<String>, FormatError>;
type SectionBuilder = fn(&ProjectDescription) -> SectionResult;

/// Section builders in document order. Each one inspects the description
/// independently and yields `None` when its section is not selected.
const SECTION_PIPELINE: &[SectionBuilder] = &[
    header_section,
    badges_section,
    table_of_contents_section,
    about_section,
    screenshots_section,
    features_section,
    tech_stack_section,
    installation_section,
    usage_section,
    template_sections,
    contributing_section,
    license_section,
    footer_section,
];

/// Composes the full README document for `project`.
///
/// Fails with [`ComposeError::InvalidInput`] when the required fields are
/// blank; otherwise every optional field is independently omittable and
/// the call cannot fail except through a section builder, whose error is
/// re-signalled as [`ComposeError::Generation`] without emitting partial
/// output.
pub fn compose(project: &ProjectDescription) -> ComposeResult<String> {
    validate(project)?;
    tracing::debug!("Generating README for project: {}", project.project_name);

    let mut document = String::new();
    for build in SECTION_PIPELINE {
        if let Some(fragment) = build(project)? {
            document.push_str(&fragment);
        }
    }

    tracing::info!(
        "README generated for project: {} ({} bytes)",
        project.project_name,
        document.len()
    );
    Ok(document)
}

fn validate(project: &ProjectDescription) -> ComposeResult<()> {
    if is_blank(&project.project_name) {
        return Err(ComposeError::InvalidInput("project name is required".to_string()));
    }
    if is_blank(&project.description) {
        return Err(ComposeError::InvalidInput(
            "project description is required".to_string(),
        ));
    }
    Ok(())
}

fn header_section(project: &ProjectDescription) -> SectionResult {
    let mut section = centered_block(&header(1, &project.project_name)?);
    if let Some(tagline) = present(&project.tagline) {
        section.push_str(&centered_block(&format!("### {tagline}\n")));
    }
    Ok(Some(section))
}

fn badges_section(project: &ProjectDescription) -> SectionResult {
    if !project.include_badges {
        return Ok(None);
    }

    let mut block = String::from("<div align=\"center\">\n\n");

    if let Some(url) = present(&project.repository_url) {
        let repo_path = extract_repo_path(url);
        if !repo_path.is_empty() {
            block.push_str(&stars_badge(&repo_path));
            block.push('\n');
            block.push_str(&forks_badge(&repo_path));
            block.push('\n');
            block.push_str(&issues_badge(&repo_path));
            block.push('\n');
        }
    }

    if let Some(license) = present(&project.license) {
        block.push_str(&license_badge(license));
        block.push('\n');
    }

    for technology in &project.technologies {
        block.push_str(&technology_badge(technology));
        block.push('\n');
    }

    block.push_str("\n</div>\n\n");
    Ok(Some(block))
}

fn table_of_contents_section(project: &ProjectDescription) -> SectionResult {
    if !project.include_table_of_contents {
        return Ok(None);
    }

    // Entries mirror the sections that will actually appear, in document
    // order. "About" is unconditional because the About section is.
    let entries = [
        ("About", true),
        ("Screenshots", project.include_screenshots),
        ("Features", present(&project.features).is_some()),
        ("Tech Stack", !project.technologies.is_empty()),
        ("Installation", present(&project.installation).is_some()),
        ("Usage", present(&project.usage).is_some()),
        ("Contributing", project.include_contributing),
        ("License", project.include_license),
    ];

    let mut toc = header(2, "Table of Contents")?;
    for (title, included) in entries {
        if included {
            toc.push_str(&toc_link(title));
            toc.push('\n');
        }
    }
    toc.push('\n');
    Ok(Some(toc))
}

fn about_section(project: &ProjectDescription) -> SectionResult {
    let mut section = header(2, "About")?;
    section.push_str(&project.description);
    section.push_str("\n\n");

    if let Some(demo_url) = present(&project.demo_url) {
        section.push_str(&bold(&link("Live Demo", demo_url)));
        section.push_str("\n\n");
    }

    Ok(Some(section))
}

fn screenshots_section(project: &ProjectDescription) -> SectionResult {
    if !project.include_screenshots {
        return Ok(None);
    }

    let mut section = header(2, "Screenshots")?;
    section.push_str(&image("App Screenshot", SCREENSHOT_PLACEHOLDER_URL));
    section.push_str("\n\n");
    Ok(Some(section))
}

fn features_section(project: &ProjectDescription) -> SectionResult {
    let features = match present(&project.features) {
        Some(features) => features,
        None => return Ok(None),
    };

    let mut section = header(2, "Features")?;
    section.push_str(&unordered_list_from_text(features));
    Ok(Some(section))
}

fn tech_stack_section(project: &ProjectDescription) -> SectionResult {
    if project.technologies.is_empty() {
        return Ok(None);
    }

    let entries: Vec<String> = project.technologies.iter().map(|tech| bold(tech)).collect();
    let mut section = header(2, "Tech Stack")?;
    section.push_str(&unordered_list(entries));
    Ok(Some(section))
}

fn installation_section(project: &ProjectDescription) -> SectionResult {
    let installation = match present(&project.installation) {
        Some(installation) => installation,
        None => return Ok(None),
    };

    let mut section = header(2, "Installation")?;
    section.push_str(&code_block(installation, Some("bash")));
    Ok(Some(section))
}

fn usage_section(project: &ProjectDescription) -> SectionResult {
    let usage = match present(&project.usage) {
        Some(usage) => usage,
        None => return Ok(None),
    };

    let mut section = header(2, "Usage")?;
    section.push_str(&code_block(usage, Some("bash")));
    Ok(Some(section))
}

fn template_sections(project: &ProjectDescription) -> SectionResult {
    let template = match project.template_type {
        Some(template) => template,
        None => return Ok(None),
    };

    let mut sections = String::new();
    for title in template.sections() {
        if covered_by_real_content(title, project) {
            continue;
        }
        sections.push_str(&header(2, title)?);
        sections.push_str("*Documentation coming soon...*\n\n");
    }
    Ok(Some(sections))
}

/// Placeholder dedup is keyed on the literal catalog titles, not on
/// meaning: only these three titles are ever suppressed, and only when the
/// matching real field carries content.
fn covered_by_real_content(title: &str, project: &ProjectDescription) -> bool {
    match title {
        "Installation" => present(&project.installation).is_some(),
        "Usage" => present(&project.usage).is_some(),
        "Features" => present(&project.features).is_some(),
        _ => false,
    }
}

fn contributing_section(project: &ProjectDescription) -> SectionResult {
    if !project.include_contributing {
        return Ok(None);
    }

    let mut section = header(2, "Contributing")?;
    section.push_str(
        "Contributions are always welcome!\n\n\
         1. Fork the project\n\
         2. Create your feature branch (`git checkout -b feature/AmazingFeature`)\n\
         3. Commit your changes (`git commit -m 'Add some AmazingFeature'`)\n\
         4. Push to the branch (`git push origin feature/AmazingFeature`)\n\
         5. Open a Pull Request\n\n",
    );
    Ok(Some(section))
}

fn license_section(project: &ProjectDescription) -> SectionResult {
    if !project.include_license {
        return Ok(None);
    }

    let license = present(&project.license).unwrap_or("MIT");
    let mut section = header(2, "License")?;
    section.push_str(&format!(
        "This project is licensed under the {license} License - see the {} file for details.\n\n",
        link("LICENSE", "LICENSE")
    ));
    Ok(Some(section))
}

fn footer_section(project: &ProjectDescription) -> SectionResult {
    let mut footer = horizontal_rule();
    footer.push_str("<div align=\"center\">\n\n");

    if let Some(author) = present(&project.author) {
        footer.push_str("Made by ");
        footer.push_str(&bold(author));
        footer.push_str("\n\n");
    }

    if present(&project.repository_url).is_some() {
        footer.push_str("Star this repo if you find it useful!\n\n");
    }

    footer.push_str("</div>\n");
    Ok(Some(footer))
}
