//! Document composition core for the README generator.
//!
//! One call to [`compose`] turns a validated [`ProjectDescription`] into a
//! complete markdown document by running a fixed pipeline of optional
//! section builders. The computation is pure: no I/O, no retained state,
//! byte-identical output for identical input.

mod compose;
mod error;
mod project;

pub use compose::compose;
pub use error::{ComposeError, ComposeResult};
pub use project::ProjectDescription;

pub use readme_gen_templates::TemplateType;
