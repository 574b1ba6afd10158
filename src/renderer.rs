//! Template renderer and rendering functionality for forgebaker.
//! Bundles the FG3 templates and renders them with MiniJinja, optionally
//! replacing bundled templates with files from a local directory.
use crate::error::{Error, Result};
use log::debug;
use minijinja::{AutoEscape, Environment, UndefinedBehavior};
use std::fmt;
use std::path::Path;
use walkdir::WalkDir;

/// The templates a Forge project is generated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ForgeTemplate {
    MainClass,
    BuildGradle,
    GradleProperties,
    SettingsGradle,
    SubmoduleBuildGradle,
    ModsToml,
    PackMcmeta,
}

impl ForgeTemplate {
    pub const ALL: [ForgeTemplate; 7] = [
        ForgeTemplate::MainClass,
        ForgeTemplate::BuildGradle,
        ForgeTemplate::GradleProperties,
        ForgeTemplate::SettingsGradle,
        ForgeTemplate::SubmoduleBuildGradle,
        ForgeTemplate::ModsToml,
        ForgeTemplate::PackMcmeta,
    ];

    /// Name the template is registered under, and the file name that
    /// overrides it in a template directory.
    pub fn file_name(&self) -> &'static str {
        match self {
            ForgeTemplate::MainClass => "fg3_main_class.java.j2",
            ForgeTemplate::BuildGradle => "fg3_build.gradle.j2",
            ForgeTemplate::GradleProperties => "fg3_gradle.properties.j2",
            ForgeTemplate::SettingsGradle => "fg3_settings.gradle.j2",
            ForgeTemplate::SubmoduleBuildGradle => "fg3_submodule_build.gradle.j2",
            ForgeTemplate::ModsToml => "mods.toml.j2",
            ForgeTemplate::PackMcmeta => "pack.mcmeta.j2",
        }
    }

    fn bundled_source(&self) -> &'static str {
        match self {
            ForgeTemplate::MainClass => include_str!("../templates/fg3_main_class.java.j2"),
            ForgeTemplate::BuildGradle => include_str!("../templates/fg3_build.gradle.j2"),
            ForgeTemplate::GradleProperties => {
                include_str!("../templates/fg3_gradle.properties.j2")
            }
            ForgeTemplate::SettingsGradle => include_str!("../templates/fg3_settings.gradle.j2"),
            ForgeTemplate::SubmoduleBuildGradle => {
                include_str!("../templates/fg3_submodule_build.gradle.j2")
            }
            ForgeTemplate::ModsToml => include_str!("../templates/mods.toml.j2"),
            ForgeTemplate::PackMcmeta => include_str!("../templates/pack.mcmeta.j2"),
        }
    }

    fn from_file_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|template| template.file_name() == name)
    }
}

impl fmt::Display for ForgeTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.file_name())
    }
}

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders one of the Forge templates with the given context.
    ///
    /// Keys missing from `context` must render as empty and test as false.
    ///
    /// # Arguments
    /// * `template` - Template to render
    /// * `context` - Placeholder values, a JSON object
    ///
    /// # Returns
    /// * `Result<String>` - Rendered template text
    fn render(&self, template: ForgeTemplate, context: &serde_json::Value) -> Result<String>;
}

/// MiniJinja-based template rendering engine.
pub struct MiniJinjaRenderer {
    /// MiniJinja environment holding every Forge template
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Creates a renderer with the bundled templates.
    ///
    /// # Errors
    /// * `Error::MinijinjaError` if a bundled template fails to parse
    pub fn new() -> Result<Self> {
        let mut env = Self::environment();
        for template in ForgeTemplate::ALL {
            env.add_template(template.file_name(), template.bundled_source())?;
        }
        Ok(Self { env })
    }

    /// Creates a renderer whose bundled templates are replaced by any file in
    /// `template_dir` (searched recursively) named after a template.
    ///
    /// # Errors
    /// * `Error::TemplateError` if `template_dir` does not exist
    /// * `Error::IoError` if the directory or a template cannot be read
    /// * `Error::MinijinjaError` if a template fails to parse
    pub fn with_overrides<P: AsRef<Path>>(template_dir: P) -> Result<Self> {
        let template_dir = template_dir.as_ref();
        if !template_dir.is_dir() {
            return Err(Error::TemplateError(format!(
                "template directory '{}' does not exist",
                template_dir.display()
            )));
        }

        let mut renderer = Self::new()?;
        for entry in WalkDir::new(template_dir) {
            let entry = entry.map_err(|e| Error::IoError(e.into()))?;
            if !entry.file_type().is_file() {
                continue;
            }
            let Some(template) =
                entry.file_name().to_str().and_then(ForgeTemplate::from_file_name)
            else {
                continue;
            };

            debug!("Overriding template '{}' with {}", template, entry.path().display());
            let source = std::fs::read_to_string(entry.path())?;
            renderer.env.add_template_owned(template.file_name(), source)?;
        }

        Ok(renderer)
    }

    fn environment() -> Environment<'static> {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Lenient);
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env.set_keep_trailing_newline(true);
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    /// Renders a registered template using MiniJinja.
    ///
    /// # Errors
    /// * `Error::MinijinjaError` if rendering fails
    fn render(&self, template: ForgeTemplate, context: &serde_json::Value) -> Result<String> {
        debug!("Rendering template '{template}'");
        let tmpl = self.env.get_template(template.file_name())?;
        Ok(tmpl.render(context)?)
    }
}
