//! Project layout and file writing.
//! Turns a [`ProjectConfig`] into the set of files of a Forge project and
//! writes them below an output directory.

use indexmap::IndexMap;
use log::debug;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::ProjectConfig;
use crate::error::{Error, Result};
use crate::fg3::Fg3Template;
use crate::prompt::Prompter;

/// Rendered files keyed by their path relative to the project root, in
/// generation order.
pub type Plan = IndexMap<PathBuf, String>;

const JAVA_SOURCES: &str = "src/main/java";
const RESOURCES: &str = "src/main/resources";

/// Renders every file of the project described by `config`.
///
/// A standalone mod gets the root build script, `gradle.properties` and
/// `settings.gradle`. A mod with a common module gets the submodule build
/// script instead, and leaves the Gradle settings to the parent build.
pub fn plan(config: &ProjectConfig, fg3: &Fg3Template) -> Result<Plan> {
    let build = &config.build;
    let forge = &config.forge;
    let mod_id = forge.mod_id();
    let mut plan = Plan::new();

    if build.common_module_name.is_some() {
        plan.insert(
            PathBuf::from("build.gradle"),
            fg3.apply_sub_build_gradle(build, forge, &mod_id, config.data_generation)?,
        );
    } else {
        plan.insert(
            PathBuf::from("build.gradle"),
            fg3.apply_build_gradle(build, forge, &mod_id, config.data_generation)?,
        );
        plan.insert(PathBuf::from("gradle.properties"), fg3.apply_gradle_prop()?);
        plan.insert(
            PathBuf::from("settings.gradle"),
            fg3.apply_settings_gradle(&build.artifact_id)?,
        );
    }

    let (package_name, class_name) = forge.main_class_parts(build);
    let mut main_class_path = PathBuf::from(JAVA_SOURCES);
    main_class_path.extend(package_name.split('.').filter(|segment| !segment.is_empty()));
    main_class_path.push(format!("{class_name}.java"));
    plan.insert(
        main_class_path,
        fg3.apply_main_class(build, forge, &package_name, &class_name)?,
    );

    plan.insert(
        Path::new(RESOURCES).join("META-INF").join("mods.toml"),
        fg3.apply_mods_toml(build, forge)?,
    );
    plan.insert(
        Path::new(RESOURCES).join("pack.mcmeta"),
        fg3.apply_pack_mcmeta(&build.artifact_id, &config.pack())?,
    );

    Ok(plan)
}

/// Ensures the output directory is safe to write to.
///
/// # Arguments
/// * `output_dir` - Target directory path for the generated project
/// * `force` - Whether to write into an existing directory
///
/// # Errors
/// * `Error::OutputDirectoryExistsError` if the directory exists and force is false
pub fn ensure_output_dir<P: AsRef<Path>>(output_dir: P, force: bool) -> Result<PathBuf> {
    let output_dir = output_dir.as_ref();
    if output_dir.exists() && !force {
        return Err(Error::OutputDirectoryExistsError {
            output_dir: output_dir.display().to_string(),
        });
    }
    Ok(output_dir.to_path_buf())
}

/// What happened to a single planned file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileAction {
    Created,
    Overwritten,
    Skipped,
}

impl fmt::Display for FileAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileAction::Created => write!(f, "Created"),
            FileAction::Overwritten => write!(f, "Overwritten"),
            FileAction::Skipped => write!(f, "Skipped"),
        }
    }
}

/// Writes planned files below an output root.
pub struct Generator<'a> {
    prompt: &'a dyn Prompter,
    output_root: PathBuf,
    skip_overwrite_check: bool,
}

impl<'a> Generator<'a> {
    pub fn new<P: AsRef<Path>>(
        prompt: &'a dyn Prompter,
        output_root: P,
        skip_overwrite_check: bool,
    ) -> Self {
        Self {
            prompt,
            output_root: output_root.as_ref().to_path_buf(),
            skip_overwrite_check,
        }
    }

    /// Writes `content` to `relative` under the output root, creating parent
    /// directories. An existing file is only replaced once the prompter agrees.
    pub fn write(&self, relative: &Path, content: &str) -> Result<FileAction> {
        let target = self.output_root.join(relative);

        let action = if target.exists() {
            let replace = self.prompt.confirm(
                self.skip_overwrite_check,
                format!("File '{}' already exists. Overwrite?", target.display()),
            )?;
            if !replace {
                debug!("Keeping existing file: {}", target.display());
                return Ok(FileAction::Skipped);
            }
            FileAction::Overwritten
        } else {
            FileAction::Created
        };

        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).map_err(Error::IoError)?;
        }
        debug!("Writing file: {}", target.display());
        fs::write(&target, content).map_err(Error::IoError)?;

        Ok(action)
    }

    /// Writes every file of `plan`, returning the target path and action of each.
    pub fn write_all(&self, plan: &Plan) -> Result<Vec<(PathBuf, FileAction)>> {
        plan.iter()
            .map(|(relative, content)| {
                let action = self.write(relative, content)?;
                Ok((self.output_root.join(relative), action))
            })
            .collect()
    }
}
