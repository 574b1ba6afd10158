//! Project description handling for forgebaker.
//! This module defines the data model the property builders read from and
//! loads it from JSON or YAML description files.

use crate::error::{Error, Result};
use crate::version::SemanticVersion;
use cruet::Inflector;
use log::{debug, warn};
use regex::Regex;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use url::Url;

/// Supported description file names, tried in order.
pub const CONFIG_FILES: [&str; 3] = ["forgebaker.json", "forgebaker.yml", "forgebaker.yaml"];

const JAVA_QUALIFIED_NAME: &str = r"^[A-Za-z_$][A-Za-z0-9_$]*(\.[A-Za-z_$][A-Za-z0-9_$]*)*$";

/// Forge mod ids; the artifact id is used as one.
const MOD_ID: &str = r"^[a-z][a-z0-9_]{1,63}$";

/// Maven-style coordinates of the generated project.
#[derive(Debug, Clone, Deserialize)]
pub struct BuildDescriptor {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
    /// Name of the shared module when the mod lives next to one.
    #[serde(default)]
    pub common_module_name: Option<String>,
}

/// MCP mappings version together with the Minecraft version it targets.
#[derive(Debug, Clone, Deserialize)]
pub struct McpVersionPair {
    /// `<channel>_<version>`, e.g. `official_1.16.5` or `snapshot_20210309-1.16.5`.
    pub mcp_version: String,
    pub mc_version: SemanticVersion,
}

impl McpVersionPair {
    /// Splits the mappings version into `(channel, version)` on the first `_`.
    ///
    /// # Errors
    /// * `Error::MalformedMcpVersion` if there is no `_` in the string
    pub fn split_channel(&self) -> Result<(&str, &str)> {
        self.mcp_version
            .split_once('_')
            .ok_or_else(|| Error::MalformedMcpVersion {
                version: self.mcp_version.clone(),
            })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ForgeProjectConfig {
    /// Display name of the mod.
    pub mod_name: String,
    /// Fully qualified main class; derived from the build coordinates when absent.
    #[serde(default)]
    pub main_class: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub update_url: Option<String>,
    #[serde(default)]
    pub authors: Vec<String>,
    pub mc_version: SemanticVersion,
    pub forge_version: SemanticVersion,
    pub mcp_version: McpVersionPair,
}

impl ForgeProjectConfig {
    pub fn has_authors(&self) -> bool {
        !self.authors.is_empty()
    }

    /// Authors joined with `", "`, or `None` when there are none.
    pub fn author_list(&self) -> Option<String> {
        self.has_authors().then(|| self.authors.join(", "))
    }

    /// Forge dependency version as Gradle expects it, e.g. `1.16.5-36.2.0`.
    pub fn forge_version_text(&self) -> String {
        format!("{}-{}", self.mc_version, self.forge_version)
    }

    /// Lowercase alphanumeric form of the display name, used for run configs.
    pub fn mod_id(&self) -> String {
        self.mod_name
            .chars()
            .filter(char::is_ascii_alphanumeric)
            .collect::<String>()
            .to_lowercase()
    }

    /// Splits the main class into `(package, class)`.
    ///
    /// Without an explicit main class the default is
    /// `<group_id>.<artifact_id>.<ModName>`.
    pub fn main_class_parts(&self, build: &BuildDescriptor) -> (String, String) {
        let main_class = match &self.main_class {
            Some(main_class) => main_class.clone(),
            None => format!(
                "{}.{}.{}",
                build.group_id,
                build.artifact_id.to_snake_case(),
                self.mod_name.to_pascal_case()
            ),
        };

        match main_class.rsplit_once('.') {
            Some((package, class)) => (package.to_string(), class.to_string()),
            None => (String::new(), main_class),
        }
    }
}

/// Resource pack format and the comment written next to it in `pack.mcmeta`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PackDescriptor {
    pub format: u32,
    pub comment: String,
}

impl PackDescriptor {
    /// Picks the resource pack format Forge's MDK ships for a Minecraft version.
    pub fn for_mc_version(mc_version: &SemanticVersion) -> Self {
        let minor = match mc_version.part(1) {
            Some(part) => leading_number(&part.version_string()),
            None => None,
        };
        let patch = mc_version.release(2).unwrap_or(0);

        let (format, comment) = match (mc_version.release(0), minor) {
            (Some(1), Some(0..=8)) => (1, ""),
            (Some(1), Some(9..=10)) => (2, ""),
            (Some(1), Some(11..=12)) => (3, ""),
            (Some(1), Some(13..=14)) => (
                4,
                "A pack_format of 4 requires json lang files. Note: we require v4 pack meta for all mods.",
            ),
            (Some(1), Some(15)) => (
                5,
                "A pack_format of 5 requires json lang files and some texture changes from 1.15. Note: we require v5 pack meta for all mods.",
            ),
            (Some(1), Some(16)) if patch <= 1 => (
                5,
                "A pack_format of 5 requires json lang files and some texture changes from 1.15. Note: we require v5 pack meta for all mods.",
            ),
            (Some(1), Some(16)) => (
                6,
                "A pack_format of 6 requires json lang files and some texture changes from 1.16.2. Note: we require v6 pack meta for all mods.",
            ),
            (Some(1), Some(17)) => (
                7,
                "A pack_format of 7 requires json lang files and some texture changes from 1.17. Note: we require v7 pack meta for all mods.",
            ),
            _ => (
                8,
                "A pack_format of 8 requires json lang files and some texture changes from 1.18. Note: we require v8 pack meta for all mods.",
            ),
        };

        Self {
            format,
            comment: comment.to_string(),
        }
    }
}

fn leading_number(segment: &str) -> Option<u32> {
    let digits: String = segment.chars().take_while(char::is_ascii_digit).collect();
    digits.parse().ok()
}

/// Root of a forgebaker description file.
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectConfig {
    pub build: BuildDescriptor,
    #[serde(rename = "mod")]
    pub forge: ForgeProjectConfig,
    /// Defaults to [`PackDescriptor::for_mc_version`] when absent.
    #[serde(default)]
    pub pack: Option<PackDescriptor>,
    /// Whether the build script gets a data generation run.
    #[serde(default)]
    pub data_generation: bool,
}

impl ProjectConfig {
    pub fn pack(&self) -> PackDescriptor {
        self.pack
            .clone()
            .unwrap_or_else(|| PackDescriptor::for_mc_version(&self.forge.mc_version))
    }

    /// Checks the values that end up as Java or Gradle identifiers.
    ///
    /// # Errors
    /// * `Error::ConfigError` if the group id or main class is not a qualified
    ///   Java name, or the artifact id is not a valid Forge mod id
    pub fn validate(&self) -> Result<()> {
        let qualified =
            Regex::new(JAVA_QUALIFIED_NAME).map_err(|e| Error::ConfigError(e.to_string()))?;

        if !qualified.is_match(&self.build.group_id) {
            return Err(Error::ConfigError(format!(
                "group id '{}' is not a valid package name",
                self.build.group_id
            )));
        }

        let mod_id = Regex::new(MOD_ID).map_err(|e| Error::ConfigError(e.to_string()))?;
        if !mod_id.is_match(&self.build.artifact_id) {
            return Err(Error::ConfigError(format!(
                "artifact id '{}' is not a valid mod id (2-64 lowercase letters, digits or '_', \
                 starting with a letter)",
                self.build.artifact_id
            )));
        }

        let (package, class) = self.forge.main_class_parts(&self.build);
        let main_class = if package.is_empty() {
            class
        } else {
            format!("{package}.{class}")
        };
        if !qualified.is_match(&main_class) {
            return Err(Error::ConfigError(format!(
                "main class '{main_class}' is not a valid class name"
            )));
        }

        if let Some(url) = self.forge.update_url.as_deref().filter(|u| !u.trim().is_empty()) {
            if let Err(e) = Url::parse(url) {
                warn!("Update URL '{url}' does not look like a URL: {e}");
            }
        }

        Ok(())
    }
}

/// Finds the first description file from `config_files` inside `dir`.
///
/// # Errors
/// * `Error::ConfigError` if none of the files exist
pub fn find_config<P: AsRef<Path>>(dir: P, config_files: &[&str]) -> Result<PathBuf> {
    for file in config_files {
        let config_path = dir.as_ref().join(file);
        if config_path.exists() {
            return Ok(config_path);
        }
    }

    Err(Error::ConfigError(format!(
        "No configuration file found (tried: {})",
        config_files.join(", ")
    )))
}

/// Parses a description, trying JSON first and falling back to YAML.
pub fn parse_config(content: &str) -> Result<ProjectConfig> {
    match serde_json::from_str(content) {
        Ok(config) => Ok(config),
        Err(json_err) => {
            debug!("Not a JSON description ({json_err}), trying YAML");
            serde_yaml::from_str(content)
                .map_err(|e| Error::ConfigError(format!("Invalid configuration format: {e}")))
        }
    }
}

/// Reads and parses the description file at `path`.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<ProjectConfig> {
    let path = path.as_ref();
    debug!("Loading configuration from {}", path.display());
    let content = std::fs::read_to_string(path).map_err(Error::IoError)?;
    parse_config(&content)
}
