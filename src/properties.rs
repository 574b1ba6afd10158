//! Placeholder properties for each FG3 template.
//!
//! Every template gets its own struct so the set of placeholders it receives is
//! fixed at compile time. Optional placeholders are `Option` fields that are
//! left out of the serialized context entirely when unset: the templates test
//! for a key's presence, not for its value.

use serde::Serialize;

use crate::config::{BuildDescriptor, ForgeProjectConfig, PackDescriptor};
use crate::error::{Error, Result};
use crate::version::VersionPart;

/// Value the build scripts test to enable the data generation run.
const HAS_DATA: &str = "true";

/// Placeholder when the Minecraft version has no minor part.
const UNKNOWN_NEXT_VERSION: &str = "?";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct MainClassProperties {
    pub package_name: String,
    pub class_name: String,
    pub artifact_id: String,
    pub mod_name: String,
    pub mod_version: String,
}

impl MainClassProperties {
    pub fn new(
        package_name: &str,
        class_name: &str,
        build: &BuildDescriptor,
        config: &ForgeProjectConfig,
    ) -> Self {
        Self {
            package_name: package_name.to_string(),
            class_name: class_name.to_string(),
            artifact_id: build.artifact_id.clone(),
            mod_name: config.mod_name.clone(),
            mod_version: build.version.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct BuildGradleProperties {
    pub mod_name: String,
    pub mcp_channel: String,
    pub mcp_version: String,
    pub mcp_mc_version: String,
    pub forge_version: String,
    pub group_id: String,
    pub artifact_id: String,
    pub mod_version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_list: Option<String>,
}

impl BuildGradleProperties {
    /// # Errors
    /// * `Error::MalformedMcpVersion` if the mappings version has no channel
    pub fn new(
        build: &BuildDescriptor,
        config: &ForgeProjectConfig,
        mod_name: &str,
        has_data: bool,
    ) -> Result<Self> {
        let (channel, version) = config.mcp_version.split_channel()?;

        Ok(Self {
            mod_name: mod_name.to_string(),
            mcp_channel: channel.to_string(),
            mcp_version: version.to_string(),
            mcp_mc_version: config.mcp_version.mc_version.to_string(),
            forge_version: config.forge_version_text(),
            group_id: build.group_id.clone(),
            artifact_id: build.artifact_id.clone(),
            mod_version: build.version.clone(),
            has_data: data_flag(has_data),
            author_list: config.author_list(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct SettingsGradleProperties {
    pub artifact_id: String,
}

impl SettingsGradleProperties {
    pub fn new(artifact_id: &str) -> Self {
        Self {
            artifact_id: artifact_id.to_string(),
        }
    }
}

/// Build script of a mod module that sits next to a shared common module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct SubBuildGradleProperties {
    pub mod_name: String,
    pub mcp_channel: String,
    pub mcp_version: String,
    pub mcp_mc_version: String,
    pub forge_version: String,
    pub artifact_id: String,
    pub common_project_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_list: Option<String>,
}

impl SubBuildGradleProperties {
    /// # Errors
    /// * `Error::MalformedMcpVersion` if the mappings version has no channel
    /// * `Error::ConfigError` if the build has no common module
    pub fn new(
        build: &BuildDescriptor,
        config: &ForgeProjectConfig,
        mod_name: &str,
        has_data: bool,
    ) -> Result<Self> {
        let (channel, version) = config.mcp_version.split_channel()?;
        let common_project_name = build.common_module_name.clone().ok_or_else(|| {
            Error::ConfigError(format!(
                "'{}' has no common module to build against",
                build.artifact_id
            ))
        })?;

        Ok(Self {
            mod_name: mod_name.to_string(),
            mcp_channel: channel.to_string(),
            mcp_version: version.to_string(),
            mcp_mc_version: config.mcp_version.mc_version.to_string(),
            forge_version: config.forge_version_text(),
            artifact_id: build.artifact_id.clone(),
            common_project_name,
            has_data: data_flag(has_data),
            author_list: config.author_list(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct ModsTomlProperties {
    pub artifact_id: String,
    pub mod_name: String,
    pub forge_spec_version: String,
    pub mc_version: String,
    pub mc_next_version: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_list: Option<String>,
}

impl ModsTomlProperties {
    pub fn new(build: &BuildDescriptor, config: &ForgeProjectConfig) -> Self {
        // Same rule Forge's MDK uses for the upper bound of the minecraft dependency
        let next_mc_version = match config.mc_version.part(1) {
            Some(VersionPart::Release { version, .. }) => (u64::from(*version) + 1).to_string(),
            Some(part) => part.version_string(),
            None => UNKNOWN_NEXT_VERSION.to_string(),
        };
        let forge_spec_version = config
            .forge_version
            .part(0)
            .map(VersionPart::version_string)
            .unwrap_or_default();

        Self {
            artifact_id: build.artifact_id.clone(),
            mod_name: config.mod_name.clone(),
            forge_spec_version,
            mc_version: config.mc_version.to_string(),
            mc_next_version: format!("1.{next_mc_version}"),
            description: config.description.clone().unwrap_or_default(),
            update_url: config.update_url.clone().filter(|url| !url.trim().is_empty()),
            author_list: config.author_list(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct PackMcmetaProperties {
    pub artifact_id: String,
    pub pack_format: String,
    pub pack_comment: String,
}

impl PackMcmetaProperties {
    pub fn new(artifact_id: &str, pack: &PackDescriptor) -> Self {
        Self {
            artifact_id: artifact_id.to_string(),
            pack_format: pack.format.to_string(),
            pack_comment: pack.comment.clone(),
        }
    }
}

fn data_flag(has_data: bool) -> Option<String> {
    has_data.then(|| HAS_DATA.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::McpVersionPair;
    use crate::version::SemanticVersion;
    use serde_json::Value;
    use std::collections::BTreeSet;

    fn build() -> BuildDescriptor {
        BuildDescriptor {
            group_id: "com.example".to_string(),
            artifact_id: "examplemod".to_string(),
            version: "1.0.0".to_string(),
            common_module_name: None,
        }
    }

    fn config(mc_version: &str, authors: &[&str]) -> ForgeProjectConfig {
        ForgeProjectConfig {
            mod_name: "Example Mod".to_string(),
            main_class: None,
            description: None,
            update_url: None,
            authors: authors.iter().map(|a| a.to_string()).collect(),
            mc_version: SemanticVersion::parse(mc_version).unwrap(),
            forge_version: SemanticVersion::parse("36.2.0").unwrap(),
            mcp_version: McpVersionPair {
                mcp_version: "40_1.16.5".to_string(),
                mc_version: SemanticVersion::parse("1.16.5").unwrap(),
            },
        }
    }

    fn keys<T: Serialize>(properties: &T) -> BTreeSet<String> {
        match serde_json::to_value(properties).unwrap() {
            Value::Object(map) => map.keys().cloned().collect(),
            other => panic!("Expected an object, got {other}"),
        }
    }

    fn key_set(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    const BUILD_KEYS: [&str; 8] = [
        "MOD_NAME",
        "MCP_CHANNEL",
        "MCP_VERSION",
        "MCP_MC_VERSION",
        "FORGE_VERSION",
        "GROUP_ID",
        "ARTIFACT_ID",
        "MOD_VERSION",
    ];

    #[test]
    fn test_main_class_keys() {
        let config = config("1.16.5", &[]);
        let props = MainClassProperties::new("com.example", "ExampleMod", &build(), &config);
        assert_eq!(
            keys(&props),
            key_set(&["PACKAGE_NAME", "CLASS_NAME", "ARTIFACT_ID", "MOD_NAME", "MOD_VERSION"])
        );
        assert_eq!(props.mod_version, "1.0.0");
    }

    #[test]
    fn test_build_gradle_base_keys() {
        let config = config("1.16.5", &[]);
        let props = BuildGradleProperties::new(&build(), &config, "examplemod", false).unwrap();
        assert_eq!(keys(&props), key_set(&BUILD_KEYS));
        assert_eq!(props.mcp_channel, "40");
        assert_eq!(props.mcp_version, "1.16.5");
        assert_eq!(props.mcp_mc_version, "1.16.5");
        assert_eq!(props.forge_version, "1.16.5-36.2.0");
    }

    #[test]
    fn test_build_gradle_optional_keys() {
        let props = BuildGradleProperties::new(
            &build(),
            &config("1.16.5", &["Alice", "Bob"]),
            "examplemod",
            true,
        )
        .unwrap();

        let mut expected = key_set(&BUILD_KEYS);
        expected.insert("HAS_DATA".to_string());
        expected.insert("AUTHOR_LIST".to_string());
        assert_eq!(keys(&props), expected);
        assert_eq!(props.has_data.as_deref(), Some("true"));
        assert_eq!(props.author_list.as_deref(), Some("Alice, Bob"));
    }

    #[test]
    fn test_build_gradle_malformed_mcp_version() {
        let mut config = config("1.16.5", &[]);
        config.mcp_version.mcp_version = "40".to_string();
        let result = BuildGradleProperties::new(&build(), &config, "examplemod", false);
        assert!(matches!(result, Err(Error::MalformedMcpVersion { .. })));
    }

    #[test]
    fn test_sub_build_gradle_keys() {
        let mut build = build();
        build.common_module_name = Some("common".to_string());
        let config = config("1.16.5", &[]);
        let props = SubBuildGradleProperties::new(&build, &config, "examplemod", true).unwrap();

        assert_eq!(
            keys(&props),
            key_set(&[
                "MOD_NAME",
                "MCP_CHANNEL",
                "MCP_VERSION",
                "MCP_MC_VERSION",
                "FORGE_VERSION",
                "ARTIFACT_ID",
                "COMMON_PROJECT_NAME",
                "HAS_DATA",
            ])
        );
        assert_eq!(props.common_project_name, "common");
    }

    #[test]
    fn test_sub_build_gradle_requires_common_module() {
        let config = config("1.16.5", &[]);
        let result = SubBuildGradleProperties::new(&build(), &config, "examplemod", false);
        assert!(matches!(result, Err(Error::ConfigError(_))));
    }

    #[test]
    fn test_mods_toml_next_version() {
        let next = |mc: &str| ModsTomlProperties::new(&build(), &config(mc, &[])).mc_next_version;
        assert_eq!(next("1.16.5"), "1.17");
        assert_eq!(next("1.09.2"), "1.10");
        assert_eq!(next("1"), "1.?");
        assert_eq!(next("1.17-pre1.2"), "1.17-pre1");
    }

    #[test]
    fn test_mods_toml_defaults() {
        let props = ModsTomlProperties::new(&build(), &config("1.16.5", &[]));
        assert_eq!(
            keys(&props),
            key_set(&[
                "ARTIFACT_ID",
                "MOD_NAME",
                "FORGE_SPEC_VERSION",
                "MC_VERSION",
                "MC_NEXT_VERSION",
                "DESCRIPTION",
            ])
        );
        assert_eq!(props.description, "");
        assert_eq!(props.forge_spec_version, "36");
        assert_eq!(props.mc_version, "1.16.5");
    }

    #[test]
    fn test_mods_toml_update_url() {
        let mut config = config("1.16.5", &["Alice"]);
        config.description = Some("Adds things".to_string());

        for blank in ["", "   \t"] {
            config.update_url = Some(blank.to_string());
            let props = ModsTomlProperties::new(&build(), &config);
            assert!(!keys(&props).contains("UPDATE_URL"));
        }

        config.update_url = Some("https://example.com/update.json".to_string());
        let props = ModsTomlProperties::new(&build(), &config);
        assert_eq!(props.update_url.as_deref(), Some("https://example.com/update.json"));
        assert_eq!(props.description, "Adds things");
        assert_eq!(props.author_list.as_deref(), Some("Alice"));
    }

    #[test]
    fn test_pack_mcmeta_properties() {
        let pack = PackDescriptor {
            format: 6,
            comment: "resources".to_string(),
        };
        let value = serde_json::to_value(PackMcmetaProperties::new("examplemod", &pack)).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "ARTIFACT_ID": "examplemod",
                "PACK_FORMAT": "6",
                "PACK_COMMENT": "resources",
            })
        );
    }

    #[test]
    fn test_settings_gradle_properties() {
        assert_eq!(keys(&SettingsGradleProperties::new("examplemod")), key_set(&["ARTIFACT_ID"]));
    }
}
