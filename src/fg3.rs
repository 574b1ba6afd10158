//! ForgeGradle 3 project files.
//! Each `apply_*` method builds the placeholder properties for one file and
//! renders the matching template.

use log::debug;
use serde::Serialize;

use crate::config::{BuildDescriptor, ForgeProjectConfig, PackDescriptor};
use crate::error::{Error, Result};
use crate::properties::{
    BuildGradleProperties, MainClassProperties, ModsTomlProperties, PackMcmetaProperties,
    SettingsGradleProperties, SubBuildGradleProperties,
};
use crate::renderer::{ForgeTemplate, TemplateRenderer};

pub struct Fg3Template<'a> {
    renderer: &'a dyn TemplateRenderer,
}

impl<'a> Fg3Template<'a> {
    pub fn new(renderer: &'a dyn TemplateRenderer) -> Self {
        Self { renderer }
    }

    fn apply<P: Serialize>(&self, template: ForgeTemplate, properties: &P) -> Result<String> {
        let context = serde_json::to_value(properties)
            .map_err(|e| Error::TemplateError(format!("{template}: {e}")))?;
        debug!("Applying '{template}' with {context}");
        self.renderer.render(template, &context)
    }

    pub fn apply_main_class(
        &self,
        build: &BuildDescriptor,
        config: &ForgeProjectConfig,
        package_name: &str,
        class_name: &str,
    ) -> Result<String> {
        let properties = MainClassProperties::new(package_name, class_name, build, config);
        self.apply(ForgeTemplate::MainClass, &properties)
    }

    pub fn apply_build_gradle(
        &self,
        build: &BuildDescriptor,
        config: &ForgeProjectConfig,
        mod_name: &str,
        has_data: bool,
    ) -> Result<String> {
        let properties = BuildGradleProperties::new(build, config, mod_name, has_data)?;
        self.apply(ForgeTemplate::BuildGradle, &properties)
    }

    /// `gradle.properties` takes no placeholders.
    pub fn apply_gradle_prop(&self) -> Result<String> {
        self.renderer
            .render(ForgeTemplate::GradleProperties, &serde_json::Value::Object(Default::default()))
    }

    pub fn apply_settings_gradle(&self, artifact_id: &str) -> Result<String> {
        self.apply(ForgeTemplate::SettingsGradle, &SettingsGradleProperties::new(artifact_id))
    }

    pub fn apply_sub_build_gradle(
        &self,
        build: &BuildDescriptor,
        config: &ForgeProjectConfig,
        mod_name: &str,
        has_data: bool,
    ) -> Result<String> {
        let properties = SubBuildGradleProperties::new(build, config, mod_name, has_data)?;
        self.apply(ForgeTemplate::SubmoduleBuildGradle, &properties)
    }

    pub fn apply_mods_toml(
        &self,
        build: &BuildDescriptor,
        config: &ForgeProjectConfig,
    ) -> Result<String> {
        self.apply(ForgeTemplate::ModsToml, &ModsTomlProperties::new(build, config))
    }

    pub fn apply_pack_mcmeta(&self, artifact_id: &str, pack: &PackDescriptor) -> Result<String> {
        self.apply(ForgeTemplate::PackMcmeta, &PackMcmetaProperties::new(artifact_id, pack))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::McpVersionPair;
    use crate::version::SemanticVersion;
    use serde_json::{json, Value};
    use std::cell::RefCell;

    /// Records every render request and echoes the template name.
    #[derive(Default)]
    struct RecordingRenderer {
        calls: RefCell<Vec<(ForgeTemplate, Value)>>,
    }

    impl TemplateRenderer for RecordingRenderer {
        fn render(&self, template: ForgeTemplate, context: &Value) -> Result<String> {
            self.calls.borrow_mut().push((template, context.clone()));
            Ok(template.to_string())
        }
    }

    struct FailingRenderer;

    impl TemplateRenderer for FailingRenderer {
        fn render(&self, template: ForgeTemplate, _context: &Value) -> Result<String> {
            Err(Error::TemplateError(format!("{template} not found")))
        }
    }

    fn build() -> BuildDescriptor {
        BuildDescriptor {
            group_id: "com.example".to_string(),
            artifact_id: "examplemod".to_string(),
            version: "1.0.0".to_string(),
            common_module_name: Some("common".to_string()),
        }
    }

    fn config() -> ForgeProjectConfig {
        ForgeProjectConfig {
            mod_name: "Example Mod".to_string(),
            main_class: None,
            description: None,
            update_url: Some("  ".to_string()),
            authors: vec!["Alice".to_string(), "Bob".to_string()],
            mc_version: SemanticVersion::parse("1.16.5").unwrap(),
            forge_version: SemanticVersion::parse("36.2.0").unwrap(),
            mcp_version: McpVersionPair {
                mcp_version: "official_1.16.5".to_string(),
                mc_version: SemanticVersion::parse("1.16.5").unwrap(),
            },
        }
    }

    fn last_call(renderer: &RecordingRenderer) -> (ForgeTemplate, Value) {
        renderer.calls.borrow().last().cloned().unwrap()
    }

    #[test]
    fn test_apply_main_class() {
        let renderer = RecordingRenderer::default();
        let fg3 = Fg3Template::new(&renderer);

        let rendered = fg3
            .apply_main_class(&build(), &config(), "com.example.examplemod", "ExampleMod")
            .unwrap();
        assert_eq!(rendered, "fg3_main_class.java.j2");
        assert_eq!(
            last_call(&renderer),
            (
                ForgeTemplate::MainClass,
                json!({
                    "PACKAGE_NAME": "com.example.examplemod",
                    "CLASS_NAME": "ExampleMod",
                    "ARTIFACT_ID": "examplemod",
                    "MOD_NAME": "Example Mod",
                    "MOD_VERSION": "1.0.0",
                })
            )
        );
    }

    #[test]
    fn test_apply_build_gradle() {
        let renderer = RecordingRenderer::default();
        let fg3 = Fg3Template::new(&renderer);

        fg3.apply_build_gradle(&build(), &config(), "examplemod", false).unwrap();
        let (template, context) = last_call(&renderer);
        assert_eq!(template, ForgeTemplate::BuildGradle);
        assert_eq!(context["MCP_CHANNEL"], json!("official"));
        assert_eq!(context["AUTHOR_LIST"], json!("Alice, Bob"));
        assert!(context.get("HAS_DATA").is_none());
    }

    #[test]
    fn test_apply_build_gradle_malformed_version_skips_render() {
        let renderer = RecordingRenderer::default();
        let fg3 = Fg3Template::new(&renderer);
        let mut config = config();
        config.mcp_version.mcp_version = "official".to_string();

        let result = fg3.apply_build_gradle(&build(), &config, "examplemod", true);
        assert!(matches!(result, Err(Error::MalformedMcpVersion { .. })));
        assert!(renderer.calls.borrow().is_empty());
    }

    #[test]
    fn test_apply_gradle_prop_has_empty_context() {
        let renderer = RecordingRenderer::default();
        Fg3Template::new(&renderer).apply_gradle_prop().unwrap();
        assert_eq!(last_call(&renderer), (ForgeTemplate::GradleProperties, json!({})));
    }

    #[test]
    fn test_apply_sub_build_gradle() {
        let renderer = RecordingRenderer::default();
        let fg3 = Fg3Template::new(&renderer);

        fg3.apply_sub_build_gradle(&build(), &config(), "examplemod", true).unwrap();
        let (template, context) = last_call(&renderer);
        assert_eq!(template, ForgeTemplate::SubmoduleBuildGradle);
        assert_eq!(context["COMMON_PROJECT_NAME"], json!("common"));
        assert_eq!(context["HAS_DATA"], json!("true"));
        assert!(context.get("GROUP_ID").is_none());
        assert!(context.get("MOD_VERSION").is_none());
    }

    #[test]
    fn test_apply_mods_toml() {
        let renderer = RecordingRenderer::default();
        let fg3 = Fg3Template::new(&renderer);

        fg3.apply_mods_toml(&build(), &config()).unwrap();
        let (_, context) = last_call(&renderer);
        assert_eq!(context["MC_NEXT_VERSION"], json!("1.17"));
        assert_eq!(context["DESCRIPTION"], json!(""));
        assert!(context.get("UPDATE_URL").is_none());
    }

    #[test]
    fn test_apply_settings_and_pack() {
        let renderer = RecordingRenderer::default();
        let fg3 = Fg3Template::new(&renderer);

        fg3.apply_settings_gradle("examplemod").unwrap();
        assert_eq!(
            last_call(&renderer),
            (ForgeTemplate::SettingsGradle, json!({"ARTIFACT_ID": "examplemod"}))
        );

        let pack = PackDescriptor {
            format: 6,
            comment: String::new(),
        };
        fg3.apply_pack_mcmeta("examplemod", &pack).unwrap();
        let (template, context) = last_call(&renderer);
        assert_eq!(template, ForgeTemplate::PackMcmeta);
        assert_eq!(context["PACK_FORMAT"], json!("6"));
    }

    #[test]
    fn test_renderer_errors_pass_through() {
        let fg3 = Fg3Template::new(&FailingRenderer);
        match fg3.apply_settings_gradle("examplemod") {
            Err(Error::TemplateError(msg)) => assert_eq!(msg, "fg3_settings.gradle.j2 not found"),
            other => panic!("Expected TemplateError, got {other:?}"),
        }
    }
}
