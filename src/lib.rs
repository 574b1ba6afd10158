//! forgebaker generates the boilerplate of a ForgeGradle 3 Minecraft mod:
//! build scripts, mod metadata and a main class stub, rendered from templates
//! with placeholders filled in from a project description.

/// Command-line interface module for the forgebaker binary
pub mod cli;

/// Project description model and loading
/// Supports JSON and YAML formats (forgebaker.json, forgebaker.yml, forgebaker.yaml)
pub mod config;

/// Error types and handling
pub mod error;

/// Per-file entry points that build properties and render a template
pub mod fg3;

/// Project layout and writing of the rendered files
pub mod generator;

/// env_logger setup
pub mod logger;

/// Typed placeholder sets, one per template
pub mod properties;

/// Overwrite confirmation prompts
pub mod prompt;

/// Template rendering with MiniJinja
pub mod renderer;

/// Dotted version strings split into parts
pub mod version;
