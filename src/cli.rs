//! Command-line interface implementation for forgebaker.
//! Provides argument parsing and help text formatting using clap.

use clap::{error::ErrorKind, CommandFactory, Parser};
use std::path::PathBuf;

/// Command-line arguments structure for forgebaker.
#[derive(Parser, Debug)]
#[command(author, version, about = "forgebaker: ForgeGradle 3 mod project scaffolding", long_about = None)]
pub struct Args {
    /// Directory where the generated project will be created
    #[arg(value_name = "OUTPUT_DIR")]
    pub output_dir: PathBuf,

    /// Project description file (JSON or YAML).
    /// Defaults to forgebaker.json, forgebaker.yml or forgebaker.yaml in the
    /// current directory.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Directory with templates that replace the bundled ones.
    /// Files are matched by name, e.g. fg3_build.gradle.j2 or mods.toml.j2.
    #[arg(short, long, value_name = "DIR")]
    pub templates: Option<PathBuf>,

    /// Write into the output directory even if it already exists
    #[arg(short, long)]
    pub force: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,

    /// Skip confirmation prompts when overwriting existing files.
    /// This will automatically overwrite any existing files in the output directory
    /// without asking for confirmation.
    #[arg(long)]
    pub skip_overwrite_check: bool,
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 1 and the help text if required arguments are missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingRequiredArgument {
                let mut command = Args::command().help_template(
                    r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                );
                if command.print_help().is_err() {
                    e.exit();
                }
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
