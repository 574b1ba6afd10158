//! forgebaker's main application entry point.
//! Handles command-line argument parsing and runs the generation flow.

use forgebaker::{
    cli::{get_args, Args},
    config::{find_config, load_config, CONFIG_FILES},
    error::{default_error_handler, Result},
    fg3::Fg3Template,
    generator::{ensure_output_dir, plan, Generator},
    logger::init_logger,
    prompt::DialoguerPrompter,
    renderer::MiniJinjaRenderer,
};

/// Main application entry point.
fn main() {
    let args = get_args();
    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Locates and loads the project description
/// 2. Validates identifiers in the description
/// 3. Sets up the renderer, with template overrides if given
/// 4. Renders every project file
/// 5. Writes the files to the output directory
fn run(args: Args) -> Result<()> {
    let config_path = match args.config {
        Some(path) => path,
        None => find_config(std::env::current_dir()?, &CONFIG_FILES)?,
    };
    let config = load_config(&config_path)?;
    config.validate()?;

    let renderer = match &args.templates {
        Some(dir) => MiniJinjaRenderer::with_overrides(dir)?,
        None => MiniJinjaRenderer::new()?,
    };
    let fg3 = Fg3Template::new(&renderer);
    let files = plan(&config, &fg3)?;

    let output_root = ensure_output_dir(&args.output_dir, args.force)?;
    let prompt = DialoguerPrompter::new();
    let generator = Generator::new(&prompt, &output_root, args.skip_overwrite_check);

    for (target, action) in generator.write_all(&files)? {
        println!("{action}: '{}'", target.display());
    }

    println!("Project generation completed successfully in {}.", output_root.display());
    Ok(())
}
