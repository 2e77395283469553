pub mod types;
pub mod commands;
pub mod logging;

use clap::Parser;

use crate::utils::error::BoxResult;

/// Run the command-line interface
pub fn run() -> BoxResult<()> {
    let cli = types::Cli::parse();

    // Initialize logging system
    logging::init_logging(cli.debug);

    // Configure backtrace
    logging::configure_backtrace(cli.trace);

    let source = cli.source.as_ref();

    match &cli.command {
        types::Commands::Render { file, toc, output } => {
            commands::handle_render_command(file, toc, output.as_ref(), source)
        }
        types::Commands::Tree { file, pretty } => {
            commands::handle_tree_command(file, *pretty)
        }
        types::Commands::Ids { file } => {
            commands::handle_ids_command(file)
        }
        types::Commands::Template { template, file, toc, output } => {
            commands::handle_template_command(template, file, toc, output.as_ref(), source)
        }
    }
}
