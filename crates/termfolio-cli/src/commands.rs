use super::args::{Cli, Commands};
use super::handlers;
use anyhow::Result;

pub fn run(cli: Cli) -> Result<()> {
    let Some(command) = cli.command else {
        return handlers::view::handle(cli.content.as_deref(), cli.tick_rate);
    };

    match command {
        Commands::Print {
            section,
            format,
            color,
        } => handlers::print::handle(cli.content.as_deref(), section, format, color),
    }
}
