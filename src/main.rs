use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;

use calplan::cli::args::{Cli, Commands};
use calplan::cli::commands;
use calplan::config::Config;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {:#}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;
    let format = cli.output.unwrap_or(config.general.default_output);

    let output = match cli.command {
        Commands::Render(args) => {
            let target = args.to.unwrap_or(config.general.default_target);
            commands::render(&args, target)
                .with_context(|| format!("failed to render {}", args.file.display()))?
        }
        Commands::Check(args) => commands::check(&args.file, format)
            .with_context(|| format!("check failed for {}", args.file.display()))?,
        Commands::Info(args) => commands::info(&args.file, format)
            .with_context(|| format!("failed to describe {}", args.file.display()))?,
        Commands::Completions(args) => commands::completions(&args.shell)?,
    };

    if !output.is_empty() {
        println!("{}", output);
    }
    Ok(())
}
