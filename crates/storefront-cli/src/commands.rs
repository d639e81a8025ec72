use std::path::Path;

use colored::Colorize;
use storefront_server::{ServerConfig, StorefrontServer, ROUTES};

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Serve(args) => cmd_serve(args),
        Command::Config(args) => cmd_config(args, &cli.format),
        Command::Routes => cmd_routes(&cli.format),
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<ServerConfig> {
    match path {
        Some(path) => Ok(ServerConfig::from_file(path)?),
        None => Ok(ServerConfig::default()),
    }
}

/// File (or default) configuration with command-line overrides applied.
pub fn resolve_config(args: &ServeArgs) -> anyhow::Result<ServerConfig> {
    let mut config = load_config(args.config.as_deref())?;
    if let Some(bind) = args.bind {
        config.bind_addr = bind;
    }
    if args.no_seed {
        config.seed_sample_data = false;
    }
    Ok(config)
}

fn cmd_serve(args: ServeArgs) -> anyhow::Result<()> {
    let config = resolve_config(&args)?;
    println!("{} Storefront on {}", "✓".green().bold(), config.bind_addr.to_string().bold());
    if !config.seed_sample_data {
        println!("  Sample data: {}", "disabled".yellow());
    }

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(StorefrontServer::new(config).serve())?;
    Ok(())
}

fn cmd_config(args: ConfigArgs, format: &OutputFormat) -> anyhow::Result<()> {
    let config = load_config(args.config.as_deref())?;
    match format {
        OutputFormat::Text => print!("{}", config.to_toml_string()?),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&config)?),
    }
    Ok(())
}

fn cmd_routes(format: &OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            for (methods, path) in ROUTES {
                println!("{:<22} {}", methods.cyan(), path);
            }
        }
        OutputFormat::Json => {
            let routes: Vec<_> = ROUTES
                .iter()
                .map(|(methods, path)| serde_json::json!({ "methods": methods, "path": path }))
                .collect();
            println!("{}", serde_json::to_string_pretty(&routes)?);
        }
    }
    Ok(())
}
