use anyhow::Context;
use clap::{Parser, Subcommand};
use nimbus_rs::config::PollConfig;
use nimbus_rs::filter::{FilterCompiler, Node};
use nimbus_rs::plan::build_plan;

use std::fs;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compile a filter AST into fetch conditions
    Compile {
        /// Path to the filter AST JSON file
        #[arg(short, long)]
        filter: String,

        /// Path to a poll config YAML file
        #[arg(short, long)]
        config: Option<String>,
    },
    /// Compile a filter AST and build the full fetch plan
    Plan {
        /// Path to the filter AST JSON file
        #[arg(short, long)]
        filter: String,

        /// Path to a poll config YAML file
        #[arg(short, long)]
        config: Option<String>,
    },
}

fn load_config(path: Option<&str>) -> anyhow::Result<PollConfig> {
    match path {
        Some(path) => {
            PollConfig::load(path).with_context(|| format!("loading poll config {path}"))
        }
        None => Ok(PollConfig::default()),
    }
}

fn load_filter(path: &str) -> anyhow::Result<Node> {
    let content = fs::read_to_string(path).with_context(|| format!("reading filter {path}"))?;
    let node = serde_json::from_str(&content).with_context(|| format!("parsing filter {path}"))?;
    Ok(node)
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();

    match args.command {
        Commands::Compile { filter, config } => {
            let config = load_config(config.as_deref())?;
            let node = load_filter(&filter)?;

            let compiler = FilterCompiler::new(config.catalog().names());
            let conditions = compiler.compile(&node)?;

            log::info!("compiled {} condition(s)", conditions.len());
            println!("{}", serde_json::to_string_pretty(&conditions)?);
        }
        Commands::Plan { filter, config } => {
            let config = load_config(config.as_deref())?;
            let node = load_filter(&filter)?;

            let catalog = config.catalog();
            let compiler = FilterCompiler::new(catalog.names());
            let conditions = compiler.compile(&node)?;
            let plan = build_plan(&conditions, &catalog, &config.read_options())?;

            log::info!("planned {} fetch target(s)", plan.len());
            println!("{}", serde_json::to_string_pretty(&plan)?);
        }
    }

    Ok(())
}
