use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use campusnav_cli::commands::{self, buildings, edges, nodes, route, summary};
use campusnav_cli::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(author, version, about = "Accessible campus routing utilities")]
struct Cli {
    /// Override the campus data directory.
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, global = true, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print node, arc and building counts for the loaded dataset.
    Summary,
    /// List every node with its hazard flags.
    Nodes,
    /// List every stored arc, including reverse arcs, with weight and geometry.
    Edges,
    /// List buildings and their gates.
    Buildings,
    /// Compute an accessible route to a node or building.
    Route(route::RouteCommandArgs),
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let campus = commands::load_dataset(cli.data_dir.as_deref())?;

    match &cli.command {
        Command::Summary => summary::handle_summary(&campus, cli.format),
        Command::Nodes => nodes::handle_nodes(&campus, cli.format),
        Command::Edges => edges::handle_edges(&campus, cli.format),
        Command::Buildings => buildings::handle_buildings(&campus, cli.format),
        Command::Route(args) => route::handle_route_command(&campus, args, cli.format),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
