use anyhow::Result;
use clap::Parser;
use rpkgs::commands::{self, Config};
use std::path::PathBuf;

/// rpkgs - R package lister
///
/// List the R packages installed in the library directories reported by
/// `.libPaths()`, with the version and title from each package's DESCRIPTION.
///
/// Examples:
///   rpkgs list                       # All packages, sorted by name
///   rpkgs show ggplot2               # Details of one package
///   rpkgs --lib renv/library list    # Scan a project library without asking R
#[derive(Parser, Debug)]
#[command(author, version = env!("RPKGS_VERSION"), about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// R front end used to query library paths (also via RPKGS_RSCRIPT)
    #[arg(
        long = "rscript",
        env = "RPKGS_RSCRIPT",
        value_name = "PROGRAM",
        global = true
    )]
    pub rscript: Option<String>,

    /// Library directory to scan instead of asking R (repeatable, in search order)
    #[arg(long = "lib", value_name = "PATH", global = true)]
    pub libs: Vec<PathBuf>,

    /// Skip unreadable libraries and manifests instead of failing
    #[arg(long = "keep-going", short = 'k', global = true)]
    pub keep_going: bool,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// List installed packages
    List(ListArgs),

    /// Show version, title and location of an installed package
    Show(ShowArgs),

    /// Print the library directories that are scanned
    Libs,

    /// Interactive list that re-scans on Enter
    Browse,
}

#[derive(clap::Args, Debug)]
pub struct ListArgs {
    /// Print the catalog as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(clap::Args, Debug)]
pub struct ShowArgs {
    /// Package name (case-insensitive)
    #[arg(value_name = "NAME")]
    pub name: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let runtime = rpkgs::runtime::RealRuntime;
    let config = Config::new(runtime, cli.rscript, cli.libs, cli.keep_going);

    match cli.command {
        Commands::List(args) => commands::list(config, args.json).await?,
        Commands::Show(args) => commands::show(config, &args.name).await?,
        Commands::Libs => commands::libs(config).await?,
        Commands::Browse => commands::browse(config).await?,
    }
    Ok(())
}
