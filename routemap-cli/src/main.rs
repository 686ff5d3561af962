//! routemap CLI - inspect the route table of a web application.

mod colors;
mod commands;
mod logging;
mod manifest;

use clap::{Parser, Subcommand};
use colored::Colorize;
use logging::LogFormat;

#[derive(Parser)]
#[command(name = "routemap")]
#[command(author, version, about = "Inspect the route table of a web application", long_about = None)]
struct Cli {
    /// Log output format
    #[arg(long, global = true, env = "ROUTEMAP_LOG_FORMAT", value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Display version information
    Version,
    /// List all registered routes
    List {
        /// Routing tree dump (JSON), or "-" for stdin
        #[arg(short, long, env = "ROUTEMAP_TREE", default_value = "routes.json")]
        tree: String,
        /// Watch the tree file and re-list on changes
        #[arg(short, long)]
        watch: bool,
    },
    /// Export the route table as JSON
    Export {
        /// Routing tree dump (JSON), or "-" for stdin
        #[arg(short, long, env = "ROUTEMAP_TREE", default_value = "routes.json")]
        tree: String,
        /// Output file path (stdout if not specified)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Check that every route in a manifest is registered
    Check {
        /// Routing tree dump (JSON), or "-" for stdin
        #[arg(short, long, env = "ROUTEMAP_TREE", default_value = "routes.json")]
        tree: String,
        /// Path to the expected-routes manifest
        #[arg(env = "ROUTEMAP_MANIFEST", default_value = "routemap.toml")]
        manifest: String,
    },
}

fn main() {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    logging::init(cli.log_format);

    let result = match cli.command {
        Some(Commands::Version) => {
            print_version();
            Ok(())
        }
        Some(Commands::List { tree, watch }) => {
            commands::list::execute(commands::list::ListConfig { tree, watch })
        }
        Some(Commands::Export { tree, output }) => commands::export::execute(&tree, output),
        Some(Commands::Check { tree, manifest }) => commands::check::execute(&tree, &manifest),
        None => {
            print_banner();
            println!();
            println!("Run {} for usage information.", "routemap --help".cyan());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn print_banner() {
    println!();
    println!("{}", "  ╭──────────────────────────────╮".bright_magenta());
    println!(
        "{}{}{}",
        "  │".bright_magenta(),
        "           routemap           ".bold(),
        "│".bright_magenta()
    );
    println!("{}", "  ╰──────────────────────────────╯".bright_magenta());
}

fn print_version() {
    println!("routemap-cli {}", env!("CARGO_PKG_VERSION"));
}
