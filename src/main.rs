//! NCAA team statistics CLI
//!
//! Scrapes paginated team stat tables from the NCAA site and merges them
//! into a single team-level CSV.

use clap::{Parser, Subcommand};
use ncaa_stats::{Config, Result};

#[derive(Parser)]
#[command(name = "ncaa-stats")]
#[command(about = "Scrape NCAA team statistics into a single CSV", long_about = None)]
struct Cli {
    /// Config file path
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scrape all team stats and write the master CSV
    Scrape {
        /// Override the worker count
        #[arg(long)]
        workers: Option<usize>,
        /// Override the output directory
        #[arg(long)]
        output: Option<String>,
    },
    /// List the stats that will be scraped
    Stats,
    /// Initialize a new project with default config
    Init,
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp(None)
        .init();

    // Load or create config
    let config = if std::path::Path::new(&cli.config).exists() {
        match Config::load(&cli.config) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading config: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        Config::default()
    };

    // Run command
    let result = match cli.command {
        Commands::Scrape { workers, output } => commands::scrape(config, workers, output),
        Commands::Stats => commands::stats(),
        Commands::Init => commands::init(&cli.config),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

mod commands {
    use super::*;
    use ncaa_stats::catalog;
    use ncaa_stats::scrape::pool;
    use std::path::Path;

    pub fn init(config_path: &str) -> Result<()> {
        let config = Config::default();
        config.save(config_path)?;
        println!("Created default config at {}", config_path);

        std::fs::create_dir_all(&config.output.directory)?;
        println!("Created {}/ directory", config.output.directory);

        println!("\nNext steps:");
        println!("  1. Edit {} to customize settings", config_path);
        println!("  2. Run 'ncaa-stats scrape' to fetch team stats");

        Ok(())
    }

    pub fn stats() -> Result<()> {
        println!("Team stats");
        println!("───────────────────────────────");
        for stat in catalog::team_stats() {
            println!("  {:<26} {:>5}", stat.name, stat.site_id);
        }
        Ok(())
    }

    pub fn scrape(mut config: Config, workers: Option<usize>, output: Option<String>) -> Result<()> {
        if let Some(w) = workers {
            config.scrape.workers = w;
        }
        if let Some(dir) = output {
            config.output.directory = dir;
        }

        // Output directory is created once up front, not per task.
        std::fs::create_dir_all(&config.output.directory)?;

        println!("Scraping team stats...");
        let report = pool::scrape_all(&config, catalog::team_stats())?;

        if let Some(master) = &report.master {
            let path = Path::new(&config.output.directory).join(&config.output.team_file);
            master.write_csv(&path)?;
            println!(
                "Saved {} teams and {} stats to {}",
                master.teams().len(),
                master.columns().len(),
                path.display()
            );
        }

        println!("\n---- SCRAPE SUMMARY ----");
        if report.failed.is_empty() && report.null_stats.is_empty() {
            println!("All stats scraped cleanly");
        }
        if !report.failed.is_empty() {
            println!("Failed stats:");
            for name in &report.failed {
                println!("  {}", name);
            }
        }
        if !report.null_stats.is_empty() {
            println!("Stats with all nulls:");
            for name in &report.null_stats {
                println!("  {}", name);
            }
        }

        Ok(())
    }
}
