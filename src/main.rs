mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};

use gh_core::config::Config;

async fn start_server(host: String, port: u16, config_path: Option<&std::path::Path>) -> Result<()> {
    let mut config = Config::load_or_default(config_path);

    // Override host/port from CLI if specified
    config.server.host = host;
    config.server.port = port;

    tracing::info!("Starting Gravenhold explorer");
    tracing::info!(
        "Server will listen on {}:{}",
        config.server.host,
        config.server.port
    );

    gh_server::start(config).await?;
    Ok(())
}

fn seed_database(config_path: Option<&std::path::Path>) -> Result<()> {
    let config = Config::load_or_default(config_path);
    let db_str = config.server.db_path.to_string_lossy();

    tracing::info!("Initializing database at {db_str}");
    let pool = gh_db::pool::init_pool(&db_str)?;
    let conn = gh_db::pool::get_conn(&pool)?;
    gh_db::seed::verify_game_data(&conn)?;

    println!("Database seeded at {db_str}");
    Ok(())
}

fn validate_config(config_path: Option<&std::path::Path>) -> Result<()> {
    let config = Config::load_or_default(config_path);
    let warnings = config.validate();

    if warnings.is_empty() {
        println!("Configuration OK");
    } else {
        for warning in &warnings {
            println!("warning: {warning}");
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "gravenhold=trace,gh_server=trace,gh_db=debug,gh_core=debug,tower_http=debug"
                .to_string()
        } else {
            "gravenhold=debug,gh_server=debug,gh_db=info,tower_http=info".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .init();

    match cli.command {
        Commands::Start { host, port } => {
            // Create tokio runtime
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(start_server(host, port, cli.config.as_deref()))
        }
        Commands::Seed => seed_database(cli.config.as_deref()),
        Commands::Validate {
            config: config_path,
        } => {
            let path = config_path.or(cli.config);
            validate_config(path.as_deref())
        }
        Commands::Version => {
            println!("gravenhold {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}
