use clap::Parser;

use userhub::cli::{Cli, Commands};
use userhub::config::ConfigLoader;
use userhub::logger::init_logger;
use userhub::server::Server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load layered configuration; a missing connection string is fatal
    // here, before anything starts listening
    let mut loader = ConfigLoader::new()?;
    if let Some(ref path) = cli.config {
        loader = loader.with_config_file(path.clone());
    }
    if let Some(env) = cli.env {
        loader = loader.with_environment(env);
    }
    let mut settings = loader.load()?;
    cli.apply_to(&mut settings);

    init_logger(&settings.logger)?;

    if cli.is_dry_run() {
        println!("✓ Configuration is valid");
        println!("✓ Server would bind to: {}", settings.server.address());
        println!("✓ Database URL is configured");
        println!("Dry run completed successfully - configuration is ready for deployment");
        return Ok(());
    }

    match cli.command {
        Some(Commands::Serve { .. }) | None => Server::new(settings).run().await,
    }
}
