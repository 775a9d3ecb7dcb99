use clap::Parser;
use spellshape_cli::{Cli, build_client, handlers, logging};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env before parsing so env-backed arguments can see it
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    logging::init(cli.verbose);

    let client = build_client(&cli)?;
    handlers::dispatch(&client, cli.command).await
}
