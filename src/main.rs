use clap::{CommandFactory, Parser};
use recipe_api_cli::{Cli, Config, RecipeApiClient, RecipeApiError, Terminal};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env is fine; the variables may come from the shell
    let _ = dotenvy::dotenv();

    // Logs go to stderr so they never interleave with command output
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".to_string().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let config = Config::from_env();
    tracing::debug!("Using API at {}", config.base_url);

    let client = RecipeApiClient::from_config(&config);
    let mut term = Terminal::stdio(config.color);

    if let Err(e) = command.run(&client, &mut term).await {
        let Some(api_error) = e.downcast_ref::<RecipeApiError>() else {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        };

        tracing::debug!(
            "Request failed with {} (status {:?})",
            api_error.code(),
            api_error.status()
        );
        eprintln!("\n[X] {}\n", api_error);
        for hint in api_error.hints() {
            eprintln!("{}", hint);
        }
        eprintln!();

        if api_error.is_fatal() {
            std::process::exit(1);
        }
    }

    Ok(())
}
