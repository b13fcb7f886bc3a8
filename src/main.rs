use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use job_offers::{OfferClient, Shell};
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Html,
}

/// Render the job offers page of a job-tracker API.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Base URL of the job-tracker API
    #[arg(long, env = "JOB_OFFERS_API_URL", default_value = "http://localhost:8000")]
    api_url: String,

    /// Location to navigate to
    #[arg(long, default_value = "/job-offers")]
    path: String,

    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("job_offers=info")),
        )
        .init();

    let args = Args::parse();

    let client = OfferClient::new(&args.api_url).context("Invalid --api-url")?;
    info!(url = client.offers_url(), path = %args.path, "mounting page");

    let shell = Shell::new(client);
    let mut mounted = shell.navigate(&args.path);
    mounted.settled().await;

    let frame = match args.format {
        Format::Text => mounted.render_text(),
        Format::Html => mounted.render_html().context("Failed to render page")?,
    };
    println!("{frame}");

    Ok(())
}
