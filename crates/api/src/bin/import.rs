//! `geoline-import`: copy the static site's images into the upload store
//! and create the matching CMS rows.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use geoline_api::config::UploadConfig;
use geoline_api::import::Importer;
use geoline_core::upload::UploadStore;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "geoline-import", about = "Import static site images into the GeoLine CMS")]
struct Cli {
    /// Directory holding the site's original images.
    #[arg(long, default_value = "img")]
    img_dir: PathBuf,

    /// PostgreSQL connection URL.
    #[arg(long, env = "DATABASE_URL")]
    database_url: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "geoline_api=info,geoline_import=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %format!("{e:#}"), "Import failed, current section rolled back");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli) -> anyhow::Result<()> {
    let upload_config = UploadConfig::from_env();
    tracing::info!(
        source = %cli.img_dir.display(),
        target = %upload_config.dir.display(),
        "Starting image import",
    );

    let pool = geoline_db::create_pool(&cli.database_url).await?;
    geoline_db::run_migrations(&pool).await?;

    let uploads = UploadStore::new(upload_config.dir.clone(), upload_config.limits());
    uploads.ensure_root().await?;

    let summary = Importer::new(&pool, &uploads, cli.img_dir.clone()).run().await?;
    tracing::info!(?summary, "Image import completed");

    Ok(())
}
