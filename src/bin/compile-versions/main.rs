use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use compile_versions::{
    adapters::outbound::{channel::COMPONENTS_MANIFEST_URL, storage::DEFAULT_GCS_ENDPOINT},
    app::{AppBuilder, AppConfig, AppServices, ListingBackend},
    domain::models::LINUX_X86_64_ARCHIVE_GLOB,
    write_versions_json, BucketName, ListingQuery, OutputError, ReleaseService,
    VersionCatalogService,
};
use object_store::local::LocalFileSystem;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tokio::signal;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Exit status for every fatal error
const FATAL_EXIT_CODE: u8 = 2;

#[derive(Parser, Debug)]
#[command(name = "compile-versions")]
#[command(about = "Compile the list of published Cloud SDK versions as JSON", long_about = None)]
struct Cli {
    /// Bucket the SDK releases are published to
    #[arg(long, env = "COMPILE_VERSIONS_BUCKET", default_value = "cloud-sdk-release")]
    bucket: BucketName,

    /// Server-side glob selecting the archives to read versions from
    #[arg(long, env = "COMPILE_VERSIONS_MATCH_GLOB", default_value = LINUX_X86_64_ARCHIVE_GLOB)]
    match_glob: String,

    /// Cloud Storage JSON API endpoint
    #[arg(long, env = "COMPILE_VERSIONS_ENDPOINT", default_value = DEFAULT_GCS_ENDPOINT)]
    endpoint: String,

    /// List a local mirror directory instead of the bucket
    #[arg(long, env = "COMPILE_VERSIONS_MIRROR_DIR")]
    mirror_dir: Option<PathBuf>,

    /// Components manifest announcing the latest release
    #[arg(long, env = "COMPILE_VERSIONS_COMPONENTS_URL", default_value = COMPONENTS_MANIFEST_URL)]
    components_url: String,

    /// Log level, overridden by RUST_LOG
    #[arg(long, env = "LOG_LEVEL", default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
enum Commands {
    /// Print every published version as a JSON array (default)
    List,

    /// Print the latest version announced on the release channel
    Latest,

    /// Print the download URL of a release archive
    ReleaseUrl {
        /// SDK version, e.g. 400.0.0
        #[arg(long)]
        version: String,
        /// Operating system (linux, darwin, win32)
        #[arg(long, default_value = std::env::consts::OS)]
        os: String,
        /// Architecture (x86_64, x64, arm64, ...)
        #[arg(long, default_value = std::env::consts::ARCH)]
        arch: String,
    },
}

impl Cli {
    fn to_app_config(&self) -> Result<AppConfig> {
        let listing_backend = match &self.mirror_dir {
            Some(dir) => {
                let store = LocalFileSystem::new_with_prefix(dir)
                    .with_context(|| format!("cannot open mirror {}", dir.display()))?;
                ListingBackend::ObjectStore {
                    store: Arc::new(store),
                }
            }
            None => ListingBackend::Gcs {
                endpoint: self.endpoint.clone(),
                bucket: self.bucket.clone(),
            },
        };

        Ok(AppConfig {
            listing_backend,
            components_url: self.components_url.clone(),
        })
    }

    fn init_logging(&self) {
        let level = match self.log_level.to_lowercase().as_str() {
            "trace" => "trace",
            "debug" => "debug",
            "info" => "info",
            "warn" => "warn",
            "error" => "error",
            "off" => "off",
            _ => "warn",
        };

        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

        // stdout carries the report, so logs go to stderr
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

/// Cancel `cancel` on Ctrl+C or SIGTERM
async fn cancel_on_signal(cancel: CancellationToken) {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("failed to listen for Ctrl+C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!("failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
        _ = cancel.cancelled() => return,
    }

    info!("received shutdown signal, cancelling in-flight request");
    cancel.cancel();
}

async fn list_versions(
    services: &AppServices,
    match_glob: &str,
    cancel: &CancellationToken,
) -> Result<()> {
    let query = ListingQuery::new()
        .with_match_glob(match_glob)
        .context("failed to set attribute selection")?;

    let catalog = services
        .catalog_service
        .compile_versions(&query, cancel)
        .await
        .context("failed to list objects")?;

    let versions = catalog.into_sorted_vec();
    let mut stdout = std::io::stdout().lock();
    write_versions_json(&mut stdout, &versions).map_err(|err| {
        let step = match &err {
            OutputError::Json(_) => "failed to create json",
            OutputError::Io(_) => "failed to write output",
        };
        anyhow::Error::new(err).context(step)
    })?;

    Ok(())
}

async fn latest_version(services: &AppServices, cancel: &CancellationToken) -> Result<()> {
    let version = tokio::select! {
        biased;
        _ = cancel.cancelled() => anyhow::bail!("failed to get latest version: operation cancelled"),
        version = services.release_service.latest_version() => {
            version.context("failed to get latest version")?
        }
    };

    writeln!(std::io::stdout(), "{version}").context("failed to write output")?;
    Ok(())
}

fn release_url(services: &AppServices, os: &str, arch: &str, version: &str) -> Result<()> {
    let target = services
        .release_service
        .release_target(os, arch, version)
        .context("failed to build release url")?;

    writeln!(std::io::stdout(), "{}", target.release_url()).context("failed to write output")?;
    Ok(())
}

async fn run(cli: Cli, cancel: &CancellationToken) -> Result<()> {
    let command = cli.command.clone().unwrap_or(Commands::List);
    debug!(?command, bucket = %cli.bucket, endpoint = %cli.endpoint, "starting");

    let services = cli
        .to_app_config()
        .and_then(|config| Ok(AppBuilder::new().with_config(config).build()?))
        .context("failed to create storage client")?;

    match command {
        Commands::List => list_versions(&services, &cli.match_glob, cancel).await,
        Commands::Latest => latest_version(&services, cancel).await,
        Commands::ReleaseUrl { version, os, arch } => release_url(&services, &os, &arch, &version),
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env file if it exists
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    cli.init_logging();

    let cancel = CancellationToken::new();
    tokio::spawn(cancel_on_signal(cancel.clone()));

    let result = run(cli, &cancel).await;
    // stop the signal listener either way
    cancel.cancel();

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err:#}");
            ExitCode::from(FATAL_EXIT_CODE)
        }
    }
}
