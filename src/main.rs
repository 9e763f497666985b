// file: src/main.rs
// description: commandline application entry point with command handling
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use es_rag::utils::logging::{format_error, format_success, format_warning};
use es_rag::{
    Config, DenseModel, Document, DocumentLoader, HealthCheck, HealthReport, LoadTracker,
    ModelExporter, OperationTimer, PipelineOutcome, RagPipeline, ReqwestTransport, Responder,
    Retriever, SearchClient,
};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "es_rag")]
#[command(version)]
#[command(about = "Answer questions from a search index through a model server", long_about = None)]
struct Cli {
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = es_rag::config::DEFAULT_CONFIG_PATH
    )]
    config: PathBuf,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Submit the seed documents to the search index
    Load {
        /// JSON array or JSON-lines file of {"text": ...} documents
        #[arg(short, long, value_name = "FILE")]
        file: Option<PathBuf>,
    },

    /// Look up the best matching document without calling the model server
    Retrieve {
        #[arg(short, long)]
        query: Option<String>,
    },

    /// Retrieve context for a query and generate an answer
    Ask {
        #[arg(short, long)]
        query: Option<String>,
    },

    /// Write a single dense layer model to the artifact directory
    ExportModel {
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,

        #[arg(long)]
        seed: Option<u64>,
    },

    /// Check that the search engine and model server respond
    Health,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    es_rag::utils::logging::init_logger(cli.color, cli.verbose);
    colored::control::set_override(cli.color);

    let config = if cli.config.exists() {
        info!("Loading configuration from: {}", cli.config.display());
        Config::load(Some(cli.config.as_path())).context("Failed to load configuration")?
    } else {
        warn!(
            "Config file {} not found, using default configuration",
            cli.config.display()
        );
        Config::load(None).unwrap_or_else(|e| {
            warn!("Falling back to built-in defaults: {}", e);
            Config::default_config()
        })
    };

    match cli.command {
        Commands::Load { file } => cmd_load(&config, file, cli.color).await?,
        Commands::Retrieve { query } => cmd_retrieve(&config, query).await?,
        Commands::Ask { query } => cmd_ask(&config, query).await?,
        Commands::ExportModel { output, seed } => cmd_export_model(&config, output, seed)?,
        Commands::Health => cmd_health(&config).await?,
    }

    Ok(())
}

fn search_client(config: &Config) -> Result<SearchClient> {
    let transport = ReqwestTransport::new(config.search.timeout())
        .context("Failed to create search transport")?;
    Ok(SearchClient::new(config.search.clone(), Arc::new(transport)))
}

fn responder(config: &Config) -> Result<Responder> {
    let transport = ReqwestTransport::new(config.model_server.timeout())
        .context("Failed to create model server transport")?;
    Ok(Responder::new(config.model_server.clone(), Arc::new(transport)))
}

async fn cmd_load(config: &Config, file: Option<PathBuf>, color: bool) -> Result<()> {
    let documents = match file {
        Some(path) => {
            info!("Reading documents from {}", path.display());
            Document::load_file(&path)
                .with_context(|| format!("Failed to read documents from {}", path.display()))?
        }
        None => Document::from_texts(config.loader.documents.iter().cloned()),
    };

    if documents.is_empty() {
        warn!("No documents to load");
        return Ok(());
    }

    let client = search_client(config)?;
    let tracker = LoadTracker::new(documents.len(), color);
    let report = DocumentLoader::new(&client)
        .load(&documents, &tracker, &mut std::io::stdout())
        .await
        .context("Document load failed")?;

    let summary = format!(
        "{} of {} documents accepted ({:.0}%)",
        report.stats.accepted,
        report.stats.submitted,
        report.stats.acceptance_rate()
    );
    if report.stats.rejected == 0 {
        eprintln!("{}", format_success(&summary));
    } else {
        eprintln!("{}", format_warning(&summary));
    }

    Ok(())
}

async fn cmd_retrieve(config: &Config, query: Option<String>) -> Result<()> {
    let query = es_rag::pipeline::resolve_query(query)?;
    let retriever = Retriever::new(search_client(config)?);

    let retrieval = retriever
        .retrieve(&query)
        .await
        .context("Error querying the search engine")?;
    println!("Retrieved text: {}", retrieval);

    Ok(())
}

async fn cmd_ask(config: &Config, query: Option<String>) -> Result<()> {
    let query = es_rag::pipeline::resolve_query(query)?;
    let start_time = Instant::now();

    let pipeline = RagPipeline::new(Retriever::new(search_client(config)?), responder(config)?);

    let outcome = pipeline
        .run(&query, &mut std::io::stdout())
        .await
        .context("Failed to answer query")?;

    match outcome {
        PipelineOutcome::NoContext => info!("No context found, model server not called"),
        PipelineOutcome::Answered { context, .. } => info!(
            "Answered from document {} in {:.2}s",
            context.id,
            start_time.elapsed().as_secs_f64()
        ),
    }

    Ok(())
}

fn cmd_export_model(config: &Config, output: Option<PathBuf>, seed: Option<u64>) -> Result<()> {
    let timer = OperationTimer::new("model export");
    let output_dir = output.unwrap_or_else(|| config.exporter.output_dir.clone());

    let model = DenseModel::build(
        config.exporter.input_width,
        config.exporter.units,
        seed.or(config.exporter.seed),
    )?;
    let manifest = ModelExporter::new(&output_dir)
        .export(&model)
        .context("Failed to export model")?;

    for file in &manifest.files {
        info!("  wrote {}", file.display());
    }

    let reloaded = ModelExporter::load(&manifest.output_dir)
        .context("Exported model artifact could not be read back")?;
    let outputs = reloaded.call(&vec![0.0; config.exporter.input_width])?;
    info!(
        "Artifact verified: zero input maps to {} outputs",
        outputs.len()
    );
    timer.finish();

    println!(
        "{}",
        format_success(&format!(
            "Model written to {} (fingerprint {})",
            manifest.output_dir.display(),
            &manifest.fingerprint[..12]
        ))
    );

    Ok(())
}

async fn check_service<F>(component: &str, check: F) -> HealthCheck
where
    F: std::future::Future<Output = es_rag::Result<es_rag::HttpResponse>>,
{
    let start = Instant::now();
    match check.await {
        Ok(response) if response.is_success() => HealthCheck::healthy(component, start.elapsed()),
        Ok(response) => HealthCheck::unhealthy(
            component,
            format!("status {}: {}", response.status, response.body),
            start.elapsed(),
        ),
        Err(e) => HealthCheck::unhealthy(component, e.to_string(), start.elapsed()),
    }
}

async fn cmd_health(config: &Config) -> Result<()> {
    let search = search_client(config)?;
    let responder = responder(config)?;

    let checks = vec![
        check_service("search engine", search.ping()).await,
        check_service("model server", responder.status()).await,
    ];
    let report = HealthReport::new(checks, env!("CARGO_PKG_VERSION").to_string());

    print!("{}", report.format());

    if !report.is_healthy() {
        eprintln!("{}", format_error("One or more services are unavailable"));
        return Err(anyhow::anyhow!("Health check failed"));
    }

    Ok(())
}
