//! CLI entrypoint for anipoll
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anipoll_application::{AnipollOutcome, CreateAnipollInput, CreateAnipollUseCase};
use anipoll_domain::RawCommand;
use anipoll_infrastructure::{AniListCatalog, ConfigLoader, FileConfig, HttpVotingGateway};
use anipoll_presentation::{Cli, JsonFormatter, OutputFormat, OutputFormatter, ReplyFormatter};
use anyhow::{Context, Result, anyhow, bail};
use chrono::Utc;
use clap::Parser;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Lines};
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let _log_guard = init_logging(&cli)?;

    info!("Starting anipoll {}", env!("CARGO_PKG_VERSION"));

    let config = load_config(&cli)?;

    // === Dependency Injection ===
    let catalog = Arc::new(
        AniListCatalog::new(
            config.catalog.endpoint.clone(),
            config.catalog.per_page,
            config.catalog.timeout(),
        )
        .context("Failed to create catalog client")?,
    );
    let voting = Arc::new(
        HttpVotingGateway::new(config.voting.endpoint.clone(), config.voting.timeout())
            .context("Failed to create voting client")?,
    );

    let use_case = CreateAnipollUseCase::new(catalog, voting)
        .with_fetch_params(config.catalog.to_fetch_params())
        .with_command_defaults(config.command.to_command_defaults());

    let cancellation = CancellationToken::new();
    {
        let token = cancellation.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                warn!("Interrupted, cancelling");
                token.cancel();
            }
        });
    }

    let formatter: Box<dyn OutputFormatter> = match cli.output {
        OutputFormat::Text => Box::new(ReplyFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
    };

    if cli.stdin {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Some(line) = next_message(&mut lines, &cancellation).await? {
            let output = handle(&cli, &use_case, &line, formatter.as_ref(), &cancellation).await?;
            println!("{}", output);
        }
        return Ok(());
    }

    let message = match &cli.message {
        Some(m) => m,
        None => bail!("A chat message is required. Use --stdin to read messages from stdin."),
    };

    let output = handle(&cli, &use_case, message, formatter.as_ref(), &cancellation).await?;
    println!("{}", output);

    Ok(())
}

/// Next non-blank line, as soon as it arrives.
///
/// `None` at end of input or once `cancellation` fires.
async fn next_message<R>(
    lines: &mut Lines<R>,
    cancellation: &CancellationToken,
) -> Result<Option<String>>
where
    R: AsyncBufRead + Unpin,
{
    loop {
        let line = tokio::select! {
            biased;
            _ = cancellation.cancelled() => return Ok(None),
            line = lines.next_line() => line.context("Failed to read stdin")?,
        };
        match line {
            Some(line) if line.trim().is_empty() => continue,
            other => return Ok(other),
        }
    }
}

/// Handle one chat message and render the reply
async fn handle(
    cli: &Cli,
    use_case: &CreateAnipollUseCase,
    message: &str,
    formatter: &dyn OutputFormatter,
    cancellation: &CancellationToken,
) -> Result<String> {
    let command = RawCommand::new(message, cli.author_id.clone(), cli.server_id.clone());
    let input = CreateAnipollInput::new(command, Utc::now());

    if cli.dry_run {
        return match use_case.build_request(&input, cancellation).await {
            Ok(request) => Ok(formatter.format_request(&request)),
            Err(err) => Ok(formatter.format_outcome(&AnipollOutcome::from_failure(err)?)),
        };
    }

    let outcome = use_case.execute(input, cancellation).await?;
    Ok(formatter.format_outcome(&outcome))
}

/// Initialize logging based on verbosity level.
///
/// `RUST_LOG` wins over `-v` when set. With `--log-file` events go to the
/// file through a non-blocking writer whose guard must outlive `main`.
fn init_logging(cli: &Cli) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    });

    match &cli.log_file {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            let (writer, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_ansi(false)
                .with_writer(writer)
                .init();
            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .init();
            Ok(None)
        }
    }
}

fn load_config(cli: &Cli) -> Result<FileConfig> {
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    config.validate().context("Invalid configuration")?;
    Ok(config)
}
