//! actionsheet - pick one option from a sheet in the terminal.

/// Application configuration (TOML).
mod config;

use std::path::{Path, PathBuf};

use actionsheet_core::{
    BusyPolicy, DialogEvent, PresentError, PresentOutcome, Presenter, RecordingPresenter,
    SelectionDialogController, SelectionRequest, SelectionResult,
};
use actionsheet_tui::TerminalPresenter;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Deserialize;
use tokio::sync::oneshot;
use tracing::instrument;
use tracing_subscriber::filter::EnvFilter;
#[cfg(not(feature = "otel"))]
use tracing_subscriber::fmt;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
#[cfg(feature = "otel")]
use tracing_subscriber::layer::SubscriberExt;
#[cfg(feature = "otel")]
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::{AppConfig, resolve_config_path};

/// CLI argument parser.
#[derive(Parser)]
#[command(about, version)]
struct Cli {
    /// Override config directory.
    #[arg(long, global = true)]
    dir: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Show a selection sheet and report the chosen index (-1 on cancel).
    Pick(PickArgs),
    /// Show the resolved config path and effective settings.
    Config,
}

/// Arguments for the `pick` subcommand.
#[derive(clap::Args)]
struct PickArgs {
    /// Option labels in display order.
    labels: Vec<String>,

    /// Sheet title.
    #[arg(long)]
    title: Option<String>,

    /// Message shown under the title.
    #[arg(long)]
    message: Option<String>,

    /// Cancel row label. No cancel row when omitted.
    #[arg(long)]
    cancel: Option<String>,

    /// Option index to mark as destructive.
    #[arg(long, default_value_t = -1, allow_negative_numbers = true)]
    destructive_index: i64,

    /// Cancel row color ("#RRGGBB", "#AARRGGBB", or a color name).
    #[arg(long)]
    tint_color: Option<String>,

    /// JSON file with one request object or an array of them.
    #[arg(long, conflicts_with = "labels")]
    request: Option<PathBuf>,

    /// Busy policy override: ignore, reject, replace, queue.
    #[arg(long)]
    policy: Option<BusyPolicy>,

    /// Scripted event instead of terminal input (tap:N, cancel, dismiss). Repeatable.
    #[arg(long = "event", value_parser = parse_event)]
    events: Vec<DialogEvent>,
}

/// Bridge payload: a single request or a batch.
#[derive(Deserialize)]
#[serde(untagged)]
enum RequestFile {
    /// Several requests, presented back-to-back.
    Many(Vec<SelectionRequest>),
    /// One request.
    One(SelectionRequest),
}

/// A `present` call and its reply channel.
struct Submitted {
    /// 1-based position in the batch.
    number: usize,
    /// What `present` returned.
    outcome: Result<PresentOutcome, PresentError>,
    /// Reply channel.
    rx: oneshot::Receiver<SelectionResult>,
}

/// Parses a scripted event.
fn parse_event(s: &str) -> Result<DialogEvent, String> {
    match s {
        "cancel" => Ok(DialogEvent::CancelTap),
        "dismiss" => Ok(DialogEvent::Dismiss),
        _ => s
            .strip_prefix("tap:")
            .and_then(|n| n.parse::<usize>().ok())
            .map(DialogEvent::OptionTap)
            .ok_or_else(|| format!("invalid event '{s}' (expected tap:N, cancel, or dismiss)")),
    }
}

/// Whether the terminal presenter will own stdout for this invocation.
fn uses_terminal(command: &Commands) -> bool {
    matches!(command, Commands::Pick(args) if args.events.is_empty())
}

/// Log destination: stderr while the sheet is drawn on stdout.
fn log_writer(command: &Commands) -> BoxMakeWriter {
    if uses_terminal(command) {
        BoxMakeWriter::new(std::io::stderr)
    } else {
        BoxMakeWriter::new(std::io::stdout)
    }
}

/// Reads requests from a JSON file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a request payload.
fn load_requests(path: &Path) -> Result<Vec<SelectionRequest>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let file: RequestFile = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse {}", path.display()))?;
    Ok(match file {
        RequestFile::Many(requests) => requests,
        RequestFile::One(request) => vec![request],
    })
}

/// Builds the request list from arguments.
///
/// # Errors
///
/// Returns an error if `--request` cannot be loaded.
fn build_requests(args: &PickArgs) -> Result<Vec<SelectionRequest>> {
    if let Some(path) = &args.request {
        return load_requests(path);
    }

    let mut request = SelectionRequest::new(args.labels.iter().cloned())
        .with_destructive_index(args.destructive_index);
    request.title.clone_from(&args.title);
    request.message.clone_from(&args.message);
    request.cancel_label.clone_from(&args.cancel);
    request.tint_color.clone_from(&args.tint_color);
    Ok(vec![request])
}

/// Presents every request back-to-back.
fn submit_all<P: Presenter>(
    controller: &mut SelectionDialogController<P>,
    requests: Vec<SelectionRequest>,
) -> Vec<Submitted> {
    requests
        .into_iter()
        .enumerate()
        .map(|(i, request)| {
            let (tx, rx) = oneshot::channel();
            Submitted {
                number: i.saturating_add(1),
                outcome: controller.present(request, tx),
                rx,
            }
        })
        .collect()
}

/// Applies one event, logging misrouted ones.
fn deliver<P: Presenter>(controller: &mut SelectionDialogController<P>, event: DialogEvent) {
    match controller.handle(event) {
        Ok(settlement) => {
            tracing::debug!(
                session = %settlement.session,
                result = %settlement.result,
                "Session settled"
            );
        }
        Err(e) => tracing::warn!("Event {event:?} not applied: {e}"),
    }
}

/// Logs the outcome of every submitted request.
///
/// Must be called after the controller is dropped so unsettled replies resolve.
async fn report(submitted: Vec<Submitted>) {
    for item in submitted {
        match item.outcome {
            Err(e) => tracing::info!("Request #{} rejected: {}", item.number, e),
            Ok(PresentOutcome::Ignored) => {
                tracing::info!("Request #{} ignored (dialog busy)", item.number);
            }
            Ok(PresentOutcome::Shown(_) | PresentOutcome::Queued { .. }) => match item.rx.await {
                Ok(result) => tracing::info!("Request #{} result: {}", item.number, result),
                Err(_) => tracing::info!("Request #{} not settled", item.number),
            },
        }
    }
}

/// Runs the `pick` subcommand.
///
/// Uses the terminal unless scripted events are given.
///
/// # Errors
///
/// Returns an error if config or requests cannot be loaded, or terminal I/O fails.
#[instrument(skip_all)]
async fn run_pick(args: &PickArgs, dir: Option<&PathBuf>) -> Result<()> {
    let config_path = resolve_config_path(dir)?;
    let config = AppConfig::load(&config_path)?;
    let options = config.controller.options(args.policy);
    let requests = build_requests(args)?;
    tracing::debug!(
        requests = requests.len(),
        policy = ?options.busy_policy,
        "Presenting requests"
    );

    if args.events.is_empty() {
        let mut controller =
            SelectionDialogController::with_options(TerminalPresenter::new(), options);
        let submitted = submit_all(&mut controller, requests);
        while controller.is_presenting() {
            if let Some(event) = controller.presenter_mut().next_event()? {
                deliver(&mut controller, event);
            }
        }
        drop(controller);
        report(submitted).await;
        return Ok(());
    }

    let mut controller =
        SelectionDialogController::with_options(RecordingPresenter::new(), options);
    let submitted = submit_all(&mut controller, requests);
    for &event in &args.events {
        deliver(&mut controller, event);
    }
    if controller.is_presenting() {
        tracing::warn!("Script ended with a sheet still presenting");
    }

    for (session, sheet) in &controller.presenter().shown {
        let rows: Vec<&str> = sheet.rows.iter().map(|r| r.text.as_str()).collect();
        tracing::info!("Session {} rows: [{}]", session, rows.join(", "));
        if let Some(cancel) = &sheet.cancel {
            tracing::info!("Session {} cancel: {} ({})", session, cancel.text, cancel.color);
        }
    }
    drop(controller);
    report(submitted).await;
    Ok(())
}

/// Runs the `config` subcommand.
///
/// # Errors
///
/// Returns an error if the config path cannot be resolved or the file is invalid.
#[instrument(skip_all)]
fn run_config(dir: Option<&PathBuf>) -> Result<()> {
    let path = resolve_config_path(dir)?;
    let config = AppConfig::load(&path)?;
    let content = config.to_toml()?;
    tracing::info!("Config file: {}", path.display());
    for line in content.lines() {
        tracing::info!("{}", line);
    }
    Ok(())
}

/// Entry point.
///
/// # Errors
///
/// Returns an error if subcommand execution fails.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let writer = log_writer(&cli.command);

    #[cfg(not(feature = "otel"))]
    {
        fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .with_target(false)
            .with_writer(writer)
            .init();
    }

    #[cfg(feature = "otel")]
    {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_writer(writer);

        let otel_layer = std::env::var("OTEL_EXPORTER_OTLP_ENDPOINT")
            .ok()
            .and_then(|_| {
                let exporter = opentelemetry_otlp::SpanExporter::builder()
                    .with_http()
                    .build()
                    .ok()?;

                let tracer_provider = opentelemetry_sdk::trace::SdkTracerProvider::builder()
                    .with_simple_exporter(exporter)
                    .build();

                let tracer = opentelemetry::trace::TracerProvider::tracer(
                    &tracer_provider,
                    env!("CARGO_PKG_NAME"),
                );
                opentelemetry::global::set_tracer_provider(tracer_provider);

                Some(tracing_opentelemetry::layer().with_tracer(tracer))
            });

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .with(otel_layer)
            .init();
    }

    match cli.command {
        Commands::Pick(args) => run_pick(&args, cli.dir.as_ref()).await,
        Commands::Config => run_config(cli.dir.as_ref()),
    }
}
