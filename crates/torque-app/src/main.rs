//! Torque application binary - composition root.
//!
//! Ties the pipeline crates into a single executable:
//! 1. Parse CLI arguments
//! 2. Load configuration from TOML
//! 3. Initialize tracing
//! 4. Build the dispatcher and ask pipeline
//! 5. Run one query, or an interactive prompt loop

mod cli;
mod render;

use std::io::Write;
use std::time::Duration;

use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};

use cli::CliArgs;
use render::TextRenderer;
use torque_ask::{AskOutcome, AskPipeline, RecognitionOutcome, Recognizer, StubRecognizer};
use torque_core::config::TorqueConfig;
use torque_query::QueryDispatcher;

/// Sample questions shown at the start of an interactive session.
const SAMPLE_COMMANDS: &[&str] = &[
    "Show total revenue for last month",
    "Display vehicle types as pie chart",
    "Show technician performance",
];

#[tokio::main]
async fn main() {
    let args = CliArgs::parse();

    let config_file = args.resolve_config_path();
    let config = TorqueConfig::load_or_default(&config_file);

    let log_level = args.resolve_log_level(&config.general.log_level);
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    tracing::info!("Starting Torque v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!(path = %config_file.display(), "Configuration resolved");

    let endpoint = args.resolve_endpoint(&config.query.endpoint_url);
    let dispatcher = QueryDispatcher::with_timeout(
        &endpoint,
        Duration::from_secs(config.query.request_timeout_secs),
    );
    tracing::info!(endpoint = %dispatcher.endpoint(), "Query dispatcher ready");

    let pipeline = AskPipeline::new(dispatcher);
    let renderer = TextRenderer;

    if let Some(query) = args.one_shot_query() {
        run_round(&pipeline, &renderer, Some(&query)).await;
        return;
    }

    let recognizer = config
        .speech
        .enabled
        .then(|| StubRecognizer::new(config.speech.max_capture_secs));
    interactive_loop(
        &pipeline,
        &renderer,
        recognizer,
        config.general.show_sample_commands,
    )
    .await;
}

/// Run one ask round and print its outcome.
async fn run_round(pipeline: &AskPipeline, renderer: &TextRenderer, text: Option<&str>) {
    match pipeline.run(text).await {
        AskOutcome::Render(instruction) => println!("{}", renderer.render(&instruction)),
        AskOutcome::Notice(message) => println!("{message}"),
    }
}

/// Read queries from stdin until EOF or an exit command.
///
/// `voice` routes one round through the speech recognizer instead of the
/// typed line; everything else is dispatched as a query verbatim.
async fn interactive_loop(
    pipeline: &AskPipeline,
    renderer: &TextRenderer,
    mut recognizer: Option<StubRecognizer>,
    show_samples: bool,
) {
    if show_samples {
        println!("Sample commands:");
        for sample in SAMPLE_COMMANDS {
            println!("  - \"{sample}\"");
        }
        println!();
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("torque> ");
        let _ = std::io::stdout().flush();

        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                tracing::error!(error = %e, "Failed to read input");
                break;
            }
        };

        let text = line.trim();
        if text.is_empty() {
            continue;
        }
        if text.eq_ignore_ascii_case("quit") || text.eq_ignore_ascii_case("exit") {
            break;
        }
        if text.eq_ignore_ascii_case("voice") {
            voice_round(pipeline, renderer, recognizer.as_mut()).await;
            continue;
        }

        println!("Recognized: {text}");
        run_round(pipeline, renderer, Some(text)).await;
    }
}

/// Run one round through the speech recognizer.
async fn voice_round(
    pipeline: &AskPipeline,
    renderer: &TextRenderer,
    recognizer: Option<&mut StubRecognizer>,
) {
    let Some(recognizer) = recognizer else {
        println!("Voice input is disabled; type your question instead.");
        return;
    };

    match recognizer.recognize_once() {
        Ok(RecognitionOutcome::Recognized(text)) => {
            println!("Recognized: {text}");
            run_round(pipeline, renderer, Some(&text)).await;
        }
        Ok(RecognitionOutcome::NotUnderstood) => {
            run_round(pipeline, renderer, None).await;
        }
        Err(e) => println!("Voice input unavailable: {e}"),
    }
}
