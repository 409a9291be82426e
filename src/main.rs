use anyhow::Context;
use clap::Parser;
use gptchess::core::{init_logging, Settings, SettingsOverrides};
use gptchess::game::ai::{HttpMoveProvider, MoveProvider, ScriptedProvider};
use gptchess::game::{ClickOutcome, ExternalOutcome, GameSession};
use gptchess::ui::render_game;
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

#[derive(Parser)]
#[command(name = "gptchess", version, about = "Play king-capture chess against a language model")]
struct Cli {
    /// Settings file (defaults to settings.json in the user config directory)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Model identifier
    #[arg(long)]
    model: Option<String>,

    /// Chat-completions URL, or the relay's /gpt-move endpoint
    #[arg(long)]
    endpoint: Option<String>,

    /// Seconds to wait for the opponent before skipping its turn
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    timeout: Option<u64>,

    /// Replay opponent replies from a file instead of calling the service
    /// (replies separated by lines containing only `---`)
    #[arg(long)]
    script: Option<PathBuf>,

    /// Log filter directive, e.g. `gptchess=debug`
    #[arg(long)]
    log: Option<String>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let loaded = Settings::load(cli.config.as_deref()).context("failed to load settings")?;
    let settings = loaded.settings.with_overrides(SettingsOverrides {
        model: cli.model,
        endpoint: cli.endpoint,
        request_timeout_secs: cli.timeout,
        log_filter: cli.log,
    });

    init_logging(settings.log_filter.as_deref(), cli.verbose)?;
    if let Some(fallback) = &loaded.fallback {
        fallback.report();
    }

    let timeout = settings.request_timeout();
    match cli.script {
        Some(path) => {
            let script = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read script {}", path.display()))?;
            info!("[AI] Replaying opponent replies from {:?}", path);
            run(GameSession::new(ScriptedProvider::from_script(&script), timeout)).await
        }
        None => {
            let provider = HttpMoveProvider::new(&settings)?;
            info!("[AI] Opponent {} via {}", settings.model, provider.endpoint());
            run(GameSession::new(provider, timeout)).await
        }
    }
}

async fn run<P: MoveProvider>(mut session: GameSession<P>) -> anyhow::Result<()> {
    println!("{}", render_game(session.controller()));
    println!("Enter a square (e.g. e2), `reset`, `board` or `quit`.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let command = line.trim();
        match command {
            "" => continue,
            "quit" | "exit" => break,
            "reset" => session.reset(),
            "board" => {}
            square => match session.click_notation(square).await {
                Ok(report) => {
                    if let ClickOutcome::Committed(commit) = &report.click {
                        println!("You: {} {} -> {}", commit.moved, commit.from, commit.to);
                    }
                    if let Some(ExternalOutcome::Applied(external)) = &report.external {
                        println!(
                            "Opponent: {} {} -> {}",
                            external.piece, external.from, external.to
                        );
                    }
                }
                Err(e) => {
                    println!("{}", e);
                    continue;
                }
            },
        }
        println!("{}", render_game(session.controller()));
    }

    Ok(())
}
