//! BrutalForce - exhaustive candidate enumeration with a live dashboard

use brutalforce::{
    cli::Args,
    format::{format_duration, format_magnitude},
    Candidates, Engine, Presenter, Result, RunOutcome, SilentPresenter, TerminalDashboard,
};
use clap::Parser;
use std::io::IsTerminal;
use std::process;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[tokio::main]
async fn main() {
    // Initialize the library
    if let Err(e) = brutalforce::init() {
        eprintln!("❌ Failed to initialize: {}", e);
        process::exit(1);
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if let Err(e) = run(args).await {
        eprintln!("{}", e.user_message());
        process::exit(1);
    }
}

/// Main enumeration workflow
async fn run(args: Args) -> Result<()> {
    let config = args.engine_config();
    let target = resolve_target(&args)?;
    let mut engine = Engine::new(config.clone(), target.as_deref())?;

    let mut presenter: Box<dyn Presenter + Send> = if args.no_dashboard {
        Box::new(SilentPresenter)
    } else {
        Box::new(TerminalDashboard::new(config.max_refresh_hz))
    };

    let stop = Arc::new(AtomicBool::new(false));
    let interrupt = Arc::clone(&stop);
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                tracing::info!("Interrupt received, stopping");
                interrupt.store(true, Ordering::Relaxed);
            }
            Err(e) => tracing::warn!(error = %e, "Cannot listen for Ctrl-C"),
        }
    });

    let flag = Arc::clone(&stop);
    let candidates = Candidates::new(config.alphabet.clone());
    let outcome = tokio::task::spawn_blocking(move || {
        engine.run(candidates, presenter.as_mut(), &flag)
    })
    .await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        print_summary(&outcome);
    }

    Ok(())
}

/// Target from the command line, or from an interactive prompt
fn resolve_target(args: &Args) -> Result<Option<String>> {
    if let Some(target) = &args.target {
        return Ok(Some(target.trim().to_string()));
    }
    if args.no_prompt || !std::io::stdin().is_terminal() {
        return Ok(None);
    }

    let answer = inquire::Text::new("Enter a target to track progress to:")
        .with_help_message("leave empty to skip")
        .prompt()?;
    Ok(Some(answer.trim().to_string()))
}

fn print_summary(outcome: &RunOutcome) {
    let snapshot = &outcome.snapshot;

    println!();
    println!("📈 Summary:");
    println!("   ⏹  Stopped: {}", outcome.reason);
    println!(
        "   🔢 Attempts: {} ({})",
        snapshot.attempts,
        format_magnitude(snapshot.attempts as f64)
    );
    println!("   ⏱️  Elapsed: {}", format_duration(snapshot.elapsed_secs));
    println!(
        "   🚀 Peak rate: {:.2}/s ({})",
        snapshot.rate_peak,
        format_magnitude(snapshot.rate_peak)
    );
    if let Some(target) = &snapshot.target {
        match target.time_to_find {
            Some(seconds) => println!("   🎉 Found '{}' after {}", target.text, format_duration(seconds)),
            None => println!("   😔 '{}' not found yet", target.text),
        }
    }
}
