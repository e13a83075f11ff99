use std::io::{self, BufRead};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use jobsearch_engine::{ReqwestBackend, SystemClock};
use jobsearch_logging::{jobsearch_info, jobsearch_warn};
use tokio::sync::mpsc;

use super::config::AppConfig;
use super::controller::SearchController;
use super::input::{parse_command, Command};
use super::ui::surface::TerminalSurface;

/// Runs the interactive search page on the current (single-threaded) runtime.
pub async fn run_app(config: AppConfig) -> anyhow::Result<()> {
    let backend = ReqwestBackend::new(config.backend.to_settings())?;
    jobsearch_info!("Search endpoint {}", backend.endpoint());

    let mut controller = SearchController::new(
        Arc::new(backend),
        Arc::new(SystemClock::new()),
        config.notifications.to_timings(),
        TerminalSurface::new(io::stdout()),
    );
    controller.surface_mut().show_help();
    controller.render_now();

    // Stdin is blocking; read it on a plain thread and forward lines.
    let (line_tx, mut line_rx) = mpsc::unbounded_channel::<String>();
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            match line {
                Ok(line) => {
                    if line_tx.send(line).is_err() {
                        break;
                    }
                }
                Err(err) => {
                    jobsearch_warn!("Stopped reading stdin: {}", err);
                    break;
                }
            }
        }
    });

    let mut ticker = tokio::time::interval(Duration::from_millis(config.tick_interval_ms.max(1)));
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            line = line_rx.recv() => {
                let Some(line) = line else {
                    jobsearch_info!("Input closed; shutting down");
                    break;
                };
                match parse_command(&line) {
                    Ok(Command::Quit) => break,
                    Ok(Command::Help) => controller.surface_mut().show_help(),
                    Ok(Command::Dispatch(msg)) => controller.dispatch(msg),
                    Err(err) => controller.surface_mut().show_input_error(&err),
                }
            }
            Some(msg) = controller.next_completion() => controller.dispatch(msg),
            _ = ticker.tick() => controller.tick(),
        }
    }

    Ok(())
}
