//! Application Runner Module
//!
//! Provides the shared entry point for the `sketch` binary: logging setup,
//! wiring of workspace, generator and message bus, and the line-based REPL.

use std::time::Duration;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::app::{App, AppEvent, Command};
use crate::catalog::Catalog;
use crate::config::{RemoteConfig, DEFAULT_LATENCY};
use crate::factory::LayoutFactory;
use crate::generation::Generator;
use crate::messaging::MessageReceiver;
use crate::workspace::{Settings, SettingsUpdate, Workspace};

/// Shared application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Enable debug logging
    pub debug: bool,
    /// Enable verbose (trace-level) logging
    pub verbose: bool,
    /// Never call the remote collaborator
    pub offline: bool,
    /// Simulated processing delay per generation
    pub latency: Duration,
    /// Seed for the layout factory's random source
    pub seed: Option<u64>,
    /// Initial layouts per generation (clamped)
    pub layouts: Option<usize>,
    pub auto_save: bool,
    pub remote: RemoteConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            debug: false,
            verbose: false,
            offline: false,
            latency: DEFAULT_LATENCY,
            seed: None,
            layouts: None,
            auto_save: false,
            remote: RemoteConfig::default(),
        }
    }
}

impl AppConfig {
    fn default_filter(&self) -> &'static str {
        if self.verbose {
            "trace"
        } else if self.debug {
            "debug"
        } else {
            "warn"
        }
    }

    fn settings(&self) -> Settings {
        let mut settings = Settings::default();
        settings.apply(SettingsUpdate {
            auto_save: Some(self.auto_save),
            layouts_per_generation: self.layouts,
            ..SettingsUpdate::default()
        });
        settings
    }

    fn factory(&self) -> LayoutFactory {
        match self.seed {
            Some(seed) => LayoutFactory::seeded(Catalog::builtin(), seed),
            None => LayoutFactory::new(),
        }
    }

    fn generator(&self) -> Generator {
        if self.offline {
            Generator::offline(self.latency)
        } else {
            Generator::new(&self.remote, self.latency)
        }
    }
}

/// Install the global tracing subscriber. Logs go to stderr.
pub fn init_logging(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.default_filter()));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr),
        )
        .init();
}

/// Run the interactive REPL on stdin/stdout.
///
/// # Errors
///
/// Returns an error if the runtime cannot be created or stdin fails.
pub fn run_repl(config: AppConfig) -> anyhow::Result<()> {
    init_logging(&config);
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(repl(config))
}

async fn repl(config: AppConfig) -> anyhow::Result<()> {
    debug!(?config, "Starting REPL");
    let (events_tx, mut events_rx) = mpsc::unbounded_channel();
    let workspace = Workspace::with_factory(config.settings(), config.factory());
    let mut app = App::new(workspace, config.generator(), events_tx);
    let mut notices = app.subscribe();

    println!("🎨 Sketchpot - type 'help' for commands");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdin_open = true;

    loop {
        if !stdin_open && !app.is_busy() {
            break;
        }

        let event = tokio::select! {
            line = lines.next_line(), if stdin_open => match line? {
                Some(line) => match Command::parse(&line) {
                    Ok(Some(command)) => AppEvent::Command(command),
                    Ok(None) => continue,
                    Err(e) => {
                        println!("❌ {}", e);
                        continue;
                    }
                },
                None => {
                    debug!("End of input; waiting for pending generations");
                    stdin_open = false;
                    continue;
                }
            },
            Some(event) = events_rx.recv() => event,
        };

        for line in app.handle_event(event) {
            println!("{}", line);
        }
        print_notices(&mut notices);

        if app.should_quit() {
            break;
        }
    }

    print_notices(&mut notices);
    Ok(())
}

fn print_notices(notices: &mut MessageReceiver) {
    for message in notices.drain() {
        println!("{}", message.to_log_line());
    }
}
