use std::time::Duration;

use color_eyre::Result;
use color_eyre::eyre::eyre;
use graphit::app::{self, App};
use graphit::cli::{ArgsError, Cli};
use graphit::config::Config;
use graphit::event::EventHandler;
use graphit::system::process::CommandMetadata;
use graphit::system::sampler::SysinfoReader;
use graphit::tui::TerminalGuard;
use graphit::ui;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let (cli, pid) = match Cli::try_parse_with_pid(std::env::args_os()) {
        Ok(parsed) => parsed,
        Err(ArgsError::Display(info)) => info.exit(),
        Err(ArgsError::Pid(err)) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    let config = cli.load_config();
    if config.general.refresh_rate_ms == 0 {
        return Err(eyre!("refresh rate must be greater than 0"));
    }
    init_tracing(&cli)?;

    let command = CommandMetadata::read(pid);

    let mut guard = TerminalGuard::init()?;
    let result = run(guard.terminal(), pid, command, &config).await;
    drop(guard);

    result
}

async fn run(
    terminal: &mut ratatui::DefaultTerminal,
    pid: u32,
    command: CommandMetadata,
    config: &Config,
) -> Result<()> {
    let tick_rate = Duration::from_millis(config.general.refresh_rate_ms);
    let size = crossterm::terminal::size()?;
    let mut app = App::new(pid, SysinfoReader::new(), command, size, config);
    let mut events = EventHandler::new(tick_rate);

    #[cfg(feature = "trace-log")]
    tracing::info!(pid, command = %app.command, "monitoring started");

    app::run(&mut app, &mut events, |view, theme| {
        terminal.draw(|frame| ui::draw(frame, view, theme))?;
        Ok(())
    })
    .await
}

fn init_tracing(cli: &Cli) -> Result<()> {
    let Some(path) = &cli.trace_output else {
        return Ok(());
    };

    #[cfg(not(feature = "trace-log"))]
    {
        let _ = path;
        Err(eyre!(
            "--trace-output requires the `trace-log` feature; run with `cargo run --features trace-log -- --trace-output <path> <pid>`"
        ))
    }

    #[cfg(feature = "trace-log")]
    {
        graphit::logging::init_tracing_json(path)
    }
}
