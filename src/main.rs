//! Process entry: launching the program opens the intro screen.

use std::io;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

use rehab_assistant::adapters::report::FileReportSink;
use rehab_assistant::adapters::terminal;
use rehab_assistant::application::WizardService;
use rehab_assistant::config::AppConfig;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let sink = FileReportSink::new(&config.report.path);
    let mut service = WizardService::new(sink, StdRng::from_entropy());

    let stdin = io::stdin();
    let stdout = io::stdout();
    terminal::run(&mut service, &mut stdin.lock(), &mut stdout.lock())?;

    Ok(())
}
