use clap::Parser;
use usefull_scripts::utils::logger;
use usefull_scripts::{CliConfig, SmokeReport, SystemPython};

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger();

    if !config.ignored.is_empty() {
        tracing::debug!("Ignoring {} extra argument(s)", config.ignored.len());
    }

    let probe = SystemPython::default();
    match SmokeReport::probe(&probe) {
        Ok(report) => {
            println!("{}", report.render());
        }
        Err(e) => {
            tracing::error!("❌ Smoke test failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    }
}
