use std::process::ExitCode;

use workout_tracker::config::Config;

fn main() -> anyhow::Result<ExitCode> {
    let config = Config::from_env()?;
    workout_tracker_cli::init_logging(&config);

    let stdout = std::io::stdout();
    let outcome = workout_tracker_cli::run(&config, &mut stdout.lock())?;

    Ok(if outcome.is_clean() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
