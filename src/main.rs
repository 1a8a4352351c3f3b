use datapipe::{
    cli::{self, EXIT_CONFIG},
    config::Settings,
};
use std::{io, process::ExitCode};

fn main() -> ExitCode {
    // Load settings before anything else so the log level can come from them
    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Error: {}", e.chain());
            return ExitCode::from(EXIT_CONFIG);
        }
    };

    let mut stdout = io::stdout();
    let mut stderr = io::stderr();

    // Parse arguments, set up logging and execute the appropriate command
    let code = cli::run(std::env::args_os(), &settings, &mut stdout, &mut stderr);
    ExitCode::from(code)
}
