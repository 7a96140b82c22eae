use product_factory::{
    application::Showcase,
    logging::{LogConfig, init_logging},
};
use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = init_logging(LogConfig::default()) {
        eprintln!("{e}");
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match Showcase::default().run(&mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
