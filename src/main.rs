use std::process::ExitCode;

use gitpath::{Cli, GitPathError};

fn main() -> ExitCode {
    let cli = Cli::new_from_args();
    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .init();
    match cli.run(&mut std::io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("Error: {error:#}");
            match error.downcast_ref::<GitPathError>() {
                Some(error) => {
                    if let Some(hint) = error.hint() {
                        eprintln!("{hint}");
                    }
                    ExitCode::from(error.exit_code())
                }
                None => ExitCode::FAILURE,
            }
        }
    }
}
