use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = cprompt::observability::init_tracing() {
        eprintln!("cprompt: {e}");
    }

    match cprompt::render().write_to(io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Failed to write prompt");
            ExitCode::FAILURE
        }
    }
}
