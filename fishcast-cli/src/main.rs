//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use fishcast_cli::CliError;

#[expect(
    clippy::print_stderr,
    reason = "the binary reports fatal errors on stderr"
)]
fn main() {
    let outcome = fishcast_cli::init_logging().and_then(|()| fishcast_cli::run());
    match outcome {
        Ok(()) => {}
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            eprintln!("fishcast: {err}");
            std::process::exit(1);
        }
    }
}
