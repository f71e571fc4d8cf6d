use std::process::ExitCode;

fn main() -> ExitCode {
    match tile_engine::protocol::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
