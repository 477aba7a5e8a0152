use std::process::ExitCode;

use clap::Parser;
use gbcore::args::Args;

fn main() -> ExitCode {
    let args = Args::parse();

    match gbcore::rom_exec(args) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
