use clap::Parser;
use std::env;
use std::io;
use std::process::ExitCode;
use ticklist::cli::{self, Args};

fn main() -> ExitCode {
    if env::var("RUST_LOG").is_err() {
        unsafe {
            env::set_var("RUST_LOG", "ticklist=info,ticklist_core=info");
        }
    }
    env_logger::init();

    let args = Args::parse();
    let mut stdout = io::stdout().lock();
    match cli::run(&args, &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
