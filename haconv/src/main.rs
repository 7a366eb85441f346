// haconv/src/main.rs

use std::io::{self, BufWriter};
use std::process::ExitCode;

use clap::Parser;
use haconv::cli::Args;
use haconv::{Error, convert, stream};

fn main() -> ExitCode {
    // Logs go to stderr; stdout carries only converted data.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    if args.help {
        print!("{}", Args::usage());
        return ExitCode::FAILURE;
    }

    let config = args.config();
    if !args.ignored.is_empty() {
        log::debug!("ignoring {} extra path argument(s)", args.ignored.len());
    }
    let input = match stream::open_input(args.file.as_deref()) {
        Ok(input) => input,
        Err(e) => {
            eprintln!("Error while opening file: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let stdout = io::stdout();
    let mut output = BufWriter::new(stdout.lock());
    match convert::run(&config, input, &mut output) {
        Ok(_) => ExitCode::SUCCESS,
        Err(Error::Io(e)) if e.kind() == io::ErrorKind::BrokenPipe => {
            log::debug!("output closed early");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("haconv: {}", e);
            ExitCode::FAILURE
        }
    }
}
