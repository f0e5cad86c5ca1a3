use bigg_core::FetchError;
use clap::Parser;

mod cli;

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(err) = cli.run() {
        eprintln!("bigg-fetch error: {:#}", err);
        let code = err
            .downcast_ref::<FetchError>()
            .map(FetchError::exit_code)
            .unwrap_or(1);
        std::process::exit(code);
    }
}
