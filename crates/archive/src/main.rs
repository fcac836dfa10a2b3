use std::process::ExitCode;

use chanarc_api::client::Client;
use chanarc_archive::{
    archiver::Archiver,
    cli::{usage, Cli},
    logging::init_tracing,
};
use clap::{error::ErrorKind, Parser};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(_) => {
            let program = std::env::args().next().unwrap_or_else(|| "chanarc".to_string());
            println!("{}", usage(&program));
            return ExitCode::from(1);
        }
    };
    init_tracing(cli.debug);

    let base_dir = match cli.base_dir() {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("error: cannot resolve output directory: {}", e);
            return ExitCode::from(1);
        }
    };

    let archiver = Archiver::new(Client::default()).overwrite(cli.overwrite);
    match archiver.archive(&cli.thread_ref(), &base_dir).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::from(1)
        }
    }
}
