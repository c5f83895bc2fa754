use anyhow::Context;
use clap::Parser;
use delphi::cli::Cli;
use delphi::lookup::lookup;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version also land here and are not failures
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    delphi::tracing::init(cli.verbose);

    // Nothing reaches stdout unless the whole lookup succeeded.
    match run(&cli) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("delphi: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<String> {
    let cwd = std::env::current_dir().context("Failed to determine current directory")?;
    let config = cli.config(cwd);

    let results = lookup(&config, &cli.file, &cli.query)?;
    serde_json::to_string(&results).context("Failed to serialize results")
}
