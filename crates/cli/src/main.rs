use clap::Parser;
use occurs_cli::args::Args;
use occurs_cli::config::Config;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();
    occurs_cli::init_logging(args.verbose);

    let config = match Config::try_from(args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration Error: {e}");
            return ExitCode::FAILURE;
        }
    };
    log::debug!("{config:?}");

    match occurs_cli::execute(&config, std::io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        // 出力先が閉じられた場合は正常終了扱い
        Err(e) if e.is_broken_pipe() => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Application Error: {e}");
            ExitCode::FAILURE
        }
    }
}
