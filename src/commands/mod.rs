use crate::cli::Cli;
use crate::error::Result;
use clap::CommandFactory;
use std::process::ExitCode;

pub fn dispatch(cli: Cli) -> Result<ExitCode> {
    match cli.args.filename() {
        Some(path) => import::run(&cli.args, &path),
        None => {
            // ファイル未指定はエラーではなく使い方を表示
            Cli::command().print_help()?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

pub mod import;
