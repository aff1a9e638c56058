//! lastpass2pass のインポート処理
//!
//! LastPass から書き出した CSV を読み込み、1レコードずつ `pass insert` する。

use crate::config::{ImportOptions, StoreConfig};
use crate::error::Result;
use crate::importer::Importer;
use crate::output::{self, ImportSummary};
use crate::parser::{self, ColumnLayout};
use crate::store::PassStore;
use clap::Parser;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Debug, Parser)]
pub struct Args {
    /// Overwrite existing records
    #[arg(short, long)]
    pub force: bool,

    /// Password store directory (defaults to $PASSWORD_STORE_DIR, then ~/.password-store)
    #[arg(long, value_name = "DIR")]
    pub store_dir: Option<PathBuf>,

    /// Store command to invoke
    #[arg(long, value_name = "PROGRAM")]
    pub pass_program: Option<String>,

    /// Column order of the CSV rows
    #[arg(long, value_enum, default_value_t = ColumnLayout::Positional)]
    pub layout: ColumnLayout,

    /// CSV file exported from LastPass (unquoted spaces are allowed)
    #[arg(value_name = "FILENAME")]
    pub filename: Vec<String>,
}

impl Args {
    /// 引数をスペースで連結したファイルパス
    pub fn filename(&self) -> Option<PathBuf> {
        if self.filename.is_empty() {
            None
        } else {
            Some(PathBuf::from(self.filename.join(" ")))
        }
    }

    pub fn store_config(&self) -> StoreConfig {
        StoreConfig::resolve(self.store_dir.clone(), self.pass_program.clone())
    }

    pub fn options(&self) -> ImportOptions {
        ImportOptions { force: self.force }
    }
}

pub fn run(args: &Args, path: &Path) -> Result<ExitCode> {
    println!("Reading “{}”...", path.display());
    let records = parser::parse_file(path, args.layout)?;
    println!("Records parsed: {}", records.len());

    let config = args.store_config();
    tracing::debug!(store_dir = %config.store_dir.display(), program = %config.program, "store resolved");

    let mut importer = Importer::new(PassStore::new(config), args.options());
    let report = importer.run(records, |outcome| {
        println!("{}", output::record_line(outcome));
    });

    for line in ImportSummary::format(&report).lines {
        println!("{line}");
    }

    if report.is_success() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
