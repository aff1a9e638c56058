use clap::Parser;

use crate::commands::import;

#[derive(Debug, Parser)]
#[command(name = "lastpass2pass", version)]
#[command(
    about = "Import a LastPass CSV export into pass",
    long_about = "Read a CSV file exported from LastPass and create one pass entry per record. \
                  Existing entries are kept; clashing names get a \" (2)\", \" (3)\", ... suffix \
                  unless --force is given."
)]
pub struct Cli {
    #[command(flatten)]
    pub args: import::Args,
}
