use clap::Parser;

/// Export Nucleus vulnerability data for one asset group
#[derive(Parser, Debug)]
#[command(name = "nucleus-export")]
#[command(version = "1.1.0")]
#[command(
    about = "Export asset and finding data from the Nucleus API to CSV/JSON reports",
    long_about = None
)]
pub struct Args {
    /// Keep files from previous runs in the data folder instead of wiping it
    #[arg(long)]
    pub keep_data: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
