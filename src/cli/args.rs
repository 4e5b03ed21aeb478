use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;
use fattura24::SAVE_DOCUMENT_URL;

/// Long flags that also accept the single-dash spelling (`-apiKey=...`).
const LONG_FLAGS: &[&str] = &[
    "apiKey", "endpoint", "timeout", "no-rows", "verbose", "help", "version",
];

#[derive(Parser, Debug)]
#[command(
    name = "fattura24",
    version,
    about = "Import CSV invoice tables into Fattura24",
    after_help = "Example: fattura24 -apiKey=whatever table.csv"
)]
pub struct CliArgs {
    /// Fattura24 API key
    #[arg(long = "apiKey", env = "FATTURA24_API_KEY", hide_env_values = true)]
    pub api_key: String,

    /// SaveDocument endpoint URL
    #[arg(long, default_value = SAVE_DOCUMENT_URL)]
    pub endpoint: String,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 30)]
    pub timeout: u64,

    /// Omit the <Rows> block from every document
    #[arg(long, default_value_t = false)]
    pub no_rows: bool,

    /// Enable debug logging (rendered documents are logged)
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,

    /// CSV files to import, processed in order
    #[arg(required = true, value_name = "CSV")]
    pub files: Vec<PathBuf>,
}

/// Rewrite Go-style single-dash long flags (`-apiKey=x`, `-timeout 5`) to
/// their double-dash form. Arguments after `--` are left untouched.
pub fn normalize_flags<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut out = Vec::new();
    let mut passthrough = false;
    for arg in args {
        let arg: OsString = arg.into();
        if passthrough {
            out.push(arg);
            continue;
        }
        let rewritten = arg.to_str().and_then(|s| {
            let flag = s.strip_prefix('-').filter(|rest| !rest.starts_with('-'))?;
            let name = flag.split_once('=').map_or(flag, |(name, _)| name);
            LONG_FLAGS.contains(&name).then(|| OsString::from(format!("-{s}")))
        });
        if arg.to_str() == Some("--") {
            passthrough = true;
        }
        out.push(rewritten.unwrap_or(arg));
    }
    out
}
