use std::time::Duration;

use tracing::info;
use tracing_subscriber::EnvFilter;

use fattura24::api::SaveDocumentClient;
use fattura24::import::Importer;
use fattura24::{ClientConfig, DocumentLayout, ImportConfig, ImportError};

use super::args::CliArgs;

/// Install the stderr subscriber. `RUST_LOG` takes precedence over `verbose`.
pub fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Render an error on one line; response bodies may span several.
pub fn one_line(error: &ImportError) -> String {
    error.to_string().split_whitespace().collect::<Vec<_>>().join(" ")
}

pub fn run(args: CliArgs) -> Result<(), ImportError> {
    let client_config = ClientConfig::new(args.api_key)
        .with_endpoint(args.endpoint)
        .with_timeout(Duration::from_secs(args.timeout));
    let layout = if args.no_rows {
        DocumentLayout::Summary
    } else {
        DocumentLayout::WithRow
    };

    let client = SaveDocumentClient::new(client_config)?;
    let mut importer = Importer::new(client, ImportConfig::new().with_layout(layout));

    let summary = importer.import_files(&args.files)?;
    info!(
        files = summary.files,
        documents = summary.documents,
        "import finished"
    );
    Ok(())
}
