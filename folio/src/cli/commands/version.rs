//! Version information display

use crate::cli::args::{OutputFormat, VersionArgs};
use crate::error::FolioError;

/// Prints name and version in human or JSON form.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn run(args: &VersionArgs) -> Result<(), FolioError> {
    let name = env!("CARGO_PKG_NAME");
    let version = env!("CARGO_PKG_VERSION");

    match args.format {
        OutputFormat::Human => println!("{name} {version}"),
        OutputFormat::Json => {
            let info = serde_json::json!({ "name": name, "version": version });
            println!("{}", serde_json::to_string(&info)?);
        }
    }
    Ok(())
}
