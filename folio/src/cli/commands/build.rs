//! `folio build`

use folio_core::ConfigLoader;

use crate::cli::args::BuildArgs;
use crate::error::FolioError;
use crate::export::build_site;

/// Writes the static site and prints a one-line summary.
///
/// # Errors
///
/// Returns a config error if `projects.json` cannot be loaded, or an I/O
/// error if the output cannot be written.
pub fn run(args: &BuildArgs) -> Result<(), FolioError> {
    let sources = args.source.sources();
    let summary = build_site(&sources, &ConfigLoader::with_defaults(), &args.out)?;
    println!(
        "Built {} pages ({} projects, {} assets copied, {} missing) into {}",
        summary.pages.len(),
        summary.projects,
        summary.assets.len(),
        summary.missing_assets,
        args.out.display()
    );
    Ok(())
}
