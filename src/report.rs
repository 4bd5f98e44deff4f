//! Per-file report of upgrade suggestions
//!
//! ```text
//! File: .github/workflows/ci.yml
//! - actions/checkout@v3 -> v4.2.2
//! ERROR: git ls-remote for nobody/missing exited with ...
//! ```

use std::io::Write;
use std::path::PathBuf;

use tracing::debug;

use crate::updater::ActionsUpdater;

/// Scan every file in turn and write its report to `out`.
///
/// A failing file gets an inline `ERROR:` line after any suggestions found
/// before the failure, and the next file is still scanned. Only a failed
/// write to `out` stops the run.
pub async fn report<W: Write>(
    updater: &mut ActionsUpdater,
    files: &[PathBuf],
    out: &mut W,
) -> std::io::Result<()> {
    for path in files {
        writeln!(out, "File: {}", path.display())?;

        match updater.scan_file(path).await {
            Ok(suggestions) => {
                for suggestion in suggestions {
                    writeln!(out, "- {suggestion}")?;
                }
            }
            Err(e) => {
                debug!("Scan of {} failed: {:?}", path.display(), e);
                for suggestion in e.found() {
                    writeln!(out, "- {suggestion}")?;
                }
                writeln!(out, "ERROR: {e}")?;
            }
        }
    }

    out.flush()
}
