//! Helpers shared between use cases.

use prospie_domain::{ClassificationDiagnostic, DiagnosticKind};
use tracing::{debug, warn};

/// Log classification diagnostics at a level that matches their impact.
///
/// A skipped rule or an unverified area changes the output, so those are
/// warnings; an ignored exclude pattern only widens a match.
pub(crate) fn log_diagnostics(diagnostics: &[ClassificationDiagnostic]) {
    for diagnostic in diagnostics {
        match diagnostic.kind {
            DiagnosticKind::InvalidInclude | DiagnosticKind::AreaFallback => {
                warn!("{}", diagnostic)
            }
            DiagnosticKind::InvalidExclude => debug!("{}", diagnostic),
        }
    }
}
