//! Export of accumulated records

use tracing::{info, warn};

use super::controller::SessionHandle;
use crate::error::ScrapeResult;
use crate::post_extractor::PostRecord;

/// Serialize records to the pretty-printed JSON used for export.
pub fn records_to_json(records: &[PostRecord]) -> ScrapeResult<String> {
    Ok(serde_json::to_string_pretty(records)?)
}

impl SessionHandle {
    /// Return every accumulated record and copy its JSON form to the clipboard.
    ///
    /// The clipboard copy is best effort: serialization or clipboard failures
    /// are logged and the records are still returned.
    pub fn export(&self) -> Vec<PostRecord> {
        let records = self.records();

        match records_to_json(&records) {
            Ok(json) => match self.shared.clipboard.lock().write_text(&json) {
                Ok(()) => info!("Exported {} records to clipboard", records.len()),
                Err(e) => warn!("Exported {} records, clipboard copy failed: {e}", records.len()),
            },
            Err(e) => warn!("Could not serialize {} records for export: {e}", records.len()),
        }

        records
    }
}
