//! Final answer composition.

use serde::Serialize;
use tracing::error;

use crate::types::MergedResult;
use crate::Result;

const DATA_SECTION_SEPARATOR: &str = "\n\nReal-time data:\n";
const FALLBACK_NOTICE: &str = "\n\nError processing real-time data.";

/// Append the merged lookup data to the model content.
///
/// A serialization failure is recovered here: the final text degrades to the
/// content plus a fixed notice and never propagates to the caller.
pub(crate) fn compose(content: &str, merged: &MergedResult) -> String {
    compose_with(content, merged)
}

fn compose_with<T: Serialize>(content: &str, data: &T) -> String {
    match render_data_section(data) {
        Ok(section) => format!("{content}{DATA_SECTION_SEPARATOR}{section}"),
        Err(err) => {
            error!(error = %err, "failed to serialize merged lookup data");
            format!("{content}{FALLBACK_NOTICE}")
        }
    }
}

fn render_data_section<T: Serialize>(data: &T) -> Result<String> {
    Ok(serde_json::to_string(data)?)
}
