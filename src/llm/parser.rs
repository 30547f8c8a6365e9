//! Locating the JSON payload in a free-text model response
//!
//! Models are asked for a bare JSON object but routinely wrap it in a markdown
//! fence or surround it with prose, so the object is sliced out between the
//! first `{` and the last `}` before parsing.

use crate::error::{CvExtractorError, Result};
use serde_json::{Map, Value};

const FENCE: &str = "```";

/// Parse the JSON object embedded in `response`.
pub fn extract_json_object(response: &str) -> Result<Map<String, Value>> {
    let body = strip_fence(response.trim());

    if body.is_empty() {
        return Err(CvExtractorError::EmptyResponse);
    }

    let start = body.find('{').ok_or(CvExtractorError::NoJsonFound)?;
    let end = body.rfind('}').ok_or(CvExtractorError::NoJsonFound)?;
    if end < start {
        return Err(CvExtractorError::NoJsonFound);
    }

    Ok(serde_json::from_str(&body[start..=end])?)
}

/// Keep the segment after the opening fence, minus an optional `json` tag.
fn strip_fence(text: &str) -> &str {
    if !text.starts_with(FENCE) {
        return text;
    }

    let segment = text.split(FENCE).nth(1).unwrap_or("");
    segment.strip_prefix("json").unwrap_or(segment).trim()
}
