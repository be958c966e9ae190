use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Number;

/// A verbose transcription response as returned by the provider.
///
/// The body is kept exactly as received so it can be persisted verbatim;
/// the parsed fields are the subset the normalizer needs. Times stay as JSON
/// numbers so `10` is written back as `10`, not `10.0`.
#[derive(Debug, Clone)]
pub struct RawTranscription {
    body: String,
    response: VerboseResponse,
}

#[derive(Debug, Clone, Deserialize)]
struct VerboseResponse {
    #[serde(deserialize_with = "seconds")]
    duration: Number,
    text: String,
    #[serde(default)]
    segments: Option<Vec<RawSegment>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawSegment {
    pub id: i64,
    pub start: Number,
    pub end: Number,
    pub text: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(Number),
    Text(String),
}

fn seconds<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Number, D::Error> {
    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(n) => Ok(n),
        NumberOrString::Text(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}

impl RawTranscription {
    pub fn from_json(body: impl Into<String>) -> Result<Self, serde_json::Error> {
        let body = body.into();
        let response = serde_json::from_str(&body)?;
        Ok(Self { body, response })
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn duration(&self) -> &Number {
        &self.response.duration
    }

    pub fn text(&self) -> &str {
        &self.response.text
    }

    /// `None` when the provider omitted segments or sent `null`.
    pub fn segments(&self) -> Option<&[RawSegment]> {
        self.response.segments.as_deref()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transcript {
    pub duration: Number,
    pub segment_count: usize,
    pub segments: Vec<TranscriptSegment>,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptSegment {
    pub id: i64,
    pub start: Number,
    pub end: Number,
    pub text: String,
}

/// Drops the first `"'` pair, then a single trailing apostrophe.
pub fn clean_segment_text(text: &str) -> String {
    let mut cleaned = text.replacen("\"'", "", 1);
    if cleaned.ends_with('\'') {
        cleaned.pop();
    }
    cleaned
}

pub fn clean(raw: &RawTranscription) -> Transcript {
    let segments: Vec<TranscriptSegment> = raw
        .segments()
        .unwrap_or_default()
        .iter()
        .map(|segment| TranscriptSegment {
            id: segment.id,
            start: segment.start.clone(),
            end: segment.end.clone(),
            text: clean_segment_text(&segment.text),
        })
        .collect();

    Transcript {
        duration: raw.duration().clone(),
        segment_count: segments.len(),
        segments,
        text: raw.text().to_string(),
    }
}
