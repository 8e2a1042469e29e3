//! Feed identity, snapshot classification, and generic rendering.

use serde_json::Value;

use crate::api::types::ErrorEnvelope;

/// One backend telemetry category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feed {
    Cpu,
    Gpu,
    RamDisk,
    Containers,
    LiveStats,
}

impl Feed {
    /// Load order for a full refresh. GPU must run after CPU so its summary
    /// can take the compute overview slot whenever GPU data exists; the
    /// rule lives here as configuration rather than incidental code order.
    pub const ORDER: [Feed; 5] = [
        Feed::Cpu,
        Feed::Gpu,
        Feed::RamDisk,
        Feed::Containers,
        Feed::LiveStats,
    ];

    /// API endpoint name under the fixed `/api/` prefix.
    pub fn endpoint(&self) -> &'static str {
        match self {
            Feed::Cpu => "cpu-info",
            Feed::Gpu => "gpu-info",
            Feed::RamDisk => "ram-disk",
            Feed::Containers => "lxc",
            Feed::LiveStats => "live-stats",
        }
    }
}

/// Fixed message for an empty sequence.
pub const NO_DATA: &str = "No data available or applicable for this system.";
/// Fixed message for a null, empty, or otherwise unusable value.
pub const NO_RESPONSE: &str = "No data returned or an unknown error occurred.";

/// Classification of one fetched snapshot, decided exactly once per feed
/// immediately after fetch. Renderers branch on the variant, never on the
/// raw value shape.
#[derive(Debug, Clone, PartialEq)]
pub enum FeedValue {
    /// Transport- or agent-reported failure.
    Error(ErrorEnvelope),
    /// The agent declared the feed inapplicable to this platform.
    NotApplicable { message: String },
    /// Non-empty object or array, displayed as a full pretty dump.
    Structured(Value),
    /// Empty sequence.
    Empty,
    /// Null, empty object, or any other unusable value.
    Missing,
}

impl FeedValue {
    /// Classify a raw snapshot. Precedence, first match wins: error,
    /// not-applicable, non-empty structured, empty sequence, everything
    /// else.
    pub fn classify(value: Value) -> FeedValue {
        if let Some(envelope) = ErrorEnvelope::from_value(&value) {
            return FeedValue::Error(envelope);
        }
        if value.get("status").and_then(Value::as_str) == Some("not_applicable") {
            let message = value
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or(NO_DATA)
                .to_string();
            return FeedValue::NotApplicable { message };
        }
        match value {
            Value::Array(items) if items.is_empty() => FeedValue::Empty,
            Value::Array(items) => FeedValue::Structured(Value::Array(items)),
            Value::Object(map) if !map.is_empty() => FeedValue::Structured(Value::Object(map)),
            _ => FeedValue::Missing,
        }
    }

    /// Display text for a detail surface; a pure function of the variant.
    pub fn display_text(&self) -> String {
        match self {
            FeedValue::Error(envelope) => {
                let mut text = format!("Error: {}", envelope.error);
                if let Some(details) = &envelope.details {
                    text.push_str("\nDetails: ");
                    text.push_str(details);
                }
                text
            }
            FeedValue::NotApplicable { message } => message.clone(),
            FeedValue::Structured(value) => {
                serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
            }
            FeedValue::Empty => NO_DATA.to_string(),
            FeedValue::Missing => NO_RESPONSE.to_string(),
        }
    }
}
