//! Ephemeral problem reports.
//!
//! Reports are never persisted; submission only raises a transient
//! notification. They are not part of a point's durable state.

use serde::{Deserialize, Serialize};

/// Preset topics offered in the report dialog.
pub const REPORT_TOPICS: [&str; 5] = [
    "Container is full",
    "Container is damaged",
    "Trash left around the container",
    "Point is not at the marked location",
    "Other",
];

/// A free-form problem report about a recycling point.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProblemReport {
    pub topic: String,
    pub description: String,
    /// Optional photo, inlined as a base64 data URI.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_data_uri: Option<String>,
}

impl ProblemReport {
    /// A report needs at least a topic to be worth submitting.
    pub fn is_submittable(&self) -> bool {
        !self.topic.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn topic_is_required() {
        let mut report = ProblemReport::default();
        assert!(!report.is_submittable());

        report.topic = REPORT_TOPICS[0].to_owned();
        assert!(report.is_submittable());
    }

    #[test]
    fn missing_photo_is_omitted_from_the_document() {
        let report = ProblemReport {
            topic: "Other".to_owned(),
            description: "overflowing".to_owned(),
            photo_data_uri: None,
        };
        let value = serde_json::to_value(&report).unwrap();
        assert!(value.get("photo_data_uri").is_none());
    }
}
