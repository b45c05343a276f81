//! Label metadata for presentation.
//!
//! Ranking never looks at this table; it only decorates a finished result.

use std::collections::HashMap;

/// Shown in place of an expansion when a label is not in the table.
pub const MISSING_LABEL_PLACEHOLDER: &str = "Type not found in dictionary";

/// Human-readable description of a label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelInfo {
    pub expansion: String,
    pub description: String,
}

impl LabelInfo {
    pub fn new(expansion: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            expansion: expansion.into(),
            description: description.into(),
        }
    }

    /// Entry used for labels without metadata
    pub fn placeholder() -> Self {
        Self::new(MISSING_LABEL_PLACEHOLDER, "")
    }
}

/// Label -> metadata lookup
pub trait LabelMetadata {
    fn lookup(&self, label: &str) -> Option<LabelInfo>;

    /// Like `lookup`, falling back to [`LabelInfo::placeholder`].
    fn describe(&self, label: &str) -> LabelInfo {
        self.lookup(label).unwrap_or_else(LabelInfo::placeholder)
    }
}

impl LabelMetadata for HashMap<String, LabelInfo> {
    fn lookup(&self, label: &str) -> Option<LabelInfo> {
        self.get(label).cloned()
    }
}

/// (type, expansion, description)
const MBTI_TYPES: &[(&str, &str, &str)] = &[
    ("INFJ", "Introversion, Intuition, Feeling, Judging", "Advocate"),
    ("INFP", "Introversion, Intuition, Feeling, Perceiving", "Mediator"),
    ("INTJ", "Introversion, Intuition, Thinking, Judging", "Architect"),
    ("INTP", "Introversion, Intuition, Thinking, Perceiving", "Logician"),
    ("ISFJ", "Introversion, Sensing, Feeling, Judging", "Defender"),
    ("ISFP", "Introversion, Sensing, Feeling, Perceiving", "Adventurer"),
    ("ISTJ", "Introversion, Sensing, Thinking, Judging", "Logistician"),
    ("ISTP", "Introversion, Sensing, Thinking, Perceiving", "Virtuoso"),
    ("ENFJ", "Extraversion, Intuition, Feeling, Judging", "Protagonist"),
    ("ENFP", "Extraversion, Intuition, Feeling, Perceiving", "Campaigner"),
    ("ENTJ", "Extraversion, Intuition, Thinking, Judging", "Commander"),
    ("ENTP", "Extraversion, Intuition, Thinking, Perceiving", "Debater"),
    ("ESFJ", "Extraversion, Sensing, Feeling, Judging", "Consul"),
    ("ESFP", "Extraversion, Sensing, Feeling, Perceiving", "Entertainer"),
    ("ESTJ", "Extraversion, Sensing, Thinking, Judging", "Executive"),
    ("ESTP", "Extraversion, Sensing, Thinking, Perceiving", "Entrepreneur"),
];

/// Built-in table of the 16 MBTI personality types.
/// Lookup is exact (labels are upper case in the MBTI corpus).
#[derive(Debug, Clone, Copy, Default)]
pub struct MbtiMetadata;

impl LabelMetadata for MbtiMetadata {
    fn lookup(&self, label: &str) -> Option<LabelInfo> {
        MBTI_TYPES
            .iter()
            .find(|(name, _, _)| *name == label)
            .map(|(_, expansion, description)| LabelInfo::new(*expansion, *description))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mbti_table_is_complete() {
        assert_eq!(MBTI_TYPES.len(), 16);
        let info = MbtiMetadata.lookup("INTP").unwrap();
        assert_eq!(info.expansion, "Introversion, Intuition, Thinking, Perceiving");
        assert_eq!(info.description, "Logician");
    }

    #[test]
    fn missing_label_uses_placeholder() {
        assert!(MbtiMetadata.lookup("XXXX").is_none());
        assert_eq!(MbtiMetadata.describe("XXXX").expansion, MISSING_LABEL_PLACEHOLDER);
        assert_eq!(MbtiMetadata.describe("intp").expansion, MISSING_LABEL_PLACEHOLDER);
    }

    #[test]
    fn hashmap_lookup() {
        let mut table = HashMap::new();
        table.insert("A".to_string(), LabelInfo::new("Alpha", "first"));
        assert_eq!(table.describe("A"), LabelInfo::new("Alpha", "first"));
        assert_eq!(table.describe("B"), LabelInfo::placeholder());
    }
}
