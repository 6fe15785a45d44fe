use serde::{Deserialize, Serialize};

/// A contact record. Two records are the same record when both fields match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Record {
    pub name: String,
    pub contact: String,
}

impl Record {
    pub fn new(name: impl Into<String>, contact: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            contact: contact.into(),
        }
    }

    /// The fixed record the sample provider hands out.
    pub fn sample() -> Self {
        Self::new("Navaneeth Vinod", "navaneethvinod27@gmail.com")
    }
}

impl Default for Record {
    fn default() -> Self {
        Self::sample()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structural_equality() {
        assert_eq!(Record::new("Ann", "ann@x.io"), Record::new("Ann", "ann@x.io"));
        assert_ne!(Record::new("Ann", "ann@x.io"), Record::new("Ann", "ann@y.io"));
    }

    #[test]
    fn test_serializes_both_fields() {
        let json = serde_json::to_value(Record::new("Ann", "ann@x.io")).unwrap();
        assert_eq!(json, serde_json::json!({"name": "Ann", "contact": "ann@x.io"}));
    }
}
