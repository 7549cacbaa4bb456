use crate::error::{Result, ServiceListError};
use serde::{Deserialize, Serialize};
use std::path::Path;

// ---------------------------------------------------------------------------
// MaintenanceRule
// ---------------------------------------------------------------------------

/// A periodic maintenance action, due every `interval` distance units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MaintenanceRule {
    pub interval: u64,
    pub description: String,
}

impl MaintenanceRule {
    /// Build a rule, rejecting a zero interval or an empty description.
    pub fn new(interval: u64, description: impl Into<String>) -> Result<Self> {
        let description = description.into();
        if interval == 0 {
            return Err(ServiceListError::Parse {
                origin: "rule".to_string(),
                reason: format!("interval must be positive for '{description}'"),
            });
        }
        if description.is_empty() {
            return Err(ServiceListError::Parse {
                origin: "rule".to_string(),
                reason: format!("description is empty for interval {interval}"),
            });
        }
        Ok(Self {
            interval,
            description,
        })
    }

    pub fn is_due_at(&self, distance: u64) -> bool {
        distance % self.interval == 0
    }
}

// Wire shape of a record. The interval stays a raw number so negative and
// fractional values get a specific message and the full u64 range is kept.
#[derive(Deserialize)]
struct RuleRecord {
    #[serde(alias = "interval_km")]
    interval: serde_json::Number,
    description: String,
}

fn positive_interval(n: &serde_json::Number) -> std::result::Result<u64, String> {
    match n.as_u64() {
        Some(0) => Err("interval must be positive, got 0".to_string()),
        Some(v) => Ok(v),
        None if n.as_i64().is_some() => Err(format!("interval must be positive, got {n}")),
        None => Err(format!("interval must be a whole number, got {n}")),
    }
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

/// Read a JSON rule document from `path` and return its rules sorted by
/// ascending interval.
pub fn load_rules(path: &Path) -> Result<Vec<MaintenanceRule>> {
    let bytes = std::fs::read(path).map_err(|source| ServiceListError::NotFound {
        path: path.to_path_buf(),
        source,
    })?;
    let origin = path.display().to_string();
    let data = String::from_utf8(bytes).map_err(|e| ServiceListError::Parse {
        origin: origin.clone(),
        reason: format!("not valid UTF-8: {e}"),
    })?;
    let rules = parse_rules(&data, &origin)?;
    tracing::debug!(path = %path.display(), count = rules.len(), "loaded maintenance rules");
    Ok(rules)
}

/// Parse a JSON array of rule records. `origin` names the source in errors.
pub fn parse_rules(text: &str, origin: &str) -> Result<Vec<MaintenanceRule>> {
    let parse_err = |reason: String| ServiceListError::Parse {
        origin: origin.to_string(),
        reason,
    };

    let doc: serde_json::Value =
        serde_json::from_str(text).map_err(|e| parse_err(e.to_string()))?;
    let serde_json::Value::Array(records) = doc else {
        return Err(parse_err("expected a JSON array of rules".to_string()));
    };

    let mut rules = Vec::with_capacity(records.len());
    for (idx, value) in records.into_iter().enumerate() {
        let record: RuleRecord =
            serde_json::from_value(value).map_err(|e| parse_err(format!("record {idx}: {e}")))?;
        let interval = positive_interval(&record.interval)
            .map_err(|reason| parse_err(format!("record {idx}: {reason}")))?;
        if record.description.is_empty() {
            return Err(parse_err(format!("record {idx}: description is empty")));
        }
        rules.push(MaintenanceRule {
            interval,
            description: record.description,
        });
    }

    sort_rules(&mut rules);
    Ok(rules)
}

/// Stable sort by ascending interval; ties keep their source order.
pub fn sort_rules(rules: &mut [MaintenanceRule]) {
    rules.sort_by_key(|r| r.interval);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn parses_and_sorts_by_interval() {
        let json = r#"[
            {"interval": 30000, "description": "Air filter"},
            {"interval": 10000, "description": "Engine oil"},
            {"interval": 20000, "description": "Brake fluid"}
        ]"#;
        let rules = parse_rules(json, "test").unwrap();
        let intervals: Vec<u64> = rules.iter().map(|r| r.interval).collect();
        assert_eq!(intervals, vec![10000, 20000, 30000]);
        assert_eq!(rules[0].description, "Engine oil");
    }

    #[test]
    fn sort_is_stable_for_equal_intervals() {
        let json = r#"[
            {"interval": 5000, "description": "B"},
            {"interval": 1000, "description": "X"},
            {"interval": 5000, "description": "A"},
            {"interval": 5000, "description": "C"}
        ]"#;
        let rules = parse_rules(json, "test").unwrap();
        let names: Vec<&str> = rules.iter().map(|r| r.description.as_str()).collect();
        assert_eq!(names, vec!["X", "B", "A", "C"]);
    }

    #[test]
    fn accepts_interval_km_field_name() {
        let json = r#"[{"interval_km": 15000, "description": "Cabin filter"}]"#;
        let rules = parse_rules(json, "test").unwrap();
        assert_eq!(rules[0].interval, 15000);
    }

    #[test]
    fn ignores_extra_fields() {
        let json = r#"[{"interval": 1000, "description": "Oil", "notes": "5W-30"}]"#;
        assert_eq!(parse_rules(json, "test").unwrap().len(), 1);
    }

    #[test]
    fn empty_array_is_valid() {
        assert!(parse_rules("[]", "test").unwrap().is_empty());
    }

    #[test]
    fn missing_interval_is_parse_error() {
        let json = r#"[{"description": "Oil"}]"#;
        let err = parse_rules(json, "rules.json").unwrap_err();
        match err {
            ServiceListError::Parse { origin, reason } => {
                assert_eq!(origin, "rules.json");
                assert!(reason.contains("record 0"), "reason: {reason}");
                assert!(reason.contains("interval"), "reason: {reason}");
            }
            other => panic!("expected Parse, got {other:?}"),
        }
    }

    #[test]
    fn missing_description_is_parse_error() {
        let json = r#"[{"interval": 1000}]"#;
        assert!(matches!(
            parse_rules(json, "test"),
            Err(ServiceListError::Parse { .. })
        ));
    }

    #[test]
    fn zero_interval_is_parse_error() {
        let json = r#"[{"interval": 1000, "description": "Oil"}, {"interval": 0, "description": "Bad"}]"#;
        let err = parse_rules(json, "test").unwrap_err();
        assert!(err.to_string().contains("record 1"));
        assert!(err.to_string().contains("positive"));
    }

    #[test]
    fn negative_interval_is_parse_error() {
        let json = r#"[{"interval": -500, "description": "Bad"}]"#;
        let err = parse_rules(json, "test").unwrap_err();
        assert!(err.to_string().contains("-500"));
    }

    #[test]
    fn fractional_interval_is_parse_error() {
        let json = r#"[{"interval": 1000.5, "description": "Oil"}]"#;
        let err = parse_rules(json, "test").unwrap_err();
        assert!(matches!(err, ServiceListError::Parse { .. }));
        assert!(err.to_string().contains("whole number"));
    }

    #[test]
    fn interval_above_i64_range_is_accepted() {
        let json = r#"[{"interval": 18446744073709551615, "description": "Never"}]"#;
        let rules = parse_rules(json, "test").unwrap();
        assert_eq!(rules[0].interval, u64::MAX);
    }

    #[test]
    fn empty_description_is_parse_error() {
        let json = r#"[{"interval": 1000, "description": ""}]"#;
        assert!(matches!(
            parse_rules(json, "test"),
            Err(ServiceListError::Parse { .. })
        ));
    }

    #[test]
    fn malformed_json_is_parse_error() {
        assert!(matches!(
            parse_rules("[{\"interval\": 1000,", "test"),
            Err(ServiceListError::Parse { .. })
        ));
    }

    #[test]
    fn non_array_document_is_parse_error() {
        let err = parse_rules(r#"{"interval": 1000, "description": "Oil"}"#, "test").unwrap_err();
        assert!(err.to_string().contains("array"));
    }

    #[test]
    fn load_missing_file_is_not_found() {
        let dir = TempDir::new().unwrap();
        let err = load_rules(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, ServiceListError::NotFound { .. }));
    }

    #[test]
    fn load_invalid_utf8_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("rules.json");
        let mut bytes = br#"[{"interval": 1000, "description": ""#.to_vec();
        bytes.extend_from_slice(b"\xff\xfe");
        bytes.extend_from_slice(br#""}]"#);
        std::fs::write(&path, bytes).unwrap();
        match load_rules(&path).unwrap_err() {
            ServiceListError::Parse { origin, reason } => {
                assert_eq!(origin, path.display().to_string());
                assert!(reason.contains("UTF-8"), "reason: {reason}");
            }
            other => panic!("expected Parse, got {other:?}"),
        }
    }

    #[test]
    fn load_reads_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("rules.json");
        std::fs::write(
            &path,
            r#"[{"interval": 3000, "description": "Wipers"}, {"interval": 1000, "description": "Engine oil"}]"#,
        )
        .unwrap();
        let rules = load_rules(&path).unwrap();
        assert_eq!(rules[0].description, "Engine oil");
        assert_eq!(rules[1].description, "Wipers");
    }

    #[test]
    fn new_rejects_zero_interval() {
        assert!(MaintenanceRule::new(0, "Oil").is_err());
        assert!(MaintenanceRule::new(1000, "").is_err());
        assert_eq!(MaintenanceRule::new(1000, "Oil").unwrap().interval, 1000);
    }

    #[test]
    fn is_due_at_multiples_only() {
        let rule = MaintenanceRule::new(1500, "Coolant").unwrap();
        assert!(rule.is_due_at(3000));
        assert!(!rule.is_due_at(1000));
    }
}
