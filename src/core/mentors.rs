use std::{
    fs,
    path::{
        Path,
        PathBuf,
    },
};

use serde_json::Value;

use super::{
    http,
    Mentor,
    PortalError,
};

const EMBEDDED_MENTORS: &str = include_str!("../../assets/mentors.json");

/// Where the mentor list comes from, in the order they are tried.
#[derive(Debug, Clone, Default)]
pub struct MentorSource {
    pub file: Option<PathBuf>,
    pub url: Option<String>,
}

/// Accepts a top-level array or an object carrying a `mentors` array.
pub fn parse_mentors(value: Value) -> Result<Vec<Mentor>, PortalError> {
    let list = match value {
        Value::Array(_) => value,
        Value::Object(mut map) => match map.remove("mentors") {
            Some(inner @ Value::Array(_)) => inner,
            _ => return Err(PortalError::InvalidMentorData),
        },
        _ => return Err(PortalError::InvalidMentorData),
    };
    Ok(serde_json::from_value(list)?)
}

pub fn embedded_mentors() -> Vec<Mentor> {
    serde_json::from_str::<Value>(EMBEDDED_MENTORS)
        .map_err(PortalError::from)
        .and_then(parse_mentors)
        .unwrap_or_else(|e| {
            tracing::error!("Embedded mentor list is invalid: {e}");
            Vec::new()
        })
}

pub fn read_mentors_file(path: &Path) -> Result<Vec<Mentor>, PortalError> {
    let raw = fs::read_to_string(path)?;
    parse_mentors(serde_json::from_str(&raw)?)
}

pub fn fetch_mentors(url: &str) -> Result<Vec<Mentor>, PortalError> {
    let client = http::http_client()?;
    parse_mentors(http::fetch_json(&client, url)?)
}

/// Never fails: any problem with the configured source falls back to the
/// embedded list.
pub fn load_mentors(source: &MentorSource) -> Vec<Mentor> {
    if let Some(path) = &source.file {
        match read_mentors_file(path) {
            Ok(mentors) => {
                tracing::info!("Loaded {} mentors from {}", mentors.len(), path.display());
                return mentors;
            }
            Err(e) => {
                tracing::warn!(
                    "Could not read mentors from {}, falling back to embedded mentors: {e}",
                    path.display()
                );
            }
        }
    } else if let Some(url) = &source.url {
        match fetch_mentors(url) {
            Ok(mentors) => {
                tracing::info!("Fetched {} mentors from {url}", mentors.len());
                return mentors;
            }
            Err(e) => {
                tracing::warn!("Could not load mentors JSON, using embedded mentors: {e}");
            }
        }
    }

    embedded_mentors()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::core::MentorId;

    #[test]
    fn test_parse_top_level_array() {
        let mentors = parse_mentors(json!([{"id": 1, "name": "Ann Lee"}])).unwrap();
        assert_eq!(mentors.len(), 1);
        assert_eq!(mentors[0].name, "Ann Lee");
    }

    #[test]
    fn test_parse_wrapped_array() {
        let mentors =
            parse_mentors(json!({"mentors": [{"id": 1}, {"id": "two"}], "version": 3})).unwrap();
        assert_eq!(
            mentors.iter().map(|m| m.id.clone()).collect::<Vec<_>>(),
            vec![MentorId::Number(1), MentorId::from("two")]
        );
    }

    #[test]
    fn test_parse_rejects_other_shapes() {
        for value in [json!({"people": []}), json!("mentors"), json!({"mentors": {}})] {
            assert!(matches!(parse_mentors(value), Err(PortalError::InvalidMentorData)));
        }
    }

    #[test]
    fn test_parse_tolerates_null_fields() {
        let mentors = parse_mentors(json!([
            {"id": 1, "name": "Ann Lee", "interests": ["AI"], "notes": null},
            {"id": 2, "name": "Bo Park", "interests": null}
        ]))
        .unwrap();
        assert_eq!(mentors.len(), 2);
        assert_eq!(mentors[0].interests, vec!["AI".to_string()]);
        assert_eq!(mentors[0].notes, "");
        assert_eq!(mentors[1].name, "Bo Park");
        assert!(mentors[1].interests.is_empty());
    }

    #[test]
    fn test_embedded_list_is_valid() {
        assert!(!embedded_mentors().is_empty());
    }

    #[test]
    fn test_unreadable_file_falls_back_to_embedded() {
        let dir = tempfile::tempdir().unwrap();
        let source =
            MentorSource { file: Some(dir.path().join("missing.json")), url: None };
        assert_eq!(load_mentors(&source), embedded_mentors());
    }

    #[test]
    fn test_unreachable_url_falls_back_to_embedded() {
        let source = MentorSource { file: None, url: Some("http://127.0.0.1:1/m.json".into()) };
        assert_eq!(load_mentors(&source), embedded_mentors());
    }

    #[test]
    fn test_mentors_file_is_preferred() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mentors.json");
        fs::write(&path, r#"{"mentors": [{"id": 9, "name": "Cy Dunn"}]}"#).unwrap();

        let source = MentorSource { file: Some(path), url: Some("http://127.0.0.1:1".into()) };
        let mentors = load_mentors(&source);
        assert_eq!(mentors.len(), 1);
        assert_eq!(mentors[0].name, "Cy Dunn");
    }
}
