//! Structural validation of site configuration documents
//!
//! Checks run in document order and stop at the first failure.

use crate::error::SchemaError;
use serde_json::{Map, Value};

/// Keys every site entry must carry
pub const REQUIRED_SITE_KEYS: &[&str] = &["url", "max_pages", "max_depth", "crawl_delay", "data_elements"];

/// Keys every data element must carry
pub const REQUIRED_ELEMENT_KEYS: &[&str] = &["name", "selector", "type"];

/// Validate the shape of a parsed document.
///
/// Only key presence and container types are checked; values such as
/// `max_pages` may hold anything.
pub fn validate_document(document: &Value) -> Result<(), SchemaError> {
    let sites = document
        .get("sites")
        .and_then(Value::as_object)
        .ok_or(SchemaError::MissingSites)?;

    for (site, entry) in sites {
        validate_site(site, entry)?;
    }

    Ok(())
}

fn validate_site(site: &str, entry: &Value) -> Result<(), SchemaError> {
    let missing = missing_keys(entry.as_object(), REQUIRED_SITE_KEYS);
    if !missing.is_empty() {
        return Err(SchemaError::MissingSiteKeys {
            site: site.to_string(),
            missing,
        });
    }

    let elements = entry
        .get("data_elements")
        .and_then(Value::as_array)
        .ok_or_else(|| SchemaError::DataElementsNotSequence {
            site: site.to_string(),
        })?;

    for (index, element) in elements.iter().enumerate() {
        if !missing_keys(element.as_object(), REQUIRED_ELEMENT_KEYS).is_empty() {
            return Err(SchemaError::InvalidDataElement {
                site: site.to_string(),
                index,
                element: element.clone(),
            });
        }
    }

    Ok(())
}

/// Required keys absent from `object`, in declaration order.
/// A non-object is missing all of them.
fn missing_keys(object: Option<&Map<String, Value>>, required: &[&'static str]) -> Vec<&'static str> {
    required
        .iter()
        .copied()
        .filter(|key| object.is_none_or(|o| !o.contains_key(*key)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn site() -> Value {
        json!({
            "url": "https://example.com",
            "max_pages": 10,
            "max_depth": 2,
            "crawl_delay": 1.5,
            "data_elements": [{"name": "title", "selector": "h1", "type": "text"}]
        })
    }

    #[test]
    fn test_valid_document() {
        let doc = json!({"sites": {"example": site()}});
        assert!(validate_document(&doc).is_ok());
    }

    #[test]
    fn test_empty_sites_is_valid() {
        assert!(validate_document(&json!({"sites": {}})).is_ok());
    }

    #[test]
    fn test_sites_not_a_mapping() {
        assert_eq!(
            validate_document(&json!({"sites": []})),
            Err(SchemaError::MissingSites)
        );
        assert_eq!(validate_document(&json!([1, 2])), Err(SchemaError::MissingSites));
        assert_eq!(validate_document(&json!({})), Err(SchemaError::MissingSites));
    }

    #[test]
    fn test_reports_all_missing_keys_for_first_bad_site() {
        let mut bad = site();
        let obj = bad.as_object_mut().unwrap();
        obj.remove("max_depth");
        obj.remove("crawl_delay");

        let doc = json!({"sites": {"good": site(), "bad": bad, "also_bad": {}}});
        assert_eq!(
            validate_document(&doc),
            Err(SchemaError::MissingSiteKeys {
                site: "bad".into(),
                missing: vec!["max_depth", "crawl_delay"],
            })
        );
    }

    #[test]
    fn test_non_object_site_misses_everything() {
        let doc = json!({"sites": {"scalar": 42}});
        match validate_document(&doc) {
            Err(SchemaError::MissingSiteKeys { site, missing }) => {
                assert_eq!(site, "scalar");
                assert_eq!(missing, REQUIRED_SITE_KEYS);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_element_not_an_object() {
        let mut s = site();
        s["data_elements"] = json!([{"name": "a", "selector": "b", "type": "c"}, "h1"]);
        let doc = json!({"sites": {"example": s}});
        assert_eq!(
            validate_document(&doc),
            Err(SchemaError::InvalidDataElement {
                site: "example".into(),
                index: 1,
                element: json!("h1"),
            })
        );
    }
}
