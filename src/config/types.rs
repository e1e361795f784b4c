//! Site configuration types
//!
//! A [`Configuration`] owns the validated JSON document exactly as it was
//! read. Sites and data elements are exposed as borrowed views over that
//! document; their accessors return `Option` because only key presence is
//! validated, never value types.

use serde::Serialize;
use serde_json::{Map, Value};

/// A validated site configuration document
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Configuration {
    document: Value,
}

impl Configuration {
    /// Wrap a document that has already passed validation.
    pub(crate) fn new_unchecked(document: Value) -> Self {
        Self { document }
    }

    /// The parsed document, unchanged
    pub fn as_value(&self) -> &Value {
        &self.document
    }

    pub fn into_value(self) -> Value {
        self.document
    }

    fn sites_map(&self) -> Option<&Map<String, Value>> {
        self.document.get("sites").and_then(Value::as_object)
    }

    /// Iterate over all sites in file order
    pub fn sites(&self) -> impl Iterator<Item = SiteConfig<'_>> {
        self.sites_map()
            .into_iter()
            .flat_map(|sites| sites.iter())
            .filter_map(|(name, raw)| SiteConfig::new(name, raw))
    }

    /// Site names in file order
    pub fn site_names(&self) -> impl Iterator<Item = &str> {
        self.sites_map()
            .into_iter()
            .flat_map(|sites| sites.keys())
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.sites_map().map_or(0, Map::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Look up a single site by name.
    ///
    /// Returns `None` when no site with that name exists.
    pub fn get_site_config(&self, name: &str) -> Option<SiteConfig<'_>> {
        self.sites_map()
            .and_then(|sites| sites.get_key_value(name))
            .and_then(|(name, raw)| SiteConfig::new(name, raw))
    }
}

/// Borrowed view of one entry under `sites`
#[derive(Debug, Clone, Copy)]
pub struct SiteConfig<'a> {
    name: &'a str,
    raw: &'a Map<String, Value>,
}

impl<'a> SiteConfig<'a> {
    fn new(name: &'a str, raw: &'a Value) -> Option<Self> {
        raw.as_object().map(|raw| Self { name, raw })
    }

    pub fn name(&self) -> &'a str {
        self.name
    }

    /// The site's JSON object, including any keys beyond the required ones
    pub fn raw(&self) -> &'a Map<String, Value> {
        self.raw
    }

    pub fn url(&self) -> Option<&'a str> {
        self.raw.get("url").and_then(Value::as_str)
    }

    pub fn max_pages(&self) -> Option<u64> {
        self.raw.get("max_pages").and_then(Value::as_u64)
    }

    pub fn max_depth(&self) -> Option<u64> {
        self.raw.get("max_depth").and_then(Value::as_u64)
    }

    /// Delay between requests in seconds; integers are accepted
    pub fn crawl_delay(&self) -> Option<f64> {
        self.raw.get("crawl_delay").and_then(Value::as_f64)
    }

    /// Extraction rules in declaration order
    pub fn data_elements(&self) -> impl Iterator<Item = DataElement<'a>> + use<'a> {
        self.raw
            .get("data_elements")
            .and_then(Value::as_array)
            .into_iter()
            .flatten()
            .filter_map(Value::as_object)
            .map(|raw| DataElement { raw })
    }
}

/// Borrowed view of one `data_elements` entry
#[derive(Debug, Clone, Copy)]
pub struct DataElement<'a> {
    raw: &'a Map<String, Value>,
}

impl<'a> DataElement<'a> {
    pub fn name(&self) -> Option<&'a str> {
        self.raw.get("name").and_then(Value::as_str)
    }

    pub fn selector(&self) -> Option<&'a str> {
        self.raw.get("selector").and_then(Value::as_str)
    }

    /// Expected data type of the extracted value (the `type` key)
    pub fn element_type(&self) -> Option<&'a str> {
        self.raw.get("type").and_then(Value::as_str)
    }

    pub fn raw(&self) -> &'a Map<String, Value> {
        self.raw
    }
}
