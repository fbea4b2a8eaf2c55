use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// A primitive style attribute value.
///
/// The store defines no attributes of its own; the style bag is a
/// pass-through surface for the UI layer. Untagged so that style maps
/// serialize as plain JSON objects (`{"bold": true, "color": "#fff"}`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleValue {
    Bool(bool),
    Number(f64),
    Text(String),
}

impl From<&str> for StyleValue {
    fn from(s: &str) -> Self {
        StyleValue::Text(s.to_string())
    }
}

impl From<f64> for StyleValue {
    fn from(n: f64) -> Self {
        StyleValue::Number(n)
    }
}

impl From<bool> for StyleValue {
    fn from(b: bool) -> Self {
        StyleValue::Bool(b)
    }
}

/// Cell content: display text plus an open style bag.
///
/// A cell has no identity of its own; it exists only at its
/// (sheet, row index, column id) coordinate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    pub value: String,
    #[serde(default, skip_serializing_if = "FxHashMap::is_empty")]
    pub style: FxHashMap<String, StyleValue>,
}

impl Cell {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            style: FxHashMap::default(),
        }
    }

    /// Set a style attribute, replacing any previous value for the key.
    pub fn set_style(&mut self, key: impl Into<String>, value: impl Into<StyleValue>) {
        self.style.insert(key.into(), value.into());
    }

    pub fn style_attr(&self, key: &str) -> Option<&StyleValue> {
        self.style.get(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_cell_has_empty_style() {
        let cell = Cell::new("Cell A1");
        assert_eq!(cell.value, "Cell A1");
        assert!(cell.style.is_empty());
    }

    #[test]
    fn test_style_attr_last_write_wins() {
        let mut cell = Cell::new("x");
        cell.set_style("align", "left");
        cell.set_style("align", "right");

        assert_eq!(cell.style.len(), 1);
        assert_eq!(cell.style_attr("align"), Some(&StyleValue::Text("right".into())));
    }

    #[test]
    fn test_style_serializes_as_plain_object() {
        let mut cell = Cell::new("x");
        cell.set_style("bold", true);
        cell.set_style("fontSize", 13.0);

        let json: serde_json::Value = serde_json::from_str(
            &serde_json::to_string(&cell).unwrap(),
        )
        .unwrap();
        assert_eq!(json["style"]["bold"], serde_json::Value::Bool(true));
        assert_eq!(json["style"]["fontSize"], serde_json::json!(13.0));
    }

    #[test]
    fn test_empty_style_omitted_from_serialization() {
        let json = serde_json::to_string(&Cell::new("x")).unwrap();
        assert!(!json.contains("style"));
    }
}
