//! Scanning completions for layout arrays, and the heuristic substitute.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use super::{LayoutDescriptor, RemoteError};
use crate::catalog::{VariantKind, FONTS, THEMES};
use crate::compose::compose;

/// First `[` through last `]`, across newlines
static ARRAY_PATTERN: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(r"\[[\s\S]*\]"));

/// Parse the bracketed span of `completion` into layout descriptors.
///
/// The span runs from the first `[` to the last `]`. Non-object elements are
/// skipped; an array without any object is reported as a parse failure.
pub fn extract_descriptors(completion: &str) -> Result<Vec<LayoutDescriptor>, RemoteError> {
    let pattern = ARRAY_PATTERN
        .as_ref()
        .map_err(|e| RemoteError::UpstreamParse(e.to_string()))?;
    let span = pattern
        .find(completion)
        .ok_or_else(|| RemoteError::UpstreamParse("no array literal found".to_string()))?;

    let elements: Vec<Value> = serde_json::from_str(span.as_str())
        .map_err(|e| RemoteError::UpstreamParse(e.to_string()))?;

    let descriptors: Vec<LayoutDescriptor> = elements
        .into_iter()
        .filter(Value::is_object)
        .filter_map(|v| serde_json::from_value(lenient(v)).ok())
        .collect();

    if descriptors.is_empty() {
        return Err(RemoteError::UpstreamParse(
            "array contains no layout objects".to_string(),
        ));
    }
    Ok(descriptors)
}

/// Drop fields whose type would fail descriptor deserialization.
fn lenient(mut value: Value) -> Value {
    if let Value::Object(map) = &mut value {
        map.retain(|key, field| match key.as_str() {
            "title" | "description" | "html" | "color" => field.is_string(),
            _ => true,
        });
    }
    value
}

/// Deterministic stand-in used when a completion cannot be parsed.
pub fn heuristic_descriptors(prompt: &str) -> Vec<LayoutDescriptor> {
    [
        ("Modern", 0usize, 0usize, VariantKind::Hero),
        ("Bold", 4, 3, VariantKind::Cards),
        ("Minimal", 5, 7, VariantKind::Minimal),
    ]
    .into_iter()
    .map(|(style, theme, font, variant)| {
        let theme = &THEMES[theme];
        LayoutDescriptor {
            title: format!("{} {}", prompt, style),
            description: variant.description().to_string(),
            html: compose(prompt, theme, &FONTS[font], variant),
            color: Some(theme.background.to_string()),
        }
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_array_from_prose() {
        let completion = r#"Sure! Here you go:
[{"title":"A","description":"first","html":"<div>a</div>","color":"bg-blue-50"},
 {"title":"B","description":"second","html":"<div>b</div>"}]
Hope this helps."#;
        let descriptors = extract_descriptors(completion).unwrap();
        assert_eq!(descriptors.len(), 2);
        assert_eq!(descriptors[0].title, "A");
        assert_eq!(descriptors[0].color.as_deref(), Some("bg-blue-50"));
        assert_eq!(descriptors[1].color, None);
    }

    #[test]
    fn test_array_pattern_compiles() {
        assert!(ARRAY_PATTERN.is_ok());
    }

    #[test]
    fn test_no_array_is_parse_error() {
        let err = extract_descriptors("I cannot help with that.").unwrap_err();
        assert!(matches!(err, RemoteError::UpstreamParse(_)));
    }

    #[test]
    fn test_malformed_array_is_parse_error() {
        let err = extract_descriptors(r#"[{"title": "A",]"#).unwrap_err();
        assert!(matches!(err, RemoteError::UpstreamParse(_)));
    }

    #[test]
    fn test_empty_array_is_parse_error() {
        assert!(extract_descriptors("[]").is_err());
        assert!(extract_descriptors("[1, 2, \"x\"]").is_err());
    }

    #[test]
    fn test_missing_and_mistyped_fields_default() {
        let descriptors = extract_descriptors(r#"[{"title": 5, "html": "<p>x</p>"}]"#).unwrap();
        assert_eq!(descriptors[0].title, "");
        assert_eq!(descriptors[0].html, "<p>x</p>");
        assert_eq!(descriptors[0].description, "");
    }

    #[test]
    fn test_heuristic_set_is_deterministic() {
        let a = heuristic_descriptors("Bakery");
        let b = heuristic_descriptors("Bakery");
        assert_eq!(a, b);
        let titles: Vec<_> = a.iter().map(|d| d.title.as_str()).collect();
        assert_eq!(titles, vec!["Bakery Modern", "Bakery Bold", "Bakery Minimal"]);
        assert!(a.iter().all(|d| !d.html.is_empty()));
    }
}
