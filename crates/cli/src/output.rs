use crate::error::CliError;
use serde::Serialize;
use shortform::ShortFormResolver;
use std::collections::{BTreeMap, HashMap};

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ShortFormEntry<'a> {
    pub alias: &'a str,
    pub identifier: &'a str,
}

pub fn entries(resolver: &ShortFormResolver) -> Vec<ShortFormEntry<'_>> {
    resolver
        .iter()
        .map(|(alias, identifier)| ShortFormEntry { alias, identifier })
        .collect()
}

pub fn render_table(resolver: &ShortFormResolver, as_json: bool) -> Result<String, CliError> {
    let entries = entries(resolver);
    if as_json {
        return Ok(serde_json::to_string_pretty(&entries)?);
    }

    let width = entries.iter().map(|e| e.alias.chars().count()).max().unwrap_or(0);
    let lines: Vec<String> = entries
        .iter()
        .map(|e| format!("{:<width$} {}", e.alias, e.identifier))
        .collect();
    Ok(lines.join("\n"))
}

pub fn render_map(map: &HashMap<String, String>, as_json: bool) -> Result<String, CliError> {
    let sorted: BTreeMap<&String, &String> = map.iter().collect();
    if as_json {
        return Ok(serde_json::to_string_pretty(&sorted)?);
    }

    let lines: Vec<String> = sorted.iter().map(|(k, v)| format!("{k}={v}")).collect();
    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_table_text() {
        let resolver = ShortFormResolver::new(["com.example.Widget", "org.x.Y"]);
        let table = render_table(&resolver, false).unwrap();
        assert_eq!(table, "widget com.example.Widget\ny      org.x.Y");
    }

    #[test]
    fn test_render_table_json() {
        let resolver = ShortFormResolver::new(["com.example.Widget"]);
        let json = render_table(&resolver, true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(
            value,
            serde_json::json!([{ "alias": "widget", "identifier": "com.example.Widget" }])
        );
    }

    #[test]
    fn test_render_map_sorted() {
        let map = HashMap::from([
            ("b".to_string(), "2".to_string()),
            ("a".to_string(), "1".to_string()),
        ]);
        assert_eq!(render_map(&map, false).unwrap(), "a=1\nb=2");
    }
}
