use crate::error::CliError;
use std::{collections::HashMap, path::Path};
use tracing::debug;

/// Collects identifiers from `--id` flags followed by the lines of an
/// optional identifiers file.
pub async fn load_identifiers(
    ids: Vec<String>,
    ids_file: Option<&Path>,
) -> Result<Vec<String>, CliError> {
    let mut identifiers = ids;

    if let Some(path) = ids_file {
        let content = tokio::fs::read_to_string(path).await?;
        let from_file = parse_identifiers(&content);
        debug!(
            path = %path.display(),
            count = from_file.len(),
            "Loaded identifiers from file"
        );
        identifiers.extend(from_file);
    }

    Ok(identifiers)
}

/// One identifier per line; blank lines and `#` comments are skipped.
pub fn parse_identifiers(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// Builds a map from `KEY=VALUE` arguments. Later keys win.
pub fn parse_assignments(assignments: &[String]) -> Result<HashMap<String, String>, CliError> {
    let mut map = HashMap::new();

    for assignment in assignments {
        let Some((key, value)) = assignment.split_once('=') else {
            return Err(CliError::InvalidAssignment(assignment.clone()));
        };

        let key = key.trim();
        if key.is_empty() {
            return Err(CliError::InvalidAssignment(assignment.clone()));
        }

        map.insert(key.to_string(), value.trim().to_string());
    }

    Ok(map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_identifiers() {
        let content = r#"
# Formatters
org.example.LayoutEngine
  org.example.TextFilter  

com.other.Renderer
        "#;

        assert_eq!(
            parse_identifiers(content),
            vec![
                "org.example.LayoutEngine",
                "org.example.TextFilter",
                "com.other.Renderer"
            ]
        );
    }

    #[test]
    fn test_parse_assignments() {
        let args = vec![
            "format=pef".to_string(),
            "query = a=b".to_string(),
            "format=html".to_string(),
        ];

        let map = parse_assignments(&args).unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map["format"], "html");
        assert_eq!(map["query"], "a=b");
    }

    #[test]
    fn test_invalid_assignment() {
        assert!(matches!(
            parse_assignments(&["no_equals".to_string()]),
            Err(CliError::InvalidAssignment(_))
        ));
        assert!(matches!(
            parse_assignments(&["=value".to_string()]),
            Err(CliError::InvalidAssignment(_))
        ));
    }

    #[tokio::test]
    async fn test_load_identifiers_appends_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# comment\ncom.example.Widget\n\norg.other.Gadget").unwrap();

        let ids = load_identifiers(vec!["a.B".to_string()], Some(file.path()))
            .await
            .unwrap();
        assert_eq!(ids, vec!["a.B", "com.example.Widget", "org.other.Gadget"]);
    }

    #[tokio::test]
    async fn test_load_identifiers_missing_file() {
        let result = load_identifiers(vec![], Some(Path::new("/nonexistent/ids.txt"))).await;
        assert!(matches!(result, Err(CliError::IdsFileRead(_))));
    }
}
