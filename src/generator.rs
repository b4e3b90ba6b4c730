//! `.gitignore` document generation.
//!
//! Resolves requested template names against a freshly built
//! [`TemplateIndex`] and concatenates the matching files. Generation is
//! all-or-nothing: a single unresolved name voids the whole document.

use std::fs;

use crate::cache::CacheStore;
use crate::error::Result;
use crate::index::TemplateIndex;

/// First line of every generated document.
pub const ATTRIBUTION_HEADER: &str = "#### joe made this: http://goel.io/joe";

/// Outcome of a generation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationResult {
    /// Every name resolved. The document is empty only for an empty request.
    Document(String),
    /// At least one name did not resolve; no document is produced.
    Unresolved(Vec<String>),
}

impl GenerationResult {
    /// The generated document, empty when any name was unresolved.
    pub fn document(&self) -> &str {
        match self {
            Self::Document(document) => document,
            Self::Unresolved(_) => "",
        }
    }

    /// Names that could not be resolved, in request order.
    pub fn unresolved(&self) -> &[String] {
        match self {
            Self::Document(_) => &[],
            Self::Unresolved(names) => names,
        }
    }

    /// Whether every requested name resolved.
    pub fn is_complete(&self) -> bool {
        matches!(self, Self::Document(_))
    }
}

/// Split a comma-separated request into names.
///
/// Surrounding whitespace is trimmed and empty segments are dropped, so an
/// empty string is an empty request.
pub fn parse_request(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(String::from)
        .collect()
}

/// Section header line for a resolved template, using the name as requested.
pub fn section_header(name: &str) -> String {
    format!("#### {} ####", name)
}

/// Generate a document for `requested` from the templates in `store`.
///
/// Fails only if the index cannot be built (cache never populated). A name
/// whose file cannot be read is treated as unresolved.
pub fn generate<S: AsRef<str>>(requested: &[S], store: &CacheStore) -> Result<GenerationResult> {
    let index = TemplateIndex::build(store)?;
    Ok(generate_from_index(requested, &index))
}

/// Generate a document for `requested` against an already built index.
pub fn generate_from_index<S: AsRef<str>>(
    requested: &[S],
    index: &TemplateIndex,
) -> GenerationResult {
    let mut body = String::new();
    let mut unresolved = Vec::new();

    for name in requested.iter().map(AsRef::as_ref) {
        let content = index.get(name).and_then(|path| match fs::read(path) {
            Ok(content) => Some(content),
            Err(e) => {
                tracing::warn!("Cannot read template {}: {}", path.display(), e);
                None
            }
        });

        match content {
            Some(content) => {
                body.push_str(&section_header(name));
                body.push('\n');
                body.push_str(&String::from_utf8_lossy(&content));
            }
            None => unresolved.push(name.to_string()),
        }
    }

    if !unresolved.is_empty() {
        tracing::debug!("Unresolved template names: {:?}", unresolved);
        return GenerationResult::Unresolved(unresolved);
    }

    if body.is_empty() {
        return GenerationResult::Document(String::new());
    }

    GenerationResult::Document(format!("{}\n{}", ATTRIBUTION_HEADER, body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_store() -> (TempDir, CacheStore) {
        let temp = TempDir::new().unwrap();
        let store = CacheStore::new(temp.path());
        store
            .write_template("node.gitignore", b"node_modules/\n")
            .unwrap();
        store.write_template("python.gitignore", b"*.pyc\n").unwrap();
        (temp, store)
    }

    #[test]
    fn parse_request_splits_on_commas() {
        assert_eq!(parse_request("node,python"), vec!["node", "python"]);
    }

    #[test]
    fn parse_request_trims_and_drops_empty_segments() {
        assert_eq!(parse_request(" node , ,python,"), vec!["node", "python"]);
        assert!(parse_request("").is_empty());
        assert!(parse_request(" , ").is_empty());
    }

    #[test]
    fn parse_request_keeps_duplicates_and_case() {
        assert_eq!(parse_request("Go,go"), vec!["Go", "go"]);
    }

    #[test]
    fn generates_document_in_request_order() {
        let (_temp, store) = sample_store();

        let result = generate(&["node", "python"], &store).unwrap();

        assert!(result.is_complete());
        assert_eq!(
            result.document(),
            "#### joe made this: http://goel.io/joe\n\
             #### node ####\n\
             node_modules/\n\
             #### python ####\n\
             *.pyc\n"
        );
        assert!(result.unresolved().is_empty());
    }

    #[test]
    fn section_header_keeps_requested_case() {
        let (_temp, store) = sample_store();

        let result = generate(&["Python"], &store).unwrap();

        assert!(result.document().contains("#### Python ####\n*.pyc\n"));
    }

    #[test]
    fn resolution_ignores_case() {
        let (_temp, store) = sample_store();

        let upper = generate(&["Python"], &store).unwrap();
        let lower = generate(&["python"], &store).unwrap();

        assert!(upper.is_complete());
        assert!(lower.is_complete());
    }

    #[test]
    fn any_unresolved_name_voids_document() {
        let (_temp, store) = sample_store();

        let result = generate(&["node", "nonexistent"], &store).unwrap();

        assert_eq!(
            result,
            GenerationResult::Unresolved(vec!["nonexistent".to_string()])
        );
        assert_eq!(result.document(), "");
    }

    #[test]
    fn unresolved_names_keep_request_order_and_case() {
        let (_temp, store) = sample_store();

        let result = generate(&["Zig", "node", "Elm"], &store).unwrap();

        assert_eq!(result.unresolved(), ["Zig".to_string(), "Elm".to_string()]);
    }

    #[test]
    fn empty_request_yields_empty_document() {
        let (_temp, store) = sample_store();

        let result = generate::<&str>(&[], &store).unwrap();

        assert_eq!(result, GenerationResult::Document(String::new()));
        assert!(result.unresolved().is_empty());
    }

    #[test]
    fn duplicate_names_repeat_sections() {
        let (_temp, store) = sample_store();

        let result = generate(&["node", "Node"], &store).unwrap();

        assert_eq!(result.document().matches("node_modules/").count(), 2);
        assert!(result.document().contains("#### Node ####"));
    }

    #[test]
    fn unreadable_indexed_file_counts_as_unresolved() {
        let (_temp, store) = sample_store();
        let index = TemplateIndex::build(&store).unwrap();
        std::fs::remove_file(store.template_path("python.gitignore")).unwrap();

        let result = generate_from_index(&["node", "python"], &index);

        assert_eq!(result.unresolved(), ["python".to_string()]);
        assert_eq!(result.document(), "");
    }

    #[test]
    fn missing_cache_is_an_error() {
        let temp = TempDir::new().unwrap();
        let store = CacheStore::new(temp.path().join("missing"));

        let err = generate(&["node"], &store).unwrap_err();
        assert!(err.is_cache_missing());
    }
}
