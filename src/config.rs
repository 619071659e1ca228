//! Indexer options

use crate::tags::TagKinds;

/// Options controlling which files count as headers or C sources, and which
/// tag kinds are emitted.
#[derive(Debug, Clone)]
pub struct IndexerOptions {
    /// Tag kinds the collector accepts
    pub kinds: TagKinds,
    /// File extensions (without the dot) treated as headers
    pub header_extensions: Vec<String>,
    /// File extensions (without the dot) parsed in C mode; everything else is C++
    pub c_extensions: Vec<String>,
}

impl Default for IndexerOptions {
    fn default() -> Self {
        Self {
            kinds: TagKinds::default(),
            header_extensions: ["h", "hh", "hpp", "hxx", "h++", "inl"]
                .into_iter()
                .map(String::from)
                .collect(),
            c_extensions: vec!["c".to_string()],
        }
    }
}

impl IndexerOptions {
    /// Replace the enabled tag kinds
    pub fn with_kinds(mut self, kinds: TagKinds) -> Self {
        self.kinds = kinds;
        self
    }

    pub fn is_header_extension(&self, extension: &str) -> bool {
        self.header_extensions
            .iter()
            .any(|e| e.eq_ignore_ascii_case(extension))
    }

    pub fn is_c_extension(&self, extension: &str) -> bool {
        self.c_extensions.iter().any(|e| e == extension)
    }
}
