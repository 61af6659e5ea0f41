use std::path::PathBuf;

/// A config operation, independent of any CLI framework.
/// The CLI layer converts parsed clap args into this.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigAction {
    /// Show every key-value pair of the resolved document.
    List,
    /// Emit the default canonical document.
    Gen { output: Option<PathBuf> },
    /// Look up one dotted key.
    Get { key: String },
    /// Set one dotted key and persist the document.
    Set { key: String, value: String },
}
