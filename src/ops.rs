//! Key-level operations over the configuration: listing, lookup, single-key
//! set, template generation, and the result types callers display.
//!
//! Listing and lookup go through the codec itself — `decode(encode(model))`
//! — so what they report is exactly the document's flat key space, omitted
//! optional keys included. `set_value` validates the key against
//! [`schema::KEYS`] and type-checks integer keys before anything touches the
//! model, so a typo or a non-numeric stack size fails fast instead of being
//! silently absorbed.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::bind;
use crate::decode::{FlatMap, decode};
use crate::encode::encode;
use crate::error::ConfigError;
use crate::schema::{self, BuildConfig};
use crate::session::ConfigSession;
use crate::types::ConfigAction;

/// Keys whose raw value must be a whole unsigned integer for `set` to be
/// meaningful. The binding layer would quietly keep the default otherwise,
/// which is the right behavior for a hand-edited document but not for an
/// explicit command.
const INTEGER_KEYS: &[&str] = &[
    "compiler.warnings.level",
    "linker.stack_size",
    "linker.heap_size",
];

/// Result of a config operation. Returned to the caller for display.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigResult {
    /// The default canonical document.
    Template(String),
    /// Confirmation that the template was written to a file.
    TemplateWritten { path: PathBuf },
    /// A key's current raw value.
    KeyValue { key: String, value: String },
    /// Confirmation that a value was set and persisted.
    ValueSet { key: String, value: String },
    /// All key-value pairs of the encoded document.
    Listing { entries: Vec<(String, String)> },
}

impl fmt::Display for ConfigResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigResult::Template(t) => write!(f, "{t}"),
            ConfigResult::TemplateWritten { path } => {
                write!(f, "Config template written to {}", path.display())
            }
            ConfigResult::KeyValue { key, value } => write!(f, "{key} = {value}"),
            ConfigResult::ValueSet { key, value } => write!(f, "Set {key} = {value}"),
            ConfigResult::Listing { entries } => {
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "{key} = {value}")?;
                }
                Ok(())
            }
        }
    }
}

/// The default canonical document, suitable for seeding a new project.
pub fn generate_template() -> String {
    encode(&BuildConfig::default())
}

/// List every key-value pair of the model's encoded document.
pub fn list_values(config: &BuildConfig) -> ConfigResult {
    let map = decode(&encode(config));
    ConfigResult::Listing {
        entries: map.into_iter().collect(),
    }
}

/// Get a key's raw value. Keys the schema knows but the encoder currently
/// omits (unset optional scalars) report `<not set>`.
pub fn get_value(config: &BuildConfig, key: &str) -> Result<ConfigResult, ConfigError> {
    let map = decode(&encode(config));
    if let Some(value) = map.get(key) {
        return Ok(ConfigResult::KeyValue {
            key: key.to_string(),
            value: value.clone(),
        });
    }
    if schema::KEYS.contains(&key) {
        return Ok(ConfigResult::KeyValue {
            key: key.to_string(),
            value: "<not set>".to_string(),
        });
    }
    Err(ConfigError::KeyNotFound(key.to_string()))
}

/// Set one key on the model, routing the raw value through the same binding
/// layer a document load uses. Unknown keys and non-numeric values for
/// integer keys fail before the model is touched.
pub fn set_value(
    config: &mut BuildConfig,
    key: &str,
    value: &str,
) -> Result<ConfigResult, ConfigError> {
    if !schema::KEYS.contains(&key) {
        return Err(ConfigError::KeyNotFound(key.to_string()));
    }
    if INTEGER_KEYS.contains(&key) && value.parse::<u32>().is_err() {
        return Err(ConfigError::InvalidValue {
            key: key.to_string(),
            reason: format!("expected an unsigned integer, got '{value}'"),
        });
    }

    let mut patch = FlatMap::new();
    patch.insert(key.to_string(), value.to_string());
    bind::apply(config, &patch);

    Ok(ConfigResult::ValueSet {
        key: key.to_string(),
        value: value.to_string(),
    })
}

/// Perform a [`ConfigAction`] against the document at `path`: load,
/// operate, and persist when the action mutates. This is the
/// framework-agnostic dispatch behind the CLI adapter.
pub fn handle(path: &Path, action: ConfigAction) -> Result<ConfigResult, ConfigError> {
    match action {
        ConfigAction::Gen { output } => {
            let template = generate_template();
            match output {
                Some(out) => {
                    std::fs::write(&out, template).map_err(|e| ConfigError::Io {
                        path: out.clone(),
                        source: e,
                    })?;
                    Ok(ConfigResult::TemplateWritten { path: out })
                }
                None => Ok(ConfigResult::Template(template)),
            }
        }
        ConfigAction::List => {
            let mut session = ConfigSession::new();
            session.load(path)?;
            Ok(list_values(session.config()))
        }
        ConfigAction::Get { key } => {
            let mut session = ConfigSession::new();
            session.load(path)?;
            get_value(session.config(), &key)
        }
        ConfigAction::Set { key, value } => {
            let mut session = ConfigSession::new();
            session.load(path)?;

            let mut config = session.config().clone();
            let result = set_value(&mut config, &key, &value)?;
            session.update(|current| *current = config);
            session.save(path)?;
            Ok(result)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::sample_config;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn template_is_the_default_document() {
        assert_eq!(generate_template(), encode(&BuildConfig::default()));
    }

    #[test]
    fn list_covers_every_emitted_key() {
        let result = list_values(&sample_config());
        let ConfigResult::Listing { entries } = result else {
            panic!("expected Listing");
        };
        let keys: Vec<&str> = entries.iter().map(|(k, _)| k.as_str()).collect();
        assert!(keys.contains(&"project.name"));
        assert!(keys.contains(&"compiler.warnings.level"));
        assert!(keys.contains(&"linker.security.aslr"));
        assert!(keys.contains(&"driver.minifilter"));
        // Optional scalars are set in the sample, so they appear too.
        assert!(keys.contains(&"linker.entry_point"));
    }

    #[test]
    fn list_omits_unset_optional_keys() {
        let result = list_values(&BuildConfig::default());
        let ConfigResult::Listing { entries } = result else {
            panic!("expected Listing");
        };
        assert!(!entries.iter().any(|(k, _)| k == "linker.stack_size"));
    }

    #[test]
    fn get_reads_nested_key() {
        let result = get_value(&sample_config(), "compiler.warnings.level").unwrap();
        assert_eq!(
            result,
            ConfigResult::KeyValue {
                key: "compiler.warnings.level".into(),
                value: "3".into(),
            }
        );
    }

    #[test]
    fn get_unset_optional_key_reports_not_set() {
        let result = get_value(&BuildConfig::default(), "linker.def_file").unwrap();
        let ConfigResult::KeyValue { value, .. } = result else {
            panic!("expected KeyValue");
        };
        assert_eq!(value, "<not set>");
    }

    #[test]
    fn get_unknown_key_errors() {
        let result = get_value(&BuildConfig::default(), "compiler.optimizer");
        assert!(matches!(result, Err(ConfigError::KeyNotFound(_))));
    }

    #[test]
    fn set_routes_through_binding() {
        let mut config = BuildConfig::default();
        set_value(&mut config, "compiler.exceptions", "false").unwrap();
        assert!(!config.compiler.exceptions);
        set_value(&mut config, "linker.lto", "on").unwrap();
        assert!(config.linker.lto);
        set_value(&mut config, "compiler.defines", "A, B").unwrap();
        assert_eq!(config.compiler.defines, vec!["A", "B"]);
    }

    #[test]
    fn set_rejects_unknown_key() {
        let mut config = BuildConfig::default();
        let result = set_value(&mut config, "compiler.warnigns.level", "3");
        assert!(matches!(result, Err(ConfigError::KeyNotFound(_))));
        assert_eq!(config, BuildConfig::default());
    }

    #[test]
    fn set_rejects_non_numeric_integer_value() {
        let mut config = BuildConfig::default();
        let result = set_value(&mut config, "linker.stack_size", "lots");
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
        assert_eq!(config.linker.stack_size, 0);
    }

    #[test]
    fn listing_display_format() {
        let result = ConfigResult::Listing {
            entries: vec![
                ("project.name".into(), "app".into()),
                ("project.type".into(), "exe".into()),
            ],
        };
        assert_eq!(format!("{result}"), "project.name = app\nproject.type = exe");
    }

    #[test]
    fn handle_set_persists_to_disk() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("vcbuild.json");

        let result = handle(
            &path,
            ConfigAction::Set {
                key: "compiler.standard".into(),
                value: "c++23".into(),
            },
        )
        .unwrap();
        assert!(matches!(result, ConfigResult::ValueSet { .. }));

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("\"standard\": \"c++23\""));
    }

    #[test]
    fn handle_get_reads_what_set_wrote() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("vcbuild.json");

        handle(
            &path,
            ConfigAction::Set {
                key: "linker.subsystem".into(),
                value: "windows".into(),
            },
        )
        .unwrap();

        let result = handle(
            &path,
            ConfigAction::Get {
                key: "linker.subsystem".into(),
            },
        )
        .unwrap();
        assert_eq!(
            result,
            ConfigResult::KeyValue {
                key: "linker.subsystem".into(),
                value: "windows".into(),
            }
        );
    }

    #[test]
    fn handle_gen_writes_template_file() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("template.json");

        let result = handle(
            dir.path().join("vcbuild.json").as_path(),
            ConfigAction::Gen {
                output: Some(out.clone()),
            },
        )
        .unwrap();
        assert_eq!(result, ConfigResult::TemplateWritten { path: out.clone() });
        assert_eq!(fs::read_to_string(&out).unwrap(), generate_template());
    }

    #[test]
    fn handle_list_on_missing_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let result = handle(dir.path().join("vcbuild.json").as_path(), ConfigAction::List).unwrap();
        let ConfigResult::Listing { entries } = result else {
            panic!("expected Listing");
        };
        let standard = entries
            .iter()
            .find(|(k, _)| k == "compiler.standard")
            .unwrap();
        assert_eq!(standard.1, "c++20");
    }
}
