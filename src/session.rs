//! The editing session: exclusive owner of one [`BuildConfig`] plus its
//! dirty flag, with the load/save lifecycle.
//!
//! The contract with the host surface (a GUI form, a CLI, a test) is small:
//! typed access to the model, `load`/`save`, and the modified flag so the
//! host can prompt before discarding edits. Load followed immediately by
//! save reproduces a semantically equivalent document.
//!
//! Everything is synchronous and single-threaded; file handles are opened,
//! used to completion, and released within the call on every exit path.
//!
//! # Error policy
//!
//! - A **missing** document is not an error: defaults stand, load succeeds.
//! - An **existing but unreadable** document fails the load.
//! - **Malformed content** never fails: the decoder keeps what it can and
//!   the binding layer falls back to defaults per field.
//! - An **unwritable destination** fails the save and leaves the dirty flag
//!   set; a failed open never produces a truncated document.
//!
//! All mutation from the host routes through [`update`](ConfigSession::update)
//! (or an explicit [`mark_modified`](ConfigSession::mark_modified)), so the
//! dirty-flag contract lives in one place instead of at every mutation site.

use std::path::Path;

use crate::bind;
use crate::decode::decode;
use crate::encode::encode;
use crate::error::ConfigError;
use crate::schema::BuildConfig;

/// One configuration editing session: the model, and whether it has unsaved
/// edits relative to the last successful load or save.
#[derive(Debug, Default)]
pub struct ConfigSession {
    config: BuildConfig,
    modified: bool,
}

impl ConfigSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read access to the model.
    pub fn config(&self) -> &BuildConfig {
        &self.config
    }

    /// Mutate the model through a closure, marking the session modified.
    /// This is the single mutation path for editing surfaces.
    pub fn update<F: FnOnce(&mut BuildConfig)>(&mut self, mutate: F) {
        mutate(&mut self.config);
        self.modified = true;
    }

    pub fn is_modified(&self) -> bool {
        self.modified
    }

    pub fn mark_modified(&mut self) {
        self.modified = true;
    }

    /// Load the document at `path`, replacing the current model.
    ///
    /// The model is reset to defaults and the project name is derived from
    /// the path's parent directory before any reading happens, so the name
    /// is never empty regardless of what the document holds. A missing file
    /// leaves the defaults standing and succeeds; only an existing file that
    /// cannot be read fails. Clears the dirty flag on success.
    pub fn load(&mut self, path: &Path) -> Result<(), ConfigError> {
        self.config = BuildConfig::default();
        self.config.project.name = derive_project_name(path);

        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                self.modified = false;
                return Ok(());
            }
            Err(e) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source: e,
                });
            }
        };

        bind::apply(&mut self.config, &decode(&text));
        self.modified = false;
        Ok(())
    }

    /// Serialize the model to `path`, overwriting any existing content.
    /// Clears the dirty flag on success; on failure the flag stays set so
    /// the host still knows there are unsaved edits.
    pub fn save(&mut self, path: &Path) -> Result<(), ConfigError> {
        let text = encode(&self.config);
        std::fs::write(path, text).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        self.modified = false;
        Ok(())
    }
}

/// The final component of the config path's parent directory, or `"project"`
/// when the path has no usable parent (bare file name, filesystem root).
fn derive_project_name(path: &Path) -> String {
    path.parent()
        .and_then(|parent| parent.file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| "project".to_string())
}
