//! Typed build configuration for MSVC projects, with a forgiving on-disk
//! format. Load a `vcbuild.json`, edit a struct, save it back.
//!
//! The crate models a Visual C++ build setup (compiler, linker, sources,
//! resources, precompiled headers, driver options) as the [`BuildConfig`]
//! struct tree, and reads and writes it as a JSON-style document with
//! dotted-path grouping:
//!
//! ```text
//! {
//!   "project.name": "myapp",
//!   "compiler": {
//!     "standard": "c++20",
//!     "warnings": { "level": 4 }
//!   }
//! }
//! ```
//!
//! Nested objects and dotted keys are interchangeable on input; both forms
//! decode to the same flat `group.key` path. Output is always canonical:
//! fixed group order, nested group objects with plain leaf keys, two-space
//! indentation.
//!
//! # Tolerant reads, canonical writes
//!
//! Config files are edited by hand, so the decoder never fails. Malformed
//! input produces fewer bound keys, not an error: an unparsable value leaves
//! the field at its default, an unknown key is ignored, and a truncated
//! document binds whatever was read up to the damage. The binding layer
//! ([`decode`] followed by an internal apply pass) only overwrites a field
//! when its key is present and its value parses, so partial documents are
//! partial overlays over compiled defaults.
//!
//! Writing goes through [`encode`], which regenerates the whole document from
//! the struct. Hand formatting is not preserved; the canonical form is.
//!
//! # Sessions
//!
//! [`ConfigSession`] owns a [`BuildConfig`] plus a dirty flag. `load()` reads
//! a document from disk (a missing file is not an error; you get defaults
//! with the project name derived from the directory), `update()` mutates the
//! config and marks it dirty, `save()` writes the canonical document and
//! clears the flag. This is the surface a front end drives.
//!
//! # Framework-agnostic operations
//!
//! The [`ConfigAction`] enum and [`handle`] dispatch cover the standard
//! inspect-and-edit operations (`list`, `gen`, `get`, `set`) without any CLI
//! framework. For [clap](https://docs.rs/clap) users, the `cli` module
//! (behind the `clap` Cargo feature, on by default) provides [`ConfigArgs`],
//! a derive struct that maps subcommands straight onto [`ConfigAction`]. To
//! use the crate without clap:
//!
//! ```toml
//! vcbuild-config = { version = "...", default-features = false }
//! ```
//!
//! # Error handling
//!
//! Fallible operations return [`ConfigError`]. Decoding is infallible by
//! design; errors come from I/O ([`ConfigError::Io`], with the path) and from
//! the key-addressed operations ([`ConfigError::KeyNotFound`],
//! [`ConfigError::InvalidValue`]).

pub mod error;
pub mod schema;
pub mod tokens;

mod bind;
#[cfg(feature = "clap")]
mod cli;
mod decode;
mod encode;
mod ops;
mod session;
mod types;

#[cfg(test)]
mod fixtures;

pub use bind::split_csv;
#[cfg(feature = "clap")]
pub use cli::{ConfigArgs, ConfigSubcommand};
pub use decode::{FlatMap, decode};
pub use encode::encode;
pub use error::ConfigError;
pub use ops::{ConfigResult, generate_template, get_value, handle, list_values, set_value};
pub use schema::{
    BuildConfig, CompilerSettings, DriverSettings, LinkerSettings, PchSettings, ProjectSettings,
    ResourcesSettings, SourcesSettings,
};
pub use session::ConfigSession;
pub use types::ConfigAction;
