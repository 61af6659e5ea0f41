//! The typed configuration schema: one struct per settings group, compiled
//! defaults via `Default`, and the registry of every dotted key the document
//! format knows.
//!
//! These are plain attribute bags — no I/O, no validation beyond what the
//! types themselves enforce. Enum-like fields (`project.type`,
//! `linker.subsystem`, ...) are stored as their raw document token so that
//! unrecognized tokens survive a load/save round-trip untouched; the
//! [`tokens`](crate::tokens) module provides the explicit parsers an editing
//! surface uses to map them onto a fixed choice set.

/// Project identity: name, output kind, target architecture, output directory.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectSettings {
    /// Never empty after a load — derived from the config file's parent
    /// directory when the document omits it.
    pub name: String,
    /// Raw output-type token: `exe`, `dll`, `lib`, or `sys`.
    pub output_type: String,
    /// Raw architecture token: `x64`, `x86`, or `arm64`.
    pub architecture: String,
    pub output_dir: String,
}

impl Default for ProjectSettings {
    fn default() -> Self {
        Self {
            name: String::new(),
            output_type: "exe".into(),
            architecture: "x64".into(),
            output_dir: "build".into(),
        }
    }
}

/// Compiler flags: language standard, runtime linkage, warnings, defines,
/// and the conformance/security toggles.
#[derive(Debug, Clone, PartialEq)]
pub struct CompilerSettings {
    pub standard: String,
    /// Raw runtime-linkage token: `dynamic` or `static`.
    pub runtime: String,
    /// Raw floating-point-mode token: `precise`, `fast`, or `strict`.
    pub floating_point: String,
    /// Raw calling-convention token: `cdecl`, `stdcall`, `fastcall`, or
    /// `vectorcall`.
    pub calling_convention: String,
    /// Raw character-set token: `unicode`, `mbcs`, or `none`.
    pub char_set: String,
    /// Preprocessor defines, order-preserving, duplicates allowed.
    pub defines: Vec<String>,
    pub exceptions: bool,
    pub rtti: bool,
    pub parallel: bool,
    pub function_level_linking: bool,
    pub string_pooling: bool,
    /// Warning level 0–4.
    pub warning_level: u32,
    pub warnings_as_errors: bool,
    /// Warning numbers to suppress, order-preserving.
    pub disabled_warnings: Vec<String>,
    pub permissive: bool,
    pub buffer_checks: bool,
    pub control_flow_guard: bool,
}

impl Default for CompilerSettings {
    fn default() -> Self {
        Self {
            standard: "c++20".into(),
            runtime: "dynamic".into(),
            floating_point: "precise".into(),
            calling_convention: "cdecl".into(),
            char_set: "unicode".into(),
            defines: Vec::new(),
            exceptions: true,
            rtti: true,
            parallel: true,
            function_level_linking: true,
            string_pooling: true,
            warning_level: 4,
            warnings_as_errors: false,
            disabled_warnings: Vec::new(),
            permissive: false,
            buffer_checks: true,
            control_flow_guard: false,
        }
    }
}

/// Linker inputs and options. The optional scalars (`entry_point`,
/// `def_file`, `stack_size`, `heap_size`) use empty/zero to mean "unset"
/// and are omitted from the encoded document in that state.
#[derive(Debug, Clone, PartialEq)]
pub struct LinkerSettings {
    pub libraries: Vec<String>,
    pub library_paths: Vec<String>,
    /// Raw subsystem token: `console`, `windows`, `native`,
    /// `efi_application`, `boot_application`, or `posix`.
    pub subsystem: String,
    /// Empty = linker default entry point.
    pub entry_point: String,
    /// Module-definition file; empty = none.
    pub def_file: String,
    /// Stack reserve in bytes; 0 = linker default.
    pub stack_size: u32,
    /// Heap reserve in bytes; 0 = linker default.
    pub heap_size: u32,
    pub map_file: bool,
    pub debug_info: bool,
    pub aslr: bool,
    pub dep: bool,
    pub control_flow_guard: bool,
    /// Serialized as the literal `"on"` / `"auto"`, not a boolean.
    pub lto: bool,
}

impl Default for LinkerSettings {
    fn default() -> Self {
        Self {
            libraries: Vec::new(),
            library_paths: Vec::new(),
            subsystem: "console".into(),
            entry_point: String::new(),
            def_file: String::new(),
            stack_size: 0,
            heap_size: 0,
            map_file: false,
            debug_info: true,
            aslr: true,
            dep: true,
            control_flow_guard: false,
            lto: false,
        }
    }
}

/// Source and include directory layout.
#[derive(Debug, Clone, PartialEq)]
pub struct SourcesSettings {
    /// Defaults to `["src", "include"]`. An empty or absent list in a
    /// document keeps the default rather than emptying it.
    pub include_dirs: Vec<String>,
    /// Defaults to `["src"]`, with the same keep-default rule.
    pub source_dirs: Vec<String>,
    pub exclude_patterns: Vec<String>,
    pub external_dirs: Vec<String>,
}

impl Default for SourcesSettings {
    fn default() -> Self {
        Self {
            include_dirs: vec!["src".into(), "include".into()],
            source_dirs: vec!["src".into()],
            exclude_patterns: Vec::new(),
            external_dirs: Vec::new(),
        }
    }
}

/// Windows resource compilation (.rc files).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResourcesSettings {
    pub enabled: bool,
    pub files: Vec<String>,
}

/// Kernel driver build options.
#[derive(Debug, Clone, PartialEq)]
pub struct DriverSettings {
    pub enabled: bool,
    /// Raw driver-type token: `wdm`, `kmdf`, or `wdf`.
    pub driver_type: String,
    pub entry_point: String,
    /// Raw target-OS token: `win7` through `win11`.
    pub target_os: String,
    pub minifilter: bool,
}

impl Default for DriverSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            driver_type: "wdm".into(),
            entry_point: "DriverEntry".into(),
            target_os: "win10".into(),
            minifilter: false,
        }
    }
}

/// Precompiled header setup. `header`/`source` empty = unset.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PchSettings {
    pub enabled: bool,
    pub header: String,
    pub source: String,
}

/// The whole configuration aggregate. One instance per editing session,
/// owned exclusively by a [`ConfigSession`](crate::ConfigSession).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BuildConfig {
    pub project: ProjectSettings,
    pub compiler: CompilerSettings,
    pub linker: LinkerSettings,
    pub sources: SourcesSettings,
    pub resources: ResourcesSettings,
    pub pch: PchSettings,
    pub driver: DriverSettings,
}

/// Every dotted key the document format recognizes, in canonical (encoder)
/// order. Key-level operations validate against this list before touching
/// the model, so a typo fails fast instead of silently doing nothing.
pub const KEYS: &[&str] = &[
    "project.name",
    "project.type",
    "project.output_dir",
    "project.architecture",
    "compiler.standard",
    "compiler.runtime",
    "compiler.floating_point",
    "compiler.calling_convention",
    "compiler.char_set",
    "compiler.defines",
    "compiler.exceptions",
    "compiler.rtti",
    "compiler.parallel",
    "compiler.function_level_linking",
    "compiler.string_pooling",
    "compiler.warnings.level",
    "compiler.warnings.as_errors",
    "compiler.warnings.disabled",
    "compiler.conformance.permissive",
    "compiler.security.buffer_checks",
    "compiler.security.control_flow_guard",
    "linker.libraries",
    "linker.library_paths",
    "linker.subsystem",
    "linker.entry_point",
    "linker.def_file",
    "linker.stack_size",
    "linker.heap_size",
    "linker.map_file",
    "linker.debug_info",
    "linker.security.aslr",
    "linker.security.dep",
    "linker.security.cfg",
    "linker.lto",
    "sources.include_dirs",
    "sources.source_dirs",
    "sources.exclude_patterns",
    "sources.external_dirs",
    "resources.enabled",
    "resources.files",
    "pch.enabled",
    "pch.header",
    "pch.source",
    "driver.enabled",
    "driver.type",
    "driver.entry_point",
    "driver.target_os",
    "driver.minifilter",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_defaults() {
        let p = ProjectSettings::default();
        assert_eq!(p.name, "");
        assert_eq!(p.output_type, "exe");
        assert_eq!(p.architecture, "x64");
        assert_eq!(p.output_dir, "build");
    }

    #[test]
    fn compiler_defaults() {
        let c = CompilerSettings::default();
        assert_eq!(c.standard, "c++20");
        assert_eq!(c.runtime, "dynamic");
        assert_eq!(c.warning_level, 4);
        assert!(!c.warnings_as_errors);
        assert!(c.exceptions);
        assert!(c.rtti);
        assert!(c.parallel);
        assert!(c.buffer_checks);
        assert!(!c.control_flow_guard);
        assert!(!c.permissive);
        assert!(c.function_level_linking);
        assert!(c.string_pooling);
        assert!(c.defines.is_empty());
        assert!(c.disabled_warnings.is_empty());
    }

    #[test]
    fn linker_defaults() {
        let l = LinkerSettings::default();
        assert_eq!(l.subsystem, "console");
        assert!(l.aslr);
        assert!(l.dep);
        assert!(!l.lto);
        assert!(l.debug_info);
        assert!(!l.map_file);
        assert_eq!(l.entry_point, "");
        assert_eq!(l.stack_size, 0);
    }

    #[test]
    fn sources_defaults() {
        let s = SourcesSettings::default();
        assert_eq!(s.include_dirs, vec!["src", "include"]);
        assert_eq!(s.source_dirs, vec!["src"]);
        assert!(s.exclude_patterns.is_empty());
        assert!(s.external_dirs.is_empty());
    }

    #[test]
    fn driver_defaults() {
        let d = DriverSettings::default();
        assert!(!d.enabled);
        assert_eq!(d.driver_type, "wdm");
        assert_eq!(d.entry_point, "DriverEntry");
        assert_eq!(d.target_os, "win10");
    }

    #[test]
    fn keys_are_unique() {
        let mut seen = std::collections::BTreeSet::new();
        for key in KEYS {
            assert!(seen.insert(key), "duplicate key {key}");
        }
    }

    #[test]
    fn keys_cover_all_groups() {
        for group in [
            "project.", "compiler.", "linker.", "sources.", "resources.", "pch.", "driver.",
        ] {
            assert!(
                KEYS.iter().any(|k| k.starts_with(group)),
                "no keys for {group}"
            );
        }
    }
}
