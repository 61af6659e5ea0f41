//! The binding layer: interprets the decoder's flat raw-string map into the
//! typed model fields.
//!
//! `apply` overwrites exactly the fields whose keys are present in the map
//! and leaves everything else untouched. Load runs it against a
//! freshly-defaulted model, so an absent key means "keep the documented
//! default"; a single-key patch (`set`) runs it against the live model and
//! touches only that field.
//!
//! Coercion rules per field type:
//!
//! - **Strings** are used verbatim when present and non-empty.
//! - **Booleans** compare the raw text case-sensitively to the literal
//!   `true`; any other present value is `false`.
//! - **Integers** parse only when the whole token converts; otherwise the
//!   field keeps its current value. Never a failure.
//! - **Lists** split the comma-joined raw value, trim space/tab from each
//!   segment, and drop empty segments. An explicit empty list empties the
//!   field — except `sources.include_dirs` / `sources.source_dirs`, whose
//!   built-in defaults are only overridden by a non-empty list.
//! - **`linker.lto`** maps the literal `"on"` to `true`; anything else,
//!   including `"auto"`, is `false`.
//!
//! Enum-like fields take the raw token as-is without validating it against
//! the known set, so a token from a newer schema survives the round-trip;
//! the [`tokens`](crate::tokens) parsers handle fallback at presentation
//! time.

use crate::decode::FlatMap;
use crate::schema::BuildConfig;

/// Populate `config` from a decoded flat map. Only keys present in the map
/// change fields; malformed scalars leave their field untouched.
pub fn apply(config: &mut BuildConfig, map: &FlatMap) {
    let p = &mut config.project;
    set_string(map, "project.name", &mut p.name);
    set_string(map, "project.type", &mut p.output_type);
    set_string(map, "project.output_dir", &mut p.output_dir);
    set_string(map, "project.architecture", &mut p.architecture);

    let c = &mut config.compiler;
    set_string(map, "compiler.standard", &mut c.standard);
    set_string(map, "compiler.runtime", &mut c.runtime);
    set_string(map, "compiler.floating_point", &mut c.floating_point);
    set_string(map, "compiler.calling_convention", &mut c.calling_convention);
    set_string(map, "compiler.char_set", &mut c.char_set);
    set_list(map, "compiler.defines", &mut c.defines);
    set_bool(map, "compiler.exceptions", &mut c.exceptions);
    set_bool(map, "compiler.rtti", &mut c.rtti);
    set_bool(map, "compiler.parallel", &mut c.parallel);
    set_bool(
        map,
        "compiler.function_level_linking",
        &mut c.function_level_linking,
    );
    set_bool(map, "compiler.string_pooling", &mut c.string_pooling);
    set_u32(map, "compiler.warnings.level", &mut c.warning_level);
    set_bool(map, "compiler.warnings.as_errors", &mut c.warnings_as_errors);
    set_list(map, "compiler.warnings.disabled", &mut c.disabled_warnings);
    set_bool(map, "compiler.conformance.permissive", &mut c.permissive);
    set_bool(map, "compiler.security.buffer_checks", &mut c.buffer_checks);
    set_bool(
        map,
        "compiler.security.control_flow_guard",
        &mut c.control_flow_guard,
    );

    let l = &mut config.linker;
    set_list(map, "linker.libraries", &mut l.libraries);
    set_list(map, "linker.library_paths", &mut l.library_paths);
    set_string(map, "linker.subsystem", &mut l.subsystem);
    set_string(map, "linker.entry_point", &mut l.entry_point);
    set_string(map, "linker.def_file", &mut l.def_file);
    set_u32(map, "linker.stack_size", &mut l.stack_size);
    set_u32(map, "linker.heap_size", &mut l.heap_size);
    set_bool(map, "linker.map_file", &mut l.map_file);
    set_bool(map, "linker.debug_info", &mut l.debug_info);
    set_bool(map, "linker.security.aslr", &mut l.aslr);
    set_bool(map, "linker.security.dep", &mut l.dep);
    set_bool(map, "linker.security.cfg", &mut l.control_flow_guard);
    if let Some(raw) = map.get("linker.lto") {
        l.lto = raw == "on";
    }

    let s = &mut config.sources;
    set_dirs(map, "sources.include_dirs", &mut s.include_dirs);
    set_dirs(map, "sources.source_dirs", &mut s.source_dirs);
    set_list(map, "sources.exclude_patterns", &mut s.exclude_patterns);
    set_list(map, "sources.external_dirs", &mut s.external_dirs);

    set_bool(map, "resources.enabled", &mut config.resources.enabled);
    set_list(map, "resources.files", &mut config.resources.files);

    set_bool(map, "pch.enabled", &mut config.pch.enabled);
    set_string(map, "pch.header", &mut config.pch.header);
    set_string(map, "pch.source", &mut config.pch.source);

    let d = &mut config.driver;
    set_bool(map, "driver.enabled", &mut d.enabled);
    set_string(map, "driver.type", &mut d.driver_type);
    set_string(map, "driver.entry_point", &mut d.entry_point);
    set_string(map, "driver.target_os", &mut d.target_os);
    set_bool(map, "driver.minifilter", &mut d.minifilter);
}

/// Split a comma-joined list value: trim space/tab per segment, drop empty
/// segments. Also what an editing surface uses for its comma-separated text
/// inputs, so both paths agree on the format.
pub fn split_csv(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|segment| segment.trim_matches([' ', '\t']))
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}

fn set_string(map: &FlatMap, key: &str, field: &mut String) {
    if let Some(raw) = map.get(key)
        && !raw.is_empty()
    {
        *field = raw.clone();
    }
}

fn set_bool(map: &FlatMap, key: &str, field: &mut bool) {
    if let Some(raw) = map.get(key) {
        *field = raw == "true";
    }
}

fn set_u32(map: &FlatMap, key: &str, field: &mut u32) {
    if let Some(raw) = map.get(key)
        && let Ok(value) = raw.parse()
    {
        *field = value;
    }
}

fn set_list(map: &FlatMap, key: &str, field: &mut Vec<String>) {
    if let Some(raw) = map.get(key) {
        *field = split_csv(raw);
    }
}

/// Like [`set_list`], but the built-in default only yields to a non-empty
/// decoded list. Used for the two directory lists whose defaults should not
/// be clobbered by an empty or absent document entry.
fn set_dirs(map: &FlatMap, key: &str, field: &mut Vec<String>) {
    if let Some(raw) = map.get(key) {
        let items = split_csv(raw);
        if !items.is_empty() {
            *field = items;
        }
    }
}
