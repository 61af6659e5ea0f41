//! The document writer: serializes a [`BuildConfig`] to the canonical
//! nested form.
//!
//! Canonical means deterministic: fixed field order (schema declaration
//! order), 2-space indentation, double-quoted keys, strings escaped (`"`,
//! `\`, newline, tab), booleans and integers bare, lists as bracketed
//! comma-separated quoted strings (`[]` when empty). Save always emits every
//! group, even unmodified ones.
//!
//! Optional scalars — `linker.entry_point`, `linker.def_file`,
//! `linker.stack_size`/`heap_size` when 0, `pch.header`, `pch.source` — are
//! omitted entirely rather than written as empty/zero, so key presence is
//! itself meaningful on the next decode.
//!
//! `linker.lto` is written as the literal string `"on"` / `"auto"`, matching
//! the build tool's three-state flag; the decoder side treats anything but
//! `"on"` as off.

use crate::schema::BuildConfig;

/// Serialize a configuration to the canonical document text.
///
/// Never fails for a structurally valid model; writing the result to disk is
/// the session's concern.
pub fn encode(config: &BuildConfig) -> String {
    let mut root = Obj::new(0);

    let mut project = Obj::new(1);
    project.string("name", &config.project.name);
    project.string("type", &config.project.output_type);
    project.string("output_dir", &config.project.output_dir);
    project.string("architecture", &config.project.architecture);
    root.object("project", project);

    let c = &config.compiler;
    let mut compiler = Obj::new(1);
    compiler.string("standard", &c.standard);
    compiler.string("runtime", &c.runtime);
    compiler.string("floating_point", &c.floating_point);
    compiler.string("calling_convention", &c.calling_convention);
    compiler.string("char_set", &c.char_set);
    compiler.list("defines", &c.defines);
    compiler.boolean("exceptions", c.exceptions);
    compiler.boolean("rtti", c.rtti);
    compiler.boolean("parallel", c.parallel);
    compiler.boolean("function_level_linking", c.function_level_linking);
    compiler.boolean("string_pooling", c.string_pooling);
    let mut warnings = Obj::new(2);
    warnings.integer("level", c.warning_level);
    warnings.boolean("as_errors", c.warnings_as_errors);
    warnings.list("disabled", &c.disabled_warnings);
    compiler.object("warnings", warnings);
    let mut conformance = Obj::new(2);
    conformance.boolean("permissive", c.permissive);
    compiler.object("conformance", conformance);
    let mut comp_security = Obj::new(2);
    comp_security.boolean("buffer_checks", c.buffer_checks);
    comp_security.boolean("control_flow_guard", c.control_flow_guard);
    compiler.object("security", comp_security);
    root.object("compiler", compiler);

    let l = &config.linker;
    let mut linker = Obj::new(1);
    linker.list("libraries", &l.libraries);
    linker.list("library_paths", &l.library_paths);
    linker.string("subsystem", &l.subsystem);
    if !l.entry_point.is_empty() {
        linker.string("entry_point", &l.entry_point);
    }
    if !l.def_file.is_empty() {
        linker.string("def_file", &l.def_file);
    }
    if l.stack_size != 0 {
        linker.integer("stack_size", l.stack_size);
    }
    if l.heap_size != 0 {
        linker.integer("heap_size", l.heap_size);
    }
    linker.boolean("map_file", l.map_file);
    linker.boolean("debug_info", l.debug_info);
    let mut link_security = Obj::new(2);
    link_security.boolean("aslr", l.aslr);
    link_security.boolean("dep", l.dep);
    link_security.boolean("cfg", l.control_flow_guard);
    linker.object("security", link_security);
    linker.string("lto", if l.lto { "on" } else { "auto" });
    root.object("linker", linker);

    let s = &config.sources;
    let mut sources = Obj::new(1);
    sources.list("include_dirs", &s.include_dirs);
    sources.list("source_dirs", &s.source_dirs);
    sources.list("exclude_patterns", &s.exclude_patterns);
    sources.list("external_dirs", &s.external_dirs);
    root.object("sources", sources);

    let mut resources = Obj::new(1);
    resources.boolean("enabled", config.resources.enabled);
    resources.list("files", &config.resources.files);
    root.object("resources", resources);

    let mut pch = Obj::new(1);
    pch.boolean("enabled", config.pch.enabled);
    if !config.pch.header.is_empty() {
        pch.string("header", &config.pch.header);
    }
    if !config.pch.source.is_empty() {
        pch.string("source", &config.pch.source);
    }
    root.object("pch", pch);

    let d = &config.driver;
    let mut driver = Obj::new(1);
    driver.boolean("enabled", d.enabled);
    driver.string("type", &d.driver_type);
    driver.string("entry_point", &d.entry_point);
    driver.string("target_os", &d.target_os);
    driver.boolean("minifilter", d.minifilter);
    root.object("driver", driver);

    let mut out = root.render();
    out.push('\n');
    out
}

fn pad(level: usize) -> String {
    "  ".repeat(level)
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            other => out.push(other),
        }
    }
    out
}

fn quoted(s: &str) -> String {
    format!("\"{}\"", escape(s))
}

fn render_list(items: &[String]) -> String {
    if items.is_empty() {
        return "[]".into();
    }
    let quoted: Vec<String> = items.iter().map(|item| self::quoted(item)).collect();
    format!("[{}]", quoted.join(", "))
}

/// Accumulates one object's already-rendered `"key": value` lines.
/// `level` is the indentation depth of the object's closing brace; field
/// lines sit one level deeper.
struct Obj {
    level: usize,
    entries: Vec<String>,
}

impl Obj {
    fn new(level: usize) -> Self {
        Self {
            level,
            entries: Vec::new(),
        }
    }

    fn raw(&mut self, key: &str, value: &str) {
        self.entries
            .push(format!("{}\"{}\": {}", pad(self.level + 1), key, value));
    }

    fn string(&mut self, key: &str, value: &str) {
        self.raw(key, &quoted(value));
    }

    fn boolean(&mut self, key: &str, value: bool) {
        self.raw(key, if value { "true" } else { "false" });
    }

    fn integer(&mut self, key: &str, value: u32) {
        self.raw(key, &value.to_string());
    }

    fn list(&mut self, key: &str, items: &[String]) {
        self.raw(key, &render_list(items));
    }

    fn object(&mut self, key: &str, child: Obj) {
        let rendered = child.render();
        self.raw(key, &rendered);
    }

    fn render(self) -> String {
        if self.entries.is_empty() {
            return "{}".into();
        }
        format!("{{\n{}\n{}}}", self.entries.join(",\n"), pad(self.level))
    }
}
