//! Shared test fixtures.

use crate::schema::BuildConfig;

/// A config with every field moved off its default, for round-trip tests.
pub fn sample_config() -> BuildConfig {
    let mut config = BuildConfig::default();

    config.project.name = "sensor-tool".into();
    config.project.output_type = "dll".into();
    config.project.architecture = "arm64".into();
    config.project.output_dir = "out".into();

    config.compiler.standard = "c++23".into();
    config.compiler.runtime = "static".into();
    config.compiler.floating_point = "fast".into();
    config.compiler.calling_convention = "stdcall".into();
    config.compiler.char_set = "mbcs".into();
    config.compiler.defines = vec!["VC_EXTRALEAN".into(), "NOMINMAX".into()];
    config.compiler.exceptions = false;
    config.compiler.rtti = false;
    config.compiler.parallel = false;
    config.compiler.function_level_linking = false;
    config.compiler.string_pooling = false;
    config.compiler.warning_level = 3;
    config.compiler.warnings_as_errors = true;
    config.compiler.disabled_warnings = vec!["4100".into(), "4201".into()];
    config.compiler.permissive = true;
    config.compiler.buffer_checks = false;
    config.compiler.control_flow_guard = true;

    config.linker.libraries = vec!["kernel32.lib".into(), "user32.lib".into()];
    config.linker.library_paths = vec!["libs".into()];
    config.linker.subsystem = "windows".into();
    config.linker.entry_point = "wWinMain".into();
    config.linker.def_file = "exports.def".into();
    config.linker.stack_size = 2_097_152;
    config.linker.heap_size = 1_048_576;
    config.linker.map_file = true;
    config.linker.debug_info = false;
    config.linker.aslr = false;
    config.linker.dep = false;
    config.linker.control_flow_guard = true;
    config.linker.lto = true;

    config.sources.include_dirs = vec!["inc".into()];
    config.sources.source_dirs = vec!["code".into()];
    config.sources.exclude_patterns = vec!["*_test.cpp".into()];
    config.sources.external_dirs = vec!["third_party".into()];

    config.resources.enabled = true;
    config.resources.files = vec!["app.rc".into()];

    config.pch.enabled = true;
    config.pch.header = "pch.h".into();
    config.pch.source = "pch.cpp".into();

    config.driver.enabled = true;
    config.driver.driver_type = "kmdf".into();
    config.driver.entry_point = "DriverMain".into();
    config.driver.target_os = "win11".into();
    config.driver.minifilter = true;

    config
}
