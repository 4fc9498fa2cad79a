//! Tests for configuration file loading.

use super::*;
use serial_test::serial;
use std::env;
use std::fs;
use std::io;
use std::sync::{Arc, Mutex};

/// Write `contents` to a uniquely named file in the temp dir.
fn temp_config(name: &str, contents: &str) -> PathBuf {
    let path = env::temp_dir().join(format!("flexlab_test_{}_{name}.toml", std::process::id()));
    fs::write(&path, contents).expect("Failed to write test config");
    path
}

// ===== Paths =====

#[test]
fn default_config_path_contains_flexlab_config_toml() {
    let path = default_config_path().expect("Should have default path");
    let path_str = path.to_string_lossy();
    assert!(
        path_str.contains("flexlab") && path_str.ends_with("config.toml"),
        "got: {}",
        path_str
    );
}

#[test]
fn default_log_path_ends_with_flexlab_log() {
    let path = default_log_path();
    assert!(path.to_string_lossy().ends_with("flexlab.log"), "got: {:?}", path);
}

// ===== load_config_file =====

#[test]
fn load_config_file_returns_ok_none_for_missing_file() {
    let result = load_config_file("/nonexistent/path/to/config.toml");
    assert_eq!(result, Ok(None));
}

#[test]
fn load_config_file_rejects_empty_path() {
    assert!(matches!(
        load_config_file(""),
        Err(ConfigError::InvalidPath(_))
    ));
}

#[test]
fn load_config_file_parses_valid_toml() {
    let path = temp_config(
        "valid",
        r#"
viewport = "tablet"
output_format = "markup"
mode = "grid"
log_file_path = "/tmp/custom.log"
"#,
    );

    let config = load_config_file(&path)
        .expect("valid TOML")
        .expect("file exists");

    assert_eq!(config.viewport, Some(ViewportKind::Tablet));
    assert_eq!(config.output_format, Some(OutputFormat::Markup));
    assert_eq!(config.mode, Some(LayoutMode::Grid));
    assert_eq!(config.log_file_path, Some(PathBuf::from("/tmp/custom.log")));

    fs::remove_file(path).ok();
}

#[test]
fn load_config_file_handles_partial_config() {
    let path = temp_config("partial", "viewport = \"mobile\"\n# rest omitted\n");

    let config = load_config_file(&path).unwrap().unwrap();
    assert_eq!(config.viewport, Some(ViewportKind::Mobile));
    assert_eq!(config.output_format, None);
    assert_eq!(config.mode, None);

    fs::remove_file(path).ok();
}

#[test]
fn load_config_file_returns_error_for_invalid_toml() {
    let path = temp_config("invalid", "this is not valid TOML ][}{");

    match load_config_file(&path) {
        Err(ConfigError::ParseError { path: p, reason: _ }) => assert_eq!(p, path),
        other => panic!("Expected ParseError, got {:?}", other),
    }

    fs::remove_file(path).ok();
}

#[test]
fn unknown_keys_are_rejected() {
    let path = temp_config("unknown", "theme = \"dark\"\n");
    let result = load_config_file(&path);
    assert!(matches!(result, Err(ConfigError::ParseError { .. })), "{result:?}");
    fs::remove_file(path).ok();
}

#[test]
fn unknown_enum_value_is_a_parse_error() {
    let path = temp_config("badviewport", "viewport = \"watch\"\n");
    assert!(matches!(
        load_config_file(&path),
        Err(ConfigError::ParseError { .. })
    ));
    fs::remove_file(path).ok();
}

#[test]
fn parse_error_message_names_the_file() {
    let err = ConfigError::ParseError {
        path: PathBuf::from("/etc/flexlab.toml"),
        reason: "expected `=`".to_string(),
    };
    insta::assert_snapshot!(err.to_string(), @"Invalid TOML in /etc/flexlab.toml: expected `=`");
}

// ===== load_config_with_precedence =====

#[test]
#[serial(flexlab_env)]
fn explicit_path_wins_over_env() {
    let explicit = temp_config("explicit", "mode = \"grid\"\n");
    let from_env = temp_config("fromenv", "mode = \"flex\"\n");
    env::set_var(CONFIG_ENV, &from_env);

    let config = load_config_with_precedence(Some(explicit.clone()))
        .unwrap()
        .unwrap();
    assert_eq!(config.mode, Some(LayoutMode::Grid));

    env::remove_var(CONFIG_ENV);
    fs::remove_file(explicit).ok();
    fs::remove_file(from_env).ok();
}

#[test]
#[serial(flexlab_env)]
fn env_path_is_used_without_explicit_path() {
    let from_env = temp_config("envonly", "output_format = \"markup\"\n");
    env::set_var(CONFIG_ENV, &from_env);

    let config = load_config_with_precedence(None).unwrap().unwrap();
    assert_eq!(config.output_format, Some(OutputFormat::Markup));

    env::remove_var(CONFIG_ENV);
    fs::remove_file(from_env).ok();
}

// ===== Precedence chain =====

#[test]
fn merge_without_file_yields_defaults() {
    let resolved = merge_config(None);
    assert_eq!(resolved, ResolvedConfig::default());
    assert_eq!(resolved.viewport, ViewportKind::Desktop);
    assert_eq!(resolved.output_format, OutputFormat::Css);
    assert_eq!(resolved.mode, LayoutMode::Flex);
}

#[test]
fn merge_keeps_defaults_for_missing_fields() {
    let file = ConfigFile {
        viewport: Some(ViewportKind::Mobile),
        ..ConfigFile::default()
    };
    let resolved = merge_config(Some(file));
    assert_eq!(resolved.viewport, ViewportKind::Mobile);
    assert_eq!(resolved.log_file_path, default_log_path());
}

#[test]
#[serial(flexlab_env)]
fn env_overrides_file_values() {
    env::set_var(VIEWPORT_ENV, "tablet");
    env::set_var(FORMAT_ENV, "Tailwind");

    let file = ConfigFile {
        viewport: Some(ViewportKind::Mobile),
        ..ConfigFile::default()
    };
    let (resolved, ignored) = apply_env_overrides(merge_config(Some(file)));
    assert!(ignored.is_empty());
    assert_eq!(resolved.viewport, ViewportKind::Tablet);
    assert_eq!(resolved.output_format, OutputFormat::Markup);

    env::remove_var(VIEWPORT_ENV);
    env::remove_var(FORMAT_ENV);
}

#[test]
#[serial(flexlab_env)]
fn invalid_env_values_are_ignored() {
    env::set_var(VIEWPORT_ENV, "watch");
    env::set_var(FORMAT_ENV, "bogus");

    let (resolved, ignored) = apply_env_overrides(ResolvedConfig::default());
    assert_eq!(resolved.viewport, ViewportKind::Desktop);
    assert_eq!(resolved.output_format, OutputFormat::Css);
    assert_eq!(
        ignored,
        vec![
            IgnoredEnvValue {
                var: VIEWPORT_ENV,
                value: "watch".to_string(),
            },
            IgnoredEnvValue {
                var: FORMAT_ENV,
                value: "bogus".to_string(),
            },
        ]
    );

    env::remove_var(VIEWPORT_ENV);
    env::remove_var(FORMAT_ENV);
}

/// `io::Write` into a buffer shared with the test.
#[derive(Clone, Default)]
struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl io::Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().expect("buffer lock").extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn ignored_env_value_logs_a_warning() {
    // GIVEN: a subscriber writing into a buffer
    let buffer = SharedBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .finish();

    // WHEN: an ignored value is logged
    let ignored = IgnoredEnvValue {
        var: FORMAT_ENV,
        value: "bogus".to_string(),
    };
    tracing::subscriber::with_default(subscriber, || ignored.log());

    // THEN: the warning names the variable and the value
    let output = String::from_utf8(buffer.0.lock().expect("buffer lock").clone()).expect("utf8");
    assert!(output.contains("WARN"), "{output}");
    assert!(output.contains("FLEXLAB_FORMAT"), "{output}");
    assert!(output.contains("bogus"), "{output}");
}

#[test]
fn ignored_env_value_display_names_the_variable() {
    let ignored = IgnoredEnvValue {
        var: VIEWPORT_ENV,
        value: "watch".to_string(),
    };
    insta::assert_snapshot!(ignored.to_string(), @r#"ignoring FLEXLAB_VIEWPORT="watch""#);
}

#[test]
fn tailwind_alias_is_accepted_in_config_file() {
    let path = temp_config("tailwind", "output_format = \"tailwind\"\n");
    let config = load_config_file(&path).expect("valid config").expect("file exists");
    assert_eq!(config.output_format, Some(OutputFormat::Markup));
    fs::remove_file(path).ok();

    let parsed: ConfigFile = toml::from_str("output_format = \"markup\"").expect("canonical name");
    assert_eq!(parsed.output_format, Some(OutputFormat::Markup));
}

#[test]
fn cli_overrides_win() {
    let base = ResolvedConfig {
        viewport: ViewportKind::Tablet,
        ..ResolvedConfig::default()
    };
    let resolved = apply_cli_overrides(
        base,
        Some(ViewportKind::Mobile),
        None,
        Some(LayoutMode::Grid),
    );
    assert_eq!(resolved.viewport, ViewportKind::Mobile);
    assert_eq!(resolved.output_format, OutputFormat::Css);
    assert_eq!(resolved.mode, LayoutMode::Grid);
}

#[test]
fn value_names_are_case_insensitive() {
    assert_eq!(parse_viewport(" Mobile "), Some(ViewportKind::Mobile));
    assert_eq!(parse_format("CSS"), Some(OutputFormat::Css));
    assert_eq!(parse_mode("GRID"), Some(LayoutMode::Grid));
    assert_eq!(parse_mode("table"), None);
}
