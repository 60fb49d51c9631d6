//! Integration tests for the stringosd host runtime

use cli_console::BANNER;
use pattern_engine::Algorithm;
use std::io::Write;
use stringosd::{ConfigOverrides, HostMode, HostRuntime, HostRuntimeConfig, StopReason};

fn run_script(script: &str, algorithm: Algorithm) -> HostRuntime {
    let config = HostRuntimeConfig {
        mode: HostMode::Sim,
        script: Some(script.to_string()),
        algorithm: Some(algorithm),
        quiet: true,
        ..Default::default()
    };
    let mut runtime = HostRuntime::new(config).unwrap();
    runtime.run_with_output(&mut Vec::new()).unwrap();
    runtime
}

#[test]
fn test_scripted_search_session() {
    let script = r#"
        "template ab"
        Enter
        "search aaaaaabaab"
        Enter
    "#;

    let runtime = run_script(script, Algorithm::Naive);
    let screen = runtime.screen();

    // Banner occupies rows 0..5, the command sits on row 5
    assert_eq!(screen.row_text(5), "template ab");
    assert_eq!(screen.row_text(6), "ab");
    assert_eq!(screen.row_text(7), "Template 'ab' loaded.");
    assert_eq!(screen.row_text(8), "search aaaaaabaab");
    assert_eq!(screen.row_text(9), "Found 'ab' at pos: 5");
}

#[test]
fn test_bad_character_template_lists_shifts() {
    let runtime = run_script("\"template ab\"\nEnter", Algorithm::BadCharacter);
    let screen = runtime.screen();
    assert_eq!(screen.row_text(7), "Template 'ab' loaded.");
    assert_eq!(screen.row_text(8), "a:1 b:1");
}

#[test]
fn test_search_without_template() {
    let runtime = run_script("\"search abc\"\nEnter", Algorithm::BadCharacter);
    assert_eq!(runtime.screen().row_text(5), "Template was not loaded...");
}

#[test]
fn test_caps_lock_session() {
    let runtime = run_script("\"downcase MiXeD\"\nEnter", Algorithm::Naive);
    let screen = runtime.screen();
    assert_eq!(screen.row_text(5), "downcase MiXeD");
    assert_eq!(screen.row_text(6), "mixed");
    assert!(!runtime.console().editor().caps());
}

#[test]
fn test_shutdown_stops_before_remaining_keys() {
    let script = r#"
        "shutdown"
        Enter
        "upcase late"
        Enter
    "#;
    let config = HostRuntimeConfig {
        script: Some(script.to_string()),
        quiet: true,
        ..Default::default()
    };
    let mut runtime = HostRuntime::new(config).unwrap();
    let reason = runtime.run_with_output(&mut Vec::new()).unwrap();

    assert_eq!(reason, StopReason::Shutdown);
    assert!(runtime.is_powered_off());
    assert!(!runtime.screen().render().contains("LATE"));
}

#[test]
fn test_demo_script_runs_to_shutdown() {
    let script = include_str!("../scripts/demo.keys");
    let config = HostRuntimeConfig {
        script: Some(script.to_string()),
        quiet: true,
        ..Default::default()
    };
    let mut runtime = HostRuntime::new(config).unwrap();
    let reason = runtime.run_with_output(&mut Vec::new()).unwrap();
    assert_eq!(reason, StopReason::Shutdown);
}

#[test]
fn test_rendered_frames_show_banner() {
    let config = HostRuntimeConfig {
        script: Some("a".to_string()),
        ..Default::default()
    };
    let mut runtime = HostRuntime::new(config).unwrap();
    let mut out = Vec::new();
    runtime.run_with_output(&mut out).unwrap();

    let text = String::from_utf8(out).unwrap();
    assert!(text.starts_with("--- step 0 ---\n"));
    assert!(text.contains(BANNER[1]));
    assert!(text.contains("--- step 1 ---"));
}

#[test]
fn test_config_file_with_overrides() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{ "script": "\"template ab\"\nEnter", "boot_byte": 1, "quiet": true }}"#
    )
    .unwrap();

    let base = HostRuntimeConfig::from_file(file.path()).unwrap();
    assert_eq!(base.effective_algorithm(), Algorithm::Naive);

    let overrides = ConfigOverrides {
        algorithm: Some(Algorithm::BadCharacter),
        ..Default::default()
    };
    let config = overrides.apply(base);

    let mut runtime = HostRuntime::new(config).unwrap();
    runtime.run_with_output(&mut Vec::new()).unwrap();
    assert_eq!(runtime.console().algorithm(), Algorithm::BadCharacter);
    assert!(runtime.console().template().is_loaded());
}
