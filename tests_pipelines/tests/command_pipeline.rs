//! Command pipeline integration tests
//!
//! Committed lines flow through tokenizer, dispatcher, pattern engine and
//! transforms, and their output is read back from the screen.

use cli_console::fixtures::SEPARATOR;
use cli_console::{DispatchOutcome, BANNER};
use pattern_engine::Algorithm;
use stringosd::{HostMode, HostRuntime, HostRuntimeConfig};
use tests_pipelines::KeyPipeline;

const PROMPT_ROW: usize = BANNER.len();

#[test]
fn test_template_and_search_with_both_algorithms() {
    for boot_byte in [0u8, 1] {
        let mut pipeline = KeyPipeline::boot(boot_byte);
        pipeline.enter("template needle");
        pipeline.enter("search haystackneedlehay");
        pipeline.enter("search hay");

        let screen = pipeline.screen().render();
        assert!(screen.contains("Template 'needle' loaded."), "{screen}");
        assert!(screen.contains("Found 'needle' at pos: 8"), "{screen}");
        assert!(screen.contains("Template size too big..."), "{screen}");
    }
}

#[test]
fn test_boot_byte_controls_shift_listing() {
    let mut naive = KeyPipeline::boot(1);
    naive.enter("template abc");
    assert_eq!(naive.console().algorithm(), Algorithm::Naive);
    assert_eq!(naive.screen().row_text(PROMPT_ROW + 3), "");

    let mut bad_character = KeyPipeline::boot(0);
    bad_character.enter("template abc");
    assert_eq!(
        bad_character.screen().row_text(PROMPT_ROW + 3),
        "a:2 b:1 c:2"
    );
}

#[test]
fn test_search_reports_not_found() {
    let mut pipeline = KeyPipeline::boot(1);
    pipeline.enter("template aba");
    pipeline.enter("search aaaaaab");
    assert!(pipeline.screen().render().contains("Not Found 'aba'"));
}

#[test]
fn test_search_before_template_overwrites_command_row() {
    let mut pipeline = KeyPipeline::boot(0);
    pipeline.enter("search abc");
    assert_eq!(
        pipeline.screen().row_text(PROMPT_ROW),
        "Template was not loaded..."
    );
    assert!(!pipeline.console().template().is_loaded());
}

#[test]
fn test_empty_template_is_rejected() {
    let mut pipeline = KeyPipeline::boot(0);
    pipeline.enter("template");
    assert_eq!(
        pipeline.screen().row_text(PROMPT_ROW),
        "Template can not be empty..."
    );
    assert!(!pipeline.console().template().is_loaded());
}

#[test]
fn test_too_many_tokens() {
    let mut pipeline = KeyPipeline::boot(0);
    pipeline.enter(&" ".repeat(30));
    assert_eq!(
        pipeline.screen().row_text(PROMPT_ROW),
        "Too many tokens..."
    );
    assert!(pipeline.console().tokens().is_empty());
}

#[test]
fn test_transforms_through_keyboard() {
    let mut pipeline = KeyPipeline::boot(0);
    pipeline.enter("upcase ab c-d");
    assert_eq!(pipeline.screen().row_text(PROMPT_ROW + 1), "AB");
    assert_eq!(pipeline.screen().row_text(PROMPT_ROW + 2), "C-D");

    pipeline.enter("downcase XyZ");
    assert_eq!(pipeline.screen().row_text(PROMPT_ROW + 4), "xyz");

    pipeline.enter("titlize hello big world");
    assert_eq!(
        pipeline.screen().row_text(PROMPT_ROW + 6),
        "Hello big world"
    );
}

#[test]
fn test_tests_base_suite() {
    let mut pipeline = KeyPipeline::boot(0);
    pipeline.enter("tests base");
    let screen = pipeline.screen();

    assert_eq!(
        screen.row_text(PROMPT_ROW),
        "Test Upcase 1: [Input]   -> AbCaByuYuOpQ"
    );
    assert_eq!(screen.row_text(PROMPT_ROW + 3), "ABCABYUYUOPQ");
    assert_eq!(screen.row_text(PROMPT_ROW + 4), SEPARATOR);
    assert_eq!(screen.row_text(PROMPT_ROW + 8), "abcabyu-=:!ewqewq");
    assert_eq!(screen.row_text(PROMPT_ROW + 13), "AbC [byu-= e:!ew Eqewq");
}

#[test]
fn test_tests_search_suite_keeps_session_template() {
    let mut pipeline = KeyPipeline::boot(1);
    pipeline.enter("clear");
    pipeline.enter("tests search");
    let screen = pipeline.screen();

    assert_eq!(screen.row_text(0), "Template: 'ab' | algorithm: naive");
    assert_eq!(screen.row_text(4), "Found 'ab' at pos: 5");
    assert_eq!(
        screen.row_text(6),
        "Template: 'ab' | algorithm: bad-character"
    );
    assert_eq!(screen.row_text(10), "Found 'ab' at pos: 5");
    assert_eq!(screen.row_text(16), "Not Found 'aba'");
    assert_eq!(screen.row_text(22), "Not Found 'aba'");
    assert!(!pipeline.console().template().is_loaded());
}

#[test]
fn test_unknown_tests_suite_prints_nothing() {
    let mut pipeline = KeyPipeline::boot(0);
    pipeline.enter("tests nope");
    assert_eq!(pipeline.screen().row_text(PROMPT_ROW), "tests nope");
    assert_eq!(pipeline.console().editor().row(), PROMPT_ROW);
}

#[test]
fn test_clear_then_info() {
    let mut pipeline = KeyPipeline::boot(0);
    pipeline.enter("upcase x");
    pipeline.enter("clear");
    assert!(pipeline.screen().is_blank());

    pipeline.enter("info");
    for (row, line) in BANNER.iter().enumerate() {
        assert_eq!(pipeline.screen().row_text(row), *line);
    }
}

#[test]
fn test_shutdown() {
    let mut pipeline = KeyPipeline::boot(0);
    assert_eq!(pipeline.enter("shutdownx"), DispatchOutcome::Continue);
    assert_eq!(pipeline.enter("shutdown"), DispatchOutcome::Shutdown);
    assert_eq!(pipeline.last_outcome(), Some(DispatchOutcome::Shutdown));
}

#[test]
fn test_host_script_matches_keyboard_pipeline() {
    let lines = ["template ab", "search aaaaaabaab", "titlize hello World"];

    let mut pipeline = KeyPipeline::boot(0);
    for line in lines {
        pipeline.enter(line);
    }

    let script: String = lines
        .iter()
        .map(|line| format!("\"{line}\"\nEnter\n"))
        .collect();
    let config = HostRuntimeConfig {
        mode: HostMode::Sim,
        script: Some(script),
        quiet: true,
        ..Default::default()
    };
    let mut runtime = HostRuntime::new(config).unwrap();
    runtime.run_with_output(&mut Vec::new()).unwrap();

    assert_eq!(runtime.screen().render(), pipeline.screen().render());
    assert_eq!(
        runtime.console().editor().snapshot(),
        pipeline.console().editor().snapshot()
    );
}
