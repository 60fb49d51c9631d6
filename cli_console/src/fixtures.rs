//! Built-in fixtures for `tests base` and `tests search`
//!
//! Fixtures print their input, the expected output and the actual output
//! for visual comparison on the console.

use core_types::CaseTables;
use pattern_engine::{Algorithm, CompileError, Template};

use crate::transforms::Transform;

/// Line printed after every fixture
pub const SEPARATOR: &str = "----------------";

/// A transform applied to literal arguments
#[derive(Debug, Clone, Copy)]
pub struct TransformFixture {
    pub number: usize,
    pub transform: Transform,
    pub args: &'static [&'static str],
    pub expected: &'static str,
}

impl TransformFixture {
    pub fn input_line(&self) -> String {
        format!(
            "Test {} {}: [Input]   -> {}",
            self.transform.name(),
            self.number,
            self.args.join(" ")
        )
    }

    pub fn expected_line(&self) -> String {
        format!(
            "Test {} {}: [Exp Out] -> {}",
            self.transform.name(),
            self.number,
            self.expected
        )
    }

    pub fn run(&self, cases: &CaseTables) -> Vec<String> {
        self.transform.apply(self.args.iter().copied(), cases)
    }
}

/// A search against a literal text with its own template
#[derive(Debug, Clone, Copy)]
pub struct SearchFixture {
    pub number: usize,
    pub pattern: &'static str,
    pub algorithm: Algorithm,
    pub text: &'static str,
    pub expected: Option<usize>,
}

impl SearchFixture {
    pub fn header_line(&self) -> String {
        format!(
            "Template: '{}' | algorithm: {}",
            self.pattern, self.algorithm
        )
    }

    pub fn input_line(&self) -> String {
        format!("Test Search {}: [Input]   -> {}", self.number, self.text)
    }

    pub fn expected_line(&self) -> String {
        let expected = match self.expected {
            Some(pos) => format!("pos: {pos}"),
            None => "Not found".to_string(),
        };
        format!("Test Search {}: [Exp Out] -> {}", self.number, expected)
    }

    /// Scratch template, independent of the session's template
    pub fn template(&self) -> Result<Template, CompileError> {
        Template::compiled(self.pattern, self.algorithm)
    }
}

pub const BASE_FIXTURES: [TransformFixture; 3] = [
    TransformFixture {
        number: 1,
        transform: Transform::Upcase,
        args: &["AbCaByuYuOpQ"],
        expected: "ABCABYUYUOPQ",
    },
    TransformFixture {
        number: 1,
        transform: Transform::Downcase,
        args: &["AbCaByu-=:!ewqEWQ"],
        expected: "abcabyu-=:!ewqewq",
    },
    TransformFixture {
        number: 1,
        transform: Transform::Titlize,
        args: &["abC", "[byu-=", "e:!ew", "Eqewq"],
        expected: "AbC [byu-= e:!ew Eqewq",
    },
];

pub const SEARCH_FIXTURES: [SearchFixture; 4] = [
    SearchFixture {
        number: 1,
        pattern: "ab",
        algorithm: Algorithm::Naive,
        text: "aaaaaabaab",
        expected: Some(5),
    },
    SearchFixture {
        number: 2,
        pattern: "ab",
        algorithm: Algorithm::BadCharacter,
        text: "aaaaaabaab",
        expected: Some(5),
    },
    SearchFixture {
        number: 3,
        pattern: "aba",
        algorithm: Algorithm::Naive,
        text: "aaaaaab",
        expected: None,
    },
    SearchFixture {
        number: 4,
        pattern: "aba",
        algorithm: Algorithm::BadCharacter,
        text: "aaaaaab",
        expected: None,
    },
];
