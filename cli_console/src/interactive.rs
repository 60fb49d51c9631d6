//! Interactive console session
//!
//! The session owns every piece of console state: the line editor, the token
//! set, the search template, the case and scan code tables, and the sink it
//! draws on. Each key press runs to completion before the next one.

use console_vga::ConsoleSink;
use core_types::{CaseTables, Line, SCREEN_ROWS};
use editor_core::{EditorOutcome, Key, LineEditor};
use hal::ScanCodeTable;
use pattern_engine::{Algorithm, CompileError, SearchError, SearchOutcome, Template};
use tracing::{debug, info, warn};

use crate::commands::{Command, DispatchOutcome, TestSuite};
use crate::fixtures::{BASE_FIXTURES, SEARCH_FIXTURES, SEPARATOR};
use crate::tokenizer::TokenSet;
use crate::transforms::Transform;

const RULE: &str = "---------------------------";

/// Lines printed by `info` and at boot
pub const BANNER: [&str; 5] = [
    RULE,
    "Welcome to StringOS",
    "Text console with substring search",
    "Commands: info upcase downcase titlize template search clear tests shutdown",
    RULE,
];

/// Interactive console
pub struct InteractiveConsole<S: ConsoleSink> {
    editor: LineEditor,
    tokens: TokenSet,
    template: Template,
    cases: CaseTables,
    scan_table: ScanCodeTable,
    sink: S,
}

impl<S: ConsoleSink> InteractiveConsole<S> {
    /// Creates a session drawing on `sink`, with no template loaded
    pub fn new(sink: S, algorithm: Algorithm) -> Self {
        Self {
            editor: LineEditor::new(),
            tokens: TokenSet::new(),
            template: Template::new(algorithm),
            cases: CaseTables::new(),
            scan_table: ScanCodeTable::new(),
            sink,
        }
    }

    /// Clears the screen and prints the banner on row 0
    pub fn boot(&mut self) {
        self.clear_all();
        self.print_banner();
        info!(algorithm = %self.template.algorithm(), "console ready");
    }

    /// Handles one key-down scan code
    pub fn handle_scancode(&mut self, scancode: u8) -> DispatchOutcome {
        let key = Key::from_scancode(scancode, &self.scan_table);
        self.handle_key(key)
    }

    /// Handles one decoded key
    pub fn handle_key(&mut self, key: Key) -> DispatchOutcome {
        match self.editor.apply_key(key, &self.cases) {
            EditorOutcome::Ignored | EditorOutcome::CapsToggled => DispatchOutcome::Continue,
            EditorOutcome::Changed => {
                self.render_line();
                DispatchOutcome::Continue
            }
            EditorOutcome::Commit(line) => {
                let outcome = self.handle_line(&line);
                if outcome == DispatchOutcome::Continue {
                    self.render_line();
                }
                outcome
            }
        }
    }

    /// Tokenizes a committed line and runs its command
    pub fn handle_line(&mut self, line: &Line) -> DispatchOutcome {
        debug!(line = %line, row = self.editor.row(), "line committed");
        let parsed = self.tokens.parse_line(line.as_str());

        if self.editor.row() >= SCREEN_ROWS - 1 {
            self.clear_all();
        }

        match parsed {
            Ok(()) => self.dispatch(),
            Err(e) => {
                warn!(error = %e, "line rejected");
                self.print_line("Too many tokens...");
                DispatchOutcome::Continue
            }
        }
    }

    /// Runs the command named by the current token set
    pub fn dispatch(&mut self) -> DispatchOutcome {
        let Some(command) = Command::from_token(self.tokens.token(0)) else {
            self.new_line();
            return DispatchOutcome::Continue;
        };
        debug!(
            command = command.name(),
            args = self.tokens.count().saturating_sub(1),
            "dispatch"
        );

        match command {
            Command::Info => self.print_banner(),
            Command::Upcase => self.run_transform(Transform::Upcase),
            Command::Downcase => self.run_transform(Transform::Downcase),
            Command::Titlize => self.run_transform(Transform::Titlize),
            Command::Template => self.create_template(),
            Command::Search => self.search(),
            Command::Clear => self.clear_all(),
            Command::Tests => match TestSuite::from_token(self.tokens.token(1)) {
                Some(TestSuite::Base) => self.run_base_fixtures(),
                Some(TestSuite::Search) => self.run_search_fixtures(),
                None => {}
            },
            Command::Shutdown => {
                info!("shutdown requested");
                return DispatchOutcome::Shutdown;
            }
        }
        DispatchOutcome::Continue
    }

    // Output routines

    /// Writes `text` on the current row and moves to the next one
    pub fn print_line(&mut self, text: &str) {
        self.sink.write_line(self.editor.row(), text);
        self.new_line();
        self.sink.set_cursor(self.editor.row(), 0);
    }

    /// Resets the line and advances the row
    pub fn new_line(&mut self) {
        self.editor.new_line();
    }

    /// Blank screen, empty line, row 0
    pub fn clear_all(&mut self) {
        self.sink.clear_screen();
        self.editor.reset();
        self.sink.set_cursor(0, 0);
    }

    /// Redraws the line being edited in place
    fn render_line(&mut self) {
        let row = self.editor.row();
        self.sink.write_line(row, self.editor.content().as_str());
        self.sink.set_cursor(row, self.editor.cursor());
    }

    fn print_banner(&mut self) {
        for line in BANNER {
            self.print_line(line);
        }
    }

    // Commands

    fn run_transform(&mut self, transform: Transform) {
        let lines = transform.apply(self.tokens.args(), &self.cases);
        self.new_line();
        for line in &lines {
            self.print_line(line);
        }
    }

    fn create_template(&mut self) {
        let pattern = self.tokens.token(1).to_string();
        match self.template.compile(&pattern) {
            Ok(()) => {
                self.new_line();
                self.print_line(&pattern);
                self.print_line(&format!("Template '{pattern}' loaded."));
                if self.template.algorithm() == Algorithm::BadCharacter {
                    let shifts = self.template.describe_shifts();
                    self.print_line(&shifts);
                }
            }
            Err(CompileError::EmptyPattern) => self.print_line("Template can not be empty..."),
            Err(e) => {
                warn!(error = %e, "template rejected");
                self.print_line(&format!("{e}..."));
            }
        }
    }

    fn search(&mut self) {
        let text = self.tokens.token(1).to_string();
        let result = self.template.search(&text);
        let pattern = self.template.pattern().to_string();
        self.report_search(&pattern, result);
    }

    fn report_search(&mut self, pattern: &str, result: Result<SearchOutcome, SearchError>) {
        match result {
            Ok(SearchOutcome::Found(pos)) => {
                self.new_line();
                self.print_line(&format!("Found '{pattern}' at pos: {pos}"));
            }
            Ok(SearchOutcome::NotFound) => {
                self.new_line();
                self.print_line(&format!("Not Found '{pattern}'"));
            }
            Err(SearchError::TemplateNotLoaded) => self.print_line("Template was not loaded..."),
            Err(SearchError::PatternTooLarge { .. }) => self.print_line("Template size too big..."),
        }
    }

    fn run_base_fixtures(&mut self) {
        for fixture in BASE_FIXTURES {
            self.print_line(&fixture.input_line());
            self.print_line(&fixture.expected_line());
            let lines = fixture.run(&self.cases);
            self.new_line();
            for line in &lines {
                self.print_line(line);
            }
            self.print_line(SEPARATOR);
        }
    }

    fn run_search_fixtures(&mut self) {
        for fixture in SEARCH_FIXTURES {
            self.print_line(&fixture.header_line());
            self.print_line(&fixture.input_line());
            self.print_line(&fixture.expected_line());
            match fixture.template() {
                Ok(scratch) => {
                    let result = scratch.search(fixture.text);
                    self.report_search(scratch.pattern(), result);
                }
                Err(e) => self.print_line(&format!("{e}...")),
            }
            self.print_line(SEPARATOR);
        }
    }

    // Public accessors for hosts/testing

    pub fn editor(&self) -> &LineEditor {
        &self.editor
    }

    pub fn tokens(&self) -> &TokenSet {
        &self.tokens
    }

    pub fn template(&self) -> &Template {
        &self.template
    }

    pub fn algorithm(&self) -> Algorithm {
        self.template.algorithm()
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}
