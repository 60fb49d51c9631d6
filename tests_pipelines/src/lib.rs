//! # Pipeline Integration Tests
//!
//! End-to-end harness for the keyboard-to-screen pipeline:
//! raw Set 1 byte → [`HalKeyEvent`] → [`KeyboardTranslator`] → [`InteractiveConsole`] → sink
//!
//! ## Test Philosophy
//!
//! - **Hardware-shaped input**: Keys arrive as make and break codes
//! - **Screen is the oracle**: Assertions read rows back from the grid
//! - **One key at a time**: Every byte runs to completion before the next

use cli_console::{DispatchOutcome, InteractiveConsole};
use console_vga::{ConsoleSink, TextGrid};
use hal::keyboard::RELEASE_BIT;
use hal::{
    FixedBootByte, HalKeyEvent, KeyboardTranslator, ScanCodeTable, SCANCODE_BACKSPACE,
    SCANCODE_CAPS_LOCK, SCANCODE_ENTER,
};

/// A booted console fed through the keyboard translator
pub struct KeyPipeline<S: ConsoleSink = TextGrid> {
    translator: KeyboardTranslator,
    table: ScanCodeTable,
    console: InteractiveConsole<S>,
    last_outcome: Option<DispatchOutcome>,
}

impl KeyPipeline<TextGrid> {
    /// Boots a console on an in-memory grid
    pub fn boot(boot_byte: u8) -> Self {
        Self::boot_on(TextGrid::new(), boot_byte)
    }

    pub fn screen(&self) -> &TextGrid {
        self.console.sink()
    }
}

impl<S: ConsoleSink> KeyPipeline<S> {
    /// Boots a console drawing on `sink`
    pub fn boot_on(sink: S, boot_byte: u8) -> Self {
        Self {
            translator: KeyboardTranslator::new(),
            table: ScanCodeTable::new(),
            console: cli_console::bootstrap(sink, &FixedBootByte(boot_byte)),
            last_outcome: None,
        }
    }

    /// Feeds one raw byte as the keyboard controller would deliver it
    pub fn feed_raw(&mut self, byte: u8) -> Option<DispatchOutcome> {
        let scancode = self.translator.translate(HalKeyEvent::from_raw(byte))?;
        let outcome = self.console.handle_scancode(scancode);
        self.last_outcome = Some(outcome);
        Some(outcome)
    }

    /// Make code followed by break code
    pub fn press(&mut self, scancode: u8) -> Option<DispatchOutcome> {
        let outcome = self.feed_raw(scancode);
        self.feed_raw(scancode | RELEASE_BIT);
        outcome
    }

    /// Types `text`, toggling Caps Lock around upper-case letters
    ///
    /// Characters with no key on the layout are skipped.
    pub fn type_text(&mut self, text: &str) {
        for byte in text.bytes() {
            let upper = byte.is_ascii_uppercase();
            let Some(code) = self.table.scancode_for(byte.to_ascii_lowercase()) else {
                continue;
            };
            if upper {
                self.press(SCANCODE_CAPS_LOCK);
            }
            self.press(code);
            if upper {
                self.press(SCANCODE_CAPS_LOCK);
            }
        }
    }

    /// Types `line` and presses Enter
    pub fn enter(&mut self, line: &str) -> DispatchOutcome {
        self.type_text(line);
        self.press(SCANCODE_ENTER).unwrap_or(DispatchOutcome::Continue)
    }

    pub fn backspace(&mut self) {
        self.press(SCANCODE_BACKSPACE);
    }

    pub fn console(&self) -> &InteractiveConsole<S> {
        &self.console
    }

    pub fn into_sink(self) -> S {
        self.console.into_sink()
    }

    pub fn last_outcome(&self) -> Option<DispatchOutcome> {
        self.last_outcome
    }

    pub fn dropped_releases(&self) -> u64 {
        self.translator.dropped_releases()
    }
}
