//! # Host Runtime
//!
//! The main event loop that ties everything together: a key source feeds a
//! bounded queue, every key-down runs through the console to completion, and
//! the text grid is rendered after each event that changed it.

use crate::config::{HostMode, HostRuntimeConfig};
use crate::input_script::{scancodes_for_char, InputScript, InputScriptError};
use cli_console::{DispatchOutcome, InteractiveConsole};
use console_vga::TextGrid;
use hal::{
    CpuHal, FixedBootByte, HalKeyEvent, KeyboardDevice, KeyboardTranslator, ScanCodeTable,
    SCANCODE_BACKSPACE, SCANCODE_ENTER,
};
use std::io::{self, Read, Write};
use std::sync::mpsc::{sync_channel, Receiver, SyncSender};
use std::thread;
use thiserror::Error;
use tracing::{debug, info};

/// Depth of the key queue between the key source and the loop
pub const KEY_QUEUE_DEPTH: usize = 64;

/// Host runtime error types
#[derive(Debug, Error)]
pub enum HostRuntimeError {
    #[error("Script error: {0}")]
    Script(#[from] InputScriptError),

    #[error("Sim mode needs an input script")]
    MissingScript,

    #[error("Failed to start key source: {0}")]
    KeySource(#[source] io::Error),

    #[error("Output error: {0}")]
    Output(#[from] io::Error),
}

/// Why the loop stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The key source closed and the queue drained
    InputClosed,
    /// `max_steps` key events were processed
    StepLimit,
    /// The `shutdown` command ran
    Shutdown,
}

/// Keyboard backed by the host key queue
///
/// Each queued byte is a raw Set 1 code, release bit included. The source is
/// closed once every sender is gone and the queue has drained.
pub struct ChannelKeyboard {
    queue: Receiver<u8>,
}

impl ChannelKeyboard {
    pub fn new(queue: Receiver<u8>) -> Self {
        Self { queue }
    }
}

impl KeyboardDevice for ChannelKeyboard {
    fn poll_event(&mut self) -> Option<HalKeyEvent> {
        self.queue.try_recv().ok().map(HalKeyEvent::from_raw)
    }

    fn wait_event(&mut self) -> Option<HalKeyEvent> {
        self.queue.recv().ok().map(HalKeyEvent::from_raw)
    }
}

/// Host CPU
///
/// Power-off is only recorded; the process exits once the loop returns.
#[derive(Debug, Default)]
pub struct HostCpu {
    powered_off: bool,
}

impl HostCpu {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CpuHal for HostCpu {
    fn power_off(&mut self) {
        info!("power off");
        self.powered_off = true;
    }

    fn is_powered_off(&self) -> bool {
        self.powered_off
    }
}

/// Host runtime
pub struct HostRuntime {
    /// Configuration
    config: HostRuntimeConfig,
    /// Console session drawing on the in-memory grid
    console: InteractiveConsole<TextGrid>,
    /// Key queue consumer
    keyboard: ChannelKeyboard,
    /// Release filter
    translator: KeyboardTranslator,
    /// Halt and power-off
    cpu: HostCpu,
    /// Key-down events processed
    steps: usize,
    /// Grid state at the last rendered frame
    last_frame: Option<(u64, (usize, usize))>,
}

impl HostRuntime {
    /// Creates a runtime and starts the key source the config names
    pub fn new(config: HostRuntimeConfig) -> Result<Self, HostRuntimeError> {
        let (sender, receiver) = sync_channel(KEY_QUEUE_DEPTH);

        match config.mode {
            HostMode::Sim => {
                let text = config
                    .script
                    .as_deref()
                    .ok_or(HostRuntimeError::MissingScript)?;
                let script = InputScript::from_text(text)?;
                debug!(scancodes = script.remaining(), "replaying script");
                spawn_replay(script, sender)?;
            }
            HostMode::Stdin => spawn_stdin_reader(sender)?,
        }

        Ok(Self::with_queue(config, receiver))
    }

    /// Creates a runtime fed by an existing queue
    pub fn with_queue(config: HostRuntimeConfig, queue: Receiver<u8>) -> Self {
        let boot = FixedBootByte(config.effective_boot_byte());
        let console = cli_console::bootstrap(TextGrid::new(), &boot);

        Self {
            config,
            console,
            keyboard: ChannelKeyboard::new(queue),
            translator: KeyboardTranslator::new(),
            cpu: HostCpu::new(),
            steps: 0,
            last_frame: None,
        }
    }

    /// Runs the loop, rendering frames to stdout
    pub fn run(&mut self) -> Result<StopReason, HostRuntimeError> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.run_with_output(&mut out)
    }

    /// Runs the loop, rendering frames to `out`
    pub fn run_with_output<W: Write>(
        &mut self,
        out: &mut W,
    ) -> Result<StopReason, HostRuntimeError> {
        self.render(out)?;

        let reason = loop {
            if self.config.max_steps > 0 && self.steps >= self.config.max_steps {
                break StopReason::StepLimit;
            }
            let Some(scancode) = self.next_scancode() else {
                break StopReason::InputClosed;
            };

            let outcome = self.step(scancode);
            self.render(out)?;
            if outcome.is_shutdown() {
                break StopReason::Shutdown;
            }
        };

        info!(steps = self.steps, ?reason, "host runtime stopped");
        out.flush()?;
        Ok(reason)
    }

    /// Feeds one key-down scan code through the console
    pub fn step(&mut self, scancode: u8) -> DispatchOutcome {
        self.steps += 1;
        let outcome = self.console.handle_scancode(scancode);
        if outcome.is_shutdown() {
            self.cpu.power_off();
        }
        outcome
    }

    /// Takes the next key-down, blocking while the queue is empty
    fn next_scancode(&mut self) -> Option<u8> {
        loop {
            let event = match self.keyboard.poll_event() {
                Some(event) => event,
                None => self.keyboard.wait_event()?,
            };
            if let Some(scancode) = self.translator.translate(event) {
                return Some(scancode);
            }
        }
    }

    fn render<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        let grid = self.console.sink();
        let frame = (grid.write_count(), grid.cursor());
        if self.last_frame == Some(frame) {
            return Ok(());
        }
        self.last_frame = Some(frame);

        if !self.config.quiet {
            writeln!(out, "--- step {} ---", self.steps)?;
            write!(out, "{}", grid.render())?;
        }
        Ok(())
    }

    /// Returns the number of key-down events processed
    pub fn step_count(&self) -> usize {
        self.steps
    }

    /// Key-up events dropped by the translator
    pub fn dropped_releases(&self) -> u64 {
        self.translator.dropped_releases()
    }

    pub fn is_powered_off(&self) -> bool {
        self.cpu.is_powered_off()
    }

    pub fn console(&self) -> &InteractiveConsole<TextGrid> {
        &self.console
    }

    /// The current screen contents
    pub fn screen(&self) -> &TextGrid {
        self.console.sink()
    }
}

fn spawn_replay(script: InputScript, sender: SyncSender<u8>) -> Result<(), HostRuntimeError> {
    thread::Builder::new()
        .name("key-replay".to_string())
        .spawn(move || {
            for scancode in script {
                if sender.send(scancode).is_err() {
                    break;
                }
            }
        })
        .map_err(HostRuntimeError::KeySource)?;
    Ok(())
}

fn spawn_stdin_reader(sender: SyncSender<u8>) -> Result<(), HostRuntimeError> {
    thread::Builder::new()
        .name("key-stdin".to_string())
        .spawn(move || {
            let table = ScanCodeTable::new();
            for byte in io::stdin().lock().bytes() {
                let Ok(byte) = byte else { break };
                for scancode in scancodes_for_byte(byte, &table) {
                    if sender.send(scancode).is_err() {
                        return;
                    }
                }
            }
        })
        .map_err(HostRuntimeError::KeySource)?;
    Ok(())
}

/// Scan codes for one byte typed on the host terminal
pub fn scancodes_for_byte(byte: u8, table: &ScanCodeTable) -> Vec<u8> {
    match byte {
        b'\n' => vec![SCANCODE_ENTER],
        0x08 | 0x7F => vec![SCANCODE_BACKSPACE],
        b'\r' => Vec::new(),
        _ => scancodes_for_char(char::from(byte), table).unwrap_or_else(|| {
            debug!(byte, "untypeable byte dropped");
            Vec::new()
        }),
    }
}
