//! # TUI Adapter
//!
//! Draws the shell, decodes keystrokes, and routes them to the widgets.
//!
//! ## Event Loop
//!
//! Strictly one keystroke per frame, all on one thread:
//!
//! ```text
//! ┌─▶ clear ─▶ title ─▶ list ─▶ input ─▶ flush
//! │                                        │
//! │                              read_symbol (blocks)
//! │                                        │
//! └──────── Shell::dispatch ◀──────────────┘
//!             ├─ Quit        → leave loop
//!             ├─ Submit      → generator (blocks) → append reply, clear input
//!             └─ OpenDetail  → detail view, wait for any byte
//! ```
//!
//! Routing lives in [`Shell::dispatch`], which only mutates widget state and
//! returns an [`Effect`]. The loop performs the effect. A failed read ends
//! the loop the same way `q` does.
//!
//! There is no timeout anywhere: a generator call that never returns
//! freezes the screen until it does.
//!
//! ## Screen Layout
//!
//! ```text
//! row 1          title bar
//! row 3..3+h     list window (h = list height)
//! row 3+h+4      input line
//! ```

mod component;
pub mod components;
pub mod event;

use std::io::{self, Write};
use std::sync::Arc;

use log::{debug, info, warn};

use crate::core::config::ResolvedConfig;
use crate::inference::{BlockingGenerator, CompletionProvider, Generator, OllamaProvider};
use crate::term::{ByteSource, PlatformBackend, Surface, TerminalSession};
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::detail_view::terminal_rows;
use crate::tui::components::{DetailView, InputEvent, InputLine, ListView, TitleBar};
use crate::tui::event::{Symbol, read_symbol};

const ORIGIN_COL: u16 = 2;
const TITLE_ROW: u16 = 1;
const LIST_ROW: u16 = 3;
/// Input row is `LIST_ROW + list height + INPUT_GAP`.
const INPUT_GAP: u16 = 4;

/// What the event loop must do after a keystroke.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
    /// Send this prompt to the generator.
    Submit(String),
    /// Show this entry full screen.
    OpenDetail(String),
}

/// Why the event loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopExit {
    Quit,
    ReadFailed,
}

/// The widgets that make up one screen.
pub struct Shell {
    title: TitleBar,
    list: ListView,
    input: InputLine,
}

impl Shell {
    pub fn new(model_name: String, list_height: usize) -> Self {
        Self {
            title: TitleBar::new(model_name),
            list: ListView::new(list_height),
            input: InputLine::new(),
        }
    }

    pub fn list(&self) -> &ListView {
        &self.list
    }

    pub fn input(&self) -> &InputLine {
        &self.input
    }

    fn input_row(&self) -> u16 {
        let height = u16::try_from(self.list.height()).unwrap_or(u16::MAX);
        LIST_ROW.saturating_add(height).saturating_add(INPUT_GAP)
    }

    /// Route one keystroke to the widgets.
    ///
    /// Enter on an empty input line opens the selected entry instead of
    /// reaching the widgets. Everything else goes to the list first, then
    /// to the input line.
    pub fn dispatch(&mut self, symbol: Symbol) -> Effect {
        match symbol {
            Symbol::Quit => return Effect::Quit,
            Symbol::Unknown => return Effect::None,
            Symbol::Enter if self.input.is_empty() => {
                if let Some(item) = self.list.selected_item() {
                    return Effect::OpenDetail(item.to_string());
                }
            }
            _ => {}
        }

        if let Some(event) = self.list.handle_event(&symbol) {
            debug!("List event: {:?}", event);
        }
        match self.input.handle_event(&symbol) {
            Some(InputEvent::Submit) => Effect::Submit(self.input.text().to_string()),
            _ => Effect::None,
        }
    }

    /// Append a generator reply and reset the input line.
    pub fn accept_reply(&mut self, reply: String) {
        self.list.append(reply);
        self.input.clear();
    }

    /// Paint a full frame.
    pub fn draw<W: Write>(&self, surface: &mut Surface<W>) {
        surface.clear();
        self.title.render(surface, ORIGIN_COL, TITLE_ROW);
        self.list.render(surface, ORIGIN_COL, LIST_ROW);
        self.input.render(surface, ORIGIN_COL, self.input_row());
        surface.flush();
    }
}

/// Run frames until `q` or a failed read.
///
/// `rows` is asked for the terminal height each time a detail view opens.
pub fn event_loop<W, S, R>(
    shell: &mut Shell,
    surface: &mut Surface<W>,
    source: &mut S,
    generator: &dyn Generator,
    rows: R,
) -> LoopExit
where
    W: Write,
    S: ByteSource + ?Sized,
    R: Fn() -> u16,
{
    loop {
        shell.draw(surface);

        let symbol = match read_symbol(&mut *source) {
            Ok(symbol) => symbol,
            Err(e) => {
                warn!("Input read failed, leaving event loop: {}", e);
                return LoopExit::ReadFailed;
            }
        };

        match shell.dispatch(symbol) {
            Effect::None => {}
            Effect::Quit => {
                info!("Quit requested");
                return LoopExit::Quit;
            }
            Effect::Submit(prompt) => {
                info!("Submitting prompt ({} bytes)", prompt.len());
                let reply = generator.generate(&prompt);
                if reply.is_empty() {
                    warn!("Empty reply appended");
                }
                shell.accept_reply(reply);
            }
            Effect::OpenDetail(text) => {
                DetailView::new(&text, rows()).render(surface, ORIGIN_COL, 1);
                surface.flush();
                if let Err(e) = source.read_byte() {
                    warn!("Input read failed in detail view: {}", e);
                    return LoopExit::ReadFailed;
                }
            }
        }
    }
}

/// Build a provider from a resolved config.
pub fn build_provider(config: &ResolvedConfig) -> Arc<dyn CompletionProvider> {
    Arc::new(OllamaProvider::new(Some(config.ollama_base_url.clone())))
}

pub fn run(config: &ResolvedConfig) -> io::Result<()> {
    let generator = BlockingGenerator::new(build_provider(config), config.model_name.clone())?;

    let backend = PlatformBackend::detect();
    let mut session = TerminalSession::enter_raw(backend);
    if !session.is_raw() {
        eprintln!("quill: raw terminal mode is not available here (is stdin a terminal?)");
        return Ok(());
    }
    session.install_interrupt_restore();

    let mut shell = Shell::new(config.model_name.clone(), config.list_height);
    let mut surface = Surface::stdout(backend);
    surface.hide_cursor();

    let exit = event_loop(&mut shell, &mut surface, &mut session, &generator, terminal_rows);
    info!(
        "Event loop finished ({:?}) with {} entries",
        exit,
        shell.list().len()
    );

    // Cursor first, then line discipline
    drop(surface);
    session.restore();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{RecordingGenerator, ScriptedInput};
    use crate::tui::components::detail_view::FOOTER;

    fn shell_with(items: &[&str], height: usize) -> Shell {
        let mut shell = Shell::new("test-model".to_string(), height);
        shell.list = ListView::with_items(height, items.iter().map(|s| s.to_string()).collect());
        shell
    }

    fn run_script(shell: &mut Shell, script: &[u8], generator: &RecordingGenerator) -> (LoopExit, String) {
        let mut surface = Surface::new(Vec::new(), PlatformBackend::PosixLinux);
        let mut input = ScriptedInput::new(script);
        let exit = event_loop(shell, &mut surface, &mut input, generator, || 10);
        let out = String::from_utf8_lossy(surface.output()).into_owned();
        (exit, out)
    }

    #[test]
    fn test_dispatch_quit() {
        let mut shell = shell_with(&[], 8);
        assert_eq!(shell.dispatch(Symbol::Quit), Effect::Quit);
    }

    #[test]
    fn test_dispatch_unknown_touches_nothing() {
        let mut shell = shell_with(&["Alpha", "Bravo"], 1);
        assert_eq!(shell.dispatch(Symbol::Unknown), Effect::None);
        assert_eq!(shell.list().selected(), Some(0));
        assert!(shell.input().is_empty());
    }

    #[test]
    fn test_dispatch_arrows_reach_list() {
        let mut shell = shell_with(&["Alpha", "Bravo", "Charlie"], 2);
        shell.dispatch(Symbol::Down);
        shell.dispatch(Symbol::Down);
        assert_eq!(shell.list().selected(), Some(2));
        assert_eq!(shell.list().scroll_offset(), 1);
    }

    #[test]
    fn test_dispatch_submit_keeps_buffer_until_accepted() {
        let mut shell = shell_with(&[], 8);
        shell.dispatch(Symbol::Char(b'h'));
        shell.dispatch(Symbol::Char(b'i'));
        assert_eq!(shell.dispatch(Symbol::Enter), Effect::Submit("hi".to_string()));
        assert_eq!(shell.input().text(), "hi");

        shell.accept_reply("hello".to_string());
        assert!(shell.input().is_empty());
        assert_eq!(shell.list().items(), &["hello".to_string()]);
    }

    #[test]
    fn test_dispatch_enter_on_empty_list_does_nothing() {
        let mut shell = shell_with(&[], 8);
        assert_eq!(shell.dispatch(Symbol::Enter), Effect::None);
    }

    #[test]
    fn test_dispatch_enter_opens_selected() {
        let mut shell = shell_with(&["Alpha", "Bravo"], 8);
        shell.dispatch(Symbol::Down);
        assert_eq!(shell.dispatch(Symbol::Enter), Effect::OpenDetail("Bravo".to_string()));
    }

    #[test]
    fn test_dispatch_enter_with_text_submits_even_with_selection() {
        let mut shell = shell_with(&["Alpha"], 8);
        shell.dispatch(Symbol::Char(b'x'));
        assert_eq!(shell.dispatch(Symbol::Enter), Effect::Submit("x".to_string()));
    }

    #[test]
    fn test_input_row_follows_list_height() {
        assert_eq!(shell_with(&[], 8).input_row(), 15);
        assert_eq!(shell_with(&[], 2).input_row(), 9);
    }

    #[test]
    fn test_draw_frame() {
        let shell = shell_with(&["Alpha"], 2);
        let mut surface = Surface::new(Vec::new(), PlatformBackend::PosixLinux);
        shell.draw(&mut surface);
        let out = String::from_utf8_lossy(surface.output()).into_owned();
        assert!(out.starts_with("\x1b[1;1H\x1b[2J\x1b[1;2HList view"));
        assert!(out.contains("\x1b[3;2H> Alpha\x1b[4;2H~"));
        assert!(out.ends_with("\x1b[9;2HInput: "));
    }

    #[test]
    fn test_loop_submits_and_quits() {
        let mut shell = shell_with(&[], 8);
        let generator = RecordingGenerator::new("hello");
        let (exit, out) = run_script(&mut shell, b"hi\rq", &generator);

        assert_eq!(exit, LoopExit::Quit);
        assert_eq!(*generator.prompts.borrow(), vec!["hi".to_string()]);
        assert_eq!(shell.list().items(), &["hello".to_string()]);
        assert!(shell.input().is_empty());
        // Last frame shows the reply selected
        assert!(out.contains("> hello"));
    }

    #[test]
    fn test_loop_empty_reply_still_appended() {
        let mut shell = shell_with(&[], 8);
        let generator = RecordingGenerator::new("");
        let (exit, _) = run_script(&mut shell, b"x\rq", &generator);
        assert_eq!(exit, LoopExit::Quit);
        assert_eq!(shell.list().items(), &[String::new()]);
    }

    #[test]
    fn test_loop_enter_on_empty_list_no_detail() {
        let mut shell = shell_with(&[], 8);
        let generator = RecordingGenerator::new("unused");
        let (exit, out) = run_script(&mut shell, b"\r", &generator);
        assert_eq!(exit, LoopExit::ReadFailed);
        assert!(!out.contains(FOOTER));
        assert!(generator.prompts.borrow().is_empty());
    }

    #[test]
    fn test_loop_detail_view_swallows_one_byte() {
        let mut shell = shell_with(&["first line\nsecond line"], 8);
        let generator = RecordingGenerator::new("unused");
        // 'q' right after Enter only dismisses the view; the next 'q' quits
        let (exit, out) = run_script(&mut shell, b"\rqq", &generator);
        assert_eq!(exit, LoopExit::Quit);
        assert!(out.contains("\x1b[1;2Hfirst line\x1b[2;2Hsecond line"));
        assert!(out.contains(&format!("\x1b[10;2H{FOOTER}")));
        assert!(shell.input().is_empty());
    }

    #[test]
    fn test_loop_read_failure_in_detail_view() {
        let mut shell = shell_with(&["Alpha"], 8);
        let generator = RecordingGenerator::new("unused");
        let (exit, _) = run_script(&mut shell, b"\r", &generator);
        assert_eq!(exit, LoopExit::ReadFailed);
    }

    #[test]
    fn test_loop_arrow_keys_scroll() {
        let mut shell = shell_with(&["Alpha", "Bravo", "Charlie"], 2);
        let generator = RecordingGenerator::new("unused");
        let (exit, _) = run_script(&mut shell, b"\x1b[B\x1b[B\x1b[Cq", &generator);
        assert_eq!(exit, LoopExit::Quit);
        assert_eq!(shell.list().selected(), Some(2));
        assert_eq!(shell.list().scroll_offset(), 1);
    }
}
