use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use wordbook_types::{AppEvent, EntryView};

/// What the result pane currently shows.
#[derive(Debug, Clone, Default)]
pub enum ResultView {
    #[default]
    Empty,
    Loading {
        term: String,
    },
    Entry(EntryView),
    Error(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Input,
    Chips,
}

/// Action a key press asks the app to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiAction {
    Search(String),
    Play(String),
    OpenSource(String),
}

/// Pure UI state; key handling and event application carry no terminal
/// dependencies so they stay unit-testable.
#[derive(Debug)]
pub struct UiState {
    pub input: String,
    pub focus: Focus,
    pub chip_index: usize,
    pub view: ResultView,
    pub scroll: u16,
    pub should_quit: bool,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            input: String::new(),
            focus: Focus::Input,
            chip_index: 0,
            view: ResultView::Empty,
            scroll: 0,
            should_quit: false,
        }
    }

    /// Submit is disabled while a request is outstanding.
    pub fn searching(&self) -> bool {
        matches!(self.view, ResultView::Loading { .. })
    }

    pub fn entry(&self) -> Option<&EntryView> {
        match &self.view {
            ResultView::Entry(view) => Some(view),
            _ => None,
        }
    }

    pub fn chips(&self) -> Vec<&str> {
        self.entry().map(|e| e.synonym_chips()).unwrap_or_default()
    }

    pub fn audio_url(&self) -> Option<&str> {
        self.entry().and_then(|e| e.audio_url.as_deref())
    }

    pub fn source_url(&self) -> Option<&str> {
        self.entry().and_then(|e| e.source_url.as_deref())
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Option<UiAction> {
        if key.kind == KeyEventKind::Release {
            return None;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') => {
                    self.should_quit = true;
                    None
                }
                KeyCode::Char('p') => self.audio_url().map(|url| UiAction::Play(url.to_string())),
                KeyCode::Char('o') => self
                    .source_url()
                    .map(|url| UiAction::OpenSource(url.to_string())),
                _ => None,
            };
        }

        match key.code {
            KeyCode::Esc => {
                if self.focus == Focus::Chips {
                    self.focus = Focus::Input;
                } else {
                    self.should_quit = true;
                }
                None
            }
            KeyCode::Tab | KeyCode::BackTab => {
                if !self.chips().is_empty() {
                    self.focus = match self.focus {
                        Focus::Input => Focus::Chips,
                        Focus::Chips => Focus::Input,
                    };
                }
                None
            }
            KeyCode::Up => {
                self.scroll = self.scroll.saturating_sub(1);
                None
            }
            KeyCode::Down => {
                self.scroll = self.scroll.saturating_add(1);
                None
            }
            KeyCode::Left if self.focus == Focus::Chips => {
                let count = self.chips().len();
                if count > 0 {
                    self.chip_index = self.chip_index.checked_sub(1).unwrap_or(count - 1);
                }
                None
            }
            KeyCode::Right if self.focus == Focus::Chips => {
                let count = self.chips().len();
                if count > 0 {
                    self.chip_index = (self.chip_index + 1) % count;
                }
                None
            }
            KeyCode::Enter => self.activate(),
            KeyCode::Backspace if self.focus == Focus::Input => {
                self.input.pop();
                None
            }
            KeyCode::Char(c) if self.focus == Focus::Input => {
                self.input.push(c);
                None
            }
            _ => None,
        }
    }

    /// Enter: submit the current input, or activate the selected synonym
    /// chip, which also rewrites the input text.
    fn activate(&mut self) -> Option<UiAction> {
        if self.searching() {
            return None;
        }

        match self.focus {
            Focus::Input => Some(UiAction::Search(self.input.clone())),
            Focus::Chips => {
                let chip = self.chips().get(self.chip_index)?.to_string();
                self.input = chip.clone();
                self.focus = Focus::Input;
                Some(UiAction::Search(chip))
            }
        }
    }

    /// Apply an event pushed by the app loop.
    pub fn apply_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::ShowLoading { term } => {
                self.view = ResultView::Loading { term };
                self.reset_result_cursor();
            }
            AppEvent::ShowEntry(entry) => {
                self.view = ResultView::Entry(entry);
                self.reset_result_cursor();
            }
            AppEvent::ShowError(message) => {
                self.view = ResultView::Error(message);
                self.reset_result_cursor();
            }
            AppEvent::Close => {
                self.should_quit = true;
            }
            other => {
                tracing::trace!(?other, "ignoring app-bound event");
            }
        }
    }

    fn reset_result_cursor(&mut self) {
        self.chip_index = 0;
        self.scroll = 0;
        if matches!(self.view, ResultView::Entry(_)) && !self.chips().is_empty() {
            return;
        }
        self.focus = Focus::Input;
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}
