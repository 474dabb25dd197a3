//! Dashboard key handling
//!
//! Maps key presses to state changes and to actions on the selected row

use super::state::{DashboardState, Overlay, Prompt, PromptKind};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::path::PathBuf;

/// Work the app must start in response to a key.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Action {
    ShowLogs(String),
    Delete(String),
    DeleteAll,
    Upload(PathBuf),
    Add {
        user_id: String,
        proxy_url: Option<String>,
    },
    Refresh,
    Quit,
}

impl DashboardState {
    /// Ctrl+C quits from anywhere, even over an alert or a prompt.
    pub fn handle_key_event(&mut self, key: KeyEvent) -> Option<Action> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Action::Quit);
        }
        self.handle_key(key.code)
    }

    pub fn handle_key(&mut self, code: KeyCode) -> Option<Action> {
        // An alert swallows the next key.
        if self.alerts.pop_front().is_some() {
            return None;
        }

        match std::mem::take(&mut self.overlay) {
            Overlay::None => self.handle_table_key(code),
            Overlay::Logs { view, scroll } => {
                match code {
                    KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => {}
                    KeyCode::Up | KeyCode::Char('k') => {
                        self.overlay = Overlay::Logs {
                            view,
                            scroll: scroll.saturating_sub(1),
                        };
                    }
                    KeyCode::Down | KeyCode::Char('j') => {
                        let max = view.lines.len().saturating_sub(1) as u16;
                        self.overlay = Overlay::Logs {
                            view,
                            scroll: (scroll + 1).min(max),
                        };
                    }
                    _ => self.overlay = Overlay::Logs { view, scroll },
                }
                None
            }
            Overlay::Prompt(prompt) => self.handle_prompt_key(prompt, code),
        }
    }

    fn handle_table_key(&mut self, code: KeyCode) -> Option<Action> {
        let selected_id = self.selected_row().map(|row| row.id.clone());
        match code {
            KeyCode::Esc | KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected + 1 < self.table.rows.len() {
                    self.selected += 1;
                }
                None
            }
            KeyCode::Enter | KeyCode::Char('l') => selected_id.map(Action::ShowLogs),
            KeyCode::Char('d') => selected_id.map(Action::Delete),
            KeyCode::Char('D') => Some(Action::DeleteAll),
            KeyCode::Char('r') => Some(Action::Refresh),
            KeyCode::Char('u') => {
                self.open_prompt(PromptKind::Upload);
                None
            }
            KeyCode::Char('a') => {
                self.open_prompt(PromptKind::Add);
                None
            }
            _ => None,
        }
    }

    fn open_prompt(&mut self, kind: PromptKind) {
        self.overlay = Overlay::Prompt(Prompt {
            kind,
            input: String::new(),
        });
    }

    fn handle_prompt_key(&mut self, mut prompt: Prompt, code: KeyCode) -> Option<Action> {
        match code {
            KeyCode::Esc => None,
            KeyCode::Enter => submit_prompt(&prompt),
            KeyCode::Backspace => {
                prompt.input.pop();
                self.overlay = Overlay::Prompt(prompt);
                None
            }
            KeyCode::Char(c) => {
                prompt.input.push(c);
                self.overlay = Overlay::Prompt(prompt);
                None
            }
            _ => {
                self.overlay = Overlay::Prompt(prompt);
                None
            }
        }
    }
}

fn submit_prompt(prompt: &Prompt) -> Option<Action> {
    let input = prompt.input.trim();
    if input.is_empty() {
        return None;
    }
    match prompt.kind {
        PromptKind::Upload => Some(Action::Upload(PathBuf::from(input))),
        PromptKind::Add => {
            let mut parts = input.split_whitespace();
            let user_id = parts.next()?.to_string();
            let proxy_url = parts.next().map(str::to_string);
            Some(Action::Add { user_id, proxy_url })
        }
    }
}
