use super::ui;
use crate::{
    config::PredictoConfig,
    error::Result,
    model::{Addon, Complexity, DocumentRef, FEATURE_CATALOG, ProjectType, TECH_STACKS},
    report,
    storage::DraftStore,
    wizard::{WizardSession, WizardStep},
};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    /// Typing into the focused field; keystrokes go to the edit buffer.
    Editing,
}

/// Rows on the details step, in display order: two numeric fields, the
/// complexity selector, location, then the feature and add-on checkboxes.
pub const DETAILS_FIXED_ROWS: usize = 4;

/// Rows on the tech step: the stack list, then requirements and the
/// document-attach field.
pub const TECH_EXTRA_ROWS: usize = 2;

pub struct App {
    pub session: WizardSession,
    pub config: PredictoConfig,
    pub selected: usize,
    pub input_mode: InputMode,
    pub edit_buffer: String,
    pub result_scroll: u16,
    pub show_help: bool,
    pub message: Option<String>,
}

impl App {
    pub fn new(session: WizardSession, config: PredictoConfig) -> Self {
        Self {
            session,
            config,
            selected: 0,
            input_mode: InputMode::Normal,
            edit_buffer: String::new(),
            result_scroll: 0,
            show_help: false,
            message: None,
        }
    }

    /// Number of selectable rows on the current step.
    pub fn row_count(&self) -> usize {
        match self.session.step() {
            WizardStep::ProjectType => ProjectType::ALL.len(),
            WizardStep::Details => {
                DETAILS_FIXED_ROWS + FEATURE_CATALOG.len() + Addon::ALL.len()
            }
            WizardStep::TechAndRequirements => TECH_STACKS.len() + TECH_EXTRA_ROWS,
            WizardStep::Results => 0,
        }
    }

    pub fn next(&mut self) {
        let count = self.row_count();
        if count > 0 {
            self.selected = (self.selected + 1) % count;
        }
    }

    pub fn previous(&mut self) {
        let count = self.row_count();
        if count > 0 {
            self.selected = if self.selected == 0 {
                count - 1
            } else {
                self.selected - 1
            };
        }
    }

    /// Enter/Space on the focused row: select, toggle, cycle, or start
    /// editing depending on the row kind.
    pub fn activate(&mut self) {
        match self.session.step() {
            WizardStep::ProjectType => {
                if let Some(pt) = ProjectType::ALL.get(self.selected) {
                    self.session.set_project_type(*pt);
                }
            }
            WizardStep::Details => self.activate_details_row(),
            WizardStep::TechAndRequirements => self.activate_tech_row(),
            WizardStep::Results => {}
        }
    }

    fn activate_details_row(&mut self) {
        match self.selected {
            0 | 1 | 3 => self.start_editing(),
            2 => {
                let next = match self.session.input().complexity {
                    None => Complexity::Low,
                    Some(Complexity::Low) => Complexity::Medium,
                    Some(Complexity::Medium) => Complexity::High,
                    Some(Complexity::High) => Complexity::Low,
                };
                self.session.set_complexity(next);
            }
            row => {
                let idx = row - DETAILS_FIXED_ROWS;
                if idx < FEATURE_CATALOG.len() {
                    self.session.toggle_feature(FEATURE_CATALOG[idx]);
                } else if let Some(addon) = Addon::ALL.get(idx - FEATURE_CATALOG.len()) {
                    self.session.toggle_addon(*addon);
                }
            }
        }
    }

    fn activate_tech_row(&mut self) {
        if self.selected < TECH_STACKS.len() {
            let stack = TECH_STACKS[self.selected];
            // Re-selecting the current stack clears it.
            if self.session.input().tech_stack.as_deref() == Some(stack) {
                self.session.set_tech_stack(None);
            } else {
                self.session.set_tech_stack(Some(stack.to_string()));
            }
        } else {
            self.start_editing();
        }
    }

    fn start_editing(&mut self) {
        self.edit_buffer = self.current_field_value();
        self.input_mode = InputMode::Editing;
    }

    /// Current textual value of the focused editable field, used to seed the
    /// edit buffer.
    fn current_field_value(&self) -> String {
        let input = self.session.input();
        match (self.session.step(), self.selected) {
            (WizardStep::Details, 0) => {
                input.team_size.map(|n| n.to_string()).unwrap_or_default()
            }
            (WizardStep::Details, 1) => input
                .duration_weeks
                .map(|n| n.to_string())
                .unwrap_or_default(),
            (WizardStep::Details, 3) => input.location.clone().unwrap_or_default(),
            (WizardStep::TechAndRequirements, row) if row == TECH_STACKS.len() => {
                input.requirements.clone().unwrap_or_default()
            }
            _ => String::new(),
        }
    }

    /// Commit the edit buffer into the focused field.
    pub fn commit_edit(&mut self) {
        let value = std::mem::take(&mut self.edit_buffer);
        self.input_mode = InputMode::Normal;

        match (self.session.step(), self.selected) {
            (WizardStep::Details, 0) => match parse_positive(&value) {
                Ok(n) => self.session.set_team_size(n),
                Err(msg) => self.message = Some(msg),
            },
            (WizardStep::Details, 1) => match parse_positive(&value) {
                Ok(n) => self.session.set_duration_weeks(n),
                Err(msg) => self.message = Some(msg),
            },
            (WizardStep::Details, 3) => {
                self.session.set_location(Some(value));
            }
            (WizardStep::TechAndRequirements, row) if row == TECH_STACKS.len() => {
                self.session.set_requirements(Some(value));
            }
            (WizardStep::TechAndRequirements, row) if row == TECH_STACKS.len() + 1 => {
                self.attach_document(&value);
            }
            _ => {}
        }
    }

    pub fn cancel_edit(&mut self) {
        self.edit_buffer.clear();
        self.input_mode = InputMode::Normal;
    }

    /// Record name and size metadata for a document path. The file content
    /// is never read.
    fn attach_document(&mut self, path: &str) {
        let path = path.trim();
        if path.is_empty() {
            return;
        }
        let name = std::path::Path::new(path)
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.to_string());
        let size_bytes = std::fs::metadata(path).map(|m| m.len()).unwrap_or(0);
        self.session.attach_document(DocumentRef { name: name.clone(), size_bytes });
        self.message = Some(format!("Attached {}", name));
    }

    pub fn advance(&mut self) {
        if self.session.advance() {
            self.selected = 0;
            self.result_scroll = 0;
        } else if !self.session.can_advance() {
            self.message = Some(match self.session.step() {
                WizardStep::ProjectType => "Select a project type first".to_string(),
                WizardStep::Details => {
                    "Complexity, team size, and duration are required".to_string()
                }
                _ => "Cannot advance".to_string(),
            });
        }
    }

    pub fn back(&mut self) {
        if self.session.back() {
            self.selected = 0;
        }
    }

    pub fn generate(&mut self) {
        if self.session.step() == WizardStep::TechAndRequirements && self.session.generate() {
            self.selected = 0;
            self.result_scroll = 0;
        }
    }

    pub fn reset(&mut self) {
        if self.session.reset() {
            self.selected = 0;
            self.message = Some("Wizard reset".to_string());
        }
    }

    pub fn export(&mut self) {
        let Some(estimate) = self.session.estimate() else {
            return;
        };
        let filename = report::default_export_filename();
        let path = std::path::PathBuf::from(&filename);
        match report::export(self.session.input(), estimate, &path) {
            Ok(()) => self.message = Some(format!("Exported {}", filename)),
            Err(e) => self.message = Some(format!("Export failed: {}", e)),
        }
    }
}

fn parse_positive(value: &str) -> std::result::Result<Option<u32>, String> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    match value.parse::<u32>() {
        Ok(n) if n > 0 => Ok(Some(n)),
        _ => Err(format!("'{}' is not a positive number", value)),
    }
}

pub fn run_tui(store: DraftStore, config: PredictoConfig) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let session = WizardSession::restore(store);
    let mut app = App::new(session, config);
    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {}", err);
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match app.input_mode {
                InputMode::Normal => match key.code {
                    KeyCode::Char('q') => return Ok(()),
                    KeyCode::Char('?') => app.show_help = !app.show_help,
                    KeyCode::Esc => {
                        if app.show_help {
                            app.show_help = false;
                        }
                    }
                    KeyCode::Down | KeyCode::Char('j') => match app.session.step() {
                        WizardStep::Results => {
                            app.result_scroll = app.result_scroll.saturating_add(1)
                        }
                        _ => app.next(),
                    },
                    KeyCode::Up | KeyCode::Char('k') => match app.session.step() {
                        WizardStep::Results => {
                            app.result_scroll = app.result_scroll.saturating_sub(1)
                        }
                        _ => app.previous(),
                    },
                    KeyCode::Enter | KeyCode::Char(' ') => app.activate(),
                    KeyCode::Char('n') | KeyCode::Right => app.advance(),
                    KeyCode::Char('b') | KeyCode::Left => app.back(),
                    KeyCode::Char('g') => app.generate(),
                    KeyCode::Char('x') => app.export(),
                    KeyCode::Char('r') => app.reset(),
                    _ => {}
                },
                InputMode::Editing => match key.code {
                    KeyCode::Enter => app.commit_edit(),
                    KeyCode::Esc => app.cancel_edit(),
                    KeyCode::Char(c) => app.edit_buffer.push(c),
                    KeyCode::Backspace => {
                        app.edit_buffer.pop();
                    }
                    _ => {}
                },
            }

            // Clear transient message on the next key press
            if app.message.is_some() && key.code != KeyCode::Enter {
                app.message = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn app_in(dir: &TempDir) -> App {
        let store = DraftStore::new(dir.path().join("draft.json"));
        App::new(WizardSession::new(store), PredictoConfig::default())
    }

    #[test]
    fn test_activate_selects_project_type() {
        let dir = TempDir::new().unwrap();
        let mut app = app_in(&dir);
        app.selected = 2;
        app.activate();
        assert_eq!(app.session.input().project_type, Some(ProjectType::Ai));
    }

    #[test]
    fn test_advance_blocked_shows_message() {
        let dir = TempDir::new().unwrap();
        let mut app = app_in(&dir);
        app.advance();
        assert_eq!(app.session.step(), WizardStep::ProjectType);
        assert!(app.message.is_some());
    }

    #[test]
    fn test_complexity_row_cycles() {
        let dir = TempDir::new().unwrap();
        let mut app = app_in(&dir);
        app.selected = 0;
        app.activate();
        app.advance();

        app.selected = 2;
        app.activate();
        assert_eq!(app.session.input().complexity, Some(Complexity::Low));
        app.activate();
        assert_eq!(app.session.input().complexity, Some(Complexity::Medium));
    }

    #[test]
    fn test_edit_commit_rejects_zero() {
        let dir = TempDir::new().unwrap();
        let mut app = app_in(&dir);
        app.selected = 0;
        app.activate();
        app.advance();

        app.selected = 0;
        app.activate();
        assert_eq!(app.input_mode, InputMode::Editing);
        app.edit_buffer = "0".to_string();
        app.commit_edit();
        assert_eq!(app.session.input().team_size, None);
        assert!(app.message.is_some());
    }

    #[test]
    fn test_feature_row_toggles() {
        let dir = TempDir::new().unwrap();
        let mut app = app_in(&dir);
        app.selected = 0;
        app.activate();
        app.advance();

        app.selected = DETAILS_FIXED_ROWS; // first feature
        app.activate();
        assert!(app.session.input().has_feature(FEATURE_CATALOG[0]));
        app.activate();
        assert!(!app.session.input().has_feature(FEATURE_CATALOG[0]));
    }
}
