//! Application state and core logic

use crate::behavior::{checkbox_group, click_guard, context_menu, keyguard, submit_guard};
use crate::host::{ActionHost, FormSubmission};
use crate::page::{InputType, NodeId, PageStore, Tag};
use crate::state::AppState;
use crate::ui;
use anyhow::Result;
use chrono::Utc;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use tracing::debug;
use uuid::Uuid;

/// Work queued during an event and run after it completes: the
/// event-loop analog of a zero-delay timer, so the triggering event's
/// own action (the submission) is never blocked by the mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeferredAction {
    /// Disable every submit-capable descendant of a form
    DisableSubmitControls { form: NodeId },
}

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Where submissions and page actions go
    pub host: Box<dyn ActionHost>,
    /// Known page definitions
    pub store: PageStore,
    /// Whether the app should quit
    quit: bool,
    /// Terminal size for hit-testing (height, width)
    pub terminal_size: Option<(u16, u16)>,
    /// Actions to run once the current event is done
    deferred: Vec<DeferredAction>,
}

impl App {
    /// Create a new App instance showing the given start page
    pub fn new(store: PageStore, host: Box<dyn ActionHost>, start_page: &str) -> Result<Self> {
        let mut app = Self {
            state: AppState::default(),
            host,
            store,
            quit: false,
            terminal_size: None,
            deferred: Vec::new(),
        };
        let (title, mut document) = app.store.instantiate(start_page)?;
        // Initial pass: group-gated buttons reflect the declared state.
        checkbox_group::update_button_state(&mut document);
        app.state.install_page(start_page, title, document);
        Ok(app)
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Navigate to a page by link target. Re-instantiating the page is
    /// what clears the submitting flag and re-arms disabled controls.
    pub fn navigate(&mut self, target: &str) {
        let name = target.trim_start_matches('#');
        if name.is_empty() {
            return;
        }
        match self.store.instantiate(name) {
            Ok((title, mut document)) => {
                checkbox_group::update_button_state(&mut document);
                // Queued actions refer to nodes of the old document.
                self.deferred.clear();
                self.state.install_page(name, title, document);
            }
            Err(err) => self.state.push_error(err.to_string()),
        }
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // The chord filter runs before anything else sees the key.
        if keyguard::intercept(&key, self.state.is_editable_focus()) {
            return Ok(());
        }

        // Handle error dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        match key.code {
            KeyCode::Esc => self.quit = true,
            KeyCode::Tab | KeyCode::Down => self.state.focus_next(),
            KeyCode::BackTab | KeyCode::Up => self.state.focus_prev(),
            KeyCode::Enter => self.handle_enter().await?,
            KeyCode::Char(c) => self.handle_char(c).await?,
            KeyCode::Backspace => {
                // Only reaches here with editable focus; the filter
                // swallowed it everywhere else.
                if let Some(focus) = self.state.focus {
                    self.state.document.element_mut(focus).value.pop();
                }
            }
            _ => {}
        }
        Ok(())
    }

    async fn handle_enter(&mut self) -> Result<()> {
        let Some(focus) = self.state.focus else {
            return Ok(());
        };
        let el = self.state.document.element(focus);
        if el.tag == Tag::Textarea {
            self.state.document.element_mut(focus).value.push('\n');
        } else if el.is_editable() {
            self.implicit_submit(focus).await?;
        } else {
            self.activate(focus).await?;
        }
        Ok(())
    }

    async fn handle_char(&mut self, c: char) -> Result<()> {
        let Some(focus) = self.state.focus else {
            return Ok(());
        };
        if self.state.is_editable_focus() {
            self.state.document.element_mut(focus).value.push(c);
        } else if c == ' ' {
            self.activate(focus).await?;
        }
        Ok(())
    }

    /// Handle a mouse event
    pub async fn handle_mouse(&mut self, mouse: MouseEvent) -> Result<()> {
        // Right-click never reaches any handler.
        if context_menu::intercept(&mouse) {
            return Ok(());
        }

        if self.state.has_errors() {
            if matches!(mouse.kind, MouseEventKind::Down(_)) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
            if let Some(target) = self.element_at(mouse.column, mouse.row) {
                let el = self.state.document.element(target);
                if el.is_interactive() && !el.is_disabled() {
                    self.state.focus = Some(target);
                }
                self.activate(target).await?;
            }
        }
        Ok(())
    }

    /// Resolve the element drawn at a screen position, using the same
    /// layout the renderer used
    fn element_at(&self, column: u16, row: u16) -> Option<NodeId> {
        let (height, width) = self.terminal_size?;
        let (page_area, _) = ui::layout::screen_areas(Rect::new(0, 0, width, height));
        let inner = ui::layout::page_inner(page_area);
        ui::layout::hit_test(&self.state.document, inner, column, row)
    }

    /// Activate an element: toggle checkboxes, run the guards, then the
    /// element's own action
    async fn activate(&mut self, target: NodeId) -> Result<()> {
        let el = self.state.document.element(target);
        if el.is_checkbox() {
            if !el.is_disabled() {
                self.toggle_checkbox(target);
            }
            return Ok(());
        }

        let Some(actionable) = click_guard::find_actionable(&self.state.document, target) else {
            return Ok(());
        };
        if self.state.document.element(actionable).is_disabled() {
            return Ok(());
        }

        // Capture the action before the guard rewrites the element.
        let el = self.state.document.element(actionable);
        let href = el.href.clone();
        let action = el.attr("data-action").map(str::to_string);

        if el.is_submit_control() {
            self.submit(actionable).await?;
        } else {
            click_guard::on_click(&mut self.state.document, actionable);
            if let Some(action) = action {
                match self.host.run_action(&self.state.page_name, &action).await {
                    Ok(message) => self.state.status_message = message,
                    Err(err) => self.state.push_error(format!("Action {action} failed: {err}")),
                }
            } else if let Some(href) = href {
                self.navigate(&href);
            }
        }
        Ok(())
    }

    fn toggle_checkbox(&mut self, id: NodeId) {
        let el = self.state.document.element_mut(id);
        el.checked = !el.checked;
        checkbox_group::on_change(&mut self.state.document, id);
    }

    /// Enter in a single-line input submits its form through the first
    /// live submit control, as forms do
    async fn implicit_submit(&mut self, input: NodeId) -> Result<()> {
        let Some(form) = self.state.document.closest_form(input) else {
            return Ok(());
        };
        let control = self.state.document.descendants(form).into_iter().find(|&id| {
            let el = self.state.document.element(id);
            el.is_submit_control() && !el.is_disabled()
        });
        if let Some(control) = control {
            self.activate(control).await?;
        }
        Ok(())
    }

    /// Submission path: arm the double-submit guard, then hand the form
    /// to the host. The submission itself always proceeds.
    async fn submit(&mut self, control: NodeId) -> Result<()> {
        let Some(form) = self.state.document.closest_form(control) else {
            debug!("submit control {control} outside any form");
            return Ok(());
        };

        if submit_guard::arm(&mut self.state.document, form) {
            self.deferred
                .push(DeferredAction::DisableSubmitControls { form });
        }

        let submission = self.collect_submission(form);
        match self.host.submit_form(submission).await {
            Ok(outcome) => self.state.status_message = outcome.message,
            Err(err) => self.state.push_error(format!("Submission failed: {err}")),
        }
        Ok(())
    }

    /// Gather the named field values of a form in document order
    fn collect_submission(&self, form: NodeId) -> FormSubmission {
        let doc = &self.state.document;
        let mut fields = Vec::new();
        for id in doc.descendants(form) {
            let el = doc.element(id);
            let Some(name) = el.attr("name") else {
                continue;
            };
            match el.tag {
                Tag::Textarea => fields.push((name.to_string(), el.value.clone())),
                Tag::Input => match el.input_type() {
                    InputType::Text | InputType::Password => {
                        fields.push((name.to_string(), el.value.clone()));
                    }
                    InputType::Checkbox => {
                        if el.checked {
                            let value = el.attr("value").unwrap_or("on").to_string();
                            fields.push((name.to_string(), value));
                        }
                    }
                    _ => {}
                },
                _ => {}
            }
        }

        let el = doc.element(form);
        FormSubmission {
            id: Uuid::new_v4(),
            page: self.state.page_name.clone(),
            form: el.id.clone(),
            action: el.attr("action").map(str::to_string),
            fields,
            submitted_at: Utc::now(),
        }
    }

    /// Run everything queued during the last event
    pub fn drain_deferred(&mut self) {
        for action in std::mem::take(&mut self.deferred) {
            match action {
                DeferredAction::DisableSubmitControls { form } => {
                    submit_guard::disable_submit_controls(&mut self.state.document, form);
                }
            }
        }
    }
}
