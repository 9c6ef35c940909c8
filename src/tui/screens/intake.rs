//! Intake screen: the patient and tumor form plus the latest prediction.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::model::{FIELD_COUNT, PredictionResult, encode};
use crate::tui::action::Action;
use crate::tui::widgets::{Form, draw_form, draw_result_panel};

/// Message shown when a submission fails for any reason.
pub const SUBMIT_FAILED_NOTICE: &str = "Error submitting data. Please try again.";

/// State for the intake screen.
#[derive(Debug, Clone, Default)]
pub struct IntakeState {
    form: Form,
    result: Option<PredictionResult>,
    notice: Option<String>,
    pending: bool,
}

impl IntakeState {
    /// Creates an empty form with no result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Handles a key event, returning an [`Action`] for the app to apply.
    ///
    /// While a notice is open, any key only dismisses it.
    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        if self.notice.take().is_some() {
            return Action::None;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('r') => {
                    self.form.reset();
                    Action::None
                }
                KeyCode::Char('c') => Action::Quit,
                _ => Action::None,
            };
        }

        match key.code {
            KeyCode::Tab | KeyCode::Down => {
                self.form.focus_next();
                Action::None
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.form.focus_prev();
                Action::None
            }
            KeyCode::Right => {
                self.form.cycle_choice(true);
                Action::None
            }
            KeyCode::Left => {
                self.form.cycle_choice(false);
                Action::None
            }
            KeyCode::Backspace => {
                self.form.delete_char();
                Action::None
            }
            KeyCode::Enter => self.submit(),
            KeyCode::Esc => Action::Quit,
            KeyCode::Char(' ') if self.form.focus().options().is_some() => {
                self.form.cycle_choice(true);
                Action::None
            }
            KeyCode::Char(ch) => {
                self.form.insert_char(ch);
                Action::None
            }
            _ => Action::None,
        }
    }

    /// Returns a reference to the form for rendering.
    pub fn form(&self) -> &Form {
        &self.form
    }

    /// The most recent accepted prediction, if any.
    pub fn result(&self) -> Option<&PredictionResult> {
        self.result.as_ref()
    }

    /// Replaces the displayed prediction.
    pub fn set_result(&mut self, result: PredictionResult) {
        self.result = Some(result);
    }

    /// The open notice, if any.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Opens a blocking notice, dismissed by the next key press.
    pub fn show_notice(&mut self, msg: impl Into<String>) {
        self.notice = Some(msg.into());
    }

    /// Returns `true` while a submission is in flight.
    pub fn pending(&self) -> bool {
        self.pending
    }

    pub fn set_pending(&mut self, pending: bool) {
        self.pending = pending;
    }

    /// Encodes the current form. Encoding cannot fail.
    fn submit(&mut self) -> Action {
        Action::Submit(encode(self.form.input()))
    }
}

/// Renders the intake screen.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_intake(state: &IntakeState, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Cancer Calculator Form ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [form_area, status_area, result_area, _spacer, footer_area] = Layout::vertical([
        Constraint::Length(FIELD_COUNT as u16),
        Constraint::Length(2),
        Constraint::Length(5),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(inner);

    draw_form(state.form(), frame, form_area);

    if state.pending() {
        let status = Paragraph::new(Line::from(Span::styled(
            "Submitting...",
            Style::default().fg(Color::Yellow),
        )));
        frame.render_widget(status, status_area);
    }

    draw_result_panel(state.result(), frame, result_area);

    let footer = Paragraph::new(Line::from(
        "Tab/Shift+Tab: next/prev  \u{2190}/\u{2192}: choose  Enter: submit  Ctrl+R: clear  Esc: quit",
    ))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);

    if let Some(notice) = state.notice() {
        draw_notice(notice, frame, area);
    }
}

/// Renders a centered modal notice over `area`.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
fn draw_notice(notice: &str, frame: &mut Frame, area: Rect) {
    let [row] = Layout::vertical([Constraint::Length(5)])
        .flex(Flex::Center)
        .areas(area);
    let [popup] = Layout::horizontal([Constraint::Percentage(60)])
        .flex(Flex::Center)
        .areas(row);

    let block = Block::default()
        .title(" Notice ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));
    let text = vec![
        Line::from(notice),
        Line::from(Span::styled(
            "Press any key",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(text).wrap(Wrap { trim: true }).block(block),
        popup,
    );
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEventKind, KeyEventState};

    use super::*;
    use crate::model::{Classification, FieldName, PredictionRequest};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn ctrl_press(ch: char) -> KeyEvent {
        KeyEvent {
            code: KeyCode::Char(ch),
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn type_string(state: &mut IntakeState, s: &str) {
        for ch in s.chars() {
            state.handle_key(press(KeyCode::Char(ch)));
        }
    }

    fn focus(state: &mut IntakeState, field: FieldName) {
        while state.form().focus() != field {
            state.handle_key(press(KeyCode::Tab));
        }
    }

    fn sample_result() -> PredictionResult {
        PredictionResult {
            prediction: Classification::Positive,
            positive_probability: "0.70".into(),
            negative_probability: "0.30".into(),
        }
    }

    mod editing {
        use super::*;

        #[test]
        fn typing_fills_focused_field() {
            let mut state = IntakeState::new();
            type_string(&mut state, "P-001");
            assert_eq!(state.form().value(FieldName::PatientId), "P-001");
        }

        #[test]
        fn tab_and_down_advance_focus() {
            let mut state = IntakeState::new();
            state.handle_key(press(KeyCode::Tab));
            assert_eq!(state.form().focus(), FieldName::Name);
            state.handle_key(press(KeyCode::Down));
            assert_eq!(state.form().focus(), FieldName::Address);
        }

        #[test]
        fn backtab_and_up_move_back() {
            let mut state = IntakeState::new();
            state.handle_key(press(KeyCode::BackTab));
            assert_eq!(state.form().focus(), FieldName::Menopause);
            state.handle_key(press(KeyCode::Up));
            assert_eq!(state.form().focus(), FieldName::History);
        }

        #[test]
        fn space_in_text_field_is_typed() {
            let mut state = IntakeState::new();
            focus(&mut state, FieldName::Address);
            type_string(&mut state, "1 Main St");
            assert_eq!(state.form().value(FieldName::Address), "1 Main St");
        }

        #[test]
        fn space_and_arrows_cycle_choices() {
            let mut state = IntakeState::new();
            focus(&mut state, FieldName::Breast);
            state.handle_key(press(KeyCode::Char(' ')));
            assert_eq!(state.form().value(FieldName::Breast), "left");
            state.handle_key(press(KeyCode::Right));
            assert_eq!(state.form().value(FieldName::Breast), "right");
            state.handle_key(press(KeyCode::Left));
            assert_eq!(state.form().value(FieldName::Breast), "left");
        }

        #[test]
        fn backspace_deletes() {
            let mut state = IntakeState::new();
            type_string(&mut state, "AB");
            state.handle_key(press(KeyCode::Backspace));
            assert_eq!(state.form().value(FieldName::PatientId), "A");
        }

        #[test]
        fn ctrl_r_clears_form_but_keeps_result() {
            let mut state = IntakeState::new();
            type_string(&mut state, "P-9");
            state.set_result(sample_result());
            state.handle_key(ctrl_press('r'));
            assert!(state.form().input().is_empty());
            assert_eq!(state.result(), Some(&sample_result()));
        }

        #[test]
        fn ctrl_r_does_not_type() {
            let mut state = IntakeState::new();
            state.handle_key(ctrl_press('x'));
            assert_eq!(state.form().value(FieldName::PatientId), "");
        }
    }

    mod submit {
        use super::*;

        #[test]
        fn enter_encodes_form() {
            let mut state = IntakeState::new();
            focus(&mut state, FieldName::Age);
            type_string(&mut state, "61");
            focus(&mut state, FieldName::TumorSize);
            state.handle_key(press(KeyCode::Right));
            state.handle_key(press(KeyCode::Right));
            focus(&mut state, FieldName::History);
            state.handle_key(press(KeyCode::Left));

            let action = state.handle_key(press(KeyCode::Enter));
            assert_eq!(
                action,
                Action::Submit(PredictionRequest {
                    age: "61".into(),
                    tumor_size: 2,
                    invasive_nodes: 3,
                    breast: 1,
                    quadrant: String::new(),
                    history: 0,
                    menopause: 1,
                })
            );
        }

        #[test]
        fn enter_on_empty_form_still_submits() {
            let mut state = IntakeState::new();
            let action = state.handle_key(press(KeyCode::Enter));
            assert!(matches!(action, Action::Submit(_)));
        }

        #[test]
        fn enter_does_not_clear_form() {
            let mut state = IntakeState::new();
            type_string(&mut state, "P-1");
            state.handle_key(press(KeyCode::Enter));
            assert_eq!(state.form().value(FieldName::PatientId), "P-1");
        }
    }

    mod notice {
        use super::*;

        #[test]
        fn any_key_dismisses_without_acting() {
            let mut state = IntakeState::new();
            state.show_notice(SUBMIT_FAILED_NOTICE);
            let action = state.handle_key(press(KeyCode::Enter));
            assert_eq!(action, Action::None);
            assert_eq!(state.notice(), None);
        }

        #[test]
        fn typing_resumes_after_dismiss() {
            let mut state = IntakeState::new();
            state.show_notice("boom");
            type_string(&mut state, "xAB");
            assert_eq!(state.form().value(FieldName::PatientId), "AB");
        }
    }

    mod quit {
        use super::*;

        #[test]
        fn esc_quits() {
            let mut state = IntakeState::new();
            assert_eq!(state.handle_key(press(KeyCode::Esc)), Action::Quit);
        }

        #[test]
        fn ctrl_c_quits() {
            let mut state = IntakeState::new();
            assert_eq!(state.handle_key(ctrl_press('c')), Action::Quit);
        }

        #[test]
        fn q_is_typed_not_quit() {
            let mut state = IntakeState::new();
            assert_eq!(state.handle_key(press(KeyCode::Char('q'))), Action::None);
            assert_eq!(state.form().value(FieldName::PatientId), "q");
        }
    }

    mod rendering {
        use ratatui::Terminal;
        use ratatui::backend::TestBackend;

        use super::*;

        fn buffer_to_string(buf: &ratatui::buffer::Buffer) -> String {
            let mut s = String::new();
            for y in 0..buf.area.height {
                for x in 0..buf.area.width {
                    s.push(buf[(x, y)].symbol().chars().next().unwrap_or(' '));
                }
                s.push('\n');
            }
            s
        }

        fn render_intake(state: &IntakeState, width: u16, height: u16) -> String {
            let backend = TestBackend::new(width, height);
            let mut terminal = Terminal::new(backend).unwrap();
            terminal
                .draw(|frame| {
                    draw_intake(state, frame, frame.area());
                })
                .unwrap();
            buffer_to_string(terminal.backend().buffer())
        }

        #[test]
        fn renders_title_and_labels() {
            let output = render_intake(&IntakeState::new(), 100, 30);
            assert!(output.contains("Cancer Calculator Form"));
            for field in FieldName::all() {
                assert!(output.contains(field.label()), "missing {field:?}");
            }
        }

        #[test]
        fn renders_unset_choices_as_select() {
            let output = render_intake(&IntakeState::new(), 100, 30);
            assert!(output.contains("Select"));
        }

        #[test]
        fn renders_typed_values_and_choice_labels() {
            let mut state = IntakeState::new();
            type_string(&mut state, "P-42");
            focus(&mut state, FieldName::InvasiveNodes);
            state.handle_key(press(KeyCode::Right));
            state.handle_key(press(KeyCode::Right));
            let output = render_intake(&state, 100, 30);
            assert!(output.contains("P-42"));
            assert!(output.contains("Low(1-3)"));
        }

        #[test]
        fn renders_result_only_when_present() {
            let mut state = IntakeState::new();
            let before = render_intake(&state, 100, 30);
            assert!(!before.contains("Prediction Results"));

            state.set_result(sample_result());
            let after = render_intake(&state, 100, 30);
            assert!(after.contains("Prediction Results"));
            assert!(after.contains("Positive Probability: 0.70"));
        }

        #[test]
        fn renders_pending_status() {
            let mut state = IntakeState::new();
            state.set_pending(true);
            let output = render_intake(&state, 100, 30);
            assert!(output.contains("Submitting..."));
        }

        #[test]
        fn renders_notice() {
            let mut state = IntakeState::new();
            state.show_notice(SUBMIT_FAILED_NOTICE);
            let output = render_intake(&state, 100, 30);
            assert!(output.contains("Error submitting data"));
        }

        #[test]
        fn renders_footer() {
            let output = render_intake(&IntakeState::new(), 100, 30);
            assert!(output.contains("Enter: submit"));
        }
    }
}
