//! Intake form widget: focus management and editing over a [`FormInput`].

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::{FieldName, FormInput};

/// Shown for a choice field with no selection, like the web form's blank option.
pub const UNSET_CHOICE: &str = "Select";

/// Width of the label column.
const LABEL_WIDTH: usize = 16;

/// A form covering every [`FieldName`], with one focused field.
///
/// Text fields take typed characters; choice fields cycle through their
/// options and can be reset to unset.
#[derive(Debug, Clone, Default)]
pub struct Form {
    input: FormInput,
    focus: usize,
}

impl Form {
    /// Creates an empty form. Focus starts on the first field.
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently focused field.
    pub fn focus(&self) -> FieldName {
        FieldName::all()[self.focus]
    }

    /// Moves focus to `field`.
    pub fn set_focus(&mut self, field: FieldName) {
        self.focus = field.index();
    }

    /// Moves focus to the next field, wrapping around.
    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % FieldName::all().len();
    }

    /// Moves focus to the previous field, wrapping around.
    pub fn focus_prev(&mut self) {
        let len = FieldName::all().len();
        self.focus = (self.focus + len - 1) % len;
    }

    /// Appends a character to the focused text field.
    ///
    /// Ignored on choice fields, and on numeric fields for characters a
    /// number entry cannot contain. The value itself is not checked.
    pub fn insert_char(&mut self, ch: char) {
        let field = self.focus();
        if field.options().is_some() {
            return;
        }
        if field.is_numeric() && !is_number_char(ch) {
            return;
        }
        self.input.value_mut(field).push(ch);
    }

    /// Deletes the last character of a text field, or unsets a choice field.
    pub fn delete_char(&mut self) {
        let field = self.focus();
        if field.options().is_some() {
            self.input.set_field(field, "");
        } else {
            self.input.value_mut(field).pop();
        }
    }

    /// Selects the next or previous option of the focused choice field.
    ///
    /// The cycle includes the unset state between the last and first option.
    pub fn cycle_choice(&mut self, forward: bool) {
        let field = self.focus();
        let Some(options) = field.options() else {
            return;
        };
        // Position 0 is unset; options occupy 1..=len.
        let slots = options.len() + 1;
        let current = options
            .iter()
            .position(|o| o.value == self.input.get(field))
            .map_or(0, |i| i + 1);
        let next = if forward {
            (current + 1) % slots
        } else {
            (current + slots - 1) % slots
        };
        let value = if next == 0 { "" } else { options[next - 1].value };
        self.input.set_field(field, value);
    }

    /// Replaces a field's value.
    pub fn set_value(&mut self, field: FieldName, value: impl Into<String>) {
        self.input.set_field(field, value);
    }

    /// Returns the raw value of a field.
    pub fn value(&self, field: FieldName) -> &str {
        self.input.get(field)
    }

    /// Returns the text to show for a field: the option label for choices.
    pub fn display_value(&self, field: FieldName) -> &str {
        let raw = self.input.get(field);
        match field.options() {
            Some(options) => options
                .iter()
                .find(|o| o.value == raw)
                .map_or(UNSET_CHOICE, |o| o.label),
            None => raw,
        }
    }

    /// The underlying form values.
    pub fn input(&self) -> &FormInput {
        &self.input
    }

    /// Resets all values and focus.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

/// Characters a browser number input accepts: digits, sign, decimal point and
/// exponent marker.
fn is_number_char(ch: char) -> bool {
    ch.is_ascii_digit() || matches!(ch, '.' | '-' | '+' | 'e' | 'E')
}

/// Renders the form as one line per field within the given area.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_form(form: &Form, frame: &mut Frame, area: Rect) {
    let focused = form.focus();
    let lines: Vec<Line> = form
        .input()
        .iter()
        .map(|(field, raw)| {
            let is_focused = field == focused;
            let label_style = if is_focused {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default().fg(Color::DarkGray)
            };

            let mut spans = vec![Span::styled(
                format!("{:<width$}", field.label(), width = LABEL_WIDTH),
                label_style,
            )];
            match field.options() {
                Some(_) => {
                    let value = form.display_value(field);
                    let style = if raw.is_empty() {
                        Style::default().fg(Color::DarkGray)
                    } else {
                        Style::default().fg(Color::White)
                    };
                    if is_focused {
                        spans.push(Span::styled(format!("< {value} >"), style));
                    } else {
                        spans.push(Span::styled(format!("  {value}"), style));
                    }
                }
                None => {
                    spans.push(Span::raw(raw.to_string()));
                    if is_focused {
                        spans.push(Span::styled(
                            "\u{2588}",
                            Style::default().add_modifier(Modifier::SLOW_BLINK),
                        ));
                    }
                }
            }
            Line::from(spans)
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}
