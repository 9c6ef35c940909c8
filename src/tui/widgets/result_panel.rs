//! Prediction results panel.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::model::{Classification, PredictionResult};

/// Renders the latest prediction.
///
/// Renders nothing if there is no result yet.
#[mutants::skip]
pub fn draw_result_panel(result: Option<&PredictionResult>, frame: &mut Frame, area: Rect) {
    let Some(result) = result else {
        return;
    };

    let block = Block::default()
        .title(" Prediction Results ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let class_color = match result.prediction {
        Classification::Positive => Color::Red,
        Classification::Negative => Color::Green,
    };

    let lines = vec![
        Line::from(vec![
            Span::raw("Prediction: "),
            Span::styled(
                result.prediction.as_str(),
                Style::default()
                    .fg(class_color)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(format!(
            "Positive Probability: {}",
            result.positive_probability
        )),
        Line::from(format!(
            "Negative Probability: {}",
            result.negative_probability
        )),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
