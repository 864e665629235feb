//! Quote card component
//!
//! Renders the quote on display and its like state

use super::super::state::DashboardState;
use ratatui::Frame;
use ratatui::layout::Alignment;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

pub fn render_quote_card(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let controller = &state.controller;

    let lines: Vec<Line> = if controller.is_loading() {
        vec![Line::from(Span::styled(
            "Loading...",
            Style::default().fg(Color::DarkGray),
        ))]
    } else if let Some(quote) = controller.current_quote() {
        vec![
            Line::from(Span::styled(
                format!("\"{}\"", quote.text),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::ITALIC),
            )),
            Line::from(""),
            Line::from(Span::styled(
                format!("- {}", quote.author),
                Style::default().fg(Color::LightBlue),
            )),
        ]
    } else {
        vec![Line::from(Span::styled(
            "No quote yet. Press [N] to fetch one.",
            Style::default().fg(Color::DarkGray),
        ))]
    };

    let (title, border_color) = if controller.is_current_quote_liked() {
        ("QUOTE ♥ LIKED", Color::LightMagenta)
    } else {
        ("QUOTE", Color::Cyan)
    };

    let card = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(border_color))
                .padding(Padding::uniform(1)),
        );
    f.render_widget(card, area);
}
