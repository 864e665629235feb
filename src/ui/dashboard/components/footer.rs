//! Dashboard footer component
//!
//! Renders footer with key bindings for the current input mode

use super::super::state::InputMode;
use ratatui::Frame;
use ratatui::layout::Alignment;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

pub fn render_footer(f: &mut Frame, area: ratatui::layout::Rect, mode: InputMode) {
    let footer_text = match mode {
        InputMode::Normal => {
            "[N] New Quote | [L] Like/Unlike | [/] Search | [↑↓] Select | [D] Remove | [Q] Quit"
        }
        InputMode::Search => "Type to filter | [Backspace] Delete | [Enter/Esc] Done",
    };

    let footer = Paragraph::new(footer_text)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_type(BorderType::Thick),
        );
    f.render_widget(footer, area);
}
