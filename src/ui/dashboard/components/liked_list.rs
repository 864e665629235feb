//! Liked quotes panel
//!
//! Renders the search input and the filtered list of liked quotes

use super::super::state::{DashboardState, InputMode};
use super::super::utils::truncate_chars;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph};

/// Render the search box above the liked list.
pub fn render_liked_panel(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Fill(1)])
        .split(area);

    render_search_box(f, chunks[0], state);
    render_liked_list(f, chunks[1], state);
}

fn render_search_box(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let editing = state.input_mode() == InputMode::Search;
    let term = state.controller.search_term();

    let content = if term.is_empty() && !editing {
        Span::styled(
            "Search liked quotes... [/]",
            Style::default().fg(Color::DarkGray),
        )
    } else if editing {
        Span::styled(format!("{}_", term), Style::default().fg(Color::White))
    } else {
        Span::styled(term.to_string(), Style::default().fg(Color::White))
    };

    let border_color = if editing { Color::Yellow } else { Color::DarkGray };
    let search = Paragraph::new(Line::from(content)).block(
        Block::default()
            .title("SEARCH")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border_color)),
    );
    f.render_widget(search, area);
}

fn render_liked_list(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let controller = &state.controller;
    let visible = controller.visible_liked_quotes();
    let title = format!(
        "LIKED QUOTES ({}/{})",
        visible.len(),
        controller.liked_quotes().len()
    );
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan));

    if visible.is_empty() {
        let empty = Paragraph::new("No matching quotes found.")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        f.render_widget(empty, area);
        return;
    }

    // Borders plus the list's highlight symbol
    let width = area.width.saturating_sub(4) as usize;
    let items: Vec<ListItem> = visible
        .iter()
        .map(|item| {
            ListItem::new(vec![
                Line::from(Span::styled(
                    truncate_chars(&format!("\"{}\"", item.quote), width),
                    Style::default().fg(Color::White),
                )),
                Line::from(Span::styled(
                    truncate_chars(&format!("  - {}", item.author), width),
                    Style::default().fg(Color::DarkGray),
                )),
            ])
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .fg(Color::LightMagenta)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut list_state = ListState::default().with_selected(Some(state.selected()));
    f.render_stateful_widget(list, area, &mut list_state);
}
