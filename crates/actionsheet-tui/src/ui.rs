//! Bottom sheet rendering.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color as TermColor, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, Paragraph};

use actionsheet_core::Color;

use super::state::{Focus, SheetViewState};

/// Converts a sheet color to a terminal color.
const fn term_color(color: Color) -> TermColor {
    TermColor::Rgb(color.red, color.green, color.blue)
}

/// Style for the entry under the cursor.
fn focused(style: Style) -> Style {
    style.add_modifier(Modifier::REVERSED | Modifier::BOLD)
}

/// Draws the sheet anchored to the bottom of the screen.
#[allow(clippy::indexing_slicing)]
pub fn draw(frame: &mut Frame, state: &SheetViewState) {
    let header_lines = state.sheet.header.as_ref().map_or(0, |header| {
        u16::from(header.title.is_some()).saturating_add(u16::from(header.message.is_some()))
    });
    let rows = u16::try_from(state.sheet.row_count()).unwrap_or(u16::MAX);
    let header_height = if header_lines > 0 {
        header_lines.saturating_add(2)
    } else {
        0
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0), // backdrop
            Constraint::Length(header_height), // header
            Constraint::Length(rows.saturating_add(2)), // options
            Constraint::Length(if state.sheet.cancel.is_some() { 3 } else { 0 }), // cancel
            Constraint::Length(1), // key hints
        ])
        .split(frame.area());

    if header_lines > 0 {
        draw_header(frame, chunks[1], state);
    }
    draw_rows(frame, chunks[2], state);
    if state.sheet.cancel.is_some() {
        draw_cancel(frame, chunks[3], state);
    }
    draw_footer(frame, chunks[4]);
}

/// Draws title and message.
fn draw_header(frame: &mut Frame, area: Rect, state: &SheetViewState) {
    let Some(header) = &state.sheet.header else {
        return;
    };

    let mut lines = Vec::new();
    if let Some(title) = &header.title {
        lines.push(Line::from(Span::styled(
            title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )));
    }
    if let Some(message) = &header.message {
        lines.push(Line::from(Span::styled(
            message.clone(),
            Style::default().fg(TermColor::Gray),
        )));
    }

    frame.render_widget(Clear, area);
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}

/// Draws the option rows.
fn draw_rows(frame: &mut Frame, area: Rect, state: &SheetViewState) {
    let focus = state.focus();
    let items: Vec<ListItem> = state
        .sheet
        .rows
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let base = if row.destructive {
                Style::default().fg(TermColor::Red)
            } else {
                Style::default()
            };
            let style = if focus == Focus::Row(i) {
                focused(base)
            } else {
                base
            };
            ListItem::new(Line::from(Span::styled(format!(" {} ", row.text), style)))
        })
        .collect();

    frame.render_widget(Clear, area);
    let list = List::new(items).block(Block::default().borders(Borders::ALL));
    frame.render_widget(list, area);
}

/// Draws the cancel row.
fn draw_cancel(frame: &mut Frame, area: Rect, state: &SheetViewState) {
    let Some(cancel) = &state.sheet.cancel else {
        return;
    };

    let base = Style::default().fg(term_color(cancel.color));
    let style = if state.focus() == Focus::Cancel {
        focused(base)
    } else {
        base
    };

    frame.render_widget(Clear, area);
    let paragraph = Paragraph::new(Line::from(Span::styled(cancel.text.clone(), style)))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}

/// Draws the footer with key hints.
fn draw_footer(frame: &mut Frame, area: Rect) {
    let help_text =
        "\u{2191}\u{2193}/j/k: move  Enter/Space: choose  1-9: quick pick  Esc/q: dismiss";
    frame.render_widget(Clear, area);
    frame.render_widget(Paragraph::new(help_text), area);
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use actionsheet_core::{SelectionRequest, Sheet};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;

    fn render(state: &SheetViewState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        terminal.draw(|frame| draw(frame, state)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn test_draw_shows_header_rows_and_cancel() {
        // Arrange
        let request = SelectionRequest::new(["Archive", "Delete"])
            .with_title("Message")
            .with_message("What now?")
            .with_cancel_label("Never mind")
            .with_destructive_index(1);
        let state = SheetViewState::new(Sheet::from_request(&request));

        // Act
        let screen = render(&state);

        // Assert
        assert!(screen.contains("Message"));
        assert!(screen.contains("What now?"));
        assert!(screen.contains("Archive"));
        assert!(screen.contains("Delete"));
        assert!(screen.contains("Never mind"));
    }

    #[test]
    fn test_draw_empty_sheet() {
        // Arrange
        let state = SheetViewState::new(Sheet::from_request(&SelectionRequest::default()));

        // Act
        let screen = render(&state);

        // Assert
        assert!(screen.contains("Esc/q: dismiss"));
    }

    #[test]
    fn test_destructive_row_is_red() {
        // Arrange
        let request = SelectionRequest::new(["Delete"]).with_destructive_index(0);
        let state = SheetViewState::new(Sheet::from_request(&request));
        let mut terminal = Terminal::new(TestBackend::new(30, 8)).unwrap();

        // Act
        terminal.draw(|frame| draw(frame, &state)).unwrap();

        // Assert
        let buffer = terminal.backend().buffer();
        let red = buffer
            .content()
            .iter()
            .any(|cell| cell.symbol() == "D" && cell.fg == TermColor::Red);
        assert!(red);
    }
}
