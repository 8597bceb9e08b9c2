use crate::tui::app::App;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::UnicodeWidthStr;

pub fn draw(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Input box
            Constraint::Min(3),    // Suggestion panel
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    draw_input(frame, app, chunks[0]);
    draw_suggestions(frame, app, chunks[1]);
    draw_status_bar(frame, app, chunks[2]);

    // Hardware cursor inside the input box, border (1) + space (1) ahead
    let typed_width = app.input.query[..app.input.cursor_pos].width() as u16;
    let cursor_x = chunks[0].x + 2 + typed_width;
    let cursor_y = chunks[0].y + 1;
    frame.set_cursor_position(Position::new(cursor_x, cursor_y));
}

fn draw_input(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" Find a user ");

    let text = format!(" {}", app.input.query);
    let paragraph = Paragraph::new(text)
        .block(block)
        .style(Style::default().fg(Color::White));

    frame.render_widget(paragraph, area);
}

fn draw_suggestions(frame: &mut Frame, app: &mut App, area: Rect) {
    if !app.panel.open {
        app.list_area = None;
        return;
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" Suggestions ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if app.suggestions.is_empty() {
        app.list_area = None;
        let placeholder = Paragraph::new(" No matching names")
            .style(Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC));
        frame.render_widget(placeholder, inner);
        return;
    }

    app.panel.visible_rows = inner.height as usize;
    let highlighted = app.panel.highlighted;
    app.panel.ensure_visible(highlighted);
    app.list_area = Some(inner);

    // Build visible rows only
    let start = app.panel.scroll_offset;
    let end = (start + app.panel.visible_rows).min(app.suggestions.len());

    for (visual_idx, logical_idx) in (start..end).enumerate() {
        let hit = &app.suggestions[logical_idx];
        let is_highlighted = logical_idx == highlighted;

        let (name_style, email_style) = if is_highlighted {
            let base = Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD);
            (base, base)
        } else {
            (
                Style::default().fg(Color::White),
                Style::default().fg(Color::DarkGray),
            )
        };

        let line = Line::from(vec![
            Span::styled(format!(" {}", hit.user.name), name_style),
            Span::styled(format!("  <{}>", hit.user.email), email_style),
        ]);

        let row_area = Rect::new(inner.x, inner.y + visual_idx as u16, inner.width, 1);
        let mut paragraph = Paragraph::new(line);
        if is_highlighted {
            paragraph = paragraph.style(Style::default().bg(Color::Cyan));
        }
        frame.render_widget(paragraph, row_area);
    }
}

fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    const HINT: &str = "\u{2191}/\u{2193} navigate  Enter select  Esc close  Ctrl-Q quit ";

    let left = format!(" {}", app.status_message);
    let padding = (area.width as usize)
        .saturating_sub(left.width())
        .saturating_sub(HINT.width());

    let line = Line::from(vec![
        Span::styled(left, Style::default().fg(Color::White)),
        Span::raw(" ".repeat(padding)),
        Span::styled(HINT, Style::default().fg(Color::DarkGray)),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}
