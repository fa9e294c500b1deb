use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use todobot_core::ui::{BOT_NAME, SEPARATOR};
use todobot_core::TaskStore;

use crate::tui::app::{App, InputMode};

pub fn draw<S: TaskStore>(f: &mut Frame, app: &App<S>) {
    let size = f.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(0)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(1),    // Transcript
            Constraint::Length(3), // Input
            Constraint::Length(1), // Footer/Help
        ])
        .split(size);

    let header = Paragraph::new(BOT_NAME.to_uppercase())
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded));
    f.render_widget(header, chunks[0]);

    draw_transcript(f, app, chunks[1]);
    draw_input(f, app, chunks[2]);

    let help = match app.input_mode {
        InputMode::Typing => format!(
            "Enter: Send | PgUp/PgDn: Scroll | Esc: Quit | {} task(s)",
            app.session.tasks().len()
        ),
        InputMode::Finished => "Press any key to close".to_string(),
    };
    let footer = Paragraph::new(help)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(footer, chunks[3]);
}

fn draw_transcript<S: TaskStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let lines: Vec<Line> = app
        .transcript
        .iter()
        .map(|line| {
            if let Some(input) = line.strip_prefix("> ") {
                Line::from(vec![
                    Span::styled("> ", Style::default().fg(Color::Yellow)),
                    Span::styled(input, Style::default().add_modifier(Modifier::BOLD)),
                ])
            } else if line == SEPARATOR {
                Line::styled(line.as_str(), Style::default().fg(Color::DarkGray))
            } else if line.starts_with(" OOPS!!!") {
                Line::styled(line.as_str(), Style::default().fg(Color::Red))
            } else {
                Line::raw(line.as_str())
            }
        })
        .collect();

    // Keep the newest line at the bottom edge unless scrolled back.
    let visible = usize::from(area.height.saturating_sub(2));
    let top = lines
        .len()
        .saturating_sub(visible)
        .saturating_sub(app.scroll_back);

    let transcript = Paragraph::new(lines)
        .block(
            Block::default()
                .title(" Chat ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .scroll((u16::try_from(top).unwrap_or(u16::MAX), 0));
    f.render_widget(transcript, area);
}

fn draw_input<S: TaskStore>(f: &mut Frame, app: &App<S>, area: Rect) {
    let style = match app.input_mode {
        InputMode::Typing => Style::default().fg(Color::Yellow),
        InputMode::Finished => Style::default().fg(Color::DarkGray),
    };
    let input = Paragraph::new(app.input.as_str()).style(style).block(
        Block::default()
            .title(" Command ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(input, area);

    if let InputMode::Typing = app.input_mode {
        f.set_cursor_position((area.x + 1 + app.cursor_column(), area.y + 1));
    }
}
