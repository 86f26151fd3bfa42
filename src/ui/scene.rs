//! Scene rendering: the scaled playfield, status bar, info panel, and the
//! game-over overlay. A read-only consumer of [`Snapshot`].

use crate::core::session::{Snapshot, Status};
use crate::ui::theme::Theme;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Render one frame of the game from the latest snapshot.
pub fn draw_ui(frame: &mut Frame, snapshot: &Snapshot, theme: &Theme, event_log: &[String]) {
    let area = frame.size();
    frame.render_widget(Clear, area);

    // Outer border
    let block = Block::default()
        .title(" Skyward ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Horizontal split: play area (left) | info panel (right)
    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(24)])
        .split(inner);

    // Left side: play area (top) + status bar (bottom 2 lines)
    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(10), Constraint::Length(2)])
        .split(h_chunks[0]);

    render_play_area(frame, v_chunks[0], snapshot, theme);
    render_status_bar(frame, v_chunks[1], snapshot);
    render_info_panel(frame, h_chunks[1], snapshot, event_log);

    if snapshot.status == Status::Lost {
        render_game_over(frame, area, snapshot);
    }
}

/// Map every cell to a playfield point (its center) and pick a glyph.
fn render_play_area(frame: &mut Frame, area: Rect, snapshot: &Snapshot, theme: &Theme) {
    let width = area.width as usize;
    let height = area.height as usize;
    if width == 0 || height == 0 {
        return;
    }

    let x_scale = snapshot.playfield_width as f64 / width as f64;
    let y_scale = snapshot.playfield_height as f64 / height as f64;

    let mut lines = Vec::with_capacity(height);
    for row in 0..height {
        let gy = ((row as f64 + 0.5) * y_scale) as i32;
        let mut spans = Vec::with_capacity(width);

        for col in 0..width {
            let gx = ((col as f64 + 0.5) * x_scale) as i32;

            if contains(&snapshot.bird, gx, gy) {
                spans.push(Span::styled(
                    theme.bird_glyph(snapshot.vertical_velocity),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ));
            } else if snapshot.obstacles.iter().any(|rect| contains(rect, gx, gy)) {
                spans.push(Span::styled(
                    theme.obstacle.as_str(),
                    Style::default().fg(Color::Green),
                ));
            } else {
                spans.push(Span::raw(theme.sky.as_str()));
            }
        }
        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn contains(rect: &crate::core::collision::Rect, x: i32, y: i32) -> bool {
    x >= rect.x && x < rect.x + rect.width && y >= rect.y && y < rect.y + rect.height
}

/// Status bar: score on line 1, controls on line 2.
fn render_status_bar(frame: &mut Frame, area: Rect, snapshot: &Snapshot) {
    if area.height < 1 {
        return;
    }

    let (message, color) = match snapshot.status {
        Status::Active => (format!("Score: {}", snapshot.score), Color::Green),
        Status::Lost => ("Crashed!".to_string(), Color::Red),
    };
    let status = Paragraph::new(message)
        .style(Style::default().fg(color))
        .alignment(Alignment::Center);
    frame.render_widget(status, Rect { height: 1, ..area });

    if area.height >= 2 {
        let controls: &[(&str, &str)] = match snapshot.status {
            Status::Active => &[("[Space]", "Jump"), ("[Q]", "Quit")],
            Status::Lost => &[("[R]", "Restart"), ("[Q]", "Quit")],
        };
        let mut spans = Vec::new();
        for (i, (key, action)) in controls.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(*key, Style::default().fg(Color::White)));
            spans.push(Span::styled(
                format!(" {}", action),
                Style::default().fg(Color::DarkGray),
            ));
        }
        let controls_area = Rect {
            y: area.y + 1,
            height: 1,
            ..area
        };
        let paragraph = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
        frame.render_widget(paragraph, controls_area);
    }
}

/// Info panel: score, status, and the recent event log.
fn render_info_panel(frame: &mut Frame, area: Rect, snapshot: &Snapshot, event_log: &[String]) {
    let block = Block::default()
        .title(" Info ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height < 2 || inner.width < 4 {
        return;
    }

    let status_line = match snapshot.status {
        Status::Active => Span::styled(" Flying", Style::default().fg(Color::Green)),
        Status::Lost => Span::styled(" Crashed", Style::default().fg(Color::Red)),
    };

    let mut lines = vec![
        Line::from(vec![
            Span::styled(" Score: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}", snapshot.score),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(status_line),
        Line::from(""),
    ];

    for message in event_log {
        lines.push(Line::from(Span::styled(
            format!(" {}", message),
            Style::default().fg(Color::DarkGray),
        )));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

/// Centered game-over overlay with the final score and restart hint.
fn render_game_over(frame: &mut Frame, area: Rect, snapshot: &Snapshot) {
    let overlay_width = 36.min(area.width);
    let overlay_height = 7.min(area.height);
    let overlay = Rect {
        x: area.x + (area.width.saturating_sub(overlay_width)) / 2,
        y: area.y + (area.height.saturating_sub(overlay_height)) / 2,
        width: overlay_width,
        height: overlay_height,
    };

    frame.render_widget(Clear, overlay);
    let block = Block::default()
        .title(" Game Over ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));
    let inner = block.inner(overlay);
    frame.render_widget(block, overlay);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "CRASH!",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(format!("Your Score: {}", snapshot.score)),
        Line::from(""),
        Line::from(Span::styled(
            "[R] Restart  [Q] Quit",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, inner);
}
