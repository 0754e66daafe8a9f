use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::app::App;
use crate::models::MoodSlot;
use crate::ui;

/// Render the day detail modal as an overlay
pub fn render_day_detail_modal(frame: &mut Frame, area: Rect, app: &App) {
    // Calculate modal size and position (centered)
    let modal_width = 46.min(area.width.saturating_sub(4));
    let modal_height = 11.min(area.height.saturating_sub(4));
    let modal_x = (area.width.saturating_sub(modal_width)) / 2;
    let modal_y = (area.height.saturating_sub(modal_height)) / 2;

    let modal_area = Rect::new(modal_x, modal_y, modal_width, modal_height);

    // Clear the area behind the modal
    frame.render_widget(Clear, modal_area);

    // Modal block
    let block = Block::default()
        .title(format!(" {} ", app.selected_day.format("%A, %B %d, %Y")))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(modal_area);
    frame.render_widget(block, modal_area);

    let chunks = Layout::vertical([
        Constraint::Length(2), // Morning
        Constraint::Length(2), // Afternoon
        Constraint::Length(2), // Night
        Constraint::Length(1), // Completeness
        Constraint::Length(1), // Spacer
        Constraint::Length(1), // Controls
    ])
    .split(inner);

    let entries = app.entries_for_day(app.selected_day);

    for slot in MoodSlot::ALL {
        let line = match entries[slot.index()] {
            Some(entry) => Line::from(vec![
                Span::styled(format!("{:<10}", slot.label()), Style::default().bold()),
                Span::styled(
                    format!("{} {}", entry.emoji, ui::mood_label(&entry.mood_id)),
                    Style::default().fg(entry.color()),
                ),
                Span::styled(
                    format!("  at {}", entry.local_time_string()),
                    Style::default().dark_gray(),
                ),
            ]),
            None => Line::from(vec![
                Span::styled(format!("{:<10}", slot.label()), Style::default().bold()),
                Span::styled("(not logged)", Style::default().dark_gray()),
            ]),
        };
        frame.render_widget(Paragraph::new(line), chunks[slot.index()]);
    }

    // Completeness
    let filled = app.slots_filled(app.selected_day);
    let completeness = if filled == 3 {
        Line::from(Span::styled(
            "Complete day ✓",
            Style::default().fg(Color::Green).bold(),
        ))
    } else {
        Line::from(Span::styled(
            format!("{}/3 slots filled", filled),
            Style::default().dark_gray(),
        ))
    };
    frame.render_widget(Paragraph::new(completeness), chunks[3]);

    // Controls
    let controls = Line::from(vec![
        Span::styled("[Esc]", Style::default().bold()),
        Span::raw(" Close"),
    ]);
    frame.render_widget(Paragraph::new(controls).centered().dark_gray(), chunks[5]);
}
