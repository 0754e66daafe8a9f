use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::app::App;
use crate::models::MoodOption;
use crate::ui;

/// Render the replace-confirmation modal as an overlay
pub fn render_confirm_modal(frame: &mut Frame, area: Rect, app: &App, option: MoodOption) {
    // Calculate modal size and position (centered)
    let modal_width = 48.min(area.width.saturating_sub(4));
    let modal_height = 7.min(area.height.saturating_sub(4));
    let modal_x = (area.width.saturating_sub(modal_width)) / 2;
    let modal_y = (area.height.saturating_sub(modal_height)) / 2;

    let modal_area = Rect::new(modal_x, modal_y, modal_width, modal_height);

    // Clear the area behind the modal
    frame.render_widget(Clear, modal_area);

    // Modal block
    let block = Block::default()
        .title(" Replace mood? ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(modal_area);
    frame.render_widget(block, modal_area);

    let chunks = Layout::vertical([
        Constraint::Length(2), // Existing entry
        Constraint::Length(2), // Replacement
        Constraint::Length(1), // Controls
    ])
    .split(inner);

    let slot = app.selected_slot;
    let existing_line = match &app.today_by_slot[slot.index()] {
        Some(entry) => Line::from(vec![
            Span::raw(format!("{} already has ", slot.label())),
            Span::styled(
                format!("{} {}", entry.emoji, ui::mood_label(&entry.mood_id)),
                Style::default().fg(entry.color()).bold(),
            ),
            Span::raw(format!(" (at {})", entry.local_time_string())),
        ]),
        None => Line::from(format!("{} is empty", slot.label())),
    };
    frame.render_widget(Paragraph::new(existing_line).centered(), chunks[0]);

    let replace_line = Line::from(vec![
        Span::raw("Replace with "),
        Span::styled(
            format!("{} {}", option.emoji, option.label),
            Style::default().fg(option.color()).bold(),
        ),
        Span::raw("?"),
    ]);
    frame.render_widget(Paragraph::new(replace_line).centered(), chunks[1]);

    // Controls
    let controls = Line::from(vec![
        Span::styled("[y]", Style::default().bold()),
        Span::raw(" Replace   "),
        Span::styled("[n]", Style::default().bold()),
        Span::raw(" Cancel"),
    ]);
    frame.render_widget(Paragraph::new(controls).centered().dark_gray(), chunks[2]);
}
