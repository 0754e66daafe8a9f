mod calendar;
mod confirm;
mod detail;
mod stats;
mod today;

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style, Stylize},
    widgets::Paragraph,
};

use crate::app::{App, NotificationLevel};

pub use calendar::render_calendar;
pub use confirm::render_confirm_modal;
pub use detail::render_day_detail_modal;
pub use stats::render_stats;
pub use today::render_today;

/// Render the footer area with either a notification or navigation text
pub fn render_footer(frame: &mut Frame, area: Rect, app: &App, nav_text: &str) {
    if let Some(ref n) = app.notification {
        let color = match n.level {
            NotificationLevel::Info => Color::Green,
            NotificationLevel::Warning => Color::Yellow,
            NotificationLevel::Error => Color::Red,
        };
        frame.render_widget(
            Paragraph::new(n.message.as_str())
                .centered()
                .style(Style::default().fg(color).bold()),
            area,
        );
    } else {
        frame.render_widget(Paragraph::new(nav_text).centered().dark_gray(), area);
    }
}

/// Display label for a stored mood id, falling back to the raw id
pub fn mood_label(mood_id: &str) -> &str {
    crate::models::MoodOption::by_id(mood_id)
        .map(|o| o.label)
        .unwrap_or(mood_id)
}
