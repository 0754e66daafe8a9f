use chrono::{Datelike, NaiveDate};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::{App, last_of_month};
use crate::ui;

/// Render the calendar view
pub fn render_calendar(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Length(3), // Title
        Constraint::Length(1), // Weekday header
        Constraint::Min(6),    // Month grid
        Constraint::Length(3), // Streak summary
        Constraint::Length(3), // Controls
        Constraint::Length(1), // Footer
    ])
    .split(area);

    // Title: month and year
    let title = Line::from(app.month.format("%B %Y").to_string())
        .bold()
        .blue()
        .centered();
    frame.render_widget(
        Paragraph::new(title).block(Block::default().borders(Borders::BOTTOM)),
        chunks[0],
    );

    // Weekday header, Monday first
    let header: Vec<Span> = ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"]
        .iter()
        .map(|d| Span::styled(format!("{:>3} ", d), Style::default().dark_gray().bold()))
        .collect();
    frame.render_widget(Paragraph::new(Line::from(header)).centered(), chunks[1]);

    // Month grid
    frame.render_widget(
        Paragraph::new(build_month_grid(app)).centered(),
        chunks[2],
    );

    // Streak summary
    let summary = format!(
        "Current streak: {} day(s)  |  Longest: {} day(s)",
        app.streak.current, app.streak.longest
    );
    frame.render_widget(
        Paragraph::new(summary)
            .centered()
            .block(Block::default().borders(Borders::TOP)),
        chunks[3],
    );

    // Controls
    let controls = "[←↑↓→] Move  [[/]] Month  [g] Today  [Enter] Day Details";
    frame.render_widget(
        Paragraph::new(controls)
            .centered()
            .dark_gray()
            .block(Block::default().borders(Borders::TOP)),
        chunks[4],
    );

    // Footer / notification
    ui::render_footer(frame, chunks[5], app, "[Tab] Today  [t] Stats  [q] Quit");
}

/// Build the week rows for the displayed month.
///
/// Cells are styled by completeness: all three slots green, a partial day
/// yellow, an empty day gray. The selected day gets a highlight background
/// and today is underlined.
fn build_month_grid(app: &App) -> Vec<Line<'static>> {
    let first = app.month;
    let last = last_of_month(first);
    let leading_blanks = first.weekday().num_days_from_monday() as usize;

    let mut lines = Vec::new();
    let mut week: Vec<Span> = vec![Span::raw("    "); leading_blanks];

    for day_num in 1..=last.day() {
        let Some(date) = first.with_day(day_num) else {
            continue;
        };
        week.push(day_cell(app, date));

        if week.len() == 7 {
            lines.push(Line::from(std::mem::take(&mut week)));
        }
    }

    if !week.is_empty() {
        lines.push(Line::from(week));
    }

    lines
}

fn day_cell(app: &App, date: NaiveDate) -> Span<'static> {
    let filled = app.slots_filled(date);
    let mut style = match filled {
        3 => Style::default().fg(Color::Green).bold(),
        1 | 2 => Style::default().fg(Color::Yellow),
        _ => Style::default().dark_gray(),
    };

    if date == app.today {
        style = style.add_modifier(Modifier::UNDERLINED);
    }
    if date == app.selected_day {
        style = style.bg(Color::DarkGray).add_modifier(Modifier::BOLD);
    }

    Span::styled(format!("{:>3} ", date.day()), style)
}
