use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
};

use crate::app::App;
use crate::config::STATS_WINDOW_DAYS;
use crate::models::{MoodCountStat, MoodOption, argb_to_color};
use crate::ui;

/// Render the statistics view
pub fn render_stats(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Length(3), // Title
        Constraint::Length(3), // Streak summary
        Constraint::Min(1),    // Chart + recent entries
        Constraint::Length(1), // Footer
    ])
    .split(area);

    // Title
    let title = Line::from("Mood Statistics").bold().blue().centered();
    frame.render_widget(
        Paragraph::new(title).block(Block::default().borders(Borders::BOTTOM)),
        chunks[0],
    );

    // Streak summary
    let mut summary_spans = vec![
        Span::styled("Current streak: ", Style::default().bold()),
        Span::styled(
            format!("{} day(s)", app.streak.current),
            Style::default().fg(Color::Magenta).bold(),
        ),
        Span::raw("   "),
        Span::styled("Longest: ", Style::default().bold()),
        Span::styled(
            format!("{} day(s)", app.streak.longest),
            Style::default().fg(Color::Magenta),
        ),
        Span::raw("   "),
        Span::styled("Complete days: ", Style::default().bold()),
        Span::raw(format!("{}", app.complete_day_count)),
    ];
    if let Some(avg) = average_score(&app.mood_counts) {
        summary_spans.push(Span::raw("   "));
        summary_spans.push(Span::styled("Avg score: ", Style::default().bold()));
        summary_spans.push(Span::raw(format!("{:.1}", avg)));
    }
    frame.render_widget(
        Paragraph::new(Line::from(summary_spans))
            .centered()
            .block(Block::default().borders(Borders::BOTTOM)),
        chunks[1],
    );

    // Chart area - mood distribution and the recent log side by side
    let body = Layout::horizontal([
        Constraint::Percentage(55), // Bar chart
        Constraint::Percentage(45), // Recent entries
    ])
    .split(chunks[2]);

    render_mood_chart(frame, body[0], &app.mood_counts);
    render_recent_entries(frame, body[1], app);

    // Footer / notification
    ui::render_footer(
        frame,
        chunks[3],
        app,
        "[Tab] Today  [c] Calendar  [q] Quit",
    );
}

/// Count-weighted mean of the mood scores in the stats window.
///
/// Moods without a catalog entry carry no score and are left out.
fn average_score(counts: &[MoodCountStat]) -> Option<f64> {
    let (sum, n) = counts
        .iter()
        .filter_map(|stat| MoodOption::by_id(&stat.mood_id).map(|o| (o.score as i64, stat.count)))
        .fold((0i64, 0i64), |(sum, n), (score, count)| {
            (sum + score * count, n + count)
        });

    (n > 0).then(|| sum as f64 / n as f64)
}

/// Look up a mood's color by id, with gray fallback
fn mood_color(mood_id: &str) -> Color {
    MoodOption::by_id(mood_id)
        .map(|o| argb_to_color(o.color_argb))
        .unwrap_or(Color::Gray)
}

fn render_mood_chart(frame: &mut Frame, area: Rect, counts: &[MoodCountStat]) {
    let title = format!("Moods (last {} days)", STATS_WINDOW_DAYS);

    if counts.is_empty() {
        frame.render_widget(
            Paragraph::new("No moods logged yet")
                .centered()
                .dark_gray()
                .block(Block::default().borders(Borders::ALL).title(title)),
            area,
        );
        return;
    }

    let max_count = counts.iter().map(|s| s.count).max().unwrap_or(1);

    let bars: Vec<Bar> = counts
        .iter()
        .map(|stat| {
            let label = MoodOption::by_id(&stat.mood_id)
                .map(|o| format!("{} {}", o.emoji, o.label))
                .unwrap_or_else(|| stat.mood_id.clone());
            Bar::default()
                .value(stat.count as u64)
                .label(Line::from(label))
                .text_value(stat.count.to_string())
                .style(Style::default().fg(mood_color(&stat.mood_id)))
        })
        .collect();

    let chart = BarChart::default()
        .block(Block::default().borders(Borders::ALL).title(title))
        .bar_width(9)
        .bar_gap(2)
        .data(BarGroup::default().bars(&bars))
        .max(max_count as u64);

    frame.render_widget(chart, area);
}

fn render_recent_entries(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default().borders(Borders::ALL).title("Recent");

    if app.recent_entries.is_empty() {
        frame.render_widget(
            Paragraph::new("Nothing logged yet")
                .centered()
                .dark_gray()
                .block(block),
            area,
        );
        return;
    }

    let lines: Vec<Line> = app
        .recent_entries
        .iter()
        .map(|entry| {
            Line::from(vec![
                Span::styled(
                    entry.date.format("%b %d").to_string(),
                    Style::default().dark_gray(),
                ),
                Span::raw("  "),
                Span::styled(
                    format!("{:<9}", entry.slot.label()),
                    Style::default().fg(Color::Cyan),
                ),
                Span::raw("  "),
                Span::styled(
                    format!("{} {}", entry.emoji, ui::mood_label(&entry.mood_id)),
                    Style::default().fg(entry.color()),
                ),
                Span::raw("  "),
                Span::styled(entry.local_time_string(), Style::default().dark_gray()),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
