use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;
use crate::models::{MoodOption, MoodSlot};
use crate::ui;

/// Render the today view
pub fn render_today(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Length(3), // Title
        Constraint::Length(2), // Date + streak line
        Constraint::Length(7), // Slot cards
        Constraint::Length(4), // Mood picker
        Constraint::Min(1),    // Spacer
        Constraint::Length(3), // Controls
        Constraint::Length(1), // Footer
    ])
    .split(area);

    // Title
    let title = Line::from("Moodlog").bold().blue().centered();
    frame.render_widget(
        Paragraph::new(title).block(Block::default().borders(Borders::BOTTOM)),
        chunks[0],
    );

    // Date and current streak
    let date_line = Line::from(vec![
        Span::styled(
            app.today.format("%A, %B %d, %Y").to_string(),
            Style::default().bold(),
        ),
        Span::raw("   "),
        Span::styled(
            format!("streak: {} day(s)", app.streak.current),
            Style::default().fg(Color::Magenta),
        ),
    ]);
    frame.render_widget(Paragraph::new(date_line).centered(), chunks[1]);

    // One card per slot
    let slot_areas = Layout::horizontal([
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
    ])
    .split(chunks[2]);

    for slot in MoodSlot::ALL {
        render_slot_card(frame, slot_areas[slot.index()], app, slot);
    }

    // Mood picker
    let picker_spans: Vec<Span> = MoodOption::ALL
        .iter()
        .enumerate()
        .flat_map(|(i, option)| {
            vec![
                Span::styled(format!("[{}] ", i + 1), Style::default().bold()),
                Span::styled(
                    format!("{} {}", option.emoji, option.label),
                    Style::default().fg(option.color()),
                ),
                Span::raw("    "),
            ]
        })
        .collect();
    frame.render_widget(
        Paragraph::new(Line::from(picker_spans))
            .centered()
            .block(Block::default().title("Log a mood").borders(Borders::TOP)),
        chunks[3],
    );

    // Controls
    let controls = "[←/→] Slot  [1-3] Log Mood";
    frame.render_widget(
        Paragraph::new(controls)
            .centered()
            .dark_gray()
            .block(Block::default().borders(Borders::TOP)),
        chunks[5],
    );

    // Footer / notification
    ui::render_footer(frame, chunks[6], app, "[c] Calendar  [t] Stats  [q] Quit");
}

fn render_slot_card(frame: &mut Frame, area: Rect, app: &App, slot: MoodSlot) {
    let selected = app.selected_slot == slot;
    let border_style = if selected {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().dark_gray()
    };
    let title = if selected {
        format!(" {} ◀ ", slot.label())
    } else {
        format!(" {} ", slot.label())
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = match &app.today_by_slot[slot.index()] {
        Some(entry) => vec![
            Line::from(Span::styled(
                format!("{} {}", entry.emoji, ui::mood_label(&entry.mood_id)),
                Style::default().fg(entry.color()).bold(),
            ))
            .centered(),
            Line::from(Span::styled(
                format!("at {}", entry.local_time_string()),
                Style::default().dark_gray(),
            ))
            .centered(),
        ],
        None => vec![Line::from(Span::styled("not logged", Style::default().dark_gray())).centered()],
    };

    frame.render_widget(Paragraph::new(lines), inner);
}
