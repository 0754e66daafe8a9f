use chrono::{Datelike, Days, Months, NaiveDate};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{DefaultTerminal, Frame};

use crate::clock::{Clock, SystemClock};
use crate::config::{RECENT_ENTRIES_LIMIT, STATS_WINDOW_DAYS, TICK_RATE};
use crate::db::{self, Database};
use crate::event::{AppEvent, poll_event};
use crate::models::{MoodCountStat, MoodEntry, MoodOption, MoodSlot, default_slot_for_time};
use crate::streak::{StreakStats, compute_streak};
use crate::ui::{
    render_calendar, render_confirm_modal, render_day_detail_modal, render_stats, render_today,
};

/// The current view/screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Today,
    Calendar,
    Stats,
}

/// The current modal state - only one modal can be open at a time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    None,
    /// Asking whether to overwrite an already-logged slot
    ConfirmReplace { option: MoodOption },
    /// Showing the selected calendar day's entries
    DayDetail,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Warning,
    Error,
}

/// A transient footer message, cleared on the next keypress
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub level: NotificationLevel,
}

/// First day of the month containing `date`
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Last day of the month containing `month_start`
pub fn last_of_month(month_start: NaiveDate) -> NaiveDate {
    first_of_month(month_start)
        .checked_add_months(Months::new(1))
        .and_then(|d| d.pred_opt())
        .unwrap_or(month_start)
}

/// The main application state
pub struct App {
    pub running: bool,
    pub view: View,
    pub modal: ModalState,
    clock: SystemClock,

    // Today view state
    pub today: NaiveDate,
    pub selected_slot: MoodSlot,
    pub today_by_slot: [Option<MoodEntry>; 3],

    // Calendar view state
    pub month: NaiveDate, // first day of the displayed month
    pub selected_day: NaiveDate,
    pub month_entries: Vec<MoodEntry>,

    // Stats view state
    pub streak: StreakStats,
    pub complete_day_count: usize,
    pub mood_counts: Vec<MoodCountStat>,
    pub recent_entries: Vec<MoodEntry>,

    pub notification: Option<Notification>,

    // Database
    db: Option<Database>,
}

impl Default for App {
    fn default() -> Self {
        let clock = SystemClock;
        let today = clock.today();
        Self {
            running: false,
            view: View::Today,
            modal: ModalState::None,
            clock,
            today,
            selected_slot: default_slot_for_time(clock.local_time()),
            today_by_slot: [None, None, None],
            month: first_of_month(today),
            selected_day: today,
            month_entries: Vec::new(),
            streak: StreakStats::default(),
            complete_day_count: 0,
            mood_counts: Vec::new(),
            recent_entries: Vec::new(),
            notification: None,
            db: None,
        }
    }
}

impl App {
    /// Create a new application instance
    pub fn new() -> color_eyre::Result<Self> {
        let mut app = Self::default();

        match Database::open() {
            Ok(database) => {
                app.db = Some(database);
                app.refresh_data();
            }
            Err(e) => {
                log::warn!("Could not open database: {e}");
                app.notify(
                    NotificationLevel::Warning,
                    "Could not open database - moods will not be saved",
                );
            }
        }

        Ok(app)
    }

    /// Run the application's main loop
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;

        while self.running {
            terminal.draw(|frame| self.render(frame))?;

            if let Some(event) = poll_event(TICK_RATE)? {
                match event {
                    AppEvent::Key(key) => self.handle_key_event(key),
                    AppEvent::Tick => self.handle_tick(),
                }
            }
        }

        Ok(())
    }

    /// Render the current view
    fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();

        match self.view {
            View::Today => render_today(frame, area, self),
            View::Calendar => render_calendar(frame, area, self),
            View::Stats => render_stats(frame, area, self),
        }

        // Render modal on top if visible
        match self.modal {
            ModalState::None => {}
            ModalState::ConfirmReplace { option } => render_confirm_modal(frame, area, self, option),
            ModalState::DayDetail => render_day_detail_modal(frame, area, self),
        }
    }

    /// Handle a key event
    fn handle_key_event(&mut self, key: KeyEvent) {
        self.notification = None;

        // Handle modal input first
        match self.modal {
            ModalState::ConfirmReplace { option } => {
                self.handle_confirm_modal_key(key, option);
                return;
            }
            ModalState::DayDetail => {
                if matches!(key.code, KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q')) {
                    self.modal = ModalState::None;
                }
                return;
            }
            ModalState::None => {}
        }

        // Global keys
        match (key.modifiers, key.code) {
            (_, KeyCode::Char('q')) | (_, KeyCode::Esc) => self.quit(),
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => self.quit(),
            (_, KeyCode::Tab) => {
                self.view = View::Today;
                self.refresh_data();
            }
            (_, KeyCode::Char('c')) if self.view != View::Calendar => {
                self.view = View::Calendar;
                self.refresh_data();
            }
            (_, KeyCode::Char('t')) if self.view != View::Stats => {
                self.view = View::Stats;
                self.refresh_data();
            }
            _ => {
                // View-specific keys
                match self.view {
                    View::Today => self.handle_today_key(key),
                    View::Calendar => self.handle_calendar_key(key),
                    View::Stats => {}
                }
            }
        }
    }

    /// Handle today view keys
    fn handle_today_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => {
                self.selected_slot = self.selected_slot.prev();
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.selected_slot = self.selected_slot.next();
            }
            KeyCode::Char(c @ '1'..='3') => {
                let idx = (c as usize) - ('1' as usize);
                self.request_save(MoodOption::ALL[idx]);
            }
            _ => {}
        }
    }

    /// Handle calendar view keys
    fn handle_calendar_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => self.move_selected_day(-1),
            KeyCode::Right | KeyCode::Char('l') => self.move_selected_day(1),
            KeyCode::Up | KeyCode::Char('k') => self.move_selected_day(-7),
            KeyCode::Down | KeyCode::Char('j') => self.move_selected_day(7),
            KeyCode::Char('[') => self.change_month(-1),
            KeyCode::Char(']') => self.change_month(1),
            KeyCode::Char('g') => {
                self.selected_day = self.today;
                self.set_month(first_of_month(self.today));
            }
            KeyCode::Enter => {
                self.modal = ModalState::DayDetail;
            }
            _ => {}
        }
    }

    /// Handle replace-confirmation modal keys
    fn handle_confirm_modal_key(&mut self, key: KeyEvent, option: MoodOption) {
        match key.code {
            KeyCode::Char('y') | KeyCode::Enter => {
                self.modal = ModalState::None;
                self.save_mood(option);
            }
            KeyCode::Char('n') | KeyCode::Esc => {
                self.modal = ModalState::None;
            }
            _ => {}
        }
    }

    /// Handle a tick: roll the app over when the calendar date changes
    fn handle_tick(&mut self) {
        let now = self.clock.today();
        if now != self.today {
            self.today = now;
            self.selected_slot = default_slot_for_time(self.clock.local_time());
            self.selected_day = now;
            self.set_month(first_of_month(now));
            // set_month only refreshes on a month change; the new date always
            // invalidates today's slots and the streak anchor.
            self.refresh_data();
        }
    }

    /// Save the mood for the selected slot, asking first if the slot is taken
    fn request_save(&mut self, option: MoodOption) {
        if self.today_by_slot[self.selected_slot.index()].is_some() {
            self.modal = ModalState::ConfirmReplace { option };
        } else {
            self.save_mood(option);
        }
    }

    /// Write the entry for (today, selected slot) and report the outcome
    fn save_mood(&mut self, option: MoodOption) {
        let slot = self.selected_slot;
        let entry = MoodEntry {
            date: self.today,
            slot,
            mood_id: option.id.to_string(),
            emoji: option.emoji.to_string(),
            color_argb: option.color_argb,
            created_at_millis: self.clock.now_millis(),
        };

        let result = match self.db {
            Some(ref db) => {
                if let Ok(Some(prev)) = db::get_entry(&db.conn, self.today, slot) {
                    log::info!(
                        "Replacing {} {} mood '{}' with '{}'",
                        self.today,
                        slot.label(),
                        prev.mood_id,
                        option.id
                    );
                }
                db::upsert_entry(&db.conn, &entry)
                    .and_then(|_| db::is_day_complete(&db.conn, self.today))
            }
            None => {
                self.notify(NotificationLevel::Error, "No database - mood not saved");
                return;
            }
        };

        match result {
            Ok(true) => self.notify(
                NotificationLevel::Info,
                format!("{} {} saved - day complete!", option.emoji, slot.label()),
            ),
            Ok(false) => self.notify(
                NotificationLevel::Info,
                format!("{} {} saved", option.emoji, slot.label()),
            ),
            Err(e) => {
                log::error!("Failed to save mood: {e}");
                self.notify(NotificationLevel::Error, "Couldn't save. Try again.");
            }
        }

        self.refresh_data();
    }

    /// Move the calendar selection by whole days, following across months
    fn move_selected_day(&mut self, delta_days: i64) {
        let moved = if delta_days >= 0 {
            self.selected_day.checked_add_days(Days::new(delta_days as u64))
        } else {
            self.selected_day.checked_sub_days(Days::new(delta_days.unsigned_abs()))
        };

        if let Some(day) = moved {
            self.selected_day = day;
            self.set_month(first_of_month(day));
        }
    }

    /// Shift the displayed month, clamping the selected day into it
    fn change_month(&mut self, delta_months: i64) {
        let moved = if delta_months >= 0 {
            self.month.checked_add_months(Months::new(delta_months as u32))
        } else {
            self.month.checked_sub_months(Months::new(delta_months.unsigned_abs() as u32))
        };

        if let Some(month_start) = moved {
            let day = self.selected_day.day().min(last_of_month(month_start).day());
            self.selected_day = month_start.with_day(day).unwrap_or(month_start);
            self.set_month(month_start);
        }
    }

    fn set_month(&mut self, month_start: NaiveDate) {
        if self.month != month_start {
            self.month = month_start;
            self.refresh_data();
        }
    }

    /// Entries for one day of the loaded month, indexed by slot
    pub fn entries_for_day(&self, date: NaiveDate) -> [Option<&MoodEntry>; 3] {
        let mut slots = [None, None, None];
        for entry in self.month_entries.iter().filter(|e| e.date == date) {
            slots[entry.slot.index()] = Some(entry);
        }
        slots
    }

    /// How many slots are filled for one day of the loaded month
    pub fn slots_filled(&self, date: NaiveDate) -> usize {
        self.entries_for_day(date).iter().flatten().count()
    }

    fn notify(&mut self, level: NotificationLevel, message: impl Into<String>) {
        self.notification = Some(Notification {
            message: message.into(),
            level,
        });
    }

    /// Refresh all derived data from the database
    fn refresh_data(&mut self) {
        let Some(ref db) = self.db else { return };

        match db::get_day(&db.conn, self.today) {
            Ok(entries) => {
                self.today_by_slot = [None, None, None];
                for entry in entries {
                    let idx = entry.slot.index();
                    self.today_by_slot[idx] = Some(entry);
                }
            }
            Err(e) => log::warn!("Failed to load today's entries: {e}"),
        }

        match db::get_entries_in_range(&db.conn, self.month, last_of_month(self.month)) {
            Ok(entries) => self.month_entries = entries,
            Err(e) => log::warn!("Failed to load month entries: {e}"),
        }

        // Streak stats are recomputed from scratch each time; no cached state.
        match db::get_complete_days_desc(&db.conn) {
            Ok(days) => {
                self.complete_day_count = days.len();
                self.streak = compute_streak(&days, self.today);
            }
            Err(e) => log::warn!("Failed to load complete days: {e}"),
        }

        let window_start = self
            .today
            .checked_sub_days(Days::new((STATS_WINDOW_DAYS - 1) as u64))
            .unwrap_or(self.today);
        match db::get_mood_counts(&db.conn, window_start, self.today) {
            Ok(counts) => self.mood_counts = counts,
            Err(e) => log::warn!("Failed to load mood counts: {e}"),
        }

        match db::get_recent_entries(&db.conn, RECENT_ENTRIES_LIMIT) {
            Ok(entries) => self.recent_entries = entries,
            Err(e) => log::warn!("Failed to load recent entries: {e}"),
        }
    }

    /// Quit the application
    fn quit(&mut self) {
        self.running = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn entry(date: NaiveDate, slot: MoodSlot) -> MoodEntry {
        MoodEntry {
            date,
            slot,
            mood_id: "good".to_string(),
            emoji: "🌟".to_string(),
            color_argb: 0xFFFF_D700,
            created_at_millis: 0,
        }
    }

    #[test]
    fn test_midnight_rollover_rebuilds_today_and_streak() {
        let mut app = App::default();
        app.db = Some(Database::open_in_memory().unwrap());

        // Pretend the app has been running since yesterday, with all three
        // slots logged that day.
        let yesterday = app.clock.today().pred_opt().unwrap();
        app.today = yesterday;
        app.selected_day = yesterday;
        app.month = first_of_month(yesterday);
        if let Some(ref db) = app.db {
            for slot in MoodSlot::ALL {
                db::upsert_entry(&db.conn, &entry(yesterday, slot)).unwrap();
            }
        }
        app.refresh_data();
        assert_eq!(app.today_by_slot.iter().flatten().count(), 3);

        // The date change must drop yesterday's slots and re-anchor the streak
        app.handle_tick();

        assert_eq!(app.today, app.clock.today());
        assert_eq!(app.selected_day, app.today);
        assert_eq!(app.today_by_slot.iter().flatten().count(), 0);
        assert_eq!(app.streak.current, 1);
        assert_eq!(app.complete_day_count, 1);
    }

    #[test]
    fn test_month_helpers() {
        assert_eq!(first_of_month(d(2025, 6, 15)), d(2025, 6, 1));
        assert_eq!(last_of_month(d(2025, 6, 1)), d(2025, 6, 30));
        assert_eq!(last_of_month(d(2024, 2, 1)), d(2024, 2, 29));
        assert_eq!(last_of_month(d(2025, 12, 1)), d(2025, 12, 31));
    }

    #[test]
    fn test_move_selected_day_crosses_month() {
        let mut app = App::default();
        app.month = d(2025, 6, 1);
        app.selected_day = d(2025, 6, 30);

        app.move_selected_day(1);

        assert_eq!(app.selected_day, d(2025, 7, 1));
        assert_eq!(app.month, d(2025, 7, 1));
    }

    #[test]
    fn test_change_month_clamps_selected_day() {
        let mut app = App::default();
        app.month = d(2025, 3, 1);
        app.selected_day = d(2025, 3, 31);

        app.change_month(-1);

        assert_eq!(app.month, d(2025, 2, 1));
        assert_eq!(app.selected_day, d(2025, 2, 28));
    }

    #[test]
    fn test_change_month_forward_and_back_is_stable() {
        let mut app = App::default();
        app.month = d(2025, 6, 1);
        app.selected_day = d(2025, 6, 15);

        app.change_month(1);
        app.change_month(-1);

        assert_eq!(app.month, d(2025, 6, 1));
        assert_eq!(app.selected_day, d(2025, 6, 15));
    }

    #[test]
    fn test_entries_for_day_indexed_by_slot() {
        let mut app = App::default();
        let date = d(2025, 6, 15);
        app.month_entries = vec![
            entry(date, MoodSlot::Night),
            entry(date, MoodSlot::Morning),
            entry(d(2025, 6, 16), MoodSlot::Afternoon),
        ];

        let slots = app.entries_for_day(date);
        assert!(slots[MoodSlot::Morning.index()].is_some());
        assert!(slots[MoodSlot::Afternoon.index()].is_none());
        assert!(slots[MoodSlot::Night.index()].is_some());
        assert_eq!(app.slots_filled(date), 2);
        assert_eq!(app.slots_filled(d(2025, 6, 17)), 0);
    }

    #[test]
    fn test_request_save_on_taken_slot_opens_confirm() {
        let mut app = App::default();
        app.selected_slot = MoodSlot::Morning;
        app.today_by_slot[MoodSlot::Morning.index()] = Some(entry(app.today, MoodSlot::Morning));

        let option = MoodOption::ALL[1];
        app.request_save(option);

        assert_eq!(app.modal, ModalState::ConfirmReplace { option });
    }

    #[test]
    fn test_save_without_database_reports_error() {
        let mut app = App::default();
        app.selected_slot = MoodSlot::Afternoon;

        app.request_save(MoodOption::ALL[0]);

        assert_eq!(app.modal, ModalState::None);
        let n = app.notification.expect("expected a notification");
        assert_eq!(n.level, NotificationLevel::Error);
    }
}
