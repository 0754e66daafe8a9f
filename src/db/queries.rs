use chrono::NaiveDate;
use rusqlite::{Connection, OptionalExtension, Row, params};

use crate::models::{MoodCountStat, MoodEntry, MoodSlot};

const DATE_FMT: &str = "%Y-%m-%d";

fn parse_date(idx: usize, s: &str) -> rusqlite::Result<NaiveDate> {
    NaiveDate::parse_from_str(s, DATE_FMT).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(e))
    })
}

fn map_entry(row: &Row) -> rusqlite::Result<MoodEntry> {
    let date_str: String = row.get(0)?;
    let slot_str: String = row.get(1)?;
    Ok(MoodEntry {
        date: parse_date(0, &date_str)?,
        slot: MoodSlot::from_str_or_default(&slot_str),
        mood_id: row.get(2)?,
        emoji: row.get(3)?,
        color_argb: row.get::<_, i64>(4)? as u32,
        created_at_millis: row.get(5)?,
    })
}

/// Save an entry, replacing any prior entry for the same (date, slot)
pub fn upsert_entry(conn: &Connection, entry: &MoodEntry) -> rusqlite::Result<()> {
    conn.execute(
        "INSERT OR REPLACE INTO mood_entries (date, slot, mood_id, emoji, color_argb, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            entry.date.format(DATE_FMT).to_string(),
            entry.slot.as_str(),
            entry.mood_id,
            entry.emoji,
            entry.color_argb as i64,
            entry.created_at_millis,
        ],
    )?;
    Ok(())
}

/// Point lookup by (date, slot)
pub fn get_entry(
    conn: &Connection,
    date: NaiveDate,
    slot: MoodSlot,
) -> rusqlite::Result<Option<MoodEntry>> {
    conn.query_row(
        "SELECT date, slot, mood_id, emoji, color_argb, created_at
         FROM mood_entries
         WHERE date = ?1 AND slot = ?2",
        params![date.format(DATE_FMT).to_string(), slot.as_str()],
        map_entry,
    )
    .optional()
}

/// Get all entries for a single date
pub fn get_day(conn: &Connection, date: NaiveDate) -> rusqlite::Result<Vec<MoodEntry>> {
    let mut stmt = conn.prepare(
        "SELECT date, slot, mood_id, emoji, color_argb, created_at
         FROM mood_entries
         WHERE date = ?1
         ORDER BY created_at ASC",
    )?;

    let entries = stmt.query_map(params![date.format(DATE_FMT).to_string()], map_entry)?;
    entries.collect()
}

/// Get entries within an inclusive date range, ascending by date
pub fn get_entries_in_range(
    conn: &Connection,
    start: NaiveDate,
    end: NaiveDate,
) -> rusqlite::Result<Vec<MoodEntry>> {
    let mut stmt = conn.prepare(
        "SELECT date, slot, mood_id, emoji, color_argb, created_at
         FROM mood_entries
         WHERE date BETWEEN ?1 AND ?2
         ORDER BY date ASC, created_at ASC",
    )?;

    let entries = stmt.query_map(
        params![
            start.format(DATE_FMT).to_string(),
            end.format(DATE_FMT).to_string()
        ],
        map_entry,
    )?;
    entries.collect()
}

/// Get the most recent entries, newest first
pub fn get_recent_entries(conn: &Connection, limit: usize) -> rusqlite::Result<Vec<MoodEntry>> {
    let mut stmt = conn.prepare(
        "SELECT date, slot, mood_id, emoji, color_argb, created_at
         FROM mood_entries
         ORDER BY date DESC, created_at DESC
         LIMIT ?1",
    )?;

    let entries = stmt.query_map(params![limit as i64], map_entry)?;
    entries.collect()
}

/// Dates with entries in all three slots, newest first.
///
/// COUNT(*) is safe here: the (date, slot) primary key caps rows per date at 3.
pub fn get_complete_days_desc(conn: &Connection) -> rusqlite::Result<Vec<NaiveDate>> {
    let mut stmt = conn.prepare(
        "SELECT date FROM mood_entries
         GROUP BY date
         HAVING COUNT(*) = 3
         ORDER BY date DESC",
    )?;

    let days = stmt.query_map([], |row| {
        let date_str: String = row.get(0)?;
        parse_date(0, &date_str)
    })?;
    days.collect()
}

/// Whether all three slots are filled for a date
pub fn is_day_complete(conn: &Connection, date: NaiveDate) -> rusqlite::Result<bool> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM mood_entries WHERE date = ?1",
        params![date.format(DATE_FMT).to_string()],
        |row| row.get(0),
    )?;
    Ok(count == 3)
}

/// Per-mood entry counts within an inclusive date range, most frequent first
pub fn get_mood_counts(
    conn: &Connection,
    start: NaiveDate,
    end: NaiveDate,
) -> rusqlite::Result<Vec<MoodCountStat>> {
    let mut stmt = conn.prepare(
        "SELECT mood_id, COUNT(*) as n
         FROM mood_entries
         WHERE date BETWEEN ?1 AND ?2
         GROUP BY mood_id
         ORDER BY n DESC, mood_id ASC",
    )?;

    let results = stmt.query_map(
        params![
            start.format(DATE_FMT).to_string(),
            end.format(DATE_FMT).to_string()
        ],
        |row| {
            Ok(MoodCountStat {
                mood_id: row.get(0)?,
                count: row.get(1)?,
            })
        },
    )?;
    results.collect()
}
