use rusqlite::Connection;

/// Initialize the database schema.
///
/// Dates are stored as ISO-8601 text so lexicographic ordering and BETWEEN
/// match calendar order. The composite primary key enforces at most one
/// entry per (date, slot); writes go through INSERT OR REPLACE.
pub fn init_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS mood_entries (
            date TEXT NOT NULL,
            slot TEXT NOT NULL,
            mood_id TEXT NOT NULL,
            emoji TEXT NOT NULL,
            color_argb INTEGER NOT NULL,
            created_at INTEGER NOT NULL,
            PRIMARY KEY (date, slot)
        );

        CREATE INDEX IF NOT EXISTS idx_mood_entries_date ON mood_entries(date);
        CREATE INDEX IF NOT EXISTS idx_mood_entries_slot ON mood_entries(slot);
        ",
    )
}
