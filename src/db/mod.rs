mod connection;
pub mod queries;
mod schema;

pub use connection::Database;
pub use queries::{
    get_complete_days_desc, get_day, get_entries_in_range, get_entry, get_mood_counts,
    get_recent_entries, is_day_complete, upsert_entry,
};
