mod entry;

pub use entry::{
    MoodCountStat, MoodEntry, MoodOption, MoodSlot, argb_to_color, default_slot_for_time,
};
