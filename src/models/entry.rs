use chrono::{DateTime, Local, NaiveDate, NaiveTime};
use ratatui::style::Color;

/// One of the three daily time buckets a mood entry is attached to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MoodSlot {
    #[default]
    Morning,
    Afternoon,
    Night,
}

impl MoodSlot {
    /// All slots in display order
    pub const ALL: [MoodSlot; 3] = [MoodSlot::Morning, MoodSlot::Afternoon, MoodSlot::Night];

    pub fn label(&self) -> &'static str {
        match self {
            MoodSlot::Morning => "Morning",
            MoodSlot::Afternoon => "Afternoon",
            MoodSlot::Night => "Night",
        }
    }

    /// Stable identifier used as the database key
    pub fn as_str(&self) -> &'static str {
        match self {
            MoodSlot::Morning => "morning",
            MoodSlot::Afternoon => "afternoon",
            MoodSlot::Night => "night",
        }
    }

    /// Parse the database representation, falling back to Morning for unknown values
    pub fn from_str_or_default(s: &str) -> Self {
        match s {
            "afternoon" => MoodSlot::Afternoon,
            "night" => MoodSlot::Night,
            _ => MoodSlot::Morning,
        }
    }

    /// Position in [`MoodSlot::ALL`]
    pub fn index(&self) -> usize {
        match self {
            MoodSlot::Morning => 0,
            MoodSlot::Afternoon => 1,
            MoodSlot::Night => 2,
        }
    }

    pub fn next(&self) -> Self {
        match self {
            MoodSlot::Morning => MoodSlot::Afternoon,
            MoodSlot::Afternoon => MoodSlot::Night,
            MoodSlot::Night => MoodSlot::Morning,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            MoodSlot::Morning => MoodSlot::Night,
            MoodSlot::Afternoon => MoodSlot::Morning,
            MoodSlot::Night => MoodSlot::Afternoon,
        }
    }
}

/// The slot a given local time falls into:
/// 05:00-11:59 Morning, 12:00-17:59 Afternoon, otherwise Night.
pub fn default_slot_for_time(time: NaiveTime) -> MoodSlot {
    let morning_start = NaiveTime::from_hms_opt(5, 0, 0).unwrap();
    let noon = NaiveTime::from_hms_opt(12, 0, 0).unwrap();
    let evening_start = NaiveTime::from_hms_opt(18, 0, 0).unwrap();

    if time >= morning_start && time < noon {
        MoodSlot::Morning
    } else if time >= noon && time < evening_start {
        MoodSlot::Afternoon
    } else {
        MoodSlot::Night
    }
}

/// A logged mood for one (date, slot) pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoodEntry {
    pub date: NaiveDate,
    pub slot: MoodSlot,
    pub mood_id: String,
    pub emoji: String,
    pub color_argb: u32,
    pub created_at_millis: i64,
}

impl MoodEntry {
    /// Format the creation time as local "HH:MM"
    pub fn local_time_string(&self) -> String {
        DateTime::from_timestamp_millis(self.created_at_millis)
            .map(|dt| dt.with_timezone(&Local).format("%H:%M").to_string())
            .unwrap_or_else(|| "--:--".to_string())
    }

    pub fn color(&self) -> Color {
        argb_to_color(self.color_argb)
    }
}

/// A selectable mood with its display attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoodOption {
    pub id: &'static str,
    pub emoji: &'static str,
    pub label: &'static str,
    pub color_argb: u32,
    pub score: i32,
}

impl MoodOption {
    /// The built-in mood catalog, in picker order
    pub const ALL: [MoodOption; 3] = [
        MoodOption {
            id: "good",
            emoji: "🌟",
            label: "Good",
            color_argb: 0xFFFF_D700,
            score: 5,
        },
        MoodOption {
            id: "normal",
            emoji: "✨",
            label: "Normal",
            color_argb: 0xFFB0_BEC5,
            score: 3,
        },
        MoodOption {
            id: "bad",
            emoji: "🌑",
            label: "Bad",
            color_argb: 0xFF37_474F,
            score: 1,
        },
    ];

    pub fn by_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|o| o.id == id)
    }

    pub fn color(&self) -> Color {
        argb_to_color(self.color_argb)
    }
}

/// Per-mood entry count within a date range
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoodCountStat {
    pub mood_id: String,
    pub count: i64,
}

/// Convert a 32-bit ARGB value to a terminal color (alpha ignored)
pub fn argb_to_color(argb: u32) -> Color {
    let r = ((argb >> 16) & 0xFF) as u8;
    let g = ((argb >> 8) & 0xFF) as u8;
    let b = (argb & 0xFF) as u8;
    Color::Rgb(r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_default_slot_boundaries() {
        assert_eq!(default_slot_for_time(t(5, 0)), MoodSlot::Morning);
        assert_eq!(default_slot_for_time(t(11, 59)), MoodSlot::Morning);
        assert_eq!(default_slot_for_time(t(12, 0)), MoodSlot::Afternoon);
        assert_eq!(default_slot_for_time(t(17, 59)), MoodSlot::Afternoon);
        assert_eq!(default_slot_for_time(t(18, 0)), MoodSlot::Night);
        assert_eq!(default_slot_for_time(t(23, 59)), MoodSlot::Night);
        assert_eq!(default_slot_for_time(t(0, 0)), MoodSlot::Night);
        assert_eq!(default_slot_for_time(t(4, 59)), MoodSlot::Night);
    }

    #[test]
    fn test_slot_string_round_trip() {
        for slot in MoodSlot::ALL {
            assert_eq!(MoodSlot::from_str_or_default(slot.as_str()), slot);
        }
    }

    #[test]
    fn test_slot_cycle() {
        assert_eq!(MoodSlot::Morning.next(), MoodSlot::Afternoon);
        assert_eq!(MoodSlot::Night.next(), MoodSlot::Morning);
        assert_eq!(MoodSlot::Morning.prev(), MoodSlot::Night);
        for slot in MoodSlot::ALL {
            assert_eq!(slot.next().prev(), slot);
        }
    }

    #[test]
    fn test_mood_option_by_id() {
        assert_eq!(MoodOption::by_id("good").unwrap().label, "Good");
        assert_eq!(MoodOption::by_id("normal").unwrap().score, 3);
        assert!(MoodOption::by_id("ecstatic").is_none());
    }

    #[test]
    fn test_argb_to_color_drops_alpha() {
        assert_eq!(argb_to_color(0xFFFF_D700), Color::Rgb(255, 215, 0));
        assert_eq!(argb_to_color(0x0000_0000), Color::Rgb(0, 0, 0));
    }

    #[test]
    fn test_entry_local_time_string_invalid_timestamp() {
        let entry = MoodEntry {
            date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            slot: MoodSlot::Morning,
            mood_id: "good".to_string(),
            emoji: "🌟".to_string(),
            color_argb: 0xFFFF_D700,
            created_at_millis: i64::MAX,
        };
        assert_eq!(entry.local_time_string(), "--:--");
    }
}
