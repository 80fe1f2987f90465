use chrono::NaiveTime;

// Fallback corridor block applied when a (station, line) group has no
// corridor row.

pub fn default_corridor_start() -> NaiveTime {
    NaiveTime::from_hms_opt(0, 0, 0).expect("valid static default corridor start")
}

pub fn default_corridor_end() -> NaiveTime {
    NaiveTime::from_hms_opt(4, 0, 0).expect("valid static default corridor end")
}
