use chrono::{DateTime, FixedOffset, Utc};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Countdown {
    Starts { hours: i64, minutes: i64 },
    Started,
}

impl Countdown {
    pub fn between(start: DateTime<FixedOffset>, now: DateTime<Utc>) -> Self {
        let left = start.with_timezone(&Utc) - now;
        if left.num_milliseconds() > 0 {
            Self::Starts { hours: left.num_hours(), minutes: left.num_minutes() % 60 }
        } else {
            Self::Started
        }
    }

    /// `None` when the start time does not parse; the caller shows nothing.
    pub fn from_attr(start_time: &str, now: DateTime<Utc>) -> Option<Self> {
        DateTime::parse_from_rfc3339(start_time.trim())
            .ok()
            .map(|start| Self::between(start, now))
    }

    pub fn label(self) -> String {
        match self {
            Self::Starts { hours, minutes } => format!("Через {}ч {}м", hours, minutes),
            Self::Started => "Начался".to_string(),
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Self::Starts { .. } => "race-timer",
            Self::Started => "race-timer race-started",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn now() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2025-06-01T12:00:00Z").unwrap().with_timezone(&Utc)
    }

    #[test]
    fn counts_hours_and_minutes_down() {
        let c = Countdown::from_attr("2025-06-01T17:35:59+03:00", now()).unwrap();
        assert_eq!(c, Countdown::Starts { hours: 2, minutes: 35 });
        assert_eq!(c.label(), "Через 2ч 35м");
    }

    #[test]
    fn under_a_minute_left_reads_zero() {
        let c = Countdown::from_attr("2025-06-01T12:00:30Z", now()).unwrap();
        assert_eq!(c.label(), "Через 0ч 0м");
    }

    #[test]
    fn past_start_is_started() {
        for ts in ["2025-06-01T12:00:00Z", "2025-05-31T09:00:00+00:00"] {
            let c = Countdown::from_attr(ts, now()).unwrap();
            assert_eq!(c, Countdown::Started);
            assert!(c.css_class().contains("race-started"));
        }
    }

    #[test]
    fn garbage_start_time_is_ignored() {
        assert_eq!(Countdown::from_attr("soon", now()), None);
    }
}
