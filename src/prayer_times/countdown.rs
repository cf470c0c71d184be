use chrono::{DateTime, Duration, NaiveDate, NaiveTime, TimeZone};

use crate::models::{NextPrayerInfo, PrayerEntry};

/// Time left until the next prayer, split into clock components.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Remaining {
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl Remaining {
    fn from_duration(d: Duration) -> Self {
        let total = d.num_seconds();
        Self {
            hours: total / 3600,
            minutes: (total % 3600) / 60,
            seconds: total % 60,
        }
    }
}

impl std::fmt::Display for Remaining {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}h {}m {}s", self.hours, self.minutes, self.seconds)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NextPrayer {
    pub info: NextPrayerInfo,
    pub remaining: Remaining,
}

/// Place a clock time on `date` in `tz`. An ambiguous time (clocks going back)
/// takes the earlier instant; a time skipped by clocks going forward lands an
/// hour later on the wall clock, which is the instant the jump passed over.
fn resolve<T: TimeZone>(tz: &T, date: NaiveDate, time: NaiveTime) -> Option<DateTime<T>> {
    let local = date.and_time(time);
    tz.from_local_datetime(&local)
        .earliest()
        .or_else(|| tz.from_local_datetime(&(local + Duration::hours(1))).earliest())
}

/// Find the first entry strictly after `now` on `now`'s date, wrapping to the
/// first entry of the list (tomorrow) once every entry has passed.
///
/// `entries` must be in chronological order; this is a first-match scan, not a
/// sort. Clock times are resolved in `now`'s zone, so the remaining time is
/// real elapsed time even across a clock change. Returns `None` only for an
/// empty list.
pub fn compute_next<T: TimeZone>(entries: &[PrayerEntry], now: &DateTime<T>) -> Option<NextPrayer> {
    let tz = now.timezone();
    let today = now.date_naive();

    let upcoming = entries.iter().find_map(|e| {
        resolve(&tz, today, e.time)
            .filter(|t| t > now)
            .map(|t| (e, t))
    });

    let (entry, target) = match upcoming {
        Some(found) => found,
        None => {
            let first = entries.first()?;
            let mut target = resolve(&tz, today, first.time)?;
            if target < *now {
                target = resolve(&tz, today.succ_opt()?, first.time)?;
            }
            (first, target)
        }
    };

    Some(NextPrayer {
        info: NextPrayerInfo {
            name: entry.name,
            time: entry.label.clone(),
        },
        remaining: Remaining::from_duration(target.signed_duration_since(now.clone())),
    })
}
