use chrono::NaiveTime;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrayerName {
    Fajr,
    Sunrise,
    Dhuhr,
    Asr,
    Maghrib,
    Isha,
}

impl PrayerName {
    /// Canonical order, as the timing source lists them through the day.
    pub fn all() -> [PrayerName; 6] {
        [
            PrayerName::Fajr,
            PrayerName::Sunrise,
            PrayerName::Dhuhr,
            PrayerName::Asr,
            PrayerName::Maghrib,
            PrayerName::Isha,
        ]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PrayerName::Fajr => "Fajr",
            PrayerName::Sunrise => "Sunrise",
            PrayerName::Dhuhr => "Dhuhr",
            PrayerName::Asr => "Asr",
            PrayerName::Maghrib => "Maghrib",
            PrayerName::Isha => "Isha",
        }
    }
}

impl std::fmt::Display for PrayerName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.display_name())
    }
}

impl FromStr for PrayerName {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fajr" => Ok(PrayerName::Fajr),
            "sunrise" => Ok(PrayerName::Sunrise),
            "dhuhr" | "zuhr" | "dhuhur" => Ok(PrayerName::Dhuhr),
            "asr" => Ok(PrayerName::Asr),
            "maghrib" => Ok(PrayerName::Maghrib),
            "isha" => Ok(PrayerName::Isha),
            _ => Err(anyhow::anyhow!("Unknown prayer: {}", s)),
        }
    }
}

/// One row of the day's timings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrayerEntry {
    pub name: PrayerName,
    /// Clock string as the timing source sent it
    pub label: String,
    pub time: NaiveTime,
}

impl PrayerEntry {
    pub fn new(name: PrayerName, label: impl Into<String>, time: NaiveTime) -> Self {
        Self {
            name,
            label: label.into(),
            time,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NextPrayerInfo {
    pub name: PrayerName,
    pub time: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_in_canonical_order() {
        let names: Vec<&str> = PrayerName::all().iter().map(|p| p.display_name()).collect();
        assert_eq!(names, ["Fajr", "Sunrise", "Dhuhr", "Asr", "Maghrib", "Isha"]);
    }

    #[test]
    fn test_display_respects_width() {
        assert_eq!(format!("{:<8}|", PrayerName::Asr), "Asr     |");
    }

    #[test]
    fn test_parse_is_case_insensitive_and_takes_spellings() {
        assert_eq!("ZUHR".parse::<PrayerName>().unwrap(), PrayerName::Dhuhr);
        assert_eq!("dhuhur".parse::<PrayerName>().unwrap(), PrayerName::Dhuhr);
        assert_eq!("Maghrib".parse::<PrayerName>().unwrap(), PrayerName::Maghrib);
        assert_eq!("sunrise".parse::<PrayerName>().unwrap(), PrayerName::Sunrise);
    }

    #[test]
    fn test_parse_round_trips_display_names() {
        for name in PrayerName::all() {
            assert_eq!(name.display_name().parse::<PrayerName>().unwrap(), name);
        }
    }

    #[test]
    fn test_parse_rejects_unknown_prayer() {
        let err = "tahajjud".parse::<PrayerName>().unwrap_err();
        assert!(err.to_string().contains("tahajjud"));
    }
}
