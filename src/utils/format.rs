use chrono::NaiveDateTime;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Format a moment as "7:05 PM"
pub fn clock_string(now: NaiveDateTime) -> String {
    now.format("%-I:%M %p").to_string()
}

/// Format a moment as "Thursday, March 14, 2024"
pub fn date_string(now: NaiveDateTime) -> String {
    now.format("%A, %B %-d, %Y").to_string()
}

/// Cut a string to fit `width` terminal columns, ending with "…" if cut.
pub fn truncate_to_width(s: &str, width: usize) -> String {
    if s.width() <= width {
        return s.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 14)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    #[test]
    fn test_clock_string() {
        assert_eq!(clock_string(at(19, 5)), "7:05 PM");
        assert_eq!(clock_string(at(0, 30)), "12:30 AM");
    }

    #[test]
    fn test_date_string() {
        assert_eq!(date_string(at(9, 0)), "Thursday, March 14, 2024");
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("network error", 20), "network error");
        assert_eq!(truncate_to_width("network error", 8), "network…");
        assert_eq!(truncate_to_width("abc", 0), "");
    }
}
