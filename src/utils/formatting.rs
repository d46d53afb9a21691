//! Formatting utilities used for CLI outputs.

use super::date::DAY_MS;

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

pub fn italic(s: &str) -> String {
    format!("\x1b[3m{}\x1b[0m", s)
}

/// `plural(1, "pair", "pairs")` → "1 pair"
pub fn plural(n: usize, one: &str, many: &str) -> String {
    format!("{} {}", n, if n == 1 { one } else { many })
}

/// Human-readable interval: fractional days below one day are shown in hours.
///
/// 0.5 → "12h", 1 → "1d", 6 → "6d"
pub fn interval2readable(days: f64) -> String {
    if days <= 0.0 {
        return "now".to_string();
    }
    if days < 1.0 {
        let hours = (days * 24.0).round() as i64;
        return format!("{}h", hours.max(1));
    }
    format!("{}d", days.round() as i64)
}

/// Readable distance between `now` and a due timestamp (ms).
pub fn due2readable(due: i64, now: i64) -> String {
    if due <= now {
        return "due".to_string();
    }
    let days = (due - now) as f64 / DAY_MS as f64;
    format!("in {}", interval2readable(days))
}

/// Text progress bar, e.g. `[#####-----]` for 50%.
pub fn progress_bar(percent: f64, width: usize) -> String {
    let filled = ((percent.clamp(0.0, 100.0) / 100.0) * width as f64).round() as usize;
    format!(
        "[{}{}]",
        "#".repeat(filled),
        "-".repeat(width.saturating_sub(filled))
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plural_forms() {
        assert_eq!(plural(1, "pair", "pairs"), "1 pair");
        assert_eq!(plural(0, "pair", "pairs"), "0 pairs");
        assert_eq!(plural(7, "day", "days"), "7 days");
    }

    #[test]
    fn intervals_are_readable() {
        assert_eq!(interval2readable(0.0), "now");
        assert_eq!(interval2readable(0.5), "12h");
        assert_eq!(interval2readable(1.0), "1d");
        assert_eq!(interval2readable(15.0), "15d");
    }

    #[test]
    fn due_distance() {
        assert_eq!(due2readable(10, 20), "due");
        assert_eq!(due2readable(DAY_MS * 3, 0), "in 3d");
    }

    #[test]
    fn progress_bar_bounds() {
        assert_eq!(progress_bar(0.0, 4), "[----]");
        assert_eq!(progress_bar(50.0, 4), "[##--]");
        assert_eq!(progress_bar(250.0, 4), "[####]");
    }
}
