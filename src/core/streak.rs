use crate::models::streak::Streak;
use crate::utils::date::yesterday;
use chrono::NaiveDate;

/// Advance the daily streak for a review made on `today`.
///
/// Only the first review of a day changes anything; a review on the day
/// after the last one extends the streak, any longer gap restarts it at 1.
pub fn touch(streak: &Streak, today: NaiveDate) -> Streak {
    if streak.last_review_date == Some(today) {
        return *streak;
    }

    let count = match streak.last_review_date {
        Some(last) if Some(last) == yesterday(today) => streak.count.saturating_add(1),
        _ => 1,
    };

    Streak {
        count,
        last_review_date: Some(today),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Days;

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn first_touch_starts_at_one() {
        let s = touch(&Streak::default(), day("2025-06-10"));
        assert_eq!(s.count, 1);
        assert_eq!(s.last_review_date, Some(day("2025-06-10")));
    }

    #[test]
    fn full_sequence() {
        let d = day("2025-06-10");
        let s0 = Streak::default();

        let s1 = touch(&s0, d);
        assert_eq!(
            s1,
            Streak {
                count: 1,
                last_review_date: Some(d),
            }
        );

        let same_day = touch(&s1, d);
        assert_eq!(same_day, s1);

        let d1 = d.checked_add_days(Days::new(1)).unwrap();
        let s2 = touch(&same_day, d1);
        assert_eq!(s2.count, 2);

        let d3 = d.checked_add_days(Days::new(3)).unwrap();
        let s3 = touch(&s2, d3);
        assert_eq!(s3.count, 1);
        assert_eq!(s3.last_review_date, Some(d3));
    }

    #[test]
    fn consecutive_days_across_year_end() {
        let s = Streak {
            count: 41,
            last_review_date: Some(day("2024-12-31")),
        };
        assert_eq!(touch(&s, day("2025-01-01")).count, 42);
    }

    #[test]
    fn count_saturates_at_max() {
        let s = Streak {
            count: u32::MAX,
            last_review_date: Some(day("2025-05-01")),
        };
        assert_eq!(touch(&s, day("2025-05-02")).count, u32::MAX);
    }

    #[test]
    fn stale_future_date_resets() {
        // clock moved backwards: last review "after" today
        let s = Streak {
            count: 5,
            last_review_date: Some(day("2025-06-12")),
        };
        assert_eq!(touch(&s, day("2025-06-10")).count, 1);
    }
}
