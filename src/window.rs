use chrono::{DateTime, Local};

use crate::model::{DateWindow, Options};
use crate::util;

pub const DEFAULT_WEEK_START: &str = "Mon";
pub const DEFAULT_WEEK_END: &str = "Fri";

/// Split a `Start-End` weekday range. Each side falls back to its default when missing or blank.
pub fn weekday_range(spec: Option<&str>) -> (String, String) {
  let (start, end) = match spec {
    Some(raw) => match raw.split_once('-') {
      Some((s, e)) => (s.trim(), e.trim()),
      None => (raw.trim(), ""),
    },
    None => ("", ""),
  };
  let start = if start.is_empty() { DEFAULT_WEEK_START } else { start };
  let end = if end.is_empty() { DEFAULT_WEEK_END } else { end };
  (start.to_string(), end.to_string())
}

/// True when `name` is today's weekday, abbreviated (`Mon`) or full (`Monday`), ignoring case.
pub fn is_today(now: DateTime<Local>, name: &str) -> bool {
  let short = now.format("%a").to_string();
  let long = now.format("%A").to_string();
  name.eq_ignore_ascii_case(&short) || name.eq_ignore_ascii_case(&long)
}

/// Compute the query window, reading the clock (or the override) at call time.
pub fn resolve_window(opts: &Options) -> DateWindow {
  resolve_window_at(opts, util::effective_now(opts.now_override))
}

/// Compute the query window relative to `now`.
///
/// A days count of `0` counts as "not given". When both a days-until
/// count and a before date are present, the count wins.
pub fn resolve_window_at(opts: &Options, now: DateTime<Local>) -> DateWindow {
  let since = match opts.days_since.filter(|d| *d != 0) {
    Some(days) => days_ago(days),
    None => {
      let (start, end) = weekday_range(opts.weekdays.as_deref());
      if is_today(now, &start) {
        format!("last {}", end)
      } else {
        "yesterday".to_string()
      }
    }
  };

  let until = match opts.days_until.filter(|d| *d != 0) {
    Some(days) => Some(days_ago(days)),
    None => opts.before.clone(),
  };

  DateWindow {
    since,
    until,
    after: opts.after.clone(),
  }
}

fn days_ago(days: u32) -> String {
  format!("{} days ago", days)
}

/// Parse a `--now-override` string into a local DateTime.
/// Accepts RFC3339 (e.g. 2025-08-15T12:00:00Z) or a naive local timestamp
/// formatted as `%Y-%m-%dT%H:%M:%S`.
pub fn parse_now_override(s: Option<&str>) -> Option<DateTime<Local>> {
  s.and_then(|raw| {
    chrono::DateTime::parse_from_rfc3339(raw)
      .ok()
      .map(|dt| dt.with_timezone(&Local))
      .or_else(|| {
        chrono::NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
          .ok()
          .and_then(|ndt| ndt.and_local_timezone(Local).single())
      })
  })
}

#[cfg(test)]
mod tests {
  use super::*;
  use proptest::prelude::*;

  // 2025-08-11 is a Monday.
  fn on(day_of_month: u32) -> DateTime<Local> {
    chrono::NaiveDate::from_ymd_opt(2025, 8, day_of_month)
      .unwrap()
      .and_hms_opt(12, 0, 0)
      .unwrap()
      .and_local_timezone(Local)
      .single()
      .unwrap()
  }

  #[test]
  fn monday_reaches_back_to_last_friday() {
    let win = resolve_window_at(&Options::default(), on(11));
    assert_eq!(win.since, "last Fri");
    assert_eq!(win.until, None);
    assert_eq!(win.after, None);
  }

  #[test]
  fn midweek_is_yesterday() {
    let win = resolve_window_at(&Options::default(), on(13));
    assert_eq!(win.since, "yesterday");
  }

  #[test]
  fn custom_range_matches_start_case_insensitively() {
    let opts = Options {
      weekdays: Some("sun-THU".into()),
      ..Options::default()
    };
    // 2025-08-17 is a Sunday
    let win = resolve_window_at(&opts, on(17));
    assert_eq!(win.since, "last THU");
  }

  #[test]
  fn full_weekday_names_are_accepted() {
    let opts = Options {
      weekdays: Some("Monday-Friday".into()),
      ..Options::default()
    };
    assert_eq!(resolve_window_at(&opts, on(11)).since, "last Friday");
  }

  #[test]
  fn blank_sides_fall_back_to_defaults() {
    assert_eq!(weekday_range(None), ("Mon".into(), "Fri".into()));
    assert_eq!(weekday_range(Some("-")), ("Mon".into(), "Fri".into()));
    assert_eq!(weekday_range(Some("Sun-")), ("Sun".into(), "Fri".into()));
    assert_eq!(weekday_range(Some("-Thu")), ("Mon".into(), "Thu".into()));
    assert_eq!(weekday_range(Some("Tue")), ("Tue".into(), "Fri".into()));
  }

  #[test]
  fn explicit_days_since_wins_over_weekdays() {
    let opts = Options {
      days_since: Some(3),
      ..Options::default()
    };
    assert_eq!(resolve_window_at(&opts, on(11)).since, "3 days ago");
  }

  #[test]
  fn zero_days_since_means_not_given() {
    let opts = Options {
      days_since: Some(0),
      ..Options::default()
    };
    assert_eq!(resolve_window_at(&opts, on(11)).since, "last Fri");
    assert_eq!(resolve_window_at(&opts, on(12)).since, "yesterday");
  }

  #[test]
  fn days_until_beats_before_date() {
    let opts = Options {
      days_until: Some(2),
      before: Some("2025-08-01".into()),
      ..Options::default()
    };
    assert_eq!(resolve_window_at(&opts, on(13)).until.as_deref(), Some("2 days ago"));
  }

  #[test]
  fn before_date_used_when_days_until_is_zero() {
    let opts = Options {
      days_until: Some(0),
      before: Some("2025-08-01".into()),
      after: Some("2025-07-01".into()),
      ..Options::default()
    };
    let win = resolve_window_at(&opts, on(13));
    assert_eq!(win.until.as_deref(), Some("2025-08-01"));
    assert_eq!(win.after.as_deref(), Some("2025-07-01"));
  }

  #[test]
  fn now_override_accepts_rfc3339_and_naive() {
    assert!(parse_now_override(Some("2025-08-15T12:00:00Z")).is_some());
    assert!(parse_now_override(Some("2025-08-15T12:00:00")).is_some());
    assert!(parse_now_override(Some("friday")).is_none());
    assert!(parse_now_override(None).is_none());
  }

  const NAMES: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

  fn recase(name: &str, mask: &[bool]) -> String {
    name
      .chars()
      .zip(mask.iter().cycle())
      .map(|(c, up)| if *up { c.to_ascii_uppercase() } else { c.to_ascii_lowercase() })
      .collect()
  }

  proptest! {
    #[test]
    fn weekday_start_decides_since(
      start in 0usize..7,
      end in 0usize..7,
      today in 0u32..7,
      mask in proptest::collection::vec(any::<bool>(), 3),
    ) {
      let range = format!("{}-{}", recase(NAMES[start], &mask), NAMES[end]);
      let opts = Options { weekdays: Some(range), ..Options::default() };
      let win = resolve_window_at(&opts, on(11 + today));
      if start as u32 == today {
        prop_assert_eq!(win.since, format!("last {}", NAMES[end]));
      } else {
        prop_assert_eq!(win.since, "yesterday");
      }
    }
  }
}
