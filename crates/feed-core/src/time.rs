//! Published-time formatting in Brazilian Portuguese
//!
//! Two forms are derived from a post timestamp:
//! - an absolute one, `3 de maio às 08:00h`, in the timestamp's own offset;
//! - a relative one, `há cerca de 2 anos`, measured against a caller-supplied
//!   "now" so the result is deterministic.
//!
//! The relative buckets follow the usual distance-in-words rules: minutes
//! up to 45, hours up to a day, days up to a month, months up to a year, then
//! years qualified as "cerca de", "mais de" or "quase" depending on how far
//! into the year the remainder falls.

use chrono::{DateTime, Datelike, Days, FixedOffset, NaiveDate, TimeZone, Utc};

const MONTHS: [&str; 12] = [
    "janeiro",
    "fevereiro",
    "março",
    "abril",
    "maio",
    "junho",
    "julho",
    "agosto",
    "setembro",
    "outubro",
    "novembro",
    "dezembro",
];

const MINUTES_IN_DAY: f64 = 1440.0;
const MINUTES_IN_ALMOST_TWO_DAYS: f64 = 2520.0;
const MINUTES_IN_MONTH: f64 = 43200.0;
const MINUTES_IN_TWO_MONTHS: f64 = 86400.0;

/// Absolute form: `d de <mês> às HH:mmh`
pub fn format_absolute(at: &DateTime<FixedOffset>) -> String {
    let month = MONTHS[at.month0() as usize];
    format!("{} de {} às {}h", at.day(), month, at.format("%H:%M"))
}

/// Machine-readable form (RFC 3339)
pub fn format_iso(at: &DateTime<FixedOffset>) -> String {
    at.to_rfc3339()
}

/// Relative form with direction suffix, e.g. `há 3 dias` or `em 1 minuto`
pub fn format_relative(at: &DateTime<FixedOffset>, now: DateTime<Utc>) -> String {
    let now = now.with_timezone(&at.timezone());
    let (earlier, later, future) = if *at > now {
        (now, *at, true)
    } else {
        (*at, now, false)
    };

    let distance = distance_in_words(&earlier, &later);
    if future {
        format!("em {}", distance)
    } else {
        format!("há {}", distance)
    }
}

fn plural(count: i64, one: &str, other: &str) -> String {
    if count == 1 {
        one.to_string()
    } else {
        other.replace("{}", &count.to_string())
    }
}

/// Distance between two instants, `earlier <= later`
fn distance_in_words(earlier: &DateTime<FixedOffset>, later: &DateTime<FixedOffset>) -> String {
    let seconds = (*later - *earlier).num_seconds() as f64;
    let minutes = (seconds / 60.0).round();

    if minutes < 2.0 {
        return if minutes == 0.0 {
            "menos de um minuto".to_string()
        } else {
            plural(minutes as i64, "1 minuto", "{} minutos")
        };
    }
    if minutes < 45.0 {
        return plural(minutes as i64, "1 minuto", "{} minutos");
    }
    if minutes < 90.0 {
        return "cerca de 1 hora".to_string();
    }
    if minutes < MINUTES_IN_DAY {
        let hours = (minutes / 60.0).round() as i64;
        return plural(hours, "cerca de 1 hora", "cerca de {} horas");
    }
    if minutes < MINUTES_IN_ALMOST_TWO_DAYS {
        return "1 dia".to_string();
    }
    if minutes < MINUTES_IN_MONTH {
        let days = (minutes / MINUTES_IN_DAY).round() as i64;
        return plural(days, "1 dia", "{} dias");
    }
    if minutes < MINUTES_IN_TWO_MONTHS {
        let months = (minutes / MINUTES_IN_MONTH).round() as i64;
        return plural(months, "cerca de 1 mês", "cerca de {} meses");
    }

    let months = months_between(earlier, later);
    if months < 12 {
        let nearest = (minutes / MINUTES_IN_MONTH).round() as i64;
        return plural(nearest, "1 mês", "{} meses");
    }

    let remainder = months % 12;
    let years = months / 12;
    if remainder < 3 {
        plural(years, "cerca de 1 ano", "cerca de {} anos")
    } else if remainder < 9 {
        plural(years, "mais de 1 ano", "mais de {} anos")
    } else {
        plural(years + 1, "quase 1 ano", "quase {} anos")
    }
}

/// Whole months from `earlier` to `later`.
///
/// The last month counts once the same day and time of day is reached, with
/// two month-end rules: an end date of February 28th/29th is measured as if
/// it were the 30th, and an end date on the last day of its month exactly one
/// calendar month later always counts as a full month.
fn months_between<Tz: TimeZone>(earlier: &DateTime<Tz>, later: &DateTime<Tz>) -> i64 {
    let earlier = earlier.naive_local();
    let later = later.naive_local();
    let calendar = i64::from(later.year() - earlier.year()) * 12
        + i64::from(later.month()) - i64::from(earlier.month());
    if calendar < 1 {
        return 0;
    }

    let end = if later.month() == 2 && later.day() > 27 {
        rolling_date(later.year(), 1, 30)
    } else {
        Some(later.date())
    };
    let Some(shifted) =
        end.and_then(|d| rolling_date(d.year(), i64::from(d.month0()) - calendar, d.day()))
    else {
        return calendar;
    };

    let mut last_month_partial = shifted.and_time(later.time()) < earlier;
    if calendar == 1 && is_last_day_of_month(later.date()) && later > earlier {
        last_month_partial = false;
    }
    calendar - i64::from(last_month_partial)
}

/// Day `day` counted from the first of the zero-based `month0`; months
/// outside 0..12 move the year and days past the month end roll over.
fn rolling_date(year: i32, month0: i64, day: u32) -> Option<NaiveDate> {
    let year = year.checked_add(i32::try_from(month0.div_euclid(12)).ok()?)?;
    let month = u32::try_from(month0.rem_euclid(12)).ok()? + 1;
    NaiveDate::from_ymd_opt(year, month, 1)?
        .checked_add_days(Days::new(u64::from(day.saturating_sub(1))))
}

fn is_last_day_of_month(date: NaiveDate) -> bool {
    date.succ_opt().map_or(true, |next| next.month() != date.month())
}
