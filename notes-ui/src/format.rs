//! Display helpers for note timestamps. No RSX, no signals.

use chrono::{Datelike, NaiveDateTime};
use shared_types::parse_timestamp;

const MONTHS_ES: [&str; 12] = [
    "ene", "feb", "mar", "abr", "may", "jun", "jul", "ago", "sept", "oct", "nov", "dic",
];

/// Locale used for note timestamps
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DateLocale {
    #[default]
    English,
    Spanish,
}

impl DateLocale {
    /// Map a BCP 47 tag (`es`, `es-ES`, `en-US`, ...) to a supported locale.
    pub fn from_lang(lang: &str) -> Self {
        let primary = lang
            .split(&['-', '_'][..])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match primary.as_str() {
            "es" => Self::Spanish,
            _ => Self::English,
        }
    }
}

/// Format a raw server timestamp for display.
/// Unparseable input is returned as-is so the user still sees something.
pub fn format_date(raw: &str, locale: DateLocale) -> String {
    match parse_timestamp(raw) {
        Some(dt) => format_datetime(&dt, locale),
        None => raw.trim().to_string(),
    }
}

fn format_datetime(dt: &NaiveDateTime, locale: DateLocale) -> String {
    match locale {
        // "Mar 1, 2024, 10:15"
        DateLocale::English => dt.format("%b %-d, %Y, %H:%M").to_string(),
        // "1 mar 2024, 10:15"; chrono only knows English month names
        DateLocale::Spanish => format!(
            "{} {} {}, {}",
            dt.day(),
            MONTHS_ES[dt.month0() as usize],
            dt.year(),
            dt.format("%H:%M")
        ),
    }
}
