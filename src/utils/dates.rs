use anyhow::Result;
use chrono::NaiveDate;

/// Resolve a `--date` argument. `None` means today; `YYYY-MM-DD` is taken
/// literally, anything else goes through natural-language parsing.
///
/// "today", "tomorrow" and "yesterday" are resolved against `today`. Other
/// relative phrases ("next friday") are anchored to the system clock by
/// fuzzydate.
pub fn resolve_date(input: Option<&str>, today: NaiveDate) -> Result<NaiveDate> {
    let Some(input) = input.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(today);
    };

    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Ok(date);
    }

    let relative = match input.to_lowercase().as_str() {
        "today" => Some(today),
        "tomorrow" => today.succ_opt(),
        "yesterday" => today.pred_opt(),
        _ => None,
    };
    if let Some(date) = relative {
        return Ok(date);
    }

    parse_fuzzy_date(input)
}

/// Parse a natural language date like "fri" or "march 20".
fn parse_fuzzy_date(input: &str) -> Result<NaiveDate> {
    let expanded = input
        .to_lowercase()
        .split_whitespace()
        .map(expand_word)
        .collect::<Vec<_>>()
        .join(" ");

    let dt = fuzzydate::parse(&expanded)
        .map_err(|_| anyhow::anyhow!("Could not parse date: \"{}\"", input))?;

    Ok(dt.date())
}

/// fuzzydate only knows full day and month names.
fn expand_word(word: &str) -> &str {
    match word {
        "mon" => "monday",
        "tue" | "tues" => "tuesday",
        "wed" => "wednesday",
        "thu" | "thur" | "thurs" => "thursday",
        "fri" => "friday",
        "sat" => "saturday",
        "sun" => "sunday",
        "jan" => "january",
        "feb" => "february",
        "mar" => "march",
        "apr" => "april",
        "jun" => "june",
        "jul" => "july",
        "aug" => "august",
        "sep" | "sept" => "september",
        "oct" => "october",
        "nov" => "november",
        "dec" => "december",
        other => other,
    }
}
