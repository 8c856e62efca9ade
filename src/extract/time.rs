//! Converts heterogeneous time expressions into integer minutes.

use std::sync::LazyLock;

use regex::Regex;

static ISO_DURATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bPT(?:(\d+)H)?(?:(\d+)M)?").expect("Invalid ISO duration regex")
});

static HOURS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d+)\s*(?:hours?|hrs?|h)\b").expect("Invalid hours regex")
});

static MINUTES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d+)\s*(?:minutes?|mins?|m)\b").expect("Invalid minutes regex")
});

static BARE_INTEGER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+").expect("Invalid integer regex"));

/// First integer substring anywhere in the text, e.g. servings out of
/// `"Makes 12 muffins"`.
pub(crate) fn first_integer(text: &str) -> Option<u32> {
    BARE_INTEGER
        .find(text)
        .and_then(|m| m.as_str().parse::<u32>().ok())
}

/// Parse a duration expression into minutes. Never fails: unrecognized or
/// absent input yields 0.
///
/// Tried in order, first match wins:
/// 1. ISO-8601 duration (`PT1H30M`)
/// 2. Freeform hour/minute components (`"1 hr 20 min"`), summed
/// 3. First bare integer anywhere in the text (`"bake for 20"`)
pub fn parse_minutes(text: Option<&str>) -> u32 {
    let Some(text) = text else { return 0 };
    let text = text.trim();
    if text.is_empty() {
        return 0;
    }

    if let Some(caps) = ISO_DURATION.captures(text) {
        let hours = caps.get(1).and_then(|m| m.as_str().parse::<u32>().ok());
        let minutes = caps.get(2).and_then(|m| m.as_str().parse::<u32>().ok());
        // A bare "PT" with neither component is not a duration
        if hours.is_some() || minutes.is_some() {
            return hours
                .unwrap_or(0)
                .saturating_mul(60)
                .saturating_add(minutes.unwrap_or(0));
        }
    }

    let mut total: u32 = 0;
    let mut matched = false;
    if let Some(caps) = HOURS.captures(text) {
        if let Ok(h) = caps[1].parse::<u32>() {
            total = total.saturating_add(h.saturating_mul(60));
            matched = true;
        }
    }
    if let Some(caps) = MINUTES.captures(text) {
        if let Ok(m) = caps[1].parse::<u32>() {
            total = total.saturating_add(m);
            matched = true;
        }
    }
    if matched {
        return total;
    }

    first_integer(text).unwrap_or(0)
}
