// ============================================================================
// PARSEO DEL TARGET DEL COUNTDOWN (texto del event-box -> ms epoch)
// ============================================================================

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone};

/// Formatos sin zona horaria; se interpretan en hora local del navegador
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    "%B %d, %Y %H:%M:%S",
    "%B %d, %Y, %I:%M %p",
    "%B %d, %Y, %I %p",
];

/// Convierte el texto del event-box en milisegundos epoch
///
/// Acepta segundos epoch (número), RFC 3339, RFC 2822, fechas locales sin zona
/// y una fecha sola (medianoche UTC).
pub fn parse_event_target(text: &str) -> Result<f64, String> {
    let text = text.trim();
    if text.is_empty() {
        return Err("Event box is empty".to_string());
    }

    if let Ok(seconds) = text.parse::<f64>() {
        if seconds.is_finite() {
            return Ok(seconds * 1000.0);
        }
        return Err(format!("Invalid epoch value: {}", text));
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Ok(dt.timestamp_millis() as f64);
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(text) {
        return Ok(dt.timestamp_millis() as f64);
    }

    let normalized = normalize_meridiem(text);
    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(&normalized, format) {
            return Local
                .from_local_datetime(&naive)
                .earliest()
                .map(|dt| dt.timestamp_millis() as f64)
                .ok_or_else(|| format!("Local time does not exist: {}", text));
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
            return Ok(midnight.and_utc().timestamp_millis() as f64);
        }
    }

    Err(format!("Unrecognized date-time: {}", text))
}

/// "p.m." / "a.m." (formato de plantilla del servidor) -> "PM" / "AM"
fn normalize_meridiem(text: &str) -> String {
    text.replace("a.m.", "AM").replace("p.m.", "PM")
}
