//! Elapsed-time and clock formatting

use hudfmt_core::{FormatError, FormatResult, TimeConfig};

use super::pad2;

/// Format the distance between two millisecond ticks as seconds
///
/// The order of `start` and `end` does not matter. The seconds value keeps
/// whatever fraction the division yields: `(0, 2500)` gives `"2.5s"`,
/// `(5000, 1000)` gives `"4s"`.
pub fn format_ticks(start: i64, end: i64) -> String {
    let seconds = end.abs_diff(start) as f64 / 1000.0;
    format!("{}s", seconds)
}

/// Format seconds as `m:ss`, or `m:ss.cc` with `show_milliseconds`
///
/// Minutes are not wrapped into hours (`3661.5` gives `"61:01.50"`) and the
/// centisecond part is truncated, never rounded. Negative input runs through
/// the same arithmetic without any sign correction, so `-1.0` yields
/// `"-1:0-1"`.
pub fn format_time(seconds: f64, show_milliseconds: bool) -> String {
    let minutes = (seconds / 60.0).floor() as i64;
    let secs = (seconds.floor() as i64) % 60;

    let mut out = format!("{}:{}", minutes, pad2(secs));

    if show_milliseconds {
        let centis = (seconds.fract() * 100.0) as i64;
        out.push('.');
        out.push_str(&pad2(centis));
    }

    out
}

/// [`format_time`] driven by the `[time]` config section
pub fn format_time_with(seconds: f64, config: &TimeConfig) -> String {
    format_time(seconds, config.show_milliseconds)
}

/// Like [`format_time`] but rejects negative and non-finite durations
pub fn try_format_time(seconds: f64, show_milliseconds: bool) -> FormatResult<String> {
    if !seconds.is_finite() || seconds < 0.0 {
        tracing::debug!(seconds, "Rejected duration for clock formatting");
        return Err(FormatError::invalid_input("duration", seconds));
    }
    Ok(format_time(seconds, show_milliseconds))
}
