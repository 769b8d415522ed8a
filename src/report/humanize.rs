const MS_IN_S: u64 = 1000;
const MS_IN_M: u64 = MS_IN_S * 60;
const MS_IN_H: u64 = MS_IN_M * 60;

/// Milliseconds in the two largest units that fit, truncated.
///
/// Example: `754_567` -> `"12m 34s"`.
pub fn humanize(ms: u64) -> String {
    match ms {
        ms if ms < MS_IN_S => format!("{ms}ms"),
        ms if ms < MS_IN_M => format!("{}s {}ms", ms / MS_IN_S, ms % MS_IN_S),
        ms if ms < MS_IN_H => format!("{}m {}s", ms / MS_IN_M, (ms % MS_IN_M) / MS_IN_S),
        ms => format!("{}h {}m", ms / MS_IN_H, (ms % MS_IN_H) / MS_IN_M),
    }
}
