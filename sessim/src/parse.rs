/// Reads the integer a readout starts with, the way a browser reads a
/// displayed number: leading whitespace is skipped, an optional sign and the
/// longest run of decimal digits are taken, and anything after is ignored.
///
/// Absent or unparsable text yields 0. Negative values also yield 0, since
/// readouts are never negative.
pub fn leading_count(text: Option<&str>) -> u32 {
    let Some(text) = text else {
        return 0;
    };

    let trimmed = text.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 || negative {
        return 0;
    }

    rest[..digits].parse::<u32>().unwrap_or(u32::MAX)
}
