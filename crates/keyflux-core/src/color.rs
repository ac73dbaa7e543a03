//! Color codec: three supported notations in, `rgb()`/`rgba()` strings out.
//!
//! Supported input: `#rgb` (digits doubled), `#rrggbb`, `rgb(r,g,b)` and
//! `rgba(r,g,b,a)` with integer-parsed components. Anything else is `None`;
//! the opaque-white fallback lives at the call site, never here.

/// Parsed color channels, 0..=255, with an optional alpha in 0..=1.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: Option<f32>,
}

/// Opaque white, the fail-soft substitute for unparseable input.
pub const WHITE: Rgba = Rgba {
    r: 255.0,
    g: 255.0,
    b: 255.0,
    a: None,
};

pub fn parse(s: &str) -> Option<Rgba> {
    let s = s.trim();
    if let Some(hex) = s.strip_prefix('#') {
        parse_hex(hex)
    } else if let Some(body) = s.strip_prefix("rgba(").and_then(|r| r.strip_suffix(')')) {
        parse_components(body, true)
    } else if let Some(body) = s.strip_prefix("rgb(").and_then(|r| r.strip_suffix(')')) {
        parse_components(body, false)
    } else {
        None
    }
}

fn parse_hex(hex: &str) -> Option<Rgba> {
    // Length checks below count bytes; multibyte input must fail soft, not
    // land on a char-boundary panic when slicing digit pairs.
    if !hex.is_ascii() {
        return None;
    }
    let expanded;
    let digits = match hex.len() {
        3 => {
            let mut buf = String::with_capacity(6);
            for c in hex.chars() {
                buf.push(c);
                buf.push(c);
            }
            expanded = buf;
            expanded.as_str()
        }
        6 => hex,
        _ => return None,
    };
    let channel = |range| u8::from_str_radix(&digits[range], 16).ok();
    Some(Rgba {
        r: channel(0..2)? as f32,
        g: channel(2..4)? as f32,
        b: channel(4..6)? as f32,
        a: None,
    })
}

fn parse_components(body: &str, with_alpha: bool) -> Option<Rgba> {
    let mut parts = body.split(',');
    let mut next = || parts.next().map(str::trim).and_then(leading_int);
    let r = next()?;
    let g = next()?;
    let b = next()?;
    let a = if with_alpha { Some(next()?) } else { None };
    if parts.next().is_some() {
        return None;
    }
    Some(Rgba { r, g, b, a })
}

/// Leading-integer parse: optional sign followed by a digit run, trailing
/// text ignored. Fractional alpha therefore truncates toward an integer
/// ("0.5" parses as 0) -- observed upstream behavior, kept as-is.
fn leading_int(s: &str) -> Option<f32> {
    let (sign, rest) = match s.strip_prefix('-') {
        Some(rest) => (-1.0, rest),
        None => (1.0, s),
    };
    let digits: &str = &rest[..rest.chars().take_while(|c| c.is_ascii_digit()).count()];
    if digits.is_empty() {
        return None;
    }
    digits.parse::<i64>().ok().map(|n| sign * n as f32)
}

#[inline]
fn clamp_channel(v: f32) -> i64 {
    v.round().clamp(0.0, 255.0) as i64
}

/// Render interpolated channels as an `rgb()` string, rounded and clamped.
pub fn format_rgb(r: f32, g: f32, b: f32) -> String {
    format!(
        "rgb({},{},{})",
        clamp_channel(r),
        clamp_channel(g),
        clamp_channel(b)
    )
}

/// Render interpolated channels as an `rgba()` string; alpha clamps to 0..=1.
pub fn format_rgba(r: f32, g: f32, b: f32, a: f32) -> String {
    format!(
        "rgba({},{},{},{})",
        clamp_channel(r),
        clamp_channel(g),
        clamp_channel(b),
        a.clamp(0.0, 1.0)
    )
}
