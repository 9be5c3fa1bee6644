//! Query-string configuration.
//!
//! Parses strings like `?gutter=12&height=240&resize=false` into a
//! [`GridConfig`], so hosts can carry grid settings in a data attribute or
//! URL. Parsing never fails: bad input yields warnings and the default for
//! that key. Range checks stay in [`GridConfig::validate`].
//!
//! # Example
//!
//! ```
//! use zengrid::query;
//!
//! let result = query::parse("gutter=12&height=240&resize=off");
//! assert!(result.warnings.is_empty());
//! assert_eq!(result.config.gutter, 12.0);
//! assert_eq!(result.config.baseline_height, 240.0);
//! assert!(!result.config.refresh_on_resize);
//! ```

use alloc::string::String;
use alloc::vec::Vec;
use core::time::Duration;

use crate::config::GridConfig;

/// Result of parsing a grid query string.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseResult {
    /// Parsed configuration, defaults where a key was absent or invalid.
    pub config: GridConfig,
    /// Non-fatal parse warnings.
    pub warnings: Vec<ParseWarning>,
}

/// Non-fatal warning from query string parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseWarning {
    /// A setting appeared more than once (last value wins).
    DuplicateKey { key: &'static str, value: String },
    /// A key that is not a grid setting.
    KeyNotRecognized { key: String, value: String },
    /// A key was recognized but its value could not be parsed.
    ValueInvalid {
        key: &'static str,
        value: String,
        reason: &'static str,
    },
}

/// Parse a grid query string (with or without leading `?`).
pub fn parse(query: &str) -> ParseResult {
    let mut config = GridConfig::new();
    let mut warnings = Vec::new();
    let mut seen: Vec<&'static str> = Vec::new();

    for pair in split_query(query) {
        let (raw_key, raw_value) = split_pair(pair);
        let key = percent_decode(raw_key).to_ascii_lowercase();
        let value = percent_decode(raw_value);

        let Some(name) = canonical_key(&key) else {
            warnings.push(ParseWarning::KeyNotRecognized { key, value });
            continue;
        };
        if seen.contains(&name) {
            warnings.push(ParseWarning::DuplicateKey {
                key: name,
                value: value.clone(),
            });
        } else {
            seen.push(name);
        }

        if let Err(reason) = apply(&mut config, name, value.trim()) {
            warnings.push(ParseWarning::ValueInvalid {
                key: name,
                value,
                reason,
            });
        }
    }

    ParseResult { config, warnings }
}

/// Map accepted spellings to one name per setting.
fn canonical_key(key: &str) -> Option<&'static str> {
    match key {
        "gutter" | "g" => Some("gutter"),
        "height" | "h" | "baseline" | "initialheight" => Some("height"),
        "resize" | "refreshonresize" => Some("resize"),
        "maxscale" => Some("maxscale"),
        "timeout" => Some("timeout"),
        _ => None,
    }
}

fn apply(config: &mut GridConfig, name: &str, value: &str) -> Result<(), &'static str> {
    match name {
        "gutter" => config.gutter = parse_px(value).ok_or("expected a number of pixels")?,
        "height" => {
            config.baseline_height = parse_px(value).ok_or("expected a number of pixels")?;
        }
        "resize" => {
            config.refresh_on_resize =
                parse_bool(value).ok_or("expected true|false|1|0|yes|no|on|off")?;
        }
        "maxscale" => {
            config.max_last_row_scale = parse_f64(value).ok_or("expected a number")?;
        }
        "timeout" => {
            let ms: u64 = value.parse().map_err(|_| "expected milliseconds")?;
            config.resize_timeout = Duration::from_millis(ms);
        }
        _ => {}
    }
    Ok(())
}

fn parse_f64(s: &str) -> Option<f64> {
    let v: f64 = s.parse().ok()?;
    v.is_finite().then_some(v)
}

/// A number with an optional `px` suffix.
fn parse_px(s: &str) -> Option<f64> {
    let s = s.strip_suffix("px").unwrap_or(s);
    parse_f64(s.trim())
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

// ---- Query string tokenizer ----

/// Split query string on '&', dropping a leading '?'.
fn split_query(query: &str) -> impl Iterator<Item = &str> {
    let query = query.strip_prefix('?').unwrap_or(query);
    query.split('&').filter(|s| !s.is_empty())
}

/// Split a single "key=value" pair on the first '='.
fn split_pair(pair: &str) -> (&str, &str) {
    pair.split_once('=').unwrap_or((pair, ""))
}

/// Percent-decode a URL component. Also handles '+' as space.
fn percent_decode(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b'%' if i + 2 < bytes.len() => {
                match (hex_digit(bytes[i + 1]), hex_digit(bytes[i + 2])) {
                    (Some(hi), Some(lo)) => {
                        out.push(hi << 4 | lo);
                        i += 3;
                    }
                    _ => {
                        out.push(b'%');
                        i += 1;
                    }
                }
            }
            b => {
                out.push(b);
                i += 1;
            }
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}

fn hex_digit(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}
