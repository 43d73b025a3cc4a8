//! Default formatters installed by [`Formatter::new`](super::Formatter::new).
//!
//! Inspired by Django's humanize and template filters. Functions that can't
//! make sense of their input return the `failure_string` option (`"N/A"` by
//! default) instead of failing, so one odd cell doesn't break a whole render.

use crate::data::value::Value;
use crate::error::TableFuError;
use crate::Result;

use super::registry::FormatOptions;
use super::states;

type Builtin = fn(&Value, &[Value], &FormatOptions) -> Result<String>;

pub(crate) const DEFAULT_FORMATTERS: &[(&str, Builtin)] = &[
    ("ap_state", ap_state),
    ("capfirst", capfirst),
    ("dollars", dollars),
    ("dollar_signs", dollar_signs),
    ("image", image),
    ("intcomma", intcomma),
    ("link", link),
    ("percentage", percentage),
    ("percent_change", percent_change),
    ("ratio", ratio),
    ("state_postal", state_postal),
    ("title", title),
];

const FAILURE: &str = "N/A";

/// Price ranges wider than this aren't ranges any more.
const MAX_DOLLAR_SIGNS: i64 = 1024;

fn option_str<'a>(options: &'a FormatOptions, key: &str) -> Option<&'a str> {
    options.get(key).and_then(Value::as_str)
}

fn failure_string(options: &FormatOptions) -> String {
    option_str(options, "failure_string")
        .unwrap_or(FAILURE)
        .to_string()
}

fn decimal_places(options: &FormatOptions, default: usize) -> usize {
    options
        .get("decimal_places")
        .and_then(Value::as_i64)
        .map(|n| n.max(0) as usize)
        .unwrap_or(default)
}

fn multiply(options: &FormatOptions) -> bool {
    match options.get("multiply") {
        Some(Value::Bool(b)) => *b,
        Some(other) => !other.is_empty() && other.as_f64() != Some(0.0),
        None => true,
    }
}

/// `<a href="{url}" title="{title}">{title}</a>`, with the URL as first argument.
pub fn link(value: &Value, args: &[Value], _options: &FormatOptions) -> Result<String> {
    let url = args.first().ok_or_else(|| TableFuError::Format {
        name: "link".to_string(),
        message: "expected a url argument".to_string(),
    })?;
    Ok(format!(
        r#"<a href="{url}" title="{title}">{title}</a>"#,
        url = url,
        title = value
    ))
}

/// `<img src="{value}" style="...">`, sized by the `width` and `height` options.
pub fn image(value: &Value, _args: &[Value], options: &FormatOptions) -> Result<String> {
    let mut style = String::new();
    if let Some(width) = options.get("width").filter(|w| !w.is_empty()) {
        style.push_str(&format!("width:{}", width));
    }
    if let Some(height) = options.get("height").filter(|h| !h.is_empty()) {
        style.push_str(&format!("height:{}", height));
    }
    Ok(format!(r#"<img src="{}" style="{}">"#, value, style))
}

/// Group the leading digits in threes: `45000` becomes `45,000`.
pub fn intcomma(value: &Value, _args: &[Value], _options: &FormatOptions) -> Result<String> {
    Ok(group_thousands(&value.to_string()))
}

fn group_thousands(orig: &str) -> String {
    let (sign, unsigned) = match orig.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", orig),
    };
    let digit_len = unsigned
        .bytes()
        .take_while(|b| b.is_ascii_digit())
        .count();
    if digit_len <= 3 {
        return orig.to_string();
    }

    let (digits, rest) = unsigned.split_at(digit_len);
    let mut grouped = String::with_capacity(orig.len() + digit_len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digit_len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{}{}{}", sign, grouped, rest)
}

/// `$` followed by the comma-grouped value.
pub fn dollars(value: &Value, args: &[Value], options: &FormatOptions) -> Result<String> {
    Ok(format!("${}", intcomma(value, args, options)?))
}

/// One `$` per unit, Yelp-style price ranges: `3` becomes `$$$`.
pub fn dollar_signs(value: &Value, _args: &[Value], options: &FormatOptions) -> Result<String> {
    match value.as_i64() {
        Some(count) if count <= MAX_DOLLAR_SIGNS => Ok("$".repeat(count.max(0) as usize)),
        _ => Ok(failure_string(options)),
    }
}

/// Lowercase everything, then capitalize the first character.
pub fn capfirst(value: &Value, _args: &[Value], options: &FormatOptions) -> Result<String> {
    let lower = match value.as_str() {
        Some(s) if !s.is_empty() => s.to_lowercase(),
        _ => return Ok(failure_string(options)),
    };
    let mut chars = lower.chars();
    Ok(match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => failure_string(options),
    })
}

/// Titlecase, without capitalizing after apostrophes or digits (`they're`, `1st`).
pub fn title(value: &Value, _args: &[Value], options: &FormatOptions) -> Result<String> {
    let lower = match value.as_str() {
        Some(s) => s.to_lowercase(),
        None => return Ok(failure_string(options)),
    };

    let mut chars: Vec<char> = Vec::with_capacity(lower.len());
    let mut prev_cased = false;
    for ch in lower.chars() {
        if ch.is_alphabetic() {
            if prev_cased {
                chars.extend(ch.to_lowercase());
            } else {
                chars.extend(ch.to_uppercase());
            }
            prev_cased = true;
        } else {
            chars.push(ch);
            prev_cased = false;
        }
    }

    for i in 1..chars.len() {
        if !chars[i].is_uppercase() {
            continue;
        }
        let after_digit = chars[i - 1].is_ascii_digit();
        let after_contraction =
            i >= 2 && chars[i - 1] == '\'' && chars[i - 2].is_ascii_lowercase();
        if after_digit || after_contraction {
            chars[i] = chars[i].to_ascii_lowercase();
        }
    }

    let result: String = chars.into_iter().collect();
    if result.is_empty() {
        return Ok(failure_string(options));
    }
    Ok(result)
}

/// `0.1056` becomes `10.6%`. Options: `decimal_places` (1), `multiply` (true).
pub fn percentage(value: &Value, _args: &[Value], options: &FormatOptions) -> Result<String> {
    let Some(mut f) = value.as_f64() else {
        return Ok(failure_string(options));
    };
    if multiply(options) {
        f *= 100.0;
    }
    Ok(format!("{:.*}%", decimal_places(options, 1), f))
}

/// Like [`percentage`] with an explicit `+` on increases: `0.02` becomes `+2.0%`.
pub fn percent_change(value: &Value, _args: &[Value], options: &FormatOptions) -> Result<String> {
    let Some(mut f) = value.as_f64() else {
        return Ok(failure_string(options));
    };
    if multiply(options) {
        f *= 100.0;
    }
    let s = format!("{:.*}", decimal_places(options, 1), f);
    if f > 0.0 {
        Ok(format!("+{}%", s))
    } else {
        Ok(format!("{}%", s))
    }
}

/// `4.2` becomes `4:1`. Option: `decimal_places` (0).
pub fn ratio(value: &Value, _args: &[Value], options: &FormatOptions) -> Result<String> {
    match value.as_f64() {
        Some(f) => Ok(format!("{:.*}:1", decimal_places(options, 0), f)),
        None => Ok(failure_string(options)),
    }
}

/// AP style abbreviation for a state name, postal code or FIPS code.
///
/// Unknown input comes back unchanged unless `failure_string` is set.
pub fn ap_state(value: &Value, _args: &[Value], options: &FormatOptions) -> Result<String> {
    match states::lookup(value) {
        Some(state) => Ok(state.ap.to_string()),
        None => Ok(option_str(options, "failure_string")
            .map(str::to_string)
            .unwrap_or_else(|| value.to_string())),
    }
}

/// Postal abbreviation for a state name, AP abbreviation or FIPS code.
pub fn state_postal(value: &Value, _args: &[Value], _options: &FormatOptions) -> Result<String> {
    Ok(states::lookup(value)
        .map(|state| state.postal.to_string())
        .unwrap_or_else(|| value.to_string()))
}
