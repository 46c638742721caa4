//! Axis tick labels for `log2` axes.
//!
//! A tick at position `e` on a `log2` axis stands for the ratio `2^e`.
//! [`powertick`] rewrites every numeral of a label into that power.
//!
//! ```
//! use benchmark_profiles::ticks::{powertick, powertick_latex};
//!
//! assert_eq!(powertick("15"), "2¹⁵");
//! assert_eq!(powertick("2.1"), "2²⋅¹");
//! assert_eq!(powertick("$0$"), "$2^0$");
//! assert_eq!(powertick_latex("$15$"), "$2^{15}$");
//! ```

use std::fmt;

/// A tick label, either plain text or LaTeX math markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickLabel {
    /// Plain text; numerals outside `$…$` become Unicode superscripts.
    Plain(String),
    /// LaTeX markup; every numeral becomes `2^{…}`.
    Latex(String),
}

impl TickLabel {
    /// Rewrite every numeral as a power of two, keeping the representation.
    #[must_use]
    pub fn powertick(&self) -> Self {
        match self {
            Self::Plain(s) => Self::Plain(powertick(s)),
            Self::Latex(s) => Self::Latex(powertick_latex(s)),
        }
    }

    /// Label text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Plain(s) | Self::Latex(s) => s,
        }
    }
}

impl fmt::Display for TickLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Replace each numeral `n` in a plain label by `2ⁿ`.
///
/// Numerals inside `$…$` math delimiters become `2^n` (braced when longer
/// than one character) so the surrounding markup stays valid.
#[must_use]
pub fn powertick(text: &str) -> String {
    let mut out = String::with_capacity(text.len() * 2);
    let mut in_math = false;
    for token in Tokens::new(text) {
        match token {
            Token::Numeral(n) if in_math => push_math_power(&mut out, n, false),
            Token::Numeral(n) => {
                out.push('2');
                out.extend(n.chars().filter_map(superscript));
            }
            Token::Other(c) => {
                if c == '$' {
                    in_math = !in_math;
                }
                out.push(c);
            }
        }
    }
    out
}

/// Replace each numeral `n` in a LaTeX label by `2^{n}`.
#[must_use]
pub fn powertick_latex(text: &str) -> String {
    let mut out = String::with_capacity(text.len() * 2);
    for token in Tokens::new(text) {
        match token {
            Token::Numeral(n) => push_math_power(&mut out, n, true),
            Token::Other(c) => out.push(c),
        }
    }
    out
}

/// Format an axis position compactly (`3`, `2.5`, `-1`, `0.25`).
#[must_use]
pub fn tick_text(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded == rounded.trunc() {
        format!("{}", rounded as i64)
    } else {
        let s = format!("{rounded:.2}");
        s.trim_end_matches('0').to_string()
    }
}

fn push_math_power(out: &mut String, numeral: &str, always_brace: bool) {
    let ascii: String = numeral
        .chars()
        .map(|c| if c == '\u{2212}' { '-' } else { c })
        .collect();
    out.push_str("2^");
    if always_brace || ascii.chars().count() > 1 {
        out.push('{');
        out.push_str(&ascii);
        out.push('}');
    } else {
        out.push_str(&ascii);
    }
}

fn superscript(c: char) -> Option<char> {
    Some(match c {
        '0' => '⁰',
        '1' => '¹',
        '2' => '²',
        '3' => '³',
        '4' => '⁴',
        '5' => '⁵',
        '6' => '⁶',
        '7' => '⁷',
        '8' => '⁸',
        '9' => '⁹',
        '.' => '⋅',
        '-' | '\u{2212}' => '⁻',
        _ => return None,
    })
}

#[derive(Debug, PartialEq)]
enum Token<'a> {
    Numeral(&'a str),
    Other(char),
}

/// Splits a label into numerals and single non-numeral characters.
///
/// A numeral is an optional minus sign, digits, and an optional fraction.
/// The minus sign only belongs to the numeral at the start of the label or
/// after a space, `(`, `{` or `$`.
struct Tokens<'a> {
    text: &'a str,
    pos: usize,
    prev: Option<char>,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            text,
            pos: 0,
            prev: None,
        }
    }

    fn numeral_len(&self) -> usize {
        let rest = &self.text[self.pos..];
        let mut chars = rest.char_indices().peekable();
        let mut end = 0;

        if let Some(&(_, c)) = chars.peek() {
            let sign_allowed = matches!(self.prev, None | Some(' ' | '(' | '{' | '$'));
            if (c == '-' || c == '\u{2212}') && sign_allowed {
                chars.next();
                end = c.len_utf8();
            }
        }

        let digits_start = end;
        while let Some(&(i, c)) = chars.peek() {
            if !c.is_ascii_digit() {
                break;
            }
            end = i + 1;
            chars.next();
        }
        if end == digits_start {
            return 0;
        }

        if let Some(&(_, '.')) = chars.peek() {
            chars.next();
            let mut frac_end = None;
            while let Some(&(i, c)) = chars.peek() {
                if !c.is_ascii_digit() {
                    break;
                }
                frac_end = Some(i + 1);
                chars.next();
            }
            if let Some(frac_end) = frac_end {
                end = frac_end;
            }
        }
        end
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let c = self.text[self.pos..].chars().next()?;
        let len = self.numeral_len();
        let token = if len > 0 {
            let numeral = &self.text[self.pos..self.pos + len];
            self.pos += len;
            self.prev = numeral.chars().last();
            Token::Numeral(numeral)
        } else {
            self.pos += c.len_utf8();
            self.prev = Some(c);
            Token::Other(c)
        };
        Some(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_powertick_plain_integer() {
        assert_eq!(powertick("15"), "2¹⁵");
        assert_eq!(powertick("0"), "2⁰");
    }

    #[test]
    fn test_powertick_plain_decimal() {
        assert_eq!(powertick("2.1"), "2²⋅¹");
    }

    #[test]
    fn test_powertick_plain_negative() {
        assert_eq!(powertick("-1"), "2⁻¹");
        assert_eq!(powertick("\u{2212}2"), "2⁻²");
    }

    #[test]
    fn test_powertick_math_delimiters() {
        assert_eq!(powertick("$0$"), "$2^0$");
        assert_eq!(powertick("$15$"), "$2^{15}$");
        assert_eq!(powertick("$2.1$"), "$2^{2.1}$");
    }

    #[test]
    fn test_powertick_latex() {
        assert_eq!(powertick_latex("$15$"), "$2^{15}$");
        assert_eq!(powertick_latex("$2.1$"), "$2^{2.1}$");
        assert_eq!(powertick_latex("$0$"), "$2^{0}$");
        assert_eq!(powertick_latex("$-3$"), "$2^{-3}$");
    }

    #[test]
    fn test_powertick_keeps_surrounding_text() {
        assert_eq!(powertick("x = 3 (approx)"), "x = 2³ (approx)");
        assert_eq!(powertick("no digits"), "no digits");
        assert_eq!(powertick(""), "");
    }

    #[test]
    fn test_hyphen_between_numerals_is_not_a_sign() {
        assert_eq!(powertick("1-2"), "2¹-2²");
    }

    #[test]
    fn test_trailing_dot_is_not_a_fraction() {
        assert_eq!(powertick("3."), "2³.");
    }

    #[test]
    fn test_tick_label_dispatch() {
        let plain = TickLabel::Plain("4".to_string()).powertick();
        let latex = TickLabel::Latex("$4$".to_string()).powertick();
        assert_eq!(plain.as_str(), "2⁴");
        assert_eq!(latex.to_string(), "$2^{4}$");
    }

    #[test]
    fn test_same_exponent_in_both_representations() {
        let plain = powertick("$12.5$");
        let latex = powertick_latex("$12.5$");
        assert_eq!(plain, latex);
    }

    #[test]
    fn test_tick_text() {
        assert_eq!(tick_text(3.0), "3");
        assert_eq!(tick_text(2.5), "2.5");
        assert_eq!(tick_text(0.25), "0.25");
        assert_eq!(tick_text(-1.0), "-1");
        assert_eq!(tick_text(1.0 / 3.0), "0.33");
    }
}
