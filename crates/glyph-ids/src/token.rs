//! Query-token grammar.
//!
//! Turns the free-form text a user types into the search box into vertex
//! names. Four token forms are accepted:
//!
//! | form | example | mapped to |
//! |------|---------|-----------|
//! | bare glyph name | `koseki-001700` | the name itself |
//! | CDP escape | `&CDP-8C42;` | `abst:cdp-8c42` |
//! | code-point literal | `U+4E2D` | `abst:u4e2d` |
//! | single character | `中` | `abst:u4e2d` |
//!
//! Whitespace separates tokens; everything else is consumed one character at
//! a time, so the grammar never rejects an input outright.

use nom::{
    branch::alt,
    bytes::complete::{tag, take_while, take_while_m_n},
    character::complete::{anychar, char, satisfy},
    combinator::{map, recognize, verify},
    sequence::{delimited, pair, preceded},
    IResult,
};

use crate::name::{abstract_codepoint, ABSTRACT_PREFIX};

/// Parses a query string into vertex names.
///
/// # Example
///
/// ```rust
/// use glyph_ids::parse_query;
///
/// let names = parse_query("u4e00-j &CDP-8C42; U+4E2D 口");
/// assert_eq!(
///     names,
///     vec![
///         "u4e00-j".to_string(),
///         "abst:cdp-8c42".to_string(),
///         "abst:u4e2d".to_string(),
///         "abst:u53e3".to_string(),
///     ]
/// );
/// ```
pub fn parse_query(input: &str) -> Vec<String> {
    let mut names = Vec::new();
    let mut rest = input.trim_start();
    while !rest.is_empty() {
        match query_token(rest) {
            Ok((next, name)) => {
                names.push(name);
                rest = next.trim_start();
            }
            // Unreachable: the single-character fallback accepts anything.
            Err(_) => break,
        }
    }
    names
}

fn query_token(input: &str) -> IResult<&str, String> {
    alt((glyph_name, cdp_escape, codepoint_literal, raw_character))(input)
}

/// Bare glyph name: a lowercase letter followed by at least four characters
/// of `[a-z0-9_-]`. Kept as a concrete name, not an abstract reference.
fn glyph_name(input: &str) -> IResult<&str, String> {
    map(
        verify(
            recognize(pair(
                satisfy(|c: char| c.is_ascii_lowercase()),
                take_while(|c: char| {
                    c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-'
                }),
            )),
            |s: &str| s.len() >= 5,
        ),
        str::to_string,
    )(input)
}

/// CDP entity escape: `&CDP-XXXX;` with uppercase hex digits.
fn cdp_escape(input: &str) -> IResult<&str, String> {
    map(
        delimited(
            tag("&CDP-"),
            take_while_m_n(4, 4, |c: char| {
                c.is_ascii_digit() || ('A'..='F').contains(&c)
            }),
            char(';'),
        ),
        |hex: &str| format!("{}cdp-{}", ABSTRACT_PREFIX, hex.to_ascii_lowercase()),
    )(input)
}

/// Code-point literal: `U+XXXX` or `u+XXXX` with one to six hex digits.
fn codepoint_literal(input: &str) -> IResult<&str, String> {
    map(
        preceded(
            alt((tag("U+"), tag("u+"))),
            take_while_m_n(1, 6, |c: char| c.is_ascii_hexdigit()),
        ),
        |hex: &str| {
            format!(
                "{}u{:0>4}",
                ABSTRACT_PREFIX,
                hex.to_ascii_lowercase()
            )
        },
    )(input)
}

/// Fallback: any single character stands for its own code point.
fn raw_character(input: &str) -> IResult<&str, String> {
    map(anychar, abstract_codepoint)(input)
}
