//! CSS color parsing for themeswap.
//!
//! The transform engine asks one question of a token value: is this a color,
//! and if so, what are its channels? This crate answers it for the syntax
//! authors actually put in design tokens:
//!
//! - Hex: `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`
//! - Functions: `rgb()` / `rgba()` and `hsl()` / `hsla()`, in both the
//!   comma-separated and the modern slash syntax, with numeric or
//!   percentage channels
//! - Keywords: the full CSS named-color set, plus `transparent`
//!
//! Parsing either succeeds with normalized [`Rgba`] channels or fails with
//! [`ColorParseError`]. A failure is not exceptional here; callers routinely
//! probe values that turn out to be lengths or font stacks.

mod named;

use nom::{
    branch::alt,
    bytes::complete::{tag_no_case, take_while1},
    character::complete::{char, multispace0, multispace1},
    combinator::{all_consuming, opt, value},
    error::ParseError as NomParseError,
    number::complete::float,
    sequence::{delimited, preceded},
    IResult,
};
use thiserror::Error;

// ============ Color type ============

/// An sRGB color with 8-bit channels and a unit-interval alpha.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Alpha in `0.0..=1.0`.
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Unpack a `0xRRGGBB` value into an opaque color.
    pub const fn from_packed_rgb(rgb: u32) -> Self {
        Self::opaque(
            ((rgb >> 16) & 0xFF) as u8,
            ((rgb >> 8) & 0xFF) as u8,
            (rgb & 0xFF) as u8,
        )
    }

    pub fn is_opaque(&self) -> bool {
        self.a >= 1.0
    }

    /// The `[r, g, b]` bytes, alpha dropped.
    pub const fn channels(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

// ============ Errors ============

/// Why a string was not accepted as a color.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("empty color value")]
    Empty,
    #[error("unrecognized color value `{0}`")]
    Unrecognized(String),
}

// ============ Entry point ============

/// Parse a CSS color value.
///
/// Leading and trailing whitespace is ignored; everything in between must be
/// a single complete color. Trailing garbage (`"red 2px"`) is rejected, so
/// shorthand values never pass as colors by accident.
pub fn parse(input: &str) -> Result<Rgba, ColorParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ColorParseError::Empty);
    }

    if let Ok((_, color)) = all_consuming(hex_color::<nom::error::Error<&str>>)(trimmed) {
        return Ok(color);
    }
    if let Ok((_, color)) = all_consuming(rgb_color::<nom::error::Error<&str>>)(trimmed) {
        return Ok(color);
    }
    if let Ok((_, color)) = all_consuming(hsl_color::<nom::error::Error<&str>>)(trimmed) {
        return Ok(color);
    }
    if trimmed.eq_ignore_ascii_case("transparent") {
        return Ok(Rgba::new(0, 0, 0, 0.0));
    }
    if let Some(rgb) = named::lookup(trimmed) {
        return Ok(Rgba::from_packed_rgb(rgb));
    }

    Err(ColorParseError::Unrecognized(trimmed.to_string()))
}

// ============ Parsers ============

fn ws<'a, E: NomParseError<&'a str>>(input: &'a str) -> IResult<&'a str, (), E> {
    value((), multispace0)(input)
}

fn hex_byte<'a, E: NomParseError<&'a str>>(
    input: &'a str,
    digits: &str,
) -> Result<u8, nom::Err<E>> {
    u8::from_str_radix(digits, 16)
        .map_err(|_| nom::Err::Error(E::from_error_kind(input, nom::error::ErrorKind::HexDigit)))
}

/// Parse `#rgb`, `#rgba`, `#rrggbb`, or `#rrggbbaa`.
fn hex_color<'a, E: NomParseError<&'a str>>(input: &'a str) -> IResult<&'a str, Rgba, E> {
    let (input, _) = char('#')(input)?;
    let (input, hex) = take_while1(|c: char| c.is_ascii_hexdigit())(input)?;

    let color = match hex.len() {
        3 | 4 => {
            let r = hex_byte(input, &hex[0..1].repeat(2))?;
            let g = hex_byte(input, &hex[1..2].repeat(2))?;
            let b = hex_byte(input, &hex[2..3].repeat(2))?;
            let a = match hex.len() {
                4 => hex_byte(input, &hex[3..4].repeat(2))? as f32 / 255.0,
                _ => 1.0,
            };
            Rgba::new(r, g, b, a)
        }
        6 | 8 => {
            let r = hex_byte(input, &hex[0..2])?;
            let g = hex_byte(input, &hex[2..4])?;
            let b = hex_byte(input, &hex[4..6])?;
            let a = match hex.len() {
                8 => hex_byte(input, &hex[6..8])? as f32 / 255.0,
                _ => 1.0,
            };
            Rgba::new(r, g, b, a)
        }
        _ => {
            return Err(nom::Err::Error(E::from_error_kind(
                input,
                nom::error::ErrorKind::LengthValue,
            )));
        }
    };

    Ok((input, color))
}

/// Parse `rgb(...)` or `rgba(...)`.
fn rgb_color<'a, E: NomParseError<&'a str>>(input: &'a str) -> IResult<&'a str, Rgba, E> {
    let (input, _) = alt((tag_no_case("rgba"), tag_no_case("rgb")))(input)?;
    let (input, _) = ws(input)?;
    let (input, _) = char('(')(input)?;
    let (input, (r, g, b, a)) = alt((rgb_args_commas, rgb_args_slash))(input)?;
    let (input, _) = char(')')(input)?;

    Ok((input, Rgba::new(r, g, b, a.unwrap_or(1.0))))
}

/// Legacy comma syntax: `r, g, b` with an optional `, a`.
fn rgb_args_commas<'a, E: NomParseError<&'a str>>(
    input: &'a str,
) -> IResult<&'a str, (u8, u8, u8, Option<f32>), E> {
    let (input, _) = ws(input)?;
    let (input, r) = rgb_channel(input)?;
    let (input, _) = ws(input)?;
    let (input, _) = char(',')(input)?;
    let (input, _) = ws(input)?;
    let (input, g) = rgb_channel(input)?;
    let (input, _) = ws(input)?;
    let (input, _) = char(',')(input)?;
    let (input, _) = ws(input)?;
    let (input, b) = rgb_channel(input)?;
    let (input, _) = ws(input)?;
    let (input, a) = opt(preceded(
        char(','),
        delimited(multispace0, alpha_value, multispace0),
    ))(input)?;

    Ok((input, (r, g, b, a)))
}

/// Modern space syntax: `r g b` with an optional `/ a`.
fn rgb_args_slash<'a, E: NomParseError<&'a str>>(
    input: &'a str,
) -> IResult<&'a str, (u8, u8, u8, Option<f32>), E> {
    let (input, _) = ws(input)?;
    let (input, r) = rgb_channel(input)?;
    let (input, _) = multispace1(input)?;
    let (input, g) = rgb_channel(input)?;
    let (input, _) = multispace1(input)?;
    let (input, b) = rgb_channel(input)?;
    let (input, _) = ws(input)?;
    let (input, a) = opt(preceded(
        char('/'),
        delimited(multispace0, alpha_value, multispace0),
    ))(input)?;

    Ok((input, (r, g, b, a)))
}

/// Parse `hsl(...)` or `hsla(...)`.
fn hsl_color<'a, E: NomParseError<&'a str>>(input: &'a str) -> IResult<&'a str, Rgba, E> {
    let (input, _) = alt((tag_no_case("hsla"), tag_no_case("hsl")))(input)?;
    let (input, _) = ws(input)?;
    let (input, _) = char('(')(input)?;
    let (input, (h, s, l, a)) = alt((hsl_args_commas, hsl_args_slash))(input)?;
    let (input, _) = char(')')(input)?;

    let (r, g, b) = hsl_to_rgb(h, s, l);
    Ok((input, Rgba::new(r, g, b, a.unwrap_or(1.0))))
}

fn hsl_args_commas<'a, E: NomParseError<&'a str>>(
    input: &'a str,
) -> IResult<&'a str, (f32, f32, f32, Option<f32>), E> {
    let (input, _) = ws(input)?;
    let (input, h) = hue_value(input)?;
    let (input, _) = ws(input)?;
    let (input, _) = char(',')(input)?;
    let (input, _) = ws(input)?;
    let (input, s) = percentage(input)?;
    let (input, _) = ws(input)?;
    let (input, _) = char(',')(input)?;
    let (input, _) = ws(input)?;
    let (input, l) = percentage(input)?;
    let (input, _) = ws(input)?;
    let (input, a) = opt(preceded(
        char(','),
        delimited(multispace0, alpha_value, multispace0),
    ))(input)?;

    Ok((input, (h, s, l, a)))
}

fn hsl_args_slash<'a, E: NomParseError<&'a str>>(
    input: &'a str,
) -> IResult<&'a str, (f32, f32, f32, Option<f32>), E> {
    let (input, _) = ws(input)?;
    let (input, h) = hue_value(input)?;
    let (input, _) = multispace1(input)?;
    let (input, s) = percentage(input)?;
    let (input, _) = multispace1(input)?;
    let (input, l) = percentage(input)?;
    let (input, _) = ws(input)?;
    let (input, a) = opt(preceded(
        char('/'),
        delimited(multispace0, alpha_value, multispace0),
    ))(input)?;

    Ok((input, (h, s, l, a)))
}

/// A color channel: a number, or a percentage of 255.
fn rgb_channel<'a, E: NomParseError<&'a str>>(input: &'a str) -> IResult<&'a str, u8, E> {
    let (input, n) = float(input)?;
    let (input, percent) = opt(char('%'))(input)?;

    let n = if percent.is_some() { n * 255.0 / 100.0 } else { n };
    Ok((input, n.round().clamp(0.0, 255.0) as u8))
}

/// An alpha value: a number in `0..=1`, or a percentage.
fn alpha_value<'a, E: NomParseError<&'a str>>(input: &'a str) -> IResult<&'a str, f32, E> {
    let (input, n) = float(input)?;
    let (input, percent) = opt(char('%'))(input)?;

    let n = if percent.is_some() { n / 100.0 } else { n };
    Ok((input, n.clamp(0.0, 1.0)))
}

/// A hue in degrees (bare number or `deg`), normalized to `0..360`.
fn hue_value<'a, E: NomParseError<&'a str>>(input: &'a str) -> IResult<&'a str, f32, E> {
    let (input, h) = float(input)?;
    let (input, _) = opt(tag_no_case("deg"))(input)?;

    Ok((input, h.rem_euclid(360.0)))
}

/// A mandatory percentage, normalized to `0..=1`.
fn percentage<'a, E: NomParseError<&'a str>>(input: &'a str) -> IResult<&'a str, f32, E> {
    let (input, n) = float(input)?;
    let (input, _) = char('%')(input)?;

    Ok((input, (n / 100.0).clamp(0.0, 1.0)))
}

// ============ HSL conversion ============

/// Convert hue (degrees, `0..360`) plus saturation/lightness (`0..=1`) to
/// RGB bytes.
fn hsl_to_rgb(h: f32, s: f32, l: f32) -> (u8, u8, u8) {
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let hp = h / 60.0;
    let x = c * (1.0 - (hp % 2.0 - 1.0).abs());

    let (r1, g1, b1) = match hp as u8 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    let m = l - c / 2.0;
    (to_channel(r1 + m), to_channel(g1 + m), to_channel(b1 + m))
}

fn to_channel(v: f32) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

// ============ Tests ============
