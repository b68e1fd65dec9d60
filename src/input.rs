//! Normalization of the accepted input shapes into a canonical `Complex`.
//!
//! Shapes that can always be interpreted (`f64`, `(f64, f64)`, `[f64; 2]`,
//! `Polar`, `num_complex::Complex64`) convert with `From`. Shapes that may be
//! malformed (text, JSON values, arbitrary-length sequences) go through
//! `TryFrom` and report a `ComplexError`.

use crate::complex::Complex;
use crate::error::{ComplexError, Result};
use num_complex::Complex64;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::{debug, trace};

/// Polar form; both `{abs, arg}` and `{r, phi}` map here.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Polar {
    pub r: f64,
    pub phi: f64,
}

impl Polar {
    pub fn new(r: f64, phi: f64) -> Self {
        Polar { r, phi }
    }
}

/// Every input shape a complex number can be built from.
#[derive(Clone, Debug, PartialEq)]
pub enum Input {
    Empty,
    Cartesian(f64, f64),
    Polar(Polar),
    Sequence(Vec<f64>),
    Scalar(f64),
    Text(String),
    Object(Value),
}

/// Resolve an input shape into a value, or report why it is malformed.
pub fn normalize(input: Input) -> Result<Complex> {
    match input {
        Input::Empty => Ok(Complex::ZERO),
        Input::Cartesian(re, im) => Ok(Complex::new(re, im)),
        Input::Polar(polar) => Ok(Complex::from(polar)),
        Input::Sequence(vals) => match vals.as_slice() {
            [re, im] => Ok(Complex::new(*re, *im)),
            _ => Err(ComplexError::UnsupportedShape(format!(
                "sequence of length {}",
                vals.len()
            ))),
        },
        Input::Scalar(re) => Ok(Complex::new(re, 0.0)),
        Input::Text(text) => parse_text(&text),
        Input::Object(value) => normalize_value(&value),
    }
}

fn polar_to_complex(r: f64, phi: f64) -> Complex {
    // ∞·cos(θ) can be NaN, the infinity pole has no direction anyway
    if !r.is_finite() && phi.is_finite() {
        trace!(r, phi, "polar input collapsed to the infinity pole");
        return Complex::INFINITY;
    }
    Complex::new(r * phi.cos(), r * phi.sin())
}

fn number_field(map: &serde_json::Map<String, Value>, key: &str) -> Result<f64> {
    map.get(key).and_then(Value::as_f64).ok_or_else(|| {
        ComplexError::UnsupportedShape(format!("field `{}` is not a number", key))
    })
}

fn normalize_value(value: &Value) -> Result<Complex> {
    match value {
        Value::Null => Ok(Complex::ZERO),
        Value::Number(num) => num
            .as_f64()
            .map(|re| Complex::new(re, 0.0))
            .ok_or_else(|| ComplexError::InvalidNumber(num.to_string())),
        Value::String(text) => parse_text(text),
        Value::Array(items) => match items.as_slice() {
            [re, im] => match (re.as_f64(), im.as_f64()) {
                (Some(re), Some(im)) => Ok(Complex::new(re, im)),
                _ => Err(ComplexError::UnsupportedShape(
                    "array elements must be numbers".to_string(),
                )),
            },
            _ => Err(ComplexError::UnsupportedShape(format!(
                "array of length {}",
                items.len()
            ))),
        },
        Value::Object(map) => {
            if map.contains_key("re") && map.contains_key("im") {
                Ok(Complex::new(number_field(map, "re")?, number_field(map, "im")?))
            } else if map.contains_key("abs") && map.contains_key("arg") {
                Ok(polar_to_complex(
                    number_field(map, "abs")?,
                    number_field(map, "arg")?,
                ))
            } else if map.contains_key("r") && map.contains_key("phi") {
                Ok(polar_to_complex(
                    number_field(map, "r")?,
                    number_field(map, "phi")?,
                ))
            } else {
                let keys: Vec<&str> = map.keys().map(String::as_str).collect();
                Err(ComplexError::UnsupportedShape(format!(
                    "object with keys {:?}",
                    keys
                )))
            }
        }
        Value::Bool(_) => Err(ComplexError::UnsupportedShape("boolean".to_string())),
    }
}

// =========================================================================
// Text grammar
// =========================================================================

#[derive(Clone, Copy, Debug, PartialEq)]
enum Token<'a> {
    Number(&'a str),
    Plus,
    Minus,
    Unit,
    Space,
    Other(&'a str),
}

impl<'a> Token<'a> {
    fn from_match(tok: &'a str) -> Token<'a> {
        match tok {
            "+" => Token::Plus,
            "-" => Token::Minus,
            "i" | "I" => Token::Unit,
            _ if tok.starts_with(|c: char| c.is_ascii_digit())
                || (tok.starts_with('.') && tok.len() > 1) =>
            {
                Token::Number(tok)
            }
            _ if tok.chars().all(char::is_whitespace) => Token::Space,
            _ => Token::Other(tok),
        }
    }
}

fn token_regex() -> &'static Regex {
    static TOKENS: OnceLock<Regex> = OnceLock::new();
    TOKENS.get_or_init(|| {
        Regex::new(r"(?s)[0-9]+\.?[0-9]*e[+-]?[0-9]+|[0-9]+\.?[0-9]*|\.[0-9]+|.")
            .expect("Invalid regex!")
    })
}

fn parse_number(lit: &str, negative: bool) -> Result<f64> {
    let val = f64::from_str(lit).map_err(|_| ComplexError::InvalidNumber(lit.to_string()))?;
    Ok(if negative { -val } else { val })
}

/// Parse text such as `"3 - 4.5i"`, `"-i"`, `"2e3+i7"`.
///
/// A run of `+`/`-` sets the sign of the next term. A number followed by
/// `i` (or `i` followed by a number) adds to the imaginary part, a lone `i`
/// adds ±1, any other number adds to the real part.
fn parse_text(text: &str) -> Result<Complex> {
    let tokens: Vec<Token> = token_regex()
        .find_iter(text)
        .map(|m| Token::from_match(m.as_str()))
        .collect();

    if tokens.iter().all(|tok| *tok == Token::Space) {
        return Err(ComplexError::EmptyInput);
    }

    let mut re = 0.0;
    let mut im = 0.0;
    let mut plus = 1usize;
    let mut minus = 0usize;

    let mut idx = 0;
    while idx < tokens.len() {
        match tokens[idx] {
            Token::Space => {}
            Token::Plus => plus += 1,
            Token::Minus => minus += 1,
            Token::Unit => {
                if plus + minus == 0 {
                    return Err(ComplexError::InvalidToken("i".to_string()));
                }
                let negative = minus % 2 == 1;
                if let Some(Token::Number(lit)) = tokens.get(idx + 1) {
                    im += parse_number(lit, negative)?;
                    idx += 1;
                } else {
                    im += if negative { -1.0 } else { 1.0 };
                }
                plus = 0;
                minus = 0;
            }
            Token::Number(lit) => {
                if plus + minus == 0 {
                    return Err(ComplexError::InvalidToken(lit.to_string()));
                }
                let val = parse_number(lit, minus % 2 == 1)?;
                if let Some(Token::Unit) = tokens.get(idx + 1) {
                    im += val;
                    idx += 1;
                } else {
                    re += val;
                }
                plus = 0;
                minus = 0;
            }
            Token::Other(tok) => return Err(ComplexError::InvalidToken(tok.to_string())),
        }
        idx += 1;
    }

    if plus + minus > 0 {
        return Err(ComplexError::TrailingSign);
    }

    Ok(Complex::new(re, im))
}

// =========================================================================
// Conversions
// =========================================================================

impl From<f64> for Input {
    fn from(re: f64) -> Self {
        Input::Scalar(re)
    }
}

impl From<(f64, f64)> for Input {
    fn from((re, im): (f64, f64)) -> Self {
        Input::Cartesian(re, im)
    }
}

impl From<Polar> for Input {
    fn from(polar: Polar) -> Self {
        Input::Polar(polar)
    }
}

impl From<Vec<f64>> for Input {
    fn from(vals: Vec<f64>) -> Self {
        Input::Sequence(vals)
    }
}

impl From<&str> for Input {
    fn from(text: &str) -> Self {
        Input::Text(text.to_string())
    }
}

impl From<String> for Input {
    fn from(text: String) -> Self {
        Input::Text(text)
    }
}

impl From<Value> for Input {
    fn from(value: Value) -> Self {
        Input::Object(value)
    }
}

impl TryFrom<Input> for Complex {
    type Error = ComplexError;

    fn try_from(input: Input) -> Result<Complex> {
        normalize(input).map_err(|err| {
            debug!(reason = %err, "rejecting complex input");
            err
        })
    }
}

impl TryFrom<&str> for Complex {
    type Error = ComplexError;

    fn try_from(text: &str) -> Result<Complex> {
        Complex::try_from(Input::from(text))
    }
}

impl TryFrom<&Value> for Complex {
    type Error = ComplexError;

    fn try_from(value: &Value) -> Result<Complex> {
        Complex::try_from(Input::Object(value.clone()))
    }
}

impl FromStr for Complex {
    type Err = ComplexError;

    fn from_str(s: &str) -> Result<Complex> {
        Complex::try_from(s)
    }
}

impl From<f64> for Complex {
    fn from(re: f64) -> Self {
        Complex::new(re, 0.0)
    }
}

impl From<(f64, f64)> for Complex {
    fn from((re, im): (f64, f64)) -> Self {
        Complex::new(re, im)
    }
}

impl From<[f64; 2]> for Complex {
    fn from([re, im]: [f64; 2]) -> Self {
        Complex::new(re, im)
    }
}

impl From<Polar> for Complex {
    fn from(polar: Polar) -> Self {
        polar_to_complex(polar.r, polar.phi)
    }
}

impl From<Complex64> for Complex {
    fn from(num: Complex64) -> Self {
        Complex::new(num.re, num.im)
    }
}

impl From<Complex> for Complex64 {
    fn from(value: Complex) -> Complex64 {
        Complex64::new(value.re, value.im)
    }
}

impl From<Complex> for [f64; 2] {
    fn from(value: Complex) -> [f64; 2] {
        value.to_vector()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::*;
    use serde_json::json;
    use std::f64::consts::{FRAC_PI_2, PI};

    fn parse(text: &str) -> Result<Complex> {
        Complex::from_str(text)
    }

    #[test]
    fn test_empty_and_scalar() {
        assert_eq!(normalize(Input::Empty).unwrap(), Complex::ZERO);
        assert_eq!(normalize(Input::Scalar(2.5)).unwrap(), Complex::new(2.5, 0.0));
        assert_eq!(normalize(Input::Cartesian(1.0, -2.0)).unwrap(), Complex::new(1.0, -2.0));
    }

    #[test]
    fn test_sequence() {
        assert_eq!(
            normalize(Input::Sequence(vec![3.0, 4.0])).unwrap(),
            Complex::new(3.0, 4.0)
        );
        assert_eq!(
            normalize(Input::Sequence(vec![1.0, 2.0, 3.0])),
            Err(ComplexError::UnsupportedShape("sequence of length 3".to_string()))
        );
        assert!(normalize(Input::Sequence(vec![])).is_err());
    }

    #[test]
    fn test_polar() {
        let z = Complex::from(Polar::new(2.0, FRAC_PI_2));
        assert!(approx_eq!(f64, z.re, 0.0, epsilon = 1e-15));
        assert!(approx_eq!(f64, z.im, 2.0, F64Margin::default()));

        let z = Complex::from(Polar::new(f64::INFINITY, PI / 4.0));
        assert_eq!(z, Complex::INFINITY);

        // a non-finite angle is not collapsed
        let z = Complex::from(Polar::new(f64::INFINITY, f64::NAN));
        assert!(z.is_nan());
    }

    #[test]
    fn test_parse_cartesian() {
        assert_eq!(parse("3+4i").unwrap(), Complex::new(3.0, 4.0));
        assert_eq!(parse("3 - 4i").unwrap(), Complex::new(3.0, -4.0));
        assert_eq!(parse("-3.5").unwrap(), Complex::new(-3.5, 0.0));
        assert_eq!(parse("  7  ").unwrap(), Complex::new(7.0, 0.0));
        assert_eq!(parse("1e3 + 2.5e-1i").unwrap(), Complex::new(1000.0, 0.25));
        assert_eq!(parse(".5i").unwrap(), Complex::new(0.0, 0.5));
        assert_eq!(parse("4.").unwrap(), Complex::new(4.0, 0.0));
    }

    #[test]
    fn test_parse_unit() {
        assert_eq!(parse("i").unwrap(), Complex::new(0.0, 1.0));
        assert_eq!(parse("-i").unwrap(), Complex::new(0.0, -1.0));
        assert_eq!(parse("1 - I").unwrap(), Complex::new(1.0, -1.0));
        assert_eq!(parse("i3").unwrap(), Complex::new(0.0, 3.0));
        assert_eq!(parse("2 - i4").unwrap(), Complex::new(2.0, -4.0));
    }

    #[test]
    fn test_parse_sign_runs() {
        assert_eq!(parse("--2").unwrap(), Complex::new(2.0, 0.0));
        assert_eq!(parse("+-+2i").unwrap(), Complex::new(0.0, -2.0));
        assert_eq!(parse("1 + 2 + 3i - i").unwrap(), Complex::new(3.0, 2.0));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(parse(""), Err(ComplexError::EmptyInput));
        assert_eq!(parse("   "), Err(ComplexError::EmptyInput));
        assert_eq!(parse("3+"), Err(ComplexError::TrailingSign));
        assert_eq!(parse("-"), Err(ComplexError::TrailingSign));
        assert_eq!(parse("3 4"), Err(ComplexError::InvalidToken("4".to_string())));
        assert_eq!(parse("2i i"), Err(ComplexError::InvalidToken("i".to_string())));
        assert_eq!(parse("3x"), Err(ComplexError::InvalidToken("x".to_string())));
        assert!(parse("Infinity").is_err());
        assert!(parse("1E5").is_err());
    }

    #[test]
    fn test_json_shapes() {
        let cases = [
            (json!({"re": 1.5, "im": -2}), Complex::new(1.5, -2.0)),
            (json!([3, 4]), Complex::new(3.0, 4.0)),
            (json!(6), Complex::new(6.0, 0.0)),
            (json!("2+i"), Complex::new(2.0, 1.0)),
            (json!(null), Complex::ZERO),
            (json!({"abs": 2.0, "arg": 0.0}), Complex::new(2.0, 0.0)),
            (json!({"r": 3.0, "phi": 0.0}), Complex::new(3.0, 0.0)),
        ];

        for (value, exemplar) in cases.iter() {
            assert_eq!(Complex::try_from(value).unwrap(), *exemplar, "input {}", value);
        }
    }

    #[test]
    fn test_json_errors() {
        assert!(matches!(
            Complex::try_from(&json!({"x": 1, "y": 2})),
            Err(ComplexError::UnsupportedShape(_))
        ));
        assert!(matches!(
            Complex::try_from(&json!({"re": "1", "im": 2})),
            Err(ComplexError::UnsupportedShape(_))
        ));
        assert!(matches!(
            Complex::try_from(&json!([1, 2, 3])),
            Err(ComplexError::UnsupportedShape(_))
        ));
        assert!(matches!(
            Complex::try_from(&json!(true)),
            Err(ComplexError::UnsupportedShape(_))
        ));
        assert_eq!(
            Complex::try_from(&json!("1 +")),
            Err(ComplexError::TrailingSign)
        );
    }

    #[test]
    fn test_num_complex_roundtrip() {
        let c = Complex64::new(1.0, -3.0);
        let z = Complex::from(c);
        assert_eq!(z, Complex::new(1.0, -3.0));
        assert_eq!(Complex64::from(z), c);
        let v: [f64; 2] = z.into();
        assert_eq!(v, [1.0, -3.0]);
    }
}
