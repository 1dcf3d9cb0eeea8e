//! Finite-state scanners for the four JSON scalar literals.
//!
//! Each scanner is a small state enum with a single transition function. The
//! shared driver [`run`] feeds it one byte at a time and stops at the first
//! accepting or rejecting transition. Running out of input before acceptance
//! is always a rejection.

use crate::classify::{
    is_dec_digit, is_escapable, is_hex_digit, is_leading_digit, is_number_delimiter,
};
use crate::error::{ErrorKind, ScanError};

/// A recognized literal and how many bytes of input it used.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scan<T> {
    pub value: T,
    pub consumed: usize,
}

/// A number literal, classified by its shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Integer(i64),
    Double(f64),
}

/// The outcome of feeding one byte to a state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step<S> {
    Next(S),
    /// Accept, consuming the current byte.
    Accept,
    /// Accept without consuming the current byte (it only confirmed the end).
    AcceptBefore,
    Reject,
}

trait Machine: Copy {
    const KIND: ErrorKind;
    const START: Self;

    fn step(self, b: u8) -> Step<Self>;
}

/// The state a machine was in when it accepted, and the length it consumed.
struct Accepted<S> {
    state: S,
    end: usize,
}

fn run<M: Machine>(input: &[u8]) -> Result<Accepted<M>, ScanError> {
    let mut state = M::START;
    for (i, &b) in input.iter().enumerate() {
        match state.step(b) {
            Step::Next(next) => state = next,
            Step::Accept => return Ok(Accepted { state, end: i + 1 }),
            Step::AcceptBefore => return Ok(Accepted { state, end: i }),
            Step::Reject => return Err(ScanError::new(M::KIND, i)),
        }
    }
    Err(ScanError::new(M::KIND, input.len()))
}

// === String ===

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StringState {
    ExpectQuote,
    InString,
    ExpectEscapeChar,
    /// Waiting for the first of the four hex digits after `\u`.
    Hex1,
    Hex2,
    Hex3,
    Hex4,
}

impl Machine for StringState {
    const KIND: ErrorKind = ErrorKind::MalformedString;
    const START: Self = StringState::ExpectQuote;

    fn step(self, b: u8) -> Step<Self> {
        use StringState::*;
        match self {
            ExpectQuote if b == b'"' => Step::Next(InString),
            ExpectQuote => Step::Reject,
            InString => match b {
                b'\\' => Step::Next(ExpectEscapeChar),
                b'"' => Step::Accept,
                0x00..=0x1f => Step::Reject,
                _ => Step::Next(InString),
            },
            ExpectEscapeChar if b == b'u' => Step::Next(Hex1),
            ExpectEscapeChar if is_escapable(b) => Step::Next(InString),
            ExpectEscapeChar => Step::Reject,
            Hex1 if is_hex_digit(b) => Step::Next(Hex2),
            Hex2 if is_hex_digit(b) => Step::Next(Hex3),
            Hex3 if is_hex_digit(b) => Step::Next(Hex4),
            Hex4 if is_hex_digit(b) => Step::Next(InString),
            Hex1 | Hex2 | Hex3 | Hex4 => Step::Reject,
        }
    }
}

/// Scans a quoted string at the start of `input`.
///
/// The returned text is the raw content between the quotes. Escape sequences
/// are validated but kept verbatim, so `"\n"` yields the two characters `\` `n`.
///
/// # Errors
/// Returns a [`ErrorKind::MalformedString`] error for a missing opening quote,
/// an unterminated string, an unknown escape, a short `\u` escape or a raw
/// control character.
pub fn scan_string(input: &str) -> Result<Scan<&str>, ScanError> {
    let accepted = run::<StringState>(input.as_bytes())?;
    // Both quotes are ASCII, so these are character boundaries.
    Ok(Scan {
        value: &input[1..accepted.end - 1],
        consumed: accepted.end,
    })
}

// === Number ===

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NumberState {
    Start,
    Minus,
    Zero,
    IntDigits,
    FractionStart,
    FractionDigits,
    ExponentStart,
    ExponentSign,
    ExponentDigits,
}

impl NumberState {
    fn is_fractional(self) -> bool {
        matches!(
            self,
            NumberState::FractionDigits | NumberState::ExponentDigits
        )
    }
}

impl Machine for NumberState {
    const KIND: ErrorKind = ErrorKind::MalformedNumber;
    const START: Self = NumberState::Start;

    fn step(self, b: u8) -> Step<Self> {
        use NumberState::*;
        match self {
            Start if b == b'-' => Step::Next(Minus),
            Start | Minus if b == b'0' => Step::Next(Zero),
            Start | Minus if is_leading_digit(b) => Step::Next(IntDigits),
            Start | Minus => Step::Reject,

            IntDigits if is_dec_digit(b) => Step::Next(IntDigits),
            Zero | IntDigits if b == b'.' => Step::Next(FractionStart),
            Zero | IntDigits | FractionDigits if matches!(b, b'e' | b'E') => {
                Step::Next(ExponentStart)
            }
            Zero | IntDigits | FractionDigits | ExponentDigits if is_number_delimiter(b) => {
                Step::AcceptBefore
            }

            FractionStart | FractionDigits if is_dec_digit(b) => Step::Next(FractionDigits),

            ExponentStart if matches!(b, b'+' | b'-') => Step::Next(ExponentSign),
            ExponentStart | ExponentSign | ExponentDigits if is_dec_digit(b) => {
                Step::Next(ExponentDigits)
            }

            _ => Step::Reject,
        }
    }
}

/// Scans a number literal at the start of `input`.
///
/// The literal must be followed by a number delimiter (whitespace, `,`, `]` or
/// `}`), which is inspected but not consumed. The result is an integer unless a
/// fraction or exponent is present.
///
/// # Errors
/// Returns a [`ErrorKind::MalformedNumber`] error when the literal breaks the
/// JSON number grammar (including leading zeros such as `01`), is not followed
/// by a delimiter, or is an integer outside the `i64` range.
pub fn scan_number(input: &str) -> Result<Scan<Number>, ScanError> {
    let accepted = run::<NumberState>(input.as_bytes())?;
    let text = &input[..accepted.end];
    let value = if accepted.state.is_fractional() {
        text.parse::<f64>()
            .map(Number::Double)
            .map_err(|_| ScanError::new(ErrorKind::MalformedNumber, 0))?
    } else {
        // Only overflow can fail here; point at the end of the digits.
        text.parse::<i64>()
            .map(Number::Integer)
            .map_err(|_| ScanError::new(ErrorKind::MalformedNumber, accepted.end))?
    };
    Ok(Scan {
        value,
        consumed: accepted.end,
    })
}

// === Boolean ===

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BoolState {
    Start,
    T,
    Tr,
    Tru,
    F,
    Fa,
    Fal,
    Fals,
}

impl Machine for BoolState {
    const KIND: ErrorKind = ErrorKind::MalformedBool;
    const START: Self = BoolState::Start;

    fn step(self, b: u8) -> Step<Self> {
        use BoolState::*;
        match (self, b) {
            (Start, b't') => Step::Next(T),
            (T, b'r') => Step::Next(Tr),
            (Tr, b'u') => Step::Next(Tru),
            (Tru, b'e') => Step::Accept,
            (Start, b'f') => Step::Next(F),
            (F, b'a') => Step::Next(Fa),
            (Fa, b'l') => Step::Next(Fal),
            (Fal, b's') => Step::Next(Fals),
            (Fals, b'e') => Step::Accept,
            _ => Step::Reject,
        }
    }
}

/// Scans `true` or `false` at the start of `input`.
///
/// # Errors
/// Returns a [`ErrorKind::MalformedBool`] error on any deviation from either
/// spelling.
pub fn scan_bool(input: &str) -> Result<Scan<bool>, ScanError> {
    let accepted = run::<BoolState>(input.as_bytes())?;
    Ok(Scan {
        value: accepted.state == BoolState::Tru,
        consumed: accepted.end,
    })
}

// === Null ===

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NullState {
    Start,
    N,
    Nu,
    Nul,
}

impl Machine for NullState {
    const KIND: ErrorKind = ErrorKind::MalformedNull;
    const START: Self = NullState::Start;

    fn step(self, b: u8) -> Step<Self> {
        use NullState::*;
        match (self, b) {
            (Start, b'n') => Step::Next(N),
            (N, b'u') => Step::Next(Nu),
            (Nu, b'l') => Step::Next(Nul),
            (Nul, b'l') => Step::Accept,
            _ => Step::Reject,
        }
    }
}

/// Scans `null` at the start of `input`.
///
/// # Errors
/// Returns a [`ErrorKind::MalformedNull`] error on any deviation.
pub fn scan_null(input: &str) -> Result<Scan<()>, ScanError> {
    let accepted = run::<NullState>(input.as_bytes())?;
    Ok(Scan {
        value: (),
        consumed: accepted.end,
    })
}
