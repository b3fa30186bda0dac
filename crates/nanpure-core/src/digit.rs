//! Number-place digit representation.

use std::{fmt, str::FromStr};

use derive_more::{Display, Error};

/// A digit in the range 1-9.
///
/// This enum provides a type-safe representation of puzzle digits; an
/// out-of-range value is not representable.
///
/// # Examples
///
/// ```
/// use nanpure_core::Digit;
///
/// let digit = Digit::D5;
/// assert_eq!(digit.value(), 5);
///
/// // Fallible construction from a u8 value
/// assert_eq!(Digit::try_from_value(7), Some(Digit::D7));
/// assert_eq!(Digit::try_from_value(0), None);
///
/// // Iterate over all digits
/// for digit in Digit::ALL {
///     assert!((1..=9).contains(&digit.value()));
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Digit {
    /// The digit 1.
    D1 = 1,
    /// The digit 2.
    D2 = 2,
    /// The digit 3.
    D3 = 3,
    /// The digit 4.
    D4 = 4,
    /// The digit 5.
    D5 = 5,
    /// The digit 6.
    D6 = 6,
    /// The digit 7.
    D7 = 7,
    /// The digit 8.
    D8 = 8,
    /// The digit 9.
    D9 = 9,
}

impl Digit {
    /// Array containing all digits from 1 to 9, in ascending order.
    pub const ALL: [Self; 9] = [
        Self::D1,
        Self::D2,
        Self::D3,
        Self::D4,
        Self::D5,
        Self::D6,
        Self::D7,
        Self::D8,
        Self::D9,
    ];

    /// Creates a digit from a u8 value in the range 1-9.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not in the range 1-9.
    ///
    /// # Examples
    ///
    /// ```
    /// use nanpure_core::Digit;
    ///
    /// assert_eq!(Digit::from_value(5), Digit::D5);
    /// ```
    #[must_use]
    pub fn from_value(value: u8) -> Self {
        Self::try_from_value(value)
            .unwrap_or_else(|| panic!("digit value must be between 1 and 9, got {value}"))
    }

    /// Creates a digit from a u8 value, returning `None` if the value is
    /// outside the range 1-9.
    #[must_use]
    pub const fn try_from_value(value: u8) -> Option<Self> {
        match value {
            1 => Some(Self::D1),
            2 => Some(Self::D2),
            3 => Some(Self::D3),
            4 => Some(Self::D4),
            5 => Some(Self::D5),
            6 => Some(Self::D6),
            7 => Some(Self::D7),
            8 => Some(Self::D8),
            9 => Some(Self::D9),
            _ => None,
        }
    }

    /// Returns the numeric value of this digit (1-9).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value(), f)
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> u8 {
        digit.value()
    }
}

/// Error returned when parsing text that is not a digit between 1 and 9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("expected a digit between 1 and 9")]
pub struct ParseDigitError;

impl FromStr for Digit {
    type Err = ParseDigitError;

    /// Parses an optionally whitespace-padded decimal integer in the range
    /// 1-9.
    ///
    /// # Examples
    ///
    /// ```
    /// use nanpure_core::Digit;
    ///
    /// assert_eq!(" 5 ".parse(), Ok(Digit::D5));
    /// assert!("0".parse::<Digit>().is_err());
    /// assert!("10".parse::<Digit>().is_err());
    /// assert!("abc".parse::<Digit>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim().parse::<u8>().map_err(|_| ParseDigitError)?;
        Self::try_from_value(value).ok_or(ParseDigitError)
    }
}
