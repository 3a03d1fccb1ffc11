//! Fixed integer widths used by the document format.
//!
//! Every integer that reaches a width-bound field passes through
//! [`IntWidth::check`]. Values are rejected, never truncated or wrapped.

use super::{Error, Result};

/// Integer widths the format declares.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IntWidth {
    Int8,
    Uint8,
    Int32,
    Int64,
}

impl IntWidth {
    /// Smallest representable value.
    pub const fn min(self) -> i128 {
        match self {
            Self::Int8 => i8::MIN as i128,
            Self::Uint8 => 0,
            Self::Int32 => i32::MIN as i128,
            Self::Int64 => i64::MIN as i128,
        }
    }

    /// Largest representable value.
    pub const fn max(self) -> i128 {
        match self {
            Self::Int8 => i8::MAX as i128,
            Self::Uint8 => u8::MAX as i128,
            Self::Int32 => i32::MAX as i128,
            Self::Int64 => i64::MAX as i128,
        }
    }

    /// Width in bits.
    pub const fn bits(self) -> u32 {
        match self {
            Self::Int8 | Self::Uint8 => 8,
            Self::Int32 => 32,
            Self::Int64 => 64,
        }
    }

    #[inline]
    pub fn contains(self, value: i128) -> bool {
        (self.min()..=self.max()).contains(&value)
    }

    /// Validate `value` for `field`.
    pub fn check(self, field: &str, value: impl Into<i128>) -> Result<i64> {
        let value = value.into();
        let (min, max) = (self.min(), self.max());
        if value > max {
            return Err(Error::Overflow {
                field: field.to_string(),
                value,
                min,
                max,
            });
        }
        if value < min {
            return Err(Error::Underflow {
                field: field.to_string(),
                value,
                min,
                max,
            });
        }
        // In range for every width, so also in range for i64.
        Ok(value as i64)
    }
}

/// Check a value against the signed 32-bit range.
#[inline]
pub fn check_i32(field: &str, value: impl Into<i128>) -> Result<i32> {
    IntWidth::Int32.check(field, value).map(|v| v as i32)
}

/// Check a value against the unsigned 8-bit range.
#[inline]
pub fn check_u8(field: &str, value: impl Into<i128>) -> Result<u8> {
    IntWidth::Uint8.check(field, value).map(|v| v as u8)
}

/// Check a value against the signed 8-bit range.
#[inline]
pub fn check_i8(field: &str, value: impl Into<i128>) -> Result<i8> {
    IntWidth::Int8.check(field, value).map(|v| v as i8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int32_bounds() {
        assert_eq!(check_i32("x", 2_147_483_647i64).unwrap(), i32::MAX);
        assert_eq!(check_i32("x", -2_147_483_648i64).unwrap(), i32::MIN);

        let err = check_i32("music", 2_147_483_648i64).unwrap_err();
        assert!(matches!(err, Error::Overflow { ref field, value, .. } if field == "music" && value == 2_147_483_648));

        let err = check_i32("music", -2_147_483_649i64).unwrap_err();
        assert!(matches!(err, Error::Underflow { .. }));
    }

    #[test]
    fn test_uint8_bounds() {
        assert_eq!(check_u8("opacity", 255).unwrap(), 255);
        assert!(matches!(check_u8("opacity", 256).unwrap_err(), Error::Overflow { .. }));
        assert!(matches!(check_u8("opacity", -1).unwrap_err(), Error::Underflow { .. }));
    }

    #[test]
    fn test_int64_rejects_u64_tail() {
        assert!(IntWidth::Int64.check("uid", i64::MAX).is_ok());
        assert!(IntWidth::Int64.check("uid", u64::MAX).unwrap_err().is_range());
    }

    #[test]
    fn test_int8() {
        assert_eq!(check_i8("scroll", -128).unwrap(), -128);
        assert!(check_i8("scroll", 128).is_err());
        assert_eq!(IntWidth::Int8.bits(), 8);
    }
}
