//! Name-addressed attribute access.
//!
//! Every block exposes its fields through [`Attributes`]. Keyword-style
//! configuration and copy overrides both go through
//! [`Attributes::set_attribute`], so a value accepted in one place is
//! accepted in the other and range checks run exactly once per assignment.

use crate::core::{BlockPattern, DecalType, GratesStyle, Shape, Sound};
use crate::util::{
    check_i32, check_u8, Color, ColorArray, Error, Float32Array, Int32Array, Int64Array, Result,
    Vector2I8, Vector3, Vector3Array,
};

/// Dynamically typed attribute value.
#[derive(Clone, Debug, PartialEq)]
pub enum AttrValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Vector3(Vector3),
    Vector2I8(Vector2I8),
    Color(Color),
    Int32Array(Int32Array),
    Int64Array(Int64Array),
    ColorArray(ColorArray),
    Vector3Array(Vector3Array),
    Float32Array(Float32Array),
}

impl AttrValue {
    /// Short name of the value's shape, used in mismatch errors.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Str(_) => "string",
            Self::Vector3(_) => "Vector3",
            Self::Vector2I8(_) => "Vector2I8",
            Self::Color(_) => "Color",
            Self::Int32Array(_) => "Int32Array",
            Self::Int64Array(_) => "Int64Array",
            Self::ColorArray(_) => "ColorArray",
            Self::Vector3Array(_) => "Vector3Array",
            Self::Float32Array(_) => "Float32Array",
        }
    }
}

macro_rules! attr_from {
    ($($src:ty => $variant:ident $(as $cast:ty)?),* $(,)?) => {
        $(
            impl From<$src> for AttrValue {
                fn from(v: $src) -> Self {
                    Self::$variant(v $(as $cast)?)
                }
            }
        )*
    };
}

attr_from! {
    bool => Bool,
    i8 => Int as i64,
    u8 => Int as i64,
    i32 => Int as i64,
    u32 => Int as i64,
    i64 => Int,
    f32 => Float as f64,
    f64 => Float,
    String => Str,
    Vector3 => Vector3,
    Vector2I8 => Vector2I8,
    Color => Color,
    Int32Array => Int32Array,
    Int64Array => Int64Array,
    ColorArray => ColorArray,
}

impl From<&str> for AttrValue {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

macro_rules! attr_from_code {
    ($($enum:ty),* $(,)?) => {
        $(
            impl From<$enum> for AttrValue {
                fn from(v: $enum) -> Self {
                    Self::Int(v.code() as i64)
                }
            }
        )*
    };
}

attr_from_code!(BlockPattern, Shape, Sound, DecalType, GratesStyle);

fn mismatch(name: &str, expected: &'static str, value: &AttrValue) -> Error {
    Error::TypeMismatch {
        attribute: name.to_string(),
        expected,
        actual: value.type_name(),
    }
}

/// Conversion between a field type and [`AttrValue`].
pub(crate) trait AttrField: Sized {
    fn from_attr(name: &str, value: AttrValue) -> Result<Self>;
    fn to_attr(&self) -> AttrValue;
}

macro_rules! attr_field_plain {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl AttrField for $ty {
                fn from_attr(name: &str, value: AttrValue) -> Result<Self> {
                    match value {
                        AttrValue::$variant(v) => Ok(v),
                        other => Err(mismatch(name, stringify!($variant), &other)),
                    }
                }

                fn to_attr(&self) -> AttrValue {
                    AttrValue::$variant(self.clone())
                }
            }
        )*
    };
}

attr_field_plain! {
    bool => Bool,
    String => Str,
    Vector3 => Vector3,
    Vector2I8 => Vector2I8,
    Color => Color,
    Int32Array => Int32Array,
    Int64Array => Int64Array,
    ColorArray => ColorArray,
}

impl AttrField for f64 {
    fn from_attr(name: &str, value: AttrValue) -> Result<Self> {
        match value {
            AttrValue::Float(v) => Ok(v),
            AttrValue::Int(v) => Ok(v as f64),
            other => Err(mismatch(name, "float", &other)),
        }
    }

    fn to_attr(&self) -> AttrValue {
        AttrValue::Float(*self)
    }
}

impl AttrField for i32 {
    fn from_attr(name: &str, value: AttrValue) -> Result<Self> {
        match value {
            AttrValue::Int(v) => check_i32(name, v),
            other => Err(mismatch(name, "int", &other)),
        }
    }

    fn to_attr(&self) -> AttrValue {
        AttrValue::Int(*self as i64)
    }
}

impl AttrField for u8 {
    fn from_attr(name: &str, value: AttrValue) -> Result<Self> {
        match value {
            AttrValue::Int(v) => check_u8(name, v),
            other => Err(mismatch(name, "int", &other)),
        }
    }

    fn to_attr(&self) -> AttrValue {
        AttrValue::Int(*self as i64)
    }
}

/// Field-level checks beyond the width of the type.
pub(crate) fn non_negative(name: &str, v: &f64) -> Result<()> {
    if *v < 0.0 || v.is_nan() {
        return Err(Error::invalid(name, format!("must be >= 0 (got {})", v)));
    }
    Ok(())
}

pub(crate) fn non_zero(name: &str, v: &f64) -> Result<()> {
    if *v == 0.0 || !v.is_finite() {
        return Err(Error::invalid(name, format!("must be finite and non-zero (got {})", v)));
    }
    Ok(())
}

pub(crate) fn positive_id(name: &str, v: &i32) -> Result<()> {
    if *v < 1 {
        return Err(Error::invalid(name, format!("must be >= 1 (got {})", v)));
    }
    Ok(())
}

/// Name-addressed access to a block's fields.
pub trait Attributes {
    /// Kind name used in error messages.
    fn kind_name(&self) -> &'static str;

    /// Validate and assign one attribute.
    fn set_attribute(&mut self, name: &str, value: AttrValue) -> Result<()>;

    /// Read one attribute.
    fn attribute(&self, name: &str) -> Result<AttrValue>;

    /// Canonical names of every readable attribute.
    fn attribute_names(&self) -> Vec<&'static str>;

    /// Re-run the field checks on the current values. Fields assigned
    /// directly skip [`set_attribute`](Attributes::set_attribute), so the
    /// level runs this before accepting or writing a block.
    fn validate(&self) -> Result<()>;

    /// Apply keyword-style options in order, stopping at the first error.
    fn configure<I, K>(&mut self, options: I) -> Result<()>
    where
        Self: Sized,
        I: IntoIterator<Item = (K, AttrValue)>,
        K: AsRef<str>,
    {
        for (name, value) in options {
            self.set_attribute(name.as_ref(), value)?;
        }
        Ok(())
    }
}

/// Implements [`Attributes`] for a block kind.
///
/// Each entry maps one or more names (the first is canonical) to a field
/// path and its type, with an optional extra check. Names not listed fall
/// through to the pattern (for tilable kinds) and then to the base.
macro_rules! block_attributes {
    (@common $ty:ident, $kind:literal, [$($fallback:ident),*],
        { $( $($key:literal)|+ => $($field:ident).+ : $fty:ty $(where $check:path)? ),* $(,)? }
    ) => {
        impl $crate::block::Attributes for $ty {
            fn kind_name(&self) -> &'static str {
                $kind
            }

            #[allow(unused_variables)]
            fn set_attribute(
                &mut self,
                name: &str,
                value: $crate::block::AttrValue,
            ) -> $crate::util::Result<()> {
                match name {
                    $(
                        $($key)|+ => {
                            let v = <$fty as $crate::block::attr::AttrField>::from_attr(name, value)?;
                            $( $check(name, &v)?; )?
                            self.$($field).+ = v;
                            Ok(())
                        }
                    )*
                    _ => {
                        let rest = Some(value);
                        $( let rest = match rest {
                            Some(value) => self.$fallback.try_set(name, value)?,
                            None => None,
                        }; )*
                        match rest {
                            None => Ok(()),
                            Some(_) => Err($crate::util::Error::UnknownAttribute {
                                kind: $kind,
                                attribute: name.to_string(),
                            }),
                        }
                    }
                }
            }

            fn attribute(&self, name: &str) -> $crate::util::Result<$crate::block::AttrValue> {
                match name {
                    $(
                        $($key)|+ => Ok($crate::block::attr::AttrField::to_attr(&self.$($field).+)),
                    )*
                    _ => {
                        $(
                            if let Some(v) = self.$fallback.get(name) {
                                return Ok(v);
                            }
                        )*
                        Err($crate::util::Error::UnknownAttribute {
                            kind: $kind,
                            attribute: name.to_string(),
                        })
                    }
                }
            }

            fn attribute_names(&self) -> Vec<&'static str> {
                let mut names: Vec<&'static str> = Vec::new();
                $( names.extend_from_slice(self.$fallback.names()); )*
                $( names.push(block_attributes!(@first $($key)|+)); )*
                names
            }

            fn validate(&self) -> $crate::util::Result<()> {
                $( block_attributes!(@check self, [$($key)|+], $($field).+ $(, $check)?); )*
                Ok(())
            }
        }
    };
    (@first $first:literal $(| $rest:literal)*) => { $first };
    (@check $this:ident, [$first:literal $(| $rest:literal)*], $($field:ident).+) => {};
    (@check $this:ident, [$first:literal $(| $rest:literal)*], $($field:ident).+, $check:path) => {
        $check($first, &$this.$($field).+)?;
    };
    ($ty:ident : $kind:literal tilable { $($body:tt)* }) => {
        block_attributes!(@common $ty, $kind, [pattern, base], { $($body)* });
    };
    ($ty:ident : $kind:literal { $($body:tt)* }) => {
        block_attributes!(@common $ty, $kind, [base], { $($body)* });
    };
}

pub(crate) use block_attributes;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float_accepts_int() {
        assert_eq!(f64::from_attr("gravity", AttrValue::Int(105)).unwrap(), 105.0);
        assert!(matches!(
            f64::from_attr("gravity", AttrValue::Bool(true)),
            Err(Error::TypeMismatch { expected: "float", actual: "bool", .. })
        ));
    }

    #[test]
    fn test_int_fields_check_width() {
        assert_eq!(i32::from_attr("shape", Shape::Cylinder.into()).unwrap(), 2);
        assert!(i32::from_attr("shape", AttrValue::Int(1 << 40)).unwrap_err().is_range());
        assert!(u8::from_attr("opacity", AttrValue::Int(300)).unwrap_err().is_range());
        assert!(matches!(
            i32::from_attr("shape", AttrValue::Float(2.0)),
            Err(Error::TypeMismatch { .. })
        ));
    }

    #[test]
    fn test_checks() {
        assert!(non_negative("damage", &0.0).is_ok());
        assert!(non_negative("damage", &-0.5).is_err());
        assert!(non_zero("pattern_scale", &0.0).is_err());
        assert!(positive_id("level_id", &0).is_err());
    }
}
