//! Typed arrays written as `*_Array` values.
//!
//! Integer arrays check every element against their width on insertion,
//! so a stored array can always be written without further checks.

use super::{Color, Error, IntWidth, Result, Vector3};

/// Ordered integer sequence bounded to `BITS` (32 or 64) signed bits.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct IntArray<const BITS: u32> {
    values: Vec<i64>,
}

/// Signed 32-bit array (`Int32_Array`).
pub type Int32Array = IntArray<32>;
/// Signed 64-bit array (`Int64_Array`).
pub type Int64Array = IntArray<64>;

impl<const BITS: u32> IntArray<BITS> {
    const WIDTH: IntWidth = if BITS == 32 { IntWidth::Int32 } else { IntWidth::Int64 };

    pub fn new() -> Self {
        Self { values: Vec::new() }
    }

    /// Width of every element.
    pub fn width(&self) -> IntWidth {
        Self::WIDTH
    }

    /// Bulk construction. Fails on the first out-of-range element and keeps
    /// nothing.
    pub fn from_values<I, V>(values: I) -> Result<Self>
    where
        I: IntoIterator<Item = V>,
        V: Into<i128>,
    {
        let values = values
            .into_iter()
            .enumerate()
            .map(|(i, v)| Self::WIDTH.check(&format!("[{}]", i), v))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { values })
    }

    /// Append one element.
    pub fn push(&mut self, value: impl Into<i128>) -> Result<()> {
        let field = format!("[{}]", self.values.len());
        self.values.push(Self::WIDTH.check(&field, value)?);
        Ok(())
    }

    pub fn get(&self, index: usize) -> Option<i64> {
        self.values.get(index).copied()
    }

    /// Replace the element at `index`.
    pub fn set(&mut self, index: usize, value: impl Into<i128>) -> Result<()> {
        let len = self.values.len();
        let checked = Self::WIDTH.check(&format!("[{}]", index), value)?;
        let slot = self
            .values
            .get_mut(index)
            .ok_or(Error::IndexOutOfBounds { index, len })?;
        *slot = checked;
        Ok(())
    }

    /// Remove and return the element at `index`.
    pub fn remove(&mut self, index: usize) -> Result<i64> {
        if index >= self.values.len() {
            return Err(Error::IndexOutOfBounds { index, len: self.values.len() });
        }
        Ok(self.values.remove(index))
    }

    pub fn contains(&self, value: i64) -> bool {
        self.values.contains(&value)
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = i64> + '_ {
        self.values.iter().copied()
    }

    pub fn as_slice(&self) -> &[i64] {
        &self.values
    }
}

impl<'a, const BITS: u32> IntoIterator for &'a IntArray<BITS> {
    type Item = &'a i64;
    type IntoIter = std::slice::Iter<'a, i64>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

/// Ordered `f32` sequence (`Float32_Array`).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Float32Array(pub Vec<f32>);

/// Ordered vector sequence (`Vector3F32_Array`).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Vector3Array(pub Vec<Vector3>);

/// Ordered color sequence (`Color8_Array`).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ColorArray(pub Vec<Color>);

impl From<Vec<Color>> for ColorArray {
    fn from(v: Vec<Color>) -> Self {
        Self(v)
    }
}

impl From<Vec<Vector3>> for Vector3Array {
    fn from(v: Vec<Vector3>) -> Self {
        Self(v)
    }
}

impl From<Vec<f32>> for Float32Array {
    fn from(v: Vec<f32>) -> Self {
        Self(v)
    }
}
