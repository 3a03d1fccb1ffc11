//! Typed value encoding.
//!
//! Composite values are written as `{"type": <tag>, "value": <payload>}`.
//! Vector components and `Float32_Array` elements are narrowed to `f32`
//! and written in the shortest form that reads back as the same `f32`.

use serde_json::{json, Number, Value};

use crate::util::{
    Color, ColorArray, Float32Array, Int32Array, Int64Array, Vector2I8, Vector3, Vector3Array,
};

/// Conversion into the document's typed JSON.
pub trait Encode {
    /// Type tag written next to the payload.
    const TYPE: &'static str;

    /// Bare payload, as it appears inside arrays.
    fn payload(&self) -> Value;

    fn encode(&self) -> Value {
        json!({ "type": Self::TYPE, "value": self.payload() })
    }
}

/// A float narrowed to 32-bit precision. Values with no finite `f32` form
/// become `null`, which the document builder refuses to write.
pub fn float32(v: f64) -> Value {
    narrow(v as f32)
}

fn narrow(single: f32) -> Value {
    single
        .to_string()
        .parse::<f64>()
        .ok()
        .and_then(Number::from_f64)
        .map_or(Value::Null, Value::Number)
}

impl Encode for Color {
    const TYPE: &'static str = "Color8";

    fn payload(&self) -> Value {
        json!({ "r": self.r, "g": self.g, "b": self.b })
    }
}

impl Encode for Vector3 {
    const TYPE: &'static str = "Vector3F32";

    fn payload(&self) -> Value {
        json!({ "x": float32(self.x), "y": float32(self.y), "z": float32(self.z) })
    }
}

impl Encode for Vector2I8 {
    const TYPE: &'static str = "Vector2I8";

    fn payload(&self) -> Value {
        json!({ "x": self.x, "y": self.y })
    }
}

impl Encode for Int32Array {
    const TYPE: &'static str = "Int32_Array";

    fn payload(&self) -> Value {
        Value::from(self.as_slice().to_vec())
    }
}

impl Encode for Int64Array {
    const TYPE: &'static str = "Int64_Array";

    fn payload(&self) -> Value {
        Value::from(self.as_slice().to_vec())
    }
}

impl Encode for Float32Array {
    const TYPE: &'static str = "Float32_Array";

    fn payload(&self) -> Value {
        Value::Array(self.0.iter().map(|&f| narrow(f)).collect())
    }
}

impl Encode for Vector3Array {
    const TYPE: &'static str = "Vector3F32_Array";

    fn payload(&self) -> Value {
        Value::Array(self.0.iter().map(Encode::payload).collect())
    }
}

impl Encode for ColorArray {
    const TYPE: &'static str = "Color8_Array";

    fn payload(&self) -> Value {
        Value::Array(self.0.iter().map(Encode::payload).collect())
    }
}
