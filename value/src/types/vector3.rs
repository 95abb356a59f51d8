//! Vector3 bindings: polymorphic construction and the multiplication
//! dispatch for a Vector3 left-hand operand.

use std::collections::HashMap;

use math::types::{Vector3, Vector4};

use super::Value;
use crate::error::{ValueError, ValueResult};

#[cfg(test)]
mod test_vector3_ctor {
    use super::{from_value, new, Value, ValueError};
    use math::types::Vector3;

    #[test]
    fn from_list() {
        let arg = Value::from(vec![1.0, 2.0, 3.0]);
        let v = from_value(&arg).unwrap().as_vector3().unwrap();
        assert!(v.approx_equal(Vector3::new(1.0, 2.0, 3.0)));
    }

    #[test]
    fn from_short_list() {
        let arg = Value::from(vec![1.0, 2.0]);
        assert!(matches!(
            from_value(&arg),
            Err(ValueError::Construction { .. })
        ));
    }

    #[test]
    fn from_list_with_non_number() {
        let arg = Value::List(vec![Value::from(1.0), Value::from(2.0), new(0.0, 0.0, 0.0)]);
        assert!(matches!(
            from_value(&arg),
            Err(ValueError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn from_map() {
        let entries = [("x", 1.0), ("y", 2.0), ("z", 3.0)]
            .into_iter()
            .map(|(key, value)| (key.to_string(), Value::from(value)))
            .collect();
        let v = from_value(&Value::Map(entries)).unwrap().as_vector3().unwrap();
        assert!(v.approx_equal(Vector3::new(1.0, 2.0, 3.0)));
    }

    #[test]
    fn from_map_missing_key() {
        let entries = [("x", 1.0), ("y", 2.0)]
            .into_iter()
            .map(|(key, value)| (key.to_string(), Value::from(value)))
            .collect();
        assert!(matches!(
            from_value(&Value::Map(entries)),
            Err(ValueError::Construction { .. })
        ));
    }

    #[test]
    fn from_other() {
        let original = new(1.0, 2.0, 3.0);
        let copied = from_value(&original).unwrap();
        assert_eq!(original, copied);
    }

    #[test]
    fn from_number_rejected() {
        assert!(matches!(
            from_value(&Value::from(1.0)),
            Err(ValueError::TypeMismatch { .. })
        ));
    }
}

#[cfg(test)]
mod test_vector3_mul {
    use super::{fill, new, Value, ValueError};
    use math::types::{Matrix4, Vector3};

    #[test]
    fn scalar_scale() {
        let v = new(1.0, -2.0, 0.5);
        let scaled = (&v * &Value::from(2.0)).unwrap().as_vector3().unwrap();
        assert!(scaled.approx_equal(Vector3::new(2.0, -4.0, 1.0)));
    }

    #[test]
    fn matrix_transform_drops_w() {
        let v = new(2.0, 3.0, 1.0);
        let m = Value::from(Matrix4::translation(Vector3::new(1.0, 2.0, 3.0)));
        let moved = (&v * &m).unwrap().as_vector3().unwrap();
        assert!(moved.approx_equal(Vector3::new(3.0, 5.0, 4.0)));
    }

    #[test]
    fn unsupported_operand() {
        let v = new(1.0, 0.0, 0.0);
        let arg = Value::from(vec![1.0, 2.0, 3.0]);
        assert!(matches!(
            &v * &arg,
            Err(ValueError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn fill_factory() {
        let v = fill(2.5).as_vector3().unwrap();
        assert!(v.approx_equal(Vector3::fill(2.5)));
    }
}

pub fn new(x: f32, y: f32, z: f32) -> Value {
    Value::Vector3(Vector3::new(x, y, z))
}

pub fn identity() -> Value {
    Value::Vector3(Vector3::default())
}

pub fn fill(value: f32) -> Value {
    Value::Vector3(Vector3::fill(value))
}

/// Polymorphic constructor: sequence, keyed mapping or same-type copy, in
/// that order.
pub fn from_value(arg: &Value) -> ValueResult<Value> {
    match arg {
        Value::List(items) => from_list(items),
        Value::Map(entries) => from_map(entries),
        Value::Vector3(v) => Ok(Value::Vector3(*v)),
        other => Err(ValueError::TypeMismatch {
            expected: "list, map or Vector3",
            found: other.type_name(),
        }),
    }
}

fn from_list(items: &[Value]) -> ValueResult<Value> {
    if items.len() < 3 {
        return Err(ValueError::Construction {
            type_name: "Vector3",
            message: "a list of at least 3 numbers is required",
        });
    }
    let mut data = [0.0f32; 3];
    for (slot, item) in data.iter_mut().zip(items) {
        *slot = item.as_number().ok_or(ValueError::TypeMismatch {
            expected: "number",
            found: item.type_name(),
        })? as f32;
    }
    Ok(Value::Vector3(Vector3::new(data[0], data[1], data[2])))
}

fn from_map(entries: &HashMap<String, Value>) -> ValueResult<Value> {
    let mut data = [0.0f32; 3];
    for (slot, key) in data.iter_mut().zip(["x", "y", "z"]) {
        let item = entries.get(key).ok_or(ValueError::Construction {
            type_name: "Vector3",
            message: "keys \"x\", \"y\" and \"z\" are required",
        })?;
        *slot = item.as_number().ok_or(ValueError::TypeMismatch {
            expected: "number",
            found: item.type_name(),
        })? as f32;
    }
    Ok(Value::Vector3(Vector3::new(data[0], data[1], data[2])))
}

/// Multiplication dispatch: vector -> cross product, quaternion -> rotation,
/// matrix -> homogeneous transform with w = 1 (the fourth component is
/// discarded), number -> uniform scale.
pub(super) fn mul(v: Vector3, rhs: &Value) -> ValueResult<Value> {
    match rhs {
        Value::Vector3(other) => Ok(Value::Vector3(v.cross(*other))),
        Value::Quaternion(q) => Ok(Value::Vector3(*q * v)),
        Value::Matrix4x4(m) => Ok(Value::Vector3(Vector3::from(*m * Vector4::point(v)))),
        other => match other.as_number() {
            Some(scalar) => Ok(Value::Vector3(scalar as f32 * v)),
            None => Err(ValueError::TypeMismatch {
                expected: "Vector3, Quaternion, Matrix4x4 or number",
                found: other.type_name(),
            }),
        },
    }
}
