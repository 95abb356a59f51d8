//! Quaternion bindings. Multiplication of a quaternion operand only
//! composes with another quaternion; rotating a vector is spelled
//! `vector * quaternion`.

use std::collections::HashMap;

use math::types::Quat;

use super::Value;
use crate::error::{ValueError, ValueResult};


pub fn new(x: f32, y: f32, z: f32, w: f32) -> Value {
    Value::Quaternion(Quat::new(x, y, z, w))
}

pub fn identity() -> Value {
    Value::Quaternion(Quat::identity())
}

/// Polymorphic constructor: sequence, keyed mapping or same-type copy, in
/// that order.
pub fn from_value(arg: &Value) -> ValueResult<Value> {
    match arg {
        Value::List(items) => from_list(items),
        Value::Map(entries) => from_map(entries),
        Value::Quaternion(q) => Ok(Value::Quaternion(*q)),
        other => Err(ValueError::TypeMismatch {
            expected: "list, map or Quaternion",
            found: other.type_name(),
        }),
    }
}

pub fn from_axis_and_degrees(axis: &Value, degrees: f32) -> ValueResult<Value> {
    let axis = axis.as_vector3().ok_or(ValueError::TypeMismatch {
        expected: "Vector3",
        found: axis.type_name(),
    })?;
    Ok(Value::Quaternion(Quat::from_axis_degrees(axis, degrees)))
}

fn from_list(items: &[Value]) -> ValueResult<Value> {
    if items.len() < 4 {
        return Err(ValueError::Construction {
            type_name: "Quaternion",
            message: "a list of at least 4 numbers is required",
        });
    }
    let mut data = [0.0f32; 4];
    for (slot, item) in data.iter_mut().zip(items) {
        *slot = item.as_number().ok_or(ValueError::TypeMismatch {
            expected: "number",
            found: item.type_name(),
        })? as f32;
    }
    Ok(Value::Quaternion(Quat::new(data[0], data[1], data[2], data[3])))
}

fn from_map(entries: &HashMap<String, Value>) -> ValueResult<Value> {
    let mut data = [0.0f32; 4];
    for (slot, key) in data.iter_mut().zip(["x", "y", "z", "w"]) {
        let item = entries.get(key).ok_or(ValueError::Construction {
            type_name: "Quaternion",
            message: "keys \"x\", \"y\", \"z\" and \"w\" are required",
        })?;
        *slot = item.as_number().ok_or(ValueError::TypeMismatch {
            expected: "number",
            found: item.type_name(),
        })? as f32;
    }
    Ok(Value::Quaternion(Quat::new(data[0], data[1], data[2], data[3])))
}

pub(super) fn mul(q: Quat, rhs: &Value) -> ValueResult<Value> {
    match rhs {
        Value::Quaternion(other) => Ok(Value::Quaternion(q * *other)),
        other => Err(ValueError::TypeMismatch {
            expected: "Quaternion",
            found: other.type_name(),
        }),
    }
}
