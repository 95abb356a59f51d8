pub mod matrix4x4;
pub mod quaternion;
pub mod vector3;

use std::collections::HashMap;
use std::fmt::{Display, Formatter};
use std::ops::{Add, Div, Mul, Sub};

use math::types::{Matrix4, Quat, Vector3};
use strum::IntoStaticStr;

use crate::error::{ValueError, ValueResult};


/// Dynamically-typed operand and result of the binding layer. `Number`,
/// `List` and `Map` exist for constructor polymorphism and scalar operands;
/// the remaining variants wrap the kernel types.
#[derive(Debug, Clone, PartialEq, IntoStaticStr)]
pub enum Value {
    Number(f64),
    List(Vec<Value>),
    Map(HashMap<String, Value>),
    Vector3(Vector3),
    Quaternion(Quat),
    Matrix4x4(Matrix4),
}

impl From<f64> for Value {
    #[inline]
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

impl From<f32> for Value {
    #[inline]
    fn from(value: f32) -> Self {
        Value::Number(value as f64)
    }
}

impl From<i32> for Value {
    #[inline]
    fn from(value: i32) -> Self {
        Value::Number(value as f64)
    }
}

impl From<Vector3> for Value {
    #[inline]
    fn from(value: Vector3) -> Self {
        Value::Vector3(value)
    }
}

impl From<Quat> for Value {
    #[inline]
    fn from(value: Quat) -> Self {
        Value::Quaternion(value)
    }
}

impl From<Matrix4> for Value {
    #[inline]
    fn from(value: Matrix4) -> Self {
        Value::Matrix4x4(value)
    }
}

impl From<Vec<f64>> for Value {
    #[inline]
    fn from(values: Vec<f64>) -> Self {
        Value::List(values.into_iter().map(Value::Number).collect())
    }
}

impl Value {
    pub fn type_name(&self) -> &'static str {
        self.into()
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_vector3(&self) -> Option<Vector3> {
        match self {
            Value::Vector3(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_quaternion(&self) -> Option<Quat> {
        match self {
            Value::Quaternion(q) => Some(*q),
            _ => None,
        }
    }

    pub fn as_matrix4x4(&self) -> Option<Matrix4> {
        match self {
            Value::Matrix4x4(m) => Some(*m),
            _ => None,
        }
    }

    /// Read-only named component access for vector and quaternion values.
    pub fn get(&self, component: &str) -> Option<f64> {
        match (self, component) {
            (Value::Vector3(v), "x") => Some(v.x as f64),
            (Value::Vector3(v), "y") => Some(v.y as f64),
            (Value::Vector3(v), "z") => Some(v.z as f64),
            (Value::Quaternion(q), "x") => Some(q.x as f64),
            (Value::Quaternion(q), "y") => Some(q.y as f64),
            (Value::Quaternion(q), "z") => Some(q.z as f64),
            (Value::Quaternion(q), "w") => Some(q.w as f64),
            _ => None,
        }
    }

    pub fn dot(&self, other: &Value) -> ValueResult<f64> {
        let v1 = self.as_vector3().ok_or(ValueError::TypeMismatch {
            expected: "Vector3",
            found: self.type_name(),
        })?;
        let v2 = other.as_vector3().ok_or(ValueError::TypeMismatch {
            expected: "Vector3",
            found: other.type_name(),
        })?;
        Ok((v1 * v2) as f64)
    }

    pub fn length(&self) -> ValueResult<f64> {
        let v = self.as_vector3().ok_or(ValueError::TypeMismatch {
            expected: "Vector3",
            found: self.type_name(),
        })?;
        Ok(v.length() as f64)
    }

    pub fn normalize(&self) -> ValueResult<Value> {
        match self {
            Value::Vector3(v) => Ok(Value::Vector3(v.norm())),
            Value::Quaternion(q) => Ok(Value::Quaternion(q.norm())),
            other => Err(ValueError::TypeMismatch {
                expected: "Vector3 or Quaternion",
                found: other.type_name(),
            }),
        }
    }

    pub fn transpose(&self) -> ValueResult<Value> {
        let m = self.as_matrix4x4().ok_or(ValueError::TypeMismatch {
            expected: "Matrix4x4",
            found: self.type_name(),
        })?;
        Ok(Value::Matrix4x4(m.transpose()))
    }

    pub fn inverse(&self) -> ValueResult<Value> {
        let m = self.as_matrix4x4().ok_or(ValueError::TypeMismatch {
            expected: "Matrix4x4",
            found: self.type_name(),
        })?;
        m.inv()
            .map(Value::Matrix4x4)
            .ok_or(ValueError::NotInvertible)
    }
}

impl Add for &Value {
    type Output = ValueResult<Value>;
    fn add(self, rhs: &Value) -> Self::Output {
        match (self, rhs) {
            (Value::Vector3(v1), Value::Vector3(v2)) => Ok(Value::Vector3(*v1 + *v2)),
            (Value::Vector3(_), other) | (other, _) => Err(ValueError::TypeMismatch {
                expected: "Vector3",
                found: other.type_name(),
            }),
        }
    }
}

impl Sub for &Value {
    type Output = ValueResult<Value>;
    fn sub(self, rhs: &Value) -> Self::Output {
        match (self, rhs) {
            (Value::Vector3(v1), Value::Vector3(v2)) => Ok(Value::Vector3(*v1 - *v2)),
            (Value::Vector3(_), other) | (other, _) => Err(ValueError::TypeMismatch {
                expected: "Vector3",
                found: other.type_name(),
            }),
        }
    }
}

impl Mul for &Value {
    type Output = ValueResult<Value>;
    fn mul(self, rhs: &Value) -> Self::Output {
        match self {
            Value::Vector3(v) => vector3::mul(*v, rhs),
            Value::Quaternion(q) => quaternion::mul(*q, rhs),
            Value::Matrix4x4(m) => matrix4x4::mul(*m, rhs),
            other => Err(ValueError::TypeMismatch {
                expected: "Vector3, Quaternion or Matrix4x4",
                found: other.type_name(),
            }),
        }
    }
}

impl Div for &Value {
    type Output = ValueResult<Value>;
    fn div(self, rhs: &Value) -> Self::Output {
        let v = self.as_vector3().ok_or(ValueError::TypeMismatch {
            expected: "Vector3",
            found: self.type_name(),
        })?;
        let scalar = rhs.as_number().ok_or(ValueError::TypeMismatch {
            expected: "number",
            found: rhs.type_name(),
        })?;
        if scalar == 0.0 {
            return Err(ValueError::ZeroDivision);
        }
        Ok(Value::Vector3(v / scalar as f32))
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            Value::Number(value) => write!(f, "{}", value),
            Value::List(items) => {
                write!(f, "[")?;
                for (index, item) in items.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            Value::Map(entries) => {
                write!(f, "{{")?;
                for (index, (key, item)) in entries.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", key, item)?;
                }
                write!(f, "}}")
            }
            Value::Vector3(v) => write!(f, "Vector3({:.2}, {:.2}, {:.2})", v.x, v.y, v.z),
            Value::Quaternion(q) => write!(
                f,
                "Quaternion({:.2}, {:.2}, {:.2}, {:.2})",
                q.x, q.y, q.z, q.w
            ),
            Value::Matrix4x4(m) => write!(
                f,
                "Matrix4x4(\n    \
                 {:.2}, {:.2}, {:.2}, {:.2}\n    \
                 {:.2}, {:.2}, {:.2}, {:.2}\n    \
                 {:.2}, {:.2}, {:.2}, {:.2}\n    \
                 {:.2}, {:.2}, {:.2}, {:.2}\n)",
                m.i.x, m.i.y, m.i.z, m.i.w, m.j.x, m.j.y, m.j.z, m.j.w, m.k.x, m.k.y, m.k.z,
                m.k.w, m.l.x, m.l.y, m.l.z, m.l.w
            ),
        }
    }
}
