//! Matrix4x4 bindings. Matrices only construct as the identity or through
//! the transform factories; multiplication of a matrix operand chains with
//! another matrix, and `vector * matrix` applies the transform.

use math::types::{Matrix4, Vector3};

use super::Value;
use crate::error::{ValueError, ValueResult};

#[cfg(test)]
mod test_matrix4x4 {
    use super::{identity, look_at_lh, rotation_quaternion, rotation_z, scaling, translation, Value, ValueError};
    use crate::types::{quaternion, vector3};
    use math::types::Matrix4;

    #[test]
    fn chain_with_identity() {
        let m = rotation_z(90.0);
        let chained = (&m * &identity()).unwrap();
        assert!(chained
            .as_matrix4x4()
            .unwrap()
            .approx_equal(m.as_matrix4x4().unwrap()));
    }

    #[test]
    fn translate_then_scale() {
        let m = (&translation(&vector3::new(1.0, 0.0, 0.0)).unwrap()
            * &scaling(&vector3::fill(2.0)).unwrap())
            .unwrap();
        let moved = (&vector3::identity() * &m).unwrap().as_vector3().unwrap();
        assert!(moved.approx_equal(vector3::new(2.0, 0.0, 0.0).as_vector3().unwrap()));
    }

    #[test]
    fn rotation_quaternion_matches_factory() {
        let q = quaternion::from_axis_and_degrees(&vector3::new(0.0, 0.0, 1.0), 90.0).unwrap();
        let m = rotation_quaternion(&q).unwrap();
        assert!(m
            .as_matrix4x4()
            .unwrap()
            .approx_equal(Matrix4::rotation_z(90.0)));
    }

    #[test]
    fn look_at_maps_eye_to_origin() {
        let eye = vector3::new(2.0, 3.0, 4.0);
        let m = look_at_lh(&eye, &vector3::new(1.0, 1.0, 1.0), &vector3::new(0.0, 1.0, 0.0))
            .unwrap();
        let p = (&eye * &m).unwrap().as_vector3().unwrap();
        assert!(p.approx_equal(Default::default()));
    }

    #[test]
    fn inverse_round_trip() {
        let m = translation(&vector3::new(1.0, 2.0, 3.0)).unwrap();
        let inv = m.inverse().unwrap();
        let product = (&m * &inv).unwrap().as_matrix4x4().unwrap();
        assert!(product.approx_equal(Matrix4::identity()));
    }

    #[test]
    fn factory_rejects_non_vector() {
        assert!(matches!(
            translation(&Value::from(1.0)),
            Err(ValueError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn mul_number_rejected() {
        assert!(matches!(
            &identity() * &Value::from(2.0),
            Err(ValueError::TypeMismatch { .. })
        ));
    }
}

pub fn identity() -> Value {
    Value::Matrix4x4(Matrix4::identity())
}

pub fn fill(value: f32) -> Value {
    Value::Matrix4x4(Matrix4::fill(value))
}

pub fn translation(offset: &Value) -> ValueResult<Value> {
    Ok(Value::Matrix4x4(Matrix4::translation(as_vector3(offset)?)))
}

pub fn rotation_x(degrees: f32) -> Value {
    Value::Matrix4x4(Matrix4::rotation_x(degrees))
}

pub fn rotation_y(degrees: f32) -> Value {
    Value::Matrix4x4(Matrix4::rotation_y(degrees))
}

pub fn rotation_z(degrees: f32) -> Value {
    Value::Matrix4x4(Matrix4::rotation_z(degrees))
}

pub fn rotation_axis(axis: &Value, degrees: f32) -> ValueResult<Value> {
    Ok(Value::Matrix4x4(Matrix4::rotation_axis(
        as_vector3(axis)?,
        degrees,
    )))
}

pub fn rotation_quaternion(q: &Value) -> ValueResult<Value> {
    let q = q.as_quaternion().ok_or(ValueError::TypeMismatch {
        expected: "Quaternion",
        found: q.type_name(),
    })?;
    Ok(Value::Matrix4x4(Matrix4::rotation_quat(q)))
}

pub fn scaling(factors: &Value) -> ValueResult<Value> {
    Ok(Value::Matrix4x4(Matrix4::scaling(as_vector3(factors)?)))
}

pub fn look_at_lh(eye: &Value, target: &Value, up: &Value) -> ValueResult<Value> {
    Ok(Value::Matrix4x4(Matrix4::look_at_lh(
        as_vector3(eye)?,
        as_vector3(target)?,
        as_vector3(up)?,
    )))
}

fn as_vector3(arg: &Value) -> ValueResult<Vector3> {
    arg.as_vector3().ok_or(ValueError::TypeMismatch {
        expected: "Vector3",
        found: arg.type_name(),
    })
}

pub(super) fn mul(m: Matrix4, rhs: &Value) -> ValueResult<Value> {
    match rhs {
        Value::Matrix4x4(other) => Ok(Value::Matrix4x4(m * *other)),
        other => Err(ValueError::TypeMismatch {
            expected: "Matrix4x4",
            found: other.type_name(),
        }),
    }
}
