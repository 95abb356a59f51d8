use std::collections::HashMap;
use std::{error::Error, result::Result};

use colored::Colorize;
use math::types::Vector3;
use value::{matrix4x4, quaternion, vector3, Value};

fn heading(text: &str) {
    println!("{}", text.green().bold());
}

fn show(label: &str, value: &Value) {
    println!("  {} = {}", label.cyan(), value);
}

fn rotate_all_paths(v: &Value, axis: &Value, degrees: f32) -> Result<(), Box<dyn Error>> {
    let q = quaternion::from_axis_and_degrees(axis, degrees)?;
    let m = matrix4x4::rotation_axis(axis, degrees)?;
    show("v * quaternion", &(v * &q)?);
    show("v * matrix    ", &(v * &m)?);
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    heading("Polymorphic construction");
    let from_list = vector3::from_value(&Value::from(vec![1.0, 2.0, 3.0]))?;
    let entries = [("x", 1.0), ("y", 2.0), ("z", 3.0)]
        .into_iter()
        .map(|(key, value)| (key.to_string(), Value::from(value)))
        .collect::<HashMap<_, _>>();
    let from_map = vector3::from_value(&Value::Map(entries))?;
    show("from list", &from_list);
    show("from map ", &from_map);

    heading("Arithmetic");
    let sum = (&from_list + &from_map)?;
    show("v + v", &sum);
    show("v - v", &(&from_list - &from_map)?);
    show("v * 2", &(&from_list * &Value::from(2.0))?);
    show("v / 2", &(&from_list / &Value::from(2.0))?);
    match &from_list / &Value::from(0.0) {
        Ok(_) => unreachable!(),
        Err(err) => println!("  {} {}", "error:".red(), err),
    }

    heading("Rotations, 90 degrees");
    rotate_all_paths(
        &vector3::new(0.0, 0.0, 1.0),
        &vector3::new(1.0, 0.0, 0.0),
        90.0,
    )?;
    rotate_all_paths(
        &vector3::new(1.0, 0.0, 0.0),
        &vector3::new(0.0, 1.0, 0.0),
        90.0,
    )?;
    rotate_all_paths(
        &vector3::new(0.0, 1.0, 0.0),
        &vector3::new(0.0, 0.0, 1.0),
        90.0,
    )?;

    heading("Transform chaining");
    let chained = (&matrix4x4::translation(&vector3::new(1.0, 0.0, 0.0))?
        * &matrix4x4::scaling(&vector3::fill(2.0))?)?;
    show("translate * scale", &chained);
    show("origin transformed", &(&vector3::identity() * &chained)?);
    let inverse = chained.inverse()?;
    show("round trip", &(&chained * &inverse)?);

    heading("Camera");
    let view = matrix4x4::look_at_lh(
        &vector3::new(2.0, 3.0, 4.0),
        &vector3::identity(),
        &Value::from(Vector3::y()),
    )?;
    show("look_at_lh", &view);

    Ok(())
}
