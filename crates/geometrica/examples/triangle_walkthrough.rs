//! Solve one triangle both ways and spin a square about each axis.
//!
//! Purpose
//! - Show the sine and cosine laws agreeing on a concrete triangle
//!   (a = 6, A = 33°, b = 10), including the ambiguous obtuse branch.
//! - Print a unit square after a quarter turn about x, y and z.

use geometrica::{cosine_law, rotate, sine_law, Axis, CosineLaw, Handedness, SineLaw};

fn main() -> Result<(), geometrica::GeomError> {
    for obtuse in [false, true] {
        let b_angle = sine_law(&SineLaw {
            side1: Some(6.0),
            angle1: Some(33.0),
            side2: Some(10.0),
            angle2: None,
            obtuse,
        })?;
        let c_angle = 180.0 - 33.0 - b_angle;
        let c_side = cosine_law(&CosineLaw {
            side1: 6.0,
            side2: 10.0,
            side3: None,
            angle: Some(c_angle),
        })?;
        println!("obtuse={obtuse} B={b_angle:.3} C={c_angle:.3} c={c_side:.6}");
    }

    let square = [
        (0.0, 0.0, 0.0),
        (1.0, 0.0, 0.0),
        (1.0, 1.0, 0.0),
        (0.0, 1.0, 0.0),
    ];
    for axis in Axis::ALL {
        let out = rotate(&square, axis, 90.0, Handedness::Right)?;
        let rows: Vec<String> = out
            .iter()
            .map(|p| format!("({:.3}, {:.3}, {:.3})", p.x, p.y, p.z))
            .collect();
        println!("axis={axis} {}", rows.join(" "));
    }
    Ok(())
}
