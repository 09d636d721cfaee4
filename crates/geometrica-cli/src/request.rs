//! Loosely typed (JSON) requests.
//!
//! This is where "is it numeric?" and "is it a string?" are real questions:
//! `"3"` is rejected as a number, a `hand` of `100` is an `InvalidType`, and a
//! point list may hold either `[x, y, z]` arrays or `{"x":..,"y":..,"z":..}`
//! objects. Which of the two is decided by the first item, for the whole list.

use geometrica::api::{cosine_law_kw, rotate_named, sine_law_kw};
use geometrica::{translate, GeomError, GeomResult, Point};
use serde::Serialize;
use serde_json::{Map, Value};

/// Outcome of one request, as written to the batch output.
#[derive(Debug, Serialize, PartialEq)]
#[serde(untagged)]
pub enum Outcome {
    Points { op: String, points: Vec<[f64; 3]> },
    Scalar { op: String, value: f64 },
    Failed { op: String, kind: &'static str, error: String },
}

/// Short name of the error family, stable for downstream tooling.
pub fn error_kind(err: &GeomError) -> &'static str {
    match err {
        GeomError::InvalidArgument { .. } => "InvalidArgument",
        GeomError::ArgumentCount { .. } => "ArgumentCount",
        GeomError::InvalidType { .. } => "InvalidType",
        GeomError::NoSolution { .. } => "NoSolution",
    }
}

fn describe(v: &Value) -> String {
    match v {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Optional numeric field: absent or `null` means unknown.
fn opt_number(obj: &Map<String, Value>, field: &str) -> GeomResult<Option<f64>> {
    match obj.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => n.as_f64().map(Some).ok_or_else(|| {
            GeomError::invalid_argument(field, format!("must be a number, not '{n}'"))
        }),
        Some(other) => Err(GeomError::invalid_argument(
            field,
            format!("must be a number, not '{}'", describe(other)),
        )),
    }
}

fn number(obj: &Map<String, Value>, field: &str) -> GeomResult<f64> {
    opt_number(obj, field)?
        .ok_or_else(|| GeomError::invalid_argument(field, "is required"))
}

fn coord(v: &Value, field: &str) -> GeomResult<f64> {
    match v {
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| GeomError::invalid_argument(field, format!("must be a number, not '{n}'"))),
        other => Err(GeomError::invalid_argument(
            field,
            format!("must be a number, not '{}'", describe(other)),
        )),
    }
}

/// Normalize a JSON point list into coordinate triples.
///
/// If the first item is an array, every item must be a 3-element array.
/// Otherwise every item is read through its `x`, `y`, `z` keys.
pub fn points_from_value(v: &Value) -> GeomResult<Vec<[f64; 3]>> {
    let items = v
        .as_array()
        .ok_or_else(|| GeomError::invalid_argument("points", "must be a list"))?;
    let unpackable = matches!(items.first(), Some(Value::Array(_)));
    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let field = format!("points[{i}]");
            if unpackable {
                match item.as_array().map(Vec::as_slice) {
                    Some([x, y, z]) => Ok([coord(x, &field)?, coord(y, &field)?, coord(z, &field)?]),
                    _ => Err(GeomError::invalid_argument(
                        field,
                        format!("must unpack into (x, y, z), not '{item}'"),
                    )),
                }
            } else {
                let get = |k: &str| {
                    item.get(k).ok_or_else(|| {
                        GeomError::invalid_argument(
                            field.clone(),
                            format!("has no '{k}' accessor: '{item}'"),
                        )
                    })
                };
                Ok([
                    coord(get("x")?, &field)?,
                    coord(get("y")?, &field)?,
                    coord(get("z")?, &field)?,
                ])
            }
        })
        .collect()
}

fn triples(points: Vec<Point>) -> Vec<[f64; 3]> {
    points.into_iter().map(|p| [p.x, p.y, p.z]).collect()
}

fn translate_req(obj: &Map<String, Value>) -> GeomResult<Vec<[f64; 3]>> {
    let pts = points_from_value(obj.get("points").unwrap_or(&Value::Null))?;
    let x = number(obj, "x")?;
    let y = number(obj, "y")?;
    let z = number(obj, "z")?;
    translate(&pts, x, y, z).map(triples)
}

fn rotate_req(obj: &Map<String, Value>) -> GeomResult<Vec<[f64; 3]>> {
    let pts = points_from_value(obj.get("points").unwrap_or(&Value::Null))?;
    let angle = number(obj, "angle")?;
    let hand = match obj.get("hand") {
        None | Some(Value::Null) => "right",
        Some(Value::String(s)) => s.as_str(),
        Some(other) => return Err(GeomError::invalid_type("hand", "a string", describe(other))),
    };
    // a non-string axis can never name x/y/z; report it like any unknown axis
    let axis = match obj.get("axis") {
        Some(Value::String(s)) => s.clone(),
        Some(other) => describe(other),
        None => String::new(),
    };
    rotate_named(&pts, &axis, angle, hand).map(triples)
}

fn sine_req(obj: &Map<String, Value>) -> GeomResult<f64> {
    let side1 = opt_number(obj, "side1")?;
    let side2 = opt_number(obj, "side2")?;
    let angle1 = opt_number(obj, "angle1")?;
    let angle2 = opt_number(obj, "angle2")?;
    let obtuse = match obj.get("obtuse") {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(other) => return Err(GeomError::invalid_type("obtuse", "a bool", describe(other))),
    };
    sine_law_kw(side1, angle1, side2, angle2, obtuse)
}

fn cosine_req(obj: &Map<String, Value>) -> GeomResult<f64> {
    let side1 = number(obj, "side1")?;
    let side2 = number(obj, "side2")?;
    let side3 = opt_number(obj, "side3")?;
    let angle = opt_number(obj, "angle")?;
    cosine_law_kw(side1, side2, side3, angle)
}

/// Evaluate one request object.
pub fn evaluate(req: &Value) -> Outcome {
    let op = req
        .get("op")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    let failed = |op: String, err: GeomError| Outcome::Failed {
        op,
        kind: error_kind(&err),
        error: err.to_string(),
    };
    let Some(obj) = req.as_object() else {
        return failed(op, GeomError::invalid_type("request", "an object", describe(req)));
    };
    let result = match op.as_str() {
        "translate" => translate_req(obj).map(|points| Outcome::Points {
            op: op.clone(),
            points,
        }),
        "rotate" => rotate_req(obj).map(|points| Outcome::Points {
            op: op.clone(),
            points,
        }),
        "sine_law" => sine_req(obj).map(|value| Outcome::Scalar {
            op: op.clone(),
            value,
        }),
        "cosine_law" => cosine_req(obj).map(|value| Outcome::Scalar {
            op: op.clone(),
            value,
        }),
        other => Err(GeomError::invalid_argument(
            "op",
            format!("must be one of translate, rotate, sine_law, cosine_law, not '{other}'"),
        )),
    };
    result.unwrap_or_else(|err| failed(op, err))
}
