use super::*;
use proptest::prelude::*;

fn close(got: f64, want: f64, delta: f64) {
    assert!((got - want).abs() <= delta, "got {got}, want {want} ± {delta}");
}

fn sl(side1: Option<f64>, angle1: Option<f64>, side2: Option<f64>, angle2: Option<f64>) -> SineLaw {
    SineLaw {
        side1,
        angle1,
        side2,
        angle2,
        obtuse: false,
    }
}

#[test]
fn sine_side_from_side_and_two_angles() {
    close(
        sine_law(&sl(Some(2.0), Some(30.0), None, Some(105.0))).unwrap(),
        3.86,
        0.005,
    );
    close(
        sine_law(&sl(None, Some(105.0), Some(2.0), Some(30.0))).unwrap(),
        3.86,
        0.005,
    );
}

#[test]
fn sine_angle_from_angle_and_two_sides() {
    close(
        sine_law(&sl(Some(30.0), Some(40.0), Some(40.0), None)).unwrap(),
        58.99,
        0.005,
    );
    close(
        sine_law(&sl(Some(40.0), None, Some(30.0), Some(40.0))).unwrap(),
        58.99,
        0.005,
    );
}

#[test]
fn sine_obtuse_flag_picks_other_branch() {
    let acute = sine_law(&sl(Some(6.0), Some(33.0), Some(10.0), None)).unwrap();
    let obtuse = sine_law(&SineLaw {
        obtuse: true,
        ..sl(Some(6.0), Some(33.0), Some(10.0), None)
    })
    .unwrap();
    close(acute, 65.2, 0.05);
    close(obtuse, 114.8, 0.05);
    close(acute + obtuse, 180.0, 1e-9);
}

#[test]
fn sine_values_must_be_numeric() {
    let bad = [
        (sl(Some(f64::NAN), Some(30.0), None, Some(105.0)), "side1"),
        (sl(Some(2.0), Some(f64::NAN), None, Some(105.0)), "angle1"),
        (sl(Some(2.0), Some(30.0), None, Some(f64::INFINITY)), "angle2"),
        (sl(Some(30.0), Some(40.0), Some(f64::NAN), None), "side2"),
    ];
    for (req, name) in bad {
        match sine_law(&req) {
            Err(GeomError::InvalidArgument { field, .. }) => assert_eq!(field, name),
            other => panic!("expected InvalidArgument for {name}, got {other:?}"),
        }
    }
    assert!(sine_law(&sl(Some(2.5), Some(30.0), None, Some(105.0))).is_ok());
    assert!(sine_law(&sl(Some(30.0), Some(40.0), Some(40.5), None)).is_ok());
}

#[test]
fn sine_needs_exactly_three_values() {
    let cases = [
        (SineLaw::default(), 0),
        (sl(None, Some(100.0), None, None), 1),
        (sl(None, Some(100.0), None, Some(90.0)), 2),
        (sl(Some(20.0), Some(100.0), Some(100.0), Some(90.0)), 4),
    ];
    for (req, n) in cases {
        assert_eq!(
            sine_law(&req),
            Err(GeomError::ArgumentCount {
                op: "sine_law",
                supplied: n
            })
        );
    }
}

#[test]
fn sine_count_is_checked_before_arithmetic() {
    // sin(0) in the denominator would blow up if we got that far
    assert!(matches!(
        sine_law(&sl(Some(1.0), Some(0.0), Some(1.0), Some(0.0))),
        Err(GeomError::ArgumentCount { .. })
    ));
}

#[test]
fn sine_impossible_triangle_has_no_solution() {
    assert!(matches!(
        sine_law(&sl(Some(1.0), Some(90.0), Some(2.0), None)),
        Err(GeomError::NoSolution { .. })
    ));
    assert!(matches!(
        sine_law(&sl(None, Some(30.0), Some(2.0), Some(0.0))),
        Err(GeomError::NoSolution { .. })
    ));
}

#[test]
fn sine_domain_eps_is_configurable() {
    // 1·sin(90°)/1 == 1 exactly, so even a zero tolerance accepts it
    let strict = TrigCfg { domain_eps: 0.0 };
    close(
        sine_law_with_cfg(&sl(Some(1.0), Some(90.0), Some(1.0), None), strict).unwrap(),
        90.0,
        1e-9,
    );
}

fn cl(side1: f64, side2: f64, side3: Option<f64>, angle: Option<f64>) -> CosineLaw {
    CosineLaw {
        side1,
        side2,
        side3,
        angle,
    }
}

#[test]
fn cosine_side_from_two_sides_and_angle() {
    close(cosine_law(&cl(12.0, 9.0, None, Some(87.0))).unwrap(), 14.6, 0.05);
}

#[test]
fn cosine_angle_from_three_sides() {
    close(cosine_law(&cl(60.0, 50.0, Some(20.0), None)).unwrap(), 18.2, 0.05);
}

#[test]
fn cosine_values_must_be_numeric() {
    let bad = [
        (cl(f64::NAN, 9.0, None, Some(87.0)), "side1"),
        (cl(12.0, f64::INFINITY, None, Some(87.0)), "side2"),
        (cl(12.0, 9.0, None, Some(f64::NAN)), "angle"),
        (cl(60.0, 50.0, Some(f64::NAN), None), "side3"),
    ];
    for (req, name) in bad {
        match cosine_law(&req) {
            Err(GeomError::InvalidArgument { field, .. }) => assert_eq!(field, name),
            other => panic!("expected InvalidArgument for {name}, got {other:?}"),
        }
    }
    assert!(cosine_law(&cl(12.5, 9.0, None, Some(87.0))).is_ok());
    assert!(cosine_law(&cl(60.0, 50.0, Some(20.5), None)).is_ok());
}

#[test]
fn cosine_needs_exactly_one_of_side3_or_angle() {
    assert!(matches!(
        cosine_law(&cl(60.0, 50.0, Some(20.0), Some(100.0))),
        Err(GeomError::ArgumentCount { .. })
    ));
    assert!(matches!(
        cosine_law(&cl(60.0, 50.0, None, None)),
        Err(GeomError::ArgumentCount { .. })
    ));
}

#[test]
fn cosine_triangle_inequality_violation_has_no_solution() {
    assert!(matches!(
        cosine_law(&cl(1.0, 1.0, Some(5.0), None)),
        Err(GeomError::NoSolution { .. })
    ));
}

#[test]
fn cosine_side_survives_huge_sides() {
    // equilateral: 60° between equal sides gives the same length back
    let side3 = cosine_law(&cl(1e200, 1e200, None, Some(60.0))).unwrap();
    assert!((side3 / 1e200 - 1.0).abs() < 1e-12, "got {side3}");
    let right = cosine_law(&cl(3e300, 4e300, None, Some(90.0))).unwrap();
    assert!((right / 5e300 - 1.0).abs() < 1e-12, "got {right}");
    close(cosine_law(&cl(3e300, 4e300, Some(5e300), None)).unwrap(), 90.0, 1e-9);
}

#[test]
fn cosine_side_overflowing_f64_has_no_solution() {
    assert!(matches!(
        cosine_law(&cl(f64::MAX, f64::MAX, None, Some(180.0))),
        Err(GeomError::NoSolution { .. })
    ));
}

#[test]
fn cosine_side_of_zero_sides_is_zero() {
    assert_eq!(cosine_law(&cl(0.0, 0.0, None, Some(45.0))).unwrap(), 0.0);
}

proptest! {
    #[test]
    fn laws_agree_on_random_triangles(
        a_side in 0.1..100.0f64,
        a_deg in 5.0..170.0f64,
        b_deg in 5.0..170.0f64,
    ) {
        prop_assume!(a_deg + b_deg < 175.0);
        prop_assume!((b_deg - 90.0).abs() > 5.0);
        let c_deg = 180.0 - a_deg - b_deg;

        let b_side = sine_law(&sl(Some(a_side), Some(a_deg), None, Some(b_deg))).unwrap();
        let b_back = sine_law(&SineLaw {
            obtuse: b_deg > 90.0,
            ..sl(Some(a_side), Some(a_deg), Some(b_side), None)
        })
        .unwrap();
        prop_assert!((b_back - b_deg).abs() < 1e-6);

        let c_side = cosine_law(&cl(a_side, b_side, None, Some(c_deg))).unwrap();
        let c_back = cosine_law(&cl(a_side, b_side, Some(c_side), None)).unwrap();
        prop_assert!((c_back - c_deg).abs() < 1e-6);
    }
}
