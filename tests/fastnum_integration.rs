use fastnum::decimal::D128;
use skala::{ContinuousScale, LinearScale};

fn close(a: D128, b: D128) -> bool {
    (a - b).abs() < D128::from(1e-10)
}

#[test]
fn test_linear_scale_with_decimal_domain_and_range() {
    let scale = LinearScale::<D128>::new(
        (D128::from(0), D128::from(100)),
        (D128::from(0), D128::from(500)),
    );

    assert!(close(scale.apply(&D128::from(50)), D128::from(250)));
    assert!(close(scale.apply(&D128::from(150)), D128::from(750)));
    assert!(close(scale.invert(D128::from(250)), D128::from(50)));
}

#[test]
fn test_linear_scale_with_decimal_clamp() {
    let scale = LinearScale::<D128>::new(
        (D128::from(0), D128::from(100)),
        (D128::from(500), D128::from(0)),
    )
    .with_clamp(true);

    assert!(close(scale.apply(&D128::from(150)), D128::from(0)));
    assert!(close(scale.apply(&D128::from(-50)), D128::from(500)));
    assert!(close(scale.apply(&D128::from(25)), D128::from(375)));
}

#[test]
fn test_linear_scale_with_decimal_degenerate_domain() {
    let scale = LinearScale::<D128>::new(
        (D128::from(7), D128::from(7)),
        (D128::from(10), D128::from(20)),
    );

    assert!(close(scale.apply(&D128::from(7)), D128::from(10)));
    assert!(close(scale.apply(&D128::from(1000)), D128::from(10)));
}

#[test]
fn test_linear_scale_with_decimal_round_trip() {
    let scale = LinearScale::<D128>::new(
        (D128::from(-40), D128::from(60)),
        (D128::from(0), D128::from(800)),
    );

    for x in [-40, -13, 0, 27, 60, 95] {
        let x = D128::from(x);
        assert!(close(scale.invert(scale.apply(&x)), x));
    }
}
