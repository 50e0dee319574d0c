use super::*;

#[test]
fn spec_resolution_rules() {
    assert_eq!(MeasureSpec::exactly(50).resolve(10), 50);
    assert_eq!(MeasureSpec::at_most(50).resolve(10), 10);
    assert_eq!(MeasureSpec::at_most(50).resolve(80), 50);
    assert_eq!(MeasureSpec::unspecified().resolve(80), 80);
}

#[test]
fn circle_is_always_square() {
    let desired = Size::new(640, 480);
    let specs = [
        MeasureSpec::exactly(300),
        MeasureSpec::exactly(120),
        MeasureSpec::at_most(200),
        MeasureSpec::at_most(1000),
        MeasureSpec::unspecified(),
    ];
    for w in specs {
        for h in specs {
            let s = measure_shape(ShapeKind::Circle, desired, w, h);
            assert_eq!(s.width, s.height);
            assert_eq!(s.width, w.resolve(640).min(h.resolve(480)));
        }
    }
}

#[test]
fn other_shapes_pass_measurement_through() {
    let s = measure_shape(
        ShapeKind::RoundedRect,
        Size::new(10, 10),
        MeasureSpec::exactly(300),
        MeasureSpec::exactly(100),
    );
    assert_eq!(s, Size::new(300, 100));

    let s = measure_shape(
        ShapeKind::VectorPath,
        Size::new(64, 32),
        MeasureSpec::unspecified(),
        MeasureSpec::at_most(16),
    );
    assert_eq!(s, Size::new(64, 16));
}
