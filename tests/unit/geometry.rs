use super::*;

const EPS: f64 = 1e-9;

#[test]
fn point_at_lies_on_the_circle() {
    let circles = [
        Circle::new((0.0, 0.0), 1.0),
        Circle::new((100.0, 100.0), 50.0),
        Circle::new((-3.5, 7.25), 0.125),
    ];
    let angles = [
        -FULL_TURN,
        -1.0,
        0.0,
        0.7,
        FRAC_PI_2,
        PI,
        FULL_TURN,
        FULL_TURN + 1.3,
        3.0 * FULL_TURN,
    ];
    for circle in circles {
        for angle in angles {
            let p = circle.point_at(angle);
            let dist = (p - circle.origin).hypot();
            assert!(
                (dist - circle.radius).abs() < EPS,
                "point at {angle} is {dist} from origin, expected {}",
                circle.radius
            );
        }
    }
}

#[test]
fn point_at_follows_clockwise_screen_convention() {
    let circle = Circle::new((0.0, 0.0), 1.0);

    let right = circle.point_at(0.0);
    assert!((right.x - 1.0).abs() < EPS && right.y.abs() < EPS);

    // Positive quarter turn lands below the center in y-down coordinates.
    let down = circle.point_at(FRAC_PI_2);
    assert!(down.x.abs() < EPS && (down.y - 1.0).abs() < EPS);
}

#[test]
fn point_at_is_periodic() {
    let circle = Circle::new((10.0, -4.0), 3.0);
    let a = circle.point_at(0.9);
    let b = circle.point_at(0.9 + FULL_TURN);
    assert!((a - b).hypot() < EPS);
}

#[test]
fn arc_sweep_and_wrap() {
    let circle = Circle::new((0.0, 0.0), 1.0);

    let half = Arc::new(circle, 0.0, PI);
    assert_eq!(half.sweep(), PI);
    assert!(!half.wraps());

    let wrapped = Arc::new(circle, 0.0, FULL_TURN + FRAC_PI_2);
    assert!(wrapped.wraps());

    let full = Arc::full_circle(circle);
    assert_eq!(full.start_angle, CIRCLE_MIN_ANGLE);
    assert_eq!(full.end_angle, CIRCLE_MAX_ANGLE);
    assert!(!full.wraps());
}

#[test]
fn initial_angle_points_at_the_top() {
    assert_eq!(CIRCLE_INITIAL_ANGLE, -FRAC_PI_2);
    let circle = Circle::new((0.0, 0.0), 1.0);
    let top = circle.point_at(CIRCLE_INITIAL_ANGLE);
    assert!(top.x.abs() < EPS && (top.y + 1.0).abs() < EPS);
}

#[test]
fn interval_rejects_bad_bounds() {
    assert!(Interval::new(1.0, 1.0, 1).is_err());
    assert!(Interval::new(2.0, 1.0, 1).is_err());
    assert!(Interval::new(0.0, 1.0, 0).is_err());
    assert!(Interval::new(f64::NAN, 1.0, 1).is_err());
    assert!(Interval::new(0.0, f64::INFINITY, 1).is_err());
}

#[test]
fn interval_maps_values_linearly() {
    let interval = Interval::new(0.0, 10.0, 1).unwrap();
    assert!((interval.angle_for(0.0) - 0.0).abs() < EPS);
    assert!((interval.angle_for(5.0) - PI).abs() < EPS);
    assert!((interval.angle_for(10.0) - FULL_TURN).abs() < EPS);
}

#[test]
fn multi_round_interval_exceeds_a_full_turn() {
    let interval = Interval::new(0.0, 1.0, 2).unwrap();
    assert!((interval.angle_for(1.0) - 2.0 * FULL_TURN).abs() < EPS);
    // Three quarters of a two-round slider has wrapped past 2π.
    assert!(interval.angle_for(0.75) > FULL_TURN);
}

#[test]
fn value_for_inverts_angle_for() {
    let interval = Interval::new(-5.0, 20.0, 3).unwrap();
    for value in [-5.0, -1.25, 0.0, 7.5, 20.0] {
        let roundtrip = interval.value_for(interval.angle_for(value));
        assert!((roundtrip - value).abs() < 1e-9);
    }
}
