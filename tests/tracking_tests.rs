//! Integrationstests für Stützpunkt-Set und Positions-Tracker:
//! - Wertetabelle (Endpunkte, Monotonie)
//! - Zyklische Index-Normierung
//! - Lokale Suche (Kurzschluss, gerichteter Abstieg)

use curve_slider::{CurveDefect, CurveSampleSet, PositionTracker, SliderError};
use glam::Vec2;

/// 5 kollineare Punkte im Abstand von 10 Einheiten auf der x-Achse.
fn line_of_five() -> Vec<Vec2> {
    (0..5).map(|i| Vec2::new(i as f32 * 10.0, 0.0)).collect()
}

/// Halbkreis mit Radius 100 von (100, 0) nach (-100, 0).
fn semicircle(count: usize) -> Vec<Vec2> {
    (0..count)
        .map(|i| {
            let angle = std::f32::consts::PI * i as f32 / (count - 1) as f32;
            Vec2::from_angle(angle) * 100.0
        })
        .collect()
}

fn tracker_for(points: Vec<Vec2>) -> PositionTracker {
    let mut tracker = PositionTracker::new();
    tracker
        .install(CurveSampleSet::new(points).expect("Kurve sollte gültig sein"))
        .expect("Installation sollte gelingen");
    tracker
}

#[test]
fn test_values_have_exact_endpoints_and_are_monotone() {
    for n in [2usize, 3, 4, 5, 17, 256, 4096] {
        let points = (0..n).map(|i| Vec2::new(i as f32, 0.0)).collect();
        let set = CurveSampleSet::new(points).expect("Kurve sollte gültig sein");

        assert_eq!(set.value_at(0), Ok(0.0));
        assert_eq!(set.value_at(n - 1), Ok(1.0));
        assert!(
            set.values().windows(2).all(|w| w[0] <= w[1]),
            "Werte nicht monoton für n = {n}"
        );
        assert!(set.values().iter().all(|v| (0.0..=1.0).contains(v)));
    }
}

#[test]
fn test_wrap_index_always_in_range() {
    let set = CurveSampleSet::new(line_of_five()).expect("Kurve sollte gültig sein");
    for base in -12isize..12 {
        for offset in -23isize..23 {
            assert!(set.wrap_index(base, offset) < set.len());
        }
    }
}

#[test]
fn test_wrap_index_four_points() {
    let points = (0..4).map(|i| Vec2::new(i as f32, 0.0)).collect();
    let set = CurveSampleSet::new(points).expect("Kurve sollte gültig sein");

    assert_eq!(set.wrap_index(0, -1), 3);
    assert_eq!(set.wrap_index(3, 1), 0);
}

#[test]
fn test_short_circuit_keeps_index() {
    let mut tracker = tracker_for(line_of_five());
    tracker.place_at(2).expect("Index 2 sollte gültig sein");
    tracker
        .on_drag_begin(Vec2::new(20.0, 0.0))
        .expect("Tracker ist konfiguriert");

    tracker
        .on_drag_delta(Vec2::new(0.1, 0.0))
        .expect("Tracker ist konfiguriert");

    assert_eq!(tracker.current_index(), Ok(2));
}

#[test]
fn test_zero_delta_at_local_minimum_is_idempotent() {
    let mut tracker = tracker_for(semicircle(20));
    tracker.place_at(7).expect("Index 7 sollte gültig sein");
    let before = tracker.current_value().expect("Tracker ist konfiguriert");

    for _ in 0..3 {
        let value = tracker
            .on_drag_delta(Vec2::ZERO)
            .expect("Tracker ist konfiguriert");
        assert_eq!(value, before);
        assert_eq!(tracker.current_index(), Ok(7));
    }
}

#[test]
fn test_descent_lands_on_target_sample() {
    let mut tracker = tracker_for(line_of_five());
    tracker.on_drag_begin(Vec2::ZERO).expect("Tracker ist konfiguriert");

    let value = tracker
        .on_drag_delta(Vec2::new(30.0, 0.0))
        .expect("Tracker ist konfiguriert");

    assert_eq!(tracker.current_index(), Ok(3));
    let expected = tracker
        .samples()
        .and_then(|s| s.value_at(3))
        .expect("Index 3 sollte gültig sein");
    assert_eq!(value, expected);
}

#[test]
fn test_following_the_arc_step_by_step() {
    let points = semicircle(50);
    let mut tracker = tracker_for(points.clone());
    tracker.on_drag_begin(points[0]).expect("Tracker ist konfiguriert");

    let mut last_value = 0.0;
    for i in 0..points.len() - 1 {
        let value = tracker
            .on_drag_delta(points[i + 1] - points[i])
            .expect("Tracker ist konfiguriert");
        assert_eq!(tracker.current_index(), Ok(i + 1), "Schritt {i}");
        assert!(value > last_value, "Wert fällt in Schritt {i}");
        last_value = value;
    }

    assert_eq!(last_value, 1.0);
    assert_eq!(tracker.handle_position(), Ok(points[49]));
}

#[test]
fn test_distant_jump_stays_at_local_minimum() {
    // Haarnadel: hin auf y = 0, zurück auf y = 20
    let mut points: Vec<Vec2> = (0..6).map(|i| Vec2::new(i as f32 * 10.0, 0.0)).collect();
    points.extend((0..6).map(|i| Vec2::new(50.0 - i as f32 * 10.0, 20.0)));
    let mut tracker = tracker_for(points);
    tracker.place_at(2).expect("Index 2 sollte gültig sein");

    // Ziel liegt 1 Einheit neben Index 9, der aktuelle Punkt ist aber lokal am nächsten
    tracker
        .on_drag_delta(Vec2::new(0.0, 21.0))
        .expect("Tracker ist konfiguriert");

    assert_eq!(tracker.current_index(), Ok(2));
}

#[test]
fn test_initialize_position_from_any_state() {
    let mut tracker = tracker_for(semicircle(30));
    tracker.place_at(22).expect("Index 22 sollte gültig sein");
    tracker
        .on_drag_delta(Vec2::new(-5.0, 3.0))
        .expect("Tracker ist konfiguriert");

    assert_eq!(tracker.initialize_position(), Ok(0.0));
    assert_eq!(tracker.current_index(), Ok(0));
}

#[test]
fn test_invalid_curve_is_rejected() {
    assert_eq!(
        CurveSampleSet::new(Vec::new()),
        Err(SliderError::InvalidCurve(CurveDefect::TooFewPoints { count: 0 }))
    );
    assert_eq!(
        CurveSampleSet::new(vec![Vec2::new(3.0, 4.0)]),
        Err(SliderError::InvalidCurve(CurveDefect::TooFewPoints { count: 1 }))
    );
}

#[test]
fn test_non_finite_point_is_rejected() {
    let mut points = line_of_five();
    points[2] = Vec2::new(f32::NAN, 0.0);

    assert_eq!(
        CurveSampleSet::new(points),
        Err(SliderError::InvalidCurve(CurveDefect::NonFinitePoint { index: 2 }))
    );
}

#[test]
fn test_two_point_curve() {
    let mut tracker = tracker_for(vec![Vec2::ZERO, Vec2::new(10.0, 0.0)]);

    let value = tracker
        .on_drag_delta(Vec2::new(9.0, 0.0))
        .expect("Tracker ist konfiguriert");

    assert_eq!(value, 1.0);
    assert_eq!(tracker.current_index(), Ok(1));
}
