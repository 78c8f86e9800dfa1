use lineate::{
    DispatchError, Dispatcher, Flattener, SegmentCollector, TraceCmd, Vec2,
};

fn dispatcher() -> Dispatcher<SegmentCollector> {
    Dispatcher::new(SegmentCollector::default())
}

#[test]
fn move_run_emits_one_segment_per_pair() {
    let mut d = dispatcher();
    let cur = d
        .dispatch('M', &[10.0, 20.0, 30.0, 40.0], 0, Vec2::new(0.0, 0.0))
        .unwrap();
    let segs = &d.sink().segments;
    assert_eq!(segs.len(), 2);
    assert_eq!(segs[0].from, Vec2::new(0.0, 0.0));
    assert_eq!(segs[0].to, Vec2::new(10.0, 20.0));
    assert_eq!(segs[0].cmd, TraceCmd::Move { x: 10.0, y: 20.0 });
    assert_eq!(segs[1].from, Vec2::new(10.0, 20.0));
    assert_eq!(segs[1].to, Vec2::new(30.0, 40.0));
    assert_eq!(cur, Vec2::new(30.0, 40.0));
}

#[test]
fn line_advances_the_cursor() {
    let mut d = dispatcher();
    let cur = d
        .dispatch('L', &[50.0, 60.0], 3, Vec2::new(1.0, 2.0))
        .unwrap();
    let segs = &d.sink().segments;
    assert_eq!(segs.len(), 1);
    assert_eq!(segs[0].cmd, TraceCmd::Line { x: 50.0, y: 60.0 });
    assert_eq!(segs[0].index, 3);
    assert_eq!(cur, Vec2::new(50.0, 60.0));
}

#[test]
fn horizontal_holds_y_for_every_scalar() {
    let mut d = dispatcher();
    let cur = d
        .dispatch('H', &[50.0, 60.0], 0, Vec2::new(10.0, 20.0))
        .unwrap();
    let segs = &d.sink().segments;
    assert_eq!(segs.len(), 2);
    assert_eq!(segs[0].from, Vec2::new(10.0, 20.0));
    assert_eq!(segs[0].to, Vec2::new(50.0, 20.0));
    assert_eq!(segs[0].cmd, TraceCmd::Horizontal { x: 50.0 });
    assert_eq!(segs[1].to, Vec2::new(60.0, 20.0));
    assert_eq!(cur, Vec2::new(60.0, 20.0));
}

#[test]
fn vertical_holds_x_for_every_scalar() {
    let mut d = dispatcher();
    let cur = d
        .dispatch('V', &[5.0], 0, Vec2::new(10.0, 20.0))
        .unwrap();
    let segs = &d.sink().segments;
    assert_eq!(segs.len(), 1);
    assert_eq!(segs[0].to, Vec2::new(10.0, 5.0));
    assert_eq!(segs[0].cmd, TraceCmd::Vertical { y: 5.0 });
    assert_eq!(cur, Vec2::new(10.0, 5.0));
}

#[test]
fn close_is_a_zero_length_marker() {
    let mut d = dispatcher();
    let cur = d.dispatch('Z', &[], 2, Vec2::new(5.0, 5.0)).unwrap();
    let segs = &d.sink().segments;
    assert_eq!(segs.len(), 1);
    assert_eq!(segs[0].from, Vec2::new(5.0, 5.0));
    assert_eq!(segs[0].to, Vec2::new(5.0, 5.0));
    assert_eq!(segs[0].cmd, TraceCmd::Close);
    assert_eq!(cur, Vec2::new(5.0, 5.0));
}

#[test]
fn cubic_curve_reaches_its_endpoint_exactly() {
    let mut d = dispatcher();
    let cur = d
        .dispatch(
            'C',
            &[0.0, 100.0, 100.0, 100.0, 100.0, 0.0],
            0,
            Vec2::new(0.0, 0.0),
        )
        .unwrap();
    let segs = &d.sink().segments;
    assert!(!segs.is_empty());
    assert_eq!(segs[0].from, Vec2::new(0.0, 0.0));
    assert_eq!(segs[segs.len() - 1].to, Vec2::new(100.0, 0.0));
    assert_eq!(cur, Vec2::new(100.0, 0.0));
}

#[test]
fn multi_triple_cubic_chains_through_each_endpoint() {
    let mut d = dispatcher();
    let args = [
        0.0, 50.0, 50.0, 50.0, 50.0, 0.0, // first curve ends at (50, 0)
        50.0, -50.0, 100.0, -50.0, 100.0, 0.0,
    ];
    let cur = d.dispatch('C', &args, 0, Vec2::new(0.0, 0.0)).unwrap();
    assert_eq!(cur, Vec2::new(100.0, 0.0));
    let segs = &d.sink().segments;
    assert!(segs.iter().any(|s| s.to == Vec2::new(50.0, 0.0)));
    assert_eq!(segs[segs.len() - 1].to, Vec2::new(100.0, 0.0));
}

#[test]
fn quadratic_elevation_reuses_the_control_point() {
    let mut d = dispatcher();
    let cur = d
        .dispatch('Q', &[50.0, 100.0, 100.0, 0.0], 1, Vec2::new(0.0, 0.0))
        .unwrap();
    assert_eq!(cur, Vec2::new(100.0, 0.0));

    // The dispatcher degree-elevates by using the quadratic control
    // point as both cubic controls, so its output must match flattening
    // that cubic directly.
    let mut f = Flattener::new(SegmentCollector::default());
    f.flatten(0.0, 0.0, 50.0, 100.0, 50.0, 100.0, 100.0, 0.0, 1);
    assert_eq!(d.sink().segments, f.sink().segments);
}

#[test]
fn unsupported_letter_fails_without_output() {
    let mut d = dispatcher();
    let err = d
        .dispatch('A', &[1.0, 2.0], 0, Vec2::new(0.0, 0.0))
        .unwrap_err();
    assert_eq!(err, DispatchError::Unsupported('A'));
    assert!(err.to_string().contains('A'));
    assert!(d.sink().segments.is_empty());
}

#[test]
fn relative_letters_are_not_part_of_the_normalized_set() {
    let mut d = dispatcher();
    let err = d
        .dispatch('z', &[], 0, Vec2::new(0.0, 0.0))
        .unwrap_err();
    assert_eq!(err, DispatchError::Unsupported('z'));
}

#[test]
fn ragged_trailing_argument_is_ignored() {
    let mut d = dispatcher();
    let cur = d
        .dispatch('L', &[10.0, 10.0, 99.0], 0, Vec2::new(0.0, 0.0))
        .unwrap();
    assert_eq!(d.sink().segments.len(), 1);
    assert_eq!(cur, Vec2::new(10.0, 10.0));
}

#[test]
fn path_data_is_rebuilt_from_descriptors() {
    let mut d = dispatcher();
    let cur = d.dispatch('M', &[10.0, 20.0], 0, Vec2::new(0.0, 0.0)).unwrap();
    let cur = d.dispatch('L', &[30.0, 40.0], 1, cur).unwrap();
    d.dispatch('Z', &[], 2, cur).unwrap();
    let data = lineate::svg::to_path_data(&d.sink().segments);
    assert_eq!(data, "M 10 20 L 30 40 Z");
}

#[test]
fn segments_round_trip_through_json() {
    let mut d = dispatcher();
    let cur = d.dispatch('M', &[1.0, 2.0], 0, Vec2::new(0.0, 0.0)).unwrap();
    d.dispatch('C', &[0.0, 100.0, 100.0, 100.0, 100.0, 0.0], 1, cur)
        .unwrap();
    let segs = d.into_sink().segments;
    let v = lineate::json::segments_to_json(&segs).unwrap();
    let back = lineate::json::segments_from_json(v).unwrap();
    assert_eq!(back, segs);
}

#[test]
fn tolerances_override_selectively_from_json() {
    let v = serde_json::json!({ "angle_tolerance": 0.2, "recursion_limit": 8 });
    let tol = lineate::json::tolerances_from_json(v).unwrap();
    assert_eq!(tol.angle_tolerance, 0.2);
    assert_eq!(tol.recursion_limit, 8);
    assert_eq!(tol.approximation_scale, 1.0);
    assert_eq!(tol.cusp_limit, 0.0);
}
