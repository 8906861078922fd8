use super::*;

#[test]
fn frame_range_contains_boundaries() {
    let r = FrameRange::new(FrameIndex(2), FrameIndex(5)).unwrap();
    assert!(!r.contains(FrameIndex(1)));
    assert!(r.contains(FrameIndex(2)));
    assert!(r.contains(FrameIndex(4)));
    assert!(!r.contains(FrameIndex(5)));
    assert!(FrameRange::new(FrameIndex(3), FrameIndex(2)).is_err());
}

#[test]
fn single_frame_range_spans_one_frame() {
    let r = FrameRange::single(FrameIndex(7));
    assert_eq!(r, FrameRange::new(FrameIndex(7), FrameIndex(8)).unwrap());
    assert!(r.contains(FrameIndex(7)));
    assert!(!r.contains(FrameIndex(8)));
}

#[test]
fn fps_rejects_non_positive_and_non_finite() {
    assert!(Fps::new(0.0).is_err());
    assert!(Fps::new(-24.0).is_err());
    assert!(Fps::new(f64::NAN).is_err());
    assert!(Fps::new(f64::INFINITY).is_err());
    assert_eq!(Fps::new(29.97).unwrap().as_f64(), 29.97);
}

#[test]
fn canvas_center_and_validation() {
    assert_eq!(Canvas::new(1880, 920).unwrap().center(), (940.0, 460.0));
    assert_eq!(Canvas::new(101, 51).unwrap().center(), (50.5, 25.5));
    assert!(Canvas::new(0, 10).is_err());
    assert!(Canvas::new(10, 0).is_err());
}
