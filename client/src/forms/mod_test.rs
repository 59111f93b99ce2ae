use deck::{Position, Size};

use super::*;

#[test]
fn bounds_are_inclusive() {
    assert!(checked_size(0.0, 100.0, ValidationError::ElementSize).is_ok());
    assert!(checked_size(100.0, 0.0, ValidationError::ElementSize).is_ok());
}

#[test]
fn out_of_range_reports_given_error() {
    assert_eq!(checked_size(150.0, 10.0, ValidationError::TextBoxSize), Err(ValidationError::TextBoxSize));
    assert_eq!(checked_size(10.0, -0.5, ValidationError::ElementSize), Err(ValidationError::ElementSize));
}

#[test]
fn non_finite_is_rejected() {
    assert!(checked_size(f64::NAN, 10.0, ValidationError::ElementSize).is_err());
    assert!(checked_size(10.0, f64::INFINITY, ValidationError::ElementSize).is_err());
}

#[test]
fn patch_within_bounds_passes() {
    let patch = ElementPatch { position: Some(Position::new(0.0, 100.0)), size: Some(Size::new(40.0, 20.0)) };
    assert_eq!(checked_patch(patch), Ok(patch));
    assert!(checked_patch(ElementPatch::default()).is_ok());
}

#[test]
fn patch_out_of_bounds_is_rejected() {
    let position = ElementPatch { position: Some(Position::new(-40.0, 250.0)), size: None };
    assert_eq!(checked_patch(position), Err(ValidationError::ElementPosition));
    let size = ElementPatch { position: None, size: Some(Size::new(150.0, -10.0)) };
    assert_eq!(checked_patch(size), Err(ValidationError::ElementSize));
}
