use super::*;
use crate::utils::DefaultRandom;

#[test]
fn can_validate_default_bounding_box() {
    let bounding_box = BoundingBox::default();

    assert!(!bounding_box.is_valid());
}

#[test]
fn can_grow_bounding_box() {
    let mut bounding_box = BoundingBox::default();

    bounding_box.include(3, -4);
    assert!(bounding_box.is_valid());
    assert_eq!(bounding_box, BoundingBox { x_min: 3, x_max: 3, y_min: -4, y_max: -4 });

    bounding_box.include(-1, 7);
    assert_eq!(bounding_box, BoundingBox { x_min: -1, x_max: 3, y_min: -4, y_max: 7 });

    bounding_box.include(0, 0);
    assert_eq!(bounding_box, BoundingBox { x_min: -1, x_max: 3, y_min: -4, y_max: 7 });
}

#[test]
fn can_generate_random_location_list() {
    let random = DefaultRandom::new_with_seed(42);

    let locations = Location::random_list(5, 10, &random);

    assert_eq!(locations.len(), 5);
    locations.iter().enumerate().for_each(|(idx, location)| {
        assert_eq!(location.name, idx.to_string());
        assert!((-10..=10).contains(&location.x));
        assert!((-10..=10).contains(&location.y));
    });
}

#[test]
#[should_panic]
fn cannot_generate_empty_location_list() {
    let random = DefaultRandom::new_with_seed(42);

    let _ = Location::random_list(0, 10, &random);
}

#[test]
fn can_format_location() {
    let location = Location::new(1, -2, "depot");

    assert_eq!(location.to_string(), "depot:(1,-2)");
}
