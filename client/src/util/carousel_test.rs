use super::*;

#[test]
fn next_wraps_to_first() {
    assert_eq!(next_index(0, 3), 1);
    assert_eq!(next_index(2, 3), 0);
}

#[test]
fn prev_wraps_to_last() {
    assert_eq!(prev_index(1, 3), 0);
    assert_eq!(prev_index(0, 3), 2);
}

#[test]
fn empty_carousel_stays_at_zero() {
    assert_eq!(next_index(0, 0), 0);
    assert_eq!(prev_index(0, 0), 0);
}

#[test]
fn single_image_never_moves() {
    assert_eq!(next_index(0, 1), 0);
    assert_eq!(prev_index(0, 1), 0);
}

#[test]
fn key_action_maps_arrows_and_escape() {
    assert_eq!(key_action("ArrowLeft"), Some(CarouselKey::Previous));
    assert_eq!(key_action("ArrowRight"), Some(CarouselKey::Next));
    assert_eq!(key_action("Escape"), Some(CarouselKey::Close));
    assert_eq!(key_action("Enter"), None);
}
