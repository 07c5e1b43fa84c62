//! Image carousel index arithmetic and keyboard mapping.

#[cfg(test)]
#[path = "carousel_test.rs"]
mod carousel_test;

/// Intent of a key press while the listing detail is open.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CarouselKey {
    Previous,
    Next,
    Close,
}

#[must_use]
pub fn key_action(key: &str) -> Option<CarouselKey> {
    match key {
        "ArrowLeft" => Some(CarouselKey::Previous),
        "ArrowRight" => Some(CarouselKey::Next),
        "Escape" => Some(CarouselKey::Close),
        _ => None,
    }
}

/// Next index, wrapping from the last image to the first.
#[must_use]
pub fn next_index(current: usize, len: usize) -> usize {
    if len == 0 { 0 } else { (current + 1) % len }
}

/// Previous index, wrapping from the first image to the last.
#[must_use]
pub fn prev_index(current: usize, len: usize) -> usize {
    match len {
        0 => 0,
        _ if current == 0 || current >= len => len - 1,
        _ => current - 1,
    }
}
