use std::borrow::Cow;

use xi_rope::Rope;

/// The whole rope as one contiguous string, borrowed when the rope is a single leaf.
pub fn full_text(rope: &Rope) -> Cow<'_, str> {
    rope.slice_to_cow(..)
}
