/// A byte range `[start, end)` into the document rope.
///
/// Lines are tracked as spans so that scanner match offsets can be mapped back
/// onto the line that holds them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Span {
    /// Inclusive start byte offset.
    pub start: usize,
    /// Exclusive end byte offset.
    pub end: usize,
}
