pub mod lines;
pub mod slice;
pub mod span;

pub use lines::{LineRef, line_at, lines_with_spans};
pub use slice::full_text;
pub use span::Span;
