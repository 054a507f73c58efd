pub mod code_fence;
pub mod heading;
pub mod metadata_fence;

pub use code_fence::{CodeFence, FenceSig};
pub use heading::{Heading, HeadingSig};
pub use metadata_fence::{DelimiterSig, MetadataFence};
