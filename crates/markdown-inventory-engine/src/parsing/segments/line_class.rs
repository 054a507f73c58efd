use crate::parsing::rope::LineRef;

use super::kinds::{CodeFence, DelimiterSig, FenceSig, Heading, HeadingSig, MetadataFence};

/// Local facts about one line, computed without reference to its neighbours.
///
/// Phase 1 of segmentation; the [`SegmentBuilder`](super::SegmentBuilder)
/// decides what the facts mean given where the pass currently is.
#[derive(Debug, Clone)]
pub struct LineClass {
    /// 1-based line number.
    pub number: usize,
    pub delimiter: Option<DelimiterSig>,
    pub fence: Option<FenceSig>,
    pub heading: Option<HeadingSig>,
}

impl LineClass {
    pub fn of(lr: &LineRef) -> Self {
        let text = lr.content();
        Self {
            number: lr.number,
            delimiter: MetadataFence::sig(text),
            fence: CodeFence::sig(text),
            heading: Heading::sig(text),
        }
    }
}
