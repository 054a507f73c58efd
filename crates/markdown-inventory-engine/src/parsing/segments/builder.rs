use std::path::{Path, PathBuf};

use super::{
    line_class::LineClass,
    kinds::{DelimiterSig, FenceSig, HeadingSig},
    types::{Anomaly, CodeBlockRange, LineRange, Segments},
};

/// Where the forward pass currently is.
///
/// Fence tracking is orthogonal to this state: code blocks are recorded in
/// every body state, and while a fence is open the state is frozen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SegmentState {
    /// Nothing seen yet; only line 1 may open a metadata header.
    AwaitingMetadata,
    /// Inside the metadata header that opened on line `start`.
    InMetadata { start: usize },
    /// Body text before the first H1.
    ScanningBody,
    /// Inside the intro that opened at the heading on line `start`.
    InIntro { start: usize },
    /// Intro captured (or never possible); headings are no longer tracked.
    Done,
}

#[derive(Debug, Clone)]
struct OpenFence {
    /// First line inside the fence.
    start: usize,
    language: Option<String>,
}

/// Reduces classified lines into [`Segments`].
pub struct SegmentBuilder {
    path: PathBuf,
    state: SegmentState,
    fence: Option<OpenFence>,
    last_line: usize,
    out: Segments,
}

impl SegmentBuilder {
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            state: SegmentState::AwaitingMetadata,
            fence: None,
            last_line: 0,
            out: Segments::default(),
        }
    }

    pub fn push(&mut self, c: &LineClass) {
        self.last_line = c.number;

        match self.state {
            SegmentState::AwaitingMetadata => {
                if let Some(sig) = c.delimiter {
                    self.check_bom(sig, c.number);
                    self.state = SegmentState::InMetadata { start: c.number };
                    return;
                }
                self.state = SegmentState::ScanningBody;
            }
            SegmentState::InMetadata { start } => {
                if let Some(sig) = c.delimiter {
                    self.check_bom(sig, c.number);
                    self.out
                        .metadata
                        .push(LineRange::new(start + 1, c.number - 1));
                    self.state = SegmentState::ScanningBody;
                }
                return;
            }
            _ => {}
        }

        // Fences come before headings: code may contain `# comments`.
        if let Some(sig) = &c.fence {
            self.toggle_fence(sig, c.number);
            return;
        }
        if self.fence.is_some() {
            return;
        }

        if let Some(heading) = c.heading {
            self.push_heading(heading, c.number);
        }
    }

    pub fn finish(mut self) -> Segments {
        match self.state {
            SegmentState::InMetadata { start } => {
                self.report(Anomaly::UnclosedMetadata { start });
            }
            SegmentState::ScanningBody => self.report(Anomaly::MissingH1),
            SegmentState::InIntro { start } => {
                self.out
                    .intro
                    .push(LineRange::new(start + 1, self.last_line));
            }
            SegmentState::AwaitingMetadata | SegmentState::Done => {}
        }

        if let Some(open) = self.fence.take() {
            self.report(Anomaly::UnclosedFence { start: open.start });
        }

        self.out
    }

    fn toggle_fence(&mut self, sig: &FenceSig, line: usize) {
        match self.fence.take() {
            None => {
                self.fence = Some(OpenFence {
                    start: line + 1,
                    language: sig.language.clone(),
                });
            }
            Some(open) => {
                self.out.code_blocks.push(CodeBlockRange {
                    lines: LineRange::new(open.start, line - 1),
                    language: open.language,
                });
            }
        }
    }

    fn push_heading(&mut self, heading: HeadingSig, line: usize) {
        match (self.state, heading) {
            (SegmentState::ScanningBody, HeadingSig::H1) => {
                self.state = SegmentState::InIntro { start: line };
            }
            (SegmentState::ScanningBody, HeadingSig::Subheading { .. }) => {
                self.report(Anomaly::SubheadingBeforeH1 { line });
                self.state = SegmentState::InIntro { start: line };
            }
            (SegmentState::InIntro { .. }, HeadingSig::H1) => {
                self.report(Anomaly::AdditionalH1 { line });
            }
            (SegmentState::InIntro { start }, HeadingSig::Subheading { level }) => {
                if level > 2 {
                    self.report(Anomaly::DeepSubheadingAfterH1 { line, level });
                }
                self.out.intro.push(LineRange::new(start + 1, line - 1));
                self.state = SegmentState::Done;
            }
            _ => {}
        }
    }

    fn check_bom(&mut self, sig: DelimiterSig, line: usize) {
        if sig == DelimiterSig::ByteOrderMark {
            self.report(Anomaly::ByteOrderMark { line });
        }
    }

    fn report(&mut self, anomaly: Anomaly) {
        if anomaly.is_warning() {
            log::warn!("{anomaly}: {}", self.path.display());
        } else {
            log::debug!("{anomaly}: {}", self.path.display());
        }
        self.out.anomalies.push(anomaly);
    }
}
