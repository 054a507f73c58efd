/// Heading lines as far as intro detection cares about them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingSig {
    /// `# Title`
    H1,
    /// `##`..`####` or `<h2`..`<h4`, carrying the depth.
    Subheading { level: u8 },
}

pub struct Heading;

impl Heading {
    pub const H1_PREFIX: &'static str = "# ";

    const SUBHEADING_PREFIXES: [(&'static str, u8); 6] = [
        ("## ", 2),
        ("### ", 3),
        ("#### ", 4),
        ("<h2", 2),
        ("<h3", 3),
        ("<h4", 4),
    ];

    pub fn sig(line: &str) -> Option<HeadingSig> {
        if line.starts_with(Self::H1_PREFIX) {
            return Some(HeadingSig::H1);
        }
        Self::SUBHEADING_PREFIXES
            .iter()
            .find(|(prefix, _)| line.starts_with(prefix))
            .map(|&(_, level)| HeadingSig::Subheading { level })
    }
}
