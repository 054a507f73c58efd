/// The `---` delimiter that opens and closes a metadata header.
pub struct MetadataFence;

/// How a delimiter line was written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DelimiterSig {
    /// A plain `---` line.
    Plain,
    /// `---` preceded by a byte-order mark, meaning the file was not saved as plain UTF-8.
    ByteOrderMark,
}

impl MetadataFence {
    pub const DELIMITER: &'static str = "---";

    /// BOM artifacts seen in the wild: the decoded mark itself and its
    /// Latin-1 rendering when the bytes were misread.
    const BOM_PREFIXES: [&'static str; 2] = ["\u{feff}", "\u{ef}\u{bb}\u{bf}"];

    /// Recognises a delimiter line (terminator already stripped).
    pub fn sig(line: &str) -> Option<DelimiterSig> {
        let line = line.trim_end();
        if line == Self::DELIMITER {
            return Some(DelimiterSig::Plain);
        }
        Self::BOM_PREFIXES
            .iter()
            .filter_map(|bom| line.strip_prefix(bom))
            .any(|rest| rest == Self::DELIMITER)
            .then_some(DelimiterSig::ByteOrderMark)
    }
}
