use std::fmt;

/// Category of a change, taken from the marker at the start of a PR title
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoteKind {
    Breaking,
    Feature,
    Bug,
    Documentation,
    Proposal,
    Other,
    Uncategorized,
}

/// Title markers and the kind each one denotes. Emoji may carry a trailing
/// variation selector, so `⚠` also matches `⚠️`.
const KIND_MARKERS: &[(&str, NoteKind)] = &[
    (":warning:", NoteKind::Breaking),
    ("⚠", NoteKind::Breaking),
    (":sparkles:", NoteKind::Feature),
    ("✨", NoteKind::Feature),
    (":bug:", NoteKind::Bug),
    ("🐛", NoteKind::Bug),
    (":book:", NoteKind::Documentation),
    ("📖", NoteKind::Documentation),
    (":memo:", NoteKind::Proposal),
    ("📝", NoteKind::Proposal),
    (":seedling:", NoteKind::Other),
    ("🌱", NoteKind::Other),
    (":running:", NoteKind::Other),
    ("🏃", NoteKind::Other),
];

const VARIATION_SELECTOR: char = '\u{FE0F}';

impl NoteKind {
    /// Split a title into its kind and the remaining text without the marker
    pub fn split_title(title: &str) -> (NoteKind, &str) {
        for (marker, kind) in KIND_MARKERS {
            if let Some(rest) = title.strip_prefix(*marker) {
                let rest = rest.trim_start_matches(VARIATION_SELECTOR).trim_start();
                return (*kind, rest);
            }
        }
        (NoteKind::Uncategorized, title)
    }
}

impl fmt::Display for NoteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NoteKind::Breaking => "breaking change",
            NoteKind::Feature => "feature",
            NoteKind::Bug => "bug fix",
            NoteKind::Documentation => "documentation",
            NoteKind::Proposal => "proposal",
            NoteKind::Other => "other",
            NoteKind::Uncategorized => "uncategorized",
        };
        write!(f, "{}", name)
    }
}

/// A single formatted release-notes line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseNote {
    pub kind: NoteKind,
    pub line: String,
}

impl ReleaseNote {
    pub fn new(kind: NoteKind, line: impl Into<String>) -> Self {
        ReleaseNote {
            kind,
            line: line.into(),
        }
    }
}

impl fmt::Display for ReleaseNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.line)
    }
}
