use crate::domain::pull_request::AREA_LABEL_PREFIX;
use crate::domain::{NoteKind, PullRequest, ReleaseNote};
use regex::Regex;
use std::collections::HashMap;

/// Turns merged pull requests into release-note lines
pub struct PrEntryProcessor {
    prefix_area_label: bool,
    area_labels: HashMap<String, String>,
    cherry_pick: Option<Regex>,
}

impl PrEntryProcessor {
    /// Create a processor
    ///
    /// # Arguments
    /// * `prefix_area_label` - Prefix lines with `[<area>] ` when the PR has area labels
    /// * `area_labels` - Display names for labels such as `area/machinepool`
    pub fn new(prefix_area_label: bool, area_labels: HashMap<String, String>) -> Self {
        PrEntryProcessor {
            prefix_area_label,
            area_labels,
            cherry_pick: Regex::new(r"^\[release-\d+\.\d+\]\s*").ok(),
        }
    }

    pub fn process(&self, pr: &PullRequest) -> ReleaseNote {
        let mut title = pr.title.trim();
        if let Some(re) = &self.cherry_pick {
            if let Some(m) = re.find(title) {
                title = &title[m.end()..];
            }
        }

        let (kind, text) = NoteKind::split_title(title);
        let text = text.trim();

        let line = match self.area_prefix(pr) {
            Some(area) => format!("[{}] {} (#{})", area, text, pr.number),
            None => format!("{} (#{})", text, pr.number),
        };

        ReleaseNote::new(kind, line)
    }

    fn area_prefix(&self, pr: &PullRequest) -> Option<String> {
        if !self.prefix_area_label {
            return None;
        }

        let areas: Vec<&str> = pr
            .area_labels()
            .map(|label| match self.area_labels.get(label) {
                Some(display) => display.as_str(),
                None => label.strip_prefix(AREA_LABEL_PREFIX).unwrap_or(label),
            })
            .collect();

        if areas.is_empty() {
            None
        } else {
            Some(areas.join("/"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn processor(prefix: bool) -> PrEntryProcessor {
        let labels = HashMap::from([("area/machinepool".to_string(), "MachinePool".to_string())]);
        PrEntryProcessor::new(prefix, labels)
    }

    #[test]
    fn test_plain_title() {
        let note = processor(true).process(&PullRequest::new(42, "Update docs"));
        assert_eq!(note.line, "Update docs (#42)");
        assert_eq!(note.kind, NoteKind::Uncategorized);
    }

    #[test]
    fn test_area_prefix_uses_display_name() {
        let pr = PullRequest::new(7, "🐛 Fix scaling").with_labels(["area/machinepool"]);
        let note = processor(true).process(&pr);
        assert_eq!(note.line, "[MachinePool] Fix scaling (#7)");
        assert_eq!(note.kind, NoteKind::Bug);
    }

    #[test]
    fn test_area_prefix_falls_back_to_label_name() {
        let pr = PullRequest::new(8, "✨ New command")
            .with_labels(["kind/feature", "area/clusterctl"]);
        let note = processor(true).process(&pr);
        assert_eq!(note.line, "[clusterctl] New command (#8)");
    }

    #[test]
    fn test_multiple_areas_are_joined() {
        let pr = PullRequest::new(9, "Refactor")
            .with_labels(["area/clusterctl", "area/machinepool"]);
        let note = processor(true).process(&pr);
        assert_eq!(note.line, "[clusterctl/MachinePool] Refactor (#9)");
    }

    #[test]
    fn test_area_prefix_disabled() {
        let pr = PullRequest::new(10, "🌱 Bump go").with_labels(["area/dependency"]);
        let note = processor(false).process(&pr);
        assert_eq!(note.line, "Bump go (#10)");
        assert_eq!(note.kind, NoteKind::Other);
    }

    #[test]
    fn test_cherry_pick_marker_is_removed() {
        let pr = PullRequest::new(11, "[release-1.6] 🐛 Fix webhook");
        let note = processor(true).process(&pr);
        assert_eq!(note.line, "Fix webhook (#11)");
        assert_eq!(note.kind, NoteKind::Bug);
    }

    #[test]
    fn test_whitespace_is_trimmed() {
        let pr = PullRequest::new(12, "  ⚠️  Drop old API  ");
        let note = processor(true).process(&pr);
        assert_eq!(note.line, "Drop old API (#12)");
        assert_eq!(note.kind, NoteKind::Breaking);
    }
}
