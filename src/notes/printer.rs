use crate::domain::{NoteKind, ReleaseNote};

const DEPRECATION_BLOCK: &str = "## :warning: Deprecation Warning

REPLACE ME: A couple sentences describing the deprecation, including links to docs.

* [GitHub issue #REPLACE ME](REPLACE ME)
";

const KUBERNETES_SUPPORT_BLOCK: &str = "## 👌 Kubernetes version support

- Management Cluster: v1.**X**.x -> v1.**X**.x
- Workload Cluster: v1.**X**.x -> v1.**X**.x

[More information about version support can be found here](https://cluster-api.sigs.k8s.io/reference/versions.html)
";

/// Collects release-note lines and renders the final document
pub struct ReleaseNotesPrinter {
    repo: String,
    from_value: String,
    pub is_pre_release: bool,
    pub print_deprecation: bool,
    pub print_kubernetes_support: bool,
    notes: Vec<ReleaseNote>,
}

impl ReleaseNotesPrinter {
    /// Create a printer with all optional blocks turned off
    pub fn new(repo: impl Into<String>, from_value: impl Into<String>) -> Self {
        ReleaseNotesPrinter {
            repo: repo.into(),
            from_value: from_value.into(),
            is_pre_release: false,
            print_deprecation: false,
            print_kubernetes_support: false,
            notes: Vec::new(),
        }
    }

    pub fn add(&mut self, note: ReleaseNote) {
        self.notes.push(note);
    }

    /// Render the document. Notes keep the order they were added in.
    pub fn print(&self) -> String {
        let mut out = String::new();

        if self.is_pre_release {
            out.push_str(&format!(
                "🚨 This is a RELEASE CANDIDATE. Use it only for testing purposes. \
                 If you find any bugs, file an [issue](https://github.com/{}/issues/new).\n\n",
                self.repo
            ));
        }

        if self.print_deprecation {
            out.push_str(DEPRECATION_BLOCK);
            out.push('\n');
        }

        if self.print_kubernetes_support {
            out.push_str(KUBERNETES_SUPPORT_BLOCK);
            out.push('\n');
        }

        out.push_str(&format!("## Changes since {}\n", self.from_value));
        out.push_str(&self.overview());
        out.push('\n');

        for note in &self.notes {
            out.push_str(&format!("- {}\n", note));
        }

        out.push_str("\n_Thanks to all our contributors!_ 😊\n");
        out
    }

    fn overview(&self) -> String {
        let count = |kind: NoteKind| self.notes.iter().filter(|n| n.kind == kind).count();

        let mut out = String::from("## :chart_with_upwards_trend: Overview\n");
        out.push_str(&format!(
            "- {}\n",
            plural(self.notes.len(), "new commit merged", "new commits merged")
        ));

        let highlights = [
            (NoteKind::Breaking, "breaking change :warning:", "breaking changes :warning:"),
            (NoteKind::Feature, "feature addition ✨", "feature additions ✨"),
            (NoteKind::Bug, "bug fixed 🐛", "bugs fixed 🐛"),
        ];
        for (kind, singular, many) in highlights {
            let n = count(kind);
            if n > 0 {
                out.push_str(&format!("- {}\n", plural(n, singular, many)));
            }
        }
        out
    }
}

fn plural(n: usize, singular: &str, many: &str) -> String {
    if n == 1 {
        format!("{} {}", n, singular)
    } else {
        format!("{} {}", n, many)
    }
}
