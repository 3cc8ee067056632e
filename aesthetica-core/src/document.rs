//! Per-page records produced by the scraper and the directory loader that
//! reads them.

use crate::error::{Error, Result};
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Row labels (compared trimmed and lowercased) that carry related names.
pub const RELATED_LABELS: [&str; 2] = ["related aesthetics", "related aesthetic"];

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageRecord {
    pub page: Option<Page>,
    pub groups: Option<Vec<Group>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Page {
    pub title: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Group {
    pub image: Option<String>,
    pub caption: Option<String>,
    pub rows: Option<Vec<Row>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Row {
    pub label: Option<String>,
    pub value: Option<String>,
}

impl PageRecord {
    /// Trimmed page title, or `None` when absent or blank
    pub fn title(&self) -> Option<&str> {
        self.page
            .as_ref()
            .and_then(|p| p.title.as_deref())
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }

    pub fn url(&self) -> &str {
        self.page
            .as_ref()
            .and_then(|p| p.url.as_deref())
            .unwrap_or_default()
    }

    pub fn groups(&self) -> &[Group] {
        self.groups.as_deref().unwrap_or_default()
    }

    /// Related names across all groups, in group order. Repeats are kept.
    pub fn related_names(&self) -> Vec<String> {
        self.groups()
            .iter()
            .flat_map(|g| g.related_names())
            .collect()
    }
}

impl Group {
    pub fn image(&self) -> &str {
        self.image.as_deref().unwrap_or_default().trim()
    }

    pub fn caption(&self) -> &str {
        self.caption.as_deref().unwrap_or_default().trim()
    }

    pub fn rows(&self) -> &[Row] {
        self.rows.as_deref().unwrap_or_default()
    }

    /// Names listed in the first related-aesthetics row of this group
    pub fn related_names(&self) -> Vec<String> {
        self.rows()
            .iter()
            .find(|row| is_related_label(row.label.as_deref().unwrap_or_default()))
            .map(|row| split_related(row.value.as_deref().unwrap_or_default()))
            .unwrap_or_default()
    }
}

pub fn is_related_label(label: &str) -> bool {
    let label = label.trim().to_lowercase();
    RELATED_LABELS.contains(&label.as_str())
}

/// Split a related-aesthetics value on commas and semicolons, dropping
/// blank fragments.
pub fn split_related(value: &str) -> Vec<String> {
    value
        .split([',', ';'])
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(String::from)
        .collect()
}

/// A parsed record together with the file it came from
#[derive(Debug, Clone)]
pub struct SourceRecord {
    pub path: PathBuf,
    pub record: PageRecord,
}

impl SourceRecord {
    /// Node identity: the trimmed title, or the file stem for untitled pages.
    pub fn node_id(&self) -> String {
        match self.record.title() {
            Some(title) => title.to_string(),
            None => self
                .path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SkippedRecord {
    pub path: PathBuf,
    pub reason: String,
}

#[derive(Debug, Default)]
pub struct RecordSet {
    pub records: Vec<SourceRecord>,
    pub skipped: Vec<SkippedRecord>,
}

/// Read every `*.json` file in `dir`, ordered by file name.
///
/// Files that cannot be read or parsed are logged and listed in
/// [`RecordSet::skipped`]; they never abort the load.
pub fn load_records(dir: &Path) -> Result<RecordSet> {
    if !dir.is_dir() {
        return Err(Error::InputDirNotFound(dir.to_path_buf()));
    }

    let mut set = RecordSet::default();
    let entries = fs::read_dir(dir)?.map(|entry| entry.map(|e| e.path()));
    let paths = json_paths(dir, entries, &mut set.skipped);

    for path in paths {
        match read_record(&path) {
            Ok(record) => {
                debug!("Loaded record {}", path.display());
                set.records.push(SourceRecord { path, record });
            }
            Err(reason) => {
                warn!("Skipping {}: {}", path.display(), reason);
                set.skipped.push(SkippedRecord { path, reason });
            }
        }
    }

    Ok(set)
}

/// Sorted `*.json` paths out of a directory listing. Entries the listing
/// failed to produce are logged and recorded against `dir`.
fn json_paths(
    dir: &Path,
    entries: impl IntoIterator<Item = io::Result<PathBuf>>,
    skipped: &mut Vec<SkippedRecord>,
) -> Vec<PathBuf> {
    let mut paths = Vec::new();
    for entry in entries {
        match entry {
            Ok(path) => {
                if path.extension().is_some_and(|ext| ext == "json") {
                    paths.push(path);
                }
            }
            Err(e) => {
                warn!("Skipping unreadable entry in {}: {}", dir.display(), e);
                skipped.push(SkippedRecord {
                    path: dir.to_path_buf(),
                    reason: e.to_string(),
                });
            }
        }
    }
    paths.sort();
    paths
}

fn read_record(path: &Path) -> std::result::Result<PageRecord, String> {
    let content = fs::read_to_string(path).map_err(|e| e.to_string())?;
    serde_json::from_str(&content).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_paths_records_failed_entries() {
        let dir = Path::new("pages");
        let entries = vec![
            Ok(dir.join("b.json")),
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied")),
            Ok(dir.join("notes.txt")),
            Ok(dir.join("a.json")),
        ];
        let mut skipped = Vec::new();

        let paths = json_paths(dir, entries, &mut skipped);

        assert_eq!(paths, vec![dir.join("a.json"), dir.join("b.json")]);
        assert_eq!(skipped.len(), 1);
        assert_eq!(skipped[0].path, dir.to_path_buf());
        assert!(skipped[0].reason.contains("denied"));
    }

    #[test]
    fn test_is_related_label_accepts_both_forms() {
        assert!(is_related_label("Related aesthetics"));
        assert!(is_related_label("  RELATED AESTHETIC "));
        assert!(!is_related_label("Related media"));
        assert!(!is_related_label(""));
    }

    #[test]
    fn test_split_related_drops_empty_fragments() {
        assert_eq!(
            split_related(" Cottagecore, Goblincore;; ,Fairycore ;"),
            vec!["Cottagecore", "Goblincore", "Fairycore"]
        );
        assert!(split_related(" ; , ").is_empty());
    }

    #[test]
    fn test_only_first_matching_row_per_group() {
        let group = Group {
            rows: Some(vec![
                Row {
                    label: Some("Key colours".to_string()),
                    value: Some("Green".to_string()),
                },
                Row {
                    label: Some("Related aesthetics".to_string()),
                    value: Some("A, B".to_string()),
                },
                Row {
                    label: Some("Related aesthetic".to_string()),
                    value: Some("C".to_string()),
                },
            ]),
            ..Group::default()
        };
        assert_eq!(group.related_names(), vec!["A", "B"]);
    }

    #[test]
    fn test_node_id_falls_back_to_file_stem() {
        let source = SourceRecord {
            path: PathBuf::from("pages/0042_untitled.json"),
            record: PageRecord {
                page: Some(Page {
                    title: Some("   ".to_string()),
                    url: None,
                }),
                groups: None,
            },
        };
        assert_eq!(source.node_id(), "0042_untitled");
    }
}
