//! Path discovery: expand user-supplied files and folders into a concrete,
//! deduplicated list of PDF paths.
//!
//! Discovery never fails — inputs that do not exist or are not PDFs are
//! silently ignored, and the worst outcome is an empty list. A seen-set
//! keeps the result deduplicated even when the same file is reachable both
//! directly and through a passed folder, preserving first-encountered order.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// Return a deduplicated, order-preserving list of absolute PDF paths from
/// the given files and folders (folders searched recursively).
///
/// Each input is `~`-expanded and canonicalised before matching. Files must
/// carry a `.pdf` extension (ASCII case-insensitive); directory walks are
/// sorted by file name so discovery is order-stable across runs.
pub fn find_pdfs<I, S>(inputs: I) -> Vec<PathBuf>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen: HashSet<PathBuf> = HashSet::new();
    let mut out: Vec<PathBuf> = Vec::new();

    for raw in inputs {
        // Canonicalisation fails for nonexistent paths; those inputs are
        // silently ignored per the discovery contract.
        let path = match expand_tilde(raw.as_ref()).canonicalize() {
            Ok(p) => p,
            Err(_) => {
                debug!("Ignoring nonexistent input: {}", raw.as_ref());
                continue;
            }
        };

        if path.is_file() {
            if is_pdf(&path) && seen.insert(path.clone()) {
                out.push(path);
            }
        } else if path.is_dir() {
            for entry in WalkDir::new(&path)
                .follow_links(false)
                .sort_by_file_name()
                .into_iter()
                .filter_map(Result::ok)
            {
                if !entry.file_type().is_file() || !is_pdf(entry.path()) {
                    continue;
                }
                if let Ok(found) = entry.path().canonicalize() {
                    if seen.insert(found.clone()) {
                        out.push(found);
                    }
                }
            }
        }
    }

    debug!("Discovered {} PDF(s)", out.len());
    out
}

/// Case-insensitive `.pdf` extension check.
fn is_pdf(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.eq_ignore_ascii_case("pdf"))
        .unwrap_or(false)
}

/// Expand a leading `~` to the user's home directory.
///
/// Anything else (including `~user` forms) is returned unchanged.
pub(crate) fn expand_tilde(raw: &str) -> PathBuf {
    if raw == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    } else if let Some(rest) = raw.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use tempfile::TempDir;

    fn touch(path: &Path) {
        File::create(path).unwrap();
    }

    #[test]
    fn includes_pdf_files_case_insensitively() {
        let dir = TempDir::new().unwrap();
        touch(&dir.path().join("Report.PDF"));
        touch(&dir.path().join("report.pdf"));
        touch(&dir.path().join("REPORT.Pdf"));
        touch(&dir.path().join("report.txt"));

        let found = find_pdfs([dir.path().to_str().unwrap()]);
        assert_eq!(found.len(), 3);
        assert!(found.iter().all(|p| is_pdf(p)));
    }

    #[test]
    fn walks_directories_recursively() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();
        touch(&dir.path().join("top.pdf"));
        touch(&nested.join("deep.pdf"));

        let found = find_pdfs([dir.path().to_str().unwrap()]);
        assert_eq!(found.len(), 2);
    }

    #[test]
    fn deduplicates_file_passed_directly_and_via_folder() {
        let dir = TempDir::new().unwrap();
        let pdf = dir.path().join("doc.pdf");
        touch(&pdf);

        let found = find_pdfs([pdf.to_str().unwrap(), dir.path().to_str().unwrap()]);
        assert_eq!(found.len(), 1);
        // First-encountered order: the directly passed file wins its slot.
        assert_eq!(found[0], pdf.canonicalize().unwrap());
    }

    #[test]
    fn deduplicates_repeated_inputs() {
        let dir = TempDir::new().unwrap();
        let pdf = dir.path().join("doc.pdf");
        touch(&pdf);

        let found = find_pdfs([pdf.to_str().unwrap(), pdf.to_str().unwrap()]);
        assert_eq!(found.len(), 1);
    }

    #[test]
    fn ignores_nonexistent_and_non_pdf_inputs() {
        let dir = TempDir::new().unwrap();
        let txt = dir.path().join("notes.txt");
        touch(&txt);

        let found = find_pdfs([
            "/definitely/not/a/real/path.pdf",
            txt.to_str().unwrap(),
        ]);
        assert!(found.is_empty());
    }

    #[test]
    fn discovery_is_idempotent_and_order_stable() {
        let dir = TempDir::new().unwrap();
        touch(&dir.path().join("b.pdf"));
        touch(&dir.path().join("a.pdf"));
        touch(&dir.path().join("c.pdf"));

        let first = find_pdfs([dir.path().to_str().unwrap()]);
        let second = find_pdfs([dir.path().to_str().unwrap()]);
        assert_eq!(first, second);
        assert_eq!(first.len(), 3);
    }

    #[test]
    fn extension_matching_rules() {
        assert!(!is_pdf(Path::new("noextension")));
        assert!(!is_pdf(Path::new("archive.pdf.gz")));
        assert!(is_pdf(Path::new("ok.pDf")));
    }
}
