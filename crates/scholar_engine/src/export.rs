use std::path::{Path, PathBuf};

use scholar_core::{collect_bibtex, Publication, BIBTEX_FILENAME};
use scholar_logging::scholar_info;
use serde_json::json;
use sha2::{Digest, Sha256};

use crate::persist::{AtomicFileWriter, PersistError};

#[derive(Debug, Clone)]
pub struct ExportOptions {
    pub output_filename: String,
    /// Optional JSON manifest written next to the `.bib` file.
    pub manifest_filename: Option<String>,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            output_filename: BIBTEX_FILENAME.to_string(),
            manifest_filename: Some("publications.manifest.json".to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub entry_count: usize,
    pub sha256: String,
    pub output_path: PathBuf,
    pub manifest_path: Option<PathBuf>,
}

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("persist error: {0}")]
    Persist(#[from] PersistError),
    #[error("manifest serialization failed: {0}")]
    Manifest(#[from] serde_json::Error),
}

/// Writes the BibTeX of `publications` (in the given order) to
/// `output_dir`. Publications without BibTeX are skipped.
pub fn export_bibtex<'a, I>(
    output_dir: &Path,
    publications: I,
    options: &ExportOptions,
) -> Result<ExportSummary, ExportError>
where
    I: IntoIterator<Item = &'a Publication>,
{
    let exported: Vec<&Publication> = publications
        .into_iter()
        .filter(|p| p.has_bibtex())
        .collect();
    let contents = collect_bibtex(exported.iter().copied());
    let sha256 = hex_digest(&contents);

    let writer = AtomicFileWriter::new(output_dir.to_path_buf());
    let output_path = writer.write(&options.output_filename, &contents)?;

    let manifest_path = match &options.manifest_filename {
        Some(name) => {
            let manifest = json!({
                "file": options.output_filename,
                "entry_count": exported.len(),
                "sha256": sha256,
                "ids": exported.iter().map(|p| p.id.as_str()).collect::<Vec<_>>(),
            });
            let text = serde_json::to_string_pretty(&manifest)?;
            Some(writer.write(name, &text)?)
        }
        None => None,
    };

    scholar_info!(
        "exported {} BibTeX entries to {}",
        exported.len(),
        output_path.display()
    );
    Ok(ExportSummary {
        entry_count: exported.len(),
        sha256,
        output_path,
        manifest_path,
    })
}

fn hex_digest(text: &str) -> String {
    let digest = Sha256::digest(text.as_bytes());
    let mut hex = String::with_capacity(digest.len() * 2);
    for byte in digest.iter() {
        use std::fmt::Write;
        let _ = write!(&mut hex, "{byte:02x}");
    }
    hex
}
