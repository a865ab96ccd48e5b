use crate::record::Publication;

pub const BIBTEX_FILENAME: &str = "publications.bib";

/// Joins the non-empty BibTeX entries with a blank line between them.
/// Non-empty output ends with a newline.
pub fn collect_bibtex<'a, I>(publications: I) -> String
where
    I: IntoIterator<Item = &'a Publication>,
{
    let mut contents = publications
        .into_iter()
        .filter(|p| p.has_bibtex())
        .map(|p| p.bibtex.trim())
        .collect::<Vec<_>>()
        .join("\n\n");
    if !contents.is_empty() {
        contents.push('\n');
    }
    contents
}

pub fn bibtex_count<'a, I>(publications: I) -> usize
where
    I: IntoIterator<Item = &'a Publication>,
{
    publications.into_iter().filter(|p| p.has_bibtex()).count()
}
