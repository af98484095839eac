use crate::enums::DocumentType;

const PREVIEWABLE: &[&str] = &["pdf", "jpg", "jpeg", "png", "gif", "txt"];
const IMAGES: &[&str] = &["jpg", "jpeg", "png", "gif"];

#[must_use]
pub const fn display_name(doc_type: DocumentType) -> &'static str {
    match doc_type {
        DocumentType::Sop => "Statement of Purpose",
        DocumentType::Cv => "CV/Resume",
        DocumentType::Recommendation => "Recommendation Letter",
        DocumentType::Transcript => "Transcript",
        DocumentType::Other => "Other Document",
    }
}

/// Lowercased extension of the last path segment, ignoring query and fragment.
#[must_use]
pub fn file_extension(url: &str) -> Option<String> {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    let segment = path.rsplit('/').next().unwrap_or(path);
    let (stem, ext) = segment.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

#[must_use]
pub fn can_preview(url: &str) -> bool {
    file_extension(url).is_some_and(|ext| PREVIEWABLE.contains(&ext.as_str()))
}

#[must_use]
pub fn is_image(url: &str) -> bool {
    file_extension(url).is_some_and(|ext| IMAGES.contains(&ext.as_str()))
}
