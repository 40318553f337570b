use super::ImageFile;
use crate::error::UploadError;

/// A validated batch of images plus the label they should be trained under.
///
/// The constructor is the only way in: an empty file list or a blank label is
/// rejected before any network work starts, so downstream code never has to
/// guard against half-formed input. Immutable for the lifetime of a batch.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainSubmission {
    files: Vec<ImageFile>,
    label: String,
}

impl TrainSubmission {
    /// Validate and build a submission. The label is trimmed.
    pub fn new(files: Vec<ImageFile>, label: impl Into<String>) -> Result<Self, UploadError> {
        if files.is_empty() {
            return Err(UploadError::EmptySubmission);
        }
        let label = label.into().trim().to_string();
        if label.is_empty() {
            return Err(UploadError::BlankLabel);
        }
        Ok(Self { files, label })
    }

    pub fn files(&self) -> &[ImageFile] {
        &self.files
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str) -> ImageFile {
        ImageFile::new(name, vec![0u8; 8])
    }

    #[test]
    fn test_rejects_empty_file_list() {
        let err = TrainSubmission::new(vec![], "covid").unwrap_err();
        assert!(matches!(err, UploadError::EmptySubmission));
    }

    #[test]
    fn test_rejects_blank_label() {
        let err = TrainSubmission::new(vec![file("a.png")], "   ").unwrap_err();
        assert!(matches!(err, UploadError::BlankLabel));
    }

    #[test]
    fn test_trims_label() {
        let submission = TrainSubmission::new(vec![file("a.png")], " covid ").unwrap();
        assert_eq!(submission.label(), "covid");
        assert_eq!(submission.file_count(), 1);
    }
}
