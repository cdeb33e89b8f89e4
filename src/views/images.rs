//! Size policy for product photos attached through the form.
//!
//! Reading files and encoding them is the upload widget's job. By the time
//! they reach here each file is a name, a byte size and the encoded reference
//! that ends up in [`Product::images`](crate::model::Product::images).

use tracing::warn;

/// Largest accepted image, in bytes (5 MiB).
pub const MAX_IMAGE_BYTES: u64 = 5 * 1024 * 1024;

/// One file picked in the upload widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFile {
    pub name: String,
    pub size: u64,
    /// Encoded reference, usually a `data:` URI.
    pub data: String,
}

/// What happened to a batch of uploaded files.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadReport {
    pub accepted: usize,
    /// Names of files skipped for being over [`MAX_IMAGE_BYTES`].
    pub rejected: Vec<String>,
}

impl UploadReport {
    /// Message for the person uploading, if anything was skipped.
    pub fn warning(&self) -> Option<String> {
        if self.rejected.is_empty() {
            return None;
        }
        Some(format!(
            "Image size should be less than 5MB: {}",
            self.rejected.join(", ")
        ))
    }
}

/// Appends every file within the size limit to `images`, in the order given.
/// Oversized files are skipped without affecting the rest.
pub fn attach_images(images: &mut Vec<String>, files: impl IntoIterator<Item = ImageFile>) -> UploadReport {
    let mut report = UploadReport::default();
    for file in files {
        if file.size > MAX_IMAGE_BYTES {
            warn!(name = %file.name, size = file.size, "Image over size limit skipped");
            report.rejected.push(file.name);
            continue;
        }
        images.push(file.data);
        report.accepted += 1;
    }
    report
}

/// Removes the image at `index`. Returns `false` if there is none.
pub fn remove_image(images: &mut Vec<String>, index: usize) -> bool {
    if index >= images.len() {
        return false;
    }
    images.remove(index);
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str, size: u64) -> ImageFile {
        ImageFile {
            name: name.into(),
            size,
            data: format!("data:image/png;base64,{name}"),
        }
    }

    #[test]
    fn oversized_files_are_skipped_and_others_kept_in_order() {
        let mut images = vec!["data:existing".to_string()];
        let report = attach_images(
            &mut images,
            vec![
                file("a", 10),
                file("huge", MAX_IMAGE_BYTES + 1),
                file("b", MAX_IMAGE_BYTES),
            ],
        );

        assert_eq!(report.accepted, 2);
        assert_eq!(report.rejected, ["huge"]);
        assert_eq!(
            images,
            [
                "data:existing",
                "data:image/png;base64,a",
                "data:image/png;base64,b"
            ]
        );
        assert!(report.warning().unwrap().contains("huge"));
    }

    #[test]
    fn clean_upload_has_no_warning() {
        let mut images = Vec::new();
        let report = attach_images(&mut images, vec![file("a", 1)]);
        assert_eq!(report.warning(), None);
    }

    #[test]
    fn remove_by_position() {
        let mut images = vec!["a".to_string(), "b".to_string()];
        assert!(remove_image(&mut images, 0));
        assert_eq!(images, ["b"]);
        assert!(!remove_image(&mut images, 5));
    }
}
