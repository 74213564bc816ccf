use std::path::PathBuf;

use anyhow::Context;
use folio_core_resume_contracts::{ResumeService, ResumeUploadError, ResumeUrl};

const PDF_MAGIC: &[u8] = b"%PDF-";

#[derive(Debug, Clone)]
pub struct ResumeServiceImpl {
    config: ResumeServiceConfig,
}

#[derive(Debug, Clone)]
pub struct ResumeServiceConfig {
    pub api_key: String,
    pub upload_dir: PathBuf,
    pub filename: String,
    pub max_bytes: u64,
}

impl ResumeServiceImpl {
    pub fn new(config: ResumeServiceConfig) -> Self {
        Self { config }
    }
}

impl ResumeService for ResumeServiceImpl {
    #[tracing::instrument(skip(self, api_key, content), fields(bytes = content.len()))]
    async fn upload(&self, api_key: &str, content: Vec<u8>) -> Result<ResumeUrl, ResumeUploadError> {
        if api_key != self.config.api_key {
            return Err(ResumeUploadError::Unauthorized);
        }
        if content.len() as u64 > self.config.max_bytes {
            return Err(ResumeUploadError::TooLarge);
        }
        if !content.starts_with(PDF_MAGIC) {
            return Err(ResumeUploadError::InvalidType);
        }

        tokio::fs::create_dir_all(&self.config.upload_dir)
            .await
            .context("Failed to create upload directory")?;

        // Write to a temp file first so a crash mid-write can never leave a
        // truncated resume at the public path.
        let final_path = self.config.upload_dir.join(&self.config.filename);
        let tmp_path = final_path.with_extension("pdf.tmp");
        tokio::fs::write(&tmp_path, &content)
            .await
            .context("Failed to write uploaded file")?;
        tokio::fs::rename(&tmp_path, &final_path)
            .await
            .context("Failed to move uploaded file into place")?;

        Ok(ResumeUrl::new(format!("/resume/{}", self.config.filename)))
    }
}

#[cfg(test)]
mod tests {
    use folio_utils::assert_matches;

    use super::*;

    fn sut(upload_dir: PathBuf) -> ResumeServiceImpl {
        ResumeServiceImpl::new(ResumeServiceConfig {
            api_key: "secret".into(),
            upload_dir,
            filename: "resume_dev_latest.pdf".into(),
            max_bytes: 64,
        })
    }

    fn test_dir(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("folio-resume-{}-{name}", std::process::id()))
    }

    #[tokio::test]
    async fn ok() {
        // Arrange
        let dir = test_dir("ok");
        let sut = sut(dir.clone());

        // Act
        let result = sut.upload("secret", b"%PDF-1.7 content".to_vec()).await;

        // Assert
        assert_eq!(
            result.unwrap(),
            ResumeUrl::new("/resume/resume_dev_latest.pdf")
        );
        let stored = tokio::fs::read(dir.join("resume_dev_latest.pdf"))
            .await
            .unwrap();
        assert_eq!(stored, b"%PDF-1.7 content");

        tokio::fs::remove_dir_all(dir).await.unwrap();
    }

    #[tokio::test]
    async fn replaces_previous_upload() {
        // Arrange
        let dir = test_dir("replace");
        let sut = sut(dir.clone());
        sut.upload("secret", b"%PDF-1.7 old".to_vec()).await.unwrap();

        // Act
        let result = sut.upload("secret", b"%PDF-1.7 new".to_vec()).await;

        // Assert
        result.unwrap();
        let stored = tokio::fs::read(dir.join("resume_dev_latest.pdf"))
            .await
            .unwrap();
        assert_eq!(stored, b"%PDF-1.7 new");

        tokio::fs::remove_dir_all(dir).await.unwrap();
    }

    #[tokio::test]
    async fn unauthorized() {
        // Arrange
        let sut = sut(test_dir("unauthorized"));

        // Act
        let result = sut.upload("wrong", b"%PDF-1.7".to_vec()).await;

        // Assert
        assert_matches!(result, Err(ResumeUploadError::Unauthorized));
    }

    #[tokio::test]
    async fn too_large() {
        // Arrange
        let sut = sut(test_dir("too-large"));

        // Act
        let result = sut.upload("secret", vec![b'x'; 65]).await;

        // Assert
        assert_matches!(result, Err(ResumeUploadError::TooLarge));
    }

    #[tokio::test]
    async fn not_a_pdf() {
        // Arrange
        let sut = sut(test_dir("not-a-pdf"));

        // Act
        let result = sut.upload("secret", b"GIF89a".to_vec()).await;

        // Assert
        assert_matches!(result, Err(ResumeUploadError::InvalidType));
    }
}
