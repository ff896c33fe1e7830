// src/application/commands/articles/image.rs
use super::ArticleCommandService;
use crate::{
    application::{error::ApplicationResult, forms::AcceptedImage},
    domain::article::ImageFilename,
};

impl ArticleCommandService {
    /// Derives the stored name for an accepted upload and moves it into storage.
    pub(super) async fn store_image(&self, image: AcceptedImage) -> ApplicationResult<ImageFilename> {
        let slug = self.slugger.slugify(image.stem());
        let token = self.tokens.generate();
        let filename = ImageFilename::derive(&slug, &token, Some(&image.extension))?;

        self.images.store(&filename, image.contents).await?;
        tracing::debug!(image = %filename, original = %image.original_name, "image stored");
        Ok(filename)
    }

    /// Best-effort removal; the article state is already settled at this point.
    pub(super) async fn discard_image(&self, filename: &ImageFilename) {
        if let Err(err) = self.images.remove(filename).await {
            tracing::warn!(image = %filename, error = %err, "failed to remove image file");
        }
    }
}
