//! In-memory staging of images selected for a listing-in-progress.
//!
//! DESIGN
//! ======
//! Each image moves `present -> removing -> absent`. Removal is two-phase so
//! the view can play an exit animation: `mark_removing` only flags the entry,
//! and the entry is spliced out when the view acknowledges the end of the
//! animation with `confirm_removed`. There is no way back from `removing`.
//!
//! Batches are appended in one step, after every file of a selection has been
//! decoded, so observers never see a partially added batch. Mutations that
//! change the list return the id-free payload list for the container.

#[cfg(test)]
#[path = "staging_test.rs"]
mod staging_test;

/// Lifecycle of a staged image while it is still in the list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StagedPhase {
    #[default]
    Present,
    /// Exit animation running; awaiting acknowledgement.
    Removing,
}

/// One decoded image with a locally unique id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StagedImage {
    pub id: String,
    pub data_url: String,
    pub phase: StagedPhase,
}

impl StagedImage {
    /// Wrap a decoded data URL with a freshly generated id.
    #[must_use]
    pub fn new(data_url: String) -> Self {
        Self { id: uuid::Uuid::new_v4().simple().to_string(), data_url, phase: StagedPhase::Present }
    }

    #[must_use]
    pub fn is_removing(&self) -> bool {
        self.phase == StagedPhase::Removing
    }
}

/// Ordered list of staged images for one form session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ImageStaging {
    images: Vec<StagedImage>,
}

impl ImageStaging {
    #[must_use]
    pub fn images(&self) -> &[StagedImage] {
        &self.images
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Caption shown under the picker.
    #[must_use]
    pub fn summary(&self) -> String {
        match self.len() {
            0 => "No images selected".to_owned(),
            1 => "1 image selected".to_owned(),
            n => format!("{n} images selected"),
        }
    }

    /// Payloads in selection order, ids stripped.
    #[must_use]
    pub fn payloads(&self) -> Vec<String> {
        self.images.iter().map(|img| img.data_url.clone()).collect()
    }

    #[must_use]
    pub fn is_removing(&self, id: &str) -> bool {
        self.images.iter().any(|img| img.id == id && img.is_removing())
    }

    /// Append a fully decoded batch and return the new payload list.
    pub fn append_batch(&mut self, batch: Vec<StagedImage>) -> Vec<String> {
        self.images.extend(batch);
        self.payloads()
    }

    /// Start the exit of `id`. Returns `false` if the id is unknown or
    /// already leaving. The list itself is unchanged.
    pub fn mark_removing(&mut self, id: &str) -> bool {
        match self.images.iter_mut().find(|img| img.id == id) {
            Some(img) if img.phase == StagedPhase::Present => {
                img.phase = StagedPhase::Removing;
                true
            }
            _ => false,
        }
    }

    /// Acknowledge the exit animation of `id` and drop it.
    ///
    /// Only entries in `removing` are affected; returns the new payload list
    /// when something was removed.
    pub fn confirm_removed(&mut self, id: &str) -> Option<Vec<String>> {
        let index = self.images.iter().position(|img| img.id == id && img.is_removing())?;
        self.images.remove(index);
        Some(self.payloads())
    }

}

/// Split per-file decode results into stageable images and a failure count.
///
/// Failed files are skipped; successful ones keep their selection order.
pub fn stage_decoded<E>(results: Vec<Result<String, E>>) -> (Vec<StagedImage>, usize) {
    let mut staged = Vec::with_capacity(results.len());
    let mut failed = 0;
    for result in results {
        match result {
            Ok(data_url) => staged.push(StagedImage::new(data_url)),
            Err(_) => failed += 1,
        }
    }
    (staged, failed)
}
