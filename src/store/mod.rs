pub mod clock;
pub mod config;
pub mod editor;
pub mod seed;

use log::{debug, trace, warn};
use thiserror::Error;

use crate::document::{
    next_citation_number, Block, BlockPatch, Document, DocumentError, DocumentMetadata,
    DocumentPatch, NewBlock, NewDocument, NewSource, Source,
};
use crate::types::identifiers::{BlockId, DocumentId, DocumentVersion};
pub use clock::{Clock, SystemClock};
pub use config::{ReorderPolicy, StoreConfig};
pub use editor::SlashCommand;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Validation(#[from] DocumentError),
    #[error("Block index out of range: from {from}, to {to}, len {len}")]
    IndexOutOfRange { from: usize, to: usize, len: usize },
    #[error("Document version conflict: expected {expected}, found {actual}")]
    VersionConflict {
        expected: DocumentVersion,
        actual: DocumentVersion,
    },
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Owner of the single current document and the only way to mutate it.
///
/// Every successful mutation refreshes `metadata.last_modified` from the
/// store's clock. Unknown ids are silent no-ops; validation failures leave
/// the document exactly as it was.
#[derive(Debug)]
pub struct DocumentStore<C = SystemClock> {
    config: StoreConfig,
    document: Document,
    clock: C,
}

impl DocumentStore<SystemClock> {
    /// A store seeded with the default document.
    pub fn new(config: StoreConfig) -> Self {
        Self::with_document(config, seed::default_document())
    }

    pub fn with_document(config: StoreConfig, document: Document) -> Self {
        Self::with_clock(config, document, SystemClock)
    }
}

impl Default for DocumentStore<SystemClock> {
    fn default() -> Self {
        Self::new(StoreConfig::v0())
    }
}

impl<C: Clock> DocumentStore<C> {
    pub fn with_clock(config: StoreConfig, document: Document, clock: C) -> Self {
        Self {
            config,
            document,
            clock,
        }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn current(&self) -> &Document {
        &self.document
    }

    pub fn into_document(self) -> Document {
        self.document
    }

    fn touch(&mut self) {
        let now = self.clock.now();
        self.document.metadata.touch(now);
    }

    /// Replace the current document with a freshly built one.
    pub fn create_document(&mut self, input: NewDocument) -> Result<&Document, StoreError> {
        let kind = input.validate().map_err(|e| {
            warn!("Rejected new document: {e}");
            e
        })?;

        let now = self.clock.now();
        self.document = Document {
            id: DocumentId::generate(),
            title: input.title,
            kind,
            blocks: input.blocks,
            sources: input.sources,
            metadata: DocumentMetadata::new(
                now,
                self.config.default_folder_id.clone(),
                self.config.default_gradient.clone(),
            ),
        };
        debug!(
            "Created document {} with {} blocks and {} sources",
            self.document.id,
            self.document.blocks.len(),
            self.document.sources.len()
        );
        Ok(&self.document)
    }

    /// Shallow-merge `patch` into the current document.
    ///
    /// Returns `Ok(false)` without touching anything when `id` is not the
    /// current document's id.
    pub fn update_document(&mut self, id: &DocumentId, patch: DocumentPatch) -> Result<bool, StoreError> {
        if &self.document.id != id {
            trace!("Ignoring update for unknown document {id}");
            return Ok(false);
        }
        patch.validate().map_err(|e| {
            warn!("Rejected update for document {id}: {e}");
            e
        })?;

        patch.apply_to(&mut self.document);
        self.touch();
        debug!("Updated document {id}");
        Ok(true)
    }

    /// Append a block with a freshly generated id.
    pub fn add_block(&mut self, block: NewBlock) -> &Block {
        let block = Block::from_new(block);
        debug!("Adding {} block {}", block.block_type, block.id);
        self.document.blocks.push(block);
        self.touch();
        let last = self.document.blocks.len() - 1;
        &self.document.blocks[last]
    }

    /// Shallow-merge `patch` into the matching block.
    ///
    /// `last_modified` is refreshed whether or not a block matched.
    pub fn update_block(&mut self, id: &BlockId, patch: BlockPatch) -> bool {
        let matched = match self.document.blocks.iter_mut().find(|b| &b.id == id) {
            Some(block) => {
                block.apply(patch);
                debug!("Updated block {id}");
                true
            }
            None => {
                trace!("No block {id} to update");
                false
            }
        };
        self.touch();
        matched
    }

    /// Remove the matching block. `last_modified` is refreshed either way.
    pub fn delete_block(&mut self, id: &BlockId) -> bool {
        let before = self.document.blocks.len();
        self.document.blocks.retain(|b| &b.id != id);
        let removed = self.document.blocks.len() != before;
        if removed {
            debug!("Deleted block {id}");
        } else {
            trace!("No block {id} to delete");
        }
        self.touch();
        removed
    }

    /// Move the block at `from` so it ends up at `to`.
    ///
    /// `to` indexes the list after removal, so `[A, B, C, D]` with
    /// `(0, 2)` becomes `[B, C, A, D]`.
    pub fn reorder_blocks(&mut self, from: usize, to: usize) -> Result<(), StoreError> {
        let len = self.document.blocks.len();
        let out_of_range = StoreError::IndexOutOfRange { from, to, len };
        let (from, to) = match self.config.reorder_policy {
            _ if len == 0 => return Err(out_of_range),
            ReorderPolicy::Reject if from >= len || to >= len => {
                warn!("Rejected reorder {from} -> {to} in {len} blocks");
                return Err(out_of_range);
            }
            ReorderPolicy::Reject => (from, to),
            ReorderPolicy::Clamp => (from.min(len - 1), to.min(len - 1)),
        };

        let block = self.document.blocks.remove(from);
        self.document.blocks.insert(to, block);
        self.touch();
        debug!("Moved block {from} -> {to}");
        Ok(())
    }

    /// Append a citation numbered one past the highest existing number.
    pub fn add_source(&mut self, source: NewSource) -> Result<&Source, StoreError> {
        let citation = source
            .validate()
            .and_then(|()| next_citation_number(&self.document.sources))
            .map_err(|e| {
                warn!("Rejected source: {e}");
                e
            })?;
        let source = source.into_source(citation);
        debug!("Adding source {} as citation [{citation}]", source.id);
        self.document.sources.push(source);
        self.touch();
        let last = self.document.sources.len() - 1;
        Ok(&self.document.sources[last])
    }

    pub fn version(&self) -> Result<DocumentVersion, StoreError> {
        Ok(self.document.version()?)
    }

    /// Fail with `VersionConflict` unless the document still hashes to `expected`.
    pub fn ensure_version(&self, expected: &DocumentVersion) -> Result<(), StoreError> {
        let actual = self.version()?;
        if &actual != expected {
            return Err(StoreError::VersionConflict {
                expected: expected.clone(),
                actual,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_store_holds_seed() {
        let store = DocumentStore::new(StoreConfig::v0());
        assert_eq!(store.current().blocks.len(), 10);
        assert_eq!(store.current().sources.len(), 2);
        assert_eq!(store.config(), &StoreConfig::v0());
    }

    #[test]
    fn reorder_on_empty_document_is_rejected_even_when_clamping() {
        let config = StoreConfig::v0().with_reorder_policy(ReorderPolicy::Clamp);
        let mut doc = seed::default_document();
        doc.blocks.clear();
        let mut store = DocumentStore::with_document(config, doc);
        assert!(matches!(
            store.reorder_blocks(0, 0),
            Err(StoreError::IndexOutOfRange { len: 0, .. })
        ));
    }
}
