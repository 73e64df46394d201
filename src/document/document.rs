use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::block::Block;
use super::metadata::DocumentMetadata;
use super::source::{ensure_valid_citations, Source};
use crate::types::identifiers::{BlockId, DocumentId, DocumentVersion, SourceId};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DocumentError {
    #[error("Document title is required")]
    EmptyTitle,
    #[error("Document type is required")]
    MissingKind,
    #[error("Source title is required")]
    EmptySourceTitle,
    #[error("Duplicate block id: {0}")]
    DuplicateBlockId(BlockId),
    #[error("Citation number of source {0} must be positive")]
    InvalidCitation(SourceId),
    #[error("Duplicate citation number: {0}")]
    DuplicateCitation(u32),
    #[error("No citation numbers left")]
    CitationOverflow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentKind {
    #[serde(rename = "Live Document")]
    LiveDocument,
    #[serde(rename = "M&A Profile")]
    MandaProfile,
    #[serde(rename = "presentation")]
    Presentation,
}

/// The single document a store holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub id: DocumentId,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: DocumentKind,
    pub blocks: Vec<Block>,
    pub sources: Vec<Source>,
    pub metadata: DocumentMetadata,
}

impl Document {
    pub fn block(&self, id: &BlockId) -> Option<&Block> {
        self.blocks.iter().find(|b| &b.id == id)
    }

    pub fn block_index(&self, id: &BlockId) -> Option<usize> {
        self.blocks.iter().position(|b| &b.id == id)
    }

    /// Content hash over title, kind, blocks and sources.
    ///
    /// Metadata (timestamps, folder, gradient) does not affect the version.
    pub fn version(&self) -> Result<DocumentVersion, serde_json::Error> {
        let canonical = serde_json::to_vec(&(&self.title, &self.kind, &self.blocks, &self.sources))?;
        Ok(DocumentVersion::from_content(&canonical))
    }
}

/// Input for creating a document. Id and metadata are assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewDocument {
    pub title: String,
    #[serde(rename = "type", default)]
    pub kind: Option<DocumentKind>,
    #[serde(default)]
    pub blocks: Vec<Block>,
    #[serde(default)]
    pub sources: Vec<Source>,
}

impl NewDocument {
    pub fn new(title: impl Into<String>, kind: DocumentKind) -> Self {
        NewDocument {
            title: title.into(),
            kind: Some(kind),
            blocks: Vec::new(),
            sources: Vec::new(),
        }
    }

    pub fn with_blocks(mut self, blocks: Vec<Block>) -> Self {
        self.blocks = blocks;
        self
    }

    pub fn with_sources(mut self, sources: Vec<Source>) -> Self {
        self.sources = sources;
        self
    }

    /// Check every precondition of `create_document`, returning the kind.
    pub fn validate(&self) -> Result<DocumentKind, DocumentError> {
        validate_title(&self.title)?;
        let kind = self.kind.ok_or(DocumentError::MissingKind)?;
        ensure_unique_block_ids(&self.blocks)?;
        ensure_valid_citations(&self.sources)?;
        Ok(kind)
    }
}

/// Partial document update. Each present field replaces the whole field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<DocumentKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blocks: Option<Vec<Block>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sources: Option<Vec<Source>>,
}

impl DocumentPatch {
    pub fn title(title: impl Into<String>) -> Self {
        DocumentPatch {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    pub fn kind(kind: DocumentKind) -> Self {
        DocumentPatch {
            kind: Some(kind),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<(), DocumentError> {
        if let Some(title) = &self.title {
            validate_title(title)?;
        }
        if let Some(blocks) = &self.blocks {
            ensure_unique_block_ids(blocks)?;
        }
        if let Some(sources) = &self.sources {
            ensure_valid_citations(sources)?;
        }
        Ok(())
    }

    pub(crate) fn apply_to(self, doc: &mut Document) {
        if let Some(title) = self.title {
            doc.title = title;
        }
        if let Some(kind) = self.kind {
            doc.kind = kind;
        }
        if let Some(blocks) = self.blocks {
            doc.blocks = blocks;
        }
        if let Some(sources) = self.sources {
            doc.sources = sources;
        }
    }
}

fn validate_title(title: &str) -> Result<(), DocumentError> {
    if title.trim().is_empty() {
        return Err(DocumentError::EmptyTitle);
    }
    Ok(())
}

fn ensure_unique_block_ids(blocks: &[Block]) -> Result<(), DocumentError> {
    let mut seen = HashSet::with_capacity(blocks.len());
    for block in blocks {
        if !seen.insert(&block.id) {
            return Err(DocumentError::DuplicateBlockId(block.id.clone()));
        }
    }
    Ok(())
}
