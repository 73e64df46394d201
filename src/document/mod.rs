pub mod block;
pub mod document;
pub mod metadata;
pub mod properties;
pub mod source;

pub use crate::types::identifiers::{BlockId, DocumentId, DocumentVersion, SourceId};
pub use block::{Block, BlockPatch, BlockType, NewBlock, UnknownBlockType};
pub use document::{Document, DocumentError, DocumentKind, DocumentPatch, NewDocument};
pub use metadata::DocumentMetadata;
pub use properties::{Properties, PropertyValue};
pub use source::{next_citation_number, NewSource, Source, SourceKind};
