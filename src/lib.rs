//! In-memory block document store.
//!
//! `live-document-core` owns a single "current" document made of ordered
//! content blocks and numbered citation sources. All mutation goes through
//! [`store::DocumentStore`], which enforces the document invariants: unique
//! block ids, strictly increasing citation numbers, validated titles and a
//! refreshed `lastModified` timestamp on every change.

pub mod document;
pub mod store;
pub mod types;

pub use document::{
    Block, BlockPatch, BlockType, Document, DocumentError, DocumentKind, DocumentPatch,
    NewBlock, NewDocument, NewSource, Properties, Source, SourceKind,
};
pub use store::{DocumentStore, ReorderPolicy, SlashCommand, StoreConfig, StoreError};
pub use types::{BlockId, DocumentId, DocumentVersion, SourceId};
