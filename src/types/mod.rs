pub mod identifiers;

pub use identifiers::{BlockId, DocumentId, DocumentVersion, SourceId};
