use live_document_core::document::next_citation_number;
use live_document_core::store::seed::default_document;
use live_document_core::{
    Block, BlockType, DocumentError, DocumentKind, DocumentPatch, NewDocument, NewSource,
    Properties, SourceKind,
};

fn block(id: &str) -> Block {
    Block {
        id: id.into(),
        block_type: BlockType::Text,
        content: String::new(),
        properties: Properties::new(),
    }
}

#[test]
fn invariant_title_must_have_visible_characters() {
    for title in ["", " ", "\t\n"] {
        let input = NewDocument::new(title, DocumentKind::LiveDocument);
        assert_eq!(input.validate(), Err(DocumentError::EmptyTitle));
    }
    let ok = NewDocument::new(" Memo ", DocumentKind::LiveDocument);
    assert_eq!(ok.validate(), Ok(DocumentKind::LiveDocument));
}

#[test]
fn invariant_title_checked_before_kind() {
    let mut input = NewDocument::new("", DocumentKind::Presentation);
    input.kind = None;
    assert_eq!(input.validate(), Err(DocumentError::EmptyTitle));
}

#[test]
fn invariant_block_ids_unique() {
    let input = NewDocument::new("Memo", DocumentKind::LiveDocument)
        .with_blocks(vec![block("a"), block("b"), block("a")]);
    assert_eq!(input.validate(), Err(DocumentError::DuplicateBlockId("a".into())));

    let patch = DocumentPatch {
        blocks: Some(vec![block("z"), block("z")]),
        ..Default::default()
    };
    assert_eq!(patch.validate(), Err(DocumentError::DuplicateBlockId("z".into())));
}

#[test]
fn empty_patch_is_valid() {
    assert_eq!(DocumentPatch::default().validate(), Ok(()));
}

#[test]
fn source_title_validation() {
    assert_eq!(
        NewSource::new("   ", SourceKind::Private).validate(),
        Err(DocumentError::EmptySourceTitle)
    );
    assert_eq!(NewSource::new("Deck", SourceKind::Private).validate(), Ok(()));
}

#[test]
fn seed_document_is_consistent() {
    let doc = default_document();
    assert_eq!(doc.blocks.len(), 10);
    assert_eq!(next_citation_number(&doc.sources), Ok(3));
    assert_eq!(doc.block_index(&"block-10".into()), Some(9));
    assert!(doc.block(&"block-11".into()).is_none());
    assert!(doc.metadata.created < doc.metadata.last_modified);
}
