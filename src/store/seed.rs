use chrono::{DateTime, TimeZone, Utc};

use crate::document::{
    Block, BlockType, Document, DocumentKind, DocumentMetadata, Properties, Source, SourceKind,
};

fn day(year: i32, month: u32, date: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, date, 0, 0, 0)
        .single()
        .unwrap_or_default()
}

fn block(id: &str, block_type: BlockType, content: &str) -> Block {
    Block {
        id: id.into(),
        block_type,
        content: content.to_string(),
        properties: Properties::new(),
    }
}

/// The document a fresh store starts with: ten blocks and two sources
/// (citations 1 and 2).
pub fn default_document() -> Document {
    let mut quote = block(
        "block-10",
        BlockType::Quote,
        "The market opportunity is significant, but timing is critical for capturing market share.",
    );
    quote.properties.insert_string("author", "Market Analysis Team");

    Document {
        id: "1".into(),
        title: "Untitled Document".to_string(),
        kind: DocumentKind::LiveDocument,
        blocks: vec![
            block("block-1", BlockType::Heading1, "Executive Summary"),
            block(
                "block-2",
                BlockType::Text,
                "This document provides an overview of the strategic analysis and key findings from our recent market research.",
            ),
            block("block-3", BlockType::Heading2, "Key Findings"),
            block(
                "block-4",
                BlockType::BulletList,
                "Market size is estimated at $2.5B with 15% YoY growth",
            ),
            block(
                "block-5",
                BlockType::BulletList,
                "Primary competitors include Company A, Company B, and Company C",
            ),
            block(
                "block-6",
                BlockType::BulletList,
                "Target customer segment shows strong adoption trends",
            ),
            block("block-7", BlockType::Heading2, "Strategic Recommendations"),
            block(
                "block-8",
                BlockType::NumberedList,
                "Expand market presence in the Northeast region",
            ),
            block(
                "block-9",
                BlockType::NumberedList,
                "Develop strategic partnerships with key industry players",
            ),
            quote,
        ],
        sources: vec![
            Source {
                id: "source-1".into(),
                title: "Industry Report 2025".to_string(),
                url: Some("https://industry-research.com/report-2025".to_string()),
                kind: SourceKind::Public,
                domain: Some("industry-research.com".to_string()),
                citation_number: 1,
                usage_count: 3,
            },
            Source {
                id: "source-2".into(),
                title: "Internal Market Analysis".to_string(),
                url: None,
                kind: SourceKind::Private,
                domain: None,
                citation_number: 2,
                usage_count: 5,
            },
        ],
        metadata: DocumentMetadata {
            created: day(2025, 10, 15),
            last_modified: day(2025, 10, 18),
            folder_id: "folder-1".to_string(),
            gradient: "from-blue-500 to-purple-600".to_string(),
        },
    }
}
