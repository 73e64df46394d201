use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::properties::Properties;
use crate::types::identifiers::BlockId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BlockType {
    Text,
    Heading1,
    Heading2,
    Heading3,
    BulletList,
    NumberedList,
    Quote,
    Code,
    Table,
    Image,
}

impl BlockType {
    pub const ALL: [BlockType; 10] = [
        BlockType::Text,
        BlockType::Heading1,
        BlockType::Heading2,
        BlockType::Heading3,
        BlockType::BulletList,
        BlockType::NumberedList,
        BlockType::Quote,
        BlockType::Code,
        BlockType::Table,
        BlockType::Image,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BlockType::Text => "text",
            BlockType::Heading1 => "heading1",
            BlockType::Heading2 => "heading2",
            BlockType::Heading3 => "heading3",
            BlockType::BulletList => "bulletList",
            BlockType::NumberedList => "numberedList",
            BlockType::Quote => "quote",
            BlockType::Code => "code",
            BlockType::Table => "table",
            BlockType::Image => "image",
        }
    }

    /// Resolve the word after a leading `/` (case-insensitive), e.g. `h2` or `ol`.
    pub fn from_slash_command(command: &str) -> Option<BlockType> {
        let block_type = match command.to_lowercase().as_str() {
            "h1" | "heading1" => BlockType::Heading1,
            "h2" | "heading2" => BlockType::Heading2,
            "h3" | "heading3" => BlockType::Heading3,
            "bullet" | "ul" => BlockType::BulletList,
            "number" | "numbered" | "ol" => BlockType::NumberedList,
            "quote" => BlockType::Quote,
            "code" => BlockType::Code,
            "text" | "p" => BlockType::Text,
            "table" => BlockType::Table,
            "image" | "img" => BlockType::Image,
            _ => return None,
        };
        Some(block_type)
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown block type: {0}")]
pub struct UnknownBlockType(pub String);

impl FromStr for BlockType {
    type Err = UnknownBlockType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BlockType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownBlockType(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub id: BlockId,
    #[serde(rename = "type")]
    pub block_type: BlockType,
    pub content: String,
    #[serde(default)]
    pub properties: Properties,
}

impl Block {
    pub(crate) fn from_new(new: NewBlock) -> Self {
        Block {
            id: BlockId::generate(),
            block_type: new.block_type,
            content: new.content,
            properties: new.properties,
        }
    }

    /// Shallow merge: each field present in the patch overwrites the whole field.
    pub(crate) fn apply(&mut self, patch: BlockPatch) {
        if let Some(block_type) = patch.block_type {
            self.block_type = block_type;
        }
        if let Some(content) = patch.content {
            self.content = content;
        }
        if let Some(properties) = patch.properties {
            self.properties = properties;
        }
    }
}

/// A block before insertion; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewBlock {
    #[serde(rename = "type")]
    pub block_type: BlockType,
    pub content: String,
    #[serde(default)]
    pub properties: Properties,
}

impl NewBlock {
    pub fn new(block_type: BlockType, content: impl Into<String>) -> Self {
        NewBlock {
            block_type,
            content: content.into(),
            properties: Properties::new(),
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self::new(BlockType::Text, content)
    }

    pub fn with_properties(mut self, properties: Properties) -> Self {
        self.properties = properties;
        self
    }
}

/// Partial block update. `None` leaves the field as it is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockPatch {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub block_type: Option<BlockType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<Properties>,
}

impl BlockPatch {
    pub fn content(content: impl Into<String>) -> Self {
        BlockPatch {
            content: Some(content.into()),
            ..Default::default()
        }
    }

    pub fn block_type(block_type: BlockType) -> Self {
        BlockPatch {
            block_type: Some(block_type),
            ..Default::default()
        }
    }

    pub fn properties(properties: Properties) -> Self {
        BlockPatch {
            properties: Some(properties),
            ..Default::default()
        }
    }
}
