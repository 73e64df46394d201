//! Editing gestures built on top of the core block operations:
//! insert-after, duplicate, merge-into-previous, keyboard moves and
//! slash commands.

use log::{debug, trace};

use super::{Clock, DocumentStore};
use crate::document::{Block, BlockPatch, BlockType, NewBlock};
use crate::types::identifiers::BlockId;

/// Outcome of feeding a block's content to `apply_slash_command`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlashCommand {
    /// Content ends with `/`; the caller should open the block-type menu.
    MenuRequested,
    /// Content was `/<word>` naming a block type; the block now has that
    /// type and empty content.
    Converted(BlockType),
    NotACommand,
}

/// Parse `/<word>` where the word is one or more ASCII alphanumerics or `_`.
fn parse_command(content: &str) -> Option<&str> {
    let word = content.strip_prefix('/')?;
    if word.is_empty() || !word.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return None;
    }
    Some(word)
}

impl<C: Clock> DocumentStore<C> {
    /// Insert a block right after `after`, or at the end when `after` is unknown.
    pub fn insert_block_after(&mut self, after: &BlockId, block: NewBlock) -> &Block {
        let Some(anchor) = self.document.block_index(after) else {
            trace!("No anchor block {after}, appending");
            return self.add_block(block);
        };

        let block = Block::from_new(block);
        debug!("Inserting {} block {} after {after}", block.block_type, block.id);
        let at = anchor + 1;
        self.document.blocks.insert(at, block);
        self.touch();
        &self.document.blocks[at]
    }

    /// Copy type and content of a block into a new block placed after it.
    pub fn duplicate_block(&mut self, id: &BlockId) -> Option<&Block> {
        let original = self.document.block(id)?;
        let copy = NewBlock::new(original.block_type, original.content.clone());
        Some(self.insert_block_after(id, copy))
    }

    /// Fold a block's content into the block before it and remove it.
    ///
    /// No-op for the first block and for unknown ids.
    pub fn merge_with_previous(&mut self, id: &BlockId) -> bool {
        let index = match self.document.block_index(id) {
            Some(index) if index > 0 => index,
            _ => return false,
        };

        let removed = self.document.blocks.remove(index);
        self.document.blocks[index - 1].content.push_str(&removed.content);
        self.touch();
        debug!("Merged block {id} into {}", self.document.blocks[index - 1].id);
        true
    }

    pub fn move_block_up(&mut self, id: &BlockId) -> bool {
        match self.document.block_index(id) {
            Some(index) if index > 0 => self.reorder_blocks(index, index - 1).is_ok(),
            _ => false,
        }
    }

    pub fn move_block_down(&mut self, id: &BlockId) -> bool {
        let len = self.document.blocks.len();
        match self.document.block_index(id) {
            Some(index) if index + 1 < len => self.reorder_blocks(index, index + 1).is_ok(),
            _ => false,
        }
    }

    /// Interpret freshly typed block content as a slash command.
    ///
    /// A valid command aimed at an unknown block reports `NotACommand` and
    /// leaves the document alone, `last_modified` included. Plain
    /// `update_block` would still refresh the timestamp.
    pub fn apply_slash_command(&mut self, id: &BlockId, content: &str) -> SlashCommand {
        if content.ends_with('/') {
            return SlashCommand::MenuRequested;
        }

        let Some(block_type) = parse_command(content).and_then(BlockType::from_slash_command) else {
            return SlashCommand::NotACommand;
        };
        if self.document.block(id).is_none() {
            return SlashCommand::NotACommand;
        }

        self.update_block(
            id,
            BlockPatch {
                block_type: Some(block_type),
                content: Some(String::new()),
                properties: None,
            },
        );
        SlashCommand::Converted(block_type)
    }
}
