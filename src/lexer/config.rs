use std::io::Read;

use serde::{Deserialize, Serialize};

use crate::errors::errors::{Error, ErrorImpl};

/// How much of a comment ends up in the returned token text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommentText {
    /// The full span, start and end markers included. Line comments never
    /// include their line terminator.
    #[default]
    WithDelimiters,
    /// Start marker dropped, and the end marker of a terminated block comment.
    ContentOnly,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenizerConfig {
    #[serde(default)]
    pub comment_text: CommentText,

    #[serde(default = "default_nested_block_comments")]
    pub nested_block_comments: bool,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            comment_text: CommentText::default(),
            nested_block_comments: default_nested_block_comments(),
        }
    }
}

impl TokenizerConfig {
    pub fn from_json_str(json: &str) -> Result<Self, Error> {
        serde_json::from_str(json).map_err(|e| ErrorImpl::Config(e).into())
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, Error> {
        serde_json::from_reader(reader).map_err(|e| ErrorImpl::Config(e).into())
    }
}

fn default_nested_block_comments() -> bool {
    false
}
