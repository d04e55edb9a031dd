use log::debug;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::SubtitleError;
use crate::file_utils::FileManager;

// @module: Subtitle file loading and block handling

// @const: Blank line between two subtitle blocks
pub const BLOCK_SEPARATOR: &str = "\n\n";

// @const: Accepted subtitle file extension
pub const SUBTITLE_EXTENSION: &str = "srt";

// @struct: One subtitle block kept as opaque text (index, timecode, caption lines)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubtitleBlock(String);

impl SubtitleBlock {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SubtitleBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// @struct: Blocks loaded from one subtitle file
#[derive(Debug, Clone)]
pub struct SubtitleCollection {
    // @field: Source file path
    pub source_file: PathBuf,

    // @field: Blocks in file order
    pub blocks: Vec<SubtitleBlock>,
}

impl SubtitleCollection {
    /// Load and split the subtitle file at `path`
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SubtitleError> {
        let path = path.as_ref();
        validate_subtitle_path(path)?;

        let bytes = fs::read(path).map_err(|e| SubtitleError::Unreadable {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let content = String::from_utf8(bytes)
            .map_err(|_| SubtitleError::InvalidEncoding(path.to_path_buf()))?;

        let blocks = Self::split_blocks(&content);
        debug!("Loaded {} subtitle blocks from {:?}", blocks.len(), path);

        Ok(Self {
            source_file: path.to_path_buf(),
            blocks,
        })
    }

    /// Split raw subtitle text on blank lines.
    ///
    /// A leading byte-order mark is dropped and CRLF line endings are read as LF.
    /// Whitespace-only input has no blocks.
    pub fn split_blocks(content: &str) -> Vec<SubtitleBlock> {
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);
        let normalized = content.replace("\r\n", "\n");
        let trimmed = normalized.trim();

        if trimmed.is_empty() {
            return Vec::new();
        }

        trimmed
            .split(BLOCK_SEPARATOR)
            .map(SubtitleBlock::new)
            .collect()
    }

    /// Join blocks back into subtitle text
    pub fn join_blocks(blocks: &[SubtitleBlock]) -> String {
        blocks
            .iter()
            .map(SubtitleBlock::as_str)
            .collect::<Vec<_>>()
            .join(BLOCK_SEPARATOR)
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

/// Load the blocks of the subtitle file at `path`
pub fn load_blocks<P: AsRef<Path>>(path: P) -> Result<Vec<SubtitleBlock>, SubtitleError> {
    SubtitleCollection::load(path).map(|collection| collection.blocks)
}

// @validates: Path exists, is a file and ends in .srt
pub fn validate_subtitle_path(path: &Path) -> Result<(), SubtitleError> {
    if !FileManager::file_exists(path) {
        return Err(if path.exists() {
            SubtitleError::NotAFile(path.to_path_buf())
        } else {
            SubtitleError::NotFound(path.to_path_buf())
        });
    }

    let has_srt_extension = path
        .extension()
        .is_some_and(|ext| ext.to_string_lossy().eq_ignore_ascii_case(SUBTITLE_EXTENSION));
    if !has_srt_extension {
        return Err(SubtitleError::UnsupportedExtension(path.to_path_buf()));
    }

    Ok(())
}
