//! Textual listings: item catalog in, slide order out.
//!
//! ## Input
//!
//! ```text
//! 4
//! H 3 cat beach sun
//! V 2 selfie smile
//! V 2 garden selfie
//! H 2 garden cat
//! ```
//!
//! Line 1 is the item count. Each item line is
//! `<H|V> <tag-count> <tag>...`; item ids follow line order from 0.
//!
//! ## Output
//!
//! ```text
//! 3
//! 0
//! 3
//! 1 2
//! ```
//!
//! Line 1 is the slide count, then one slide per line.

use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::types::{Catalog, Item, ItemId, Orientation, Sequence, TagInterner};

/// Error type for listing operations. Line numbers are 1-based.
#[derive(Debug, thiserror::Error)]
pub enum ListingError {
    /// The listing has no header line.
    #[error("Listing is empty, expected an item count on line 1")]
    MissingHeader,
    /// The header is not a non-negative integer.
    #[error("Line {line}: invalid item count {value:?}")]
    InvalidCount {
        /// Line number.
        line: usize,
        /// Offending text.
        value: String,
    },
    /// Fewer item lines than the header announced.
    #[error("Line {line}: expected item {expected} of {declared}, found end of listing")]
    MissingItem {
        /// Line number where the item was expected.
        line: usize,
        /// 0-based index of the missing item.
        expected: usize,
        /// Count announced by the header.
        declared: usize,
    },
    /// Orientation letter is neither `H` nor `V`.
    #[error("Line {line}: invalid orientation {letter:?}, expected H or V")]
    InvalidOrientation {
        /// Line number.
        line: usize,
        /// Offending token.
        letter: String,
    },
    /// Tag count token missing or not an integer.
    #[error("Line {line}: invalid tag count {value:?}")]
    InvalidTagCount {
        /// Line number.
        line: usize,
        /// Offending token.
        value: String,
    },
    /// Tag count does not match the number of tag tokens.
    #[error("Line {line}: declared {declared} tags, found {found}")]
    TagCountMismatch {
        /// Line number.
        line: usize,
        /// Declared count.
        declared: usize,
        /// Tokens present.
        found: usize,
    },
    /// Non-blank content after the last announced item.
    #[error("Line {line}: unexpected content after {declared} items")]
    TrailingContent {
        /// Line number.
        line: usize,
        /// Count announced by the header.
        declared: usize,
    },
    /// Item count does not fit an item id.
    #[error("Item count {0} exceeds the supported maximum")]
    TooManyItems(usize),
    /// Reading or writing a file failed.
    #[error("I/O error on {path}: {source}")]
    File {
        /// File path.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
    /// Writing to an output stream failed.
    #[error("Write error: {0}")]
    Write(#[from] std::io::Error),
}

impl ListingError {
    fn file(path: &Path) -> impl FnOnce(std::io::Error) -> Self + '_ {
        move |source| Self::File {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Parse a catalog from listing text.
pub fn parse_catalog(text: &str) -> Result<Catalog, ListingError> {
    let mut lines = text.lines().enumerate().map(|(i, l)| (i + 1, l));

    let (header_line, header) = lines.next().ok_or(ListingError::MissingHeader)?;
    let declared: usize = header.trim().parse().map_err(|_| ListingError::InvalidCount {
        line: header_line,
        value: header.trim().to_string(),
    })?;
    if declared > u32::MAX as usize {
        return Err(ListingError::TooManyItems(declared));
    }

    let mut interner = TagInterner::new();
    // The header is untrusted; never reserve more than the listing can hold.
    let mut items = Vec::with_capacity(declared.min(text.lines().count()));

    for expected in 0..declared {
        let (line, text) = lines.next().ok_or(ListingError::MissingItem {
            line: header_line + expected + 1,
            expected,
            declared,
        })?;
        items.push(parse_item(ItemId::new(expected as u32), line, text, &mut interner)?);
    }

    if let Some((line, _)) = lines.find(|(_, l)| !l.trim().is_empty()) {
        return Err(ListingError::TrailingContent { line, declared });
    }

    let catalog = Catalog::new(items);
    tracing::debug!(
        items = catalog.len(),
        single = catalog.count(Orientation::Single),
        half = catalog.count(Orientation::Half),
        distinct_tags = interner.len(),
        "parsed catalog"
    );
    Ok(catalog)
}

fn parse_item(
    id: ItemId,
    line: usize,
    text: &str,
    interner: &mut TagInterner,
) -> Result<Item, ListingError> {
    let mut tokens = text.split_whitespace();

    let letter = tokens.next().unwrap_or_default();
    let orientation =
        Orientation::from_letter(letter).ok_or_else(|| ListingError::InvalidOrientation {
            line,
            letter: letter.to_string(),
        })?;

    let count_token = tokens.next().unwrap_or_default();
    let declared: usize = count_token.parse().map_err(|_| ListingError::InvalidTagCount {
        line,
        value: count_token.to_string(),
    })?;

    let labels: Vec<&str> = tokens.collect();
    if labels.len() != declared {
        return Err(ListingError::TagCountMismatch {
            line,
            declared,
            found: labels.len(),
        });
    }

    let tags = labels.into_iter().map(|label| interner.intern(label));
    Ok(Item::new(id, orientation, tags))
}

/// Read and parse a catalog file.
pub fn read_catalog(path: impl AsRef<Path>) -> Result<Catalog, ListingError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(ListingError::file(path))?;
    parse_catalog(&text)
}

/// Write a sequence listing to a stream.
pub fn write_sequence<W: Write>(sequence: &Sequence, mut out: W) -> Result<(), ListingError> {
    writeln!(out, "{}", sequence.len())?;
    for slide in &sequence.slides {
        writeln!(out, "{}", slide.items)?;
    }
    out.flush()?;
    Ok(())
}

/// Render a sequence listing to a string.
pub fn render_sequence(sequence: &Sequence) -> String {
    let mut text = format!("{}\n", sequence.len());
    for slide in &sequence.slides {
        text.push_str(&slide.items.to_string());
        text.push('\n');
    }
    text
}

/// Write a sequence listing to a file, replacing it if present.
pub fn write_sequence_file(
    sequence: &Sequence,
    path: impl AsRef<Path>,
) -> Result<(), ListingError> {
    let path = path.as_ref();
    let file = fs::File::create(path).map_err(ListingError::file(path))?;
    write_sequence(sequence, BufWriter::new(file)).map_err(|e| match e {
        ListingError::Write(source) => ListingError::File {
            path: path.to_path_buf(),
            source,
        },
        other => other,
    })
}
