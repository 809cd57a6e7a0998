use std::num::NonZeroUsize;

use crate::types::WordEntry;

/// The visible slice of an entry list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page<'a> {
    pub visible: &'a [WordEntry],
    pub has_more: bool,
    /// Index of `visible[0]` in the full list
    pub begin: usize,
}

impl<'a> Page<'a> {
    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }

    /// Visible entries paired with their 1-based display number
    pub fn numbered(&self) -> impl Iterator<Item = (usize, &'a WordEntry)> + 'a {
        let begin = self.begin;
        self.visible
            .iter()
            .enumerate()
            .map(move |(i, entry)| (begin + i + 1, entry))
    }
}

/// Splits entry lists into fixed-size pages
#[derive(Debug, Clone, Copy)]
pub struct PaginationCursor {
    page_size: NonZeroUsize,
}

impl PaginationCursor {
    pub fn new(page_size: NonZeroUsize) -> Self {
        Self { page_size }
    }

    pub fn page_size(&self) -> usize {
        self.page_size.get()
    }

    pub fn page<'a>(&self, entries: &'a [WordEntry], page_index: usize) -> Page<'a> {
        page(entries, page_index, self.page_size)
    }
}

/// Out-of-range pages are empty and report no more pages.
pub fn page(entries: &[WordEntry], page_index: usize, page_size: NonZeroUsize) -> Page<'_> {
    let size = page_size.get();
    let begin = page_index.saturating_mul(size);

    let visible = if begin >= entries.len() {
        &entries[entries.len()..]
    } else {
        let end = begin.saturating_add(size).min(entries.len());
        &entries[begin..end]
    };

    Page {
        visible,
        has_more: begin.saturating_add(visible.len()) < entries.len(),
        begin: begin.min(entries.len()),
    }
}
