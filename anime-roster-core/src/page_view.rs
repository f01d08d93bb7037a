//! Client-side pagination and selection controller
//!
//! `PageView` owns the full list, a zero-based page index and an optional
//! selected item. Every operation is total: an out-of-range request is a no-op.
//!
//! Invariant: `page_index * page_size < len` whenever the list is non-empty.

use crate::types::CharacterRecord;

/// Items shown per page when nothing else is configured.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Pagination and selection state over a fixed list.
#[derive(Debug, Clone)]
pub struct PageView<T = CharacterRecord> {
    items: Vec<T>,
    page_index: usize,
    page_size: usize,
    selection: Option<T>,
}

impl<T> PageView<T> {
    /// Creates an empty view. A page size of 0 is treated as 1.
    pub fn new(page_size: usize) -> Self {
        Self {
            items: Vec::new(),
            page_index: 0,
            page_size: page_size.max(1),
            selection: None,
        }
    }

    /// Replaces the list, returns to the first page and clears the selection.
    pub fn load(&mut self, items: Vec<T>) {
        self.items = items;
        self.page_index = 0;
        self.selection = None;
    }

    /// Items of the current page, clipped to the list bounds.
    pub fn current_slice(&self) -> &[T] {
        let start = (self.page_index * self.page_size).min(self.items.len());
        let end = start.saturating_add(self.page_size).min(self.items.len());
        &self.items[start..end]
    }

    /// Whether `next_page` would move.
    pub fn has_next_page(&self) -> bool {
        (self.page_index + 1) * self.page_size < self.items.len()
    }

    /// Whether `previous_page` would move.
    pub fn has_previous_page(&self) -> bool {
        self.page_index > 0
    }

    /// Advances one page if there is one. Returns whether the page changed.
    pub fn next_page(&mut self) -> bool {
        if self.has_next_page() {
            self.page_index += 1;
            true
        } else {
            false
        }
    }

    /// Goes back one page unless already on the first. Returns whether the page changed.
    pub fn previous_page(&mut self) -> bool {
        if self.has_previous_page() {
            self.page_index -= 1;
            true
        } else {
            false
        }
    }

    /// Sets the selection to `item`.
    pub fn select(&mut self, item: T) {
        self.selection = Some(item);
    }

    /// Clears the selection.
    pub fn close_selection(&mut self) {
        self.selection = None;
    }

    pub fn selection(&self) -> Option<&T> {
        self.selection.as_ref()
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Number of pages; 0 for an empty list.
    pub fn page_count(&self) -> usize {
        self.items.len().div_ceil(self.page_size)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T: Clone> PageView<T> {
    /// Selects the item at `offset` within the current page.
    /// Returns `false` and leaves the selection untouched when `offset` is out of range.
    pub fn select_at(&mut self, offset: usize) -> bool {
        match self.current_slice().get(offset).cloned() {
            Some(item) => {
                self.select(item);
                true
            }
            None => false,
        }
    }
}

impl<T> Default for PageView<T> {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}
