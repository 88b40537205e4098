// web_app/state.rs - View state for the product table
//
// All pagination and dialog state lives in one ViewState value and is
// mutated only through the operations below. The page component holds a
// single signal wrapping this struct; keeping the transitions here makes
// them testable without a Leptos runtime.

use crate::web_app::model::{Product, ProductDraft, ProductPage};

/// Page sizes offered by the "Item Per Page" selector
pub const PAGE_SIZE_OPTIONS: [u32; 5] = [5, 10, 25, 50, 100];

/// Page size on first render
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// What the edit dialog is open for
///
/// A tagged intent instead of an `(editing_id, is_new)` flag pair, so an
/// inconsistent combination cannot be represented.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DialogIntent {
    /// Creating a new product
    Add,
    /// Editing the existing product with this id
    Edit(i32),
}

impl DialogIntent {
    /// Id of the product being edited, if this is an edit flow
    pub fn editing_id(&self) -> Option<i32> {
        match self {
            DialogIntent::Add => None,
            DialogIntent::Edit(id) => Some(*id),
        }
    }
}

/// Client-owned view state, ephemeral and lost on reload
#[derive(Clone, Debug, PartialEq)]
pub struct ViewState {
    /// Last successfully loaded page; None until the first load lands
    pub page: Option<ProductPage>,
    /// 1-based page number
    pub current_page: u32,
    pub page_size: u32,
    /// Bumped to force a refetch of the current page after a mutation
    pub reload_tick: u32,
    /// Open dialog and its intent; None means closed
    pub dialog: Option<DialogIntent>,
    pub draft_name: String,
    pub draft_last_name: String,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            page: None,
            current_page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            reload_tick: 0,
            dialog: None,
            draft_name: String::new(),
            draft_last_name: String::new(),
        }
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total page count derived from the loaded envelope; 0 before the
    /// first load. Never stored.
    pub fn total_pages(&self) -> u32 {
        match &self.page {
            Some(page) => (page.total_count as f64 / self.page_size as f64).ceil() as u32,
            None => 0,
        }
    }

    /// Total record count across all pages; 0 before the first load
    pub fn total_count(&self) -> i64 {
        self.page.as_ref().map(|p| p.total_count).unwrap_or(0)
    }

    /// Replace the whole page with a freshly loaded one. Failed loads
    /// never reach this method, so prior page state survives them.
    pub fn page_loaded(&mut self, page: ProductPage) {
        self.page = Some(page);
    }

    pub fn set_page(&mut self, page: u32) {
        self.current_page = page;
    }

    /// Change the page size WITHOUT resetting the page number. The next
    /// load may ask for a page past the new end; the server then returns
    /// an empty page.
    pub fn set_page_size(&mut self, size: u32) {
        self.page_size = size;
    }

    /// Force one refetch of the current page at the current size
    pub fn request_reload(&mut self) {
        self.reload_tick = self.reload_tick.wrapping_add(1);
    }

    /// Open the dialog for a new product with empty drafts
    pub fn start_add(&mut self) {
        self.draft_name.clear();
        self.draft_last_name.clear();
        self.dialog = Some(DialogIntent::Add);
    }

    /// Open the dialog for an existing product, seeding the drafts from it
    pub fn start_edit(&mut self, product: &Product) {
        self.draft_name = product.name.clone();
        self.draft_last_name = product.last_name.clone();
        self.dialog = Some(DialogIntent::Edit(product.id));
    }

    /// Close the dialog and clear the drafts, whichever flow was active
    pub fn close_dialog(&mut self) {
        self.dialog = None;
        self.draft_name.clear();
        self.draft_last_name.clear();
    }

    pub fn set_draft_name(&mut self, value: String) {
        self.draft_name = value;
    }

    pub fn set_draft_last_name(&mut self, value: String) {
        self.draft_last_name = value;
    }

    /// Presence check applied before a create request. Whitespace-only
    /// values count as empty. Edits are not validated.
    pub fn draft_is_valid(&self) -> bool {
        !self.draft_name.trim().is_empty() && !self.draft_last_name.trim().is_empty()
    }

    /// Request body built from the drafts. Values are sent untrimmed;
    /// trimming applies only to the presence check.
    pub fn draft(&self) -> ProductDraft {
        ProductDraft {
            name: self.draft_name.clone(),
            last_name: self.draft_last_name.clone(),
        }
    }

    /// A create succeeded: jump to page 1, refetch, reset the dialog
    pub fn add_saved(&mut self) {
        self.current_page = 1;
        self.request_reload();
        self.close_dialog();
    }

    /// An update succeeded: refetch the current page, reset the dialog
    pub fn edit_saved(&mut self) {
        self.request_reload();
        self.close_dialog();
    }

    /// Whether a row's Edit/Delete buttons are replaced by an empty cell
    /// because that product is the one currently being edited
    pub fn actions_suppressed(&self, product_id: i32) -> bool {
        matches!(self.dialog, Some(DialogIntent::Edit(id)) if id == product_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: i32, name: &str, last_name: &str) -> Product {
        Product {
            id,
            name: name.to_string(),
            last_name: last_name.to_string(),
        }
    }

    fn loaded_page(count: usize, total: i64) -> ProductPage {
        ProductPage {
            products: (0..count as i32)
                .map(|i| product(i + 1, "Name", "Last"))
                .collect(),
            total_count: total,
        }
    }

    #[test]
    fn test_initial_state() {
        let state = ViewState::new();
        assert!(state.page.is_none());
        assert_eq!(state.current_page, 1);
        assert_eq!(state.page_size, DEFAULT_PAGE_SIZE);
        assert!(state.dialog.is_none());
        assert_eq!(state.draft_name, "");
        assert_eq!(state.draft_last_name, "");
        assert_eq!(state.total_pages(), 0);
        assert_eq!(state.total_count(), 0);
    }

    #[test]
    fn test_total_pages_is_ceiling_division() {
        let mut state = ViewState::new();
        state.page_size = 10;

        state.page_loaded(loaded_page(10, 100));
        assert_eq!(state.total_pages(), 10);

        state.page_loaded(loaded_page(10, 101));
        assert_eq!(state.total_pages(), 11);

        state.page_loaded(loaded_page(9, 9));
        assert_eq!(state.total_pages(), 1);

        state.page_loaded(loaded_page(0, 0));
        assert_eq!(state.total_pages(), 0);
    }

    #[test]
    fn test_page_size_change_keeps_page_number() {
        let mut state = ViewState::new();
        state.set_page(7);
        state.set_page_size(100);
        // No reset and no clamp: the next load may point past the end
        assert_eq!(state.current_page, 7);
        assert_eq!(state.page_size, 100);
    }

    #[test]
    fn test_start_add_clears_drafts() {
        let mut state = ViewState::new();
        state.draft_name = "stale".to_string();
        state.draft_last_name = "stale".to_string();

        state.start_add();
        assert_eq!(state.dialog, Some(DialogIntent::Add));
        assert_eq!(state.draft_name, "");
        assert_eq!(state.draft_last_name, "");
    }

    #[test]
    fn test_start_edit_seeds_drafts_from_product() {
        let mut state = ViewState::new();
        state.start_edit(&product(42, "Grace", "Hopper"));

        assert_eq!(state.dialog, Some(DialogIntent::Edit(42)));
        assert_eq!(state.draft_name, "Grace");
        assert_eq!(state.draft_last_name, "Hopper");
    }

    #[test]
    fn test_close_dialog_clears_everything() {
        let mut state = ViewState::new();
        state.start_edit(&product(42, "Grace", "Hopper"));

        state.close_dialog();
        assert!(state.dialog.is_none());
        assert_eq!(state.draft_name, "");
        assert_eq!(state.draft_last_name, "");
    }

    #[test]
    fn test_draft_validation_trims_whitespace() {
        let mut state = ViewState::new();
        state.start_add();

        assert!(!state.draft_is_valid());

        state.set_draft_name("Ada".to_string());
        assert!(!state.draft_is_valid());

        state.set_draft_last_name("   ".to_string());
        assert!(!state.draft_is_valid());

        state.set_draft_last_name("Lovelace".to_string());
        assert!(state.draft_is_valid());
    }

    #[test]
    fn test_draft_body_is_untrimmed() {
        let mut state = ViewState::new();
        state.set_draft_name(" Ada ".to_string());
        state.set_draft_last_name("Lovelace".to_string());

        let draft = state.draft();
        assert_eq!(draft.name, " Ada ");
        assert_eq!(draft.last_name, "Lovelace");
    }

    #[test]
    fn test_add_saved_returns_to_page_one() {
        let mut state = ViewState::new();
        state.set_page(5);
        state.start_add();
        state.set_draft_name("Ada".to_string());
        state.set_draft_last_name("Lovelace".to_string());
        let tick = state.reload_tick;

        state.add_saved();
        assert_eq!(state.current_page, 1);
        assert_eq!(state.reload_tick, tick + 1);
        assert!(state.dialog.is_none());
        assert_eq!(state.draft_name, "");
    }

    #[test]
    fn test_edit_saved_keeps_page_number() {
        let mut state = ViewState::new();
        state.set_page(3);
        state.start_edit(&product(42, "Grace", "Hopper"));
        let tick = state.reload_tick;

        state.edit_saved();
        assert_eq!(state.current_page, 3);
        assert_eq!(state.reload_tick, tick + 1);
        assert!(state.dialog.is_none());
    }

    #[test]
    fn test_delete_reload_keeps_page_number() {
        let mut state = ViewState::new();
        state.set_page(4);
        state.page_loaded(loaded_page(1, 31));
        let tick = state.reload_tick;

        // Deleting the last row of page 4 still reloads page 4
        state.request_reload();
        assert_eq!(state.current_page, 4);
        assert_eq!(state.reload_tick, tick + 1);
    }

    #[test]
    fn test_actions_suppressed_only_for_edited_row() {
        let mut state = ViewState::new();
        assert!(!state.actions_suppressed(1));

        state.start_edit(&product(2, "Grace", "Hopper"));
        assert!(state.actions_suppressed(2));
        assert!(!state.actions_suppressed(1));

        state.close_dialog();
        assert!(!state.actions_suppressed(2));

        // The add flow never suppresses row actions
        state.start_add();
        assert!(!state.actions_suppressed(2));
    }

    #[test]
    fn test_failed_load_leaves_prior_page() {
        let mut state = ViewState::new();
        state.page_loaded(loaded_page(3, 3));
        let before = state.clone();

        // A failed load never calls page_loaded; nothing changes
        assert_eq!(state, before);
        assert_eq!(state.page.as_ref().unwrap().products.len(), 3);
    }

    #[test]
    fn test_editing_id_helper() {
        assert_eq!(DialogIntent::Add.editing_id(), None);
        assert_eq!(DialogIntent::Edit(9).editing_id(), Some(9));
    }
}
