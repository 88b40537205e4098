// tests/component_logic_tests.rs - Logic behind the UI components
//
// Components can't be instantiated without a Leptos runtime, so these
// tests cover the decisions the components make: dialog labels, the
// three-way table render rule, and pagination arithmetic.

use product_admin::web_app::components::dialog::{confirm_label, dialog_title};
use product_admin::web_app::model::{Product, ProductPage};
use product_admin::web_app::state::{DialogIntent, ViewState};

#[test]
fn dialog_labels_follow_the_intent() {
    assert_eq!(dialog_title(DialogIntent::Add), "Add New Product");
    assert_eq!(confirm_label(DialogIntent::Add), "Add");

    assert_eq!(dialog_title(DialogIntent::Edit(1)), "Edit Product");
    assert_eq!(confirm_label(DialogIntent::Edit(1)), "Save");
}

#[test]
fn table_render_rule_is_three_way() {
    // Not yet loaded -> loading placeholder
    let page: Option<ProductPage> = None;
    assert!(page.is_none());

    // Loaded but empty -> no-data placeholder
    let page = Some(ProductPage {
        products: vec![],
        total_count: 0,
    });
    assert!(page.as_ref().unwrap().products.is_empty());

    // Loaded with data -> one row per product
    let page = Some(ProductPage {
        products: (1..=4)
            .map(|i| Product {
                id: i,
                name: format!("N{i}"),
                last_name: format!("L{i}"),
            })
            .collect(),
        total_count: 4,
    });
    assert_eq!(page.unwrap().products.len(), 4);
}

#[test]
fn edited_row_renders_an_empty_actions_cell() {
    let mut state = ViewState::new();
    let target = Product {
        id: 2,
        name: "Grace".to_string(),
        last_name: "Hopper".to_string(),
    };
    state.start_edit(&target);

    assert!(state.actions_suppressed(2));
    assert!(!state.actions_suppressed(1));
    // The add flow suppresses nothing
    state.close_dialog();
    state.start_add();
    assert!(!state.actions_suppressed(2));
}

#[test]
fn pagination_disables_at_the_edges() {
    let total_pages = 3u32;

    for (current, prev_enabled, next_enabled) in
        [(1u32, false, true), (2, true, true), (3, true, false)]
    {
        assert_eq!(current > 1, prev_enabled, "page {current}");
        assert_eq!(current < total_pages, next_enabled, "page {current}");
    }
}

#[test]
fn pagination_renders_one_button_per_page() {
    let total_pages = 6u32;
    let buttons: Vec<u32> = (1..=total_pages).collect();
    assert_eq!(buttons.len(), 6);
    assert_eq!(buttons.first(), Some(&1));
    assert_eq!(buttons.last(), Some(&6));
}
