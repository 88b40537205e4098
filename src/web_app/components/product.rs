// web_app/components/product.rs - Product table and pagination components
//
// Components for the product table including:
// - ProductTable: the paginated table with Edit/Delete actions
// - Pagination: 1-based numbered page navigation
// - PageSizeSelect: the "Item Per Page" selector

use leptos::prelude::*;

use crate::web_app::model::{Product, ProductPage};
use crate::web_app::state::PAGE_SIZE_OPTIONS;

/// The product table
///
/// Three render states, in order: a single loading row while no page has
/// arrived yet, a single no-data row for an empty page, otherwise one row
/// per product. The row whose product is currently being edited gets an
/// empty actions cell instead of the Edit/Delete buttons.
#[component]
pub fn ProductTable(
    /// Last successfully loaded page, None until the first load lands
    page: Signal<Option<ProductPage>>,
    /// Id of the product open in the edit dialog, if any
    editing_id: Signal<Option<i32>>,
    /// Edit click handler, receives the full row
    on_edit: Callback<Product>,
    /// Delete click handler, receives the row id
    on_delete: Callback<i32>,
) -> impl IntoView {
    view! {
        <table class="w-full text-left border-collapse">
            <thead>
                <tr class="border-b-2 border-gray-200 text-xs font-semibold text-gray-500 uppercase tracking-wider">
                    <th scope="col" class="px-4 py-3">"NAME"</th>
                    <th scope="col" class="px-4 py-3">"LAST NAME"</th>
                    <th scope="col" class="px-4 py-3">"ACTIONS"</th>
                </tr>
            </thead>
            <tbody>
                {move || match page.get() {
                    None => view! {
                        <tr>
                            <td colspan="3" class="px-4 py-6 text-center text-gray-400">
                                "Loading..."
                            </td>
                        </tr>
                    }.into_any(),
                    Some(page) if page.products.is_empty() => view! {
                        <tr>
                            <td colspan="3" class="px-4 py-6 text-center text-gray-400">
                                "No data available"
                            </td>
                        </tr>
                    }.into_any(),
                    Some(page) => page.products.into_iter().map(|product| view! {
                        <ProductRow
                            product=product
                            editing_id=editing_id
                            on_edit=on_edit
                            on_delete=on_delete
                        />
                    }).collect_view().into_any(),
                }}
            </tbody>
        </table>
    }
}

/// One table row with its action buttons
#[component]
fn ProductRow(
    product: Product,
    editing_id: Signal<Option<i32>>,
    on_edit: Callback<Product>,
    on_delete: Callback<i32>,
) -> impl IntoView {
    let product_id = product.id;
    let product_for_edit = product.clone();

    view! {
        <tr class="border-b border-gray-100 hover:bg-gray-50 transition-colors">
            <td class="px-4 py-3 text-gray-900">{product.name.clone()}</td>
            <td class="px-4 py-3 text-gray-900">{product.last_name.clone()}</td>
            <td class="px-4 py-3">
                {move || {
                    if editing_id.get() == Some(product_id) {
                        // The product open in the dialog loses its row actions
                        view! { <div></div> }.into_any()
                    } else {
                        let product_for_edit = product_for_edit.clone();
                        view! {
                            <div class="flex gap-2">
                                <button
                                    type="button"
                                    class="px-3 py-1.5 rounded-lg text-sm font-medium bg-blue-600 text-white \
                                           hover:bg-blue-700 shadow-sm transition-all"
                                    on:click=move |_| on_edit.run(product_for_edit.clone())
                                >
                                    "Edit"
                                </button>
                                <button
                                    type="button"
                                    class="px-3 py-1.5 rounded-lg text-sm font-medium bg-red-600 text-white \
                                           hover:bg-red-700 shadow-sm transition-all"
                                    on:click=move |_| on_delete.run(product_id)
                                >
                                    "Delete"
                                </button>
                            </div>
                        }.into_any()
                    }
                }}
            </td>
        </tr>
    }
}

/// Pagination component
///
/// 1-based numbered buttons with previous/next. The page number is not
/// clamped here; the owner decides what a valid page is.
#[component]
pub fn Pagination(
    /// Current page (1-based)
    current_page: Signal<u32>,
    /// Total number of pages
    total_pages: Signal<u32>,
    /// Called with the newly selected page number
    on_page_change: Callback<u32>,
) -> impl IntoView {
    let can_go_prev = move || current_page.get() > 1;
    let can_go_next = move || current_page.get() < total_pages.get();

    view! {
        <div class="flex items-center justify-center gap-2 mt-8 mb-4">
            <button
                type="button"
                class="px-4 py-2 bg-white border border-gray-200 rounded-lg shadow-sm \
                       disabled:opacity-50 disabled:cursor-not-allowed \
                       hover:bg-gray-50 hover:border-gray-300 transition-all font-medium text-gray-700"
                disabled=move || !can_go_prev()
                on:click=move |_| {
                    if can_go_prev() {
                        on_page_change.run(current_page.get() - 1);
                    }
                }
            >
                "← Previous"
            </button>

            {move || {
                let current = current_page.get();
                (1..=total_pages.get()).map(|page| view! {
                    <button
                        type="button"
                        class=move || {
                            if page == current {
                                "px-3 py-2 rounded-lg text-sm font-bold bg-blue-600 text-white shadow-sm transition-all"
                            } else {
                                "px-3 py-2 rounded-lg text-sm font-medium bg-white border border-gray-200 \
                                 text-gray-700 hover:bg-gray-50 hover:border-gray-300 transition-all"
                            }
                        }
                        on:click=move |_| on_page_change.run(page)
                    >
                        {page}
                    </button>
                }).collect_view()
            }}

            <button
                type="button"
                class="px-4 py-2 bg-white border border-gray-200 rounded-lg shadow-sm \
                       disabled:opacity-50 disabled:cursor-not-allowed \
                       hover:bg-gray-50 hover:border-gray-300 transition-all font-medium text-gray-700"
                disabled=move || !can_go_next()
                on:click=move |_| {
                    if can_go_next() {
                        on_page_change.run(current_page.get() + 1);
                    }
                }
            >
                "Next →"
            </button>
        </div>
    }
}

/// Page size selector
///
/// Changing the size does NOT reset the page number; the owner keeps the
/// current page and refetches at the new size.
#[component]
pub fn PageSizeSelect(
    /// Current page size
    page_size: Signal<u32>,
    /// Called with the newly selected size
    on_change: Callback<u32>,
) -> impl IntoView {
    view! {
        <div class="flex items-center gap-2">
            <label for="pageSize" class="text-sm font-medium text-gray-600">
                "Item Per Page: "
            </label>
            <select
                id="pageSize"
                class="px-3 py-2 border border-gray-300 rounded-lg bg-white text-sm \
                       focus:ring-2 focus:ring-blue-500 focus:border-transparent \
                       outline-none cursor-pointer shadow-sm"
                on:change=move |ev| {
                    if let Ok(size) = event_target_value(&ev).parse::<u32>() {
                        on_change.run(size);
                    }
                }
            >
                {PAGE_SIZE_OPTIONS.into_iter().map(|size| view! {
                    <option
                        value=size.to_string()
                        selected=move || page_size.get() == size
                    >
                        {size}
                    </option>
                }).collect_view()}
            </select>
        </div>
    }
}
