// web_app/pages/products.rs - Product table page
//
// The page owns every piece of view state and every network call. Reads
// flow through one Resource keyed on (page, size, reload tick); an effect
// mirrors successful results into the state, so a failed load leaves the
// previous page on screen. Mutations are Actions that refetch the
// authoritative page on success instead of patching local state.

use leptos::prelude::*;

use crate::web_app::components::*;
use crate::web_app::model::Product;
use crate::web_app::server_fns::{create_product, delete_product, list_products, update_product};
use crate::web_app::state::{DialogIntent, ViewState};

/// Main product administration page
#[component]
pub fn ProductsPage() -> impl IntoView {
    let state = RwSignal::new(ViewState::new());

    // One reactive source for page loads. Only these three fields key the
    // fetch; draft keystrokes and dialog changes do not refetch.
    let page_resource = Resource::new(
        move || state.with(|s| (s.current_page, s.page_size, s.reload_tick)),
        |(page, page_size, _)| async move { list_products(page, page_size).await },
    );

    // Mirror successful loads into the state. Failures are logged and the
    // prior page stays on screen.
    Effect::new(move || {
        if let Some(result) = page_resource.get() {
            match result {
                Ok(page) => state.update(|s| s.page_loaded(page)),
                Err(e) => leptos::logging::error!("Error fetching products: {e}"),
            }
        }
    });

    // Confirm from the dialog. Add validates presence first; edit does not.
    let save_action = Action::new(move |intent: &DialogIntent| {
        let intent = *intent;
        async move {
            match intent {
                DialogIntent::Add => {
                    let (draft, valid) =
                        state.with_untracked(|s| (s.draft(), s.draft_is_valid()));
                    if !valid {
                        leptos::logging::error!("Name and Last Name are required.");
                        return;
                    }
                    match create_product(draft.name, draft.last_name).await {
                        Ok(()) => state.update(|s| s.add_saved()),
                        Err(e) => leptos::logging::error!("Error adding new product: {e}"),
                    }
                }
                DialogIntent::Edit(id) => {
                    let draft = state.with_untracked(|s| s.draft());
                    match update_product(id, draft.name, draft.last_name).await {
                        Ok(()) => state.update(|s| s.edit_saved()),
                        Err(e) => leptos::logging::error!("Error editing product: {e}"),
                    }
                }
            }
        }
    });

    let delete_action = Action::new(move |id: &i32| {
        let id = *id;
        async move {
            match delete_product(id).await {
                Ok(()) => state.update(|s| s.request_reload()),
                Err(e) => leptos::logging::error!("Error deleting product: {e}"),
            }
        }
    });

    // Derived views over the one state value
    let page_data = Signal::derive(move || state.with(|s| s.page.clone()));
    let current_page = Signal::derive(move || state.with(|s| s.current_page));
    let page_size = Signal::derive(move || state.with(|s| s.page_size));
    let total_pages = Signal::derive(move || state.with(|s| s.total_pages()));
    let total_count = Signal::derive(move || state.with(|s| s.total_count()));
    let editing_id =
        Signal::derive(move || state.with(|s| s.dialog.and_then(|d| d.editing_id())));
    let draft_name = Signal::derive(move || state.with(|s| s.draft_name.clone()));
    let draft_last_name = Signal::derive(move || state.with(|s| s.draft_last_name.clone()));
    // Memoized so the dialog subtree is only rebuilt when the intent
    // itself changes, not on every keystroke.
    let dialog_intent = Memo::new(move |_| state.with(|s| s.dialog));

    // Intents, each delegating to one ViewState operation
    let on_page_change = Callback::new(move |page: u32| state.update(|s| s.set_page(page)));
    let on_page_size_change =
        Callback::new(move |size: u32| state.update(|s| s.set_page_size(size)));
    let on_add = Callback::new(move |()| state.update(|s| s.start_add()));
    let on_edit = Callback::new(move |product: Product| state.update(|s| s.start_edit(&product)));
    let on_delete = Callback::new(move |id: i32| {
        delete_action.dispatch(id);
    });
    let on_save = Callback::new(move |intent: DialogIntent| {
        save_action.dispatch(intent);
    });
    let on_close = Callback::new(move |()| state.update(|s| s.close_dialog()));
    let on_name_change =
        Callback::new(move |value: String| state.update(|s| s.set_draft_name(value)));
    let on_last_name_change =
        Callback::new(move |value: String| state.update(|s| s.set_draft_last_name(value)));

    view! {
        <div class="min-h-screen bg-gray-50 font-sans text-gray-900">
            <main class="max-w-4xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
                <section class="bg-white rounded-2xl shadow-sm p-6 border border-gray-100">
                    <div class="flex justify-between items-center mb-6">
                        <h1 class="text-2xl font-bold text-gray-900">"Product Table"</h1>
                        <Button on_click=on_add>
                            "Add New Product"
                        </Button>
                    </div>

                    <ProductTable
                        page=page_data
                        editing_id=editing_id
                        on_edit=on_edit
                        on_delete=on_delete
                    />
                </section>

                <div class="flex flex-col sm:flex-row justify-between items-center gap-4 mt-6">
                    <PageSizeSelect
                        page_size=page_size
                        on_change=on_page_size_change
                    />
                    <Pagination
                        current_page=current_page
                        total_pages=total_pages
                        on_page_change=on_page_change
                    />
                </div>

                <div class="text-sm text-gray-500 mt-2">
                    "Total Count: " {total_count}
                    <br />
                    "Total Pages: " {total_pages}
                </div>
            </main>

            // The dialog exists in the DOM only while an intent is active
            {move || {
                dialog_intent.get().map(|intent| view! {
                    <ProductEditDialog
                        intent=intent
                        name=draft_name
                        last_name=draft_last_name
                        on_name_change=on_name_change
                        on_last_name_change=on_last_name_change
                        on_save=on_save
                        on_close=on_close
                    />
                })
            }}
        </div>
    }
}
