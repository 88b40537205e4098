// web_app/components/dialog.rs - Product add/edit dialog
//
// Fully controlled modal: every value shown comes from the parent and
// every change goes straight back through a callback. The parent renders
// this component only while a dialog intent is active, so there is no
// DOM presence (and no retained state) when closed.

use leptos::prelude::*;

use crate::web_app::components::common::{Button, ModalWrapper, SecondaryButton, TextInput};
use crate::web_app::state::DialogIntent;

/// Title shown in the modal header for a given intent
pub fn dialog_title(intent: DialogIntent) -> &'static str {
    match intent {
        DialogIntent::Add => "Add New Product",
        DialogIntent::Edit(_) => "Edit Product",
    }
}

/// Label of the confirm button for a given intent
pub fn confirm_label(intent: DialogIntent) -> &'static str {
    match intent {
        DialogIntent::Add => "Add",
        DialogIntent::Edit(_) => "Save",
    }
}

/// The add/edit dialog
///
/// Confirm reports the intent through `on_save` and nothing else; whether
/// the dialog then closes is the owner's call, so a failed save keeps it
/// open. Cancel (and Escape, and a backdrop click) only ever runs
/// `on_close`.
#[component]
pub fn ProductEditDialog(
    /// Why the dialog is open
    intent: DialogIntent,
    /// Parent-owned draft values
    name: Signal<String>,
    last_name: Signal<String>,
    /// Per-keystroke draft updates
    on_name_change: Callback<String>,
    on_last_name_change: Callback<String>,
    /// Confirm, carrying the intent back to the owner
    on_save: Callback<DialogIntent>,
    /// Close without saving
    on_close: Callback<()>,
) -> impl IntoView {
    view! {
        <ModalWrapper title=dialog_title(intent) on_close=on_close>
            <div class="space-y-4">
                <div>
                    <label class="block text-sm font-medium text-gray-600 mb-1">"Name:"</label>
                    <TextInput value=name on_input=on_name_change />
                </div>
                <div>
                    <label class="block text-sm font-medium text-gray-600 mb-1">"Last Name:"</label>
                    <TextInput value=last_name on_input=on_last_name_change />
                </div>
                <div class="flex justify-end gap-3 pt-2">
                    <Button on_click=Callback::new(move |()| on_save.run(intent))>
                        {confirm_label(intent)}
                    </Button>
                    <SecondaryButton on_click=on_close>
                        "Cancel"
                    </SecondaryButton>
                </div>
            </div>
        </ModalWrapper>
    }
}
