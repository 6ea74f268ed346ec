//! Toast Host Component
//!
//! Renders the toast stack in the top-right corner.

use leptos::prelude::*;

use crate::store::{store_dismiss, use_toast_store, ToastKind, ToastStateStoreFields};

#[component]
pub fn ToastHost() -> impl IntoView {
    let store = use_toast_store();

    view! {
        <div class="fixed top-4 right-4 z-[60] space-y-2">
            <For
                each=move || store.toasts().get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let class = match toast.kind {
                        ToastKind::Success => "toast px-4 py-3 rounded-lg shadow-lg text-sm text-white bg-green-600 cursor-pointer",
                        ToastKind::Error => "toast px-4 py-3 rounded-lg shadow-lg text-sm text-white bg-red-600 cursor-pointer",
                    };
                    view! {
                        <div class=class role="status" on:click=move |_| store_dismiss(store, id)>
                            {toast.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
