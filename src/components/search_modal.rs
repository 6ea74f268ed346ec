//! Search Modal Component
//!
//! Name and department search form shown over the directory.

use leptos::prelude::*;

use crate::filter::SearchCriteria;
use crate::models::Department;

const FIELD_CLASS: &str = "w-full px-4 py-2 text-sm border border-gray-300 dark:border-gray-600 rounded-lg bg-white dark:bg-gray-700 text-gray-900 dark:text-white focus:outline-none focus:ring-2 focus:ring-blue-500";

#[component]
pub fn SearchModal(
    draft: Memo<SearchCriteria>,
    on_name: Callback<String>,
    on_department: Callback<String>,
    on_find: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let department_value = move || {
        draft
            .get()
            .department
            .and_then(|d| d.code())
            .map(|c| c.to_string())
            .unwrap_or_default()
    };

    view! {
        <div class="fixed inset-0 z-50 flex items-center justify-center bg-black/50 px-4 sm:px-6 py-8">
            <div class="relative w-full max-w-2xl bg-white dark:bg-gray-800 rounded-lg shadow-2xl">
                <div class="flex items-center justify-between px-6 py-4 border-b border-gray-200 dark:border-gray-700">
                    <h3 class="text-xl font-semibold text-gray-900 dark:text-white capitalize">"Search Employee"</h3>
                    <button
                        aria-label="Close modal"
                        class="text-gray-400 hover:text-gray-900 dark:hover:text-white transition"
                        on:click=move |_| on_close.run(())
                    >
                        "✕"
                    </button>
                </div>

                <form
                    class="px-6 py-6 space-y-6"
                    on:submit=move |ev: web_sys::SubmitEvent| {
                        ev.prevent_default();
                        on_find.run(());
                    }
                >
                    <div>
                        <label for="name" class="block text-sm font-medium text-gray-900 dark:text-white mb-1">"Name"</label>
                        <input
                            id="name"
                            type="text"
                            placeholder="Enter employee name"
                            class=FIELD_CLASS
                            prop:value=move || draft.get().name
                            on:input=move |ev| on_name.run(event_target_value(&ev))
                        />
                    </div>

                    <div>
                        <label for="department" class="block text-sm font-medium text-gray-900 dark:text-white mb-1">"Department"</label>
                        <select
                            id="department"
                            class=FIELD_CLASS
                            prop:value=department_value
                            on:change=move |ev| on_department.run(event_target_value(&ev))
                        >
                            <option value="" disabled=true>"Select department"</option>
                            {Department::ALL
                                .into_iter()
                                .map(|dept| {
                                    let code = dept.code().unwrap_or_default().to_string();
                                    view! { <option value=code>{dept.label()}</option> }
                                })
                                .collect_view()}
                        </select>
                    </div>

                    <div class="flex justify-end">
                        <button
                            type="submit"
                            class="inline-flex items-center px-5 py-2 bg-blue-600 hover:bg-blue-700 text-white text-sm font-medium rounded-lg shadow-md transition-all duration-200"
                        >
                            "Find"
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
