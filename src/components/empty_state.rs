//! Empty State Component

use leptos::prelude::*;

/// Shown under the table when no employee is visible
#[component]
pub fn EmptyState(on_add: Callback<()>) -> impl IntoView {
    view! {
        <div class="text-center py-16">
            <svg class="mx-auto h-12 w-12 text-gray-400" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="1.5" d="M9.172 16.172a4 4 0 015.656 0M9 10h.01M15 10h.01M21 12a9 9 0 11-18 0 9 9 0 0118 0z" />
            </svg>
            <h3 class="mt-2 text-lg font-medium text-white">"No employees found"</h3>
            <p class="mt-1 text-sm text-gray-400">"Add a new employee to get started"</p>
            <div class="mt-6">
                <button
                    class="inline-flex items-center px-4 py-2 border border-transparent rounded-md shadow-sm text-sm font-medium text-white bg-blue-600 hover:bg-blue-700"
                    on:click=move |_| on_add.run(())
                >
                    "Add Employee"
                </button>
            </div>
        </div>
    }
}
