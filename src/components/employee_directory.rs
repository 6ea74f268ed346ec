//! Employee Directory Page
//!
//! Loads the collection from local storage when mounted and wires the
//! search, sort, reset and delete handlers to `DirectoryState`.

use leptos::prelude::*;

use crate::components::{EmployeeTable, EmptyState, SearchModal};
use crate::context::use_app_context;
use crate::directory::DirectoryState;
use crate::error::DirectoryError;
use crate::models::{Employee, EmployeeId};
use crate::repository::EmployeeRepository;
use crate::routes::Route;

/// Read the stored collection; an unusable storage reads as empty
fn load_employees(storage_key: &str) -> Vec<Employee> {
    match EmployeeRepository::browser(storage_key) {
        Ok(repo) => repo.load(),
        Err(e) => {
            tracing::warn!(error = %e, "local storage unavailable, starting empty");
            Vec::new()
        }
    }
}

#[component]
pub fn EmployeeDirectory() -> impl IntoView {
    let ctx = use_app_context();
    let config = ctx.config();
    let state = RwSignal::new(DirectoryState::new(load_employees(&config.storage_key)));

    // Derived view state
    let visible = Memo::new(move |_| state.with(|s| s.visible().to_vec()));
    let sort_order = Memo::new(move |_| state.with(|s| s.sort_order()));
    let draft = Memo::new(move |_| state.with(|s| s.draft().cloned().unwrap_or_default()));
    let search_open = Memo::new(move |_| state.with(|s| s.draft().is_some()));
    let filter_active = Memo::new(move |_| state.with(|s| s.is_filter_active()));
    let can_reset = Memo::new(move |_| state.with(|s| s.can_reset()));

    // Search
    let on_name = Callback::new(move |name: String| state.update(|s| s.set_draft_name(name)));
    let on_department = Callback::new(move |code: String| state.update(|s| s.set_draft_department(&code)));
    let on_close = Callback::new(move |_: ()| state.update(|s| s.close_search()));
    let on_find = Callback::new(move |_: ()| {
        let mut outcome = Ok(0);
        state.update(|s| outcome = s.apply_search());
        if let Err(e) = outcome {
            ctx.notify_error(e.to_string());
        }
    });

    // Sort
    let on_sort = Callback::new(move |_: ()| {
        state.update(|s| {
            s.toggle_sort();
        })
    });

    // Row actions
    let storage_key = config.storage_key.clone();
    let on_delete = Callback::new(move |id: EmployeeId| {
        let outcome = EmployeeRepository::browser(&storage_key).and_then(|repo| {
            let mut removed = Ok(false);
            state.update(|s| removed = repo.delete(s, &id));
            removed
        });
        match outcome {
            Ok(removed) => {
                tracing::info!(%id, removed, "employee deleted");
                // Red toast, like every destructive action
                ctx.notify_error("Employee deleted successfully");
            }
            Err(e) => ctx.notify_error(DirectoryError::from(e).to_string()),
        }
    });
    let on_edit = Callback::new(move |id: EmployeeId| ctx.navigate(Route::EditEmployee(id.to_string())));
    let on_add = Callback::new(move |_: ()| ctx.navigate(Route::NewEmployee));

    view! {
        <section class="relative bg-gray-900 min-h-screen py-12">
            <div class="relative z-10 max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex flex-col md:flex-row justify-between items-start md:items-end gap-6 mb-10">
                    <div>
                        <h1 class="text-3xl sm:text-4xl font-bold text-white mb-2">
                            "Employee "
                            <span class="text-transparent bg-clip-text bg-gradient-to-r from-blue-400 to-purple-500">"Directory"</span>
                        </h1>
                        <p class="text-gray-400 max-w-2xl">
                            "Comprehensive overview of your organization's workforce with advanced management capabilities"
                        </p>
                    </div>

                    <div class="flex gap-3 items-center">
                        <Show when=move || search_open.get()>
                            <SearchModal
                                draft=draft
                                on_name=on_name
                                on_department=on_department
                                on_find=on_find
                                on_close=on_close
                            />
                        </Show>
                        <Show when=move || can_reset.get()>
                            <button
                                class="bg-gradient-to-r px-6 py-2.5 from-teal-600 to-teal-700 text-white font-medium rounded-lg hover:from-blue-500 hover:to-blue-600 transition-all duration-300 shadow hover:shadow-lg"
                                on:click=move |_| state.update(|s| s.reset())
                            >
                                "Reset Filter"
                            </button>
                        </Show>
                        <Show when=move || !filter_active.get()>
                            <button
                                title="Search employees"
                                class="bg-gradient-to-r from-teal-600 to-teal-700 text-white font-medium rounded-full hover:from-blue-500 hover:to-blue-600 transition-all duration-300 shadow hover:shadow-lg w-[40px] h-[40px] text-lg"
                                on:click=move |_| state.update(|s| s.open_search())
                            >
                                "🔍"
                            </button>
                        </Show>
                        <button
                            class="flex items-center gap-2 px-6 py-2.5 bg-gradient-to-r from-blue-600 to-blue-700 text-white font-medium rounded-lg hover:from-blue-500 hover:to-blue-600 transition-all duration-300 shadow hover:shadow-lg"
                            on:click=move |_| on_add.run(())
                        >
                            "+ Add Employee"
                        </button>
                    </div>
                </div>

                <EmployeeTable
                    employees=visible
                    sort_order=sort_order
                    currency=config.currency_symbol.clone()
                    on_sort=on_sort
                    on_edit=on_edit
                    on_delete=on_delete
                />

                <Show when=move || visible.with(|v| v.is_empty())>
                    <EmptyState on_add=on_add />
                </Show>
            </div>
        </section>
    }
}
