//! Employee Form Page
//!
//! Add and edit form writing back to the same storage slot as the directory.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::error::{DirectoryError, DirectoryResult};
use crate::form::EmployeeDraft;
use crate::models::{Department, Employee};
use crate::repository::EmployeeRepository;
use crate::routes::Route;

const FIELD_CLASS: &str = "w-full px-4 py-2 text-sm border border-gray-600 rounded-lg bg-gray-700 text-white focus:outline-none focus:ring-2 focus:ring-blue-500";

/// Add form, or edit form when `employee_id` is given
#[component]
pub fn EmployeeForm(#[prop(optional)] employee_id: Option<String>) -> impl IntoView {
    let ctx = use_app_context();
    let config = ctx.config();
    let editing = employee_id.is_some();

    let lookup: DirectoryResult<Option<Employee>> = match employee_id.as_deref() {
        None => Ok(None),
        Some(param) => EmployeeRepository::browser(&config.storage_key)
            .map_err(DirectoryError::from)
            .and_then(|repo| repo.edit_target(param))
            .map(Some),
    };
    let existing = match lookup {
        Ok(existing) => existing,
        Err(e) => {
            tracing::warn!(error = %e, "edit target unavailable");
            ctx.notify_error(e.to_string());
            // Route change waits until this render is done
            Effect::new(move |_| ctx.navigate(Route::Directory));
            return view! { <section class="bg-gray-900 min-h-screen"></section> }.into_any();
        }
    };

    let draft = RwSignal::new(existing.as_ref().map(EmployeeDraft::from_employee).unwrap_or_default());
    let base = StoredValue::new(existing);
    let storage_key = config.storage_key.clone();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let saved = EmployeeRepository::browser(&storage_key)
            .map_err(DirectoryError::from)
            .and_then(|repo| -> DirectoryResult<Employee> {
                let base = base.get_value();
                let id = base.as_ref().map(|e| e.id.clone()).unwrap_or_else(|| repo.next_id());
                let employee = draft.with_untracked(|d| d.build(id, base))?;
                repo.upsert(employee.clone())?;
                Ok(employee)
            });

        match saved {
            Ok(employee) => {
                tracing::info!(id = %employee.id, editing, "employee saved");
                ctx.notify_success(if editing { "Employee updated successfully" } else { "Employee added successfully" });
                ctx.navigate(Route::Directory);
            }
            Err(e) => ctx.notify_error(e.to_string()),
        }
    };

    view! {
        <section class="bg-gray-900 min-h-screen py-12">
            <div class="max-w-xl mx-auto px-4">
                <h1 class="text-3xl font-bold text-white mb-8">
                    {if editing { "Edit Employee" } else { "Add Employee" }}
                </h1>
                <form class="space-y-6 bg-gray-800/50 rounded-xl border border-gray-700 p-6" on:submit=on_submit>
                    <div>
                        <label for="emp-name" class="block text-sm font-medium text-white mb-1">"Name"</label>
                        <input
                            id="emp-name"
                            type="text"
                            placeholder="Enter employee name"
                            class=FIELD_CLASS
                            prop:value=move || draft.with(|d| d.name.clone())
                            on:input=move |ev| draft.update(|d| d.name = event_target_value(&ev))
                        />
                    </div>
                    <div>
                        <label for="emp-department" class="block text-sm font-medium text-white mb-1">"Department"</label>
                        <select
                            id="emp-department"
                            class=FIELD_CLASS
                            prop:value=move || draft.with(|d| d.department.clone())
                            on:change=move |ev| draft.update(|d| d.department = event_target_value(&ev))
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
                    <div>
                        <label for="emp-salary" class="block text-sm font-medium text-white mb-1">"Salary"</label>
                        <input
                            id="emp-salary"
                            type="number"
                            min="0"
                            step="any"
                            placeholder="Enter salary"
                            class=FIELD_CLASS
                            prop:value=move || draft.with(|d| d.salary.clone())
                            on:input=move |ev| draft.update(|d| d.salary = event_target_value(&ev))
                        />
                    </div>
                    <div class="flex justify-end gap-3">
                        <button
                            type="button"
                            class="px-5 py-2 border border-gray-500 text-gray-300 text-sm font-medium rounded-lg hover:bg-gray-700"
                            on:click=move |_| ctx.navigate(Route::Directory)
                        >
                            "Cancel"
                        </button>
                        <button
                            type="submit"
                            class="px-5 py-2 bg-blue-600 hover:bg-blue-700 text-white text-sm font-medium rounded-lg shadow-md"
                        >
                            {if editing { "Update" } else { "Save" }}
                        </button>
                    </div>
                </form>
            </div>
        </section>
    }
    .into_any()
}
