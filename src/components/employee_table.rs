//! Employee Table Component
//!
//! Visible employees with salary sort header and per-row actions.

use leptos::prelude::*;

use crate::components::{DepartmentBadge, OrdinalAvatar};
use crate::format::format_salary;
use crate::models::{Employee, EmployeeId};
use crate::sort::SortOrder;

const TH_CLASS: &str = "px-6 py-3 text-left text-xs font-medium text-gray-300 uppercase tracking-wider";

/// Salary column header; clicking it toggles the sort
#[component]
fn SalaryHeader(sort_order: Memo<SortOrder>, on_sort: Callback<()>) -> impl IntoView {
    view! {
        <th
            class="px-6 py-3 text-left text-xs font-medium cursor-pointer select-none text-gray-300 uppercase tracking-wider"
            on:click=move |_| on_sort.run(())
        >
            <span>"salary"</span>
            {move || match sort_order.get().indicator() {
                Some(icon) => view! { <span class="ml-1">{icon}</span> }.into_any(),
                None => view! { <span class="block text-[10px] text-blue-300">"click to sort"</span> }.into_any(),
            }}
        </th>
    }
}

#[component]
fn EmployeeRow(
    ordinal: usize,
    employee: Employee,
    #[prop(into)] currency: String,
    on_edit: Callback<EmployeeId>,
    on_delete: Callback<EmployeeId>,
) -> impl IntoView {
    let edit_id = employee.id.clone();
    let delete_id = employee.id.clone();
    let salary = format_salary(&currency, employee.salary);

    view! {
        <tr class="hover:bg-gray-700/30 transition-colors duration-150">
            <td class="px-3 py-4 whitespace-nowrap">
                <OrdinalAvatar ordinal=ordinal department=employee.department.clone() />
            </td>
            <td class="px-6 py-4 whitespace-nowrap text-sm font-medium text-white capitalize">
                {employee.name.clone()}
            </td>
            <td class="px-6 py-4 whitespace-nowrap">
                <DepartmentBadge department=employee.department.clone() />
            </td>
            <td class="px-6 py-4 whitespace-nowrap text-sm font-medium text-green-400">{salary}</td>
            <td class="px-6 py-4 whitespace-nowrap text-right text-sm font-medium">
                <div class="flex justify-end space-x-2">
                    <button
                        class="inline-flex items-center px-3 py-1.5 border border-blue-500 rounded-md text-blue-400 hover:bg-blue-500 hover:text-white text-xs"
                        on:click=move |_| on_edit.run(edit_id.clone())
                    >
                        <svg class="w-4 h-4 mr-1" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M11 5H6a2 2 0 00-2 2v11a2 2 0 002 2h11a2 2 0 002-2v-5m-1.414-9.414a2 2 0 112.828 2.828L11.828 15H9v-2.828l8.586-8.586z" />
                        </svg>
                        "Edit"
                    </button>
                    <button
                        class="inline-flex items-center px-3 py-1.5 border border-red-500 rounded-md text-red-400 hover:bg-red-500 hover:text-white text-xs"
                        on:click=move |_| on_delete.run(delete_id.clone())
                    >
                        <svg class="w-4 h-4 mr-1" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M19 7l-.867 12.142A2 2 0 0116.138 21H7.862a2 2 0 01-1.995-1.858L5 7m5 4v6m4-6v6m1-10V4a1 1 0 00-1-1h-4a1 1 0 00-1 1v3M4 7h16" />
                        </svg>
                        "Delete"
                    </button>
                </div>
            </td>
        </tr>
    }
}

/// Table of the visible employees.
///
/// Rows are re-rendered as a whole on every change: ordinals depend on
/// position, so keyed reuse would show stale numbers after a sort.
#[component]
pub fn EmployeeTable(
    employees: Memo<Vec<Employee>>,
    sort_order: Memo<SortOrder>,
    #[prop(into)] currency: String,
    on_sort: Callback<()>,
    on_edit: Callback<EmployeeId>,
    on_delete: Callback<EmployeeId>,
) -> impl IntoView {
    view! {
        <div class="bg-gray-800/50 backdrop-blur-sm rounded-xl shadow-xl border border-gray-700 overflow-hidden">
            <div class="overflow-x-auto">
                <table class="min-w-full divide-y divide-gray-700">
                    <thead class="bg-gray-700/50">
                        <tr>
                            <th class=TH_CLASS>"ID"</th>
                            <th class=TH_CLASS>"Employee"</th>
                            <th class=TH_CLASS>"Department"</th>
                            <SalaryHeader sort_order=sort_order on_sort=on_sort />
                            <th class="px-6 py-3 text-right text-xs font-medium text-gray-300 uppercase tracking-wider">
                                "Actions"
                            </th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-gray-700/50">
                        {move || {
                            employees
                                .get()
                                .into_iter()
                                .enumerate()
                                .map(|(idx, employee)| {
                                    view! {
                                        <EmployeeRow
                                            ordinal=idx + 1
                                            employee=employee
                                            currency=currency.clone()
                                            on_edit=on_edit
                                            on_delete=on_delete
                                        />
                                    }
                                })
                                .collect_view()
                        }}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
