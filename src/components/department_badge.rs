//! Department Badge Components
//!
//! Coloured ordinal avatar and department pill for a table row.

use leptos::prelude::*;

use crate::models::Department;

/// Row number in a circle tinted by department
#[component]
pub fn OrdinalAvatar(ordinal: usize, department: Department) -> impl IntoView {
    let class = format!(
        "w-9 h-9 rounded-full flex items-center justify-center text-white text-sm font-semibold bg-gradient-to-br {}",
        department.avatar_gradient()
    );
    view! { <div class=class>{ordinal}</div> }
}

#[component]
pub fn DepartmentBadge(department: Department) -> impl IntoView {
    let class = format!("px-2.5 py-1 rounded-full text-xs font-medium capitalize {}", department.badge_class());
    view! { <span class=class>{department.label()}</span> }
}
