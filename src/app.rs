//! Employee Directory App
//!
//! Root component: provides context and switches pages on the hash route.

use leptos::ev;
use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{ActivityLog, EmployeeDirectory, EmployeeForm, ToastHost};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::routes::Route;
use crate::store::ToastState;

#[component]
pub fn App() -> impl IntoView {
    // State
    let (route, set_route) = signal(Route::current());
    let toasts = Store::new(ToastState::default());

    // Provide context to all children
    provide_context(toasts);
    let ctx = AppContext::new((route, set_route), AppConfig::default(), toasts);
    provide_context(ctx);

    // Back/forward and manual hash edits
    let _ = window_event_listener(ev::hashchange, move |_| ctx.sync_route());

    view! {
        <main class="app-layout">
            {move || match route.get() {
                Route::Directory => view! { <EmployeeDirectory /> }.into_any(),
                Route::NewEmployee => view! { <EmployeeForm /> }.into_any(),
                Route::EditEmployee(id) => view! { <EmployeeForm employee_id=id /> }.into_any(),
            }}
            <ToastHost />
            <ActivityLog />
        </main>
    }
}
