//! Activity Log Panel
//!
//! Collapsed footer listing the most recent log lines captured by the
//! console logger. The list is re-read each time the panel opens.

use leptos::prelude::*;

#[component]
pub fn ActivityLog() -> impl IntoView {
    let (lines, set_lines) = signal(Vec::<String>::new());
    let (open, set_open) = signal(false);

    let toggle = move || {
        let opening = !open.get_untracked();
        if opening {
            set_lines.set(console_logger::recent_lines());
        }
        set_open.set(opening);
    };

    view! {
        <footer class="fixed bottom-0 left-0 z-40 max-w-xl p-2 text-xs">
            <button class="px-2 py-1 rounded bg-gray-800 text-gray-400 hover:text-white" on:click=move |_| toggle()>
                {move || if open.get() { "Hide activity" } else { "Activity" }}
            </button>
            <Show when=move || open.get()>
                <pre class="mt-2 max-h-64 overflow-auto rounded bg-gray-800 p-2 text-gray-300 whitespace-pre-wrap">
                    {move || {
                        let lines = lines.get();
                        if lines.is_empty() { "No activity yet".to_string() } else { lines.join("\n") }
                    }}
                </pre>
            </Show>
        </footer>
    }
}
