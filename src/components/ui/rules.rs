//! Checklist rows for live field validation feedback, shown under a field
//! once the caller has touched it.

use leptos::prelude::*;

/// Container for the rule rows of one field.
#[component]
pub fn RuleList(children: Children) -> impl IntoView {
    view! {
        <div class="mt-2 rounded-lg bg-slate-50 px-3 py-2 text-sm dark:bg-gray-800">
            {children()}
        </div>
    }
}

/// One pass/fail row; green once the rule is satisfied.
#[component]
pub fn Rule(#[prop(into)] ok: Signal<bool>, label: &'static str) -> impl IntoView {
    view! {
        <p
            class="my-1"
            class:text-emerald-600=move || ok.get()
            class:text-red-500=move || !ok.get()
        >
            {move || if ok.get() { "\u{2714} " } else { "\u{2718} " }}
            {label}
        </p>
    }
}
