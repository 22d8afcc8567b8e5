//! Landing page with the shared task list read from the provider's data
//! API. Fetch failures degrade to a notice; the page itself is public.

use crate::app_lib::AppError;
use crate::components::{Alert, AlertKind, AppShell, Spinner};
use crate::features::todos::{client, types::Todo};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn HomePage() -> impl IntoView {
    let (todos, set_todos) = signal::<Option<Result<Vec<Todo>, AppError>>>(None);

    spawn_local(async move {
        let result = client::list_todos().await;
        if let Err(err) = &result {
            log::warn!("task list fetch failed: {err}");
        }
        set_todos.set(Some(result));
    });

    view! {
        <AppShell>
            <div class="max-w-lg mx-auto">
                <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">
                    "Welcome to Aula"
                </h1>
                <p class="mt-2 text-sm text-gray-600 dark:text-gray-300">
                    "Sign in to reach your dashboard, or create an account to get started."
                </p>
                <h2 class="mt-8 text-lg font-semibold text-gray-900 dark:text-white">
                    "Shared tasks"
                </h2>
                {move || match todos.get() {
                    None => view! {
                        <div class="mt-4">
                            <Spinner />
                        </div>
                    }
                    .into_any(),
                    Some(Err(_)) => view! {
                        <div class="mt-4">
                            <Alert
                                kind=AlertKind::Info
                                message="Task list is unavailable right now.".to_string()
                            />
                        </div>
                    }
                    .into_any(),
                    Some(Ok(rows)) if rows.is_empty() => view! {
                        <p class="mt-4 text-sm text-gray-500 dark:text-gray-400">
                            "No tasks yet."
                        </p>
                    }
                    .into_any(),
                    Some(Ok(rows)) => view! {
                        <ul class="mt-4 space-y-2">
                            {rows
                                .into_iter()
                                .map(|todo| {
                                    let status = if todo.is_complete { "Done" } else { "Pending" };
                                    view! {
                                        <li class="flex items-center justify-between rounded-lg border border-gray-200 px-4 py-2 dark:border-gray-700">
                                            <span class="text-gray-900 dark:text-white">
                                                {todo.task}
                                            </span>
                                            <span
                                                class="text-sm"
                                                class:text-emerald-600=todo.is_complete
                                                class:text-gray-400=!todo.is_complete
                                            >
                                                {status}
                                            </span>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    }
                    .into_any(),
                }}
            </div>
        </AppShell>
    }
}
