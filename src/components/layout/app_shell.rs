//! Shared layout wrapper with navigation and content container. It
//! centralizes header markup so routes can focus on content. Navigation is
//! client-side only; the provider enforces real access control.

use crate::features::auth::client::GoTrueClient;
use crate::features::auth::provider::IdentityProvider;
use crate::features::auth::state::use_auth;
use leptos::{prelude::*, task::spawn_local};
use leptos_router::{components::A, hooks::use_location};

const NAV_LINK_CLASS: &str = "block py-2 px-3 text-gray-900 rounded hover:bg-gray-100 md:hover:bg-transparent md:border-0 md:hover:text-blue-700 md:p-0 dark:text-white md:dark:hover:text-blue-500";

/// Wraps routes with a header and main content container.
#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    let auth = use_auth();
    let is_authenticated = auth.is_authenticated;
    let pathname = use_location().pathname;
    let on_login = move || pathname.get() == "/login";

    let sign_out = move |_| {
        spawn_local(async move {
            if let Some(token) = auth.access_token() {
                match GoTrueClient::from_config() {
                    Ok(provider) => {
                        if let Err(err) = provider.sign_out(&token).await {
                            log::warn!("sign-out failed: {err}");
                        }
                    }
                    Err(err) => log::warn!("provider configuration missing: {err}"),
                }
            }
            auth.clear_session();
        });
    };

    view! {
        <div class="min-h-screen flex flex-col">
            <header class="border-b border-gray-200 dark:bg-gray-900">
                <div class="max-w-screen-xl flex flex-wrap items-center justify-between mx-auto p-4">
                    <A href="/" {..} class="flex items-center space-x-3">
                        <span class="text-xl font-semibold whitespace-nowrap dark:text-white">
                            "Aula"
                        </span>
                    </A>
                    <ul class="font-medium flex flex-row items-center space-x-8">
                        <li>
                            <Show when=move || is_authenticated.get()>
                                <A href="/dashboard" {..} class=NAV_LINK_CLASS>
                                    "Dashboard"
                                </A>
                            </Show>
                        </li>
                        <li>
                            <Show
                                when=move || is_authenticated.get()
                                fallback=move || {
                                    view! {
                                        <Show
                                            when=on_login
                                            fallback=move || {
                                                view! {
                                                    <A href="/login" {..} class=NAV_LINK_CLASS>
                                                        "Sign In"
                                                    </A>
                                                }
                                            }
                                        >
                                            <A href="/signup" {..} class=NAV_LINK_CLASS>
                                                "Sign Up"
                                            </A>
                                        </Show>
                                    }
                                }
                            >
                                <button type="button" class=NAV_LINK_CLASS on:click=sign_out>
                                    "Sign Out"
                                </button>
                            </Show>
                        </li>
                    </ul>
                </div>
            </header>
            <main class="flex-1">
                <div class="container mx-auto p-4 mt-6">{children()}</div>
            </main>
        </div>
    }
}
