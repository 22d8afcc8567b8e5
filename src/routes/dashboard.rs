//! Protected student dashboard. Every visit re-checks the caller's
//! verification status with the provider before rendering content; the
//! result is not cached, so a status change shows up on the next
//! navigation.

use crate::components::{AppShell, Spinner};
use crate::features::auth::client::GoTrueClient;
use crate::features::auth::gate::{AccessDecision, check_access};
use crate::features::auth::state::use_auth;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let (decision, set_decision) = signal::<Option<AccessDecision>>(None);

    let access_token = auth.access_token();
    spawn_local(async move {
        let verdict = match GoTrueClient::from_config() {
            Ok(provider) => check_access(&provider, access_token.as_deref()).await,
            Err(err) => {
                log::warn!("provider configuration missing: {err}");
                AccessDecision::Unauthenticated
            }
        };
        set_decision.set(Some(verdict));
    });

    Effect::new(move |_| {
        if decision.get() == Some(AccessDecision::Unauthenticated) {
            navigate("/login", Default::default());
        }
    });

    view! {
        <AppShell>
            {move || match decision.get() {
                // Still checking, or redirecting to login.
                None | Some(AccessDecision::Unauthenticated) => view! {
                    <div class="mt-10 flex justify-center">
                        <Spinner />
                    </div>
                }
                .into_any(),
                Some(AccessDecision::Unverified) => view! {
                    <div class="max-w-lg mx-auto text-center">
                        <h2 class="text-2xl font-semibold text-gray-900 dark:text-white">
                            "Email not verified"
                        </h2>
                        <p class="mt-2 text-gray-600 dark:text-gray-300">
                            "Please check your inbox and verify your email before continuing."
                        </p>
                        <A
                            href="/login"
                            {..}
                            class="mt-6 inline-flex items-center px-5 py-2.5 text-sm font-medium text-white bg-blue-700 rounded-lg hover:bg-blue-800 dark:bg-blue-600 dark:hover:bg-blue-700"
                        >
                            "Go to Login"
                        </A>
                    </div>
                }
                .into_any(),
                Some(AccessDecision::Verified) => view! {
                    <div class="max-w-lg mx-auto text-center">
                        <h1 class="text-3xl font-semibold text-gray-900 dark:text-white">
                            "Student Dashboard"
                        </h1>
                        <p class="mt-2 text-gray-600 dark:text-gray-300">
                            {format!(
                                "Welcome, {}! Your email is verified.",
                                auth.display_name().unwrap_or_else(|| "student".to_string()),
                            )}
                        </p>
                    </div>
                }
                .into_any(),
            }}
        </AppShell>
    }
}
