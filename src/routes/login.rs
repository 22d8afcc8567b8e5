use crate::app_lib::AppError;
use crate::components::{Alert, AlertKind, AppShell, Button, Rule, RuleList, Spinner};
use crate::features::auth::client::GoTrueClient;
use crate::features::auth::provider::IdentityProvider;
use crate::features::auth::state::use_auth;
use crate::features::auth::types::PasswordGrant;
use crate::features::auth::validate::{
    Field, FieldError, email_rules, password_rules, validate_email, validate_password,
};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

const LABEL_CLASS: &str = "block mb-2 text-sm font-medium text-gray-900 dark:text-white";
const INPUT_CLASS: &str = "bg-gray-50 border-2 border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-blue-500 focus:border-blue-500 block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:placeholder-gray-400 dark:text-white";

#[derive(Clone)]
struct LoginInput {
    email: String,
    password: String,
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (email_touched, set_email_touched) = signal(false);
    let (password_touched, set_password_touched) = signal(false);
    let (email_error, set_email_error) = signal::<Option<FieldError>>(None);
    let (password_error, set_password_error) = signal::<Option<FieldError>>(None);
    let (submit_error, set_submit_error) = signal::<Option<AppError>>(None);

    let login_action = Action::new_local(move |input: &LoginInput| {
        let input = input.clone();
        async move {
            let provider = GoTrueClient::from_config()?;
            let credentials = PasswordGrant {
                email: input.email,
                password: input.password,
            };
            provider.sign_in_with_password(&credentials).await
        }
    });

    Effect::new(move |_| {
        if let Some(result) = login_action.value().get() {
            match result {
                Ok(session) => {
                    auth.set_session(session);
                    navigate("/dashboard", Default::default());
                }
                Err(err) => set_submit_error.set(Some(err)),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_submit_error.set(None);
        set_email_touched.set(true);
        set_password_touched.set(true);

        let email_value = email.get_untracked().trim().to_string();
        let password_value = password.get_untracked();
        let email_verdict = validate_email(&email_value);
        let password_verdict = validate_password(&password_value);
        set_email_error.set(email_verdict);
        set_password_error.set(password_verdict);
        if email_verdict.is_some() || password_verdict.is_some() {
            return;
        }

        login_action.dispatch(LoginInput {
            email: email_value,
            password: password_value,
        });
    };

    let email_checks = Signal::derive(move || email_rules(&email.get()));
    let password_checks = Signal::derive(move || password_rules(&password.get()));

    view! {
        <AppShell>
            <form class="max-w-sm mx-auto" on:submit=on_submit>
                <h1 class="mb-6 text-2xl font-semibold text-gray-900 dark:text-white">
                    "Login"
                </h1>
                <div class="mb-5">
                    <label class=LABEL_CLASS for="email">
                        "Your email"
                    </label>
                    <input
                        id="email"
                        type="email"
                        class=INPUT_CLASS
                        class:border-red-500=move || email_touched.get() && email_error.get().is_some()
                        class:border-emerald-500=move || {
                            email_touched.get() && email_error.get().is_none()
                                && !email.get().is_empty()
                        }
                        autocomplete="email"
                        placeholder="name@school.edu"
                        on:input=move |event| {
                            let value = event_target_value(&event);
                            if email_touched.get_untracked() {
                                set_email_error.set(validate_email(&value));
                            }
                            set_email.set(value);
                        }
                        on:blur=move |_| {
                            set_email_touched.set(true);
                            set_email_error.set(validate_email(&email.get_untracked()));
                        }
                    />
                    {move || {
                        email_touched
                            .get()
                            .then(|| {
                                view! {
                                    <RuleList>
                                        <Rule
                                            ok=Signal::derive(move || email_checks.get().provided)
                                            label="Email is provided"
                                        />
                                        <Rule
                                            ok=Signal::derive(move || email_checks.get().format)
                                            label="Valid email format"
                                        />
                                    </RuleList>
                                }
                            })
                    }}
                    {move || {
                        email_touched
                            .get()
                            .then(|| email_error.get())
                            .flatten()
                            .map(|err| {
                                view! {
                                    <p class="mt-2 text-sm text-red-500">
                                        {err.message(Field::Email)}
                                    </p>
                                }
                            })
                    }}
                </div>
                <div class="mb-5">
                    <label class=LABEL_CLASS for="password">
                        "Your password"
                    </label>
                    <input
                        id="password"
                        type="password"
                        class=INPUT_CLASS
                        class:border-red-500=move || {
                            password_touched.get() && password_error.get().is_some()
                        }
                        class:border-emerald-500=move || {
                            password_touched.get() && password_error.get().is_none()
                                && !password.get().is_empty()
                        }
                        autocomplete="current-password"
                        on:input=move |event| {
                            let value = event_target_value(&event);
                            if password_touched.get_untracked() {
                                set_password_error.set(validate_password(&value));
                            }
                            set_password.set(value);
                        }
                        on:blur=move |_| {
                            set_password_touched.set(true);
                            set_password_error.set(validate_password(&password.get_untracked()));
                        }
                    />
                    {move || {
                        password_touched
                            .get()
                            .then(|| {
                                view! {
                                    <RuleList>
                                        <Rule
                                            ok=Signal::derive(move || password_checks.get().min_length)
                                            label="At least 8 characters"
                                        />
                                        <Rule
                                            ok=Signal::derive(move || password_checks.get().uppercase)
                                            label="At least 1 uppercase letter"
                                        />
                                        <Rule
                                            ok=Signal::derive(move || password_checks.get().lowercase)
                                            label="At least 1 lowercase letter"
                                        />
                                        <Rule
                                            ok=Signal::derive(move || password_checks.get().digit)
                                            label="At least 1 number"
                                        />
                                        <Rule
                                            ok=Signal::derive(move || password_checks.get().symbol)
                                            label="At least 1 special character (@$!%*?&)"
                                        />
                                    </RuleList>
                                }
                            })
                    }}
                    {move || {
                        password_touched
                            .get()
                            .then(|| password_error.get())
                            .flatten()
                            .map(|err| {
                                view! {
                                    <p class="mt-2 text-sm text-red-500">
                                        {err.message(Field::Password)}
                                    </p>
                                }
                            })
                    }}
                </div>
                <Button button_type="submit" disabled=login_action.pending()>
                    {move || if login_action.pending().get() { "Logging in..." } else { "Login" }}
                </Button>
                {move || {
                    login_action
                        .pending()
                        .get()
                        .then_some(view! { <div class="mt-4"><Spinner /></div> })
                }}
                {move || {
                    submit_error
                        .get()
                        .map(|err| {
                            view! {
                                <div class="mt-4">
                                    <Alert kind=AlertKind::Error message=err.to_string() />
                                </div>
                            }
                        })
                }}
            </form>
        </AppShell>
    }
}
