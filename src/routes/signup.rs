//! Signup route. Fields validate live once touched, the whole form is
//! re-validated on submit, and only then are credentials forwarded to the
//! provider. Confirmation-required deployments answer with a pending
//! record, so the caller is prompted to verify their email before signing
//! in; auto-confirm deployments answer with a ready session instead.

use crate::app_lib::AppError;
use crate::components::{Alert, AlertKind, AppShell, Button, Rule, RuleList, Spinner};
use crate::features::auth::client::GoTrueClient;
use crate::features::auth::provider::IdentityProvider;
use crate::features::auth::state::use_auth;
use crate::features::auth::types::{SignUpOutcome, SignUpRequest, UserMetadata};
use crate::features::auth::validate::{
    Field, FieldErrors, FormState, Touched, email_rules, name_rules, password_rules,
    validate_field, validate_form,
};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

const LABEL_CLASS: &str = "block mb-2 text-sm font-medium text-gray-900 dark:text-white";
const INPUT_CLASS: &str = "bg-gray-50 border-2 border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-blue-500 focus:border-blue-500 block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:placeholder-gray-400 dark:text-white";

#[component]
pub fn SignUpPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let form = RwSignal::new(FormState::default());
    let touched = RwSignal::new(Touched::default());
    let errors = RwSignal::new(FieldErrors::default());
    let (success, set_success) = signal(false);
    let (submit_error, set_submit_error) = signal::<Option<AppError>>(None);

    let signup_action = Action::new_local(move |request: &SignUpRequest| {
        let request = request.clone();
        async move {
            let provider = GoTrueClient::from_config()?;
            provider.sign_up(&request).await
        }
    });

    Effect::new(move |_| {
        if let Some(result) = signup_action.value().get() {
            match result {
                Ok(SignUpOutcome::Pending(_)) => set_success.set(true),
                Ok(SignUpOutcome::Session(session)) => {
                    auth.set_session(*session);
                    navigate("/dashboard", Default::default());
                }
                Err(err) => set_submit_error.set(Some(err)),
            }
        }
    });

    let edit_field = move |field: Field, value: String| {
        form.update(|state| match field {
            Field::Name => state.name = value,
            Field::Email => state.email = value,
            Field::Password => state.password = value,
            Field::ConfirmPassword => state.confirm_password = value,
        });

        if touched.get_untracked().contains(field) {
            let verdict = form.with_untracked(|state| validate_field(state, field));
            errors.update(|errs| errs.set(field, verdict));
        }
        // Editing the password re-checks a touched confirmation against the
        // new value.
        if field == Field::Password && touched.get_untracked().contains(Field::ConfirmPassword) {
            let verdict =
                form.with_untracked(|state| validate_field(state, Field::ConfirmPassword));
            errors.update(|errs| errs.set(Field::ConfirmPassword, verdict));
        }
    };

    let blur_field = move |field: Field| {
        touched.update(|t| t.mark(field));
        let verdict = form.with_untracked(|state| validate_field(state, field));
        errors.update(|errs| errs.set(field, verdict));
    };

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_submit_error.set(None);
        set_success.set(false);
        touched.update(Touched::mark_all);

        let verdicts = form.with_untracked(validate_form);
        let valid = verdicts.is_valid();
        errors.set(verdicts);
        if !valid {
            return;
        }

        let request = form.with_untracked(|state| SignUpRequest {
            email: state.email.trim().to_string(),
            password: state.password.clone(),
            data: UserMetadata {
                name: Some(state.name.trim().to_string()),
            },
        });
        signup_action.dispatch(request);
    };

    let name_checks = Signal::derive(move || form.with(|state| name_rules(&state.name)));
    let email_checks = Signal::derive(move || form.with(|state| email_rules(&state.email)));
    let password_checks =
        Signal::derive(move || form.with(|state| password_rules(&state.password)));
    let confirm_matches = Signal::derive(move || {
        form.with(|state| {
            !state.password.is_empty() && state.confirm_password == state.password
        })
    });

    let field_error = move |field: Field| {
        (touched.get().contains(field))
            .then(|| errors.get().get(field))
            .flatten()
            .map(|err| {
                view! { <p class="mt-2 text-sm text-red-500">{err.message(field)}</p> }
            })
    };

    view! {
        <AppShell>
            <form class="max-w-md mx-auto" on:submit=on_submit>
                <h1 class="mb-6 text-2xl font-semibold text-gray-900 dark:text-white">
                    "Create Your Account"
                </h1>
                <div class="mb-5">
                    <label class=LABEL_CLASS for="name">
                        "Full Name"
                    </label>
                    <input
                        id="name"
                        type="text"
                        class=INPUT_CLASS
                        class:border-red-500=move || {
                            touched.get().name && errors.get().name.is_some()
                        }
                        class:border-emerald-500=move || {
                            touched.get().name && errors.get().name.is_none()
                                && form.with(|state| !state.name.is_empty())
                        }
                        autocomplete="name"
                        placeholder="Enter your full name"
                        on:input=move |event| edit_field(Field::Name, event_target_value(&event))
                        on:blur=move |_| blur_field(Field::Name)
                    />
                    {move || {
                        touched
                            .get()
                            .name
                            .then(|| {
                                view! {
                                    <RuleList>
                                        <Rule
                                            ok=Signal::derive(move || name_checks.get().provided)
                                            label="Name is provided"
                                        />
                                        <Rule
                                            ok=Signal::derive(move || name_checks.get().format)
                                            label="Valid name format"
                                        />
                                        <Rule
                                            ok=Signal::derive(move || name_checks.get().min_length)
                                            label="At least 2 characters"
                                        />
                                    </RuleList>
                                }
                            })
                    }}
                    {move || field_error(Field::Name)}
                </div>
                <div class="mb-5">
                    <label class=LABEL_CLASS for="email">
                        "Email Address"
                    </label>
                    <input
                        id="email"
                        type="email"
                        class=INPUT_CLASS
                        class:border-red-500=move || {
                            touched.get().email && errors.get().email.is_some()
                        }
                        class:border-emerald-500=move || {
                            touched.get().email && errors.get().email.is_none()
                                && form.with(|state| !state.email.is_empty())
                        }
                        autocomplete="email"
                        placeholder="Enter your email"
                        on:input=move |event| edit_field(Field::Email, event_target_value(&event))
                        on:blur=move |_| blur_field(Field::Email)
                    />
                    {move || {
                        touched
                            .get()
                            .email
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
                    {move || field_error(Field::Email)}
                </div>
                <div class="mb-5">
                    <label class=LABEL_CLASS for="password">
                        "Password"
                    </label>
                    <input
                        id="password"
                        type="password"
                        class=INPUT_CLASS
                        class:border-red-500=move || {
                            touched.get().password && errors.get().password.is_some()
                        }
                        class:border-emerald-500=move || {
                            touched.get().password && errors.get().password.is_none()
                                && form.with(|state| !state.password.is_empty())
                        }
                        autocomplete="new-password"
                        placeholder="Create a password"
                        on:input=move |event| {
                            edit_field(Field::Password, event_target_value(&event));
                        }
                        on:blur=move |_| blur_field(Field::Password)
                    />
                    {move || {
                        touched
                            .get()
                            .password
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
                    {move || field_error(Field::Password)}
                </div>
                <div class="mb-5">
                    <label class=LABEL_CLASS for="confirm_password">
                        "Confirm Password"
                    </label>
                    <input
                        id="confirm_password"
                        type="password"
                        class=INPUT_CLASS
                        class:border-red-500=move || {
                            touched.get().confirm_password
                                && errors.get().confirm_password.is_some()
                        }
                        class:border-emerald-500=move || {
                            touched.get().confirm_password
                                && errors.get().confirm_password.is_none()
                                && form.with(|state| !state.confirm_password.is_empty())
                        }
                        autocomplete="new-password"
                        placeholder="Confirm your password"
                        on:input=move |event| {
                            edit_field(Field::ConfirmPassword, event_target_value(&event));
                        }
                        on:blur=move |_| blur_field(Field::ConfirmPassword)
                    />
                    {move || {
                        touched
                            .get()
                            .confirm_password
                            .then(|| {
                                view! {
                                    <RuleList>
                                        <Rule ok=confirm_matches label="Passwords match" />
                                    </RuleList>
                                }
                            })
                    }}
                    {move || field_error(Field::ConfirmPassword)}
                </div>
                <Button button_type="submit" disabled=signup_action.pending()>
                    {move || {
                        if signup_action.pending().get() {
                            "Creating Account..."
                        } else {
                            "Create Account"
                        }
                    }}
                </Button>
                {move || {
                    signup_action
                        .pending()
                        .get()
                        .then_some(view! { <div class="mt-4"><Spinner /></div> })
                }}
                {move || {
                    success
                        .get()
                        .then(|| {
                            view! {
                                <div class="mt-4">
                                    <Alert
                                        kind=AlertKind::Success
                                        message="Signup successful! Please check your email for verification."
                                            .to_string()
                                    />
                                    <p class="mt-2 text-sm text-gray-600 dark:text-gray-300">
                                        <A href="/login" {..} class="text-blue-700 hover:underline dark:text-blue-500">
                                            "Go to sign in"
                                        </A>
                                    </p>
                                </div>
                            }
                        })
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
