use shared::{CredentialStore, LoginFailure, LoginForm};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::services::api::{ApiClient, ApiError};
use crate::services::logging::Logger;
use crate::services::session::BrowserSession;

#[derive(Properties, PartialEq)]
pub struct LoginModalProps {
    pub is_open: bool,
    pub api_client: ApiClient,
    /// Fired after the credential has been stored
    pub on_success: Callback<()>,
    pub on_close: Callback<()>,
}

#[function_component(LoginModal)]
pub fn login_modal(props: &LoginModalProps) -> Html {
    let form = use_state(LoginForm::new);

    // Reset state when modal opens
    use_effect_with(props.is_open, {
        let form = form.clone();
        move |is_open| {
            if *is_open {
                form.set(LoginForm::new());
            }
            || ()
        }
    });

    let on_input = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.set_password(input.value());
            form.set(next);
        })
    };

    let on_submit = {
        let form = form.clone();
        let api_client = props.api_client.clone();
        let on_success = props.on_success.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let mut submitting = (*form).clone();
            let Some(password) = submitting.begin_submit() else {
                form.set(submitting);
                return;
            };
            form.set(submitting.clone());

            let form = form.clone();
            let api_client = api_client.clone();
            let on_success = on_success.clone();
            spawn_local(async move {
                let outcome = match api_client.login(&password).await {
                    Ok(credential) => Ok(credential),
                    Err(ApiError::Unauthorized) => Err(LoginFailure::Rejected),
                    Err(e) => {
                        Logger::error_with_component("login", &format!("Login failed: {}", e));
                        Err(LoginFailure::Network(e.to_string()))
                    }
                };

                let mut finished = submitting;
                let credential = finished.finish(outcome);
                form.set(finished);

                if let Some(credential) = credential {
                    BrowserSession.set(&credential);
                    on_success.emit(());
                } else {
                    Logger::warn_with_component("login", "Login did not produce a session");
                }
            });
        })
    };

    let on_cancel = {
        let form = form.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*form).clone();
            if !next.cancel() {
                return;
            }
            form.set(next);
            on_close.emit(());
        })
    };

    // The backdrop goes through the same guard as the cancel button
    let on_backdrop_click = {
        let on_cancel = on_cancel.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_cancel.emit(e);
        })
    };

    let on_modal_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    if !props.is_open {
        return html! {};
    }

    let busy = form.is_busy();

    html! {
        <div class="modal-backdrop" onclick={on_backdrop_click}>
            <div class="modal login-modal" onclick={on_modal_click}>
                <h3 class="modal-title">{"관리자 로그인"}</h3>
                <form class="login-form" onsubmit={on_submit}>
                    <input
                        type="password"
                        class="login-input"
                        placeholder="비밀번호"
                        value={form.password.clone()}
                        oninput={on_input}
                        disabled={busy}
                    />
                    {if let Some(message) = &form.message {
                        html! { <div class="login-error">{message}</div> }
                    } else {
                        html! {}
                    }}
                    <div class="modal-buttons">
                        <button type="submit" class="btn btn-primary" disabled={busy}>
                            {if busy { "로그인 중..." } else { "로그인" }}
                        </button>
                        <button type="button" class="btn btn-secondary" disabled={busy} onclick={on_cancel}>
                            {"취소"}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
