use yew::prelude::*;

mod components;
mod config;
mod hooks;
mod services;

use components::calendar::Calendar;
use components::header::Header;
use components::login_modal::LoginModal;
use hooks::use_calendar::use_calendar;
use hooks::use_session::use_session;
use hooks::use_shifts::use_shifts;
use services::api::ApiClient;
use services::logging::Logger;

#[function_component(App)]
fn app() -> Html {
    let api_client = ApiClient::new();
    let session = use_session();
    let calendar = use_calendar();
    let shifts = use_shifts(&api_client, session.actions.sync.clone());
    let login_open = use_state(|| false);

    let on_login_click = {
        let login_open = login_open.clone();
        Callback::from(move |_: ()| login_open.set(true))
    };

    let on_login_close = {
        let login_open = login_open.clone();
        Callback::from(move |_: ()| login_open.set(false))
    };

    let on_login_success = {
        let login_open = login_open.clone();
        let login_succeeded = session.actions.login_succeeded.clone();
        Callback::from(move |_: ()| {
            login_open.set(false);
            login_succeeded.emit(());
        })
    };

    let on_edit_shift = {
        let edit_shift = shifts.actions.edit_shift.clone();
        Callback::from(move |(work_type, date): (String, String)| {
            Logger::debug_with_component("app", &format!("Requesting {} on {}", work_type, date));
            edit_shift.emit((work_type, date));
        })
    };

    let month = calendar.month(&shifts.shifts);

    html! {
        <div class="app">
            <Header
                logged_in={session.logged_in}
                {on_login_click}
                on_logout_click={session.actions.logout.clone()}
            />
            <main class="main">
                <div class="container">
                    <Calendar
                        {month}
                        loading={!shifts.loaded}
                        logged_in={session.logged_in}
                        on_prev_month={calendar.actions.prev_month.clone()}
                        on_next_month={calendar.actions.next_month.clone()}
                        {on_edit_shift}
                    />
                </div>
            </main>
            <LoginModal
                is_open={*login_open}
                api_client={api_client.clone()}
                on_success={on_login_success}
                on_close={on_login_close}
            />
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
