use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub logged_in: bool,
    pub on_login_click: Callback<()>,
    pub on_logout_click: Callback<()>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let on_click = {
        let logged_in = props.logged_in;
        let on_login_click = props.on_login_click.clone();
        let on_logout_click = props.on_logout_click.clone();
        Callback::from(move |_: MouseEvent| {
            if logged_in {
                on_logout_click.emit(());
            } else {
                on_login_click.emit(());
            }
        })
    };

    html! {
        <header class="header">
            <div class="container">
                <h1>{"근무표"}</h1>
                <div class="header-right">
                    <button class="btn btn-secondary session-button" onclick={on_click}>
                        {if props.logged_in { "로그아웃" } else { "로그인" }}
                    </button>
                </div>
            </div>
        </header>
    }
}
