use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoginScreenProps {
    pub on_login: Callback<String>,
    pub authenticating: bool,
}

#[function_component(LoginScreen)]
pub fn login_screen(props: &LoginScreenProps) -> Html {
    let email_ref = use_node_ref();

    let on_submit = {
        let email_ref = email_ref.clone();
        let on_login = props.on_login.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if let Some(input) = email_ref.cast::<HtmlInputElement>() {
                on_login.emit(input.value());
            }
        })
    };

    html! {
        <div class="login-screen">
            <h3>{"Step 1: Connect"}</h3>
            <p>{"Enter your email to login (User Controlled Auth)"}</p>

            <form class="login-form" onsubmit={on_submit}>
                <input
                    type="email"
                    id="email"
                    name="email"
                    placeholder="name@example.com"
                    ref={email_ref}
                    required=true
                />
                <button type="submit" class="btn-login" disabled={props.authenticating}>
                    {"Login / Signup"}
                </button>
            </form>
        </div>
    }
}
