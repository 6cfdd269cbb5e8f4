use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoginProps {
    pub on_login: Callback<()>,
}

#[function_component(Login)]
pub fn login(props: &LoginProps) -> Html {
    // Field contents are tracked for controlled-input semantics but feed
    // nothing: the submit handler ignores them.
    let email = use_state(String::new);
    let password = use_state(String::new);

    let on_email_input = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target().unwrap().dyn_into().unwrap();
            email.set(input.value());
        })
    };

    let on_password_input = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target().unwrap().dyn_into().unwrap();
            password.set(input.value());
        })
    };

    let on_submit = {
        let on_login = props.on_login.clone();
        Callback::from(move |e: SubmitEvent| {
            // A native submit would navigate and wipe the in-memory session.
            e.prevent_default();
            on_login.emit(());
        })
    };

    html! {
        <div class="login-container">
            <div class="login-card">
                <h1 class="login-title">{ "Login Form" }</h1>
                <form onsubmit={on_submit}>
                    <div class="form-group">
                        <input
                            type="email"
                            id="email"
                            placeholder="Enter your email"
                            value={(*email).clone()}
                            oninput={on_email_input}
                        />
                    </div>
                    <div class="form-group">
                        <label for="password">{ "Password:" }</label>
                        <input
                            type="password"
                            id="password"
                            value={(*password).clone()}
                            oninput={on_password_input}
                        />
                    </div>
                    <button type="submit" class="btn btn-primary">
                        { "Login" }
                    </button>
                </form>
            </div>
        </div>
    }
}
