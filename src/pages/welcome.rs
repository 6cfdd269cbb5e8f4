use yew::prelude::*;

#[function_component(Welcome)]
pub fn welcome() -> Html {
    html! {
        <div class="login-container">
            <div class="login-card">
                <h1>{ "Welcome!" }</h1>
            </div>
        </div>
    }
}
