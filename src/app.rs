use yew::prelude::*;

use crate::pages::{Login, Welcome};
use crate::session::AuthState;

/// Root component: owns the session state and picks the view variant.
#[function_component(App)]
pub fn app() -> Html {
    let auth_state = use_state(AuthState::default);

    let on_login = {
        let auth_state = auth_state.clone();
        Callback::from(move |_| {
            log::info!("login submitted, switching to authenticated view");
            auth_state.set(auth_state.login());
        })
    };

    match *auth_state {
        AuthState::Unauthenticated => html! { <Login {on_login} /> },
        AuthState::Authenticated => html! { <Welcome /> },
    }
}
