/// The two mutually exclusive display states of the app.
///
/// The transition is one-way: there is no logout, so a session that reaches
/// `Authenticated` stays there until the page is reloaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthState {
    #[default]
    Unauthenticated,
    Authenticated,
}

impl AuthState {
    /// The submit transition. Total: logging in while already authenticated
    /// leaves the state authenticated.
    pub fn login(self) -> AuthState {
        AuthState::Authenticated
    }

    pub fn is_authenticated(self) -> bool {
        matches!(self, AuthState::Authenticated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_unauthenticated() {
        assert_eq!(AuthState::default(), AuthState::Unauthenticated);
    }

    #[test]
    fn login_authenticates() {
        let state = AuthState::Unauthenticated.login();
        assert!(state.is_authenticated());
    }

    #[test]
    fn login_while_authenticated_is_a_no_op() {
        assert_eq!(AuthState::Authenticated.login(), AuthState::Authenticated);
    }

    #[test]
    fn no_transition_out_of_authenticated() {
        let mut state = AuthState::default().login();
        for _ in 0..3 {
            state = state.login();
            assert!(state.is_authenticated());
        }
    }
}
