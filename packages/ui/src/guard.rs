//! Route protection decisions.
//!
//! Protected pages wrap themselves in a dashboard layout that asks
//! [`decide_access`] what to do with the current auth state. The decision is
//! pure so the layout only has to map it onto navigation calls.

use api::models::Role;

use crate::auth::AuthState;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session restore is still in flight. Render nothing yet.
    Wait,
    RedirectToLogin,
    /// Authenticated, but for the other role. Send them to their own
    /// dashboard, never back to login.
    RedirectToDashboard(Role),
    Allow,
}

pub fn decide_access(state: &AuthState, required: Role) -> GuardDecision {
    if state.loading {
        return GuardDecision::Wait;
    }
    match &state.user {
        None => GuardDecision::RedirectToLogin,
        Some(user) if user.role == required => GuardDecision::Allow,
        Some(user) => GuardDecision::RedirectToDashboard(user.role),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::models::User;

    fn user_with_role(role: Role) -> User {
        User {
            id: "u1".to_string(),
            name: "Dana Greer".to_string(),
            email: "dana@example.edu".to_string(),
            role,
            department: None,
        }
    }

    #[test]
    fn test_waits_while_loading_even_with_a_user_present() {
        let state = AuthState {
            user: Some(user_with_role(Role::Student)),
            loading: true,
        };
        assert_eq!(decide_access(&state, Role::Student), GuardDecision::Wait);
        assert_eq!(decide_access(&state, Role::Admin), GuardDecision::Wait);
    }

    #[test]
    fn test_anonymous_goes_to_login() {
        let state = AuthState {
            user: None,
            loading: false,
        };
        assert_eq!(
            decide_access(&state, Role::Student),
            GuardDecision::RedirectToLogin
        );
        assert_eq!(
            decide_access(&state, Role::Admin),
            GuardDecision::RedirectToLogin
        );
    }

    #[test]
    fn test_matching_role_is_allowed() {
        let student = AuthState {
            user: Some(user_with_role(Role::Student)),
            loading: false,
        };
        let admin = AuthState {
            user: Some(user_with_role(Role::Admin)),
            loading: false,
        };
        assert_eq!(decide_access(&student, Role::Student), GuardDecision::Allow);
        assert_eq!(decide_access(&admin, Role::Admin), GuardDecision::Allow);
    }

    #[test]
    fn test_wrong_role_goes_to_own_dashboard_not_login() {
        let student = AuthState {
            user: Some(user_with_role(Role::Student)),
            loading: false,
        };
        assert_eq!(
            decide_access(&student, Role::Admin),
            GuardDecision::RedirectToDashboard(Role::Student)
        );

        let admin = AuthState {
            user: Some(user_with_role(Role::Admin)),
            loading: false,
        };
        assert_eq!(
            decide_access(&admin, Role::Student),
            GuardDecision::RedirectToDashboard(Role::Admin)
        );
    }
}
