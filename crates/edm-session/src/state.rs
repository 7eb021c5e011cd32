//! Session state and its handlers.
//!
//! Handlers never sleep or spawn. Instead [`SessionState::dispatch`] returns
//! the follow-up handlers to run, immediately or after a delay, and the
//! scheduler in [`crate::Session`] executes them.

use std::time::Duration;

use serde::Serialize;

/// How long the signup effect stays visible.
pub const EFFECT_DURATION: Duration = Duration::from_secs(5);

/// Reactive UI state owned by one client session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    /// Whether the call-to-action banner is visible.
    pub show_call_to_action: bool,
    /// Email typed into the waitlist field, unvalidated.
    pub email: String,
    /// Whether the visitor joined the waitlist.
    pub signed_up: bool,
    /// Whether the signup effect is playing.
    pub show_effect: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            show_call_to_action: true,
            email: String::new(),
            signed_up: false,
            show_effect: false,
        }
    }
}

/// A state transition of a session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Handler {
    /// Store the email field value.
    SetEmail(String),
    /// Hide the call-to-action banner.
    CloseCallToAction,
    /// Join the waitlist; requests [`Handler::StartEffect`].
    Signup,
    /// Show the effect and schedule its expiry.
    StartEffect,
    /// Hide the effect.
    StopEffect,
}

/// Work requested by a handler.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FollowUp {
    /// Run before the session accepts its next event.
    Now(Handler),
    /// Run once the delay has elapsed. Not cancellable.
    After(Duration, Handler),
}

impl SessionState {
    /// Apply `handler` and return the follow-ups it requests.
    pub fn dispatch(&mut self, handler: Handler) -> Vec<FollowUp> {
        match handler {
            Handler::SetEmail(value) => {
                self.email = value;
                Vec::new()
            }
            Handler::CloseCallToAction => {
                self.show_call_to_action = false;
                Vec::new()
            }
            Handler::Signup => vec![FollowUp::Now(Handler::StartEffect)],
            Handler::StartEffect => {
                self.show_effect = true;
                vec![FollowUp::After(EFFECT_DURATION, Handler::StopEffect)]
            }
            Handler::StopEffect => {
                self.show_effect = false;
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_initial_state() {
        let state = SessionState::default();

        assert!(state.show_call_to_action);
        assert!(state.email.is_empty());
        assert!(!state.signed_up);
        assert!(!state.show_effect);
    }

    #[test]
    fn test_set_email_stores_value_without_validation() {
        let mut state = SessionState::default();

        let follow_ups = state.dispatch(Handler::SetEmail("not an email".to_owned()));

        assert!(follow_ups.is_empty());
        assert_eq!(state.email, "not an email");
        assert_eq!(
            state,
            SessionState {
                email: "not an email".to_owned(),
                ..SessionState::default()
            }
        );
    }

    #[test]
    fn test_close_call_to_action_is_idempotent() {
        let mut state = SessionState::default();

        state.dispatch(Handler::CloseCallToAction);
        state.dispatch(Handler::CloseCallToAction);

        assert!(!state.show_call_to_action);
    }

    #[test]
    fn test_signup_requests_start_effect() {
        let mut state = SessionState::default();

        let follow_ups = state.dispatch(Handler::Signup);

        assert_eq!(follow_ups, vec![FollowUp::Now(Handler::StartEffect)]);
        assert_eq!(state, SessionState::default());
    }

    #[test]
    fn test_start_effect_schedules_stop() {
        let mut state = SessionState::default();

        let follow_ups = state.dispatch(Handler::StartEffect);

        assert!(state.show_effect);
        assert_eq!(
            follow_ups,
            vec![FollowUp::After(EFFECT_DURATION, Handler::StopEffect)]
        );
    }

    #[test]
    fn test_stop_effect_hides_effect() {
        let mut state = SessionState::default();
        state.dispatch(Handler::StartEffect);

        let follow_ups = state.dispatch(Handler::StopEffect);

        assert!(!state.show_effect);
        assert!(follow_ups.is_empty());
    }

    #[test]
    fn test_effect_duration_is_five_seconds() {
        assert_eq!(EFFECT_DURATION, Duration::from_secs(5));
    }

    #[test]
    fn test_state_serialization() {
        let json = serde_json::to_value(SessionState::default()).unwrap();

        assert_eq!(json["showCallToAction"], true);
        assert_eq!(json["email"], "");
        assert_eq!(json["signedUp"], false);
        assert_eq!(json["showEffect"], false);
    }
}
