//! Caller side of the two endpoints: form checks, one request per action
//! at a time, and the state passed between pages.

pub mod api;
pub mod form;
pub mod pages;

use std::sync::atomic::{AtomicBool, Ordering};

pub use api::DietPlannerClient;
pub use form::DietForm;
pub use pages::{CategoryIcon, PlanPage, PlanPageState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Generate,
    Regenerate,
    LoadTips,
}

impl Action {
    pub fn failure_message(self) -> &'static str {
        match self {
            Action::Generate => "Failed to generate meal plan. Please try again.",
            Action::Regenerate => "Failed to generate new plan. Please try again.",
            Action::LoadTips => "Failed to load health tips. Please try again.",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server responded {status}: {message}")]
    Status {
        status: reqwest::StatusCode,
        message: String,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("{0}")]
    Validation(&'static str),
    #[error("{0:?} is already in progress")]
    Busy(Action),
    #[error("{}", .action.failure_message())]
    Failed {
        action: Action,
        #[source]
        source: RequestError,
    },
}

/// Set while an action's request is outstanding.
#[derive(Debug, Default)]
pub struct BusyFlag(AtomicBool);

pub struct BusyGuard<'a>(&'a BusyFlag);

impl BusyFlag {
    pub fn try_begin(&self) -> Option<BusyGuard<'_>> {
        self.0
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| BusyGuard(self))
    }

    pub fn is_busy(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        (self.0).0.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn busy_flag_is_exclusive_and_released_on_drop() {
        let flag = BusyFlag::default();
        let guard = flag.try_begin().unwrap();
        assert!(flag.is_busy());
        assert!(flag.try_begin().is_none());
        drop(guard);
        assert!(!flag.is_busy());
        assert!(flag.try_begin().is_some());
    }

    #[test]
    fn failures_render_as_action_message() {
        let err = ClientError::Failed {
            action: Action::Regenerate,
            source: RequestError::Status {
                status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
                message: "AI gateway error".into(),
            },
        };
        assert_eq!(err.to_string(), "Failed to generate new plan. Please try again.");
    }
}
