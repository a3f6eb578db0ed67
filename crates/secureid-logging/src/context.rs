//! Session context for log output
//!
//! A thread-local label identifying which app session produced a log line,
//! so several instances writing to the same directory can be told apart.

use std::cell::RefCell;

use uuid::Uuid;

/// Session context data stored in thread-local storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionContextData {
    /// Human-readable label, e.g. the connected account
    pub label: String,
    /// Unique id for this process run
    pub instance_id: Uuid,
}

thread_local! {
    static SESSION_CONTEXT: RefCell<Option<SessionContextData>> = const { RefCell::new(None) };
}

/// RAII guard for session context
///
/// Sets the session for the current thread; dropping it restores whatever
/// was set before.
pub struct SessionContextGuard {
    previous: Option<SessionContextData>,
}

impl SessionContextGuard {
    /// Set a new session with a fresh instance id.
    pub fn new(label: impl Into<String>) -> Self {
        let previous = SESSION_CONTEXT.with(|ctx| ctx.borrow().clone());
        let data = SessionContextData {
            label: label.into(),
            instance_id: Uuid::new_v4(),
        };
        SESSION_CONTEXT.with(|ctx| *ctx.borrow_mut() = Some(data));
        Self { previous }
    }

    /// Get the current session context (if any)
    pub fn current() -> Option<SessionContextData> {
        SESSION_CONTEXT.with(|ctx| ctx.borrow().clone())
    }

    /// A span carrying the current session fields, for callers to enter.
    ///
    /// Returns a disabled span when no session is set.
    pub fn span() -> tracing::Span {
        match Self::current() {
            Some(ctx) => tracing::info_span!(
                "session",
                session = %ctx.label,
                instance_id = %ctx.instance_id
            ),
            None => tracing::Span::none(),
        }
    }
}

impl Drop for SessionContextGuard {
    fn drop(&mut self) {
        SESSION_CONTEXT.with(|ctx| *ctx.borrow_mut() = self.previous.take());
    }
}
