//! Bootstrap lifecycle state machine.
//!
//! The bootstrap moves through a strictly sequential, irreversible sequence of
//! phases. Any failure before the event loop starts short-circuits directly to
//! `Terminated`.

use std::fmt;

/// Lifecycle phase of the process bootstrap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BootstrapPhase {
    /// No work has happened yet.
    #[default]
    NotStarted,

    /// The native GUI root (window + event-loop owner) exists.
    RootCreated,

    /// The application component has been constructed against the root.
    ComponentConstructed,

    /// The thread is parked inside the GUI event loop.
    EventLoopRunning,

    /// The process is done, normally or after a failure.
    Terminated,
}

impl BootstrapPhase {
    /// Returns true if no further transition is possible.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Terminated)
    }

    /// Returns the next phase on the success path, if any.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::NotStarted => Some(Self::RootCreated),
            Self::RootCreated => Some(Self::ComponentConstructed),
            Self::ComponentConstructed => Some(Self::EventLoopRunning),
            Self::EventLoopRunning => Some(Self::Terminated),
            Self::Terminated => None,
        }
    }

    /// Returns true if `to` is a legal transition from this phase.
    ///
    /// Legal transitions are the single success step and, from any phase that
    /// is not already terminal, the failure short-circuit to `Terminated`.
    #[must_use]
    pub fn can_advance_to(self, to: Self) -> bool {
        if self.is_terminal() {
            return false;
        }
        self.next() == Some(to) || to == Self::Terminated
    }
}

impl fmt::Display for BootstrapPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::NotStarted => "not started",
            Self::RootCreated => "root created",
            Self::ComponentConstructed => "component constructed",
            Self::EventLoopRunning => "event loop running",
            Self::Terminated => "terminated",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_phase_is_not_started() {
        assert_eq!(BootstrapPhase::default(), BootstrapPhase::NotStarted);
    }

    #[test]
    fn test_success_path_is_strictly_sequential() {
        let mut phase = BootstrapPhase::NotStarted;
        let mut seen = vec![phase];
        while let Some(next) = phase.next() {
            assert!(phase.can_advance_to(next));
            phase = next;
            seen.push(phase);
        }
        assert_eq!(
            seen,
            vec![
                BootstrapPhase::NotStarted,
                BootstrapPhase::RootCreated,
                BootstrapPhase::ComponentConstructed,
                BootstrapPhase::EventLoopRunning,
                BootstrapPhase::Terminated,
            ]
        );
    }

    #[test]
    fn test_failure_short_circuits_to_terminated() {
        assert!(BootstrapPhase::NotStarted.can_advance_to(BootstrapPhase::Terminated));
        assert!(BootstrapPhase::RootCreated.can_advance_to(BootstrapPhase::Terminated));
        assert!(BootstrapPhase::ComponentConstructed.can_advance_to(BootstrapPhase::Terminated));
    }

    #[test]
    fn test_no_skipping_and_no_reversal() {
        assert!(!BootstrapPhase::NotStarted.can_advance_to(BootstrapPhase::ComponentConstructed));
        assert!(!BootstrapPhase::RootCreated.can_advance_to(BootstrapPhase::EventLoopRunning));
        assert!(!BootstrapPhase::EventLoopRunning.can_advance_to(BootstrapPhase::RootCreated));
    }

    #[test]
    fn test_terminated_is_terminal() {
        assert!(BootstrapPhase::Terminated.is_terminal());
        assert!(!BootstrapPhase::Terminated.can_advance_to(BootstrapPhase::Terminated));
        assert_eq!(BootstrapPhase::Terminated.next(), None);
    }
}
