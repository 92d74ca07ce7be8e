//! Backend readiness state machine.
//!
//! The pure transition lives here; the web layer owns the side-effecting
//! driver that probes the health endpoint and schedules the fixed-interval
//! retry. Retries are unbounded: probing is cheap and every state maps to
//! continuous user-facing feedback.

/// Availability of the inspection backend as observed by the health poller.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReadinessState {
    /// Initial state, first probe not yet classified.
    #[default]
    Checking,
    /// Health confirmed. Terminal: the poller stops once here; a later
    /// outage surfaces as a submission failure instead.
    Ready,
    /// Probe could not reach the service at all; presumed cold-starting.
    Starting,
    /// Service answered, but with an error status.
    Unavailable,
}

/// Classified result of one health probe.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// Probe succeeded.
    Up,
    /// Connection refused, timeout, or any other transport-level failure.
    Unreachable,
    /// The service responded with a non-success status.
    ErrorStatus,
}

impl ReadinessState {
    /// Transition after one probe. The classification rule is the same from
    /// every non-ready state.
    pub fn after_probe(self, outcome: ProbeOutcome) -> Self {
        match outcome {
            ProbeOutcome::Up => Self::Ready,
            ProbeOutcome::Unreachable => Self::Starting,
            ProbeOutcome::ErrorStatus => Self::Unavailable,
        }
    }

    pub fn is_ready(self) -> bool {
        matches!(self, Self::Ready)
    }

    /// Whether the driver schedules another probe from this state.
    pub fn polls_again(self) -> bool {
        !self.is_ready()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_checking() {
        assert_eq!(ReadinessState::default(), ReadinessState::Checking);
    }

    #[test]
    fn test_probe_classification() {
        let s = ReadinessState::Checking;
        assert_eq!(s.after_probe(ProbeOutcome::Unreachable), ReadinessState::Starting);
        assert_eq!(s.after_probe(ProbeOutcome::ErrorStatus), ReadinessState::Unavailable);
        assert_eq!(s.after_probe(ProbeOutcome::Up), ReadinessState::Ready);
    }

    #[test]
    fn test_repeated_unreachability_stays_starting() {
        let mut s = ReadinessState::Checking;
        for _ in 0..3 {
            s = s.after_probe(ProbeOutcome::Unreachable);
            assert_eq!(s, ReadinessState::Starting);
            assert!(s.polls_again());
        }
    }

    #[test]
    fn test_states_can_alternate_until_ready() {
        let s = ReadinessState::Starting.after_probe(ProbeOutcome::ErrorStatus);
        assert_eq!(s, ReadinessState::Unavailable);
        let s = s.after_probe(ProbeOutcome::Unreachable);
        assert_eq!(s, ReadinessState::Starting);
        let s = s.after_probe(ProbeOutcome::Up);
        assert_eq!(s, ReadinessState::Ready);
    }

    #[test]
    fn test_ready_halts_polling() {
        let s = ReadinessState::Unavailable.after_probe(ProbeOutcome::Up);
        assert!(s.is_ready());
        assert!(!s.polls_again());
    }
}
