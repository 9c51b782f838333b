use strum_macros::Display;

/// Stages of a single submit attempt.
///
/// `Idle -> Validating -> Rejected -> Idle` for an attempt with invalid fields,
/// `Idle -> Validating -> InFlight -> Succeeded | Failed -> Idle` otherwise. A validated submit
/// that arrives while another login is in flight supersedes it, so `InFlight -> Validating` is
/// allowed as well.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Display)]
pub(crate) enum SubmitState {
  #[default]
  Idle,
  Validating,
  Rejected,
  InFlight,
  Succeeded,
  Failed,
}

impl SubmitState {
  pub(crate) fn can_transition_to(&self, next: SubmitState) -> bool {
    use SubmitState::*;
    matches!(
      (self, next),
      (Idle | InFlight | Succeeded, Validating)
        | (Validating, Rejected | InFlight)
        | (Rejected, Idle | InFlight)
        | (InFlight, Succeeded | Failed)
        | (Failed, Idle)
    )
  }
}
