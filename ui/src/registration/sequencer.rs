//! Step cursor for the registration wizard.
//!
//! The sequencer trusts its caller: `advance` is only invoked once the active
//! step's validator has passed. Neither direction is clamped.

use tracing::debug;

use super::types::WizardStep;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct StepSequencer {
    position: i32,
}

impl StepSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(&self) -> i32 {
        self.position
    }

    /// The active step, or `None` when the cursor has left the 0..=5 range
    pub fn current(&self) -> Option<WizardStep> {
        WizardStep::from_position(self.position)
    }

    pub fn advance(&mut self) {
        debug!("Wizard advancing from position {}", self.position);
        self.position += 1;
    }

    pub fn retreat(&mut self) {
        debug!("Wizard retreating from position {}", self.position);
        self.position -= 1;
    }

    pub fn reset(&mut self) {
        self.position = 0;
    }
}
