use crate::errors::MintError;

/// Admission switch in front of the redeem path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PauseGate {
    paused: bool,
}

impl Default for PauseGate {
    fn default() -> Self {
        Self { paused: true }
    }
}

impl PauseGate {
    #[must_use]
    pub const fn new(paused: bool) -> Self {
        Self { paused }
    }

    #[must_use]
    pub const fn is_paused(&self) -> bool {
        self.paused
    }

    /// Returns the previous state.
    pub fn set(&mut self, paused: bool) -> bool {
        core::mem::replace(&mut self.paused, paused)
    }

    /// # Errors
    ///
    /// Returns `MintError::SystemPaused` while paused.
    pub const fn ensure_open(&self) -> Result<(), MintError> {
        if self.paused {
            return Err(MintError::SystemPaused);
        }
        Ok(())
    }
}
