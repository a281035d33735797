//! Submission gate: `Editable` until a valid submit, then `Submitted` for good.

use thiserror::Error;

use super::pool::ItemPool;

/// Why a submit attempt was refused. The display text is shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitRejected {
    #[error("Please fill in all the placeholders before submitting!")]
    EmptySlots { empty: usize },

    #[error(
        "Please select at least {required} option{} before submitting!",
        plural_suffix(.required)
    )]
    TooFew { required: usize, selected: usize },
}

fn plural_suffix(count: &usize) -> &'static str {
    if *count > 1 {
        "s"
    } else {
        ""
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionGate {
    /// Still accepting drags. `notice` holds the last rejected submit, if any.
    Editable { notice: Option<SubmitRejected> },
    /// Locked; `sorted_options` is the ordering that was sent to the host.
    Submitted { sorted_options: Vec<String> },
}

impl Default for SubmissionGate {
    fn default() -> Self {
        SubmissionGate::Editable { notice: None }
    }
}

impl SubmissionGate {
    pub fn is_submitted(&self) -> bool {
        matches!(self, Self::Submitted { .. })
    }

    pub fn notice(&self) -> Option<&SubmitRejected> {
        match self {
            Self::Editable { notice } => notice.as_ref(),
            Self::Submitted { .. } => None,
        }
    }

    pub fn sorted_options(&self) -> Option<&[String]> {
        match self {
            Self::Submitted { sorted_options } => Some(sorted_options),
            Self::Editable { .. } => None,
        }
    }

    /// Evaluate a submit attempt against `pool`.
    ///
    /// Returns the gate to move to; `Submitted` is terminal, so a gate that
    /// is already submitted comes back unchanged.
    pub fn submit(self, pool: &ItemPool) -> Self {
        if self.is_submitted() {
            return self;
        }
        match pool.shortfall() {
            Some(rejected) => SubmissionGate::Editable {
                notice: Some(rejected),
            },
            None => SubmissionGate::Submitted {
                sorted_options: pool.ordering(),
            },
        }
    }

    pub fn dismiss_notice(self) -> Self {
        match self {
            Self::Editable { .. } => Self::Editable { notice: None },
            submitted => submitted,
        }
    }
}
