//! Result of a keyed mutation.

/// Whether an update or delete matched a stored record.
///
/// A key that matches nothing is not an error: callers receive
/// [`MutationOutcome::Unmatched`] and decide for themselves whether that
/// matters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationOutcome {
    /// At least one row was changed.
    Applied,
    /// No row matched the key.
    Unmatched,
}

impl MutationOutcome {
    /// Classify a driver's affected-row count.
    pub const fn from_rows(affected: usize) -> Self {
        if affected == 0 {
            Self::Unmatched
        } else {
            Self::Applied
        }
    }

    pub const fn is_applied(self) -> bool {
        matches!(self, Self::Applied)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, MutationOutcome::Unmatched)]
    #[case(1, MutationOutcome::Applied)]
    #[case(4, MutationOutcome::Applied)]
    fn classifies_affected_rows(#[case] rows: usize, #[case] expected: MutationOutcome) {
        assert_eq!(MutationOutcome::from_rows(rows), expected);
    }
}
