//! Request generations for discarding superseded replies.
//!
//! Each logical target (current folder, preview slot) owns a [`Generation`].
//! Issuing a request advances it and hands out a [`Ticket`]; a reply is applied
//! only while its ticket is still current.

/// Identifies one request against a target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

/// Monotonic request counter for one target.
#[derive(Clone, Debug, Default)]
pub struct Generation {
    current: u64,
}

impl Generation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new request, superseding every earlier ticket.
    pub fn issue(&mut self) -> Ticket {
        self.current += 1;
        Ticket(self.current)
    }

    /// Supersede outstanding tickets without starting a request.
    pub fn invalidate(&mut self) {
        self.current += 1;
    }

    #[inline]
    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_ticket_wins() {
        let mut generation = Generation::new();
        let first = generation.issue();
        assert!(generation.is_current(first));

        let second = generation.issue();
        assert!(!generation.is_current(first));
        assert!(generation.is_current(second));
    }

    #[test]
    fn test_invalidate() {
        let mut generation = Generation::new();
        let ticket = generation.issue();
        generation.invalidate();
        assert!(!generation.is_current(ticket));
    }
}
