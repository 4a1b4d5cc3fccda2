//! Request sequencing for out-of-order responses

/// Outcome of delivering a response to a state slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    /// The response belonged to the latest request and was applied
    Applied,
    /// A newer request superseded it; nothing changed
    Stale,
}

impl Delivery {
    pub fn is_applied(self) -> bool {
        self == Delivery::Applied
    }
}

/// Monotonic counter for one state slot.
///
/// Only the response carrying the most recently issued number may be applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestSeq {
    latest: u64,
}

impl RequestSeq {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a new sequence number, superseding all earlier ones
    pub fn issue(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    /// Supersede everything in flight without issuing a request
    pub fn invalidate(&mut self) {
        self.latest += 1;
    }

    pub fn is_current(&self, seq: u64) -> bool {
        seq != 0 && seq == self.latest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_latest_is_current() {
        let mut seq = RequestSeq::new();
        assert!(!seq.is_current(0));

        let first = seq.issue();
        assert!(seq.is_current(first));

        let second = seq.issue();
        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
    }

    #[test]
    fn test_invalidate_supersedes_in_flight() {
        let mut seq = RequestSeq::new();
        let issued = seq.issue();
        seq.invalidate();
        assert!(!seq.is_current(issued));
    }
}
