/// Tags fetches so that out-of-order completions can be detected.
///
/// Only the completion of the most recently issued ticket is current;
/// results arriving for older tickets must be discarded.
#[derive(Debug, Default)]
pub struct FetchSequence {
    latest: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FetchTicket(u64);

impl FetchSequence {
    pub fn issue(&mut self) -> FetchTicket {
        self.latest += 1;
        FetchTicket(self.latest)
    }

    pub fn is_current(&self, ticket: FetchTicket) -> bool {
        ticket.0 == self.latest
    }
}
