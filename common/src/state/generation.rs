/// Identifies one request issued against one form id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket {
    sequence: u64,
    form_id: i64,
}

impl RequestTicket {
    pub fn form_id(&self) -> i64 {
        self.form_id
    }
}

/// Hands out request tickets; only the most recently issued one is current.
///
/// Responses are matched against their ticket when they arrive, so a slow
/// response for a superseded id can never overwrite a newer one, whatever
/// order the requests complete in.
#[derive(Debug, Clone, Default)]
pub struct RequestGeneration {
    sequence: u64,
}

impl RequestGeneration {
    pub fn issue(&mut self, form_id: i64) -> RequestTicket {
        self.sequence += 1;
        RequestTicket {
            sequence: self.sequence,
            form_id,
        }
    }

    /// Makes every outstanding ticket stale without issuing a new one.
    pub fn invalidate(&mut self) {
        self.sequence += 1;
    }

    pub fn is_current(&self, ticket: &RequestTicket) -> bool {
        ticket.sequence == self.sequence
    }
}
