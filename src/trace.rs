use crate::grid::Digit;

/// One tentative placement tried by the search, in trial order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Placement {
    pub row: usize,
    pub col: usize,
    pub digit: Digit,
}

/// Injected consumer of the placement trace; keeps the search itself pure.
pub trait TraceSink {
    fn record(&mut self, placement: Placement);
}

/// Discards every event.
pub struct NoTrace;

impl TraceSink for NoTrace {
    fn record(&mut self, _placement: Placement) {}
}

impl TraceSink for Vec<Placement> {
    fn record(&mut self, placement: Placement) { self.push(placement); }
}

#[cfg(feature = "serde")]
pub fn trace_to_json(trace: &[Placement]) -> serde_json::Result<String> {
    serde_json::to_string(trace)
}
