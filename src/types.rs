multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Voting Phase — derived session state, never stored
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum VotingPhase {
    /// No start time configured yet.
    Unconfigured,
    /// Start time set; end time unset or the window hasn't opened.
    Scheduled,
    /// start <= now < end. Votes are admitted.
    Open,
    /// now >= end. Votes rejected, the result may be generated.
    Closed,
    /// A result has been recorded. Terminal.
    Resolved,
}

// ============================================================
// Vote Choice — wire values 1/2/3
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum VoteChoice {
    For,
    Abstain,
    Against,
}

impl VoteChoice {
    /// Decodes the external 1/2/3 wire value. Anything else is invalid.
    pub fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            1 => Some(VoteChoice::For),
            2 => Some(VoteChoice::Abstain),
            3 => Some(VoteChoice::Against),
            _ => None,
        }
    }
}

// ============================================================
// Result Classification
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum ResultClassification {
    /// percent-for at or below the rejected upper limit.
    Rejected,
    /// percent-for at or above the accepted lower limit.
    Accepted,
    /// percent-for strictly between the two limits.
    Undetermined,
}

// ============================================================
// Voting Result — recorded once, terminal
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub struct VotingResult {
    pub for_count: u64,
    pub abstain_count: u64,
    pub against_count: u64,
    pub classification: ResultClassification,
}
