#![no_std]

multiversx_sc::imports!();

pub mod governance_proxy;
pub mod receipt_token_proxy;
pub mod types;

use types::{ResultClassification, VoteChoice, VotingPhase, VotingResult};

// ============================================================
// Constants
// ============================================================

/// Minimum voting window: 24 hours in seconds. The end time must be
/// at least this far past the start time.
const MIN_VOTING_WINDOW: u64 = 86_400;

/// Quorum settings must fit in 32 bits (exclusive upper bound).
const MAX_MINIMUM_VOTES: u64 = 1 << 32;

// ============================================================
// Contract
// ============================================================

#[multiversx_sc::contract]
pub trait GovernanceVote {
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(&self, receipt_token_address: ManagedAddress) {
        let caller = self.blockchain().get_caller();
        self.admin().set(&caller);
        self.receipt_token_address().set(&receipt_token_address);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: setAdminAddress
    // Admin identity is reassignable, only by the current admin.
    // ========================================================

    #[endpoint(setAdminAddress)]
    fn set_admin_address(&self, new_admin: ManagedAddress) {
        self.require_admin();
        self.admin().set(&new_admin);
        self.admin_changed_event(&new_admin);
    }

    // ========================================================
    // ENDPOINT: setVotingStartTime
    // Overwrites unconditionally; validity of the window is
    // enforced when the end time is set.
    // ========================================================

    #[endpoint(setVotingStartTime)]
    fn set_voting_start_time(&self, start_time: u64) {
        self.require_admin();
        self.voting_start_time().set(start_time);
        self.schedule_changed_event(start_time, self.voting_end_time().get());
    }

    // ========================================================
    // ENDPOINT: setVotingEndTime
    // Requires a configured start time and a window of at least
    // one day, so the session can never open and close in the
    // same instant.
    // ========================================================

    #[endpoint(setVotingEndTime)]
    fn set_voting_end_time(&self, end_time: u64) {
        self.require_admin();
        let start_time = self.voting_start_time().get();
        require!(start_time > 0, "voting start time not set");
        require!(
            end_time >= start_time + MIN_VOTING_WINDOW,
            "voting window shorter than one day"
        );
        self.voting_end_time().set(end_time);
        self.schedule_changed_event(start_time, end_time);
    }

    // ========================================================
    // ENDPOINT: setMinimumVotesRequired
    // ========================================================

    #[endpoint(setMinimumVotesRequired)]
    fn set_minimum_votes_required(&self, minimum_votes: u64) {
        self.require_admin();
        require!(
            minimum_votes > 0 && minimum_votes < MAX_MINIMUM_VOTES,
            "minimum votes out of range"
        );
        self.minimum_votes_required().set(minimum_votes);
    }

    // ========================================================
    // ENDPOINT: setPercentageLimits
    // Both limits are written in one call, so a half-updated
    // pair can never be observed.
    // ========================================================

    #[endpoint(setPercentageLimits)]
    fn set_percentage_limits(&self, rejected_upper: u64, accepted_lower: u64) {
        self.require_admin();
        require!(rejected_upper > 0, "rejected limit must be positive");
        require!(
            rejected_upper < accepted_lower,
            "rejected limit must be below accepted limit"
        );
        require!(accepted_lower <= 100, "accepted limit above 100");
        self.rejected_upper_percent().set(rejected_upper);
        self.accepted_lower_percent().set(accepted_lower);
    }

    // ========================================================
    // ENDPOINT: modifyWhitelistAccess
    // ========================================================

    #[endpoint(modifyWhitelistAccess)]
    fn modify_whitelist_access(&self, participant: ManagedAddress, eligible: bool) {
        self.require_admin();
        self.whitelist(&participant).set(eligible);
        self.whitelist_changed_event(&participant, eligible);
    }

    // ========================================================
    // ENDPOINT: checkIfAddressIsWhitelisted
    // Caller-gated read, so it is an endpoint rather than a view.
    // Unknown participants read as not eligible.
    // ========================================================

    #[endpoint(checkIfAddressIsWhitelisted)]
    fn check_if_address_is_whitelisted(&self, participant: ManagedAddress) -> bool {
        self.require_admin();
        self.whitelist(&participant).get()
    }

    // ========================================================
    // ENDPOINT: submitVote
    // One vote per whitelisted participant while the session is
    // open. Each admitted vote mints one receipt unit to the
    // caller; a failed mint reverts the vote with it.
    // ========================================================

    #[endpoint(submitVote)]
    fn submit_vote(&self, choice: u8) {
        let choice = match VoteChoice::from_raw(choice) {
            Some(choice) => choice,
            None => sc_panic!("invalid vote choice"),
        };
        require!(
            self.voting_phase() == VotingPhase::Open,
            "voting is not open"
        );

        let caller = self.blockchain().get_caller();
        require!(self.whitelist(&caller).get(), "caller is not whitelisted");
        require!(!self.has_voted(&caller).get(), "already voted");

        self.has_voted(&caller).set(true);
        match choice {
            VoteChoice::For => self.for_count().update(|c| *c += 1),
            VoteChoice::Abstain => self.abstain_count().update(|c| *c += 1),
            VoteChoice::Against => self.against_count().update(|c| *c += 1),
        }

        let token_address = self.receipt_token_address().get();
        self.tx()
            .to(&token_address)
            .typed(receipt_token_proxy::VoteReceiptTokenProxy)
            .mint(caller.clone())
            .sync_call();

        self.vote_submitted_event(&caller, choice);
    }

    // ========================================================
    // ENDPOINT: generateVotingResult
    // Classifies the final tally once the session has closed and
    // quorum is met. Runs exactly once; the session is terminal
    // afterwards.
    // ========================================================

    #[endpoint(generateVotingResult)]
    fn generate_voting_result(&self) -> VotingResult {
        self.require_admin();
        require!(self.voting_result().is_empty(), "voting already resolved");
        require!(
            self.voting_phase() == VotingPhase::Closed,
            "voting is not closed"
        );

        let for_count = self.for_count().get();
        let abstain_count = self.abstain_count().get();
        let against_count = self.against_count().get();
        let total_votes = for_count + abstain_count + against_count;
        require!(
            total_votes > 0 && total_votes >= self.minimum_votes_required().get(),
            "quorum not met"
        );

        let percent_for = for_count * 100 / total_votes;
        let classification = if percent_for <= self.rejected_upper_percent().get() {
            ResultClassification::Rejected
        } else if percent_for >= self.accepted_lower_percent().get() {
            ResultClassification::Accepted
        } else {
            ResultClassification::Undetermined
        };

        let result = VotingResult {
            for_count,
            abstain_count,
            against_count,
            classification,
        };
        self.voting_result().set(result);

        self.voting_results_event(for_count, abstain_count, against_count, classification);
        result
    }

    // ========================================================
    // INTERNAL: admin gate
    // ========================================================

    fn require_admin(&self) {
        let caller = self.blockchain().get_caller();
        require!(caller == self.admin().get(), "caller is not admin");
    }

    // ========================================================
    // VIEWS — read-only queries
    // ========================================================

    /// Session phase derived from the clock and the schedule.
    /// Nothing is cached, so the phase can never drift from the
    /// configuration it is computed from.
    #[view(getVotingPhase)]
    fn voting_phase(&self) -> VotingPhase {
        if !self.voting_result().is_empty() {
            return VotingPhase::Resolved;
        }
        let start_time = self.voting_start_time().get();
        if start_time == 0 {
            return VotingPhase::Unconfigured;
        }
        let end_time = self.voting_end_time().get();
        let now = self.blockchain().get_block_timestamp();
        if end_time == 0 || now < start_time {
            VotingPhase::Scheduled
        } else if now < end_time {
            VotingPhase::Open
        } else {
            VotingPhase::Closed
        }
    }

    #[view(getTally)]
    fn get_tally(&self) -> MultiValue3<u64, u64, u64> {
        (
            self.for_count().get(),
            self.abstain_count().get(),
            self.against_count().get(),
        )
            .into()
    }

    #[view(getVotingResult)]
    fn get_voting_result(&self) -> VotingResult {
        require!(!self.voting_result().is_empty(), "voting not resolved");
        self.voting_result().get()
    }

    #[view(hasVoted)]
    fn has_participant_voted(&self, participant: &ManagedAddress) -> bool {
        self.has_voted(participant).get()
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("adminChanged")]
    fn admin_changed_event(&self, #[indexed] new_admin: &ManagedAddress);

    #[event("scheduleChanged")]
    fn schedule_changed_event(&self, #[indexed] start_time: u64, #[indexed] end_time: u64);

    #[event("whitelistChanged")]
    fn whitelist_changed_event(&self, #[indexed] participant: &ManagedAddress, eligible: bool);

    #[event("voteSubmitted")]
    fn vote_submitted_event(&self, #[indexed] voter: &ManagedAddress, choice: VoteChoice);

    #[event("votingResults")]
    fn voting_results_event(
        &self,
        #[indexed] for_count: u64,
        #[indexed] abstain_count: u64,
        #[indexed] against_count: u64,
        classification: ResultClassification,
    );

    // ========================================================
    // STORAGE
    // ========================================================

    // ── Access control ──

    #[view(getAdmin)]
    #[storage_mapper("admin")]
    fn admin(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getReceiptTokenAddress)]
    #[storage_mapper("receiptTokenAddress")]
    fn receipt_token_address(&self) -> SingleValueMapper<ManagedAddress>;

    // ── Schedule ──

    #[view(votingStartTime)]
    #[storage_mapper("votingStartTime")]
    fn voting_start_time(&self) -> SingleValueMapper<u64>;

    #[view(votingEndTime)]
    #[storage_mapper("votingEndTime")]
    fn voting_end_time(&self) -> SingleValueMapper<u64>;

    // ── Parameters ──

    #[view(minimumVotesRequired)]
    #[storage_mapper("minimumVotesRequired")]
    fn minimum_votes_required(&self) -> SingleValueMapper<u64>;

    #[view(rejectedUpperPercent)]
    #[storage_mapper("rejectedUpperPercent")]
    fn rejected_upper_percent(&self) -> SingleValueMapper<u64>;

    #[view(acceptedLowerPercent)]
    #[storage_mapper("acceptedLowerPercent")]
    fn accepted_lower_percent(&self) -> SingleValueMapper<u64>;

    // ── Whitelist and per-participant vote record ──

    #[storage_mapper("whitelist")]
    fn whitelist(&self, participant: &ManagedAddress) -> SingleValueMapper<bool>;

    #[storage_mapper("hasVoted")]
    fn has_voted(&self, participant: &ManagedAddress) -> SingleValueMapper<bool>;

    // ── Tally ──

    #[storage_mapper("forCount")]
    fn for_count(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("abstainCount")]
    fn abstain_count(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("againstCount")]
    fn against_count(&self) -> SingleValueMapper<u64>;

    // ── Result ──

    #[storage_mapper("votingResult")]
    fn voting_result(&self) -> SingleValueMapper<VotingResult>;
}
