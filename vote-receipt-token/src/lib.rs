#![no_std]

multiversx_sc::imports!();

// ============================================================
// Vote Receipt Token
//
// Minimal fungible ledger backing the governance engine: one
// unit is minted per accepted vote, and only the configured
// governance contract may mint. Transfers are out of scope.
// ============================================================

#[multiversx_sc::contract]
pub trait VoteReceiptToken {
    #[init]
    fn init(&self) {
        let caller = self.blockchain().get_caller();
        self.admin().set(&caller);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: setAdminAddress
    // ========================================================

    #[endpoint(setAdminAddress)]
    fn set_admin_address(&self, new_admin: ManagedAddress) {
        self.require_admin();
        self.admin().set(&new_admin);
        self.admin_changed_event(&new_admin);
    }

    // ========================================================
    // ENDPOINT: setGovernanceAddress
    // Wires the single caller allowed to mint.
    // ========================================================

    #[endpoint(setGovernanceAddress)]
    fn set_governance_address(&self, governance: ManagedAddress) {
        self.require_admin();
        self.governance_address().set(&governance);
        self.governance_changed_event(&governance);
    }

    // ========================================================
    // ENDPOINT: mint
    // One unit per call, governance contract only.
    // ========================================================

    #[endpoint(mint)]
    fn mint(&self, to: ManagedAddress) {
        let caller = self.blockchain().get_caller();
        require!(
            !self.governance_address().is_empty() && caller == self.governance_address().get(),
            "caller is not the governance contract"
        );
        self.balance(&to).update(|b| *b += 1u64);
        self.total_supply().update(|s| *s += 1u64);
        self.mint_event(&to);
    }

    // ========================================================
    // INTERNAL: admin gate
    // ========================================================

    fn require_admin(&self) {
        let caller = self.blockchain().get_caller();
        require!(caller == self.admin().get(), "caller is not admin");
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("adminChanged")]
    fn admin_changed_event(&self, #[indexed] new_admin: &ManagedAddress);

    #[event("governanceChanged")]
    fn governance_changed_event(&self, #[indexed] governance: &ManagedAddress);

    #[event("mint")]
    fn mint_event(&self, #[indexed] to: &ManagedAddress);

    // ========================================================
    // STORAGE
    // ========================================================

    #[view(getAdmin)]
    #[storage_mapper("admin")]
    fn admin(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getGovernanceAddress)]
    #[storage_mapper("governanceAddress")]
    fn governance_address(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getTotalSupply)]
    #[storage_mapper("totalSupply")]
    fn total_supply(&self) -> SingleValueMapper<BigUint>;

    #[view(getBalance)]
    #[storage_mapper("balance")]
    fn balance(&self, participant: &ManagedAddress) -> SingleValueMapper<BigUint>;
}
