use multiversx_sc::proxy_imports::*;

use crate::types::{VotingPhase, VotingResult};

pub struct GovernanceVoteProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for GovernanceVoteProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = GovernanceVoteProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        GovernanceVoteProxyMethods { wrapped_tx: tx }
    }
}

pub struct GovernanceVoteProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

impl<Env, From, Gas> GovernanceVoteProxyMethods<Env, From, (), Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    Gas: TxGas<Env>,
{
    pub fn init<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        receipt_token_address: Arg0,
    ) -> TxTypedDeploy<Env, From, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_deploy()
            .argument(&receipt_token_address)
            .original_result()
    }
}

impl<Env, From, To, Gas> GovernanceVoteProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn set_admin_address<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        new_admin: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("setAdminAddress")
            .argument(&new_admin)
            .original_result()
    }

    pub fn set_voting_start_time<Arg0: ProxyArg<u64>>(
        self,
        start_time: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("setVotingStartTime")
            .argument(&start_time)
            .original_result()
    }

    pub fn set_voting_end_time<Arg0: ProxyArg<u64>>(
        self,
        end_time: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("setVotingEndTime")
            .argument(&end_time)
            .original_result()
    }

    pub fn set_minimum_votes_required<Arg0: ProxyArg<u64>>(
        self,
        minimum_votes: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("setMinimumVotesRequired")
            .argument(&minimum_votes)
            .original_result()
    }

    pub fn set_percentage_limits<Arg0: ProxyArg<u64>, Arg1: ProxyArg<u64>>(
        self,
        rejected_upper: Arg0,
        accepted_lower: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("setPercentageLimits")
            .argument(&rejected_upper)
            .argument(&accepted_lower)
            .original_result()
    }

    pub fn modify_whitelist_access<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<bool>,
    >(
        self,
        participant: Arg0,
        eligible: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("modifyWhitelistAccess")
            .argument(&participant)
            .argument(&eligible)
            .original_result()
    }

    pub fn check_if_address_is_whitelisted<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        participant: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("checkIfAddressIsWhitelisted")
            .argument(&participant)
            .original_result()
    }

    pub fn submit_vote<Arg0: ProxyArg<u8>>(
        self,
        choice: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("submitVote")
            .argument(&choice)
            .original_result()
    }

    pub fn generate_voting_result(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, VotingResult> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("generateVotingResult")
            .original_result()
    }

    pub fn voting_phase(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, VotingPhase> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getVotingPhase")
            .original_result()
    }

    pub fn get_tally(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, MultiValue3<u64, u64, u64>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getTally")
            .original_result()
    }

    pub fn get_voting_result(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, VotingResult> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getVotingResult")
            .original_result()
    }

    pub fn voting_start_time(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("votingStartTime")
            .original_result()
    }

    pub fn voting_end_time(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("votingEndTime")
            .original_result()
    }

    pub fn minimum_votes_required(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("minimumVotesRequired")
            .original_result()
    }

    pub fn rejected_upper_percent(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("rejectedUpperPercent")
            .original_result()
    }

    pub fn accepted_lower_percent(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("acceptedLowerPercent")
            .original_result()
    }

    pub fn get_admin(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedAddress<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getAdmin")
            .original_result()
    }
}
