use multiversx_sc::proxy_imports::*;

pub struct VoteReceiptTokenProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for VoteReceiptTokenProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = VoteReceiptTokenProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        VoteReceiptTokenProxyMethods { wrapped_tx: tx }
    }
}

pub struct VoteReceiptTokenProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

impl<Env, From, Gas> VoteReceiptTokenProxyMethods<Env, From, (), Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    Gas: TxGas<Env>,
{
    pub fn init(self) -> TxTypedDeploy<Env, From, NotPayable, Gas, ()> {
        self.wrapped_tx.payment(NotPayable).raw_deploy().original_result()
    }
}

impl<Env, From, To, Gas> VoteReceiptTokenProxyMethods<Env, From, To, Gas>
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

    pub fn set_governance_address<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        governance: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("setGovernanceAddress")
            .argument(&governance)
            .original_result()
    }

    /// Mints exactly one receipt unit to the voter.
    pub fn mint<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        to: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("mint")
            .argument(&to)
            .original_result()
    }

    pub fn total_supply(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getTotalSupply")
            .original_result()
    }

    pub fn balance_of<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        participant: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getBalance")
            .argument(&participant)
            .original_result()
    }
}
