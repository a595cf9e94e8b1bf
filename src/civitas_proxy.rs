use multiversx_sc::proxy_imports::*;

use crate::types::{Action, Citizen, CityZone, Hash, Item, RentedItemMetadata, Society};

pub struct CivitasProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for CivitasProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = CivitasProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        CivitasProxyMethods { wrapped_tx: tx }
    }
}

pub struct CivitasProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

impl<Env, From, Gas> CivitasProxyMethods<Env, From, (), Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    Gas: TxGas<Env>,
{
    pub fn init<Arg0: ProxyArg<BigUint<Env::Api>>>(
        self,
        quorum_threshold: Arg0,
    ) -> TxTypedDeploy<Env, From, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_deploy()
            .argument(&quorum_threshold)
            .original_result()
    }
}

impl<Env, From, To, Gas> CivitasProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    // ── Signers ──

    pub fn set_signer_weight<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<BigUint<Env::Api>>,
    >(
        self,
        address: Arg0,
        weight: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("setSignerWeight")
            .argument(&address)
            .argument(&weight)
            .original_result()
    }

    pub fn set_threshold<Arg0: ProxyArg<BigUint<Env::Api>>>(
        self,
        threshold: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("setThreshold")
            .argument(&threshold)
            .original_result()
    }

    pub fn is_signer<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        address: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("isSigner")
            .argument(&address)
            .original_result()
    }

    pub fn aggregate_weight<
        Arg0: ProxyArg<MultiValueEncoded<Env::Api, ManagedAddress<Env::Api>>>,
    >(
        self,
        addresses: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getAggregateWeight")
            .argument(&addresses)
            .original_result()
    }

    pub fn get_signer_weight<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        address: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getSignerWeight")
            .argument(&address)
            .original_result()
    }

    pub fn get_threshold(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getThreshold")
            .original_result()
    }

    // ── Actions ──

    pub fn propose_action<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<BigUint<Env::Api>>,
        Arg2: ProxyArg<ManagedBuffer<Env::Api>>,
        Arg3: ProxyArg<MultiValueEncoded<Env::Api, ManagedBuffer<Env::Api>>>,
    >(
        self,
        target: Arg0,
        egld_value: Arg1,
        endpoint: Arg2,
        args: Arg3,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, Hash<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("proposeAction")
            .argument(&target)
            .argument(&egld_value)
            .argument(&endpoint)
            .argument(&args)
            .original_result()
    }

    pub fn vote<Arg0: ProxyArg<Hash<Env::Api>>>(
        self,
        action_hash: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("vote")
            .argument(&action_hash)
            .original_result()
    }

    pub fn get_action<Arg0: ProxyArg<Hash<Env::Api>>>(
        self,
        action_hash: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, Action<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getAction")
            .argument(&action_hash)
            .original_result()
    }

    pub fn is_action_executed<Arg0: ProxyArg<Hash<Env::Api>>>(
        self,
        action_hash: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("isActionExecuted")
            .argument(&action_hash)
            .original_result()
    }

    pub fn get_action_signers<Arg0: ProxyArg<Hash<Env::Api>>>(
        self,
        action_hash: Arg0,
    ) -> TxTypedCall<
        Env,
        From,
        To,
        NotPayable,
        Gas,
        MultiValueEncoded<Env::Api, ManagedAddress<Env::Api>>,
    > {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getActionSigners")
            .argument(&action_hash)
            .original_result()
    }

    // ── Marketplace hierarchy ──

    pub fn add_society<Arg0: ProxyArg<ManagedBuffer<Env::Api>>>(
        self,
        name: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, Hash<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("addSociety")
            .argument(&name)
            .original_result()
    }

    pub fn add_city_zone<
        Arg0: ProxyArg<Hash<Env::Api>>,
        Arg1: ProxyArg<ManagedBuffer<Env::Api>>,
    >(
        self,
        society_hash: Arg0,
        name: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, Hash<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("addCityZone")
            .argument(&society_hash)
            .argument(&name)
            .original_result()
    }

    #[allow(clippy::too_many_arguments)]
    pub fn add_item<
        Arg0: ProxyArg<Hash<Env::Api>>,
        Arg1: ProxyArg<ManagedBuffer<Env::Api>>,
        Arg2: ProxyArg<BigUint<Env::Api>>,
        Arg3: ProxyArg<BigUint<Env::Api>>,
        Arg4: ProxyArg<BigUint<Env::Api>>,
        Arg5: ProxyArg<u64>,
        Arg6: ProxyArg<u64>,
        Arg7: ProxyArg<u64>,
    >(
        self,
        city_zone_hash: Arg0,
        name: Arg1,
        initial_price: Arg2,
        minimal_price: Arg3,
        depreciation_rate: Arg4,
        depreciation_interval: Arg5,
        notice_period: Arg6,
        tax_rate: Arg7,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, Hash<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("addItem")
            .argument(&city_zone_hash)
            .argument(&name)
            .argument(&initial_price)
            .argument(&minimal_price)
            .argument(&depreciation_rate)
            .argument(&depreciation_interval)
            .argument(&notice_period)
            .argument(&tax_rate)
            .original_result()
    }

    pub fn get_item<Arg0: ProxyArg<Hash<Env::Api>>>(
        self,
        item_hash: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, Item<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getItem")
            .argument(&item_hash)
            .original_result()
    }

    pub fn get_item_price<Arg0: ProxyArg<Hash<Env::Api>>>(
        self,
        item_hash: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getItemPrice")
            .argument(&item_hash)
            .original_result()
    }

    pub fn get_item_renter<Arg0: ProxyArg<Hash<Env::Api>>>(
        self,
        item_hash: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedAddress<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getItemRenter")
            .argument(&item_hash)
            .original_result()
    }

    pub fn is_item_rented<Arg0: ProxyArg<Hash<Env::Api>>>(
        self,
        item_hash: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("isItemRented")
            .argument(&item_hash)
            .original_result()
    }

    pub fn get_society<Arg0: ProxyArg<Hash<Env::Api>>>(
        self,
        society_hash: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, Society<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getSociety")
            .argument(&society_hash)
            .original_result()
    }

    pub fn get_city_zone<Arg0: ProxyArg<Hash<Env::Api>>>(
        self,
        zone_hash: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, CityZone<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getCityZone")
            .argument(&zone_hash)
            .original_result()
    }

    pub fn get_society_count(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getSocietyCount")
            .original_result()
    }

    pub fn get_city_zone_count(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getCityZoneCount")
            .original_result()
    }

    pub fn get_item_count(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getItemCount")
            .original_result()
    }

    pub fn rent_item<Arg0: ProxyArg<Hash<Env::Api>>, Arg1: ProxyArg<BigUint<Env::Api>>>(
        self,
        item_hash: Arg0,
        new_price: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("rentItem")
            .argument(&item_hash)
            .argument(&new_price)
            .original_result()
    }

    pub fn release_item<Arg0: ProxyArg<Hash<Env::Api>>>(
        self,
        item_hash: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("releaseItem")
            .argument(&item_hash)
            .original_result()
    }

    // ── Citizens ──

    pub fn register_citizen(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("registerCitizen")
            .original_result()
    }

    pub fn deposit(self) -> TxTypedCall<Env, From, To, (), Gas, ()> {
        self.wrapped_tx.raw_call("deposit").original_result()
    }

    pub fn reclaim_funds<Arg0: ProxyArg<BigUint<Env::Api>>>(
        self,
        amount: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("reclaimFunds")
            .argument(&amount)
            .original_result()
    }

    pub fn get_citizen<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        address: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, Citizen<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getCitizen")
            .argument(&address)
            .original_result()
    }

    pub fn get_citizen_balance<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        address: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigInt<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getCitizenBalance")
            .argument(&address)
            .original_result()
    }

    pub fn get_citizen_rewards<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        address: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getCitizenRewards")
            .argument(&address)
            .original_result()
    }

    pub fn get_rented_items<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        address: Arg0,
    ) -> TxTypedCall<
        Env,
        From,
        To,
        NotPayable,
        Gas,
        MultiValueEncoded<Env::Api, RentedItemMetadata<Env::Api>>,
    > {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getRentedItems")
            .argument(&address)
            .original_result()
    }

    pub fn get_rented_item_count<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        address: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, usize> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getRentedItemCount")
            .argument(&address)
            .original_result()
    }

    // ── Tax & treasury ──

    pub fn settle_taxes(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("settleTaxes")
            .original_result()
    }

    pub fn withdraw_funds<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<BigUint<Env::Api>>,
    >(
        self,
        receiver: Arg0,
        amount: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("withdrawFunds")
            .argument(&receiver)
            .argument(&amount)
            .original_result()
    }
}
