multiversx_sc::imports!();
multiversx_sc::derive_imports!();

/// Content hash identifying an action, society, city zone or item:
/// keccak-256 over the entity's defining fields, order-sensitive.
pub type Hash<M> = ManagedByteArray<M, 32>;

// ============================================================
// Action — a proposed privileged operation awaiting weighted
// approval before one-shot execution
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Action<M: ManagedTypeApi> {
    pub target: ManagedAddress<M>,
    pub egld_value: BigUint<M>,
    /// Endpoint to invoke on the target once the threshold is reached.
    pub endpoint: ManagedBuffer<M>,
    /// Raw top-encoded call arguments.
    pub arguments: ManagedVec<M, ManagedBuffer<M>>,
    /// Flips false -> true exactly once; no vote is accepted afterwards.
    pub executed: bool,
    /// Distinct voter addresses, in vote order.
    pub signers: ManagedVec<M, ManagedAddress<M>>,
}

// ============================================================
// Marketplace hierarchy — Society -> CityZone -> Item
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Society<M: ManagedTypeApi> {
    pub name: ManagedBuffer<M>,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct CityZone<M: ManagedTypeApi> {
    pub name: ManagedBuffer<M>,
    pub society_id: u64,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Item<M: ManagedTypeApi> {
    pub name: ManagedBuffer<M>,
    pub city_zone_id: u64,
    pub initial_price: BigUint<M>,
    pub minimal_price: BigUint<M>,
    /// Price drop applied per elapsed depreciation interval while vacant.
    pub depreciation_rate: BigUint<M>,
    /// Seconds per depreciation step.
    pub depreciation_interval: u64,
    /// Seconds a displaced tenant stays liable after being outbid.
    pub notice_period: u64,
    /// Percentage, 0..=100.
    pub tax_rate: u64,
    pub last_release_timestamp: u64,
    pub is_rented: bool,
    /// Zero address while vacant.
    pub current_renter: ManagedAddress<M>,
    pub current_price: BigUint<M>,
}

// ============================================================
// Citizen — balance, rewards and tenancy history
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, ManagedVecItem, Clone, Debug)]
pub struct RentedItemMetadata<M: ManagedTypeApi> {
    pub item_hash: Hash<M>,
    /// Tax accrual start, offset past the previous tenant's notice period.
    pub rented_from: u64,
    /// 0 while the tenancy is open.
    pub rented_until: u64,
    /// Agreed rental price at the time of renting.
    pub price: BigUint<M>,
    /// Snapshot of the item's tax rate at rent time.
    pub tax_rate: u64,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Citizen<M: ManagedTypeApi> {
    /// Signed: tax settlement may push a balance below zero until the
    /// citizen tops up again.
    pub balance: BigInt<M>,
    pub reward_tokens: BigUint<M>,
    /// Start of the current tax accrual window.
    pub last_tax_update: u64,
    /// Open tenancies plus tenancies closed since the last settlement.
    pub rentals: ManagedVec<M, RentedItemMetadata<M>>,
}
