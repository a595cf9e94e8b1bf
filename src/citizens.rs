multiversx_sc::imports!();

use crate::types::{Citizen, RentedItemMetadata};

#[multiversx_sc::module]
pub trait CitizensModule {
    // ========================================================
    // ENDPOINT: registerCitizen
    // ========================================================

    #[endpoint(registerCitizen)]
    fn register_citizen(&self) {
        let caller = self.blockchain().get_caller();
        require!(
            self.citizens(&caller).is_empty(),
            "Citizen already registered"
        );

        let citizen = Citizen {
            balance: BigInt::zero(),
            reward_tokens: BigUint::zero(),
            last_tax_update: self.blockchain().get_block_timestamp(),
            rentals: ManagedVec::new(),
        };
        self.citizens(&caller).set(&citizen);
        self.citizen_list().insert(caller.clone());

        self.citizen_registered_event(&caller);
    }

    // ========================================================
    // ENDPOINT: deposit
    // ========================================================

    #[endpoint(deposit)]
    #[payable("EGLD")]
    fn deposit(&self) {
        let caller = self.blockchain().get_caller();
        self.require_citizen(&caller);

        let payment = self.call_value().egld_value().clone_value();
        require!(payment > 0u64, "Deposit must be positive");

        let credited = payment.clone();
        self.citizens(&caller).update(|citizen| {
            citizen.balance += BigInt::from(credited);
        });

        self.citizen_deposit_event(&caller, &payment);
    }

    // ========================================================
    // ENDPOINT: reclaimFunds
    // ========================================================

    #[endpoint(reclaimFunds)]
    fn reclaim_funds(&self, amount: BigUint) {
        let caller = self.blockchain().get_caller();
        self.require_citizen(&caller);
        require!(amount > 0u64, "Amount must be positive");

        self.citizens(&caller).update(|citizen| {
            require!(
                citizen.balance >= BigInt::from(amount.clone()),
                "Insufficient balance"
            );
            citizen.balance -= BigInt::from(amount.clone());
        });
        self.send().direct_egld(&caller, &amount);

        self.funds_reclaimed_event(&caller, &amount);
    }

    fn require_citizen(&self, address: &ManagedAddress) {
        require!(!self.citizens(address).is_empty(), "Unknown citizen");
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getCitizen)]
    fn get_citizen(&self, address: &ManagedAddress) -> Citizen<Self::Api> {
        self.require_citizen(address);
        self.citizens(address).get()
    }

    /// Signed; may be negative across tax settlement windows.
    #[view(getCitizenBalance)]
    fn get_citizen_balance(&self, address: &ManagedAddress) -> BigInt {
        self.require_citizen(address);
        self.citizens(address).get().balance
    }

    #[view(getCitizenRewards)]
    fn get_citizen_rewards(&self, address: &ManagedAddress) -> BigUint {
        self.require_citizen(address);
        self.citizens(address).get().reward_tokens
    }

    #[view(getRentedItems)]
    fn get_rented_items(
        &self,
        address: &ManagedAddress,
    ) -> MultiValueEncoded<RentedItemMetadata<Self::Api>> {
        self.require_citizen(address);
        self.citizens(address).get().rentals.into()
    }

    #[view(getRentedItemCount)]
    fn get_rented_item_count(&self, address: &ManagedAddress) -> usize {
        self.require_citizen(address);
        self.citizens(address).get().rentals.len()
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("citizenRegistered")]
    fn citizen_registered_event(&self, #[indexed] citizen: &ManagedAddress);

    #[event("citizenDeposit")]
    fn citizen_deposit_event(&self, #[indexed] citizen: &ManagedAddress, amount: &BigUint);

    #[event("fundsReclaimed")]
    fn funds_reclaimed_event(&self, #[indexed] citizen: &ManagedAddress, amount: &BigUint);

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("citizens")]
    fn citizens(&self, address: &ManagedAddress) -> SingleValueMapper<Citizen<Self::Api>>;

    /// Roster for tax settlement iteration.
    #[storage_mapper("citizenList")]
    fn citizen_list(&self) -> UnorderedSetMapper<ManagedAddress>;
}
