multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait SignersModule: crate::permissions::PermissionsModule {
    // ========================================================
    // ENDPOINT: setSignerWeight
    // Idempotent upsert; weight 0 removes signer status.
    // ========================================================

    #[endpoint(setSignerWeight)]
    fn set_signer_weight(&self, address: ManagedAddress, weight: BigUint) {
        self.require_admin();
        self.signer_weight(&address).set(&weight);
        self.signer_weight_set_event(&address, &weight);
    }

    // ========================================================
    // ENDPOINT: setThreshold
    // Deliberately no reachability check against the current
    // signer set; the threshold may exceed the total weight.
    // ========================================================

    #[endpoint(setThreshold)]
    fn set_threshold(&self, threshold: BigUint) {
        self.require_admin();
        self.quorum_threshold().set(&threshold);
        self.threshold_set_event(&threshold);
    }

    #[view(isSigner)]
    fn is_signer(&self, address: &ManagedAddress) -> bool {
        self.signer_weight(address).get() > 0u64
    }

    /// Sums weights over distinct addresses only; duplicates must not
    /// inflate the sum.
    #[view(getAggregateWeight)]
    fn aggregate_weight(&self, addresses: MultiValueEncoded<ManagedAddress>) -> BigUint {
        let mut seen: ManagedVec<Self::Api, ManagedAddress<Self::Api>> = ManagedVec::new();
        let mut total = BigUint::zero();
        for address in addresses {
            if !seen.contains(&address) {
                total += self.signer_weight(&address).get();
                seen.push(address);
            }
        }
        total
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("signerWeightSet")]
    fn signer_weight_set_event(&self, #[indexed] address: &ManagedAddress, weight: &BigUint);

    #[event("thresholdSet")]
    fn threshold_set_event(&self, #[indexed] threshold: &BigUint);

    // ========================================================
    // STORAGE
    // ========================================================

    /// Empty mapper decodes to zero, so absent and weight-0 coincide.
    #[view(getSignerWeight)]
    #[storage_mapper("signerWeight")]
    fn signer_weight(&self, address: &ManagedAddress) -> SingleValueMapper<BigUint>;

    #[view(getThreshold)]
    #[storage_mapper("quorumThreshold")]
    fn quorum_threshold(&self) -> SingleValueMapper<BigUint>;
}
