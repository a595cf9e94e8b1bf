multiversx_sc::imports!();

/// Percentage denominator for tax rates.
const PERCENT_DENOMINATOR: u64 = 100;

#[multiversx_sc::module]
pub trait TaxModule: crate::citizens::CitizensModule {
    // ========================================================
    // ENDPOINT: settleTaxes
    // Open to any caller; settlement is a bookkeeping sweep.
    // ========================================================

    /// Converts elapsed usage into owed tax for every registered citizen.
    /// Tax is prorated both by the fraction of the settlement window each
    /// tenancy was actually occupied and by the tax-rate percentage;
    /// division truncates toward zero, which is the authoritative rounding
    /// rule for this accounting.
    #[endpoint(settleTaxes)]
    fn settle_taxes(&self) {
        let now = self.blockchain().get_block_timestamp();
        for address in self.citizen_list().iter() {
            self.settle_citizen(&address, now);
        }
    }

    fn settle_citizen(&self, address: &ManagedAddress, now: u64) {
        let mut citizen = self.citizens(address).get();
        let window = now - citizen.last_tax_update;
        if window == 0 {
            // Settling twice in the same block is a no-op, not a fault.
            return;
        }

        let mut total_due = BigUint::zero();
        let mut open_rentals = ManagedVec::new();
        for entry in citizen.rentals.iter() {
            // A tenancy closed before its notice-period start ever arrived
            // was never occupied; it owes nothing.
            let closed_before_start =
                entry.rented_until != 0 && entry.rented_from > entry.rented_until;
            if !closed_before_start {
                let usage_start = core::cmp::max(entry.rented_from, citizen.last_tax_update);
                let usage_end = if entry.rented_until != 0 {
                    entry.rented_until
                } else {
                    now
                };
                let usage = usage_end.saturating_sub(usage_start);
                if usage > 0 {
                    let due = &entry.price
                        * &BigUint::from(entry.tax_rate)
                        * &BigUint::from(usage)
                        / &BigUint::from(window)
                        / &BigUint::from(PERCENT_DENOMINATOR);
                    total_due += &due;
                }
            }

            // Closed tenancies are charged once and compacted out; open
            // ones keep their relative order.
            if entry.rented_until == 0 {
                open_rentals.push(entry);
            }
        }

        citizen.balance -= BigInt::from(total_due.clone());
        citizen.reward_tokens += &total_due;
        citizen.rentals = open_rentals;
        citizen.last_tax_update = now;
        self.citizens(address).set(&citizen);

        self.taxes_settled_event(address, &total_due, now);
    }

    #[event("taxesSettled")]
    fn taxes_settled_event(
        &self,
        #[indexed] citizen: &ManagedAddress,
        #[indexed] amount: &BigUint,
        timestamp: u64,
    );
}
