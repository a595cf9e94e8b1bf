multiversx_sc::imports!();

use crate::types::Item;

#[multiversx_sc::module]
pub trait PricingModule {
    /// Descending-auction price. The rental price is fixed for the duration
    /// of a tenancy; vacant items depreciate stepwise from the last release
    /// and floor at the minimal price. The decay is computed in `BigUint`
    /// and compared before subtracting, so overshooting depreciation cannot
    /// wrap.
    fn current_item_price(&self, item: &Item<Self::Api>, now: u64) -> BigUint {
        if item.is_rented {
            return item.current_price.clone();
        }

        let elapsed_intervals = (now - item.last_release_timestamp) / item.depreciation_interval;
        let decay = &item.depreciation_rate * &BigUint::from(elapsed_intervals);
        if decay >= item.initial_price {
            return item.minimal_price.clone();
        }

        let depreciated = &item.initial_price - &decay;
        if depreciated < item.minimal_price {
            item.minimal_price.clone()
        } else {
            depreciated
        }
    }
}
