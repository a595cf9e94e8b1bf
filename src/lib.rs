#![no_std]

multiversx_sc::imports!();

pub mod actions;
pub mod citizens;
pub mod civitas_proxy;
pub mod marketplace;
pub mod permissions;
pub mod pricing;
pub mod signers;
pub mod tax;
pub mod types;

/// Civic rental marketplace gated by a weighted multi-party authorization
/// ledger.
///
/// Privileged operations (signer/threshold changes, hierarchy additions,
/// treasury withdrawals) are admin-gated; the intended path for them is an
/// action proposed on this contract's own address and executed once enough
/// signer weight has voted for it. Citizens deposit EGLD into an internal
/// balance, rent and release items priced by a descending auction, and are
/// taxed on actual usage at every settlement sweep.
#[multiversx_sc::contract]
pub trait Civitas:
    permissions::PermissionsModule
    + signers::SignersModule
    + actions::ActionsModule
    + citizens::CitizensModule
    + pricing::PricingModule
    + marketplace::MarketplaceModule
    + tax::TaxModule
{
    #[init]
    fn init(&self, quorum_threshold: BigUint) {
        self.quorum_threshold().set(&quorum_threshold);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: withdrawFunds
    // Treasury drain; reachable through governance self-calls.
    // ========================================================

    #[endpoint(withdrawFunds)]
    fn withdraw_funds(&self, receiver: ManagedAddress, amount: BigUint) {
        self.require_admin();
        require!(amount > 0u64, "Amount must be positive");

        let balance = self
            .blockchain()
            .get_sc_balance(&EgldOrEsdtTokenIdentifier::egld(), 0);
        require!(balance >= amount, "Insufficient marketplace funds");

        self.send().direct_egld(&receiver, &amount);
        self.funds_withdrawn_event(&receiver, &amount);
    }

    #[event("fundsWithdrawn")]
    fn funds_withdrawn_event(&self, #[indexed] receiver: &ManagedAddress, #[indexed] amount: &BigUint);
}
