multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait PermissionsModule {
    /// Admin capability: the contract owner, or the contract itself so that
    /// executed actions can reach privileged endpoints through self-calls.
    fn is_admin(&self, address: &ManagedAddress) -> bool {
        *address == self.blockchain().get_owner_address()
            || *address == self.blockchain().get_sc_address()
    }

    fn require_admin(&self) {
        let caller = self.blockchain().get_caller();
        require!(self.is_admin(&caller), "Caller is not an administrator");
    }
}
