multiversx_sc::imports!();

use crate::types::{Action, Hash};

#[multiversx_sc::module]
pub trait ActionsModule:
    crate::signers::SignersModule + crate::permissions::PermissionsModule
{
    // ========================================================
    // ENDPOINT: proposeAction
    // Open to any caller; proposals are inert until signers
    // vote on them.
    // ========================================================

    #[endpoint(proposeAction)]
    fn propose_action(
        &self,
        target: ManagedAddress,
        egld_value: BigUint,
        endpoint: ManagedBuffer,
        args: MultiValueEncoded<ManagedBuffer>,
    ) -> Hash<Self::Api> {
        let arguments = args.to_vec();
        let action_hash = self.action_hash(&target, &egld_value, &endpoint, &arguments);
        require!(
            self.actions(&action_hash).is_empty(),
            "Action already proposed"
        );

        let action = Action {
            target: target.clone(),
            egld_value,
            endpoint,
            arguments,
            executed: false,
            signers: ManagedVec::new(),
        };
        self.actions(&action_hash).set(&action);

        let proposer = self.blockchain().get_caller();
        self.action_proposed_event(&action_hash, &target, &proposer);

        action_hash
    }

    // ========================================================
    // ENDPOINT: vote
    // The caller is the voter. Crossing the threshold triggers
    // exactly one external call to the action's target.
    // ========================================================

    #[endpoint(vote)]
    fn vote(&self, action_hash: Hash<Self::Api>) {
        let caller = self.blockchain().get_caller();
        require!(self.is_signer(&caller), "Caller is not a signer");
        require!(
            !self.actions(&action_hash).is_empty(),
            "Action not proposed"
        );

        let mut action = self.actions(&action_hash).get();
        require!(!action.executed, "Action already executed");
        require!(!action.signers.contains(&caller), "Already voted");

        action.signers.push(caller.clone());

        // Live weights on every vote: changing a signer's weight mid-vote
        // can flip the outcome. Documented policy, not an oversight.
        let total_weight = self.aggregate_weight(action.signers.clone().into());
        let reached = total_weight >= self.quorum_threshold().get();
        if reached {
            action.executed = true;
        }

        // Persisted before the external call below, so a re-entrant vote on
        // this action already sees the executed flag.
        self.actions(&action_hash).set(&action);
        self.action_voted_event(&action_hash, &caller, &total_weight);

        if reached {
            self.perform_action(&action_hash, &action);
        }
    }

    /// The one-shot execution. A failing callee fails this whole
    /// transaction, rolling back the vote and the executed flag, which
    /// leaves the action retryable.
    fn perform_action(&self, action_hash: &Hash<Self::Api>, action: &Action<Self::Api>) {
        self.action_performed_event(
            action_hash,
            &action.target,
            &action.egld_value,
            &action.endpoint,
        );
        self.tx()
            .to(&action.target)
            .egld(&action.egld_value)
            .raw_call(action.endpoint.clone())
            .arguments_raw(action.arguments.clone().into())
            .sync_call();
    }

    fn action_hash(
        &self,
        target: &ManagedAddress,
        egld_value: &BigUint,
        endpoint: &ManagedBuffer,
        arguments: &ManagedVec<ManagedBuffer>,
    ) -> Hash<Self::Api> {
        let mut data = ManagedBuffer::new();
        data.append(target.as_managed_buffer());
        data.append(&egld_value.to_bytes_be_buffer());
        data.append(endpoint);
        for arg in arguments.iter() {
            data.append(&arg);
        }
        self.crypto().keccak256(data)
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getAction)]
    fn get_action(&self, action_hash: Hash<Self::Api>) -> Action<Self::Api> {
        require!(
            !self.actions(&action_hash).is_empty(),
            "Action not proposed"
        );
        self.actions(&action_hash).get()
    }

    #[view(isActionExecuted)]
    fn is_action_executed(&self, action_hash: Hash<Self::Api>) -> bool {
        require!(
            !self.actions(&action_hash).is_empty(),
            "Action not proposed"
        );
        self.actions(&action_hash).get().executed
    }

    #[view(getActionSigners)]
    fn get_action_signers(
        &self,
        action_hash: Hash<Self::Api>,
    ) -> MultiValueEncoded<ManagedAddress> {
        require!(
            !self.actions(&action_hash).is_empty(),
            "Action not proposed"
        );
        self.actions(&action_hash).get().signers.into()
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("actionProposed")]
    fn action_proposed_event(
        &self,
        #[indexed] action_hash: &Hash<Self::Api>,
        #[indexed] target: &ManagedAddress,
        #[indexed] proposer: &ManagedAddress,
    );

    #[event("actionVoted")]
    fn action_voted_event(
        &self,
        #[indexed] action_hash: &Hash<Self::Api>,
        #[indexed] voter: &ManagedAddress,
        total_weight: &BigUint,
    );

    #[event("actionPerformed")]
    fn action_performed_event(
        &self,
        #[indexed] action_hash: &Hash<Self::Api>,
        #[indexed] target: &ManagedAddress,
        #[indexed] egld_value: &BigUint,
        endpoint: &ManagedBuffer,
    );

    // ========================================================
    // STORAGE
    // ========================================================

    /// Actions are never deleted; they are retained as history.
    #[storage_mapper("actions")]
    fn actions(&self, action_hash: &Hash<Self::Api>) -> SingleValueMapper<Action<Self::Api>>;
}
