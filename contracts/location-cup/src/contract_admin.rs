use soroban_sdk::{contractimpl, panic_with_error, token, Address, Env, String};

use crate::{
    contract_cup::require_role,
    errors::Errors,
    storage::{extend_instance_ttl, get_config, get_location_id, get_location_staker, set_config},
    AdminTrait, Contract, ContractArgs, ContractClient, LocationRewardsClient, ROLE_GLOBAL_ADMIN,
    ROLE_TRANSFER_ADMIN,
};

#[contractimpl]
impl AdminTrait for Contract {
    fn set_epoch_duration(env: Env, caller: Address, duration: u64) {
        caller.require_auth();
        require_role(&env, ROLE_GLOBAL_ADMIN, &caller);

        if duration == 0 {
            panic_with_error!(&env, &Errors::DurationInvalid);
        }

        let mut config = get_config(&env);

        // takes effect when the next epoch is scheduled, never mid-epoch
        config.epoch_duration = duration;

        set_config(&env, &config);
        extend_instance_ttl(&env);
    }

    fn set_treasury(env: Env, caller: Address, treasury: Address) {
        caller.require_auth();
        require_role(&env, ROLE_GLOBAL_ADMIN, &caller);

        let mut config = get_config(&env);

        config.treasury = treasury;

        set_config(&env, &config);
        extend_instance_ttl(&env);
    }

    fn set_data_view(env: Env, caller: Address, data_view: Address) {
        caller.require_auth();
        require_role(&env, ROLE_GLOBAL_ADMIN, &caller);

        let mut config = get_config(&env);

        config.data_view = data_view;

        set_config(&env, &config);
        extend_instance_ttl(&env);
    }

    fn treasury(env: Env) -> Address {
        get_config(&env).treasury
    }

    fn data_view(env: Env) -> Address {
        get_config(&env).data_view
    }

    fn recover_token(env: Env, caller: Address, token: Address, amount: i128) {
        caller.require_auth();
        require_role(&env, ROLE_TRANSFER_ADMIN, &caller);

        if amount <= 0 {
            panic_with_error!(&env, &Errors::AmountTooLow);
        }

        token::Client::new(&env, &token).transfer(
            &env.current_contract_address(),
            &caller,
            &amount,
        );

        extend_instance_ttl(&env);
    }

    fn recover_token_from_location(
        env: Env,
        caller: Address,
        location: String,
        token: Address,
        amount: i128,
    ) {
        caller.require_auth();
        require_role(&env, ROLE_TRANSFER_ADMIN, &caller);

        if amount <= 0 {
            panic_with_error!(&env, &Errors::AmountTooLow);
        }

        let id = get_location_id(&env, &location)
            .unwrap_or_else(|| panic_with_error!(&env, &Errors::LocationMissing));
        let staker = get_location_staker(&env, id)
            .unwrap_or_else(|| panic_with_error!(&env, &Errors::LocationMissing));

        LocationRewardsClient::new(&env, &staker).recover_token(&token, &caller, &amount);

        extend_instance_ttl(&env);
    }
}
