use soroban_sdk::{
    contractimpl, panic_with_error, symbol_short, token, Address, Env, Vec,
};

use crate::{
    errors::Errors,
    storage::{
        extend_instance_ttl, get_allowance, get_checkpoints, get_permissions, get_pool_token,
        get_total_staked, set_allowance, set_checkpoints, set_permissions, set_pool_token,
        set_total_staked,
    },
    types::Checkpoint,
    Contract, ContractArgs, ContractClient, PermissionsClient, PoolTrait, ROLE_TRANSFER_ADMIN,
};

#[contractimpl]
impl Contract {
    pub fn __constructor(env: Env, permissions: Address, token: Address) {
        set_permissions(&env, &permissions);
        set_pool_token(&env, &token);

        extend_instance_ttl(&env);
    }
}

#[contractimpl]
impl PoolTrait for Contract {
    fn stake(env: Env, staker: Address, amount: i128) {
        staker.require_auth();

        stake_into(&env, &staker, &staker, amount);
    }

    fn stake_for(env: Env, funder: Address, staker: Address, amount: i128) {
        funder.require_auth();

        stake_into(&env, &funder, &staker, amount);
    }

    fn unstake(env: Env, staker: Address, amount: i128) {
        staker.require_auth();

        if amount <= 0 {
            panic_with_error!(&env, &Errors::AmountTooLow);
        }

        let new_balance = reduce_stake(&env, &staker, amount);
        let token = get_pool_token(&env);

        if token::Client::new(&env, &token)
            .try_transfer(&env.current_contract_address(), &staker, &amount)
            .is_err()
        {
            panic_with_error!(&env, &Errors::UnstakeFailed);
        }

        env.events().publish(
            (symbol_short!("pool"), symbol_short!("unstake")),
            (staker, amount, new_balance),
        );

        extend_instance_ttl(&env);
    }

    fn approve(env: Env, staker: Address, spender: Address, amount: i128) {
        staker.require_auth();

        if amount <= 0 {
            panic_with_error!(&env, &Errors::AmountTooLow);
        }

        // additive, not an absolute set
        let allowance = get_allowance(&env, &staker, &spender);
        set_allowance(&env, &staker, &spender, allowance + amount);

        extend_instance_ttl(&env);
    }

    fn spend(env: Env, spender: Address, staker: Address, receiver: Address, amount: i128) {
        spender.require_auth();

        if amount <= 0 {
            panic_with_error!(&env, &Errors::AmountTooLow);
        }

        if spender != staker {
            let allowance = get_allowance(&env, &staker, &spender);

            if amount > allowance {
                panic_with_error!(&env, &Errors::AllowanceExceeded);
            }

            set_allowance(&env, &staker, &spender, allowance - amount);
        }

        let new_balance = reduce_stake(&env, &staker, amount);
        let token = get_pool_token(&env);

        if token::Client::new(&env, &token)
            .try_transfer(&env.current_contract_address(), &receiver, &amount)
            .is_err()
        {
            panic_with_error!(&env, &Errors::SpendFailed);
        }

        // not an unstake event: spends are penalty-exempt downstream
        env.events().publish(
            (symbol_short!("pool"), symbol_short!("spend")),
            (staker, amount, new_balance),
        );

        extend_instance_ttl(&env);
    }

    fn checkpoint_timestamps(env: Env, staker: Address) -> Vec<u64> {
        let mut timestamps = Vec::new(&env);

        for checkpoint in get_checkpoints(&env, &staker).iter() {
            timestamps.push_back(checkpoint.timestamp);
        }

        timestamps
    }

    fn checkpoints(env: Env, staker: Address, timestamps: Vec<u64>) -> Vec<i128> {
        let history = get_checkpoints(&env, &staker);
        let mut balances = Vec::new(&env);

        for timestamp in timestamps.iter() {
            let mut balance = 0i128;

            // exact match only, no interpolation
            for checkpoint in history.iter() {
                if checkpoint.timestamp == timestamp {
                    balance = checkpoint.balance;
                    break;
                }
            }

            balances.push_back(balance);
        }

        balances
    }

    fn staked_balance(env: Env, staker: Address) -> i128 {
        latest_balance(&env, &staker)
    }

    fn spend_allowance(env: Env, staker: Address, spender: Address) -> i128 {
        get_allowance(&env, &staker, &spender)
    }

    fn total_staked(env: Env) -> i128 {
        get_total_staked(&env)
    }

    fn recover_token(env: Env, caller: Address, token: Address, amount: i128) {
        caller.require_auth();

        let permissions = get_permissions(&env);

        if !PermissionsClient::new(&env, &permissions).has_role(&ROLE_TRANSFER_ADMIN, &caller) {
            panic_with_error!(&env, &Errors::NotAuthorized);
        }

        if amount <= 0 {
            panic_with_error!(&env, &Errors::AmountTooLow);
        }

        let client = token::Client::new(&env, &token);

        // member stakes are never sweepable
        if token == get_pool_token(&env) {
            let free =
                client.balance(&env.current_contract_address()) - get_total_staked(&env);

            if amount > free {
                panic_with_error!(&env, &Errors::RecoverExceedsFree);
            }
        }

        client.transfer(&env.current_contract_address(), &caller, &amount);

        extend_instance_ttl(&env);
    }
}

fn stake_into(env: &Env, funder: &Address, staker: &Address, amount: i128) {
    if amount <= 0 {
        panic_with_error!(&env, &Errors::AmountTooLow);
    }

    let new_balance = latest_balance(env, staker) + amount;

    write_checkpoint(env, staker, new_balance);
    set_total_staked(env, get_total_staked(env) + amount);

    let token = get_pool_token(env);

    if token::Client::new(env, &token)
        .try_transfer(funder, &env.current_contract_address(), &amount)
        .is_err()
    {
        panic_with_error!(&env, &Errors::StakeFailed);
    }

    env.events().publish(
        (symbol_short!("pool"), symbol_short!("stake")),
        (staker.clone(), amount, new_balance),
    );

    extend_instance_ttl(env);
}

// Balance reduction shared by unstake and spend. Internal bookkeeping is
// finalized before any token leaves the contract.
fn reduce_stake(env: &Env, staker: &Address, amount: i128) -> i128 {
    let balance = latest_balance(env, staker);

    if amount > balance {
        panic_with_error!(&env, &Errors::InsufficientStake);
    }

    let new_balance = balance - amount;

    write_checkpoint(env, staker, new_balance);
    set_total_staked(env, get_total_staked(env) - amount);

    new_balance
}

fn latest_balance(env: &Env, staker: &Address) -> i128 {
    get_checkpoints(env, staker)
        .last()
        .map_or(0, |checkpoint| checkpoint.balance)
}

fn write_checkpoint(env: &Env, staker: &Address, balance: i128) {
    let mut history = get_checkpoints(env, staker);
    let timestamp = env.ledger().timestamp();

    // a second change within the same ledger second collapses into the open
    // checkpoint so timestamps stay strictly increasing
    match history.last() {
        Some(last) if last.timestamp == timestamp => {
            history.set(history.len() - 1, Checkpoint { timestamp, balance });
        }
        _ => history.push_back(Checkpoint { timestamp, balance }),
    }

    set_checkpoints(env, staker, &history);
}
