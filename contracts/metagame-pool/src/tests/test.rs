#![cfg(test)]

extern crate std;

use crate::{
    errors::Errors,
    tests::utils::{forward, MockPermissions, MockPermissionsClient},
    Contract, ContractClient, ROLE_TRANSFER_ADMIN,
};
use soroban_sdk::{
    symbol_short,
    testutils::{Address as _, Events},
    token, vec, Address, Env, IntoVal, Vec,
};

struct PoolTest<'a> {
    env: Env,
    admin: Address,
    pool_address: Address,
    pool: ContractClient<'a>,
    token: token::Client<'a>,
    token_admin: token::StellarAssetClient<'a>,
}

fn setup() -> PoolTest<'static> {
    let env = Env::default();

    env.mock_all_auths();

    let admin: Address = Address::generate(&env);
    let asset_sac = env.register_stellar_asset_contract_v2(admin.clone());
    let token = token::Client::new(&env, &asset_sac.address());
    let token_admin = token::StellarAssetClient::new(&env, &asset_sac.address());

    let permissions = env.register(MockPermissions, ());
    let permissions_client = MockPermissionsClient::new(&env, &permissions);
    permissions_client.grant_role(&ROLE_TRANSFER_ADMIN, &admin);

    let pool_address = env.register(Contract, (&permissions, &asset_sac.address()));
    let pool = ContractClient::new(&env, &pool_address);

    PoolTest {
        env,
        admin,
        pool_address,
        pool,
        token,
        token_admin,
    }
}

#[test]
fn test_stake_unstake_history() {
    let PoolTest {
        env,
        pool_address,
        pool,
        token,
        token_admin,
        ..
    } = setup();

    let staker: Address = Address::generate(&env);
    token_admin.mint(&staker, &1_000);

    forward(&env, 10);
    pool.stake(&staker, &100);

    assert_eq!(pool.staked_balance(&staker), 100);
    assert_eq!(pool.total_staked(), 100);
    assert_eq!(token.balance(&staker), 900);
    assert_eq!(token.balance(&pool_address), 100);

    forward(&env, 10);
    pool.stake(&staker, &50);

    forward(&env, 10);
    pool.unstake(&staker, &30);

    assert_eq!(pool.staked_balance(&staker), 120);
    assert_eq!(pool.total_staked(), 120);
    assert_eq!(token.balance(&staker), 880);

    let timestamps = pool.checkpoint_timestamps(&staker);
    assert_eq!(timestamps, vec![&env, 10u64, 20u64, 30u64]);

    // round-trip: the full history comes back in original order
    let balances = pool.checkpoints(&staker, &timestamps);
    assert_eq!(balances, vec![&env, 100i128, 150i128, 120i128]);

    // no exact match, no interpolation
    let missing: Vec<u64> = vec![&env, 15u64, 20u64];
    assert_eq!(pool.checkpoints(&staker, &missing), vec![&env, 0i128, 150i128]);
}

#[test]
fn test_same_second_checkpoints_collapse() {
    let PoolTest {
        env, pool, token_admin, ..
    } = setup();

    let staker: Address = Address::generate(&env);
    token_admin.mint(&staker, &1_000);

    forward(&env, 5);
    pool.stake(&staker, &100);
    pool.stake(&staker, &25);

    assert_eq!(pool.checkpoint_timestamps(&staker), vec![&env, 5u64]);
    assert_eq!(pool.staked_balance(&staker), 125);
}

#[test]
fn test_unstake_exceeding_balance() {
    let PoolTest {
        env, pool, token_admin, ..
    } = setup();

    let staker: Address = Address::generate(&env);
    token_admin.mint(&staker, &1_000);

    pool.stake(&staker, &100);

    let err = pool.try_unstake(&staker, &101).unwrap_err().unwrap();
    assert_eq!(err, Errors::InsufficientStake.into());

    let err = pool.try_unstake(&staker, &0).unwrap_err().unwrap();
    assert_eq!(err, Errors::AmountTooLow.into());
}

#[test]
fn test_stake_for() {
    let PoolTest {
        env, pool, token, token_admin, ..
    } = setup();

    let funder: Address = Address::generate(&env);
    let staker: Address = Address::generate(&env);
    token_admin.mint(&funder, &500);

    pool.stake_for(&funder, &staker, &200);

    assert_eq!(token.balance(&funder), 300);
    assert_eq!(pool.staked_balance(&staker), 200);
    assert_eq!(pool.staked_balance(&funder), 0);
}

#[test]
fn test_spend_with_allowance() {
    let PoolTest {
        env,
        pool_address,
        pool,
        token,
        token_admin,
        ..
    } = setup();

    let staker: Address = Address::generate(&env);
    let spender: Address = Address::generate(&env);
    let receiver: Address = Address::generate(&env);
    token_admin.mint(&staker, &1_000);

    pool.stake(&staker, &100);
    pool.approve(&staker, &spender, &50);

    pool.spend(&spender, &staker, &receiver, &40);

    // capture before any other invocation, only the latest call's events survive
    let events = env.events().all();

    assert_eq!(pool.spend_allowance(&staker, &spender), 10);
    assert_eq!(pool.staked_balance(&staker), 60);
    assert_eq!(token.balance(&receiver), 40);

    // a spend is logged as a spend, never as an unstake
    assert_eq!(
        vec![&env, events.last().unwrap()],
        vec![
            &env,
            (
                pool_address.clone(),
                (symbol_short!("pool"), symbol_short!("spend")).into_val(&env),
                (staker.clone(), 40i128, 60i128).into_val(&env),
            ),
        ]
    );

    // remaining allowance no longer covers this
    let err = pool
        .try_spend(&spender, &staker, &receiver, &11)
        .unwrap_err()
        .unwrap();
    assert_eq!(err, Errors::AllowanceExceeded.into());
}

#[test]
fn test_approve_is_additive() {
    let PoolTest {
        env, pool, token_admin, ..
    } = setup();

    let staker: Address = Address::generate(&env);
    let spender: Address = Address::generate(&env);
    token_admin.mint(&staker, &1_000);

    pool.stake(&staker, &100);
    pool.approve(&staker, &spender, &30);
    pool.approve(&staker, &spender, &30);

    assert_eq!(pool.spend_allowance(&staker, &spender), 60);
}

#[test]
fn test_spend_by_staker_needs_no_allowance() {
    let PoolTest {
        env, pool, token, token_admin, ..
    } = setup();

    let staker: Address = Address::generate(&env);
    let receiver: Address = Address::generate(&env);
    token_admin.mint(&staker, &1_000);

    pool.stake(&staker, &100);
    pool.spend(&staker, &staker, &receiver, &70);

    assert_eq!(pool.staked_balance(&staker), 30);
    assert_eq!(token.balance(&receiver), 70);
}

#[test]
fn test_recover_token_caps_at_free_balance() {
    let PoolTest {
        env,
        admin,
        pool_address,
        pool,
        token,
        token_admin,
        ..
    } = setup();

    let staker: Address = Address::generate(&env);
    token_admin.mint(&staker, &1_000);
    pool.stake(&staker, &100);

    // stray tokens sent directly to the pool
    token_admin.mint(&pool_address, &25);

    let err = pool
        .try_recover_token(&admin, &token.address, &26)
        .unwrap_err()
        .unwrap();
    assert_eq!(err, Errors::RecoverExceedsFree.into());

    pool.recover_token(&admin, &token.address, &25);
    assert_eq!(token.balance(&pool_address), 100);

    let outsider: Address = Address::generate(&env);
    let err = pool
        .try_recover_token(&outsider, &token.address, &1)
        .unwrap_err()
        .unwrap();
    assert_eq!(err, Errors::NotAuthorized.into());
}
