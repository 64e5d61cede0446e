use soroban_fixed_point_math::SorobanFixedPoint;
use soroban_sdk::{
    contractimpl, panic_with_error, symbol_short, token, Address, Env, String,
};

use crate::{
    errors::Errors,
    storage::{extend_instance_ttl, get_config, get_position, set_config, set_position},
    types::{Position, RewardsConfig},
    Contract, ContractArgs, ContractClient, HouseDataClient, PassOracleClient, RewardsTrait,
    DEFAULT_REWARD_DURATION, SCALAR_7,
};

#[contractimpl]
impl Contract {
    pub fn __constructor(
        env: Env,
        manager: Address,
        token: Address,
        location: String,
        data_view: Address,
        pass_oracle: Address,
    ) {
        set_config(
            &env,
            &RewardsConfig {
                manager,
                token,
                location,
                data_view,
                pass_oracle,
                duration: DEFAULT_REWARD_DURATION,
                rate: 0,
                period_finish: 0,
                last_update: 0,
                reward_per_token: 0,
                total_staked: 0,
                owed: 0,
            },
        );

        extend_instance_ttl(&env);
    }
}

#[contractimpl]
impl RewardsTrait for Contract {
    fn stake(env: Env, member: Address, amount: i128) {
        member.require_auth();

        if amount <= 0 {
            panic_with_error!(&env, &Errors::AmountTooLow);
        }

        let mut config = get_config(&env);

        if !HouseDataClient::new(&env, &config.data_view)
            .get_membership(&member, &config.location)
        {
            panic_with_error!(&env, &Errors::NotAMember);
        }

        if !PassOracleClient::new(&env, &config.pass_oracle).is_verified(&member) {
            panic_with_error!(&env, &Errors::NotVerified);
        }

        let mut position = get_position(&env, &member);
        settle(&env, &mut config, &mut position);

        position.staked += amount;
        config.total_staked += amount;

        set_position(&env, &member, &position);
        set_config(&env, &config);

        if token::Client::new(&env, &config.token)
            .try_transfer(&member, &env.current_contract_address(), &amount)
            .is_err()
        {
            panic_with_error!(&env, &Errors::StakeFailed);
        }

        env.events().publish(
            (symbol_short!("rewards"), symbol_short!("stake")),
            (member, amount),
        );

        extend_instance_ttl(&env);
    }

    fn withdraw(env: Env, member: Address, amount: i128) {
        member.require_auth();

        if amount <= 0 {
            panic_with_error!(&env, &Errors::AmountTooLow);
        }

        let mut config = get_config(&env);
        let mut position = get_position(&env, &member);
        settle(&env, &mut config, &mut position);

        if amount > position.staked {
            panic_with_error!(&env, &Errors::InsufficientBalance);
        }

        position.staked -= amount;
        config.total_staked -= amount;

        set_position(&env, &member, &position);
        set_config(&env, &config);

        if token::Client::new(&env, &config.token)
            .try_transfer(&env.current_contract_address(), &member, &amount)
            .is_err()
        {
            panic_with_error!(&env, &Errors::WithdrawFailed);
        }

        env.events().publish(
            (symbol_short!("rewards"), symbol_short!("withdraw")),
            (member, amount),
        );

        extend_instance_ttl(&env);
    }

    fn claim(env: Env, member: Address) -> i128 {
        member.require_auth();

        let mut config = get_config(&env);
        let mut position = get_position(&env, &member);
        settle(&env, &mut config, &mut position);

        let amount = position.accrued;
        position.accrued = 0;

        // per-member floors can lag the aggregate, never the other way around
        config.owed = (config.owed - amount).max(0);

        set_position(&env, &member, &position);
        set_config(&env, &config);

        if amount > 0 {
            if token::Client::new(&env, &config.token)
                .try_transfer(&env.current_contract_address(), &member, &amount)
                .is_err()
            {
                panic_with_error!(&env, &Errors::ClaimFailed);
            }

            env.events().publish(
                (symbol_short!("rewards"), symbol_short!("claim")),
                (member, amount),
            );
        }

        extend_instance_ttl(&env);

        amount
    }

    fn earned(env: Env, member: Address) -> i128 {
        let config = get_config(&env);
        let position = get_position(&env, &member);

        earned_amount(&env, &config, &position)
    }

    fn reward_per_token(env: Env) -> i128 {
        let config = get_config(&env);

        current_reward_per_token(&env, &config)
    }

    fn staked(env: Env, member: Address) -> i128 {
        get_position(&env, &member).staked
    }

    fn total_staked(env: Env) -> i128 {
        get_config(&env).total_staked
    }

    fn reward_rate(env: Env) -> i128 {
        get_config(&env).rate
    }

    fn period_finish(env: Env) -> u64 {
        get_config(&env).period_finish
    }

    fn manager(env: Env) -> Address {
        get_config(&env).manager
    }

    fn location(env: Env) -> String {
        get_config(&env).location
    }

    fn member_multiplier(env: Env, member: Address) -> u32 {
        let config = get_config(&env);

        HouseDataClient::new(&env, &config.data_view).get_multiplier(&member, &config.location)
    }

    fn set_reward_duration(env: Env, duration: u64) {
        let mut config = get_config(&env);

        config.manager.require_auth();

        if duration == 0 {
            panic_with_error!(&env, &Errors::DurationInvalid);
        }

        config.duration = duration;
        set_config(&env, &config);

        extend_instance_ttl(&env);
    }

    fn notify_reward_amount(env: Env, amount: i128) {
        let mut config = get_config(&env);

        config.manager.require_auth();

        if amount <= 0 {
            panic_with_error!(&env, &Errors::AmountTooLow);
        }

        settle_global(&env, &mut config);

        let now = env.ledger().timestamp();

        // an undistributed remainder of a running period blends into the new rate
        let leftover = if now >= config.period_finish {
            0
        } else {
            (config.period_finish - now) as i128 * config.rate
        };

        let rate = (amount * SCALAR_7 + leftover) / (config.duration as i128);

        // funding must already sit on the contract; staked balances and
        // unclaimed earnings don't count
        let balance =
            token::Client::new(&env, &config.token).balance(&env.current_contract_address());
        let provisioned = balance - config.total_staked - config.owed;

        if rate > provisioned.fixed_mul_floor(&env, &SCALAR_7, &(config.duration as i128)) {
            panic_with_error!(&env, &Errors::RewardTooHigh);
        }

        config.rate = rate;
        config.last_update = now;
        config.period_finish = now + config.duration;
        set_config(&env, &config);

        env.events().publish(
            (symbol_short!("rewards"), symbol_short!("fund")),
            (amount, config.duration),
        );

        extend_instance_ttl(&env);
    }

    fn recover_token(env: Env, token: Address, to: Address, amount: i128) {
        let config = get_config(&env);

        config.manager.require_auth();

        if amount <= 0 {
            panic_with_error!(&env, &Errors::AmountTooLow);
        }

        let client = token::Client::new(&env, &token);

        // member stakes and streamed-but-unclaimed rewards are never sweepable
        if token == config.token {
            let mut config = config.clone();
            settle_global(&env, &mut config);

            let free = client.balance(&env.current_contract_address())
                - config.total_staked
                - config.owed;

            if amount > free {
                panic_with_error!(&env, &Errors::RecoverExceedsFree);
            }
        }

        client.transfer(&env.current_contract_address(), &to, &amount);

        extend_instance_ttl(&env);
    }
}

fn applicable_time(env: &Env, config: &RewardsConfig) -> u64 {
    env.ledger().timestamp().min(config.period_finish)
}

fn current_reward_per_token(env: &Env, config: &RewardsConfig) -> i128 {
    if config.total_staked == 0 {
        return config.reward_per_token;
    }

    let elapsed = (applicable_time(env, config) - config.last_update) as i128;

    config.reward_per_token + elapsed.fixed_mul_floor(env, &config.rate, &config.total_staked)
}

fn earned_amount(env: &Env, config: &RewardsConfig, position: &Position) -> i128 {
    let reward_per_token = current_reward_per_token(env, config);

    position.accrued
        + position.staked.fixed_mul_floor(
            env,
            &(reward_per_token - position.paid_per_token),
            &SCALAR_7,
        )
}

// Snapshot the global accumulator and the member's share of it. Every
// state-changing interaction settles before it mutates.
fn settle(env: &Env, config: &mut RewardsConfig, position: &mut Position) {
    settle_global(env, config);

    position.accrued = position.accrued
        + position.staked.fixed_mul_floor(
            env,
            &(config.reward_per_token - position.paid_per_token),
            &SCALAR_7,
        );
    position.paid_per_token = config.reward_per_token;
}

fn settle_global(env: &Env, config: &mut RewardsConfig) {
    let reward_per_token = current_reward_per_token(env, config);

    // everything freshly streamed is now a liability towards the stakers
    config.owed += config.total_staked.fixed_mul_floor(
        env,
        &(reward_per_token - config.reward_per_token),
        &SCALAR_7,
    );
    config.reward_per_token = reward_per_token;
    config.last_update = applicable_time(env, config);
}
