use soroban_fixed_point_math::SorobanFixedPoint;
use soroban_sdk::{
    contractimpl, panic_with_error, symbol_short, token, Address, Env, Map, String, Vec,
};

use crate::{
    errors::Errors,
    storage::{
        extend_instance_ttl, get_award_tiers, get_config, get_location_count, get_location_id,
        get_location_name, get_location_staker, get_score, set_award_tiers, set_config,
        set_location_count, set_location_id, set_location_name, set_location_staker, set_score,
    },
    types::{CupConfig, Score},
    Contract, ContractArgs, ContractClient, CupTrait, LocationRewardsClient, PermissionsClient,
    ROLE_GLOBAL_ADMIN, ROLE_SYSTEMS_ADMIN, TIER_DENOMINATOR,
};

#[contractimpl]
impl Contract {
    pub fn __constructor(
        env: Env,
        permissions: Address,
        token: Address,
        treasury: Address,
        data_view: Address,
        pass_oracle: Address,
        epoch_duration: u64,
    ) {
        if epoch_duration == 0 {
            panic_with_error!(&env, &Errors::DurationInvalid);
        }

        let now = env.ledger().timestamp();

        set_config(
            &env,
            &CupConfig {
                permissions,
                token,
                treasury,
                data_view,
                pass_oracle,
                epoch_duration,
                current_epoch: now,
                next_epoch: now + epoch_duration,
            },
        );

        extend_instance_ttl(&env);
    }
}

#[contractimpl]
impl CupTrait for Contract {
    fn add_location(env: Env, caller: Address, name: String, staker: Address) {
        caller.require_auth();
        require_role(&env, ROLE_GLOBAL_ADMIN, &caller);

        if get_location_id(&env, &name).is_some() {
            panic_with_error!(&env, &Errors::LocationExists);
        }

        // the rewards contract must already answer to this cup for this name
        let rewards = LocationRewardsClient::new(&env, &staker);

        if rewards.manager() != env.current_contract_address() || rewards.location() != name {
            panic_with_error!(&env, &Errors::StakerNotBound);
        }

        let id = get_location_count(&env);

        set_location_id(&env, &name, id);
        set_location_name(&env, id, &name);
        set_location_staker(&env, id, &staker);
        set_location_count(&env, id + 1);

        extend_instance_ttl(&env);

        env.events().publish(
            (symbol_short!("cup"), symbol_short!("location")),
            (name, staker, id),
        );
    }

    fn get_location_rewards_staker(env: Env, name: String) -> Option<Address> {
        let id = get_location_id(&env, &name)?;

        get_location_staker(&env, id)
    }

    fn location_count(env: Env) -> u32 {
        get_location_count(&env)
    }

    fn location_name(env: Env, id: u32) -> String {
        get_location_name(&env, id)
            .unwrap_or_else(|| panic_with_error!(&env, &Errors::LocationMissing))
    }

    fn report_location_scores(
        env: Env,
        caller: Address,
        epoch: u64,
        scores: Vec<u64>,
        locations: Vec<String>,
    ) {
        caller.require_auth();
        require_role(&env, ROLE_SYSTEMS_ADMIN, &caller);

        let config = get_config(&env);

        if epoch != config.current_epoch {
            panic_with_error!(&env, &Errors::EpochMismatch);
        }

        let count = get_location_count(&env);

        if scores.len() != count || locations.len() != count {
            panic_with_error!(&env, &Errors::ReportIncomplete);
        }

        let mut seen: Map<u32, bool> = Map::new(&env);
        let mut prev_score = 0u64;

        for i in 0..count {
            let name = locations.get_unchecked(i);
            let score = scores.get_unchecked(i);

            let id = get_location_id(&env, &name)
                .unwrap_or_else(|| panic_with_error!(&env, &Errors::LocationMissing));

            if seen.contains_key(id) {
                panic_with_error!(&env, &Errors::LocationDuplicated);
            }

            seen.set(id, true);

            if i > 0 && score >= prev_score {
                panic_with_error!(&env, &Errors::ScoresNotDescending);
            }

            prev_score = score;

            set_score(&env, epoch, id, &Score { score, order: i + 1 });
        }

        extend_instance_ttl(&env);

        env.events().publish(
            (symbol_short!("cup"), symbol_short!("report")),
            (epoch, count),
        );
    }

    fn get_location_score_and_order(env: Env, epoch: u64, location: String) -> (u64, u32) {
        match get_location_id(&env, &location) {
            Some(id) => match get_score(&env, epoch, id) {
                Some(score) => (score.score, score.order),
                None => (0, 0),
            },
            None => (0, 0),
        }
    }

    fn assign_award_tiers(env: Env, caller: Address, tiers: Vec<u32>) {
        caller.require_auth();
        require_role(&env, ROLE_SYSTEMS_ADMIN, &caller);

        if tiers.len() != get_location_count(&env) {
            panic_with_error!(&env, &Errors::TierCountMismatch);
        }

        let mut sum: i128 = 0;

        for tier in tiers.iter() {
            sum += tier as i128;
        }

        if sum != TIER_DENOMINATOR {
            panic_with_error!(&env, &Errors::TierSumInvalid);
        }

        // single write so a failed call never leaves a partial table
        set_award_tiers(&env, &tiers);

        extend_instance_ttl(&env);
    }

    fn distribute_rewards(env: Env, caller: Address) {
        caller.require_auth();
        require_role(&env, ROLE_SYSTEMS_ADMIN, &caller);

        let mut config = get_config(&env);
        let now = env.ledger().timestamp();

        if now < config.next_epoch {
            panic_with_error!(&env, &Errors::EpochNotOver);
        }

        let count = get_location_count(&env);

        if count == 0 {
            panic_with_error!(&env, &Errors::NothingToDistribute);
        }

        let tiers = get_award_tiers(&env);

        if tiers.len() != count {
            panic_with_error!(&env, &Errors::TierCountMismatch);
        }

        let client = token::Client::new(&env, &config.token);
        let cup = env.current_contract_address();

        let pullable = client
            .balance(&config.treasury)
            .min(client.allowance(&config.treasury, &cup));

        if pullable <= 0 {
            panic_with_error!(&env, &Errors::NothingToDistribute);
        }

        if client
            .try_transfer_from(&cup, &config.treasury, &cup, &pullable)
            .is_err()
        {
            panic_with_error!(&env, &Errors::PullFailed);
        }

        // the epoch already underway keeps its planned end when we're on time,
        // otherwise a fresh full period starts now
        let planned_end = config.next_epoch + config.epoch_duration;
        let duration = if planned_end > now {
            planned_end - now
        } else {
            config.epoch_duration
        };

        // prior-epoch truncation dust rides along with the fresh pull
        let balance = client.balance(&cup);

        if balance <= 0 {
            panic_with_error!(&env, &Errors::NothingToDistribute);
        }

        let mut fallback = false;

        for id in 0..count {
            let order = match get_score(&env, config.current_epoch, id) {
                Some(score) => score.order,
                None => 0,
            };

            let share = if order > 0 {
                if fallback {
                    panic_with_error!(&env, &Errors::LocationScoreMissing);
                }

                let tier = tiers.get_unchecked(order - 1) as i128;

                balance.fixed_mul_floor(&env, &tier, &TIER_DENOMINATOR)
            } else {
                if id > 0 && !fallback {
                    panic_with_error!(&env, &Errors::LocationScoreMissing);
                }

                fallback = true;

                balance / count as i128
            };

            if share > 0 {
                let staker = get_location_staker(&env, id)
                    .unwrap_or_else(|| panic_with_error!(&env, &Errors::LocationMissing));
                let rewards = LocationRewardsClient::new(&env, &staker);

                client.transfer(&cup, &staker, &share);
                rewards.set_reward_duration(&duration);
                rewards.notify_reward_amount(&share);
            }
        }

        config.current_epoch = config.next_epoch;
        config.next_epoch = now + duration;

        set_config(&env, &config);
        extend_instance_ttl(&env);

        env.events().publish(
            (symbol_short!("cup"), symbol_short!("dist")),
            (config.current_epoch, balance, duration),
        );
    }

    fn current_epoch(env: Env) -> u64 {
        get_config(&env).current_epoch
    }

    fn next_epoch(env: Env) -> u64 {
        get_config(&env).next_epoch
    }

    fn award_tiers(env: Env) -> Vec<u32> {
        get_award_tiers(&env)
    }
}

pub fn require_role(env: &Env, role: u32, caller: &Address) {
    let config = get_config(env);

    if !PermissionsClient::new(env, &config.permissions).has_role(&role, caller) {
        panic_with_error!(&env, &Errors::NotAuthorized);
    }
}
