use anyhow::Result;
use hindsight_core::{error::HindsightError, EnvParams, NormStats, Policy};
use hindsight_policy_no_backend::{Actor, Checkpoint, Mat};
use std::collections::BTreeMap;
use tempdir::TempDir;

const DIM_OBS: usize = 5;
const DIM_GOAL: usize = 3;
const DIM_ACT: usize = 2;
const DIM_HIDDEN: usize = 8;

fn env_params() -> EnvParams {
    EnvParams {
        obs: DIM_OBS,
        goal: DIM_GOAL,
        action: DIM_ACT,
        action_max: 0.5,
    }
}

fn layer(params: &mut BTreeMap<String, Mat>, name: &str, n_in: usize, n_out: usize) {
    let w = (0..n_in * n_out)
        .map(|i| ((i % 7) as f32 - 3.0) * 0.3)
        .collect();
    params.insert(format!("{}.weight", name), Mat::new(w, [n_out, n_in]));
    params.insert(format!("{}.bias", name), Mat::new(vec![0.1; n_out], [n_out, 1]));
}

fn checkpoint() -> Checkpoint {
    let mut params = BTreeMap::new();
    layer(&mut params, "fc1", DIM_OBS + DIM_GOAL, DIM_HIDDEN);
    layer(&mut params, "fc2", DIM_HIDDEN, DIM_HIDDEN);
    layer(&mut params, "fc3", DIM_HIDDEN, DIM_HIDDEN);
    layer(&mut params, "action_out", DIM_HIDDEN, DIM_ACT);
    let stats = NormStats::new(
        vec![0.0; DIM_OBS],
        vec![1.0; DIM_OBS],
        vec![0.0; DIM_GOAL],
        vec![1.0; DIM_GOAL],
    )
    .unwrap();
    Checkpoint::new(stats, params)
}

#[test]
fn test_save_and_load() -> Result<()> {
    let dir = TempDir::new("checkpoint")?;
    let path = dir.path().join("actor.bincode");

    let checkpoint = checkpoint();
    checkpoint.save(&path)?;
    let loaded = Checkpoint::load(&path)?;

    assert_eq!(checkpoint, loaded);
    assert_eq!(loaded.norm_stats()?.obs_dim(), DIM_OBS);
    assert_eq!(loaded.norm_stats()?.goal_dim(), DIM_GOAL);
    Ok(())
}

#[test]
fn test_actor_output_is_bounded() -> Result<()> {
    let mut actor = Actor::from_state_dict(&checkpoint().params, &env_params())?;

    for k in 0..10 {
        let input: Vec<f32> = (0..DIM_OBS + DIM_GOAL)
            .map(|i| (i as f32 - k as f32) * 1.7)
            .collect();
        let act = actor.sample(&input);
        assert_eq!(act.len(), DIM_ACT);
        assert!(act.iter().all(|a| a.abs() <= 0.5));
    }
    Ok(())
}

#[test]
fn test_actor_is_deterministic() -> Result<()> {
    let actor = Actor::from_state_dict(&checkpoint().params, &env_params())?;
    let input = vec![0.3; DIM_OBS + DIM_GOAL];
    assert_eq!(actor.forward(&input), actor.forward(&input));
    Ok(())
}

#[test]
fn test_actor_dimension_mismatch() {
    let params = checkpoint().params;

    let mut env_params = env_params();
    env_params.goal = 2;
    assert!(Actor::from_state_dict(&params, &env_params).is_err());

    let mut env_params = self::env_params();
    env_params.action = 4;
    assert!(Actor::from_state_dict(&params, &env_params).is_err());
}

#[test]
fn test_missing_checkpoint() {
    let dir = TempDir::new("checkpoint").unwrap();
    let err = Checkpoint::load(dir.path().join("missing.bincode")).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<HindsightError>(),
        Some(HindsightError::Checkpoint(_))
    ));
}

#[test]
fn test_malformed_checkpoint() -> Result<()> {
    let dir = TempDir::new("checkpoint")?;
    let path = dir.path().join("broken.bincode");
    std::fs::write(&path, b"not a checkpoint")?;
    assert!(Checkpoint::load(&path).is_err());
    Ok(())
}

#[test]
fn test_truncated_parameter() -> Result<()> {
    let dir = TempDir::new("checkpoint")?;
    let path = dir.path().join("truncated.bincode");

    let mut checkpoint = checkpoint();
    checkpoint
        .params
        .get_mut("fc2.weight")
        .unwrap()
        .data
        .truncate(3);
    checkpoint.save(&path)?;

    let loaded = Checkpoint::load(&path)?;
    let actor = Actor::from_state_dict(&loaded.params, &env_params());
    assert!(matches!(actor, Err(HindsightError::Checkpoint(_))));
    Ok(())
}
