// tests/config_env.rs
//
// EngineConfig::load() resolution: file path from EFIS_CONFIG_PATH, fallback
// to defaults when the file is missing, and env overrides for the normalize
// flag and RNG seed. Serialized because they mutate process env.

use std::fs;
use std::io::Write as _;
use std::path::PathBuf;

use serial_test::serial;

use umoja_score_engine::config::{
    EngineConfig, ENV_CONFIG_PATH, ENV_NORMALIZE_WEIGHTS, ENV_RNG_SEED,
};

/// Create a unique temporary directory in std::env::temp_dir().
fn unique_tmp_dir() -> PathBuf {
    let mut dir = std::env::temp_dir();
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    dir.push(format!("efis_config_test_{}", nanos));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn clear_env() {
    std::env::remove_var(ENV_CONFIG_PATH);
    std::env::remove_var(ENV_NORMALIZE_WEIGHTS);
    std::env::remove_var(ENV_RNG_SEED);
}

#[test]
#[serial]
fn loads_weights_and_seed_from_file() {
    clear_env();
    let tmpdir = unique_tmp_dir();
    let path = tmpdir.join("efis.toml");

    {
        let mut f = fs::File::create(&path).unwrap();
        write!(
            f,
            "seed = 42\n\n[weights]\nhuman_capital = 0.40\nsocial_capital = 0.30\nreputation = 0.20\nbehavioral = 0.10\n"
        )
        .unwrap();
        f.sync_all().unwrap();
    }

    std::env::set_var(ENV_CONFIG_PATH, &path);
    let cfg = EngineConfig::load().expect("load from file");
    assert_eq!(cfg.seed, Some(42));
    assert!(!cfg.normalize_weights);
    assert!((cfg.weights.human_capital - 0.40).abs() < 1e-12);
    assert!((cfg.weights.behavioral - 0.10).abs() < 1e-12);

    clear_env();
    let _ = fs::remove_file(&path);
    let _ = fs::remove_dir_all(&tmpdir);
}

#[test]
#[serial]
fn missing_file_falls_back_to_defaults() {
    clear_env();
    let tmpdir = unique_tmp_dir();
    std::env::set_var(ENV_CONFIG_PATH, tmpdir.join("does_not_exist.toml"));

    let cfg = EngineConfig::load().expect("defaults on missing file");
    assert_eq!(cfg.seed, None);
    assert!(!cfg.normalize_weights);
    assert!((cfg.weights.sum() - 1.0).abs() < 1e-12);

    clear_env();
    let _ = fs::remove_dir_all(&tmpdir);
}

#[test]
#[serial]
fn env_overrides_beat_the_file() {
    clear_env();
    let tmpdir = unique_tmp_dir();
    let path = tmpdir.join("efis.toml");

    {
        let mut f = fs::File::create(&path).unwrap();
        write!(f, "normalize_weights = false\nseed = 1\n").unwrap();
        f.sync_all().unwrap();
    }

    std::env::set_var(ENV_CONFIG_PATH, &path);
    std::env::set_var(ENV_NORMALIZE_WEIGHTS, "1");
    std::env::set_var(ENV_RNG_SEED, "777");

    let cfg = EngineConfig::load().expect("load with overrides");
    assert!(cfg.normalize_weights);
    assert_eq!(cfg.seed, Some(777));

    clear_env();
    let _ = fs::remove_file(&path);
    let _ = fs::remove_dir_all(&tmpdir);
}

#[test]
#[serial]
fn garbage_seed_env_is_ignored_with_a_warning() {
    clear_env();
    let tmpdir = unique_tmp_dir();
    std::env::set_var(ENV_CONFIG_PATH, tmpdir.join("missing.toml"));
    std::env::set_var(ENV_RNG_SEED, "not-a-number");

    let cfg = EngineConfig::load().expect("load ignores bad seed");
    assert_eq!(cfg.seed, None);

    clear_env();
    let _ = fs::remove_dir_all(&tmpdir);
}

#[test]
#[serial]
fn negative_weight_in_file_is_rejected() {
    clear_env();
    let tmpdir = unique_tmp_dir();
    let path = tmpdir.join("efis.toml");

    {
        let mut f = fs::File::create(&path).unwrap();
        write!(
            f,
            "[weights]\nhuman_capital = -0.30\nsocial_capital = 0.25\nreputation = 0.25\nbehavioral = 0.20\n"
        )
        .unwrap();
        f.sync_all().unwrap();
    }

    std::env::set_var(ENV_CONFIG_PATH, &path);
    assert!(EngineConfig::load().is_err());

    clear_env();
    let _ = fs::remove_file(&path);
    let _ = fs::remove_dir_all(&tmpdir);
}
