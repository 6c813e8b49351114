//! Integration tests for command configuration

use espn_golf::{
    commands::{resolve_output_dir, resolve_season},
    core::settings::CURRENT_SEASON,
    EspnError, Season, OUTPUT_DIR_ENV_VAR, SEASON_ENV_VAR,
};
use std::path::PathBuf;

#[test]
fn test_resolve_season_from_option() {
    let result = resolve_season(Some(Season::new(2024)));
    assert_eq!(result.unwrap().as_u16(), 2024);
}

// One test owns SEASON_ENV_VAR so parallel tests never race on it.
#[test]
fn test_resolve_season_from_env() {
    std::env::remove_var(SEASON_ENV_VAR);
    assert_eq!(resolve_season(None).unwrap().as_u16(), CURRENT_SEASON);

    std::env::set_var(SEASON_ENV_VAR, "2025");
    assert_eq!(resolve_season(None).unwrap().as_u16(), 2025);

    // CLI value wins over env
    assert_eq!(
        resolve_season(Some(Season::new(2023))).unwrap().as_u16(),
        2023
    );

    std::env::set_var(SEASON_ENV_VAR, "next year");
    match resolve_season(None) {
        Err(EspnError::InvalidSeason(_)) => (),
        other => panic!("Expected InvalidSeason, got {other:?}"),
    }

    std::env::remove_var(SEASON_ENV_VAR);
}

#[test]
fn test_resolve_output_dir() {
    std::env::remove_var(OUTPUT_DIR_ENV_VAR);
    assert_eq!(resolve_output_dir(None), PathBuf::from("output"));

    std::env::set_var(OUTPUT_DIR_ENV_VAR, "/var/lib/golf");
    assert_eq!(resolve_output_dir(None), PathBuf::from("/var/lib/golf"));
    assert_eq!(
        resolve_output_dir(Some(PathBuf::from("here"))),
        PathBuf::from("here")
    );

    std::env::set_var(OUTPUT_DIR_ENV_VAR, "  ");
    assert_eq!(resolve_output_dir(None), PathBuf::from("output"));

    std::env::remove_var(OUTPUT_DIR_ENV_VAR);
}
