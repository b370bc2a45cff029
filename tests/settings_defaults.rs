mod common;
use common::*;

use scsbridge::solver::*;

#[test]
fn test_native_defaults_match_builder() {
    let scs = Scs::new(mock_api());
    let native = scs.default_settings().unwrap();
    assert_eq!(native, ScsSettings::default());
    assert_eq!(native, ScsSettingsBuilder::default().build().unwrap());
}

#[test]
fn test_set_default_settings_idempotent() {
    let scs = Scs::new(mock_api());

    let mut settings = ScsSettings {
        max_iters: 5,
        verbose: false,
        write_data_filename: Some("stale.bin".to_string()),
        ..ScsSettings::default()
    };
    scs.set_default_settings(&mut settings).unwrap();
    let first = settings.clone();
    scs.set_default_settings(&mut settings).unwrap();

    assert_eq!(first, settings);
    assert_eq!(settings.max_iters, 100_000);
    assert!(settings.verbose);
    assert!(settings.write_data_filename.is_none());
    assert!(settings.eps_abs > 0.);
}

#[test]
fn test_default_settings_take_no_pins() {
    let mut scs = Scs::new(mock_api());
    let mut settings = ScsSettings::default();
    scs.set_default_settings(&mut settings).unwrap();
    assert_eq!(scs.pin_ledger().acquired(), 0);

    // the record is forwarded unmodified to the solver
    reset_mock(1);
    let (data, cone) = basic_socp();
    settings.verbose = false;
    settings.alpha = 1.8;
    scs.solve(&data, &cone, &settings).unwrap();
    assert_eq!(mock_state().seen.unwrap().settings, Some(settings));
}

#[test]
fn test_settings_validation_is_opt_in() {
    // out of range settings are forwarded as given
    reset_mock(1);
    let (data, cone) = basic_socp();
    let settings = ScsSettings {
        alpha: 3.0,
        ..quiet_settings()
    };
    assert!(matches!(
        settings.validate(),
        Err(SettingsError::BadFieldValue("alpha"))
    ));

    let mut scs = Scs::new(mock_api());
    assert!(scs.solve(&data, &cone, &settings).is_ok());
    assert_eq!(mock_state().seen.unwrap().settings.unwrap().alpha, 3.0);
}
