//! Transition-table tests for the state engine.

use radix_core::reduce;
use radix_model::{Action, ConversionState, SignMode};

fn signed_state() -> ConversionState {
    ConversionState {
        value: "1010".to_string(),
        is_value_dirty: true,
        input_radix: Some(2),
        output_radix: Some(10),
        signed_mode: true,
        input_sign_mode: Some(SignMode::TwosComplement),
        output_sign_mode: Some(SignMode::OnesComplement),
    }
}

#[test]
fn set_value_marks_dirty() {
    let state = ConversionState::default();
    let next = reduce(
        &state,
        Action::SetValue {
            value: "101".to_string(),
        },
    );

    assert_eq!(next.value, "101");
    assert!(next.is_value_dirty);
    // Everything else is untouched.
    assert_eq!(next.input_radix, state.input_radix);
    assert_eq!(next.output_radix, state.output_radix);
}

#[test]
fn set_value_is_idempotent() {
    let state = ConversionState::default();
    let once = reduce(
        &state,
        Action::SetValue {
            value: "101".to_string(),
        },
    );
    let twice = reduce(
        &once,
        Action::SetValue {
            value: "101".to_string(),
        },
    );

    assert_eq!(once, twice);
}

#[test]
fn set_input_radix_resets_sign_modes() {
    let state = signed_state();
    let next = reduce(
        &state,
        Action::SetInputRadix {
            input_radix: Some(2),
        },
    );

    assert_eq!(next.input_sign_mode, None);
    assert_eq!(next.output_sign_mode, None);
}

#[test]
fn signed_input_radix_forces_complementary_output() {
    let state = signed_state();

    let next = reduce(
        &state,
        Action::SetInputRadix {
            input_radix: Some(10),
        },
    );
    assert_eq!(next.output_radix, Some(2));

    let next = reduce(
        &next,
        Action::SetInputRadix {
            input_radix: Some(2),
        },
    );
    assert_eq!(next.output_radix, Some(10));
}

#[test]
fn signed_output_radix_forces_complementary_input() {
    let state = signed_state();

    let next = reduce(
        &state,
        Action::SetOutputRadix {
            output_radix: Some(2),
        },
    );
    assert_eq!(next.input_radix, Some(10));
}

#[test]
fn unsigned_radix_changes_leave_the_pair_alone() {
    let state = ConversionState::default();
    let next = reduce(
        &state,
        Action::SetInputRadix {
            input_radix: Some(7),
        },
    );

    assert_eq!(next.input_radix, Some(7));
    assert_eq!(next.output_radix, Some(16));
}

#[test]
fn enabling_signed_mode_snaps_radices_into_allowed_set() {
    let state = ConversionState {
        input_radix: Some(7),
        output_radix: Some(16),
        ..ConversionState::default()
    };

    let next = reduce(&state, Action::SetSignedMode { signed_mode: true });
    assert!(next.signed_mode);
    assert_eq!(next.input_radix, Some(2));
    assert_eq!(next.output_radix, Some(10));
}

#[test]
fn enabling_signed_mode_forces_distinct_radices() {
    // Both already allowed but equal: the pair is reset to (2, 10).
    let state = ConversionState {
        input_radix: Some(10),
        output_radix: Some(10),
        ..ConversionState::default()
    };

    let next = reduce(&state, Action::SetSignedMode { signed_mode: true });
    assert_eq!(next.input_radix, Some(2));
    assert_eq!(next.output_radix, Some(10));
}

#[test]
fn enabling_signed_mode_keeps_an_allowed_pair() {
    let state = ConversionState {
        input_radix: Some(10),
        output_radix: Some(2),
        ..ConversionState::default()
    };

    let next = reduce(&state, Action::SetSignedMode { signed_mode: true });
    assert_eq!(next.input_radix, Some(10));
    assert_eq!(next.output_radix, Some(2));
}

#[test]
fn disabling_signed_mode_only_resets_sign_modes() {
    let state = signed_state();
    let next = reduce(&state, Action::SetSignedMode { signed_mode: false });

    assert!(!next.signed_mode);
    assert_eq!(next.input_sign_mode, None);
    assert_eq!(next.output_sign_mode, None);
    assert_eq!(next.input_radix, Some(2));
    assert_eq!(next.output_radix, Some(10));
}

#[test]
fn sign_mode_choices_touch_nothing_else() {
    let state = signed_state();
    let next = reduce(
        &state,
        Action::SetInputSignMode {
            input_sign_mode: Some(SignMode::SignAndMagnitude),
        },
    );

    assert_eq!(next.input_sign_mode, Some(SignMode::SignAndMagnitude));
    assert_eq!(next.output_sign_mode, state.output_sign_mode);
    assert_eq!(next.input_radix, state.input_radix);
    assert_eq!(next.value, state.value);
}

#[test]
fn swap_exchanges_radices_and_adopts_output_value() {
    let state = ConversionState {
        value: "11111111".to_string(),
        is_value_dirty: true,
        input_radix: Some(2),
        output_radix: Some(16),
        ..ConversionState::default()
    };

    let next = reduce(
        &state,
        Action::Swap {
            output_value: Some("FF".to_string()),
        },
    );

    assert_eq!(next.value, "FF");
    assert_eq!(next.input_radix, Some(16));
    assert_eq!(next.output_radix, Some(2));
}

#[test]
fn swap_without_output_value_keeps_current_value() {
    let state = ConversionState {
        value: "1010".to_string(),
        ..ConversionState::default()
    };

    let next = reduce(&state, Action::Swap { output_value: None });
    assert_eq!(next.value, "1010");
    assert_eq!(next.input_radix, Some(16));
    assert_eq!(next.output_radix, Some(2));
}

#[test]
fn swap_exchanges_sign_modes_under_signed_mode() {
    let state = signed_state();
    let next = reduce(
        &state,
        Action::Swap {
            output_value: Some("-6".to_string()),
        },
    );

    assert_eq!(next.input_radix, Some(10));
    assert_eq!(next.output_radix, Some(2));
    assert_eq!(next.input_sign_mode, Some(SignMode::OnesComplement));
    assert_eq!(next.output_sign_mode, Some(SignMode::TwosComplement));
}

#[test]
fn reduce_never_mutates_its_input() {
    let state = signed_state();
    let before = state.clone();
    let _ = reduce(&state, Action::SetSignedMode { signed_mode: false });
    assert_eq!(state, before);
}
