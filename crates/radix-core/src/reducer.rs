//! The state transition engine.

use tracing::debug;

use radix_model::{Action, ConversionState, signed_radices};

/// Apply an action to the state, returning the next state.
///
/// Pure whole-state replacement: the input state is never mutated, and
/// every cross-field invariant lives here rather than being checked
/// after the fact. In particular:
///
/// - changing either radix or the signed flag clears both sign modes;
/// - under signed mode, setting one radix to 2 forces the other to 10
///   and vice versa;
/// - enabling signed mode snaps both radices into the allowed set
///   ({2, 10}, in preset order) and forces them distinct.
pub fn reduce(state: &ConversionState, action: Action) -> ConversionState {
    debug!(?action, "apply action");
    let mut next = state.clone();

    match action {
        Action::SetValue { value } => {
            next.value = value;
            next.is_value_dirty = true;
        }
        Action::SetInputRadix { input_radix } => {
            next.input_radix = input_radix;

            next.input_sign_mode = None;
            next.output_sign_mode = None;

            if next.signed_mode {
                if next.input_radix == Some(2) {
                    next.output_radix = Some(10);
                }
                if next.input_radix == Some(10) {
                    next.output_radix = Some(2);
                }
            }
        }
        Action::SetOutputRadix { output_radix } => {
            next.output_radix = output_radix;

            next.input_sign_mode = None;
            next.output_sign_mode = None;

            if next.signed_mode {
                if next.output_radix == Some(2) {
                    next.input_radix = Some(10);
                }
                if next.output_radix == Some(10) {
                    next.input_radix = Some(2);
                }
            }
        }
        Action::SetSignedMode { signed_mode } => {
            next.signed_mode = signed_mode;

            next.input_sign_mode = None;
            next.output_sign_mode = None;

            if signed_mode {
                let allowed = signed_radices();

                if !next.input_radix.is_some_and(|radix| allowed.contains(&radix)) {
                    next.input_radix = allowed.first().copied();
                }

                if !next.output_radix.is_some_and(|radix| allowed.contains(&radix)) {
                    next.output_radix = allowed.first().copied();
                }

                if next.input_radix == next.output_radix {
                    next.input_radix = allowed.first().copied();
                    next.output_radix = allowed.get(1).copied();
                }
            }
        }
        Action::SetInputSignMode { input_sign_mode } => {
            next.input_sign_mode = input_sign_mode;
        }
        Action::SetOutputSignMode { output_sign_mode } => {
            next.output_sign_mode = output_sign_mode;
        }
        Action::Swap { output_value } => {
            std::mem::swap(&mut next.input_radix, &mut next.output_radix);

            // The caller hands over the previously computed output string
            // so it becomes the new input value.
            if let Some(output_value) = output_value {
                next.value = output_value;
            }

            if next.signed_mode {
                std::mem::swap(&mut next.input_sign_mode, &mut next.output_sign_mode);
            }
        }
    }

    next
}
