//! Property-based state machine test: random operation sequences applied to
//! two wrappers are checked against a plain-value model, and the cleanup
//! ledger must match the model's predicted releases exactly, in order.

use std::cell::RefCell;
use std::mem;

use grip::{ResourcePolicy, UniqueResource};
use proptest::prelude::*;

thread_local! {
    static CLOSED: RefCell<Vec<u64>> = const { RefCell::new(Vec::new()) };
}

struct Ledger;

impl ResourcePolicy for Ledger {
    type Raw = u64;
    const INVALID: u64 = 0;

    fn cleanup(raw: u64) {
        CLOSED.with(|c| c.borrow_mut().push(raw));
    }
}

type Held = UniqueResource<Ledger>;

fn closed() -> Vec<u64> {
    CLOSED.with(|c| c.borrow().clone())
}

fn clear_ledger() {
    CLOSED.with(|c| c.borrow_mut().clear());
}

#[derive(Debug, Clone)]
enum Operation {
    // Small value range so equal-value resets actually occur.
    ResetTo { second: bool, value: u64 },
    Reset { second: bool },
    Release { second: bool },
    Swap,
}

fn operation_strategy() -> impl Strategy<Value = Operation> {
    prop_oneof![
        (any::<bool>(), 0..5u64).prop_map(|(second, value)| Operation::ResetTo { second, value }),
        any::<bool>().prop_map(|second| Operation::Reset { second }),
        any::<bool>().prop_map(|second| Operation::Release { second }),
        Just(Operation::Swap),
    ]
}

/// Applies one op to the model, returning what it predicts gets cleaned.
fn model_reset_to(model: &mut u64, value: u64, expected: &mut Vec<u64>) {
    if *model != value {
        if *model != 0 {
            expected.push(*model);
        }
        *model = value;
    }
}

proptest! {
    #[test]
    fn test_wrapper_matches_model(ops in proptest::collection::vec(operation_strategy(), 1..64)) {
        clear_ledger();

        let mut first = Held::empty();
        let mut second = Held::empty();
        let mut first_model = 0u64;
        let mut second_model = 0u64;
        let mut expected: Vec<u64> = Vec::new();

        for op in ops {
            match op {
                Operation::ResetTo { second: true, value } => {
                    model_reset_to(&mut second_model, value, &mut expected);
                    second.reset_to(value);
                }
                Operation::ResetTo { second: false, value } => {
                    model_reset_to(&mut first_model, value, &mut expected);
                    first.reset_to(value);
                }
                Operation::Reset { second: true } => {
                    model_reset_to(&mut second_model, 0, &mut expected);
                    second.reset();
                }
                Operation::Reset { second: false } => {
                    model_reset_to(&mut first_model, 0, &mut expected);
                    first.reset();
                }
                Operation::Release { second: true } => {
                    prop_assert_eq!(second.release(), second_model);
                    second_model = 0;
                }
                Operation::Release { second: false } => {
                    prop_assert_eq!(first.release(), first_model);
                    first_model = 0;
                }
                Operation::Swap => {
                    first.swap(&mut second);
                    mem::swap(&mut first_model, &mut second_model);
                }
            }

            prop_assert_eq!(first.get(), first_model);
            prop_assert_eq!(second.get(), second_model);
            prop_assert_eq!(first.is_valid(), first_model != 0);
            prop_assert_eq!(second.is_valid(), second_model != 0);
        }

        drop(first);
        if first_model != 0 {
            expected.push(first_model);
        }
        drop(second);
        if second_model != 0 {
            expected.push(second_model);
        }

        prop_assert_eq!(closed(), expected);
    }
}
