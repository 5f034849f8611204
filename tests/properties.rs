use proptest::prelude::*;
use scripted_mock::Mock;

#[derive(Debug, Clone)]
enum Scripted {
    Value(i32),
    Error(String),
}

fn scripted() -> impl Strategy<Value = Scripted> {
    prop_oneof![
        any::<i32>().prop_map(Scripted::Value),
        "[a-z]{1,8}".prop_map(Scripted::Error),
    ]
}

const GENERAL: &str = "general";

proptest! {
    #[test]
    fn test_input_log_tracks_every_call(inputs in proptest::collection::vec(any::<u16>(), 0..64)) {
        let mut mock: Mock<u16, (), &str> = Mock::new(GENERAL);
        for input in &inputs {
            mock.record_input(*input);
        }

        prop_assert_eq!(mock.call_count(), inputs.len());
        for (i, input) in inputs.iter().enumerate() {
            prop_assert_eq!(mock.input_at(i), input);
        }
        if !inputs.is_empty() {
            prop_assert_eq!(mock.last_input(), mock.input_at(mock.call_count() - 1));
        }
        prop_assert_eq!(mock.all_inputs(), inputs);
    }

    #[test]
    fn test_fifo_order_then_general_error(outcomes in proptest::collection::vec(scripted(), 0..32)) {
        let mut mock: Mock<(), i32, String> = Mock::new(GENERAL.to_string());
        for outcome in &outcomes {
            match outcome {
                Scripted::Value(v) => mock.enqueue_value(*v),
                Scripted::Error(e) => mock.enqueue_error(e.clone()),
            }
        }

        for outcome in &outcomes {
            let expected = match outcome {
                Scripted::Value(v) => Ok(*v),
                Scripted::Error(e) => Err(e.clone()),
            };
            prop_assert_eq!(mock.fetch_next(), expected);
        }
        prop_assert_eq!(mock.fetch_next(), Err(GENERAL.to_string()));
    }

    #[test]
    fn test_positional_set_pads_with_general_error(
        prefill in 0usize..8,
        position in 0usize..16,
        value in any::<i32>(),
    ) {
        let mut mock: Mock<(), i32, String> = Mock::new(GENERAL.to_string());
        for i in 0..prefill {
            mock.enqueue_value(i as i32);
        }
        mock.set_value_at(position, value);

        prop_assert_eq!(mock.pending_outcomes(), prefill.max(position + 1));
        for i in 0..mock.pending_outcomes() {
            let result = mock.fetch_next();
            if i == position {
                prop_assert_eq!(result, Ok(value));
            } else if i < prefill {
                prop_assert_eq!(result, Ok(i as i32));
            } else {
                prop_assert_eq!(result, Err(GENERAL.to_string()));
            }
        }
        prop_assert!(mock.is_exhausted());
    }

    #[test]
    fn test_always_value_never_drains(queued in 0usize..16, fetches in 1usize..32) {
        let mut mock: Mock<(), usize, String> = Mock::new(GENERAL.to_string());
        for i in 0..queued {
            mock.enqueue_value(i);
        }
        mock.set_always_value(usize::MAX);

        for _ in 0..fetches {
            prop_assert_eq!(mock.fetch_next(), Ok(usize::MAX));
        }
        prop_assert_eq!(mock.pending_outcomes(), queued);
    }
}
