//! Randomised edit sequences checked against a plain `String` model.

use piece_buffer::{Piece, PieceTable};
use proptest::prelude::*;

#[derive(Clone, Debug)]
enum Op {
    Insert { at: usize, text: String },
    Remove { at: usize, length: isize },
    Replace { at: usize, length: usize, text: String },
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (any::<usize>(), "[a-z ]{0,6}").prop_map(|(at, text)| Op::Insert { at, text }),
        (any::<usize>(), -8isize..8).prop_map(|(at, length)| Op::Remove { at, length }),
        (any::<usize>(), 0usize..5, "[A-Z]{0,3}")
            .prop_map(|(at, length, text)| Op::Replace { at, length, text }),
    ]
}

/// Applies `op` to both the table and the model, with positions folded into
/// the current document. Returns whether the document changed.
fn apply(table: &mut PieceTable, model: &mut String, op: &Op) -> bool {
    let len = model.len();

    match op {
        Op::Insert { at, text } => {
            let at = at % (len + 1);

            table.insert(at, text).unwrap();
            model.insert_str(at, text);

            !text.is_empty()
        }
        Op::Remove { at, length } => {
            let at = at % (len + 1);
            let (start, count) = if *length < 0 {
                let back = length.unsigned_abs().min(at);

                table.remove(at, -(back as isize)).unwrap();

                (at - back, back)
            } else {
                let count = length.unsigned_abs().min(len - at);

                table.remove(at, count as isize).unwrap();

                (at, count)
            };

            model.replace_range(start..start + count, "");

            count > 0
        }
        Op::Replace { at, length, text } => {
            let at = at % (len + 1);
            let length = (*length).min(len - at);

            table.replace(at, length, text).unwrap();
            model.replace_range(at..at + length, text);

            length > 0 || !text.is_empty()
        }
    }
}

proptest! {
    #[test]
    fn property_reconstruction_matches_string_model(
        initial in "[a-z]{0,12}",
        ops in proptest::collection::vec(op_strategy(), 0..40),
    ) {
        let mut table = PieceTable::new(&initial);
        let mut model = initial.clone();

        for op in &ops {
            apply(&mut table, &mut model, op);

            prop_assert_eq!(table.get_text(), model.clone());
            prop_assert_eq!(table.get_len(), model.len());
            prop_assert_eq!(
                table.pieces().iter().map(Piece::len).sum::<usize>(),
                table.get_len()
            );
            prop_assert!(table.pieces().iter().all(|piece| !piece.is_empty()));
        }
    }

    #[test]
    fn property_undo_walks_back_through_every_state(
        initial in "[a-z]{0,12}",
        ops in proptest::collection::vec(op_strategy(), 0..40),
    ) {
        let mut table = PieceTable::new(&initial);
        let mut model = initial.clone();
        let mut states = vec![initial.clone()];

        for op in &ops {
            if apply(&mut table, &mut model, op) {
                states.push(model.clone());
            }
        }

        prop_assert_eq!(table.history().len(), states.len());

        for expected in states.iter().rev().skip(1) {
            prop_assert!(table.undo_history());
            prop_assert_eq!(table.get_text(), expected.clone());
            prop_assert_eq!(table.get_len(), expected.len());
        }

        prop_assert!(!table.undo_history());

        for expected in states.iter().skip(1) {
            prop_assert!(table.redo_history());
            prop_assert_eq!(table.get_text(), expected.clone());
        }

        prop_assert!(!table.redo_history());
    }

    #[test]
    fn property_bounded_read_matches_substring(
        initial in "[a-z]{0,12}",
        ops in proptest::collection::vec(op_strategy(), 0..20),
        start in any::<usize>(),
        length in any::<usize>(),
    ) {
        let mut table = PieceTable::new(&initial);
        let mut model = initial.clone();

        for op in &ops {
            apply(&mut table, &mut model, op);
        }

        let start = start % (model.len() + 1);
        let length = length % (model.len() - start + 1);

        prop_assert_eq!(
            table.get_text_at(start, length).unwrap(),
            model[start..start + length].to_string()
        );
    }
}
