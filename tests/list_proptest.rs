//! Property-based tests against a `Vec` model.

use livelist::{ArrayList, Cursor, Sequence};
use proptest::prelude::*;

// =============================================================================
// Test helpers
// =============================================================================

/// A structural edit, with positions as fractions of the current length.
#[derive(Clone, Debug)]
enum EditOp {
    Insert { pos_pct: f64, value: u8 },
    Remove { pos_pct: f64 },
    Set { pos_pct: f64, value: u8 },
}

fn arbitrary_edit_op() -> impl Strategy<Value = EditOp> {
    prop_oneof![
        (0.0..=1.0f64, any::<u8>()).prop_map(|(pos_pct, value)| EditOp::Insert { pos_pct, value }),
        (0.0..=1.0f64).prop_map(|pos_pct| EditOp::Remove { pos_pct }),
        (0.0..=1.0f64, any::<u8>()).prop_map(|(pos_pct, value)| EditOp::Set { pos_pct, value }),
    ]
}

fn scale(pct: f64, len: usize) -> usize {
    return ((pct * len as f64) as usize).min(len);
}

/// Apply `op` to both `seq` and `model`, keeping them in step.
fn apply_edit<S: Sequence<u8>>(seq: &mut S, model: &mut Vec<u8>, op: &EditOp) {
    let len = model.len();
    match op {
        EditOp::Insert { pos_pct, value } => {
            let pos = scale(*pos_pct, len);
            seq.insert(pos, *value).unwrap();
            model.insert(pos, *value);
        }
        EditOp::Remove { pos_pct } => {
            if len == 0 {
                return;
            }
            let pos = scale(*pos_pct, len - 1);
            assert_eq!(seq.remove(pos).unwrap(), model.remove(pos));
        }
        EditOp::Set { pos_pct, value } => {
            if len == 0 {
                return;
            }
            let pos = scale(*pos_pct, len - 1);
            assert_eq!(seq.set(pos, *value).unwrap(), model[pos]);
            model[pos] = *value;
        }
    }
}

// =============================================================================
// Store properties
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Random edits keep the list equal to the model.
    #[test]
    fn list_matches_model(ops in prop::collection::vec(arbitrary_edit_op(), 0..60)) {
        let mut list = ArrayList::new();
        let mut model = Vec::new();
        for op in &ops {
            apply_edit(&mut list, &mut model, op);
        }
        prop_assert_eq!(list.as_slice(), model.as_slice());
    }

    /// Every `get(i)` equals the i-th element of a forward cursor scan.
    #[test]
    fn get_matches_cursor_scan(values in prop::collection::vec(any::<u8>(), 0..40)) {
        let mut list: ArrayList<u8> = values.into_iter().collect();
        let mut scanned = Vec::new();
        {
            let mut c = list.cursor();
            while c.has_next() {
                scanned.push(*c.next().unwrap());
            }
        }
        prop_assert_eq!(scanned.len(), list.len());
        for (i, v) in scanned.iter().enumerate() {
            prop_assert_eq!(list.get(i), Ok(v));
        }
    }

    /// Removing during a forward scan visits exactly the surviving elements.
    #[test]
    fn remove_during_scan_matches_filter(
        values in prop::collection::vec(0u8..4, 0..40),
        victim in 0u8..4,
    ) {
        let mut list: ArrayList<u8> = values.iter().copied().collect();
        let expected: Vec<u8> = values.iter().copied().filter(|v| *v != victim).collect();
        let mut kept = Vec::new();
        {
            let mut c = list.iterator();
            while c.has_next() {
                let v = *c.next().unwrap();
                if v == victim {
                    c.remove().unwrap();
                } else {
                    kept.push(v);
                }
            }
        }
        prop_assert_eq!(&kept, &expected);
        prop_assert_eq!(list.as_slice(), expected.as_slice());
    }

    /// Rebuilding from `to_vec` gives an equal list with the same hash.
    #[test]
    fn to_vec_round_trip(values in prop::collection::vec(any::<u8>(), 0..40)) {
        let list: ArrayList<u8> = values.into_iter().collect();
        let mut rebuilt = ArrayList::new();
        for v in list.to_vec() {
            rebuilt.append(v).unwrap();
        }
        prop_assert!(rebuilt == list);
        prop_assert_eq!(rebuilt.hash_code(), list.hash_code());
    }

    /// A second `retain_all` with the same argument reports no change.
    #[test]
    fn retain_all_idempotent(
        values in prop::collection::vec(0u8..8, 0..40),
        keep in prop::collection::vec(0u8..8, 0..4),
    ) {
        let mut list: ArrayList<u8> = values.into_iter().collect();
        list.retain_all(&keep);
        let once = list.clone();
        prop_assert!(!list.retain_all(&keep));
        prop_assert_eq!(list, once);
    }
}

// =============================================================================
// Window properties
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// `view.get(i) == store.get(a + i)` for every index in the window.
    #[test]
    fn window_translates(
        values in prop::collection::vec(any::<u8>(), 0..40),
        a_pct in 0.0..=1.0f64,
        b_pct in 0.0..=1.0f64,
    ) {
        let mut list: ArrayList<u8> = values.iter().copied().collect();
        let a = scale(a_pct, values.len());
        let b = a + scale(b_pct, values.len() - a);
        let view = list.sub_list(a, b).unwrap();
        prop_assert_eq!(view.len(), b - a);
        for i in 0..view.len() {
            prop_assert_eq!(view.get(i), Ok(&values[a + i]));
        }
    }

    /// Edits through a window stay inside it and move the store by the same amount.
    #[test]
    fn window_edits_stay_inside(
        values in prop::collection::vec(any::<u8>(), 0..30),
        a_pct in 0.0..=1.0f64,
        b_pct in 0.0..=1.0f64,
        ops in prop::collection::vec(arbitrary_edit_op(), 0..30),
    ) {
        let mut list: ArrayList<u8> = values.iter().copied().collect();
        let a = scale(a_pct, values.len());
        let b = a + scale(b_pct, values.len() - a);
        let mut window_model = values[a..b].to_vec();
        {
            let mut view = list.sub_list(a, b).unwrap();
            for op in &ops {
                let before = view.len();
                apply_edit(&mut view, &mut window_model, op);
                let after = view.len();
                prop_assert!(after.abs_diff(before) <= 1);
            }
            prop_assert_eq!(view.to_vec(), window_model.clone());
        }
        let mut expected = values[..a].to_vec();
        expected.extend_from_slice(&window_model);
        expected.extend_from_slice(&values[b..]);
        prop_assert_eq!(list.as_slice(), expected.as_slice());
    }

    /// A cursor over a window inserting after every element doubles only the window.
    #[test]
    fn window_cursor_add_stays_inside(
        values in prop::collection::vec(any::<u8>(), 0..20),
        a_pct in 0.0..=1.0f64,
        b_pct in 0.0..=1.0f64,
    ) {
        let mut list: ArrayList<u8> = values.iter().copied().collect();
        let a = scale(a_pct, values.len());
        let b = a + scale(b_pct, values.len() - a);
        {
            let mut view = list.sub_list(a, b).unwrap();
            {
                let mut c = view.cursor();
                while c.has_next() {
                    let v = *c.next().unwrap();
                    c.add(v).unwrap();
                }
            }
            prop_assert_eq!(view.len(), 2 * (b - a));
        }
        let mut expected = values[..a].to_vec();
        for v in &values[a..b] {
            expected.push(*v);
            expected.push(*v);
        }
        expected.extend_from_slice(&values[b..]);
        prop_assert_eq!(list.as_slice(), expected.as_slice());
    }
}
