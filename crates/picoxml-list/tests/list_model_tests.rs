//! Differential tests for `NodeList` against a `Vec` model.
//!
//! Each property decodes an arbitrary byte/value sequence into list
//! operations, applies them to both the list and a plain `Vec`, and checks
//! that every observable (contents, length, ends, cursor traversal) agrees.

use picoxml_list::NodeList;
use quickcheck_macros::quickcheck;

/// Applies an encoded operation to the list and the model in lockstep.
fn apply(op: u8, value: u16, list: &mut NodeList<u16>, model: &mut Vec<u16>) {
    match op % 4 {
        // Bias toward pushes so lists actually grow.
        0 | 1 => {
            list.push_back(value);
            model.push(value);
        }
        2 => {
            assert_eq!(list.pop_back(), model.pop());
        }
        _ => {
            let expected = if model.is_empty() {
                None
            } else {
                Some(model.remove(0))
            };
            assert_eq!(list.pop_front(), expected);
        }
    }
}

#[quickcheck]
fn contents_match_model(ops: Vec<(u8, u16)>) -> bool {
    let mut list = NodeList::new();
    let mut model = Vec::new();
    for (op, value) in ops {
        apply(op, value, &mut list, &mut model);
    }
    list.iter().copied().collect::<Vec<_>>() == model
}

#[quickcheck]
fn length_and_ends_match_model(ops: Vec<(u8, u16)>) -> bool {
    let mut list = NodeList::new();
    let mut model = Vec::new();
    for (op, value) in ops {
        apply(op, value, &mut list, &mut model);
        if list.len() != model.len()
            || list.is_empty() != model.is_empty()
            || list.front() != model.first()
            || list.back() != model.last()
        {
            return false;
        }
    }
    true
}

#[quickcheck]
fn begin_equals_end_iff_empty(ops: Vec<(u8, u16)>) -> bool {
    let mut list = NodeList::new();
    let mut model = Vec::new();
    for (op, value) in ops {
        apply(op, value, &mut list, &mut model);
        if (list.begin() == list.end()) != model.is_empty() {
            return false;
        }
    }
    true
}

#[quickcheck]
fn reverse_traversal_matches_reversed_model(ops: Vec<(u8, u16)>) -> bool {
    let mut list = NodeList::new();
    let mut model = Vec::new();
    for (op, value) in ops {
        apply(op, value, &mut list, &mut model);
    }

    let mut walked = Vec::new();
    let mut cursor = list.rbegin();
    while cursor != list.rend() {
        match list.get(cursor) {
            Some(v) => walked.push(*v),
            None => return false,
        }
        cursor = list.prev(cursor);
    }

    model.reverse();
    walked == model
}

#[quickcheck]
fn clear_then_reuse_matches_fresh_list(values: Vec<u16>, reused: Vec<u16>) -> bool {
    let mut list: NodeList<u16> = values.into_iter().collect();
    list.clear();
    for v in &reused {
        list.push_back(*v);
    }
    list.iter().copied().collect::<Vec<_>>() == reused
}
