use plain_bst::{Error, Tree, SEPARATOR};

use std::collections::{BTreeSet, HashSet};

/// Inserts every value, ignoring the ones that are already present.
/// Returns the tree along with the distinct values in insertion order.
fn build(xs: &[i8]) -> (Tree<i8>, Vec<i8>) {
    let mut tree = Tree::new();
    let mut inserted = Vec::new();
    for x in xs {
        if tree.insert(*x).is_ok() {
            inserted.push(*x);
        }
    }

    (tree, inserted)
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let (tree, _) = build(&xs);

    xs.iter().all(|x| tree.search(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let (tree, _) = build(&xs);
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.search(x))
}

#[quickcheck]
fn in_order_is_sorted(xs: Vec<i8>) -> bool {
    let (tree, _) = build(&xs);
    let sorted: BTreeSet<_> = xs.into_iter().collect();
    let expected = sorted
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(SEPARATOR);

    tree.in_order() == expected
}

#[quickcheck]
fn duplicate_insert_changes_nothing(xs: Vec<i8>, pick: usize) -> bool {
    let (mut tree, inserted) = build(&xs);
    if inserted.is_empty() {
        return true;
    }
    let duplicate = inserted[pick % inserted.len()];
    let before = (tree.pre_order(), tree.in_order(), tree.post_order());

    tree.insert(duplicate) == Err(Error::DuplicateValue)
        && (tree.pre_order(), tree.in_order(), tree.post_order()) == before
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let (mut tree, inserted) = build(&xs);
    let mut still_present: HashSet<_> = inserted.into_iter().collect();
    for delete in &deletes {
        let expected = if still_present.remove(delete) {
            Ok(())
        } else {
            Err(Error::NotFound)
        };
        if tree.delete(delete) != expected {
            return false;
        }
    }

    deletes.iter().all(|x| !tree.search(x)) && still_present.iter().all(|x| tree.search(x))
}

#[quickcheck]
fn deleting_everything_empties_the_tree(xs: Vec<i8>, rotation: usize) -> bool {
    let (mut tree, mut inserted) = build(&xs);
    if !inserted.is_empty() {
        let mid = rotation % inserted.len();
        inserted.rotate_left(mid);
    }

    inserted.iter().all(|x| tree.delete(x).is_ok())
        && tree.is_empty()
        && tree.in_order().is_empty()
        && (i8::MIN..=i8::MAX).all(|x| !tree.search(&x))
}

#[quickcheck]
fn from_values_matches_repeated_insert(xs: Vec<i8>) -> bool {
    let distinct: Vec<_> = {
        let mut seen = HashSet::new();
        xs.iter().copied().filter(|x| seen.insert(*x)).collect()
    };
    let (tree, _) = build(&xs);

    match Tree::from_values(distinct) {
        Ok(built) => built.pre_order() == tree.pre_order(),
        Err(_) => false,
    }
}
