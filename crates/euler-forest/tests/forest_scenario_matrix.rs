use euler_forest::{Forest, ForestOptions};

fn link(forest: &mut Forest<u32>, a: u32, b: u32, expected: &[&str]) {
    let was = forest.component_strings();
    assert!(forest.link(a, b), "{was:?}.link({a}, {b}) refused");
    assert_eq!(forest.component_strings(), expected, "{was:?}.link({a}, {b})");
    assert_eq!(forest.validate(), Ok(()), "{was:?}.link({a}, {b})");
}

fn cut(forest: &mut Forest<u32>, a: u32, b: u32, expected: &[&str]) {
    let was = forest.component_strings();
    assert!(forest.cut(a, b), "{was:?}.cut({a}, {b}) refused");
    assert_eq!(forest.component_strings(), expected, "{was:?}.cut({a}, {b})");
    assert_eq!(forest.validate(), Ok(()), "{was:?}.cut({a}, {b})");
}

#[test]
fn documented_walkthrough() {
    let mut forest = Forest::with_seed([0x11; 32]);

    link(&mut forest, 1, 2, &["1-2-1"]);
    link(&mut forest, 3, 4, &["1-2-1", "3-4-3"]);
    assert!(!forest.is_connected(1, 3));

    link(&mut forest, 2, 3, &["1-2-3-4-3-2-1"]);
    link(&mut forest, 5, 3, &["5-3-2-1-2-3-4-3-5"]);
    assert!(forest.is_connected(2, 5));

    cut(&mut forest, 5, 3, &["3-2-1-2-3-4-3", "5"]);
    cut(&mut forest, 2, 3, &["2-1-2", "3-4-3", "5"]);
    assert!(!forest.is_connected(4, 1));

    link(&mut forest, 3, 2, &["3-4-3-2-1-2-3", "5"]);
    assert!(forest.is_connected(1, 4));
    assert!(!forest.is_connected(3, 5));
}

#[test]
fn walkthrough_is_seed_independent() {
    for byte in [0u8, 1, 0x5e, 0xff] {
        let mut forest = Forest::with_options(ForestOptions {
            seed: Some([byte; 32]),
            capacity: 0,
        });
        for (a, b) in [(1, 2), (3, 4), (2, 3), (5, 3)] {
            assert!(forest.link(a, b));
        }
        assert_eq!(forest.render(), "5-3-2-1-2-3-4-3-5");
        assert!(forest.cut(5, 3));
        assert!(forest.cut(2, 3));
        assert_eq!(forest.render(), "2-1-2\n3-4-3\n5");
    }
}

#[test]
fn second_link_is_refused_and_changes_nothing() {
    let mut forest = Forest::with_seed([0x22; 32]);
    assert!(forest.link(7, 8));
    let after_first = forest.component_strings();
    assert!(!forest.link(7, 8));
    assert!(!forest.link(8, 7));
    assert_eq!(forest.component_strings(), after_first);
    assert_eq!(forest.edge_count(), 1);
}

#[test]
fn cut_without_edge_changes_nothing() {
    let mut forest = Forest::with_seed([0x33; 32]);
    assert!(forest.link(1, 2));
    assert!(forest.link(2, 3));
    let before = forest.component_strings();

    // connected but not adjacent
    assert!(!forest.cut(1, 3));
    // never seen
    assert!(!forest.cut(40, 41));
    // already removed
    assert!(forest.cut(1, 2));
    let after_cut = forest.component_strings();
    assert!(!forest.cut(2, 1));

    assert_eq!(forest.component_strings(), after_cut);
    assert_ne!(before, after_cut);
    assert_eq!(forest.validate(), Ok(()));
}

#[test]
fn star_cut_in_every_order() {
    let leaves = [2u32, 3, 4, 5];
    let orders: [[usize; 4]; 4] = [[0, 1, 2, 3], [3, 2, 1, 0], [1, 3, 0, 2], [2, 0, 3, 1]];
    for order in orders {
        let mut forest = Forest::with_seed([0x44; 32]);
        for &leaf in &leaves {
            assert!(forest.link(1, leaf));
        }
        assert_eq!(forest.render(), "1-2-1-3-1-4-1-5-1");
        assert_eq!(forest.component_size(3), 5);

        let mut cut_so_far = Vec::new();
        for &i in &order {
            assert!(forest.cut(leaves[i], 1));
            cut_so_far.push(leaves[i]);
            assert_eq!(forest.validate(), Ok(()));
            for &leaf in &leaves {
                assert_eq!(forest.is_connected(1, leaf), !cut_so_far.contains(&leaf));
            }
        }
        assert_eq!(forest.render(), "1\n2\n3\n4\n5");
    }
}

#[test]
fn relink_after_cut_rebuilds_path() {
    let mut forest = Forest::with_seed([0x55; 32]);
    for v in 1..8u32 {
        assert!(forest.link(v, v + 1));
    }
    assert_eq!(forest.component_size(1), 8);
    assert!(forest.cut(4, 5));
    assert_eq!(forest.component_size(1), 4);
    assert_eq!(forest.component_size(8), 4);
    assert!(forest.link(8, 1));
    assert!(forest.is_connected(4, 5));
    assert!(!forest.link(4, 5));
    assert_eq!(forest.tour(6).len(), 15);
    assert_eq!(forest.validate(), Ok(()));
}
