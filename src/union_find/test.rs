use super::*;

fn sum_merge(a: usize, b: usize) -> usize {
    a + b
}

fn singletons(n: usize) -> UnionFind<usize> {
    let mut uf = UnionFind::new();
    for _ in 0..n {
        uf.push(1);
    }
    uf
}

#[test]
fn test_basic_union_find() {
    let mut uf = UnionFind::new();
    assert!(uf.is_empty());
    let a = uf.push(10);
    let b = uf.push(20);
    let c = uf.push(30);

    assert_eq!(*uf.find_data(a), 10);
    assert_eq!(*uf.find_data(c), 30);
    assert_eq!(uf.n_sets(), 3);

    uf.union(a, b, sum_merge);
    assert_eq!(*uf.find_data(a), 30);
    assert_eq!(uf.find(a), uf.find(b));
    assert!(!uf.same_set(a, c));
    assert_eq!(uf.n_sets(), 2);
}

#[test]
fn test_union_same_set_is_noop() {
    let mut uf = singletons(2);
    let root = uf.union(ParentPointer(0), ParentPointer(1), sum_merge);
    let again = uf.union(ParentPointer(1), ParentPointer(0), sum_merge);
    assert_eq!(root, again);
    assert_eq!(uf.n_sets(), 1);
    assert_eq!(*uf.find_data(ParentPointer(0)), 2);
}

#[test]
fn test_path_compression() {
    let mut uf = singletons(4);

    uf.union(ParentPointer(0), ParentPointer(1), sum_merge);
    uf.union(ParentPointer(1), ParentPointer(2), sum_merge);
    uf.union(ParentPointer(2), ParentPointer(3), sum_merge);

    let root = uf.find(ParentPointer(3));
    assert_eq!(uf.find(ParentPointer(2)), root);
    assert_eq!(uf.find(ParentPointer(1)), root);
    assert_eq!(*uf.find_data(ParentPointer(0)), 4);
}

#[test]
fn test_compaction_keeps_data_reachable() {
    let mut uf = singletons(6);

    // merge in an order that forces the last slot to move
    uf.union(ParentPointer(5), ParentPointer(0), sum_merge);
    uf.union(ParentPointer(1), ParentPointer(4), sum_merge);
    uf.union(ParentPointer(2), ParentPointer(5), sum_merge);

    assert_eq!(uf.n_sets(), 3);
    assert_eq!(*uf.find_data(ParentPointer(0)), 3);
    assert_eq!(*uf.find_data(ParentPointer(4)), 2);
    assert_eq!(*uf.find_data(ParentPointer(3)), 1);

    let mut sizes: Vec<usize> = uf.iter_set_data().copied().collect();
    sizes.sort();
    assert_eq!(sizes, vec![1, 2, 3]);
}

#[test]
fn test_push_after_union() {
    let mut uf = singletons(2);
    uf.union(ParentPointer(0), ParentPointer(1), sum_merge);
    let c = uf.push(1);
    assert_eq!(uf.len(), 3);
    assert_eq!(uf.n_sets(), 2);
    uf.union(c, ParentPointer(0), sum_merge);
    assert_eq!(*uf.find_data(c), 3);
    assert_eq!(uf.n_sets(), 1);
}
