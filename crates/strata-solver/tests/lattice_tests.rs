use super::*;
use crate::types::ConstantKind;

fn set(types: &[TypeId]) -> TypeSet {
    types.iter().copied().collect()
}

struct Chain {
    env: TypeEnvironment,
    a: TypeId,
    b: TypeId,
    c: TypeId,
    d: TypeId,
    u: TypeId,
    v: TypeId,
    w: TypeId,
}

/// `A`, `B` numbers, `C`, `D` symbols, `U = A`, `V = U | B`, `W = V | C`.
fn chain() -> Chain {
    let mut env = TypeEnvironment::new();
    let a = env.create_subset_type_of("A", ConstantKind::Signed);
    let b = env.create_subset_type_of("B", ConstantKind::Signed);
    let c = env.create_subset_type_of("C", ConstantKind::Symbol);
    let d = env.create_subset_type_of("D", ConstantKind::Symbol);
    let u = env.create_union_type("U");
    let v = env.create_union_type("V");
    let w = env.create_union_type("W");
    env.add_union_member(u, a);
    env.add_union_member(v, u);
    env.add_union_member(v, b);
    env.add_union_member(w, v);
    env.add_union_member(w, c);
    Chain {
        env,
        a,
        b,
        c,
        d,
        u,
        v,
        w,
    }
}

#[test]
fn test_lcs_without_unions_is_the_primitive() {
    let mut env = TypeEnvironment::new();
    let a = env.create_subset_type_of("A", ConstantKind::Signed);
    let b = env.create_subset_type_of("B", ConstantKind::Signed);
    let c = env.create_subset_type_of("C", ConstantKind::Symbol);
    let number = env.get_type("number");

    assert_eq!(least_common_supertypes(&env, a, b), TypeSet::singleton(number));
    assert_eq!(least_common_supertypes(&env, a, c), TypeSet::empty());
    assert_eq!(least_common_supertypes(&env, a, a), TypeSet::singleton(a));
    assert_eq!(least_common_supertypes(&env, a, number), TypeSet::singleton(number));
    assert_eq!(least_common_supertypes(&env, number, a), TypeSet::singleton(number));
}

#[test]
fn test_lcs_prefers_the_smallest_union() {
    let Chain {
        env, a, b, c, d, u, v, ..
    } = chain();

    assert_eq!(least_common_supertypes(&env, a, b), set(&[v]));
    assert_eq!(least_common_supertypes(&env, u, b), set(&[v]));
    assert_eq!(least_common_supertypes(&env, c, d), set(&[env.get_type("symbol")]));
    assert_eq!(least_common_supertypes(&env, a, d), TypeSet::empty());
}

#[test]
fn test_lcs_keeps_equivalent_unions() {
    let mut env = TypeEnvironment::new();
    let a = env.create_subset_type_of("A", ConstantKind::Signed);
    let b = env.create_subset_type_of("B", ConstantKind::Signed);
    let u = env.create_union_type("U");
    let v = env.create_union_type("V");
    for union in [u, v] {
        env.add_union_member(union, a);
        env.add_union_member(union, b);
    }

    assert_eq!(least_common_supertypes(&env, a, b), set(&[u, v]));
}

#[test]
fn test_lcs_of_set_folds_left_to_right() {
    let Chain {
        env, a, b, c, d, v, w, ..
    } = chain();

    assert_eq!(least_common_supertypes_of_set(&env, &set(&[a])), set(&[a]));
    assert_eq!(least_common_supertypes_of_set(&env, &set(&[a, b])), set(&[v]));
    assert_eq!(least_common_supertypes_of_set(&env, &set(&[a, b, c])), set(&[w]));
    assert_eq!(least_common_supertypes_of_set(&env, &set(&[a, b, c, d])), TypeSet::empty());
    assert_eq!(least_common_supertypes_of_set(&env, &TypeSet::empty()), TypeSet::empty());
    assert_eq!(least_common_supertypes_of_set(&env, &TypeSet::all()), TypeSet::empty());
}

#[test]
fn test_gcs_pair() {
    let mut env = TypeEnvironment::new();
    let a = env.create_subset_type_of("A", ConstantKind::Signed);
    let b = env.create_subset_type_of("B", ConstantKind::Signed);
    let c = env.create_subset_type_of("C", ConstantKind::Symbol);
    let number = env.get_type("number");

    assert_eq!(greatest_common_subtypes(&env, a, b), TypeSet::empty());
    assert_eq!(greatest_common_subtypes(&env, a, number), TypeSet::singleton(a));
    assert_eq!(greatest_common_subtypes(&env, number, a), TypeSet::singleton(a));
    assert_eq!(greatest_common_subtypes(&env, c, number), TypeSet::empty());
    assert_eq!(greatest_common_subtypes(&env, b, b), TypeSet::singleton(b));
}

#[test]
fn test_gcs_of_overlapping_unions() {
    let mut env = TypeEnvironment::new();
    let a = env.create_subset_type_of("A", ConstantKind::Signed);
    let b = env.create_subset_type_of("B", ConstantKind::Signed);
    let c = env.create_subset_type_of("C", ConstantKind::Symbol);
    let d = env.create_subset_type_of("D", ConstantKind::Float);

    let inner = env.create_union_type("Inner");
    env.add_union_member(inner, a);
    env.add_union_member(inner, c);
    let left = env.create_union_type("Left");
    env.add_union_member(left, inner);
    env.add_union_member(left, b);
    env.add_union_member(left, d);
    let e = env.create_subset_type_of("E", ConstantKind::Float);
    let right = env.create_union_type("Right");
    env.add_union_member(right, a);
    env.add_union_member(right, b);
    env.add_union_member(right, c);
    env.add_union_member(right, e);

    // `Inner` itself qualifies and subsumes `A` and `C`.
    assert_eq!(greatest_common_subtypes(&env, left, right), set(&[inner, b]));
}

#[test]
fn test_gcs_descends_into_nested_unions() {
    let mut env = TypeEnvironment::new();
    let a = env.create_subset_type_of("A", ConstantKind::Signed);
    let c = env.create_subset_type_of("C", ConstantKind::Symbol);
    let d = env.create_subset_type_of("D", ConstantKind::Float);

    let inner = env.create_union_type("Inner");
    env.add_union_member(inner, a);
    env.add_union_member(inner, d);
    let left = env.create_union_type("Left");
    env.add_union_member(left, inner);
    env.add_union_member(left, c);
    let e = env.create_subset_type_of("E", ConstantKind::Float);
    let right = env.create_union_type("Right");
    env.add_union_member(right, a);
    env.add_union_member(right, c);
    env.add_union_member(right, e);

    assert_eq!(greatest_common_subtypes(&env, left, right), set(&[a, c]));
}

#[test]
fn test_gcs_of_set() {
    let Chain { env, a, u, v, w, .. } = chain();

    assert_eq!(greatest_common_subtypes_of_set(&env, &set(&[w, v])), set(&[v]));
    assert_eq!(greatest_common_subtypes_of_set(&env, &set(&[w, v, a])), set(&[a]));
    assert_eq!(greatest_common_subtypes_of_set(&env, &set(&[u, w])), set(&[u]));
    assert_eq!(greatest_common_subtypes_of_set(&env, &TypeSet::all()), TypeSet::empty());
}

#[test]
fn test_pairwise_identity_and_absorption() {
    let Chain { env, a, b, c, .. } = chain();
    let some = set(&[a, b]);

    for op in [least_common_supertypes_pairwise, greatest_common_subtypes_pairwise] {
        assert_eq!(op(&env, &TypeSet::all(), &some), some);
        assert_eq!(op(&env, &some, &TypeSet::all()), some);
        assert_eq!(op(&env, &TypeSet::all(), &TypeSet::all()), TypeSet::all());
        assert_eq!(op(&env, &TypeSet::empty(), &some), TypeSet::empty());
        assert_eq!(op(&env, &TypeSet::all(), &TypeSet::empty()), TypeSet::empty());
        assert_eq!(op(&env, &set(&[c]), &TypeSet::empty()), TypeSet::empty());
    }
}

#[test]
fn test_pairwise_combines_every_pair() {
    let Chain {
        env, a, b, c, d, v, ..
    } = chain();
    let symbol = env.get_type("symbol");

    assert_eq!(
        least_common_supertypes_pairwise(&env, &set(&[a, c]), &set(&[b, d])),
        set(&[v, symbol])
    );
    assert_eq!(
        greatest_common_subtypes_pairwise(&env, &set(&[a, c]), &set(&[env.get_type("number")])),
        set(&[a])
    );
}

#[test]
fn test_results_are_antichains() {
    let Chain { env, .. } = chain();
    let all: Vec<TypeId> = env.all_types().iter().copied().collect();

    for &x in &all {
        for &y in &all {
            for result in [
                least_common_supertypes(&env, x, y),
                greatest_common_subtypes(&env, x, y),
            ] {
                for &p in &result {
                    for &q in &result {
                        if p != q {
                            assert!(
                                !(is_subtype_of(&env, p, q) && !is_subtype_of(&env, q, p)),
                                "{} and {} are comparable in a bound of ({}, {})",
                                env.name(p),
                                env.name(q),
                                env.name(x),
                                env.name(y)
                            );
                        }
                    }
                }
            }
        }
    }
}

#[test]
#[should_panic(expected = "different environment")]
fn test_lcs_of_foreign_type_with_itself_panics() {
    let env = TypeEnvironment::new();
    let mut other = TypeEnvironment::new();
    let x = other.create_subset_type_of("X", ConstantKind::Signed);
    least_common_supertypes(&env, x, x);
}

#[test]
#[should_panic(expected = "different environment")]
fn test_gcs_of_foreign_type_with_itself_panics() {
    let env = TypeEnvironment::new();
    let mut other = TypeEnvironment::new();
    let x = other.create_subset_type_of("X", ConstantKind::Signed);
    greatest_common_subtypes(&env, x, x);
}
