use super::*;

struct Fixture {
    env: TypeEnvironment,
    a: TypeId,
    b: TypeId,
    c: TypeId,
    u: TypeId,
}

/// `A`, `B` subsets of number, `C` subset of symbol, `U = A | B`.
fn fixture() -> Fixture {
    let mut env = TypeEnvironment::new();
    let a = env.create_subset_type_of("A", ConstantKind::Signed);
    let b = env.create_subset_type_of("B", ConstantKind::Signed);
    let c = env.create_subset_type_of("C", ConstantKind::Symbol);
    let u = env.create_union_type("U");
    env.add_union_member(u, a);
    env.add_union_member(u, b);
    Fixture { env, a, b, c, u }
}

#[test]
fn test_root_reachability() {
    let Fixture { env, a, c, u, .. } = fixture();
    let number_root = env.constant_type(ConstantKind::Signed);
    let symbol_root = env.constant_type(ConstantKind::Symbol);

    assert!(is_of_root_type(&env, a, number_root));
    assert!(is_of_root_type(&env, a, env.get_type("number")));
    assert!(is_of_root_type(&env, a, a));
    assert!(!is_of_root_type(&env, a, symbol_root));
    assert!(is_of_root_type(&env, c, symbol_root));
    assert!(is_of_root_type(&env, u, number_root));
}

#[test]
fn test_empty_and_mixed_unions_reach_no_root() {
    let mut env = TypeEnvironment::new();
    let a = env.create_subset_type_of("A", ConstantKind::Signed);
    let c = env.create_subset_type_of("C", ConstantKind::Symbol);
    let empty = env.create_union_type("Empty");
    let mixed = env.create_union_type("Mixed");
    env.add_union_member(mixed, a);
    env.add_union_member(mixed, c);

    let number_root = env.constant_type(ConstantKind::Signed);
    assert!(!is_of_root_type(&env, empty, number_root));
    assert!(!is_of_root_type(&env, mixed, number_root));
}

#[test]
fn test_records_reach_no_root() {
    let mut env = TypeEnvironment::new();
    let r = env.create_record_type("R");
    for kind in ConstantKind::ALL {
        assert!(!is_of_root_type(&env, r, env.constant_type(kind)));
    }
    let number = env.get_type("number");
    env.add_record_field(r, "x", number);
    assert!(!is_of_root_type(&env, r, env.constant_type(ConstantKind::Signed)));
}

#[test]
fn test_subtype_basics() {
    let Fixture { env, a, b, c, u } = fixture();
    let number = env.get_type("number");
    let symbol = env.get_type("symbol");

    assert!(is_subtype_of(&env, a, number));
    assert!(!is_subtype_of(&env, a, symbol));
    assert!(is_subtype_of(&env, c, symbol));
    assert!(is_subtype_of(&env, a, u));
    assert!(is_subtype_of(&env, b, u));
    assert!(!is_subtype_of(&env, u, a));
    assert!(!is_subtype_of(&env, c, u));
    assert!(is_subtype_of(&env, u, number));
    assert!(!is_subtype_of(&env, number, u));
}

#[test]
fn test_subtype_is_reflexive() {
    let Fixture { mut env, .. } = fixture();
    let r = env.create_record_type("R");
    env.add_record_field(r, "self", r);
    let loop_union = env.create_union_type("Loop");
    env.add_union_member(loop_union, loop_union);

    for ty in &env.all_types() {
        assert!(is_subtype_of(&env, *ty, *ty), "{} is not a subtype of itself", env.name(*ty));
    }
}

#[test]
fn test_union_inclusion() {
    let Fixture { mut env, a, b, u, .. } = fixture();
    let v = env.create_union_type("V");
    env.add_union_member(v, a);
    env.add_union_member(v, b);
    env.add_union_member(v, u);

    assert!(is_subtype_of(&env, u, v));
    assert!(is_subtype_of(&env, v, u));

    let w = env.create_union_type("W");
    env.add_union_member(w, u);
    assert!(is_subtype_of(&env, a, w));
    assert!(is_subtype_of(&env, u, w));
}

#[test]
fn test_union_membership_is_monotone() {
    let Fixture { mut env, a, c, .. } = fixture();
    let v = env.create_union_type("V");
    env.add_union_member(v, a);
    assert!(is_subtype_of(&env, a, v));

    env.add_union_member(v, c);
    let d = env.create_subset_type_of("D", ConstantKind::Float);
    env.add_union_member(v, d);
    assert!(is_subtype_of(&env, a, v));
}

#[test]
fn test_records_are_only_subtypes_of_themselves() {
    let mut env = TypeEnvironment::new();
    let number = env.get_type("number");
    let r1 = env.create_record_type("R1");
    let r2 = env.create_record_type("R2");
    env.add_record_field(r1, "x", number);
    env.add_record_field(r2, "x", number);

    assert!(!is_subtype_of(&env, r1, r2));
    assert!(!is_subtype_of(&env, r2, r1));
}

#[test]
fn test_recursive_types_cut_off_subtyping() {
    let Fixture { mut env, a, .. } = fixture();
    let looped = env.create_union_type("Looped");
    env.add_union_member(looped, a);
    env.add_union_member(looped, looped);

    assert!(is_subtype_of(&env, looped, looped));
    assert!(!is_subtype_of(&env, a, looped));
    assert!(!is_subtype_of(&env, looped, env.get_type("number")));
}

#[test]
fn test_are_subtypes_of() {
    let Fixture { env, a, b, c, u } = fixture();
    let ab: TypeSet = [a, b].into_iter().collect();
    let abc: TypeSet = [a, b, c].into_iter().collect();

    assert!(are_subtypes_of(&env, &ab, u));
    assert!(!are_subtypes_of(&env, &abc, u));
    assert!(are_subtypes_of(&env, &TypeSet::empty(), u));
}

#[test]
#[should_panic(expected = "unable to enumerate the universal type set")]
fn test_are_subtypes_of_universal_set_panics() {
    let Fixture { env, u, .. } = fixture();
    are_subtypes_of(&env, &TypeSet::all(), u);
}

#[test]
#[should_panic(expected = "different environment")]
fn test_cross_environment_query_panics() {
    let Fixture { env, a, .. } = fixture();
    let other = TypeEnvironment::new();
    is_subtype_of(&env, a, other.get_type("number"));
}
