use super::*;

#[test]
fn enumerant_lookup_both_ways() {
    assert_eq!(EnumKind::StorageClass.value_of("Input"), Some(1));
    assert_eq!(EnumKind::StorageClass.name_of(7), Some("Function"));
    assert_eq!(EnumKind::Decoration.value_of("Location"), Some(30));
    assert_eq!(EnumKind::Decoration.name_of(12), None);
}

#[test]
fn kinds_round_trip_through_names() {
    for kind in EnumKind::ALL {
        assert_eq!(EnumKind::from_name(kind.name()), Some(kind));
    }
    for kind in MaskKind::ALL {
        assert_eq!(MaskKind::from_name(kind.name()), Some(kind));
    }
    assert_eq!(EnumKind::from_name("Nope"), None);
}

#[test]
fn enumerant_values_are_unique_per_kind() {
    for kind in EnumKind::ALL {
        let values = kind.values();
        for (i, (_, v)) in values.iter().enumerate() {
            assert!(
                values[i + 1..].iter().all(|(_, w)| w != v),
                "{} repeats value {v}",
                kind.name()
            );
        }
    }
}

#[test]
fn resolve_combined_mask() {
    assert_eq!(resolve_mask(MaskKind::FunctionControl, "None").unwrap(), 0);
    assert_eq!(
        resolve_mask(MaskKind::FunctionControl, "Inline|DontInline").unwrap(),
        3
    );
    assert_eq!(
        resolve_mask(MaskKind::MemoryAccess, "Volatile | Nontemporal").unwrap(),
        5
    );
    assert_eq!(resolve_mask(MaskKind::LoopControl, "2").unwrap(), 2);
}

#[test]
fn resolve_unknown_flag() {
    let err = resolve_mask(MaskKind::SelectionControl, "Flatten|Sideways").unwrap_err();
    assert_eq!(
        err.to_string(),
        "unknown SelectionControl enumerant `Sideways`"
    );
}
