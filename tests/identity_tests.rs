//! Identity translation tests

use legacy_entity_mapping::identity::{Identified, to_native, to_universal};
use legacy_entity_mapping::{Country, MappingError};
use proptest::prelude::*;
use uuid::Uuid;

proptest! {
    #[test]
    fn native_round_trip(native in 0i64..=i64::MAX) {
        prop_assert_eq!(to_native(to_universal(native)), Ok(native));
    }

    #[test]
    fn universal_high_bytes_are_zero(native in any::<i64>()) {
        let universal = to_universal(native);
        prop_assert!(universal.as_bytes()[..8].iter().all(|&b| b == 0));
    }

    #[test]
    fn non_zero_high_bytes_overflow(high in 1u64..=u64::MAX, low in any::<u64>()) {
        let universal = Uuid::from_u128((u128::from(high) << 64) | u128::from(low));
        prop_assert_eq!(to_native(universal), Err(MappingError::Overflow(universal)));
    }

    #[test]
    fn entity_identity_surface(native in any::<i64>()) {
        let mut country = Country::default();
        country.set_universal_id(to_universal(native)).unwrap();
        prop_assert_eq!(country.native_id(), native);
        prop_assert_eq!(country.universal_id(), to_universal(native));
    }
}

#[test]
fn test_rejected_universal_id_leaves_entity_untouched() {
    let mut country = Country::default();
    country.set_native_id(7);

    let err = country
        .set_universal_id(Uuid::parse_str("00000000-0000-0001-0000-000000000007").unwrap())
        .unwrap_err();

    assert!(matches!(err, MappingError::Overflow(_)));
    assert_eq!(country.native_id(), 7);
}
