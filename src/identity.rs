//! Native and universal entity identities
//!
//! Legacy records are keyed by a signed 64-bit native id while the
//! surrounding domain model expects 128-bit universal ids. A native id
//! widens into the low 8 bytes of a [`Uuid`] with the high 8 bytes zero.
//! Narrowing is partial: any universal id with a non-zero high half is
//! rejected with `Overflow` rather than truncated.
//!
//! ```rust
//! use legacy_entity_mapping::identity::{to_native, to_universal};
//!
//! let universal = to_universal(840);
//! assert_eq!(to_native(universal).unwrap(), 840);
//! ```

use uuid::Uuid;

use crate::error::{MappingError, MappingResult};

/// Widen a native id into a universal id
pub fn to_universal(native: i64) -> Uuid {
    Uuid::from_u128(u128::from(native as u64))
}

/// Narrow a universal id back to its native id
pub fn to_native(universal: Uuid) -> MappingResult<i64> {
    let bits = universal.as_u128();
    if bits >> 64 != 0 {
        return Err(MappingError::Overflow(universal));
    }
    Ok(bits as u64 as i64)
}

/// Identity surface shared by every entity kind
///
/// The native id is the only stored state; the universal id is derived on
/// read and narrowed on write.
pub trait Identified {
    fn native_id(&self) -> i64;

    fn set_native_id(&mut self, id: i64);

    fn universal_id(&self) -> Uuid {
        to_universal(self.native_id())
    }

    /// Assign through the universal id, leaving the entity untouched on overflow
    fn set_universal_id(&mut self, id: Uuid) -> MappingResult<()> {
        let native = to_native(id)?;
        self.set_native_id(native);
        Ok(())
    }
}
