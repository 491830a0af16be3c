//! Integer identities for model entities
//!
//! Every category gets its own newtype so a section id can never be passed
//! where a node id is expected. Ids start at 1 and serialize as plain
//! integers.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! entity_id {
    ($($(#[$meta:meta])* $name:ident),* $(,)?) => {
        $(
            $(#[$meta])*
            #[derive(
                Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
            )]
            #[serde(transparent)]
            pub struct $name(pub u32);

            impl $name {
                /// Id for the entity stored at zero-based position `index`
                pub(crate) fn from_index(index: usize) -> Self {
                    Self(index as u32 + 1)
                }

                /// Zero-based storage position; `None` for the unassigned id 0
                pub(crate) fn index(self) -> Option<usize> {
                    (self.0 as usize).checked_sub(1)
                }
            }

            impl fmt::Display for $name {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    write!(f, "{}", self.0)
                }
            }
        )*
    };
}

entity_id!(
    /// Node identity
    NodeId,
    /// Continuous member identity
    MemberId,
    /// Section identity
    SectionId,
    /// Material identity
    MaterialId,
    /// Support identity
    SupportId,
    /// Area load identity
    AreaLoadId,
    /// Self weight identity
    SelfWeightId,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_start_at_one() {
        assert_eq!(NodeId::from_index(0), NodeId(1));
        assert_eq!(MemberId(7).index(), Some(6));
        assert_eq!(MemberId(0).index(), None);
    }

    #[test]
    fn test_id_serializes_as_integer() {
        let json = serde_json::to_string(&SectionId(3)).unwrap();
        assert_eq!(json, "3");
    }
}
