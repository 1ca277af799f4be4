//! Identifier minting for new deals and contacts.
//!
//! Random v4 UUIDs keep ids unique across rapid successive calls, unlike
//! wall-clock derived ids.

use crate::model::contact::ContactId;
use crate::model::deal::DealId;
use uuid::Uuid;

pub fn new_deal_id() -> DealId {
    format!("d{}", Uuid::new_v4().simple())
}

pub fn new_contact_id() -> ContactId {
    format!("c{}", Uuid::new_v4().simple())
}

#[cfg(test)]
mod tests {
    use super::{new_contact_id, new_deal_id};
    use std::collections::HashSet;

    #[test]
    fn ids_carry_kind_prefix() {
        assert!(new_deal_id().starts_with('d'));
        assert!(new_contact_id().starts_with('c'));
    }

    #[test]
    fn rapid_ids_do_not_collide() {
        let ids: HashSet<_> = (0..1_000).map(|_| new_deal_id()).collect();
        assert_eq!(ids.len(), 1_000);
    }
}
