//! Entity id generation.
//!
//! Ids are random and independent of creation timestamps, so two entities
//! created within the same millisecond never collide.

use uuid::Uuid;

pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn rapid_ids_are_distinct() {
        let ids: HashSet<_> = (0..1000).map(|_| new_id()).collect();
        assert_eq!(ids.len(), 1000);
    }
}
