use uuid::Uuid;

use quill_core::domain::PostId;
use quill_core::ports::IdSource;

/// Random v4 UUID ids.
pub struct RandomIdSource;

impl IdSource for RandomIdSource {
    fn next_id(&self) -> PostId {
        PostId::new(Uuid::new_v4().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_uuids() {
        let ids = RandomIdSource;
        let first = ids.next_id();
        assert!(Uuid::parse_str(first.as_str()).is_ok());
        assert_ne!(first, ids.next_id());
    }
}
