use std::collections::HashSet;

/// Static allow-list of privileged user ids.
///
/// Checked against the sender of every event; nothing about the identity is
/// remembered between events.
#[derive(Debug, Clone, Default)]
pub struct AdminGate {
    admins: HashSet<i64>,
}

impl AdminGate {
    pub fn new(admins: impl IntoIterator<Item = i64>) -> Self {
        Self {
            admins: admins.into_iter().collect(),
        }
    }

    pub fn is_admin(&self, user_id: i64) -> bool {
        self.admins.contains(&user_id)
    }

    pub fn len(&self) -> usize {
        self.admins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.admins.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_listed_ids_are_admins() {
        let gate = AdminGate::new([1060590354, 7]);
        assert!(gate.is_admin(1060590354));
        assert!(gate.is_admin(7));
        assert!(!gate.is_admin(8));
        assert_eq!(gate.len(), 2);
    }

    #[test]
    fn test_empty_gate_denies_everyone() {
        let gate = AdminGate::default();
        assert!(gate.is_empty());
        assert!(!gate.is_admin(0));
    }
}
