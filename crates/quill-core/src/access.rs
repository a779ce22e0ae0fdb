//! Admin access gate.
//!
//! A single switch decided at configuration time. Every caller is the same
//! principal; there is no session or per-request identity.

/// Outcome of a mutation authorization check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Authorization {
    Allowed,
    Denied,
}

/// Process-wide admin policy. Built once from configuration, then read-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AccessGate {
    admin_enabled: bool,
}

impl AccessGate {
    pub fn new(admin_enabled: bool) -> Self {
        Self { admin_enabled }
    }

    pub fn is_admin_enabled(&self) -> bool {
        self.admin_enabled
    }

    /// Must be consulted before any create, update or delete.
    pub fn authorize_mutation(&self) -> Authorization {
        if self.admin_enabled {
            Authorization::Allowed
        } else {
            Authorization::Denied
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enabled_gate_allows() {
        let gate = AccessGate::new(true);
        assert!(gate.is_admin_enabled());
        assert_eq!(gate.authorize_mutation(), Authorization::Allowed);
    }

    #[test]
    fn test_default_gate_denies() {
        let gate = AccessGate::default();
        assert!(!gate.is_admin_enabled());
        assert_eq!(gate.authorize_mutation(), Authorization::Denied);
    }
}
