//! Plan entity - subscription tiers with feature flags and a monthly quota

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// Subscription plan
///
/// `max_appointments_month` of `None` means unlimited bookings. Plans are
/// deactivated instead of deleted so existing subscribers keep a valid
/// reference.
#[derive(Debug, Clone, PartialEq)]
pub struct Plan {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub duration_months: Option<i32>,
    pub max_appointments_month: Option<i32>,
    pub has_video_call: bool,
    pub has_chat: bool,
    pub has_prescription: bool,
    pub has_medical_certificate: bool,
    pub features: Vec<String>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Plan {
    /// Whether a patient on this plan has hit the given monthly usage
    #[must_use]
    pub fn limit_reached(&self, appointments_this_month: i64) -> bool {
        match self.max_appointments_month {
            Some(cap) => appointments_this_month >= i64::from(cap),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn plan(cap: Option<i32>) -> Plan {
        let now = Utc::now();
        Plan {
            id: 1,
            name: "Basic".to_string(),
            description: None,
            price: Decimal::new(4990, 2),
            duration_months: Some(1),
            max_appointments_month: cap,
            has_video_call: true,
            has_chat: true,
            has_prescription: true,
            has_medical_certificate: true,
            features: vec![],
            active: true,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_limit_reached_with_cap() {
        let p = plan(Some(4));
        assert!(!p.limit_reached(3));
        assert!(p.limit_reached(4));
        assert!(p.limit_reached(5));
    }

    #[test]
    fn test_no_cap_is_unlimited() {
        let p = plan(None);
        assert!(!p.limit_reached(10_000));
    }
}
