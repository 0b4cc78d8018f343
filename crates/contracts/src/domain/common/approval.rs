use serde_json::{json, Value};

/// Meaning of the `Approved` column of kalam and mazmoon submissions.
///
/// The backend stores a bare integer and its screens disagree on which
/// value means "approved", so the value is configuration, not a constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApprovalConvention {
    pub approved_value: i64,
}

impl Default for ApprovalConvention {
    /// The approve action writes `Approved: 0`
    fn default() -> Self {
        Self { approved_value: 0 }
    }
}

impl ApprovalConvention {
    pub fn new(approved_value: i64) -> Self {
        Self { approved_value }
    }

    /// `None` when the column is blank or not a number
    pub fn is_approved(&self, raw: &str) -> Option<bool> {
        raw.trim()
            .parse::<i64>()
            .ok()
            .map(|v| v == self.approved_value)
    }

    pub fn label(&self, raw: &str) -> &'static str {
        match self.is_approved(raw) {
            Some(true) => "Yes",
            Some(false) => "No",
            None => "",
        }
    }

    /// Body of the PUT that approves a submission
    pub fn approve_body(&self) -> Value {
        json!({ "Approved": self.approved_value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_treats_zero_as_approved() {
        let conv = ApprovalConvention::default();
        assert_eq!(conv.label("0"), "Yes");
        assert_eq!(conv.label("1"), "No");
        assert_eq!(conv.label(""), "");
        assert_eq!(conv.approve_body(), json!({"Approved": 0}));
    }

    #[test]
    fn test_inverse_convention() {
        let conv = ApprovalConvention::new(1);
        assert_eq!(conv.is_approved("1"), Some(true));
        assert_eq!(conv.is_approved("0"), Some(false));
        assert_eq!(conv.is_approved("pending"), None);
        assert_eq!(conv.approve_body(), json!({"Approved": 1}));
    }
}
