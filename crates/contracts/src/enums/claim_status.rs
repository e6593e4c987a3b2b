use serde::{Deserialize, Serialize};

/// Claim lifecycle status as reported by the claims backend
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ClaimStatus {
    Assigned,
    Acknowledged,
    ApprovalRequired,
    /// Any status this client has no actions for; the raw value is kept for display
    Other(String),
}

impl ClaimStatus {
    /// Wire code of the status
    pub fn code(&self) -> &str {
        match self {
            ClaimStatus::Assigned => "Assigned",
            ClaimStatus::Acknowledged => "Acknowledged",
            ClaimStatus::ApprovalRequired => "ApprovalRequired",
            ClaimStatus::Other(raw) => raw,
        }
    }

    /// Parse from the wire code. Unknown codes are preserved as `Other`.
    pub fn from_code(code: &str) -> Self {
        match code {
            "Assigned" => ClaimStatus::Assigned,
            "Acknowledged" => ClaimStatus::Acknowledged,
            "ApprovalRequired" => ClaimStatus::ApprovalRequired,
            other => ClaimStatus::Other(other.to_string()),
        }
    }

    /// Actions offered to the user for a claim in this status, in display order
    pub fn permitted_actions(&self) -> &'static [ClaimAction] {
        match self {
            ClaimStatus::Assigned => &[ClaimAction::Acknowledge],
            ClaimStatus::Acknowledged => &[ClaimAction::Deny, ClaimAction::Propose],
            ClaimStatus::ApprovalRequired => &[ClaimAction::Deny, ClaimAction::Approve],
            ClaimStatus::Other(_) => &[],
        }
    }
}

impl From<String> for ClaimStatus {
    fn from(value: String) -> Self {
        ClaimStatus::from_code(&value)
    }
}

impl From<ClaimStatus> for String {
    fn from(value: ClaimStatus) -> Self {
        match value {
            ClaimStatus::Other(raw) => raw,
            known => known.code().to_string(),
        }
    }
}

impl std::fmt::Display for ClaimStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Status transition a user can request on a claim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClaimAction {
    Acknowledge,
    Deny,
    Propose,
    Approve,
}

impl ClaimAction {
    /// Path segment of the transition endpoint
    pub fn endpoint(&self) -> &'static str {
        match self {
            ClaimAction::Acknowledge => "acknowledge",
            ClaimAction::Deny => "deny",
            ClaimAction::Propose => "propose",
            ClaimAction::Approve => "approve",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ClaimAction::Acknowledge => "Acknowledge",
            ClaimAction::Deny => "Deny",
            ClaimAction::Propose => "Propose",
            ClaimAction::Approve => "Approve",
        }
    }

    /// Deny is the only destructive transition
    pub fn is_destructive(&self) -> bool {
        matches!(self, ClaimAction::Deny)
    }
}
