use std::fmt;

use serde::{Deserialize, Serialize};

/// Agreement event names sent by Adobe Sign webhooks.
///
/// Unknown names are kept verbatim in `Other`, so new provider events never
/// fail a delivery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AgreementEventType {
    Created,
    ActionRequested,
    ActionCompleted,
    ActionDelegated,
    ActionReplacedSigner,
    WorkflowCompleted,
    Modified,
    Shared,
    Recalled,
    Rejected,
    Expired,
    EmailViewed,
    EmailBounced,
    DocumentsDeleted,
    AutoCancelledConversionProblem,
    ReadyToSign,
    Vaulted,
    Other(String),
}

impl AgreementEventType {
    pub fn from_code<S: AsRef<str>>(code: S) -> Self {
        match code.as_ref() {
            "AGREEMENT_CREATED" => Self::Created,
            "AGREEMENT_ACTION_REQUESTED" => Self::ActionRequested,
            "AGREEMENT_ACTION_COMPLETED" => Self::ActionCompleted,
            "AGREEMENT_ACTION_DELEGATED" => Self::ActionDelegated,
            "AGREEMENT_ACTION_REPLACED_SIGNER" => Self::ActionReplacedSigner,
            "AGREEMENT_WORKFLOW_COMPLETED" => Self::WorkflowCompleted,
            "AGREEMENT_MODIFIED" => Self::Modified,
            "AGREEMENT_SHARED" => Self::Shared,
            "AGREEMENT_RECALLED" => Self::Recalled,
            "AGREEMENT_REJECTED" => Self::Rejected,
            "AGREEMENT_EXPIRED" => Self::Expired,
            "AGREEMENT_EMAIL_VIEWED" => Self::EmailViewed,
            "AGREEMENT_EMAIL_BOUNCED" => Self::EmailBounced,
            "AGREEMENT_DOCUMENTS_DELETED" => Self::DocumentsDeleted,
            "AGREEMENT_AUTO_CANCELLED_CONVERSION_PROBLEM" => Self::AutoCancelledConversionProblem,
            "AGREEMENT_READY_TO_SIGN" => Self::ReadyToSign,
            "AGREEMENT_VAULTED" => Self::Vaulted,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_code(&self) -> &str {
        match self {
            Self::Created => "AGREEMENT_CREATED",
            Self::ActionRequested => "AGREEMENT_ACTION_REQUESTED",
            Self::ActionCompleted => "AGREEMENT_ACTION_COMPLETED",
            Self::ActionDelegated => "AGREEMENT_ACTION_DELEGATED",
            Self::ActionReplacedSigner => "AGREEMENT_ACTION_REPLACED_SIGNER",
            Self::WorkflowCompleted => "AGREEMENT_WORKFLOW_COMPLETED",
            Self::Modified => "AGREEMENT_MODIFIED",
            Self::Shared => "AGREEMENT_SHARED",
            Self::Recalled => "AGREEMENT_RECALLED",
            Self::Rejected => "AGREEMENT_REJECTED",
            Self::Expired => "AGREEMENT_EXPIRED",
            Self::EmailViewed => "AGREEMENT_EMAIL_VIEWED",
            Self::EmailBounced => "AGREEMENT_EMAIL_BOUNCED",
            Self::DocumentsDeleted => "AGREEMENT_DOCUMENTS_DELETED",
            Self::AutoCancelledConversionProblem => "AGREEMENT_AUTO_CANCELLED_CONVERSION_PROBLEM",
            Self::ReadyToSign => "AGREEMENT_READY_TO_SIGN",
            Self::Vaulted => "AGREEMENT_VAULTED",
            Self::Other(code) => code,
        }
    }
}

impl From<String> for AgreementEventType {
    fn from(code: String) -> Self {
        Self::from_code(code)
    }
}

impl From<AgreementEventType> for String {
    fn from(event: AgreementEventType) -> Self {
        event.as_code().to_string()
    }
}

impl fmt::Display for AgreementEventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_code())
    }
}
