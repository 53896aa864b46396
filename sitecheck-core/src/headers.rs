// Security header and asset budget checks over HEAD responses

use serde::{Deserialize, Serialize};
use sitecheck_scanner::HeadFetch;

/// Headers every page response must carry.
pub const REQUIRED_SECURITY_HEADERS: [&str; 6] = [
    "content-security-policy",
    "strict-transport-security",
    "referrer-policy",
    "permissions-policy",
    "x-content-type-options",
    "x-frame-options",
];

/// Security-header findings for one HEAD target.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeaderAudit {
    pub target: String,
    pub reachable: bool,
    pub missing: Vec<String>,
    pub present: Vec<(String, String)>,
}

pub fn audit_security_headers(target: &str, head: Option<&HeadFetch>) -> HeaderAudit {
    let Some(head) = head else {
        return HeaderAudit {
            target: target.to_string(),
            reachable: false,
            missing: Vec::new(),
            present: Vec::new(),
        };
    };

    let mut missing = Vec::new();
    let mut present = Vec::new();
    for name in REQUIRED_SECURITY_HEADERS {
        match head.header_value(name) {
            Some(value) => present.push((name.to_string(), value)),
            None => missing.push(name.to_string()),
        }
    }

    HeaderAudit {
        target: target.to_string(),
        reachable: true,
        missing,
        present,
    }
}

/// Byte-size verdict for one built asset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetAudit {
    pub asset: String,
    /// Reported content-length, `None` when the asset gave no usable answer.
    pub size: Option<u64>,
    pub budget: u64,
}

impl BudgetAudit {
    pub fn is_ok(&self) -> bool {
        self.size.is_some_and(|size| size <= self.budget)
    }
}

pub fn audit_asset_budget(asset: &str, head: Option<&HeadFetch>, budget: u64) -> BudgetAudit {
    BudgetAudit {
        asset: asset.to_string(),
        size: head.and_then(HeadFetch::content_length),
        budget,
    }
}

/// "98.4 KiB" style size formatting, "n/a" when no length was reported.
pub fn format_size(size: Option<u64>) -> String {
    match size {
        Some(size) => format!("{:.1} KiB", size as f64 / 1024.0),
        None => "n/a".to_string(),
    }
}
