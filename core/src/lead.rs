use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Pipeline status of a lead. The backend only knows these four literals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LeadStatus {
    New,
    Contacted,
    Qualified,
    Closed,
}

impl LeadStatus {
    pub const ALL: [LeadStatus; 4] = [
        LeadStatus::New,
        LeadStatus::Contacted,
        LeadStatus::Qualified,
        LeadStatus::Closed,
    ];

    /// Next status in pipeline order, wrapping around. Used by the form's
    /// status selector.
    pub fn next(self) -> Self {
        match self {
            LeadStatus::New => LeadStatus::Contacted,
            LeadStatus::Contacted => LeadStatus::Qualified,
            LeadStatus::Qualified => LeadStatus::Closed,
            LeadStatus::Closed => LeadStatus::New,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            LeadStatus::New => LeadStatus::Closed,
            LeadStatus::Contacted => LeadStatus::New,
            LeadStatus::Qualified => LeadStatus::Contacted,
            LeadStatus::Closed => LeadStatus::Qualified,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LeadStatus::New => "New",
            LeadStatus::Contacted => "Contacted",
            LeadStatus::Qualified => "Qualified",
            LeadStatus::Closed => "Closed",
        }
    }
}

impl fmt::Display for LeadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Default for LeadStatus {
    fn default() -> Self {
        LeadStatus::New
    }
}

/// Contact details attached to a lead. Either field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// A prospective restaurant customer as the backend returns it.
///
/// The backend owns these records; the client only holds a transient cached
/// copy and edits it by issuing update requests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    pub source: String,
    pub status: LeadStatus,
    #[serde(default)]
    pub contact: Contact,
    #[serde(default)]
    pub interested_products: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Lead {
    pub fn email(&self) -> Option<&str> {
        self.contact.email.as_deref()
    }

    pub fn phone(&self) -> Option<&str> {
        self.contact.phone.as_deref()
    }
}

/// Payload for create and update requests. The id is supplied separately.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadDraft {
    pub name: String,
    pub source: String,
    pub status: LeadStatus,
    #[serde(default)]
    pub contact: Contact,
    #[serde(default)]
    pub interested_products: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Split a comma-separated products field into a clean list.
///
/// Entries are trimmed and empty ones dropped, so "POS, CRM" and
/// "POS,CRM," both come out as `["POS", "CRM"]`.
pub fn parse_products(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_products() {
        assert_eq!(parse_products("POS, CRM"), vec!["POS", "CRM"]);
        assert_eq!(parse_products("POS,CRM,"), vec!["POS", "CRM"]);
        assert_eq!(parse_products("  Analytics  "), vec!["Analytics"]);
        assert!(parse_products("").is_empty());
        assert!(parse_products(" , ,").is_empty());
    }

    #[test]
    fn test_status_roundtrip() {
        for status in LeadStatus::ALL {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status));
            let back: LeadStatus = serde_json::from_str(&json).unwrap();
            assert_eq!(back, status);
        }
    }

    #[test]
    fn test_status_cycle_wraps() {
        assert_eq!(LeadStatus::Closed.next(), LeadStatus::New);
        assert_eq!(LeadStatus::New.prev(), LeadStatus::Closed);
        for status in LeadStatus::ALL {
            assert_eq!(status.next().prev(), status);
        }
    }

    #[test]
    fn test_lead_wire_format() {
        let json = r#"{
            "_id": "abc123",
            "name": "La Taquería",
            "source": "AI Agent",
            "status": "New",
            "contact": { "email": "la@taqueria.com", "phone": "555-123-4567" },
            "interestedProducts": ["POS", "CRM"],
            "notes": "Wants analytics",
            "createdAt": "2024-05-01T12:00:00Z"
        }"#;
        let lead: Lead = serde_json::from_str(json).unwrap();
        assert_eq!(lead.id, "abc123");
        assert_eq!(lead.status, LeadStatus::New);
        assert_eq!(lead.email(), Some("la@taqueria.com"));
        assert_eq!(lead.interested_products, vec!["POS", "CRM"]);

        // Missing optional fields must not fail the decode
        let sparse = r#"{
            "id": "x",
            "name": "Cafe",
            "source": "Referral",
            "status": "Closed",
            "createdAt": "2024-05-01T12:00:00Z"
        }"#;
        let lead: Lead = serde_json::from_str(sparse).unwrap();
        assert!(lead.email().is_none());
        assert!(lead.interested_products.is_empty());
    }

    #[test]
    fn test_draft_serializes_camel_case() {
        let draft = LeadDraft {
            name: "Cafe".to_string(),
            source: "Manual".to_string(),
            status: LeadStatus::Contacted,
            contact: Contact::default(),
            interested_products: vec!["POS".to_string()],
            notes: None,
        };
        let value = serde_json::to_value(&draft).unwrap();
        assert_eq!(value["interestedProducts"][0], "POS");
        assert_eq!(value["status"], "Contacted");
        assert!(value.get("notes").is_none());
    }
}
