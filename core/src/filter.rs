use crate::lead::{Lead, LeadStatus};

/// Status half of the list filter. `All` never excludes anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter {
    All,
    Only(LeadStatus),
}

impl StatusFilter {
    /// Cycle All -> New -> Contacted -> Qualified -> Closed -> All.
    pub fn next(self) -> Self {
        match self {
            StatusFilter::All => StatusFilter::Only(LeadStatus::New),
            StatusFilter::Only(LeadStatus::Closed) => StatusFilter::All,
            StatusFilter::Only(status) => StatusFilter::Only(status.next()),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StatusFilter::All => "All",
            StatusFilter::Only(status) => status.as_str(),
        }
    }

    fn matches(self, lead: &Lead) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(status) => lead.status == status,
        }
    }
}

impl Default for StatusFilter {
    fn default() -> Self {
        StatusFilter::All
    }
}

/// Client-side list filter: free-text query plus a status selector.
///
/// Pure and synchronous; the UI recomputes the derived list whenever the
/// cache, the query, or the selector changes.
#[derive(Debug, Clone, Default)]
pub struct LeadFilter {
    pub query: String,
    pub status: StatusFilter,
}

impl LeadFilter {
    /// Case-insensitive substring match against name, email, and source,
    /// combined with an exact status match unless the selector is `All`.
    pub fn matches(&self, lead: &Lead) -> bool {
        if !self.status.matches(lead) {
            return false;
        }
        let query = self.query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        lead.name.to_lowercase().contains(&query)
            || lead
                .email()
                .map_or(false, |email| email.to_lowercase().contains(&query))
            || lead.source.to_lowercase().contains(&query)
    }

    /// Filter a cached list, preserving its order.
    pub fn apply(&self, leads: &[Lead]) -> Vec<Lead> {
        leads
            .iter()
            .filter(|lead| self.matches(lead))
            .cloned()
            .collect()
    }
}
