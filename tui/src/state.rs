use foodbot_core::{
    parse_products, AppEvent, Contact, Lead, LeadDraft, LeadFilter, LeadStatus, LeadStore, Session,
};
use ratatui::widgets::TableState;
use std::time::Instant;
use tokio::sync::mpsc;

/// Top-level screens, mirroring the app's navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Home,
    Leads,
    Agent,
}

/// Which part of the leads screen receives keystrokes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeadsFocus {
    Table,
    Search,
}

/// Fields of the create/edit form, in travel order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Source,
    Status,
    Email,
    Phone,
    Products,
    Notes,
}

impl FormField {
    pub const ALL: [FormField; 7] = [
        FormField::Name,
        FormField::Source,
        FormField::Status,
        FormField::Email,
        FormField::Phone,
        FormField::Products,
        FormField::Notes,
    ];

    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let idx = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "Restaurant name",
            FormField::Source => "Source",
            FormField::Status => "Status",
            FormField::Email => "Email",
            FormField::Phone => "Phone",
            FormField::Products => "Interested products",
            FormField::Notes => "Notes",
        }
    }
}

/// Buffered form state for creating or editing a lead.
///
/// Everything is kept as plain text until submit; the products field is only
/// split into a list when the draft is built.
#[derive(Debug, Clone)]
pub struct LeadForm {
    /// Id of the lead being edited; None means create
    pub editing: Option<String>,
    pub name: String,
    pub source: String,
    pub status: LeadStatus,
    pub email: String,
    pub phone: String,
    pub products: String,
    pub notes: String,
    pub focused: FormField,
}

impl LeadForm {
    pub fn create() -> Self {
        Self {
            editing: None,
            name: String::new(),
            source: "Manual".to_string(),
            status: LeadStatus::New,
            email: String::new(),
            phone: String::new(),
            products: String::new(),
            notes: String::new(),
            focused: FormField::Name,
        }
    }

    pub fn edit(lead: &Lead) -> Self {
        Self {
            editing: Some(lead.id.clone()),
            name: lead.name.clone(),
            source: lead.source.clone(),
            status: lead.status,
            email: lead.email().unwrap_or_default().to_string(),
            phone: lead.phone().unwrap_or_default().to_string(),
            products: lead.interested_products.join(", "),
            notes: lead.notes.clone().unwrap_or_default(),
            focused: FormField::Name,
        }
    }

    /// The text buffer behind the focused field, if it is a text field
    pub fn focused_buffer(&mut self) -> Option<&mut String> {
        match self.focused {
            FormField::Name => Some(&mut self.name),
            FormField::Source => Some(&mut self.source),
            FormField::Status => None,
            FormField::Email => Some(&mut self.email),
            FormField::Phone => Some(&mut self.phone),
            FormField::Products => Some(&mut self.products),
            FormField::Notes => Some(&mut self.notes),
        }
    }

    pub fn field_text(&self, field: FormField) -> String {
        match field {
            FormField::Name => self.name.clone(),
            FormField::Source => self.source.clone(),
            FormField::Status => format!("◀ {} ▶", self.status),
            FormField::Email => self.email.clone(),
            FormField::Phone => self.phone.clone(),
            FormField::Products => self.products.clone(),
            FormField::Notes => self.notes.clone(),
        }
    }

    /// Build the request payload. Blank contact fields become None and the
    /// products text is comma-split and trimmed.
    pub fn to_draft(&self) -> LeadDraft {
        let not_blank = |s: &str| {
            let t = s.trim();
            if t.is_empty() {
                None
            } else {
                Some(t.to_string())
            }
        };
        LeadDraft {
            name: self.name.trim().to_string(),
            source: self.source.trim().to_string(),
            status: self.status,
            contact: Contact {
                email: not_blank(&self.email),
                phone: not_blank(&self.phone),
            },
            interested_products: parse_products(&self.products),
            notes: not_blank(&self.notes),
        }
    }
}

/// The conversation used by "load sample" in the agent view
pub const SAMPLE_CONVERSATION: &str = "Sales: Hi! Are you the owner of La Taqueria?\n\
Lead: Yes, I run it.\n\
Sales: Are you currently using a POS system?\n\
Lead: No, we're looking for one with CRM features and analytics.\n\
Sales: Great! What's your email?\n\
Lead: la@taqueria.com\n\
Sales: And your phone number?\n\
Lead: 555-123-4567\n\
Lead: We need something that can help us track customer preferences and manage orders efficiently.";

/// Application state
pub struct AppState {
    /// Lead cache plus the API choreography around it
    pub store: LeadStore,

    /// Current user session
    pub session: Session,

    /// Event receiver for handling app events
    pub event_receiver: mpsc::UnboundedReceiver<AppEvent>,

    /// Active screen
    pub view: View,

    /// Whether the application should quit
    pub should_quit: bool,

    // Leads screen
    /// Search text + status selector
    pub filter: LeadFilter,

    /// Derived list, recomputed whenever cache or filter inputs change
    pub filtered: Vec<Lead>,

    /// Table selection
    pub table_state: TableState,

    pub leads_focus: LeadsFocus,

    /// Create/edit modal, when open
    pub form: Option<LeadForm>,

    /// Pending delete confirmation: (id, name)
    pub confirm_delete: Option<(String, String)>,

    /// Whether a create/update/delete round trip is in flight
    pub pending: bool,

    /// One-line message shown in the status bar until the next action
    pub flash: Option<String>,

    // Agent screen
    pub conversation: String,

    /// Cursor position in the conversation editor (byte index)
    pub conversation_cursor: usize,

    pub agent_loading: bool,
    pub agent_result: Option<Lead>,
    pub agent_error: Option<String>,

    /// Whether cursor is visible (for blinking effect)
    pub cursor_visible: bool,

    /// Last time cursor blinked
    pub last_cursor_blink: Instant,
}

impl AppState {
    pub fn new(
        store: LeadStore,
        session: Session,
        event_receiver: mpsc::UnboundedReceiver<AppEvent>,
    ) -> Self {
        Self {
            store,
            session,
            event_receiver,
            view: View::Home,
            should_quit: false,
            filter: LeadFilter::default(),
            filtered: Vec::new(),
            table_state: TableState::default(),
            leads_focus: LeadsFocus::Table,
            form: None,
            confirm_delete: None,
            pending: false,
            flash: None,
            conversation: String::new(),
            conversation_cursor: 0,
            agent_loading: false,
            agent_result: None,
            agent_error: None,
            cursor_visible: true,
            last_cursor_blink: Instant::now(),
        }
    }

    /// Recompute the derived list and keep the selection in range
    pub fn apply_filter(&mut self) {
        self.filtered = self.filter.apply(self.store.leads());
        let selected = self.table_state.selected().unwrap_or(0);
        if self.filtered.is_empty() {
            self.table_state.select(None);
        } else {
            self.table_state
                .select(Some(selected.min(self.filtered.len() - 1)));
        }
    }

    pub fn selected_lead(&self) -> Option<&Lead> {
        self.table_state
            .selected()
            .and_then(|idx| self.filtered.get(idx))
    }

    pub fn select_next(&mut self) {
        if self.filtered.is_empty() {
            return;
        }
        let next = match self.table_state.selected() {
            Some(idx) if idx + 1 < self.filtered.len() => idx + 1,
            Some(idx) => idx,
            None => 0,
        };
        self.table_state.select(Some(next));
    }

    pub fn select_prev(&mut self) {
        if self.filtered.is_empty() {
            return;
        }
        let prev = self.table_state.selected().map_or(0, |idx| idx.saturating_sub(1));
        self.table_state.select(Some(prev));
    }

    /// Update cursor blinking state
    pub fn update_cursor_blink(&mut self) {
        let now = Instant::now();
        if now.duration_since(self.last_cursor_blink).as_millis() >= 500 {
            self.cursor_visible = !self.cursor_visible;
            self.last_cursor_blink = now;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_form_draft_splits_products() {
        let mut form = LeadForm::create();
        form.name = "La Taqueria".to_string();
        form.products = "POS, CRM".to_string();
        let draft = form.to_draft();
        assert_eq!(draft.interested_products, vec!["POS", "CRM"]);
    }

    #[test]
    fn test_form_draft_drops_blank_contact() {
        let mut form = LeadForm::create();
        form.name = "Cafe".to_string();
        form.email = "   ".to_string();
        form.phone = "555-0001".to_string();
        let draft = form.to_draft();
        assert!(draft.contact.email.is_none());
        assert_eq!(draft.contact.phone.as_deref(), Some("555-0001"));
        assert!(draft.notes.is_none());
    }

    #[test]
    fn test_edit_form_round_trips_lead_fields() {
        let lead = Lead {
            id: "l1".to_string(),
            name: "Sushi Go".to_string(),
            source: "Cold Call".to_string(),
            status: LeadStatus::Qualified,
            contact: Contact {
                email: Some("go@sushi.example".to_string()),
                phone: None,
            },
            interested_products: vec!["POS".to_string(), "Analytics".to_string()],
            notes: Some("call back Monday".to_string()),
            created_at: Utc::now(),
        };
        let form = LeadForm::edit(&lead);
        assert_eq!(form.editing.as_deref(), Some("l1"));
        assert_eq!(form.products, "POS, Analytics");

        let draft = form.to_draft();
        assert_eq!(draft.name, lead.name);
        assert_eq!(draft.status, lead.status);
        assert_eq!(draft.contact, lead.contact);
        assert_eq!(draft.interested_products, lead.interested_products);
        assert_eq!(draft.notes, lead.notes);
    }

    #[test]
    fn test_field_travel_order_wraps() {
        assert_eq!(FormField::Notes.next(), FormField::Name);
        assert_eq!(FormField::Name.prev(), FormField::Notes);
        let mut field = FormField::Name;
        for _ in 0..FormField::ALL.len() {
            field = field.next();
        }
        assert_eq!(field, FormField::Name);
    }
}
