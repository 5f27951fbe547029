//! Quote creation wizard
//!
//! The wizard walks a technician through three ordered steps - client info,
//! line items, review - and owns the transient draft for the whole time it
//! is open. Step advancement is gated; invalid input never raises an error,
//! it just blocks `advance()`. Submission defensively re-checks the gates,
//! materializes an immutable `Quote`, prepends it to the repository, and
//! resets the wizard.

use chrono::NaiveDate;
use log::{debug, info};

use crate::error::{QuotedeskError, QuotedeskResult};
use crate::models::{ClientInfo, LineItem, MaterialId, Money, Quote, QuoteStatus};
use crate::store::{MaterialCatalog, QuoteRepository};

use super::totals::{calculate_totals, QuoteTotals};

/// The three ordered wizard steps
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum WizardStep {
    /// Client name, tax id, service description, terms
    ClientInfo,
    /// Line items plus labor cost and discount
    Items,
    /// Read-only summary before submission
    Review,
}

impl WizardStep {
    /// 1-based step number for display
    pub fn number(&self) -> u8 {
        match self {
            Self::ClientInfo => 1,
            Self::Items => 2,
            Self::Review => 3,
        }
    }

    fn next(self) -> Option<Self> {
        match self {
            Self::ClientInfo => Some(Self::Items),
            Self::Items => Some(Self::Review),
            Self::Review => None,
        }
    }

    fn prev(self) -> Option<Self> {
        match self {
            Self::ClientInfo => None,
            Self::Items => Some(Self::ClientInfo),
            Self::Review => Some(Self::Items),
        }
    }
}

/// Wizard lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardState {
    /// No draft in progress
    Closed,
    /// A draft is being assembled at the given step
    Open(WizardStep),
}

/// The in-progress, uncommitted quote being assembled
///
/// Owned exclusively by the wizard while open; discarded on cancel and on
/// successful submission.
#[derive(Debug, Clone, Default)]
pub struct QuoteDraft {
    /// Client or company name (required to leave step 1)
    pub client_name: String,
    /// Client tax identifier (optional, free-form)
    pub client_tax_id: String,
    /// Service description (required to leave step 1)
    pub service_description: String,
    /// Execution deadline (optional free text)
    pub execution_time: String,
    /// Payment terms (optional free text)
    pub payment_terms: String,
    /// Date the quote is valid until
    pub validity: Option<NaiveDate>,
    /// Line items, in insertion order (non-empty to leave step 2)
    pub items: Vec<LineItem>,
    /// Labor cost
    pub labor_cost: Money,
    /// Discount
    pub discount: Money,
}

impl QuoteDraft {
    /// Gate for ClientInfo -> Items
    pub fn client_info_complete(&self) -> bool {
        !self.client_name.trim().is_empty() && !self.service_description.trim().is_empty()
    }

    /// Gate for Items -> Review
    pub fn has_items(&self) -> bool {
        !self.items.is_empty()
    }
}

/// The quote creation wizard: step controller, line-item editor, and
/// submission handler over a single transient draft
#[derive(Debug, Clone)]
pub struct QuoteWizard {
    state: WizardState,
    draft: QuoteDraft,
}

impl QuoteWizard {
    /// Create a closed wizard with an empty draft
    pub fn new() -> Self {
        Self {
            state: WizardState::Closed,
            draft: QuoteDraft::default(),
        }
    }

    /// Current lifecycle state
    pub fn state(&self) -> WizardState {
        self.state
    }

    /// Current step, if the wizard is open
    pub fn step(&self) -> Option<WizardStep> {
        match self.state {
            WizardState::Open(step) => Some(step),
            WizardState::Closed => None,
        }
    }

    /// Whether a draft is in progress
    pub fn is_open(&self) -> bool {
        matches!(self.state, WizardState::Open(_))
    }

    /// Read access to the draft
    pub fn draft(&self) -> &QuoteDraft {
        &self.draft
    }

    /// Open the wizard with a fresh draft; no-op if already open
    pub fn open(&mut self) {
        if self.is_open() {
            return;
        }
        self.draft = QuoteDraft::default();
        self.state = WizardState::Open(WizardStep::ClientInfo);
    }

    /// Discard the draft entirely and close the wizard
    pub fn cancel(&mut self) {
        self.draft = QuoteDraft::default();
        self.state = WizardState::Closed;
    }

    /// Whether the current step's gate is satisfied
    pub fn can_advance(&self) -> bool {
        match self.state {
            WizardState::Open(WizardStep::ClientInfo) => self.draft.client_info_complete(),
            WizardState::Open(WizardStep::Items) => self.draft.has_items(),
            WizardState::Open(WizardStep::Review) | WizardState::Closed => false,
        }
    }

    /// Move to the next step
    ///
    /// Silent no-op at the review step, when closed, or when the current
    /// step's gate condition is unmet.
    pub fn advance(&mut self) {
        if !self.can_advance() {
            return;
        }
        if let WizardState::Open(step) = self.state {
            if let Some(next) = step.next() {
                self.state = WizardState::Open(next);
            }
        }
    }

    /// Move to the previous step; no-op at step 1 or when closed
    pub fn retreat(&mut self) {
        if let WizardState::Open(step) = self.state {
            if let Some(prev) = step.prev() {
                self.state = WizardState::Open(prev);
            }
        }
    }

    // -- Scalar draft fields (no validation beyond type; always succeed) --

    /// Set the client name
    pub fn set_client_name(&mut self, value: impl Into<String>) {
        self.draft.client_name = value.into();
    }

    /// Set the client tax id
    pub fn set_client_tax_id(&mut self, value: impl Into<String>) {
        self.draft.client_tax_id = value.into();
    }

    /// Set the service description
    pub fn set_service_description(&mut self, value: impl Into<String>) {
        self.draft.service_description = value.into();
    }

    /// Set the execution deadline text
    pub fn set_execution_time(&mut self, value: impl Into<String>) {
        self.draft.execution_time = value.into();
    }

    /// Set the payment terms text
    pub fn set_payment_terms(&mut self, value: impl Into<String>) {
        self.draft.payment_terms = value.into();
    }

    /// Set the validity date
    pub fn set_validity(&mut self, value: Option<NaiveDate>) {
        self.draft.validity = value;
    }

    /// Set the labor cost
    pub fn set_labor_cost(&mut self, value: Money) {
        self.draft.labor_cost = value;
    }

    /// Set the discount
    pub fn set_discount(&mut self, value: Money) {
        self.draft.discount = value;
    }

    // -- Line-item editor --

    /// Append an empty line item; always succeeds
    pub fn add_item(&mut self) {
        self.draft.items.push(LineItem::new());
    }

    /// Remove the item at `index`, preserving the order of the rest;
    /// no-op when out of bounds
    pub fn remove_item(&mut self, index: usize) {
        if index < self.draft.items.len() {
            self.draft.items.remove(index);
        }
    }

    /// Set an item's description; no-op when out of bounds
    pub fn set_item_description(&mut self, index: usize, value: impl Into<String>) {
        if let Some(item) = self.draft.items.get_mut(index) {
            item.set_description(value);
        }
    }

    /// Set an item's unit label; no-op when out of bounds
    pub fn set_item_unit(&mut self, index: usize, value: impl Into<String>) {
        if let Some(item) = self.draft.items.get_mut(index) {
            item.set_unit(value);
        }
    }

    /// Set an item's quantity, recomputing its total; no-op when out of
    /// bounds
    pub fn set_item_quantity(&mut self, index: usize, quantity: f64) {
        if let Some(item) = self.draft.items.get_mut(index) {
            item.set_quantity(quantity);
        }
    }

    /// Set an item's unit price, recomputing its total; no-op when out of
    /// bounds
    pub fn set_item_unit_price(&mut self, index: usize, unit_price: Money) {
        if let Some(item) = self.draft.items.get_mut(index) {
            item.set_unit_price(unit_price);
        }
    }

    /// Populate the item at `index` from a catalog material, keeping the
    /// item's current quantity
    ///
    /// A lookup miss (or out-of-bounds index) leaves the item unchanged and
    /// returns false.
    pub fn select_material(
        &mut self,
        index: usize,
        material_id: MaterialId,
        catalog: &MaterialCatalog,
    ) -> bool {
        let Some(item) = self.draft.items.get_mut(index) else {
            return false;
        };
        let Some(material) = catalog.get(material_id) else {
            debug!("material {} not in catalog, item {} unchanged", material_id, index);
            return false;
        };

        item.apply_material(
            material.id,
            &material.description,
            &material.unit,
            material.price,
        );
        true
    }

    /// Derived totals for the current draft, recomputed fresh on every call
    pub fn totals(&self) -> QuoteTotals {
        calculate_totals(&self.draft.items, self.draft.labor_cost, self.draft.discount)
    }

    // -- Submission handler --

    /// Finalize the draft into a pending `Quote` and prepend it to the
    /// repository
    ///
    /// Both step gates are re-checked here rather than trusted from the UI.
    /// On success the wizard is always reset to closed.
    pub fn submit(
        &mut self,
        repo: &mut dyn QuoteRepository,
        today: NaiveDate,
    ) -> QuotedeskResult<Quote> {
        if !self.is_open() {
            return Err(QuotedeskError::Quote("no draft in progress".into()));
        }
        if !self.draft.client_info_complete() {
            return Err(QuotedeskError::Validation(
                "client name and service description are required".into(),
            ));
        }
        if !self.draft.has_items() {
            return Err(QuotedeskError::Validation(
                "a quote needs at least one line item".into(),
            ));
        }

        let totals = self.totals();
        let quote = Quote {
            number: repo.next_number(),
            client: ClientInfo {
                name: self.draft.client_name.clone(),
                tax_id: self.draft.client_tax_id.clone(),
            },
            technician: None,
            description: self.draft.service_description.clone(),
            items: self.draft.items.clone(),
            materials_cost: totals.materials_total,
            labor_cost: self.draft.labor_cost,
            discount: self.draft.discount,
            total_value: totals.total,
            status: QuoteStatus::Pending,
            rejection_reason: None,
            created_at: today,
            validity: self.draft.validity,
            execution_time: self.draft.execution_time.clone(),
            payment_terms: self.draft.payment_terms.clone(),
        };

        info!("submitting quote {} for {}", quote.number, quote.client.name);
        repo.prepend(quote.clone());
        self.cancel();

        Ok(quote)
    }
}

impl Default for QuoteWizard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::QuoteNumber;
    use crate::store::{seed, InMemoryQuoteStore};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 1).unwrap()
    }

    fn open_wizard() -> QuoteWizard {
        let mut wizard = QuoteWizard::new();
        wizard.open();
        wizard
    }

    /// Wizard with step-1 fields filled and one priced item
    fn filled_wizard() -> QuoteWizard {
        let mut wizard = open_wizard();
        wizard.set_client_name("ABC Enterprises Ltd");
        wizard.set_service_description("Structured network installation");
        wizard.add_item();
        wizard.set_item_description(0, "Cat6 Network Cable - 305m");
        wizard.set_item_unit_price(0, Money::from_cents(63000));
        wizard.set_item_quantity(0, 2.0);
        wizard
    }

    #[test]
    fn test_starts_closed() {
        let wizard = QuoteWizard::new();
        assert_eq!(wizard.state(), WizardState::Closed);
        assert!(wizard.step().is_none());
    }

    #[test]
    fn test_open_starts_at_step_one() {
        let wizard = open_wizard();
        assert_eq!(wizard.step(), Some(WizardStep::ClientInfo));
        assert_eq!(wizard.step().unwrap().number(), 1);
    }

    #[test]
    fn test_advance_blocked_without_client_info() {
        let mut wizard = open_wizard();
        wizard.advance();
        assert_eq!(wizard.step(), Some(WizardStep::ClientInfo));

        // Name alone is not enough
        wizard.set_client_name("ABC Enterprises Ltd");
        wizard.advance();
        assert_eq!(wizard.step(), Some(WizardStep::ClientInfo));

        // Whitespace does not satisfy the gate
        wizard.set_service_description("   ");
        wizard.advance();
        assert_eq!(wizard.step(), Some(WizardStep::ClientInfo));

        wizard.set_service_description("Install switches");
        wizard.advance();
        assert_eq!(wizard.step(), Some(WizardStep::Items));
    }

    #[test]
    fn test_advance_blocked_without_items() {
        let mut wizard = open_wizard();
        wizard.set_client_name("ABC");
        wizard.set_service_description("Service");
        wizard.advance();
        assert_eq!(wizard.step(), Some(WizardStep::Items));

        wizard.advance();
        assert_eq!(wizard.step(), Some(WizardStep::Items));

        wizard.add_item();
        wizard.advance();
        assert_eq!(wizard.step(), Some(WizardStep::Review));
    }

    #[test]
    fn test_advance_noop_at_review() {
        let mut wizard = filled_wizard();
        wizard.advance();
        wizard.advance();
        assert_eq!(wizard.step(), Some(WizardStep::Review));
        wizard.advance();
        assert_eq!(wizard.step(), Some(WizardStep::Review));
    }

    #[test]
    fn test_retreat() {
        let mut wizard = filled_wizard();
        wizard.advance();
        assert_eq!(wizard.step(), Some(WizardStep::Items));
        wizard.retreat();
        assert_eq!(wizard.step(), Some(WizardStep::ClientInfo));
        // No-op at step 1
        wizard.retreat();
        assert_eq!(wizard.step(), Some(WizardStep::ClientInfo));
    }

    #[test]
    fn test_cancel_discards_draft() {
        let mut wizard = filled_wizard();
        wizard.set_labor_cost(Money::from_cents(625000));
        wizard.cancel();
        assert_eq!(wizard.state(), WizardState::Closed);

        wizard.open();
        let draft = wizard.draft();
        assert_eq!(draft.client_name, "");
        assert_eq!(draft.service_description, "");
        assert!(draft.items.is_empty());
        assert_eq!(draft.labor_cost, Money::zero());
        assert_eq!(draft.discount, Money::zero());
    }

    #[test]
    fn test_open_while_open_keeps_draft() {
        let mut wizard = filled_wizard();
        wizard.open();
        assert_eq!(wizard.draft().client_name, "ABC Enterprises Ltd");
        assert_eq!(wizard.draft().items.len(), 1);
    }

    #[test]
    fn test_add_item_defaults() {
        let mut wizard = open_wizard();
        wizard.add_item();
        let item = &wizard.draft().items[0];
        assert_eq!(item.description, "");
        assert_eq!(item.quantity, 1.0);
        assert_eq!(item.unit, "unit");
        assert_eq!(item.unit_price, Money::zero());
        assert_eq!(item.total(), Money::zero());
    }

    #[test]
    fn test_item_total_consistent_after_every_mutation() {
        let mut wizard = open_wizard();
        wizard.add_item();
        wizard.add_item();

        wizard.set_item_unit_price(0, Money::from_cents(63000));
        wizard.set_item_quantity(0, 2.0);
        wizard.set_item_unit_price(1, Money::from_cents(420));
        wizard.set_item_quantity(1, 100.0);

        for item in &wizard.draft().items {
            assert_eq!(item.total(), item.unit_price.scale(item.quantity));
        }

        wizard.set_item_quantity(0, 5.0);
        assert_eq!(wizard.draft().items[0].total().cents(), 5 * 63000);

        wizard.remove_item(0);
        assert_eq!(wizard.draft().items.len(), 1);
        assert_eq!(wizard.draft().items[0].total().cents(), 42000);
    }

    #[test]
    fn test_item_mutations_out_of_bounds_are_noops() {
        let mut wizard = open_wizard();
        wizard.add_item();

        wizard.set_item_quantity(5, 10.0);
        wizard.set_item_unit_price(5, Money::from_cents(100));
        wizard.set_item_description(5, "ghost");
        wizard.remove_item(5);

        assert_eq!(wizard.draft().items.len(), 1);
        assert_eq!(wizard.draft().items[0].quantity, 1.0);
        assert_eq!(wizard.draft().items[0].total(), Money::zero());
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut wizard = open_wizard();
        for i in 0..3 {
            wizard.add_item();
            wizard.set_item_description(i, format!("item {}", i));
        }
        wizard.remove_item(1);
        let descriptions: Vec<&str> = wizard
            .draft()
            .items
            .iter()
            .map(|i| i.description.as_str())
            .collect();
        assert_eq!(descriptions, vec!["item 0", "item 2"]);
    }

    #[test]
    fn test_select_material_overwrites_item() {
        let catalog = seed::material_catalog();
        let mut wizard = open_wizard();
        wizard.add_item();
        wizard.set_item_quantity(0, 2.0);

        assert!(wizard.select_material(0, MaterialId::new(1), &catalog));
        let item = &wizard.draft().items[0];
        assert_eq!(item.material_id, Some(MaterialId::new(1)));
        assert_eq!(item.description, "Cat6 Network Cable - 305m");
        assert_eq!(item.unit, "Roll");
        assert_eq!(item.unit_price.cents(), 63000);
        // Quantity is preserved and the total recomputed with it
        assert_eq!(item.quantity, 2.0);
        assert_eq!(item.total().cents(), 126000);
    }

    #[test]
    fn test_select_material_miss_leaves_item_unchanged() {
        let catalog = seed::material_catalog();
        let mut wizard = open_wizard();
        wizard.add_item();
        wizard.set_item_description(0, "hand-typed row");
        wizard.set_item_unit_price(0, Money::from_cents(999));

        assert!(!wizard.select_material(0, MaterialId::new(999), &catalog));
        let item = &wizard.draft().items[0];
        assert_eq!(item.description, "hand-typed row");
        assert_eq!(item.unit_price.cents(), 999);
        assert!(item.material_id.is_none());
    }

    #[test]
    fn test_totals_scenario() {
        let mut wizard = open_wizard();
        wizard.add_item();
        wizard.set_item_unit_price(0, Money::from_cents(63000));
        wizard.set_item_quantity(0, 2.0);
        wizard.add_item();
        wizard.set_item_unit_price(1, Money::from_cents(420));
        wizard.set_item_quantity(1, 100.0);
        wizard.set_labor_cost(Money::from_cents(625000));

        let totals = wizard.totals();
        assert_eq!(totals.materials_total.cents(), 168000);
        assert_eq!(totals.total.cents(), 793000);
    }

    #[test]
    fn test_submit_allocates_third_ordinal_on_list_of_two() {
        let seeded = seed::quote_store();
        let two: Vec<_> = seeded.list()[..2].to_vec();
        let mut store = InMemoryQuoteStore::with_quotes(two);

        let mut wizard = filled_wizard();
        wizard.set_labor_cost(Money::from_cents(625000));
        let quote = wizard.submit(&mut store, today()).unwrap();

        assert_eq!(quote.number, QuoteNumber::new(3));
        assert_eq!(quote.number.to_string(), "QTE-003");
        assert_eq!(quote.status, QuoteStatus::Pending);
        assert_eq!(quote.created_at, today());

        // List grew to three with the new record first
        assert_eq!(store.list().len(), 3);
        assert_eq!(store.list()[0].number, QuoteNumber::new(3));

        // Wizard reset to closed with a clean draft
        assert_eq!(wizard.state(), WizardState::Closed);
        wizard.open();
        assert!(wizard.draft().items.is_empty());
    }

    #[test]
    fn test_submit_total_matches_calculator() {
        let mut store = InMemoryQuoteStore::new();
        let mut wizard = filled_wizard();
        wizard.set_labor_cost(Money::from_cents(625000));
        wizard.set_discount(Money::from_cents(1000));

        let expected = wizard.totals().total;
        let quote = wizard.submit(&mut store, today()).unwrap();
        assert_eq!(quote.total_value, expected);
        assert_eq!(quote.materials_cost.cents(), 126000);
    }

    #[test]
    fn test_submit_rechecks_gates() {
        let mut store = InMemoryQuoteStore::new();

        // Missing client info
        let mut wizard = open_wizard();
        wizard.add_item();
        let err = wizard.submit(&mut store, today()).unwrap_err();
        assert!(err.is_validation());
        assert!(wizard.is_open());

        // Missing items
        let mut wizard = open_wizard();
        wizard.set_client_name("ABC");
        wizard.set_service_description("Service");
        let err = wizard.submit(&mut store, today()).unwrap_err();
        assert!(err.is_validation());
        assert!(store.list().is_empty());
    }

    #[test]
    fn test_submit_when_closed_fails() {
        let mut store = InMemoryQuoteStore::new();
        let mut wizard = QuoteWizard::new();
        assert!(wizard.submit(&mut store, today()).is_err());
    }
}
