use crate::{Offer, OfferId};

/// The fixed booking flow, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Step {
    Postcode,
    WasteType,
    SelectSkip,
    PermitCheck,
    ChooseDate,
    Payment,
}

impl Step {
    pub const ALL: [Step; 6] = [
        Step::Postcode,
        Step::WasteType,
        Step::SelectSkip,
        Step::PermitCheck,
        Step::ChooseDate,
        Step::Payment,
    ];

    /// Where a new booking session starts.
    pub const START: Step = Step::SelectSkip;

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Step> {
        Self::ALL.get(index).copied()
    }

    pub fn id(self) -> &'static str {
        match self {
            Step::Postcode => "postcode",
            Step::WasteType => "waste-type",
            Step::SelectSkip => "select-skip",
            Step::PermitCheck => "permit-check",
            Step::ChooseDate => "choose-date",
            Step::Payment => "payment",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Step::Postcode => "Postcode",
            Step::WasteType => "Waste Type",
            Step::SelectSkip => "Select Skip",
            Step::PermitCheck => "Permit Check",
            Step::ChooseDate => "Choose Date",
            Step::Payment => "Payment",
        }
    }

    pub fn is_last(self) -> bool {
        self.index() + 1 == Self::ALL.len()
    }

    fn next(self) -> Step {
        Self::from_index(self.index() + 1).unwrap_or(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    Completed,
    Active,
    Pending,
}

impl StepStatus {
    pub fn of(step: Step, current: Step) -> Self {
        match step.index().cmp(&current.index()) {
            std::cmp::Ordering::Less => StepStatus::Completed,
            std::cmp::Ordering::Equal => StepStatus::Active,
            std::cmp::Ordering::Greater => StepStatus::Pending,
        }
    }
}

/// Reasons a selection was refused. Never shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    #[error("offer {0} is not in the current listing")]
    UnknownOffer(OfferId),
    #[error("offers are not ready yet")]
    NotReady,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardState {
    current_step: Step,
    selected_offer_id: Option<OfferId>,
    is_confirmation_open: bool,
}

impl Default for WizardState {
    fn default() -> Self {
        Self {
            current_step: Step::START,
            selected_offer_id: None,
            is_confirmation_open: false,
        }
    }
}

impl WizardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_step(&self) -> Step {
        self.current_step
    }

    pub fn current_step_index(&self) -> usize {
        self.current_step.index()
    }

    pub fn selected_offer_id(&self) -> Option<OfferId> {
        self.selected_offer_id
    }

    pub fn is_confirmation_open(&self) -> bool {
        self.is_confirmation_open
    }

    /// Looks up the selected offer in `offers`.
    pub fn selected_offer<'a>(&self, offers: &'a [Offer]) -> Option<&'a Offer> {
        let id = self.selected_offer_id?;
        offers.iter().find(|offer| offer.id == id)
    }

    /// Records `id` as the pick and opens the confirmation surface.
    ///
    /// `offers` is the ready listing, `None` while nothing has landed.
    pub fn select_offer(
        &mut self,
        id: OfferId,
        offers: Option<&[Offer]>,
    ) -> Result<(), SelectionError> {
        let offers = offers.ok_or(SelectionError::NotReady)?;
        if !offers.iter().any(|offer| offer.id == id) {
            return Err(SelectionError::UnknownOffer(id));
        }
        self.selected_offer_id = Some(id);
        self.is_confirmation_open = true;
        Ok(())
    }

    /// Accepts the current pick and moves one step forward.
    ///
    /// Returns `false` when nothing is selected, in which case nothing changes.
    /// On the last step only the confirmation surface closes.
    pub fn confirm_selection(&mut self) -> bool {
        if self.selected_offer_id.is_none() {
            return false;
        }
        self.is_confirmation_open = false;
        self.current_step = self.current_step.next();
        true
    }

    pub fn go_back(&mut self) {
        self.selected_offer_id = None;
        self.is_confirmation_open = false;
    }

    /// Closes the confirmation surface but keeps the pick highlighted.
    pub fn dismiss_confirmation(&mut self) {
        self.is_confirmation_open = false;
    }

    /// Drops a selection that no longer refers to a listed offer.
    pub(crate) fn reconcile(&mut self, offers: &[Offer]) -> bool {
        match self.selected_offer_id {
            Some(id) if !offers.iter().any(|offer| offer.id == id) => {
                self.go_back();
                true
            }
            _ => false,
        }
    }

    /// Fraction of the flow behind the active step, from 0 to 100.
    pub fn progress_percent(&self) -> u8 {
        let last = Step::ALL.len() - 1;
        ((self.current_step.index() * 100) / last) as u8
    }
}
