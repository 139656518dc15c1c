//! Stages of the booking flow shown in the progress header.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// One named stage of the skip-hire booking flow, in flow order.
pub enum BookingStep {
    /// Postcode entry.
    Postcode,
    /// Waste type choice.
    WasteType,
    /// Skip size choice.
    SelectSkip,
    /// Road permit check.
    PermitCheck,
    /// Delivery date choice.
    ChooseDate,
    /// Payment.
    Payment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Where a stage stands relative to the current one.
pub enum StepStatus {
    /// Stage lies before the current one.
    Completed,
    /// Stage is the one on screen.
    Current,
    /// Stage lies after the current one.
    Upcoming,
}

impl BookingStep {
    /// All stages in flow order.
    pub const ALL: [Self; 6] = [
        Self::Postcode,
        Self::WasteType,
        Self::SelectSkip,
        Self::PermitCheck,
        Self::ChooseDate,
        Self::Payment,
    ];

    /// Display name of the stage.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Postcode => "Postcode",
            Self::WasteType => "Waste Type",
            Self::SelectSkip => "Select Skip",
            Self::PermitCheck => "Permit Check",
            Self::ChooseDate => "Choose Date",
            Self::Payment => "Payment",
        }
    }

    /// One-based position in the flow.
    #[must_use]
    pub const fn number(self) -> usize {
        self as usize + 1
    }

    /// Status of this stage while `current` is on screen.
    #[must_use]
    pub fn status(self, current: Self) -> StepStatus {
        match self.cmp(&current) {
            std::cmp::Ordering::Less => StepStatus::Completed,
            std::cmp::Ordering::Equal => StepStatus::Current,
            std::cmp::Ordering::Greater => StepStatus::Upcoming,
        }
    }
}

impl fmt::Display for BookingStep {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn six_stages_in_order() {
        let labels: Vec<_> = BookingStep::ALL.iter().map(|step| step.label()).collect();
        assert_eq!(
            labels,
            [
                "Postcode",
                "Waste Type",
                "Select Skip",
                "Permit Check",
                "Choose Date",
                "Payment"
            ]
        );
        assert_eq!(BookingStep::Payment.number(), 6);
    }

    #[test]
    fn status_relative_to_skip_selection() {
        let current = BookingStep::SelectSkip;
        assert_eq!(BookingStep::Postcode.status(current), StepStatus::Completed);
        assert_eq!(BookingStep::WasteType.status(current), StepStatus::Completed);
        assert_eq!(BookingStep::SelectSkip.status(current), StepStatus::Current);
        assert_eq!(BookingStep::PermitCheck.status(current), StepStatus::Upcoming);
        assert_eq!(BookingStep::Payment.status(current), StepStatus::Upcoming);
    }
}
