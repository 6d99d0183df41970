//! Donation intake form
//!
//! Step 1 of the workflow: donor identity plus the pledged amount. The
//! amount comes either from one of the preset buttons or from free text
//! that is parsed leniently.

use galang_types::Amount;
use thiserror::Error;

/// Preset donation amounts offered at intake, in whole Rupiah.
pub const PRESET_AMOUNTS: [u64; 3] = [25_000, 50_000, 100_000];

/// Intake guard failures, one per field.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Donor name is required
    #[error("Name is required")]
    EmptyName,
    /// WhatsApp number is required
    #[error("WhatsApp number is required")]
    EmptyWhatsapp,
    /// Email is required
    #[error("Email is required")]
    EmptyEmail,
    /// Amount must be above zero
    #[error("Donation amount must be greater than zero")]
    ZeroAmount,
}

/// Donor details collected in step 1.
///
/// Lives only in workflow memory; the service receives a copy when the
/// donation is created.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntakeForm {
    name: String,
    whatsapp: String,
    email: String,
    doa: String,
    amount: Amount,
    custom_amount: String,
}

impl IntakeForm {
    /// Empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the donor name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Set the donor WhatsApp number.
    pub fn set_whatsapp(&mut self, whatsapp: impl Into<String>) {
        self.whatsapp = whatsapp.into();
    }

    /// Set the donor email.
    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    /// Set the optional prayer or message.
    pub fn set_doa(&mut self, doa: impl Into<String>) {
        self.doa = doa.into();
    }

    /// Pick a preset amount, clearing any custom text.
    pub fn select_preset(&mut self, preset: u64) {
        self.amount = Amount::from(preset);
        self.custom_amount.clear();
    }

    /// Type into the custom amount field.
    ///
    /// Non-digit characters are ignored when resolving the amount; text
    /// without digits resolves to zero and will fail the intake guard.
    pub fn set_custom_amount(&mut self, text: impl Into<String>) {
        self.custom_amount = text.into();
        self.amount = Amount::from_loose_str(&self.custom_amount);
    }

    /// Donor name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Donor WhatsApp number.
    pub fn whatsapp(&self) -> &str {
        &self.whatsapp
    }

    /// Donor email.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Prayer or message, `None` when left empty.
    pub fn doa(&self) -> Option<&str> {
        if self.doa.trim().is_empty() {
            None
        } else {
            Some(self.doa.as_str())
        }
    }

    /// Resolved amount.
    pub fn amount(&self) -> Amount {
        self.amount
    }

    /// Raw text of the custom amount field.
    pub fn custom_amount(&self) -> &str {
        &self.custom_amount
    }

    /// Intake guard: every identity field filled and a positive amount.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if self.whatsapp.trim().is_empty() {
            return Err(ValidationError::EmptyWhatsapp);
        }
        if self.email.trim().is_empty() {
            return Err(ValidationError::EmptyEmail);
        }
        if self.amount.is_zero() {
            return Err(ValidationError::ZeroAmount);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> IntakeForm {
        let mut form = IntakeForm::new();
        form.set_name("Budi");
        form.set_whatsapp("081234567890");
        form.set_email("b@x.com");
        form.select_preset(100_000);
        form
    }

    #[test]
    fn test_preset_clears_custom_text() {
        let mut form = IntakeForm::new();
        form.set_custom_amount("Rp 75.000");
        assert_eq!(form.amount(), Amount::from(75_000));

        for preset in PRESET_AMOUNTS {
            form.select_preset(preset);
            assert_eq!(form.amount(), Amount::from(preset));
            assert_eq!(form.custom_amount(), "");
        }
    }

    #[test]
    fn test_custom_amount_parses_loosely() {
        let mut form = IntakeForm::new();
        form.set_custom_amount("Rp 50.000");
        assert_eq!(form.amount(), Amount::from(50_000));

        form.set_custom_amount("abc");
        assert_eq!(form.amount(), Amount::ZERO);

        form.set_custom_amount("");
        assert_eq!(form.amount(), Amount::ZERO);
    }

    #[test]
    fn test_guard_reports_first_missing_field() {
        let mut form = filled_form();
        assert_eq!(form.validate(), Ok(()));

        form.set_name("  ");
        assert_eq!(form.validate(), Err(ValidationError::EmptyName));

        let mut form = filled_form();
        form.set_whatsapp("");
        assert_eq!(form.validate(), Err(ValidationError::EmptyWhatsapp));

        let mut form = filled_form();
        form.set_email("");
        assert_eq!(form.validate(), Err(ValidationError::EmptyEmail));

        let mut form = filled_form();
        form.set_custom_amount("no digits");
        assert_eq!(form.validate(), Err(ValidationError::ZeroAmount));
    }

    #[test]
    fn test_empty_doa_is_none() {
        let mut form = filled_form();
        assert_eq!(form.doa(), None);
        form.set_doa("Semoga berkah");
        assert_eq!(form.doa(), Some("Semoga berkah"));
        form.set_doa("   ");
        assert_eq!(form.doa(), None);
    }
}
