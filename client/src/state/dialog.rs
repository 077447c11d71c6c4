//! Dialog state for entity create/edit/view/delete flows.
//!
//! DESIGN
//! ======
//! One tagged value replaces separate "form open", "view open", "delete open"
//! and "selected row" flags, so at most one dialog can be shown and every
//! open dialog that needs a row carries it.

#[cfg(test)]
#[path = "dialog_test.rs"]
mod dialog_test;

use crate::net::api::Mutation;
use crate::net::types::{Gate, GateDraft};
use crate::state::listing::{FetchTicket, FetchTrigger, ListState};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DialogState<T> {
    Closed,
    Creating,
    Editing(T),
    Viewing(T),
    ConfirmingDelete(T),
}

impl<T> Default for DialogState<T> {
    fn default() -> Self {
        Self::Closed
    }
}

impl<T> DialogState<T> {
    pub fn close(&mut self) {
        *self = Self::Closed;
    }
}

impl DialogState<Gate> {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Closed => "",
            Self::Creating => "Tambah Gerbang",
            Self::Editing(_) => "Edit Gerbang",
            Self::Viewing(_) => "Detail Gerbang",
            Self::ConfirmingDelete(_) => "Hapus Gerbang",
        }
    }

    /// Submit label for the form variants.
    pub fn submit_label(&self) -> &'static str {
        match self {
            Self::Editing(_) => "Update",
            _ => "Simpan",
        }
    }

    /// Initial form contents: empty for create, the row's values for edit.
    pub fn initial_form(&self) -> GateForm {
        match self {
            Self::Editing(gate) => GateForm::from(&GateDraft::from(gate)),
            _ => GateForm::from(&GateDraft::default()),
        }
    }

    /// The write this dialog confirms, given the current form contents.
    ///
    /// # Errors
    ///
    /// Returns `FormError` when the form does not validate or the dialog is
    /// not one that writes.
    pub fn mutation(&self, form: &GateForm) -> Result<Mutation, FormError> {
        match self {
            Self::Creating => Ok(Mutation::Create(form.validate()?)),
            Self::Editing(gate) => Ok(Mutation::Update { id: gate.id, draft: form.validate()? }),
            Self::ConfirmingDelete(gate) => Ok(Mutation::Delete { id: gate.id }),
            Self::Closed | Self::Viewing(_) => Err(FormError::NothingToSubmit),
        }
    }
}

/// Raw form inputs, kept as text until submit.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GateForm {
    pub branch_id: String,
    pub gate_name: String,
}

impl From<&GateDraft> for GateForm {
    fn from(draft: &GateDraft) -> Self {
        Self { branch_id: draft.branch_id.to_string(), gate_name: draft.gate_name.clone() }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("ID Cabang harus berupa angka")]
    InvalidBranchId,
    #[error("Nama Gerbang wajib diisi")]
    MissingGateName,
    #[error("nothing to submit")]
    NothingToSubmit,
}

impl GateForm {
    /// Required-field validation only: numeric branch id, non-empty name.
    ///
    /// # Errors
    ///
    /// Returns the first failing field.
    pub fn validate(&self) -> Result<GateDraft, FormError> {
        let branch_id = self.branch_id.trim().parse::<i64>().map_err(|_| FormError::InvalidBranchId)?;
        let gate_name = self.gate_name.trim();
        if gate_name.is_empty() {
            return Err(FormError::MissingGateName);
        }
        Ok(GateDraft { branch_id, gate_name: gate_name.to_owned() })
    }
}

/// Close the dialog after a successful write and issue the single refresh
/// of the current page.
pub fn complete_mutation<T, R>(dialog: &mut DialogState<T>, list: &mut ListState<R>) -> Option<FetchTicket> {
    dialog.close();
    list.begin_fetch(FetchTrigger::Mutation)
}
