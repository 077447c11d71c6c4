use super::*;

fn gate() -> Gate {
    Gate { id: 7, branch_id: 16, gate_name: "Kalihurip".to_owned(), branch_name: "Jakarta-Cikampek".to_owned() }
}

#[test]
fn default_dialog_is_closed() {
    assert_eq!(DialogState::<Gate>::default(), DialogState::Closed);
}

#[test]
fn close_returns_any_dialog_to_closed() {
    let mut dialog = DialogState::ConfirmingDelete(gate());
    dialog.close();
    assert_eq!(dialog, DialogState::Closed);
}

#[test]
fn titles_match_dialog_kind() {
    assert_eq!(DialogState::<Gate>::Creating.title(), "Tambah Gerbang");
    assert_eq!(DialogState::Editing(gate()).title(), "Edit Gerbang");
    assert_eq!(DialogState::Viewing(gate()).title(), "Detail Gerbang");
    assert_eq!(DialogState::ConfirmingDelete(gate()).title(), "Hapus Gerbang");
    assert_eq!(DialogState::Editing(gate()).submit_label(), "Update");
    assert_eq!(DialogState::<Gate>::Creating.submit_label(), "Simpan");
}

#[test]
fn create_form_starts_with_defaults() {
    let form = DialogState::<Gate>::Creating.initial_form();
    assert_eq!(form, GateForm { branch_id: "0".to_owned(), gate_name: String::new() });
}

#[test]
fn edit_form_is_prefilled() {
    let form = DialogState::Editing(gate()).initial_form();
    assert_eq!(form, GateForm { branch_id: "16".to_owned(), gate_name: "Kalihurip".to_owned() });
}

#[test]
fn create_submission_yields_exact_draft() {
    let form = GateForm { branch_id: "7".to_owned(), gate_name: "Gate A".to_owned() };
    let mutation = DialogState::<Gate>::Creating.mutation(&form).unwrap();
    assert_eq!(mutation, Mutation::Create(GateDraft { branch_id: 7, gate_name: "Gate A".to_owned() }));
}

#[test]
fn edit_submission_targets_row_id() {
    let form = GateForm { branch_id: "16".to_owned(), gate_name: "Kalihurip Utama".to_owned() };
    let mutation = DialogState::Editing(gate()).mutation(&form).unwrap();
    assert_eq!(
        mutation,
        Mutation::Update { id: 7, draft: GateDraft { branch_id: 16, gate_name: "Kalihurip Utama".to_owned() } }
    );
}

#[test]
fn delete_confirmation_ignores_form() {
    let mutation = DialogState::ConfirmingDelete(gate()).mutation(&GateForm::default()).unwrap();
    assert_eq!(mutation, Mutation::Delete { id: 7 });
}

#[test]
fn viewing_cannot_submit() {
    let form = GateForm { branch_id: "1".to_owned(), gate_name: "x".to_owned() };
    assert_eq!(DialogState::Viewing(gate()).mutation(&form), Err(FormError::NothingToSubmit));
}

#[test]
fn validation_requires_numeric_branch_and_name() {
    let bad_branch = GateForm { branch_id: "abc".to_owned(), gate_name: "A".to_owned() };
    assert_eq!(bad_branch.validate(), Err(FormError::InvalidBranchId));
    let blank_name = GateForm { branch_id: "1".to_owned(), gate_name: "  ".to_owned() };
    assert_eq!(blank_name.validate(), Err(FormError::MissingGateName));
}

#[test]
fn completed_mutation_closes_dialog_and_refetches_once() {
    let mut dialog = DialogState::Editing(gate());
    let mut list = ListState::<Gate>::new(5);
    let before = list.latest_seq();

    let ticket = complete_mutation(&mut dialog, &mut list).unwrap();

    assert_eq!(dialog, DialogState::Closed);
    assert_eq!(ticket.seq, before + 1);
    assert_eq!(list.latest_seq(), before + 1);
    assert_eq!(ticket.page, list.pagination.current_page);
}

#[test]
fn completed_mutation_refetches_even_after_failure() {
    let mut list = ListState::<Gate>::new(5);
    let ticket = list.begin_fetch(FetchTrigger::Mount).unwrap();
    list.apply_failure(ticket, "down".to_owned());

    let mut dialog = DialogState::<Gate>::Creating;
    assert!(complete_mutation(&mut dialog, &mut list).is_some());
}
