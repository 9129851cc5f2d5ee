//! Loan review queue for administrators.

#[cfg(test)]
#[path = "loans_test.rs"]
mod loans_test;

use leptos::prelude::*;

use crate::components::notice_line::NoticeLine;
use crate::net::api;
use crate::net::types::{Loan, LoanStatus, LoanStatusUpdate};
use crate::util::form::{FormNotice, optional};
use crate::util::money::format_amount;
use crate::util::task::{load, spawn};

/// Status changes an admin may make from `status`.
fn next_actions(status: LoanStatus) -> &'static [LoanStatus] {
    match status {
        LoanStatus::Pending => &[LoanStatus::Approved, LoanStatus::Rejected],
        LoanStatus::Approved => &[LoanStatus::Disbursed],
        LoanStatus::Rejected | LoanStatus::Disbursed | LoanStatus::Repaid => &[],
    }
}

fn action_label(target: LoanStatus) -> &'static str {
    match target {
        LoanStatus::Approved => "Approve",
        LoanStatus::Rejected => "Reject",
        LoanStatus::Disbursed => "Disburse",
        LoanStatus::Pending | LoanStatus::Repaid => target.label(),
    }
}

fn replace_loan(loans: &mut [Loan], updated: Loan) {
    if let Some(slot) = loans.iter_mut().find(|l| l.id == updated.id) {
        *slot = updated;
    }
}

#[component]
pub fn LoanReviewPage() -> impl IntoView {
    let loans = RwSignal::new(Vec::<Loan>::new());
    let notice = RwSignal::new(None::<FormNotice>);
    let note = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    load("loans", api::list_loans(), loans, notice);

    let decide = move |loan_id: String, status: LoanStatus| {
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        notice.set(None);
        let body = LoanStatusUpdate { status, note: optional(&note.get_untracked()) };
        spawn(async move {
            match api::update_loan_status(&loan_id, &body).await {
                Ok(loan) => {
                    log::info!("loan {} moved to {:?}", loan.id, loan.status);
                    loans.try_update(|l| replace_loan(l, loan));
                    note.try_set(String::new());
                    notice.try_set(Some(FormNotice::success(format!("Loan {}.", status.label().to_lowercase()))));
                }
                Err(e) => {
                    notice.try_set(Some(FormNotice::from_api("Loan update", &e)));
                }
            }
            busy.try_set(false);
        });
    };

    view! {
        <section class="page loan-review">
            <h1>"Loans"</h1>
            <NoticeLine notice=notice/>
            <input
                class="loan-review__note"
                type="text"
                placeholder="Note for the next decision (optional)"
                prop:value=move || note.get()
                on:input=move |ev| note.set(event_target_value(&ev))
            />
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Member"</th>
                        <th>"Amount"</th>
                        <th>"Term"</th>
                        <th>"Purpose"</th>
                        <th>"Status"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        loans
                            .get()
                            .into_iter()
                            .map(|loan| {
                                let actions = next_actions(loan.status)
                                    .iter()
                                    .map(|target| {
                                        let target = *target;
                                        let id = loan.id.clone();
                                        view! {
                                            <button
                                                class="btn"
                                                type="button"
                                                disabled=move || busy.get()
                                                on:click=move |_| decide(id.clone(), target)
                                            >
                                                {action_label(target)}
                                            </button>
                                        }
                                    })
                                    .collect_view();
                                view! {
                                    <tr>
                                        <td>{loan.member_name.clone().unwrap_or_else(|| loan.member_id.clone())}</td>
                                        <td>{format_amount(loan.amount)}</td>
                                        <td>{format!("{} mo", loan.term_months)}</td>
                                        <td>{loan.purpose.clone()}</td>
                                        <td>{loan.status.label()}</td>
                                        <td class="data-table__actions">{actions}</td>
                                    </tr>
                                }
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>
        </section>
    }
}
