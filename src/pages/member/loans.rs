//! Member loans: history and application form.

#[cfg(test)]
#[path = "loans_test.rs"]
mod loans_test;

use leptos::prelude::*;

use crate::components::notice_line::NoticeLine;
use crate::net::api;
use crate::net::types::{Loan, LoanApplication};
use crate::util::form::{FormNotice, required};
use crate::util::money::{format_amount, parse_amount};
use crate::util::task::{load, spawn};

const MAX_TERM_MONTHS: u32 = 60;

fn validate_application(amount: &str, term: &str, purpose: &str) -> Result<LoanApplication, &'static str> {
    let amount = parse_amount(amount)?;
    let term = term.trim();
    if term.is_empty() {
        return Err("Enter a repayment term.");
    }
    let term_months = match term.parse::<u32>() {
        Ok(months) if (1..=MAX_TERM_MONTHS).contains(&months) => months,
        _ => return Err("Term must be between 1 and 60 months."),
    };
    let purpose = required(purpose, "Enter the purpose of the loan.")?;
    Ok(LoanApplication { amount, term_months, purpose })
}

#[component]
pub fn LoansPage() -> impl IntoView {
    let loans = RwSignal::new(Vec::<Loan>::new());
    let list_notice = RwSignal::new(None::<FormNotice>);
    load("loans", api::my_loans(), loans, list_notice);

    let amount = RwSignal::new(String::new());
    let term = RwSignal::new(String::from("12"));
    let purpose = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let notice = RwSignal::new(None::<FormNotice>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let body = match validate_application(&amount.get_untracked(), &term.get_untracked(), &purpose.get_untracked()) {
            Ok(body) => body,
            Err(msg) => {
                notice.set(Some(FormNotice::error(msg)));
                return;
            }
        };
        busy.set(true);
        notice.set(None);
        spawn(async move {
            match api::apply_for_loan(&body).await {
                Ok(loan) => {
                    loans.try_update(|l| l.insert(0, loan));
                    amount.try_set(String::new());
                    purpose.try_set(String::new());
                    notice.try_set(Some(FormNotice::success("Application submitted.")));
                }
                Err(e) => {
                    notice.try_set(Some(FormNotice::from_api("Loan application", &e)));
                }
            }
            busy.try_set(false);
        });
    };

    view! {
        <section class="page loans-page">
            <h1>"Loans"</h1>
            <form class="panel-form" on:submit=on_submit>
                <h2>"Apply for a loan"</h2>
                <input
                    type="text"
                    inputmode="decimal"
                    placeholder="Amount"
                    prop:value=move || amount.get()
                    on:input=move |ev| amount.set(event_target_value(&ev))
                />
                <input
                    type="number"
                    min="1"
                    max="60"
                    placeholder="Term (months)"
                    prop:value=move || term.get()
                    on:input=move |ev| term.set(event_target_value(&ev))
                />
                <textarea
                    placeholder="Purpose"
                    prop:value=move || purpose.get()
                    on:input=move |ev| purpose.set(event_target_value(&ev))
                ></textarea>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    "Submit application"
                </button>
                <NoticeLine notice=notice/>
            </form>

            <h2>"My loans"</h2>
            <NoticeLine notice=list_notice/>
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Applied"</th>
                        <th>"Amount"</th>
                        <th>"Term"</th>
                        <th>"Status"</th>
                        <th>"Balance"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        loans
                            .get()
                            .into_iter()
                            .map(|loan| {
                                view! {
                                    <tr>
                                        <td>{loan.created_at}</td>
                                        <td>{format_amount(loan.amount)}</td>
                                        <td>{format!("{} mo", loan.term_months)}</td>
                                        <td>{loan.status.label()}</td>
                                        <td>{format_amount(loan.balance)}</td>
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
