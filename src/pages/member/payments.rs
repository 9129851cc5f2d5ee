//! Member payments: pay a loan, due, levy or pledge and see history.
//!
//! The reference list follows the selected payment kind and only offers items
//! that still have something owing.

#[cfg(test)]
#[path = "payments_test.rs"]
mod payments_test;

use leptos::prelude::*;

use crate::components::notice_line::NoticeLine;
use crate::net::api;
use crate::net::error::ApiError;
use crate::net::types::{ChargeKind, Loan, LoanStatus, MemberCharge, NewPayment, Payment, PaymentKind, PaymentMethod, Pledge};
use crate::util::form::FormNotice;
use crate::util::money::{format_amount, parse_amount};
use crate::util::task::{load, spawn};

/// Everything a member can pay against.
#[derive(Clone, Debug, Default, PartialEq)]
struct PaymentSources {
    loans: Vec<Loan>,
    dues: Vec<MemberCharge>,
    levies: Vec<MemberCharge>,
    pledges: Vec<Pledge>,
}

/// `(reference id, label)` pairs for the reference select.
fn reference_options(kind: PaymentKind, sources: &PaymentSources) -> Vec<(String, String)> {
    let charges = |list: &[MemberCharge]| {
        list.iter()
            .filter(|c| c.outstanding() > 0.0)
            .map(|c| (c.id.clone(), format!("{} ({} owing)", c.title, format_amount(c.outstanding()))))
            .collect()
    };
    match kind {
        PaymentKind::LoanRepayment => sources
            .loans
            .iter()
            .filter(|l| l.status == LoanStatus::Disbursed && l.balance > 0.0)
            .map(|l| (l.id.clone(), format!("{} ({} owing)", l.purpose, format_amount(l.balance))))
            .collect(),
        PaymentKind::Due => charges(&sources.dues),
        PaymentKind::Levy => charges(&sources.levies),
        PaymentKind::Pledge => sources
            .pledges
            .iter()
            .filter(|p| p.amount_fulfilled < p.amount)
            .map(|p| (p.id.clone(), format!("{} ({} left)", p.purpose, format_amount(p.amount - p.amount_fulfilled))))
            .collect(),
    }
}

fn validate_payment(kind: PaymentKind, reference: &str, amount: &str, method: &str) -> Result<NewPayment, &'static str> {
    let reference_id = reference.trim();
    if reference_id.is_empty() {
        return Err("Choose what you are paying for.");
    }
    let amount = parse_amount(amount)?;
    let method = PaymentMethod::from_wire(method).ok_or("Choose a payment method.")?;
    Ok(NewPayment { kind, reference_id: reference_id.to_owned(), amount, method })
}

fn load_sources(sources: RwSignal<PaymentSources>, notice: RwSignal<Option<FormNotice>>) {
    load(
        "payment options",
        async {
            Ok::<_, ApiError>(PaymentSources {
                loans: api::my_loans().await?,
                dues: api::my_charges(ChargeKind::Due).await?,
                levies: api::my_charges(ChargeKind::Levy).await?,
                pledges: api::my_pledges().await?,
            })
        },
        sources,
        notice,
    );
}

#[component]
pub fn PaymentsPage() -> impl IntoView {
    let history = RwSignal::new(Vec::<Payment>::new());
    let sources = RwSignal::new(PaymentSources::default());
    let list_notice = RwSignal::new(None::<FormNotice>);
    load("payments", api::my_payments(), history, list_notice);
    load_sources(sources, list_notice);

    let kind = RwSignal::new(PaymentKind::Due);
    let reference = RwSignal::new(String::new());
    let amount = RwSignal::new(String::new());
    let method = RwSignal::new(PaymentMethod::BankTransfer.as_str().to_owned());
    let busy = RwSignal::new(false);
    let notice = RwSignal::new(None::<FormNotice>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let body = match validate_payment(
            kind.get_untracked(),
            &reference.get_untracked(),
            &amount.get_untracked(),
            &method.get_untracked(),
        ) {
            Ok(body) => body,
            Err(msg) => {
                notice.set(Some(FormNotice::error(msg)));
                return;
            }
        };
        busy.set(true);
        notice.set(None);
        spawn(async move {
            match api::make_payment(&body).await {
                Ok(payment) => {
                    history.try_update(|h| h.insert(0, payment));
                    reference.try_set(String::new());
                    amount.try_set(String::new());
                    notice.try_set(Some(FormNotice::success("Payment recorded.")));
                    load_sources(sources, list_notice);
                }
                Err(e) => {
                    notice.try_set(Some(FormNotice::from_api("Payment", &e)));
                }
            }
            busy.try_set(false);
        });
    };

    view! {
        <section class="page payments-page">
            <h1>"Payments"</h1>
            <form class="panel-form" on:submit=on_submit>
                <h2>"Make a payment"</h2>
                <select
                    prop:value=move || kind.get().as_str()
                    on:change=move |ev| {
                        if let Some(k) = PaymentKind::from_wire(&event_target_value(&ev)) {
                            kind.set(k);
                            reference.set(String::new());
                        }
                    }
                >
                    {PaymentKind::ALL
                        .into_iter()
                        .map(|k| view! { <option value=k.as_str()>{k.label()}</option> })
                        .collect_view()}
                </select>
                <select
                    prop:value=move || reference.get()
                    on:change=move |ev| reference.set(event_target_value(&ev))
                >
                    <option value="">"Select..."</option>
                    {move || {
                        sources
                            .with(|s| reference_options(kind.get(), s))
                            .into_iter()
                            .map(|(id, label)| view! { <option value=id>{label}</option> })
                            .collect_view()
                    }}
                </select>
                <input
                    type="text"
                    inputmode="decimal"
                    placeholder="Amount"
                    prop:value=move || amount.get()
                    on:input=move |ev| amount.set(event_target_value(&ev))
                />
                <select prop:value=move || method.get() on:change=move |ev| method.set(event_target_value(&ev))>
                    {PaymentMethod::ALL
                        .into_iter()
                        .map(|m| view! { <option value=m.as_str()>{m.label()}</option> })
                        .collect_view()}
                </select>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    "Pay"
                </button>
                <NoticeLine notice=notice/>
            </form>

            <h2>"History"</h2>
            <NoticeLine notice=list_notice/>
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Date"</th>
                        <th>"Type"</th>
                        <th>"Method"</th>
                        <th>"Amount"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        history
                            .get()
                            .into_iter()
                            .map(|p| {
                                view! {
                                    <tr>
                                        <td>{p.created_at}</td>
                                        <td>{p.kind.label()}</td>
                                        <td>{p.method.label()}</td>
                                        <td>{format_amount(p.amount)}</td>
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
