//! Pledges and donations.

#[cfg(test)]
#[path = "contributions_test.rs"]
mod contributions_test;

use leptos::prelude::*;

use crate::components::notice_line::NoticeLine;
use crate::net::api;
use crate::net::types::{Donation, NewDonation, NewPledge, Pledge};
use crate::util::form::{FormNotice, optional, required};
use crate::util::money::{format_amount, parse_amount};
use crate::util::task::{load, spawn};

fn validate_pledge(amount: &str, purpose: &str, fulfil_by: &str) -> Result<NewPledge, &'static str> {
    let amount = parse_amount(amount)?;
    let purpose = required(purpose, "Enter what the pledge is for.")?;
    let fulfil_by = required(fulfil_by, "Choose a fulfilment date.")?;
    Ok(NewPledge { amount, purpose, fulfil_by })
}

fn validate_donation(amount: &str, cause: &str, note: &str) -> Result<NewDonation, &'static str> {
    let amount = parse_amount(amount)?;
    let cause = required(cause, "Enter a cause.")?;
    Ok(NewDonation { amount, cause, note: optional(note) })
}

#[component]
fn PledgeForm(pledges: RwSignal<Vec<Pledge>>) -> impl IntoView {
    let amount = RwSignal::new(String::new());
    let purpose = RwSignal::new(String::new());
    let fulfil_by = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let notice = RwSignal::new(None::<FormNotice>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let body = match validate_pledge(&amount.get_untracked(), &purpose.get_untracked(), &fulfil_by.get_untracked()) {
            Ok(body) => body,
            Err(msg) => {
                notice.set(Some(FormNotice::error(msg)));
                return;
            }
        };
        busy.set(true);
        notice.set(None);
        spawn(async move {
            match api::make_pledge(&body).await {
                Ok(pledge) => {
                    pledges.try_update(|p| p.insert(0, pledge));
                    amount.try_set(String::new());
                    purpose.try_set(String::new());
                    fulfil_by.try_set(String::new());
                    notice.try_set(Some(FormNotice::success("Pledge recorded. Thank you!")));
                }
                Err(e) => {
                    notice.try_set(Some(FormNotice::from_api("Pledge", &e)));
                }
            }
            busy.try_set(false);
        });
    };

    view! {
        <form class="panel-form" on:submit=on_submit>
            <h2>"Make a pledge"</h2>
            <input
                type="text"
                inputmode="decimal"
                placeholder="Amount"
                prop:value=move || amount.get()
                on:input=move |ev| amount.set(event_target_value(&ev))
            />
            <input
                type="text"
                placeholder="Purpose"
                prop:value=move || purpose.get()
                on:input=move |ev| purpose.set(event_target_value(&ev))
            />
            <input
                type="date"
                prop:value=move || fulfil_by.get()
                on:input=move |ev| fulfil_by.set(event_target_value(&ev))
            />
            <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                "Pledge"
            </button>
            <NoticeLine notice=notice/>
        </form>
    }
}

#[component]
fn DonationForm(donations: RwSignal<Vec<Donation>>) -> impl IntoView {
    let amount = RwSignal::new(String::new());
    let cause = RwSignal::new(String::new());
    let note = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let notice = RwSignal::new(None::<FormNotice>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let body = match validate_donation(&amount.get_untracked(), &cause.get_untracked(), &note.get_untracked()) {
            Ok(body) => body,
            Err(msg) => {
                notice.set(Some(FormNotice::error(msg)));
                return;
            }
        };
        busy.set(true);
        notice.set(None);
        spawn(async move {
            match api::make_donation(&body).await {
                Ok(donation) => {
                    donations.try_update(|d| d.insert(0, donation));
                    amount.try_set(String::new());
                    cause.try_set(String::new());
                    note.try_set(String::new());
                    notice.try_set(Some(FormNotice::success("Donation received. Thank you!")));
                }
                Err(e) => {
                    notice.try_set(Some(FormNotice::from_api("Donation", &e)));
                }
            }
            busy.try_set(false);
        });
    };

    view! {
        <form class="panel-form" on:submit=on_submit>
            <h2>"Donate"</h2>
            <input
                type="text"
                inputmode="decimal"
                placeholder="Amount"
                prop:value=move || amount.get()
                on:input=move |ev| amount.set(event_target_value(&ev))
            />
            <input
                type="text"
                placeholder="Cause"
                prop:value=move || cause.get()
                on:input=move |ev| cause.set(event_target_value(&ev))
            />
            <textarea
                placeholder="Note (optional)"
                prop:value=move || note.get()
                on:input=move |ev| note.set(event_target_value(&ev))
            ></textarea>
            <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                "Donate"
            </button>
            <NoticeLine notice=notice/>
        </form>
    }
}

#[component]
pub fn ContributionsPage() -> impl IntoView {
    let pledges = RwSignal::new(Vec::<Pledge>::new());
    let donations = RwSignal::new(Vec::<Donation>::new());
    let list_notice = RwSignal::new(None::<FormNotice>);
    load("pledges", api::my_pledges(), pledges, list_notice);
    load("donations", api::my_donations(), donations, list_notice);

    view! {
        <section class="page contributions-page">
            <h1>"Contributions"</h1>
            <div class="form-columns">
                <PledgeForm pledges=pledges/>
                <DonationForm donations=donations/>
            </div>
            <NoticeLine notice=list_notice/>

            <h2>"My pledges"</h2>
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Purpose"</th>
                        <th>"Pledged"</th>
                        <th>"Fulfilled"</th>
                        <th>"By"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        pledges
                            .get()
                            .into_iter()
                            .map(|p| {
                                view! {
                                    <tr>
                                        <td>{p.purpose}</td>
                                        <td>{format_amount(p.amount)}</td>
                                        <td>{format_amount(p.amount_fulfilled)}</td>
                                        <td>{p.fulfil_by}</td>
                                    </tr>
                                }
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>

            <h2>"My donations"</h2>
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Date"</th>
                        <th>"Cause"</th>
                        <th>"Amount"</th>
                        <th>"Note"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        donations
                            .get()
                            .into_iter()
                            .map(|d| {
                                view! {
                                    <tr>
                                        <td>{d.created_at}</td>
                                        <td>{d.cause}</td>
                                        <td>{format_amount(d.amount)}</td>
                                        <td>{d.note.unwrap_or_default()}</td>
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
