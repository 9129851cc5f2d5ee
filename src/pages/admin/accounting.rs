//! Income/expense ledger for administrators.

#[cfg(test)]
#[path = "accounting_test.rs"]
mod accounting_test;

use leptos::prelude::*;

use crate::components::notice_line::NoticeLine;
use crate::net::api;
use crate::net::types::{EntryKind, LedgerEntry, LedgerSummary, NewLedgerEntry};
use crate::util::form::{FormNotice, optional, required};
use crate::util::money::{format_amount, parse_amount};
use crate::util::task::{load, spawn};

#[derive(Clone, Debug, PartialEq, Eq)]
struct EntryDraft {
    kind: String,
    category: String,
    amount: String,
    entry_date: String,
    description: String,
}

impl Default for EntryDraft {
    fn default() -> Self {
        Self {
            kind: EntryKind::Income.as_str().to_owned(),
            category: String::new(),
            amount: String::new(),
            entry_date: String::new(),
            description: String::new(),
        }
    }
}

fn validate_entry(draft: &EntryDraft) -> Result<NewLedgerEntry, &'static str> {
    let kind = EntryKind::from_wire(&draft.kind).ok_or("Choose income or expense.")?;
    let category = required(&draft.category, "Enter a category.")?;
    let amount = parse_amount(&draft.amount)?;
    let entry_date = required(&draft.entry_date, "Choose the entry date.")?;
    Ok(NewLedgerEntry { kind, category, amount, entry_date, description: optional(&draft.description) })
}

/// Fold a newly recorded entry into the running totals.
fn apply_entry(summary: &mut LedgerSummary, entry: &LedgerEntry) {
    match entry.kind {
        EntryKind::Income => summary.total_income += entry.amount,
        EntryKind::Expense => summary.total_expense += entry.amount,
    }
    summary.balance = summary.total_income - summary.total_expense;
}

#[component]
pub fn AccountingPage() -> impl IntoView {
    let entries = RwSignal::new(Vec::<LedgerEntry>::new());
    let summary = RwSignal::new(LedgerSummary::default());
    let list_notice = RwSignal::new(None::<FormNotice>);
    load("ledger entries", api::list_ledger_entries(), entries, list_notice);
    load("ledger summary", api::fetch_ledger_summary(), summary, list_notice);

    let draft = RwSignal::new(EntryDraft::default());
    let busy = RwSignal::new(false);
    let notice = RwSignal::new(None::<FormNotice>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let body = match draft.with_untracked(validate_entry) {
            Ok(body) => body,
            Err(msg) => {
                notice.set(Some(FormNotice::error(msg)));
                return;
            }
        };
        busy.set(true);
        notice.set(None);
        spawn(async move {
            match api::record_ledger_entry(&body).await {
                Ok(entry) => {
                    summary.try_update(|s| apply_entry(s, &entry));
                    entries.try_update(|e| e.insert(0, entry));
                    draft.try_set(EntryDraft::default());
                    notice.try_set(Some(FormNotice::success("Entry recorded.")));
                }
                Err(e) => {
                    notice.try_set(Some(FormNotice::from_api("Recording entry", &e)));
                }
            }
            busy.try_set(false);
        });
    };

    view! {
        <section class="page accounting-page">
            <h1>"Accounting"</h1>
            <div class="stat-grid">
                <div class="stat-card">
                    <span class="stat-card__label">"Income"</span>
                    <span class="stat-card__value">{move || format_amount(summary.with(|s| s.total_income))}</span>
                </div>
                <div class="stat-card">
                    <span class="stat-card__label">"Expenses"</span>
                    <span class="stat-card__value">{move || format_amount(summary.with(|s| s.total_expense))}</span>
                </div>
                <div class="stat-card">
                    <span class="stat-card__label">"Balance"</span>
                    <span class="stat-card__value">{move || format_amount(summary.with(|s| s.balance))}</span>
                </div>
            </div>

            <form class="panel-form panel-form--inline" on:submit=on_submit>
                <h2>"Record an entry"</h2>
                <select
                    prop:value=move || draft.with(|d| d.kind.clone())
                    on:change=move |ev| draft.update(|d| d.kind = event_target_value(&ev))
                >
                    <option value=EntryKind::Income.as_str()>"Income"</option>
                    <option value=EntryKind::Expense.as_str()>"Expense"</option>
                </select>
                <input
                    type="text"
                    placeholder="Category"
                    prop:value=move || draft.with(|d| d.category.clone())
                    on:input=move |ev| draft.update(|d| d.category = event_target_value(&ev))
                />
                <input
                    type="text"
                    inputmode="decimal"
                    placeholder="Amount"
                    prop:value=move || draft.with(|d| d.amount.clone())
                    on:input=move |ev| draft.update(|d| d.amount = event_target_value(&ev))
                />
                <input
                    type="date"
                    prop:value=move || draft.with(|d| d.entry_date.clone())
                    on:input=move |ev| draft.update(|d| d.entry_date = event_target_value(&ev))
                />
                <input
                    type="text"
                    placeholder="Description (optional)"
                    prop:value=move || draft.with(|d| d.description.clone())
                    on:input=move |ev| draft.update(|d| d.description = event_target_value(&ev))
                />
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    "Record"
                </button>
                <NoticeLine notice=notice/>
            </form>

            <NoticeLine notice=list_notice/>
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Date"</th>
                        <th>"Kind"</th>
                        <th>"Category"</th>
                        <th>"Amount"</th>
                        <th>"Description"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        entries
                            .get()
                            .into_iter()
                            .map(|e| {
                                let sign = match e.kind {
                                    EntryKind::Income => "",
                                    EntryKind::Expense => "-",
                                };
                                view! {
                                    <tr>
                                        <td>{e.entry_date}</td>
                                        <td>{e.kind.as_str()}</td>
                                        <td>{e.category}</td>
                                        <td>{format!("{sign}{}", format_amount(e.amount))}</td>
                                        <td>{e.description.unwrap_or_default()}</td>
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
