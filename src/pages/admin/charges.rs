//! Dues and levies: existing charges plus the three-step create wizard.
//!
//! One component serves both `/admin/dues` and `/admin/levies`; `kind`
//! picks the API collection and the wording.

use leptos::prelude::*;

use crate::components::member_picker::MemberPicker;
use crate::components::notice_line::NoticeLine;
use crate::net::api;
use crate::net::types::{Charge, ChargeKind, Member};
use crate::state::charge_form::{Audience, ChargeDraft, ChargeStep};
use crate::util::form::FormNotice;
use crate::util::money::format_amount;
use crate::util::task::{load, spawn};

#[component]
fn DetailsStep(draft: RwSignal<ChargeDraft>) -> impl IntoView {
    view! {
        <div class="wizard__step">
            <input
                type="text"
                placeholder="Title"
                prop:value=move || draft.with(|d| d.title.clone())
                on:input=move |ev| draft.update(|d| d.title = event_target_value(&ev))
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
                prop:value=move || draft.with(|d| d.due_date.clone())
                on:input=move |ev| draft.update(|d| d.due_date = event_target_value(&ev))
            />
            <textarea
                placeholder="Description (optional)"
                prop:value=move || draft.with(|d| d.description.clone())
                on:input=move |ev| draft.update(|d| d.description = event_target_value(&ev))
            ></textarea>
        </div>
    }
}

#[component]
fn AudienceStep(draft: RwSignal<ChargeDraft>, members: RwSignal<Vec<Member>>) -> impl IntoView {
    let is_selected = move || draft.with(|d| d.audience == Audience::Selected);
    view! {
        <div class="wizard__step">
            <label>
                <input
                    type="radio"
                    name="audience"
                    prop:checked=move || !is_selected()
                    on:change=move |_| draft.update(|d| d.audience = Audience::AllMembers)
                />
                "All active members"
            </label>
            <label>
                <input
                    type="radio"
                    name="audience"
                    prop:checked=is_selected
                    on:change=move |_| draft.update(|d| d.audience = Audience::Selected)
                />
                "Selected members"
            </label>
            <Show when=is_selected>
                <MemberPicker draft=draft members=members/>
            </Show>
        </div>
    }
}

#[component]
fn ReviewStep(draft: RwSignal<ChargeDraft>, members: RwSignal<Vec<Member>>) -> impl IntoView {
    let recipients = move || {
        let roster = members.get();
        draft.with(|d| d.recipient_count(&roster))
    };
    view! {
        <dl class="wizard__review">
            <dt>"Title"</dt>
            <dd>{move || draft.with(|d| d.title.trim().to_owned())}</dd>
            <dt>"Amount"</dt>
            <dd>{move || draft.with(|d| d.amount.trim().to_owned())}</dd>
            <dt>"Due"</dt>
            <dd>{move || draft.with(|d| d.due_date.clone())}</dd>
            <dt>"Billed to"</dt>
            <dd>{move || format!("{} member(s)", recipients())}</dd>
        </dl>
    }
}

#[component]
pub fn ChargesPage(kind: ChargeKind) -> impl IntoView {
    let charges = RwSignal::new(Vec::<Charge>::new());
    let members = RwSignal::new(Vec::<Member>::new());
    let list_notice = RwSignal::new(None::<FormNotice>);
    load(kind.collection(), api::list_charges(kind), charges, list_notice);
    load("members", api::list_members(), members, list_notice);

    let draft = RwSignal::new(ChargeDraft::new(kind));
    let busy = RwSignal::new(false);
    let notice = RwSignal::new(None::<FormNotice>);
    let step = move || draft.with(|d| d.step);

    let on_next = move |_| {
        let mut result = Ok(());
        draft.update(|d| result = d.advance());
        notice.set(result.err().map(FormNotice::error));
    };

    let on_submit = move |_| {
        if busy.get_untracked() {
            return;
        }
        let body = match draft.with_untracked(ChargeDraft::to_request) {
            Ok(body) => body,
            Err(msg) => {
                notice.set(Some(FormNotice::error(msg)));
                return;
            }
        };
        busy.set(true);
        notice.set(None);
        spawn(async move {
            match api::create_charge(kind, &body).await {
                Ok(charge) => {
                    log::info!("created {} {}", kind.collection(), charge.id);
                    charges.try_update(|c| c.insert(0, charge));
                    draft.try_set(ChargeDraft::new(kind));
                    notice.try_set(Some(FormNotice::success(format!("{} created.", kind.label()))));
                }
                Err(e) => {
                    notice.try_set(Some(FormNotice::from_api(&format!("Creating {}", kind.label().to_lowercase()), &e)));
                }
            }
            busy.try_set(false);
        });
    };

    view! {
        <section class="page charges-page">
            <h1>{kind.plural_label()}</h1>
            <div class="wizard">
                <h2>{format!("New {}", kind.label().to_lowercase())}</h2>
                <ol class="wizard__steps">
                    <li class:wizard__steps--current=move || step() == ChargeStep::Details>"Details"</li>
                    <li class:wizard__steps--current=move || step() == ChargeStep::Members>"Members"</li>
                    <li class:wizard__steps--current=move || step() == ChargeStep::Review>"Review"</li>
                </ol>
                {move || match step() {
                    ChargeStep::Details => view! { <DetailsStep draft=draft/> }.into_any(),
                    ChargeStep::Members => view! { <AudienceStep draft=draft members=members/> }.into_any(),
                    ChargeStep::Review => view! { <ReviewStep draft=draft members=members/> }.into_any(),
                }}
                <div class="wizard__actions">
                    <Show when=move || step() != ChargeStep::Details>
                        <button class="btn" type="button" on:click=move |_| draft.update(ChargeDraft::back)>
                            "Back"
                        </button>
                    </Show>
                    <Show
                        when=move || step() == ChargeStep::Review
                        fallback=move || {
                            view! {
                                <button class="btn btn--primary" type="button" on:click=on_next>
                                    "Next"
                                </button>
                            }
                        }
                    >
                        <button class="btn btn--primary" type="button" disabled=move || busy.get() on:click=on_submit>
                            "Create"
                        </button>
                    </Show>
                </div>
                <NoticeLine notice=notice/>
            </div>

            <NoticeLine notice=list_notice/>
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Title"</th>
                        <th>"Amount"</th>
                        <th>"Due"</th>
                        <th>"Members"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        charges
                            .get()
                            .into_iter()
                            .map(|c| {
                                view! {
                                    <tr>
                                        <td>{c.title}</td>
                                        <td>{format_amount(c.amount)}</td>
                                        <td>{c.due_date}</td>
                                        <td>{c.member_count.map(|n| n.to_string()).unwrap_or_default()}</td>
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
