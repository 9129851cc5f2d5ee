//! Member selection list for the due/levy wizard.

use leptos::prelude::*;

use crate::net::types::Member;
use crate::state::charge_form::ChargeDraft;

/// Filterable checkbox list bound to `draft.selected`.
#[component]
pub fn MemberPicker(draft: RwSignal<ChargeDraft>, members: RwSignal<Vec<Member>>) -> impl IntoView {
    let visible = move || {
        let members = members.get();
        let draft = draft.get();
        draft.visible_members(&members).into_iter().cloned().collect::<Vec<_>>()
    };
    let selected_count = move || draft.with(|d| d.selected.len());

    view! {
        <div class="member-picker">
            <div class="member-picker__toolbar">
                <input
                    class="member-picker__filter"
                    type="search"
                    placeholder="Filter by name, email or number"
                    prop:value=move || draft.with(|d| d.member_filter.clone())
                    on:input=move |ev| draft.update(|d| d.member_filter = event_target_value(&ev))
                />
                <button
                    class="btn"
                    type="button"
                    on:click=move |_| {
                        let roster = members.get_untracked();
                        draft.update(|d| d.select_visible(&roster));
                    }
                >
                    "Select visible"
                </button>
                <button class="btn" type="button" on:click=move |_| draft.update(ChargeDraft::clear_selection)>
                    "Clear"
                </button>
                <span class="member-picker__count">{move || format!("{} selected", selected_count())}</span>
            </div>
            <ul class="member-picker__list">
                {move || {
                    visible()
                        .into_iter()
                        .map(|m| {
                            let id = m.id.clone();
                            let checked_id = m.id.clone();
                            let number = m.member_number.clone().unwrap_or_default();
                            view! {
                                <li class="member-picker__item">
                                    <label>
                                        <input
                                            type="checkbox"
                                            prop:checked=move || draft.with(|d| d.selected.contains(&checked_id))
                                            on:change=move |_| draft.update(|d| d.toggle_member(&id))
                                        />
                                        <span>{m.full_name()}</span>
                                        <span class="member-picker__number">{number}</span>
                                    </label>
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ul>
        </div>
    }
}
