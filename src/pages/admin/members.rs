//! Member administration: directory, enrolment, roles and status.
//!
//! Any admin may enrol members and toggle their status; only a super admin
//! sees the role selector.

#[cfg(test)]
#[path = "members_test.rs"]
mod members_test;

use leptos::prelude::*;

use crate::components::notice_line::NoticeLine;
use crate::net::api;
use crate::net::types::{Member, MemberStatus, NewMember, Role};
use crate::state::session::Session;
use crate::util::form::{FormNotice, required};
use crate::util::task::{load, spawn};

fn filter_members<'a>(members: &'a [Member], query: &str) -> Vec<&'a Member> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return members.iter().collect();
    }
    members
        .iter()
        .filter(|m| {
            m.full_name().to_lowercase().contains(&needle)
                || m.email.to_lowercase().contains(&needle)
                || m.member_number.as_deref().is_some_and(|n| n.to_lowercase().contains(&needle))
        })
        .collect()
}

fn can_assign_roles(role: Option<Role>) -> bool {
    role == Some(Role::SuperAdmin)
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct MemberDraft {
    first_name: String,
    last_name: String,
    email: String,
    phone: String,
}

fn validate_new_member(draft: &MemberDraft) -> Result<NewMember, &'static str> {
    Ok(NewMember {
        first_name: required(&draft.first_name, "Enter a first name.")?,
        last_name: required(&draft.last_name, "Enter a last name.")?,
        email: required(&draft.email, "Enter an email address.")?,
        phone: required(&draft.phone, "Enter a phone number.")?,
        role: Role::Member,
    })
}

fn toggled(status: MemberStatus) -> MemberStatus {
    match status {
        MemberStatus::Active => MemberStatus::Inactive,
        MemberStatus::Inactive => MemberStatus::Active,
    }
}

fn replace_member(members: &mut [Member], updated: Member) {
    if let Some(slot) = members.iter_mut().find(|m| m.id == updated.id) {
        *slot = updated;
    }
}

#[component]
fn NewMemberForm(members: RwSignal<Vec<Member>>) -> impl IntoView {
    let draft = RwSignal::new(MemberDraft::default());
    let busy = RwSignal::new(false);
    let notice = RwSignal::new(None::<FormNotice>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let body = match draft.with_untracked(validate_new_member) {
            Ok(body) => body,
            Err(msg) => {
                notice.set(Some(FormNotice::error(msg)));
                return;
            }
        };
        busy.set(true);
        notice.set(None);
        spawn(async move {
            match api::create_member(&body).await {
                Ok(member) => {
                    let name = member.full_name();
                    members.try_update(|m| m.push(member));
                    draft.try_set(MemberDraft::default());
                    notice.try_set(Some(FormNotice::success(format!("{name} added."))));
                }
                Err(e) => {
                    notice.try_set(Some(FormNotice::from_api("Adding member", &e)));
                }
            }
            busy.try_set(false);
        });
    };

    view! {
        <form class="panel-form panel-form--inline" on:submit=on_submit>
            <h2>"Add a member"</h2>
            <input
                type="text"
                placeholder="First name"
                prop:value=move || draft.with(|d| d.first_name.clone())
                on:input=move |ev| draft.update(|d| d.first_name = event_target_value(&ev))
            />
            <input
                type="text"
                placeholder="Last name"
                prop:value=move || draft.with(|d| d.last_name.clone())
                on:input=move |ev| draft.update(|d| d.last_name = event_target_value(&ev))
            />
            <input
                type="email"
                placeholder="Email"
                prop:value=move || draft.with(|d| d.email.clone())
                on:input=move |ev| draft.update(|d| d.email = event_target_value(&ev))
            />
            <input
                type="tel"
                placeholder="Phone"
                prop:value=move || draft.with(|d| d.phone.clone())
                on:input=move |ev| draft.update(|d| d.phone = event_target_value(&ev))
            />
            <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                "Add"
            </button>
            <NoticeLine notice=notice/>
        </form>
    }
}

#[component]
pub fn MembersPage() -> impl IntoView {
    let auth = expect_context::<Session>().state();
    let members = RwSignal::new(Vec::<Member>::new());
    let query = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let notice = RwSignal::new(None::<FormNotice>);
    load("members", api::list_members(), members, notice);

    let assign_roles = Memo::new(move |_| can_assign_roles(auth.get().role()));

    let change_role = move |member_id: String, role: Role| {
        busy.set(true);
        spawn(async move {
            match api::update_member_role(&member_id, role).await {
                Ok(member) => {
                    members.try_update(|m| replace_member(m, member));
                    notice.try_set(Some(FormNotice::success("Role updated.")));
                }
                Err(e) => {
                    notice.try_set(Some(FormNotice::from_api("Role change", &e)));
                }
            }
            busy.try_set(false);
        });
    };

    let toggle_status = move |member_id: String, status: MemberStatus| {
        busy.set(true);
        spawn(async move {
            match api::update_member_status(&member_id, toggled(status)).await {
                Ok(member) => {
                    members.try_update(|m| replace_member(m, member));
                }
                Err(e) => {
                    notice.try_set(Some(FormNotice::from_api("Status change", &e)));
                }
            }
            busy.try_set(false);
        });
    };

    let rows = move || {
        let list = members.get();
        let q = query.get();
        filter_members(&list, &q)
            .into_iter()
            .map(|m| {
                let role_id = m.id.clone();
                let status_id = m.id.clone();
                let status = m.status;
                let current_role = m.role;
                let role_cell = if assign_roles.get() {
                    view! {
                        <select
                            disabled=move || busy.get()
                            on:change=move |ev| {
                                if let Some(role) = Role::from_wire(&event_target_value(&ev)) {
                                    change_role(role_id.clone(), role);
                                }
                            }
                        >
                            {Role::ALL
                                .into_iter()
                                .map(|r| {
                                    let is_current = r == current_role;
                                    view! { <option value=r.as_str() selected=is_current>{r.label()}</option> }
                                })
                                .collect_view()}
                        </select>
                    }
                    .into_any()
                } else {
                    view! { <span>{current_role.label()}</span> }.into_any()
                };
                let inactive = status == MemberStatus::Inactive;
                let toggle_label = match status {
                    MemberStatus::Active => "Deactivate",
                    MemberStatus::Inactive => "Activate",
                };
                view! {
                    <tr class:data-table__row--muted=inactive>
                        <td>{m.member_number.clone().unwrap_or_default()}</td>
                        <td>{m.full_name()}</td>
                        <td>{m.email.clone()}</td>
                        <td>{role_cell}</td>
                        <td>
                            <button
                                class="btn"
                                type="button"
                                disabled=move || busy.get()
                                on:click=move |_| toggle_status(status_id.clone(), status)
                            >
                                {toggle_label}
                            </button>
                        </td>
                    </tr>
                }
            })
            .collect_view()
    };

    view! {
        <section class="page members-page">
            <h1>"Members"</h1>
            <NewMemberForm members=members/>
            <NoticeLine notice=notice/>
            <input
                class="members-page__search"
                type="search"
                placeholder="Search by name, email or number"
                prop:value=move || query.get()
                on:input=move |ev| query.set(event_target_value(&ev))
            />
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"No."</th>
                        <th>"Name"</th>
                        <th>"Email"</th>
                        <th>"Role"</th>
                        <th>"Status"</th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        </section>
    }
}
