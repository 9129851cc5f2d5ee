//! Multi-step due/levy creation form.
//!
//! DESIGN
//! ======
//! `Details -> Members -> Review`. Each `advance` validates only the step
//! being left, so the admin sees one problem at a time. Member selection is
//! kept as a set of IDs and survives filtering and stepping back.

#[cfg(test)]
#[path = "charge_form_test.rs"]
mod charge_form_test;

use std::collections::BTreeSet;

use crate::net::types::{ChargeKind, Member, MemberStatus, NewCharge};
use crate::util::form::{optional, required};
use crate::util::money::parse_amount;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ChargeStep {
    #[default]
    Details,
    Members,
    Review,
}

/// Who a charge is billed to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Audience {
    #[default]
    AllMembers,
    Selected,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChargeDraft {
    pub kind: ChargeKind,
    pub step: ChargeStep,
    pub title: String,
    pub amount: String,
    pub due_date: String,
    pub description: String,
    pub audience: Audience,
    pub selected: BTreeSet<String>,
    pub member_filter: String,
}

impl ChargeDraft {
    pub fn new(kind: ChargeKind) -> Self {
        Self {
            kind,
            step: ChargeStep::Details,
            title: String::new(),
            amount: String::new(),
            due_date: String::new(),
            description: String::new(),
            audience: Audience::AllMembers,
            selected: BTreeSet::new(),
            member_filter: String::new(),
        }
    }

    /// Move to the next step after validating the current one.
    ///
    /// # Errors
    ///
    /// Returns the message for the first missing or invalid field.
    pub fn advance(&mut self) -> Result<(), &'static str> {
        match self.step {
            ChargeStep::Details => {
                self.validate_details()?;
                self.step = ChargeStep::Members;
            }
            ChargeStep::Members => {
                self.validate_audience()?;
                self.step = ChargeStep::Review;
            }
            ChargeStep::Review => {}
        }
        Ok(())
    }

    pub fn back(&mut self) {
        self.step = match self.step {
            ChargeStep::Details | ChargeStep::Members => ChargeStep::Details,
            ChargeStep::Review => ChargeStep::Members,
        };
    }

    pub fn toggle_member(&mut self, member_id: &str) {
        if !self.selected.remove(member_id) {
            self.selected.insert(member_id.to_owned());
        }
    }

    /// Add every member currently visible under the filter.
    pub fn select_visible(&mut self, members: &[Member]) {
        let ids: Vec<String> = self.visible_members(members).into_iter().map(|m| m.id.clone()).collect();
        self.selected.extend(ids);
    }

    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    /// Active members matching the filter by name, email or member number.
    pub fn visible_members<'a>(&self, members: &'a [Member]) -> Vec<&'a Member> {
        let needle = self.member_filter.trim().to_lowercase();
        members
            .iter()
            .filter(|m| m.status == MemberStatus::Active)
            .filter(|m| needle.is_empty() || member_matches(m, &needle))
            .collect()
    }

    /// Number of active members the charge will be billed to.
    pub fn recipient_count(&self, members: &[Member]) -> usize {
        match self.audience {
            Audience::AllMembers => members.iter().filter(|m| m.status == MemberStatus::Active).count(),
            Audience::Selected => members
                .iter()
                .filter(|m| m.status == MemberStatus::Active && self.selected.contains(&m.id))
                .count(),
        }
    }

    /// Build the create request from the whole draft.
    ///
    /// # Errors
    ///
    /// Returns the first validation message of any step.
    pub fn to_request(&self) -> Result<NewCharge, &'static str> {
        let (title, amount, due_date) = self.validate_details()?;
        self.validate_audience()?;
        let apply_to_all = self.audience == Audience::AllMembers;
        Ok(NewCharge {
            title,
            amount,
            due_date,
            description: optional(&self.description),
            apply_to_all,
            member_ids: if apply_to_all { Vec::new() } else { self.selected.iter().cloned().collect() },
        })
    }

    fn validate_details(&self) -> Result<(String, f64, String), &'static str> {
        let title = required(&self.title, "Enter a title.")?;
        let amount = parse_amount(&self.amount)?;
        let due_date = required(&self.due_date, "Choose a due date.")?;
        Ok((title, amount, due_date))
    }

    fn validate_audience(&self) -> Result<(), &'static str> {
        if self.audience == Audience::Selected && self.selected.is_empty() {
            return Err("Select at least one member.");
        }
        Ok(())
    }
}

fn member_matches(member: &Member, needle: &str) -> bool {
    member.full_name().to_lowercase().contains(needle)
        || member.email.to_lowercase().contains(needle)
        || member.member_number.as_deref().is_some_and(|n| n.to_lowercase().contains(needle))
}
