//! Admin home: association-wide totals.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::notice_line::NoticeLine;
use crate::net::api;
use crate::net::types::AdminDashboard;
use crate::util::form::FormNotice;
use crate::util::money::format_amount;
use crate::util::routes;
use crate::util::task::load;

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let summary = RwSignal::new(AdminDashboard::default());
    let notice = RwSignal::new(None::<FormNotice>);
    load("dashboard", api::fetch_admin_dashboard(), summary, notice);

    view! {
        <section class="page admin-dashboard">
            <h1>"Dashboard"</h1>
            <NoticeLine notice=notice/>
            <div class="stat-grid">
                <div class="stat-card">
                    <span class="stat-card__label">"Members"</span>
                    <span class="stat-card__value">
                        {move || summary.with(|s| format!("{} ({} active)", s.member_count, s.active_members))}
                    </span>
                </div>
                <div class="stat-card">
                    <span class="stat-card__label">"Loans awaiting review"</span>
                    <span class="stat-card__value">{move || summary.with(|s| s.pending_loans)}</span>
                    <A href=routes::ADMIN_LOANS>"Review"</A>
                </div>
                <div class="stat-card">
                    <span class="stat-card__label">"Total collections"</span>
                    <span class="stat-card__value">{move || format_amount(summary.with(|s| s.total_collections))}</span>
                </div>
                <div class="stat-card">
                    <span class="stat-card__label">"Ledger balance"</span>
                    <span class="stat-card__value">{move || format_amount(summary.with(|s| s.ledger_balance))}</span>
                </div>
            </div>
        </section>
    }
}
