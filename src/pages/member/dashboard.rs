//! Member home: balances and recent payments.

use leptos::prelude::*;

use crate::components::notice_line::NoticeLine;
use crate::net::api;
use crate::net::types::MemberDashboard;
use crate::util::form::FormNotice;
use crate::util::money::format_amount;
use crate::util::task::load;

#[component]
pub fn MemberDashboardPage() -> impl IntoView {
    let summary = RwSignal::new(MemberDashboard::default());
    let notice = RwSignal::new(None::<FormNotice>);
    load("dashboard", api::fetch_member_dashboard(), summary, notice);

    let stat = move |label: &'static str, pick: fn(&MemberDashboard) -> f64| {
        view! {
            <div class="stat-card">
                <span class="stat-card__label">{label}</span>
                <span class="stat-card__value">{move || format_amount(summary.with(pick))}</span>
            </div>
        }
    };

    view! {
        <section class="page member-dashboard">
            <h1>"Overview"</h1>
            <NoticeLine notice=notice/>
            <div class="stat-grid">
                {stat("Outstanding dues", |s| s.outstanding_dues)}
                {stat("Outstanding levies", |s| s.outstanding_levies)}
                {stat("Loan balance", |s| s.active_loan_balance)}
                {stat("Total contributions", |s| s.total_contributions)}
            </div>
            <h2>"Recent payments"</h2>
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Date"</th>
                        <th>"Type"</th>
                        <th>"Amount"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        summary
                            .get()
                            .recent_payments
                            .into_iter()
                            .map(|p| {
                                view! {
                                    <tr>
                                        <td>{p.created_at}</td>
                                        <td>{p.kind.label()}</td>
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
