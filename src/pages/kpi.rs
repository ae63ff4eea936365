//! KPI dashboard: financial, project, and team figures behind a view
//! switcher.

use leptos::prelude::*;

use crate::components::protected::Protected;
use crate::state::kpi::{
    COMPLETION_BREAKDOWN, KpiView, MONTHLY_METRICS, TEAM_PERFORMANCE,
};

#[component]
pub fn KpiPage() -> impl IntoView {
    view! {
        <Protected>
            <Dashboard/>
        </Protected>
    }
}

#[component]
fn Dashboard() -> impl IntoView {
    let active = RwSignal::new(KpiView::default());

    let switcher = move || {
        KpiView::ALL
            .into_iter()
            .map(|tab| {
                let selected = move || active.get() == tab;
                view! {
                    <button
                        class="kpi-tab"
                        class=("kpi-tab--active", selected)
                        on:click=move |_| active.set(tab)
                    >
                        {tab.title()}
                    </button>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <div class="kpi-container">
            <h1>"KPI Dashboard"</h1>
            <div class="kpi-tabs">{switcher}</div>
            {move || match active.get() {
                KpiView::Financial => financial_view().into_any(),
                KpiView::Projects => projects_view().into_any(),
                KpiView::Team => team_view().into_any(),
            }}
        </div>
    }
}

fn financial_view() -> impl IntoView {
    view! {
        <section class="kpi-section">
            <h3>"Financial Performance"</h3>
            <p class="kpi-description">
                "Monthly revenue, expenses, and profit for the current year."
            </p>
            <table class="kpi-table">
                <thead>
                    <tr>
                        <th>"Month"</th>
                        <th>"Revenue"</th>
                        <th>"Expenses"</th>
                        <th>"Profit"</th>
                    </tr>
                </thead>
                <tbody>
                    {MONTHLY_METRICS
                        .into_iter()
                        .map(|m| {
                            let profit = m.profit();
                            view! {
                                <tr>
                                    <td>{m.month}</td>
                                    <td>{m.revenue}</td>
                                    <td>{m.expenses}</td>
                                    <td class=if profit < 0 { "kpi-loss" } else { "kpi-gain" }>
                                        {profit}
                                    </td>
                                </tr>
                            }
                        })
                        .collect::<Vec<_>>()}
                </tbody>
            </table>
        </section>
    }
}

fn projects_view() -> impl IntoView {
    view! {
        <section class="kpi-section">
            <h3>"Project Completion"</h3>
            <div class="kpi-tiles">
                {COMPLETION_BREAKDOWN
                    .into_iter()
                    .map(|slice| {
                        view! {
                            <div class="kpi-tile">
                                <span class="kpi-tile__value">{slice.share} "%"</span>
                                <span class="kpi-tile__label">{slice.label}</span>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}

fn team_view() -> impl IntoView {
    view! {
        <section class="kpi-section">
            <h3>"Team Performance"</h3>
            <table class="kpi-table">
                <thead>
                    <tr>
                        <th>"Team"</th>
                        <th>"Score"</th>
                    </tr>
                </thead>
                <tbody>
                    {TEAM_PERFORMANCE
                        .into_iter()
                        .map(|t| {
                            view! {
                                <tr>
                                    <td>{t.team}</td>
                                    <td>{t.performance}</td>
                                </tr>
                            }
                        })
                        .collect::<Vec<_>>()}
                </tbody>
            </table>
        </section>
    }
}
