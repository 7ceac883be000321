//! UI Components

use leptos::prelude::*;

/// Single cost figure card
#[component]
pub fn CostCard(
    label: &'static str,
    amount: String,
    #[prop(optional)] highlight: bool,
) -> impl IntoView {
    let class = if highlight { "card card-total" } else { "card" };

    view! {
        <div class=class>
            <p class="card-label">{label}</p>
            <p class="card-amount">{amount}</p>
        </div>
    }
}

/// Savings comparison card, shown only once unlocked
#[component]
pub fn SavingsCard(amount: String, monthly_note: String) -> impl IntoView {
    view! {
        <div class="card card-savings">
            <p class="card-label">"Annual Savings with Board Software"</p>
            <p class="card-amount">{amount}</p>
            <p class="card-note">{monthly_note}</p>
        </div>
    }
}
