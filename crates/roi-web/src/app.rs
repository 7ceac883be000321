//! Calculator Page
//!
//! Single-page app: four cost inputs, an explicit calculate trigger, and
//! the payment-gated savings comparison. All state lives in signals; the
//! one-time startup effect runs the access gate against localStorage and
//! the entry query string.

use leptos::prelude::*;

use roi_core::{calculate, format_usd, CalculationResult, Inputs};
use roi_payments::{bootstrap, CheckoutClient, CheckoutConfig};

use crate::browser::{self, LocalStorageAccess};
use crate::components::{CostCard, SavingsCard};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    let (inputs, set_inputs) = signal(Inputs::default());
    let (calculations, set_calculations) = signal(None::<CalculationResult>);
    let (has_access, set_has_access) = signal(false);
    let (loading, set_loading) = signal(false);
    let (_session_id, set_session_id) = signal(None::<String>);

    // One-time startup check: stored flag, then the completion marker.
    Effect::new(move |_| {
        let Some(store) = LocalStorageAccess::new() else {
            return;
        };
        match bootstrap(&store, &browser::current_query()) {
            Ok(startup) => {
                if startup.state.is_unlocked() {
                    set_has_access.set(true);
                }
                if let Some(sid) = startup.session_id {
                    set_session_id.set(Some(sid));
                }
                if startup.strip_marker {
                    browser::strip_query();
                }
            }
            Err(e) => leptos::logging::warn!("access check failed: {e}"),
        }
    });

    let calculate_roi = move |_| {
        set_calculations.set(Some(calculate(&inputs.get(), has_access.get())));
    };

    let handle_checkout = move |_| {
        if loading.get() {
            return;
        }
        set_loading.set(true);

        leptos::task::spawn_local(async move {
            let client = CheckoutClient::new(CheckoutConfig::for_origin(&browser::origin()));
            match client.create_session().await {
                Ok(url) => browser::redirect(&url),
                Err(e) => {
                    browser::alert(e.user_message());
                    set_loading.set(false);
                }
            }
        });
    };

    view! {
        <div class="calculator">
            <header class="hero">
                <h1>"Meeting ROI Calculator"</h1>
                <p class="tagline">"for onboardmeetings.com"</p>
            </header>

            <div class="panels">
                <section class="panel">
                    <h2>"Your Inputs"</h2>

                    <div class="field">
                        <label>"Number of Admins"</label>
                        <input
                            type="number"
                            min="1"
                            prop:value=move || inputs.get().admins.to_string()
                            on:input=move |ev| {
                                set_inputs.update(|i| {
                                    i.admins = Inputs::parse_count(&event_target_value(&ev));
                                });
                            }
                        />
                    </div>

                    <div class="field">
                        <label>"Number of Directors"</label>
                        <input
                            type="number"
                            min="1"
                            prop:value=move || inputs.get().directors.to_string()
                            on:input=move |ev| {
                                set_inputs.update(|i| {
                                    i.directors = Inputs::parse_count(&event_target_value(&ev));
                                });
                            }
                        />
                    </div>

                    <div class="field field-currency">
                        <label>"Avg Annual Salary of Directors"</label>
                        <span class="currency-prefix">"$"</span>
                        <input
                            type="number"
                            min="0"
                            step="1000"
                            prop:value=move || inputs.get().avg_annual_salary.to_string()
                            on:input=move |ev| {
                                set_inputs.update(|i| {
                                    i.avg_annual_salary =
                                        Inputs::parse_currency(&event_target_value(&ev));
                                });
                            }
                        />
                    </div>

                    <div class="field">
                        <label>"Meetings Per Year"</label>
                        <input
                            type="number"
                            min="1"
                            prop:value=move || inputs.get().meetings_per_year.to_string()
                            on:input=move |ev| {
                                set_inputs.update(|i| {
                                    i.meetings_per_year =
                                        Inputs::parse_count(&event_target_value(&ev));
                                });
                            }
                        />
                    </div>

                    <Show when=move || has_access.get()>
                        <div class="field field-currency">
                            <label>"Your Monthly SaaS Cost"</label>
                            <span class="currency-prefix">"$"</span>
                            <input
                                type="number"
                                min="0"
                                step="100"
                                placeholder="Enter monthly cost"
                                prop:value=move || {
                                    inputs
                                        .get()
                                        .saas_monthly
                                        .map(|d| d.to_string())
                                        .unwrap_or_default()
                                }
                                on:input=move |ev| {
                                    set_inputs.update(|i| {
                                        i.saas_monthly = Inputs::parse_optional_currency(
                                            &event_target_value(&ev),
                                        );
                                    });
                                }
                            />
                        </div>
                    </Show>

                    <button class="btn btn-primary" on:click=calculate_roi>
                        "Calculate ROI"
                    </button>
                </section>

                <section class="panel">
                    <h2>"Annual Cost Analysis"</h2>

                    {move || match calculations.get() {
                        None => view! {
                            <p class="placeholder">
                                "Click \"Calculate ROI\" to see results"
                            </p>
                        }
                            .into_any(),
                        Some(result) => {
                            let monthly_note = format!(
                                "Monthly SaaS Cost: {}",
                                format_usd(inputs.get().saas_monthly.unwrap_or_default()),
                            );
                            view! {
                                <div class="results">
                                    <CostCard
                                        label="Admin Time Cost"
                                        amount=format_usd(result.total_admin_cost)
                                    />
                                    <CostCard
                                        label="Director Time Cost"
                                        amount=format_usd(result.total_director_cost)
                                    />
                                    <CostCard
                                        label="Total Annual Cost"
                                        amount=format_usd(result.total_annual_cost)
                                        highlight=true
                                    />

                                    {result
                                        .savings
                                        .map(|savings| view! {
                                            <SavingsCard
                                                amount=format_usd(savings)
                                                monthly_note=monthly_note.clone()
                                            />
                                        })}

                                    <Show when=move || !has_access.get()>
                                        <button
                                            class="btn btn-unlock"
                                            disabled=move || loading.get()
                                            on:click=handle_checkout
                                        >
                                            {move || {
                                                if loading.get() {
                                                    "Processing..."
                                                } else {
                                                    "Unlock Savings Calculator - $29"
                                                }
                                            }}
                                        </button>
                                    </Show>
                                </div>
                            }
                                .into_any()
                        }
                    }}
                </section>
            </div>

            <footer class="footer">
                <p>"Free basic calculations • One-time $29 payment for savings comparison"</p>
            </footer>
        </div>
    }
}
