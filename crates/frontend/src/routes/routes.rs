use crate::domain::a001_claim::ui::details::ClaimDetails;
use contracts::domain::a001_claim::aggregate::LineItem;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::hooks::use_params_map;
use leptos_router::path;

/// Standalone entry for `/claims/:claim_id`.
///
/// When embedded in a claims list, the list passes its own reload and
/// discount handlers instead of these logging defaults.
#[component]
fn ClaimDetailsRoute() -> impl IntoView {
    let params = use_params_map();
    let claim_id = Signal::derive(move || params.read().get("claim_id").unwrap_or_default());

    let request_claims = Callback::new(|_: ()| {
        log::debug!("Claims list refresh requested; no list mounted on this route");
    });
    let on_apply_discount = Callback::new(|item: LineItem| {
        log::warn!(
            "Apply discount requested for line item {} but no discount handler is configured",
            item.id
        );
    });

    view! {
        <ClaimDetails
            claim_id=claim_id
            request_claims=request_claims
            on_apply_discount=on_apply_discount
        />
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <main>
                <Routes fallback=|| view! { <div class="page">"Page not found"</div> }>
                    <Route path=path!("/claims/:claim_id") view=ClaimDetailsRoute />
                </Routes>
            </main>
        </Router>
    }
}
