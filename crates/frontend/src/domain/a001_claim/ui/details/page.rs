//! Main page component for claim details (MVVM Standard)

use super::actions::{ClaimActionContext, ClaimsActions};
use super::line_items::LineItemsTable;
use super::model::ClaimFetchError;
use super::view_model::{ClaimDetailsState, ClaimDetailsVm, ClaimSummary};
use crate::shared::icons::icon;
use contracts::domain::a001_claim::aggregate::LineItem;
use contracts::enums::ClaimStatus;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn ClaimDetails(
    #[prop(into)] claim_id: Signal<String>,
    /// Reloads the claims list this page was opened from
    request_claims: Callback<()>,
    on_apply_discount: Callback<LineItem>,
) -> impl IntoView {
    let vm = ClaimDetailsVm::new();

    Effect::new(move || {
        let id = claim_id.get();
        vm.load(id);
    });

    view! {
        <div id="a001_claim--detail" class="page page--detail" data-page-category="detail">
            {move || match vm.state.get() {
                ClaimDetailsState::Loading => view! {
                    <Flex gap=FlexGap::Small style="align-items: center; padding: var(--spacing-4xl); justify-content: center;">
                        <Spinner attr:aria-label="Loading..." />
                        <span>"Loading..."</span>
                    </Flex>
                }
                .into_any(),
                ClaimDetailsState::Failed(err) => view! {
                    <div class="claim-details__error" style="padding: var(--spacing-lg); background: var(--color-error-50); border: 1px solid var(--color-error-100); border-radius: var(--radius-sm); color: var(--color-error); margin: var(--spacing-lg);">
                        {icon("alert-circle")}
                        <strong>"Error: "</strong>{err.to_string()}
                    </div>
                }
                .into_any(),
                ClaimDetailsState::Loaded(claim) => {
                    let ctx = ClaimActionContext {
                        claim_id: StoredValue::new(claim.claim_id.clone()),
                        request_claims,
                        mutate: vm.mutate_callback(),
                        busy: vm.reloading.into(),
                    };
                    let status = claim.claim_status.clone();
                    let summary = ClaimSummary::from_claim(&claim);
                    let items = claim.line_items;
                    view! {
                        <ClaimCard summary=summary status=status ctx=ctx items=items reload_error=vm.reload_error on_apply_discount=on_apply_discount />
                    }
                    .into_any()
                }
            }}
        </div>
    }
}

#[component]
fn ClaimCard(
    summary: ClaimSummary,
    status: ClaimStatus,
    ctx: ClaimActionContext,
    items: Vec<LineItem>,
    reload_error: RwSignal<Option<ClaimFetchError>>,
    on_apply_discount: Callback<LineItem>,
) -> impl IntoView {
    view! {
        <Card>
            {move || {
                reload_error.get().map(|err| {
                    view! {
                        <div class="claim-details__reload-error" style="color: var(--color-error); margin-bottom: var(--spacing-sm);">
                            {icon("alert-circle")}
                            <strong>"Refresh failed: "</strong>{err.to_string()}
                        </div>
                    }
                })
            }}
            <div class="card-header" style="display: grid; grid-template-columns: 1fr 1fr;">
                <h4 class="card-title">"Claim Details"</h4>
                <div style="text-align: right;">
                    <label>"Filing Date: "</label>{summary.filing_date}
                </div>
            </div>
            <div class="card-body">
                <div class="claim-summary" style="display: grid; grid-template-columns: max-content 1fr; gap: var(--spacing-sm) var(--spacing-lg); width: 75%;">
                    <div class="claim-summary__label">"Claim Id:"</div>
                    <div>{summary.claim_id}</div>
                    <div class="claim-summary__label">"Claim Status:"</div>
                    <div>
                        {summary.status}
                        <ClaimsActions status=status ctx=ctx />
                    </div>
                    <div class="claim-summary__label">"Payer Name:"</div>
                    <div>{summary.payer_name}</div>
                    <div class="claim-summary__label">"Total Amount:"</div>
                    <div>{summary.total_amount}</div>
                    <div class="claim-summary__label">"Provider Name:"</div>
                    <div>{summary.provider_name}</div>
                    <div class="claim-summary__label">"Comment:"</div>
                    <div>{summary.comment}</div>
                </div>
                <div>
                    <h4 class="card-title" style="margin: var(--spacing-2xl) 0;">"Line Items"</h4>
                    <LineItemsTable items=Signal::stored(items) on_apply_discount=on_apply_discount />
                </div>
            </div>
        </Card>
    }
}
