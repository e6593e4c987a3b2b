//! Status-dependent action buttons for a claim

use super::model::post_claim_action;
use crate::shared::icons::icon;
use contracts::enums::{ClaimAction, ClaimStatus};
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen_futures::spawn_local;

/// Everything an action control needs to run a transition and refresh the views
#[derive(Clone, Copy)]
pub struct ClaimActionContext {
    pub claim_id: StoredValue<String>,
    /// Reloads the claims list owned by the parent page
    pub request_claims: Callback<()>,
    /// Reloads this claim
    pub mutate: Callback<()>,
    /// True while the claim is being re-fetched after a transition
    pub busy: Signal<bool>,
}

impl ClaimActionContext {
    /// Buttons stay disabled until the transition's re-fetch has landed
    pub fn is_locked(&self, pending: Option<ClaimAction>) -> bool {
        pending.is_some() || self.busy.get()
    }
}

fn action_icon(action: ClaimAction) -> AnyView {
    match action {
        ClaimAction::Acknowledge => icon("check"),
        ClaimAction::Deny => icon("x"),
        ClaimAction::Propose => icon("send"),
        ClaimAction::Approve => icon("check-circle"),
    }
}

fn action_appearance(action: ClaimAction) -> ButtonAppearance {
    if action.is_destructive() {
        ButtonAppearance::Secondary
    } else {
        ButtonAppearance::Primary
    }
}

#[component]
pub fn ClaimsActions(status: ClaimStatus, ctx: ClaimActionContext) -> impl IntoView {
    let actions = status.permitted_actions();
    if actions.is_empty() {
        return ().into_any();
    }

    let pending = RwSignal::new(None::<ClaimAction>);
    let error = RwSignal::new(None::<String>);

    view! {
        <span class="claim-actions" style="display: inline-flex; gap: var(--spacing-sm); margin-left: var(--spacing-sm); align-items: center;">
            {actions
                .iter()
                .map(|&action| {
                    view! { <ClaimActionButton action=action ctx=ctx pending=pending error=error /> }
                })
                .collect_view()}
            {move || {
                error
                    .get()
                    .map(|e| {
                        view! {
                            <span class="claim-actions__error" style="color: var(--color-error);">
                                {icon("alert-circle")} {e}
                            </span>
                        }
                    })
            }}
        </span>
    }
    .into_any()
}

#[component]
fn ClaimActionButton(
    action: ClaimAction,
    ctx: ClaimActionContext,
    pending: RwSignal<Option<ClaimAction>>,
    error: RwSignal<Option<String>>,
) -> impl IntoView {
    let on_click = move |_: leptos::ev::MouseEvent| {
        if pending.get_untracked().is_some() || ctx.busy.get_untracked() {
            return;
        }
        let claim_id = ctx.claim_id.get_value();
        pending.set(Some(action));
        error.set(None);

        spawn_local(async move {
            match post_claim_action(&claim_id, action).await {
                Ok(()) => {
                    log::info!("Claim {}: {} succeeded", claim_id, action.label());
                    // sets `busy` before `pending` clears below
                    ctx.mutate.run(());
                    ctx.request_claims.run(());
                }
                Err(e) => {
                    log::error!("Claim {}: {} failed: {}", claim_id, action.label(), e);
                    error.set(Some(format!("{} failed: {}", action.label(), e)));
                }
            }
            pending.set(None);
        });
    };

    view! {
        <Button
            appearance=action_appearance(action)
            size=ButtonSize::Small
            on_click=on_click
            disabled=Signal::derive(move || ctx.is_locked(pending.get()))
        >
            {action_icon(action)}
            {move || {
                if pending.get() == Some(action) {
                    format!("{}...", action.label())
                } else {
                    action.label().to_string()
                }
            }}
        </Button>
    }
}
