//! ViewModel for claim details

use super::model::{fetch_claim, ClaimFetchError};
use crate::shared::components::table::format_usd;
use crate::shared::date_utils::format_long_date;
use contracts::domain::a001_claim::aggregate::Claim;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// What the details page can show at any moment
#[derive(Debug, Clone, PartialEq)]
pub enum ClaimDetailsState {
    Loading,
    Loaded(Claim),
    Failed(ClaimFetchError),
}

impl ClaimDetailsState {
    pub fn from_result(result: Result<Claim, ClaimFetchError>) -> Self {
        match result {
            Ok(claim) => ClaimDetailsState::Loaded(claim),
            Err(e) => ClaimDetailsState::Failed(e),
        }
    }

    pub fn claim(&self) -> Option<&Claim> {
        match self {
            ClaimDetailsState::Loaded(claim) => Some(claim),
            _ => None,
        }
    }
}

/// Display strings for the claim summary block
#[derive(Debug, Clone, PartialEq)]
pub struct ClaimSummary {
    pub claim_id: String,
    pub status: String,
    pub payer_name: String,
    pub total_amount: String,
    pub provider_name: String,
    pub comment: String,
    pub filing_date: String,
}

impl ClaimSummary {
    pub fn from_claim(claim: &Claim) -> Self {
        Self {
            claim_id: claim.claim_id.clone(),
            status: claim.claim_status.to_string(),
            payer_name: claim
                .payer_name
                .as_deref()
                .filter(|p| !p.is_empty())
                .unwrap_or("-")
                .to_string(),
            total_amount: format_usd(claim.total_amount),
            provider_name: claim.provider_name.clone(),
            comment: claim.comment.clone().unwrap_or_default(),
            filing_date: format_long_date(&claim.filing_date),
        }
    }
}

#[derive(Clone, Copy)]
pub struct ClaimDetailsVm {
    /// Identifier the page currently shows
    pub claim_id: RwSignal<Option<String>>,
    pub state: RwSignal<ClaimDetailsState>,
    /// True while a post-action re-fetch is in flight
    pub reloading: RwSignal<bool>,
    /// Last failed re-fetch; the loaded record stays on screen
    pub reload_error: RwSignal<Option<ClaimFetchError>>,
    /// Sequence number of the newest request; only its response is applied
    request_seq: StoredValue<u64>,
}

impl ClaimDetailsVm {
    pub fn new() -> Self {
        Self {
            claim_id: RwSignal::new(None),
            state: RwSignal::new(ClaimDetailsState::Loading),
            reloading: RwSignal::new(false),
            reload_error: RwSignal::new(None),
            request_seq: StoredValue::new(0),
        }
    }

    pub fn load(&self, id: String) {
        let seq = self.start_load(id.clone());
        self.fetch(seq, id);
    }

    /// Re-fetch the current claim without going back to `Loading`
    pub fn reload(&self) {
        if let Some((seq, id)) = self.start_reload() {
            self.fetch(seq, id);
        }
    }

    pub fn mutate_callback(&self) -> Callback<()> {
        let vm = *self;
        Callback::new(move |_: ()| vm.reload())
    }

    fn next_seq(&self) -> u64 {
        self.request_seq.update_value(|seq| *seq += 1);
        self.request_seq.get_value()
    }

    /// Reset to `Loading` for a new claim id and return the request sequence
    pub fn start_load(&self, id: String) -> u64 {
        self.claim_id.set(Some(id));
        self.state.set(ClaimDetailsState::Loading);
        self.reloading.set(false);
        self.reload_error.set(None);
        self.next_seq()
    }

    /// Mark a re-fetch as in flight; `None` when no claim is selected
    pub fn start_reload(&self) -> Option<(u64, String)> {
        let id = self.claim_id.get_untracked()?;
        self.reloading.set(true);
        Some((self.next_seq(), id))
    }

    fn fetch(&self, seq: u64, id: String) {
        let vm = *self;
        spawn_local(async move {
            let result = fetch_claim(&id).await;
            if let Err(e) = &result {
                log::warn!("Failed to load claim {}: {}", id, e);
            }
            vm.apply(seq, result);
        });
    }

    /// Store a fetch result unless a newer request has been issued since
    pub fn apply(&self, seq: u64, result: Result<Claim, ClaimFetchError>) -> bool {
        if seq != self.request_seq.get_value() {
            log::debug!("Dropping superseded claim response #{}", seq);
            return false;
        }
        self.reloading.set(false);
        match result {
            Ok(claim) => {
                self.reload_error.set(None);
                self.state.set(ClaimDetailsState::Loaded(claim));
            }
            Err(e) => {
                let has_record = self.state.with_untracked(|s| s.claim().is_some());
                if has_record {
                    self.reload_error.set(Some(e));
                } else {
                    self.state.set(ClaimDetailsState::Failed(e));
                }
            }
        }
        true
    }
}

impl Default for ClaimDetailsVm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::enums::ClaimStatus;

    fn sample_claim() -> Claim {
        serde_json::from_str(
            r#"{
                "claimId": "C1",
                "claimStatus": "Assigned",
                "totalAmount": 100,
                "providerName": "Acme",
                "filingDate": "2023-03-05T00:00:00Z",
                "lineItems": []
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_summary_formats_header_fields() {
        let summary = ClaimSummary::from_claim(&sample_claim());
        assert_eq!(summary.claim_id, "C1");
        assert_eq!(summary.status, "Assigned");
        assert_eq!(summary.payer_name, "-");
        assert_eq!(summary.total_amount, "$100.00");
        assert_eq!(summary.provider_name, "Acme");
        assert_eq!(summary.comment, "");
        assert_eq!(summary.filing_date, "March 05, 2023");
    }

    #[test]
    fn test_summary_keeps_payer_and_unknown_status() {
        let mut claim = sample_claim();
        claim.payer_name = Some("Blue Shield".into());
        claim.claim_status = ClaimStatus::Other("Paid".into());
        claim.total_amount = 1234.5;

        let summary = ClaimSummary::from_claim(&claim);
        assert_eq!(summary.payer_name, "Blue Shield");
        assert_eq!(summary.status, "Paid");
        assert_eq!(summary.total_amount, "$1,234.50");
    }

    #[test]
    fn test_state_from_result() {
        let loaded = ClaimDetailsState::from_result(Ok(sample_claim()));
        assert_eq!(loaded.claim().map(|c| c.claim_id.as_str()), Some("C1"));

        let failed = ClaimDetailsState::from_result(Err(ClaimFetchError::NotFound));
        assert_eq!(failed, ClaimDetailsState::Failed(ClaimFetchError::NotFound));
        assert!(failed.claim().is_none());
        assert!(ClaimDetailsState::Loading.claim().is_none());
    }

    #[test]
    fn test_apply_drops_response_for_previous_claim() {
        let owner = Owner::new();
        owner.with(|| {
            let vm = ClaimDetailsVm::new();
            let first = vm.start_load("C1".into());
            let second = vm.start_load("C2".into());

            assert!(!vm.apply(first, Ok(sample_claim())));
            assert_eq!(vm.state.get_untracked(), ClaimDetailsState::Loading);

            assert!(vm.apply(second, Err(ClaimFetchError::Http(500))));
            assert_eq!(
                vm.state.get_untracked(),
                ClaimDetailsState::Failed(ClaimFetchError::Http(500))
            );
        });
    }

    #[test]
    fn test_older_load_does_not_overwrite_reload() {
        let owner = Owner::new();
        owner.with(|| {
            let vm = ClaimDetailsVm::new();
            let load = vm.start_load("C1".into());
            let (reload, id) = vm.start_reload().unwrap();
            assert_eq!(id, "C1");

            let mut fresh = sample_claim();
            fresh.claim_status = ClaimStatus::Acknowledged;
            assert!(vm.apply(reload, Ok(fresh)));
            assert!(!vm.apply(load, Ok(sample_claim())));

            let status = vm.state.with_untracked(|s| s.claim().map(|c| c.claim_status.clone()));
            assert_eq!(status, Some(ClaimStatus::Acknowledged));
        });
    }

    #[test]
    fn test_reloading_flag_spans_the_refetch() {
        let owner = Owner::new();
        owner.with(|| {
            let vm = ClaimDetailsVm::new();
            assert!(vm.start_reload().is_none());
            assert!(!vm.reloading.get_untracked());

            let load = vm.start_load("C1".into());
            vm.apply(load, Ok(sample_claim()));

            let (seq, _) = vm.start_reload().unwrap();
            assert!(vm.reloading.get_untracked());

            vm.apply(seq, Ok(sample_claim()));
            assert!(!vm.reloading.get_untracked());
        });
    }

    #[test]
    fn test_failed_reload_keeps_loaded_claim() {
        let owner = Owner::new();
        owner.with(|| {
            let vm = ClaimDetailsVm::new();
            let load = vm.start_load("C1".into());
            vm.apply(load, Ok(sample_claim()));

            let (seq, _) = vm.start_reload().unwrap();
            assert!(vm.apply(seq, Err(ClaimFetchError::Http(503))));

            assert_eq!(vm.state.get_untracked(), ClaimDetailsState::Loaded(sample_claim()));
            assert_eq!(vm.reload_error.get_untracked(), Some(ClaimFetchError::Http(503)));
            assert!(!vm.reloading.get_untracked());

            let (seq, _) = vm.start_reload().unwrap();
            vm.apply(seq, Ok(sample_claim()));
            assert_eq!(vm.reload_error.get_untracked(), None);
        });
    }
}
