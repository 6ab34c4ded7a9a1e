//! Negotiation Application Service
//!
//! Evaluates a carrier's offer, logs the attempt, and moves the load to
//! `negotiated` on acceptance.

use std::sync::Arc;

use freightdesk::{
    evaluate_offer, DomainError, LoadRepository, LoadStatus, NegotiationOutcome,
    NegotiationRecord, NegotiationRepository,
};

use super::{validate_amount, LoadLocks};

pub struct NegotiationService<L: LoadRepository, N: NegotiationRepository> {
    loads: Arc<L>,
    negotiations: Arc<N>,
    locks: Arc<LoadLocks>,
}

impl<L: LoadRepository, N: NegotiationRepository> NegotiationService<L, N> {
    pub fn new(loads: Arc<L>, negotiations: Arc<N>, locks: Arc<LoadLocks>) -> Self {
        Self {
            loads,
            negotiations,
            locks,
        }
    }

    /// Negotiate one round on a load
    pub async fn negotiate(
        &self,
        load_id: &str,
        mc_number: &str,
        counter_offer: f64,
        round: u32,
    ) -> Result<(NegotiationRecord, NegotiationOutcome), DomainError> {
        validate_amount("counter_offer", counter_offer)?;
        if round == 0 {
            return Err(DomainError::Validation(
                "negotiation_round starts at 1".to_string(),
            ));
        }

        let _guard = self.locks.acquire(load_id).await;

        let mut load = self
            .loads
            .find_by_id(load_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Load", load_id))?;

        if load.status == LoadStatus::Booked {
            return Err(DomainError::Conflict(
                "Load already booked; negotiation closed".to_string(),
            ));
        }

        let outcome = evaluate_offer(load.loadboard_rate, counter_offer, round);
        let record = NegotiationRecord::new(
            load.load_id.clone(),
            mc_number.to_string(),
            load.loadboard_rate,
            counter_offer,
            round,
            &outcome,
        );
        self.negotiations.append(&record).await?;

        if outcome.accepted {
            load.accept_negotiated_rate(outcome.final_rate)?;
            self.loads.save(&load).await?;
        }

        tracing::info!(
            "Negotiation {} on {} by {} round {}: {:?} at {}",
            record.negotiation_id,
            load_id,
            mc_number,
            round,
            outcome.decision,
            outcome.final_rate
        );

        Ok((record, outcome))
    }

    pub async fn count(&self) -> Result<usize, DomainError> {
        self.negotiations.count().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{InMemoryLoadRepository, InMemoryNegotiationRepository};
    use crate::application::test_support::{demo_store, locks};
    use freightdesk::NegotiationDecision;

    type Service = NegotiationService<InMemoryLoadRepository, InMemoryNegotiationRepository>;

    fn service() -> (Service, Arc<InMemoryLoadRepository>) {
        let store = demo_store();
        let loads = store.loads.clone();
        (Service::new(store.loads, store.negotiations, locks()), loads)
    }

    #[tokio::test]
    async fn test_accepted_offer_marks_load_negotiated() {
        let (service, loads) = service();
        let (record, outcome) = service.negotiate("L001", "MC123456", 1600.0, 1).await.unwrap();

        assert!(outcome.accepted);
        assert_eq!(outcome.final_rate, 1600.0);
        assert!(record.accepted);
        assert_eq!(record.original_rate, 1500.0);

        let l001 = loads.find_by_id("L001").await.unwrap().unwrap();
        assert_eq!(l001.status, LoadStatus::Negotiated);
        assert_eq!(l001.negotiated_rate, Some(1600.0));
    }

    #[tokio::test]
    async fn test_counter_leaves_load_available() {
        let (service, loads) = service();
        let (_, outcome) = service.negotiate("L003", "MC123456", 500.0, 1).await.unwrap();

        assert_eq!(outcome.decision, NegotiationDecision::Countered);
        assert!((outcome.final_rate - 760.0).abs() < 1e-9);
        assert!(outcome.can_negotiate_again);

        let l003 = loads.find_by_id("L003").await.unwrap().unwrap();
        assert_eq!(l003.status, LoadStatus::Available);
        assert_eq!(l003.negotiated_rate, None);
    }

    #[tokio::test]
    async fn test_every_attempt_is_logged() {
        let (service, _) = service();
        let mut records = Vec::new();
        for (offer, round) in [(500.0, 1), (550.0, 2), (500.0, 3)] {
            let (record, _) = service.negotiate("L003", "MC123456", offer, round).await.unwrap();
            records.push(record);
        }

        let last = records.last().unwrap();
        assert_eq!(last.result_rate, 800.0);
        assert!(!last.accepted);

        let rounds: Vec<u32> = records.iter().map(|r| r.negotiation_round).collect();
        assert_eq!(rounds, vec![1, 2, 3]);
        assert_eq!(service.count().await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_unknown_load_not_logged() {
        let (service, _) = service();
        let err = service.negotiate("L999", "MC123456", 1000.0, 1).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
        assert_eq!(service.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_unknown_loads_leave_no_lock_entries() {
        let store = demo_store();
        let shared = locks();
        let service = Service::new(store.loads, store.negotiations, shared.clone());

        for i in 0..100 {
            let load_id = format!("BOGUS-{i}");
            let err = service.negotiate(&load_id, "MC123456", 1000.0, 1).await.unwrap_err();
            assert!(matches!(err, DomainError::NotFound { .. }));
        }
        service.negotiate("L003", "MC123456", 500.0, 1).await.unwrap();

        assert_eq!(shared.len(), 0);
    }

    #[tokio::test]
    async fn test_booked_load_rejects_negotiation() {
        let (service, loads) = service();
        let mut l002 = loads.find_by_id("L002").await.unwrap().unwrap();
        l002.mark_booked("MC123456", 1200.0).unwrap();
        loads.save(&l002).await.unwrap();

        let err = service.negotiate("L002", "MC789012", 1300.0, 1).await.unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
        assert_eq!(service.count().await.unwrap(), 0);

        let l002 = loads.find_by_id("L002").await.unwrap().unwrap();
        assert_eq!(l002.status, LoadStatus::Booked);
    }

    #[tokio::test]
    async fn test_invalid_inputs() {
        let (service, _) = service();
        for offer in [0.0, -10.0, f64::NAN] {
            assert!(matches!(
                service.negotiate("L001", "MC123456", offer, 1).await,
                Err(DomainError::Validation(_))
            ));
        }
        assert!(matches!(
            service.negotiate("L001", "MC123456", 1400.0, 0).await,
            Err(DomainError::Validation(_))
        ));
    }
}
