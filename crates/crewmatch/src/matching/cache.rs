use std::collections::hash_map::Entry;
use std::collections::HashMap;

use super::domain::{Skill, TradeCertification, TradeId};
use super::store::{OntologyStore, StoreError};

/// A trade's skill set and certification requirements, fetched together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TradeOntology {
    pub trade_id: TradeId,
    pub skills: Vec<Skill>,
    pub certification_links: Vec<TradeCertification>,
}

/// Per-run memoization of trade ontologies keyed by trade ID.
///
/// The cache is scoped to a single orchestration call: the orchestrator
/// constructs a fresh instance at the top of every entry point, so no
/// ontology data survives between calls and no staleness protocol is
/// needed. Within a run, multiple candidates or needed trades referencing
/// the same trade ID hit the store once.
#[derive(Debug, Default)]
pub struct OntologyCache {
    entries: HashMap<TradeId, TradeOntology>,
}

impl OntologyCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-through lookup. Store failures propagate and abort the run.
    pub fn get<S: OntologyStore + ?Sized>(
        &mut self,
        store: &S,
        trade_id: &TradeId,
    ) -> Result<&TradeOntology, StoreError> {
        match self.entries.entry(trade_id.clone()) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => {
                let skills = store.skills_by_trade(trade_id)?;
                let certification_links = store.certifications_by_trade(trade_id)?;
                Ok(entry.insert(TradeOntology {
                    trade_id: trade_id.clone(),
                    skills,
                    certification_links,
                }))
            }
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
