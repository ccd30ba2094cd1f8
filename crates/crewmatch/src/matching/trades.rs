//! Bidirectional mapping between free-text worker trade labels and canonical
//! ontology trade names. Worker records and the ontology evolved
//! independently, so the vocabularies overlap but do not agree; the table
//! below is explicit, hand-maintained domain data, not a heuristic.

/// Worker-facing label -> canonical ontology trade name. Many-to-one is the
/// norm ("Pipefitter" and "Plumber" both staff "Plumber/Pipefitter" slots).
const TRADE_ALIASES: &[(&str, &str)] = &[
    ("Pipefitter", "Plumber/Pipefitter"),
    ("Plumber", "Plumber/Pipefitter"),
    ("Steamfitter", "Plumber/Pipefitter"),
    ("HVAC Installer", "HVAC Technician"),
    ("HVAC Mechanic", "HVAC Technician"),
    ("Refrigeration Technician", "HVAC Technician"),
    ("Pipe Welder", "Welder"),
    ("Structural Welder", "Welder"),
    ("Cable Technician", "Low Voltage Technician"),
    ("Telecom Installer", "Low Voltage Technician"),
    ("Fiber Technician", "Low Voltage Technician"),
    ("Crane Operator", "Heavy Equipment Operator"),
    ("Excavator Operator", "Heavy Equipment Operator"),
    ("Rigger", "Ironworker"),
    ("Steel Erector", "Ironworker"),
    ("Framer", "Carpenter"),
    ("Finish Carpenter", "Carpenter"),
    ("Duct Installer", "Sheet Metal Worker"),
    ("Sprinkler Fitter", "Fire Protection Technician"),
    ("Construction Laborer", "Laborer"),
    ("General Laborer", "Laborer"),
];

/// Translate a worker's free-text trade label to the canonical ontology
/// name. Unmapped labels are returned unchanged and treated as already
/// canonical. Never fails.
pub fn resolve_to_ontology(worker_trade_label: &str) -> &str {
    TRADE_ALIASES
        .iter()
        .find(|(label, _)| *label == worker_trade_label)
        .map(|(_, canonical)| *canonical)
        .unwrap_or(worker_trade_label)
}

/// Every worker-facing label that can staff the given canonical trade. When
/// no explicit mapping exists the canonical name itself is the only label,
/// so candidate lookup still works for unmapped or 1:1 trades.
pub fn resolve_to_worker_labels(canonical_name: &str) -> Vec<String> {
    let labels: Vec<String> = TRADE_ALIASES
        .iter()
        .filter(|(_, canonical)| *canonical == canonical_name)
        .map(|(label, _)| (*label).to_string())
        .collect();

    if labels.is_empty() {
        vec![canonical_name.to_string()]
    } else {
        labels
    }
}
