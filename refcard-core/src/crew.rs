//! Referee crew role classification and card labels.
//!
//! Sources disagree on crew size and on how roles are written, so card labels
//! and referee slots are derived here from crew size plus role-name tokens,
//! never from list position alone:
//!
//! - 1 official: `Referee`
//! - 2 officials without assistant markers (a "dual" crew): `Senior Referee`,
//!   `Junior Referee`
//! - otherwise: `Referee`, `AR1`, `AR2`, then `Official 4`, `Official 5`, ...
//!   in order of appearance; anyone marked as a fourth official is labelled
//!   `4th Official` and sorted last.
//!
//! The primary official is the first one whose role reads as a center
//! referee; failing that, the first one without a role; failing that, the
//! first one listed.

use crate::game::Official;

pub const SINGLE_LABEL: &str = "Referee";
pub const DUAL_LABELS: [&str; 2] = ["Senior Referee", "Junior Referee"];
pub const SYSTEM_OF_THREE_LABELS: [&str; 3] = ["Referee", "AR1", "AR2"];
pub const FOURTH_OFFICIAL_LABEL: &str = "4th Official";

/// What a source's role string says about an official.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleKind {
    /// Center / senior / main referee
    Center,
    /// Assistant referee or linesperson
    Assistant,
    /// Junior referee of a dual crew
    Junior,
    /// Fourth official
    Fourth,
    /// No recognizable role marker
    Unknown,
}

impl RoleKind {
    /// Classify a free-text role by its tokens.
    pub fn classify(role: &str) -> Self {
        let lower = role.to_lowercase();
        let tokens: Vec<&str> = lower
            .split(|c: char| !c.is_ascii_alphanumeric())
            .filter(|t| !t.is_empty())
            .collect();
        let has = |words: &[&str]| tokens.iter().any(|t| words.contains(t));

        if has(&["jr", "junior"]) {
            Self::Junior
        } else if has(&["4th", "fourth"]) {
            Self::Fourth
        } else if has(&[
            "ar", "ar1", "ar2", "ar3", "al", "assistant", "asst", "line", "linesman", "lineman",
            "linesperson",
        ]) {
            Self::Assistant
        } else if has(&["referee", "ref", "center", "centre", "cr", "senior", "sr", "main"]) {
            Self::Center
        } else {
            Self::Unknown
        }
    }
}

/// Indices into `crew` in card slot order.
fn slot_order(kinds: &[RoleKind]) -> Vec<usize> {
    if kinds.is_empty() {
        return Vec::new();
    }
    let primary = kinds
        .iter()
        .position(|k| *k == RoleKind::Center)
        .or_else(|| kinds.iter().position(|k| *k == RoleKind::Unknown))
        .unwrap_or(0);

    let mut order = vec![primary];
    order.extend((0..kinds.len()).filter(|&i| i != primary && kinds[i] != RoleKind::Fourth));
    order.extend((0..kinds.len()).filter(|&i| i != primary && kinds[i] == RoleKind::Fourth));
    order
}

fn is_dual(kinds: &[RoleKind]) -> bool {
    kinds.len() == 2
        && kinds
            .iter()
            .all(|k| matches!(k, RoleKind::Center | RoleKind::Junior | RoleKind::Unknown))
}

/// Card labels for each official, aligned with the input order.
pub fn infer_referee_role_labels(crew: &[Official]) -> Vec<String> {
    let kinds: Vec<RoleKind> = crew.iter().map(|o| RoleKind::classify(&o.role)).collect();
    let dual = is_dual(&kinds);
    let mut labels = vec![String::new(); crew.len()];

    for (position, index) in slot_order(&kinds).into_iter().enumerate() {
        labels[index] = if crew.len() == 1 {
            SINGLE_LABEL.to_string()
        } else if dual {
            DUAL_LABELS[position].to_string()
        } else if kinds[index] == RoleKind::Fourth {
            FOURTH_OFFICIAL_LABEL.to_string()
        } else {
            match SYSTEM_OF_THREE_LABELS.get(position) {
                Some(label) => label.to_string(),
                None => format!("Official {}", position + 1),
            }
        };
    }
    labels
}

/// Names for the three referee slots, primary official first.
///
/// Slots beyond the crew size are empty; officials past the third are not
/// placed in a slot.
pub fn assign_slots(crew: &[Official]) -> [String; 3] {
    let kinds: Vec<RoleKind> = crew.iter().map(|o| RoleKind::classify(&o.role)).collect();
    let mut slots: [String; 3] = Default::default();
    for (slot, index) in slots.iter_mut().zip(slot_order(&kinds)) {
        *slot = crew[index].name.clone();
    }
    slots
}

/// Officials paired with their labels, in slot order.
pub fn labeled_crew(crew: &[Official]) -> Vec<(String, Official)> {
    let kinds: Vec<RoleKind> = crew.iter().map(|o| RoleKind::classify(&o.role)).collect();
    let labels = infer_referee_role_labels(crew);
    slot_order(&kinds)
        .into_iter()
        .map(|i| (labels[i].clone(), crew[i].clone()))
        .collect()
}

#[cfg(test)]
#[path = "tests/crew_tests.rs"]
mod tests;
