use crate::decant::plan::Plan;
use crate::potions::Classifier;
use crate::types::PlanOutcome;

/// Result of one decant request, ready to show to the player
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecantReport {
    pub target: i32,
    pub plan: Plan,
    pub outcome: PlanOutcome,
    pub lines: Vec<String>,
}

impl DecantReport {
    pub fn new(target: i32, plan: Plan, outcome: PlanOutcome, classifier: &Classifier) -> Self {
        let lines = render_lines(target, &plan, outcome, classifier);
        Self {
            target,
            plan,
            outcome,
            lines,
        }
    }
}

pub fn header_line(target: i32) -> String {
    format!("----- Decanting potions into {}-doses -----", target)
}

/// Header, the item deltas (only when the plan succeeded), then the status line
pub fn render_lines(
    target: i32,
    plan: &Plan,
    outcome: PlanOutcome,
    classifier: &Classifier,
) -> Vec<String> {
    let mut lines = vec![header_line(target)];

    if outcome.is_success() {
        for (item, quantity) in plan.take() {
            lines.push(format!("Take {} x {}", quantity, classifier.display_name(*item)));
        }
        for (item, quantity) in plan.give() {
            lines.push(format!("Give {} x {}", quantity, classifier.display_name(*item)));
        }
    }

    lines.push(outcome.message().to_string());
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decant::test_support::*;

    #[test]
    fn test_success_lists_deltas() {
        let mut plan = Plan::new();
        plan.add_take(TONIC[3], 5);
        plan.add_take(COINS, 14);
        plan.add_give(noted(TONIC[2]), 6);

        let lines = render_lines(3, &plan, PlanOutcome::Success, &classifier());
        assert_eq!(
            lines,
            vec![
                "----- Decanting potions into 3-doses -----",
                "Take 5 x Tonic(4)",
                "Take 14 x Coins",
                "Give 6 x Tonic(3)",
                "Potion decant completed successfully",
            ]
        );
    }

    #[test]
    fn test_failure_only_shows_status() {
        let mut plan = Plan::new();
        plan.add_take(COINS, 14);

        let report = DecantReport::new(2, plan, PlanOutcome::InventoryFull, &classifier());
        assert_eq!(
            report.lines,
            vec![
                "----- Decanting potions into 2-doses -----",
                "Your inventory is too full to hold all items",
            ]
        );
    }
}
