use crate::{
    core::config::ProjectConfig,
    quantity::{cost::Reais, hours::Hours},
};

/// Management surcharge: month 1 applies it to the one-off setup costs,
/// months 2..N to their own hour consumption.
pub const MANAGEMENT_RATE: f64 = 0.20;

/// Derived monetary figures for one project month.
#[derive(Clone, Debug, PartialEq)]
pub struct PeriodCost {
    /// 1-based project month.
    pub month: usize,

    /// Quantized advance percentage; `None` for the fixed first month.
    pub advance_percent: Option<f64>,

    pub hours: Hours,
    pub consumption: Reais,
    pub management: Reais,
    pub fixed_fees: Reais,
    pub total: Reais,
}

/// Charges incurred once, regardless of the project duration.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct OneOffCosts {
    pub installation: Reais,
    pub mapping: Reais,
    pub homologation: Reais,
}

impl OneOffCosts {
    #[must_use]
    pub fn sum(self) -> Reais {
        self.installation + self.mapping + self.homologation
    }
}

/// The full output of one estimation run.
#[derive(Clone, Debug, PartialEq)]
pub struct Estimate {
    pub periods: Vec<PeriodCost>,
    pub one_off: OneOffCosts,
    pub average_per_period: Reais,
    pub project_total: Reais,
}

/// Price the monthly plan.
///
/// Every derived quantity is rounded to cents on its own; the grand total
/// sums the rounded figures, so it may drift from the unrounded sum by a few
/// cents. That matches the source-of-truth spreadsheet behaviour and is
/// accepted.
#[must_use]
#[expect(clippy::cast_precision_loss)]
pub fn roll_up(config: &ProjectConfig, percentages: &[f64], plan: &[Hours]) -> Estimate {
    let one_off = OneOffCosts {
        installation: config.installation.resolve(config.hourly_rate),
        mapping: config.mapping.resolve(config.hourly_rate),
        homologation: config.homologation,
    };
    let setup_management =
        ((one_off.installation + one_off.mapping) * MANAGEMENT_RATE).round_to_cents();

    let mut periods = Vec::with_capacity(plan.len());
    for (index, &hours) in plan.iter().enumerate() {
        let month = index + 1;
        let consumption = (hours * config.hourly_rate).round_to_cents();
        let management = if index == 0 {
            setup_management
        } else {
            (consumption * MANAGEMENT_RATE).round_to_cents()
        };
        let fixed_fees = config
            .monthly_fees
            .iter()
            .map(|fee| fee.amount_on(month))
            .sum::<Reais>()
            .round_to_cents();
        let total = (consumption + management + fixed_fees).round_to_cents();
        periods.push(PeriodCost {
            month,
            advance_percent: (index > 0).then(|| percentages[index - 1]),
            hours,
            consumption,
            management,
            fixed_fees,
            total,
        });
    }

    let monthly_total: Reais = periods.iter().map(|period| period.total).sum();
    let average_per_period = if periods.is_empty() {
        Reais::ZERO
    } else {
        (monthly_total / periods.len() as f64).round_to_cents()
    };
    let project_total = (monthly_total + one_off.sum()).round_to_cents();

    Estimate { periods, one_off, average_per_period, project_total }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::{
        core::{config::OneOffCharge, hours::allocate},
        quantity::rate::HourlyRate,
    };

    fn single_month_config() -> ProjectConfig {
        ProjectConfig::builder()
            .total_months(1)
            .total_hours(Hours(100.0))
            .hourly_rate(HourlyRate(255.0))
            .build()
    }

    #[test]
    fn single_month_project_ok() {
        let config = single_month_config();
        let plan = allocate(config.total_hours, &[]);
        let estimate = roll_up(&config, &[], &plan);

        let first = &estimate.periods[0];
        assert_eq!(first.hours, Hours(70.0));
        assert_eq!(first.consumption, Reais(17_850.0));
        // 20% of (20 + 50) rate-hours: 0.2 * (5100 + 12750).
        assert_eq!(first.management, Reais(3570.0));
        assert_eq!(first.total, Reais(21_420.0));
        assert_eq!(estimate.average_per_period, Reais(21_420.0));
        assert_eq!(estimate.project_total, Reais(39_270.0));
    }

    #[test]
    fn later_months_surcharge_their_own_consumption() {
        let config = ProjectConfig::builder()
            .total_months(3)
            .total_hours(Hours(170.0))
            .hourly_rate(HourlyRate(100.0))
            .installation(OneOffCharge::Flat(Reais::ZERO))
            .mapping(OneOffCharge::Flat(Reais::ZERO))
            .build();
        let estimate = roll_up(&config, &[50.0, 50.0], &allocate(config.total_hours, &[50.0, 50.0]));

        assert_eq!(estimate.periods[0].management, Reais::ZERO);
        assert_eq!(estimate.periods[1].consumption, Reais(5000.0));
        assert_eq!(estimate.periods[1].management, Reais(1000.0));
        assert_eq!(estimate.periods[2].management, Reais(1000.0));
    }

    #[test]
    fn pivoted_fee_switches_amounts() {
        let config = ProjectConfig::builder()
            .total_months(7)
            .total_hours(Hours(0.0))
            .hourly_rate(HourlyRate(0.0))
            .monthly_fees(vec!["cigam=693@5=2079".parse().unwrap()])
            .build();
        let percentages = vec![20.0; 5];
        let estimate =
            roll_up(&config, &percentages, &allocate(config.total_hours, &percentages));

        for period in &estimate.periods {
            let expected = if period.month < 5 { 693.0 } else { 2079.0 };
            assert_abs_diff_eq!(period.fixed_fees.0, expected);
        }
    }

    #[test]
    fn zero_budget_leaves_only_fees_and_one_offs() {
        let config = ProjectConfig::builder()
            .total_months(3)
            .total_hours(Hours(0.0))
            .hourly_rate(HourlyRate(100.0))
            .monthly_fees(vec!["nuvem=10".parse().unwrap()])
            .build();
        let percentages = vec![50.0, 50.0];
        let estimate =
            roll_up(&config, &percentages, &allocate(config.total_hours, &percentages));

        for period in &estimate.periods {
            assert_eq!(period.hours, Hours::ZERO);
            assert_eq!(period.consumption, Reais::ZERO);
        }
        // One-offs: 2000 + 5000; month 1 management: 20% of 7000; fees: 3 × 10.
        assert_eq!(estimate.project_total, Reais(8430.0));
    }

    #[test]
    fn percentages_label_the_months_after_the_first() {
        let config = ProjectConfig::builder()
            .total_months(3)
            .total_hours(Hours(100.0))
            .hourly_rate(HourlyRate(1.0))
            .build();
        let percentages = vec![40.0, 60.0];
        let estimate =
            roll_up(&config, &percentages, &allocate(config.total_hours, &percentages));

        assert_eq!(estimate.periods[0].advance_percent, None);
        assert_eq!(estimate.periods[1].advance_percent, Some(40.0));
        assert_eq!(estimate.periods[2].advance_percent, Some(60.0));
    }
}
