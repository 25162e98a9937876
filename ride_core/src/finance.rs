//! # Financial Projection
//!
//! Revenue, payback and five-year net present value for a prospective
//! ride installation, computed from the operator's own venue figures.
//!
//! ## Formulas
//!
//! ```text
//! revenue    = daily_visitors × ticket_price × operating_days
//! op_cost    = revenue × operating_cost_% / 100          (default 30 %)
//! net_profit = revenue − op_cost
//! payback    = investment / net_profit                   (0 when investment is 0)
//! NPV        = Σ_{y=1..5} net_profit / (1 + rate_% / 100)^y − investment   (default 10 %)
//! ```
//!
//! The arithmetic is unguarded: a zero net profit gives an
//! infinite payback and a loss gives a negative one. Callers decide how to
//! present those values.
//!
//! ## Example
//!
//! ```rust
//! use ride_core::finance::{project, FinancialInputs};
//!
//! let inputs = FinancialInputs {
//!     venue_area: Some(1200.0),
//!     daily_visitors: Some(500.0),
//!     avg_ticket_price: Some(25.0),
//!     operating_days_per_year: Some(300.0),
//!     equipment_investment: Some(500_000.0),
//!     operating_cost_percent: None,
//!     discount_rate_percent: None,
//! };
//!
//! let result = project(&inputs).unwrap();
//! assert_eq!(result.annual_revenue, 3_750_000.0);
//! assert_eq!(result.annual_net_profit, 2_625_000.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::catalog::CatalogItem;

/// Operating cost as a share of revenue when none is given
pub const DEFAULT_OPERATING_COST_PERCENT: f64 = 30.0;

/// Discount rate used for NPV when none is given
pub const DEFAULT_DISCOUNT_RATE_PERCENT: f64 = 10.0;

/// Number of years discounted in the NPV figure
pub const NPV_HORIZON_YEARS: u32 = 5;

// ============================================================================
// Inputs
// ============================================================================

/// Raw text of the projection form, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FinancialForm {
    #[serde(default)]
    pub venue_area: String,
    #[serde(default)]
    pub daily_visitors: String,
    #[serde(default)]
    pub avg_ticket_price: String,
    #[serde(default)]
    pub operating_days_per_year: String,
    #[serde(default)]
    pub equipment_investment: String,
    #[serde(default)]
    pub operating_cost_percent: String,
    #[serde(default)]
    pub discount_rate_percent: String,
}

/// Projection inputs. `None` marks a field that is missing or not a number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FinancialInputs {
    /// Venue floor area in m². Required, but informational only
    pub venue_area: Option<f64>,
    pub daily_visitors: Option<f64>,
    pub avg_ticket_price: Option<f64>,
    pub operating_days_per_year: Option<f64>,
    pub equipment_investment: Option<f64>,
    pub operating_cost_percent: Option<f64>,
    pub discount_rate_percent: Option<f64>,
}

impl FinancialInputs {
    /// Read a form leniently: each field takes its leading number, if any.
    pub fn from_form(form: &FinancialForm) -> Self {
        FinancialInputs {
            venue_area: parse_number(&form.venue_area),
            daily_visitors: parse_number(&form.daily_visitors),
            avg_ticket_price: parse_number(&form.avg_ticket_price),
            operating_days_per_year: parse_number(&form.operating_days_per_year),
            equipment_investment: parse_number(&form.equipment_investment),
            operating_cost_percent: parse_number(&form.operating_cost_percent),
            discount_rate_percent: parse_number(&form.discount_rate_percent),
        }
    }

    /// Names of required fields that are missing or zero, in form order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("venue_area", self.venue_area),
            ("daily_visitors", self.daily_visitors),
            ("avg_ticket_price", self.avg_ticket_price),
            ("operating_days_per_year", self.operating_days_per_year),
            ("equipment_investment", self.equipment_investment),
        ]
        .into_iter()
        .filter(|(_, value)| required(*value).is_none())
        .map(|(name, _)| name)
        .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Operating cost percent with the default applied
    pub fn effective_operating_cost_percent(&self) -> f64 {
        optional(self.operating_cost_percent).unwrap_or(DEFAULT_OPERATING_COST_PERCENT)
    }

    /// Discount rate percent with the default applied
    pub fn effective_discount_rate_percent(&self) -> f64 {
        optional(self.discount_rate_percent).unwrap_or(DEFAULT_DISCOUNT_RATE_PERCENT)
    }
}

/// A required field counts only when present and non-zero
fn required(value: Option<f64>) -> Option<f64> {
    value.filter(|v| !v.is_nan() && *v != 0.0)
}

fn optional(value: Option<f64>) -> Option<f64> {
    value.filter(|v| !v.is_nan())
}

/// Parse the leading decimal number of `text` (`"25 USD"` -> 25).
///
/// Accepts an optional sign, digits with an optional fraction, and an
/// optional exponent. Returns `None` when no digits lead the text.
pub fn parse_number(text: &str) -> Option<f64> {
    let s = text.trim();
    let bytes = s.as_bytes();
    let mut end = 0;

    if end < bytes.len() && (bytes[end] == b'+' || bytes[end] == b'-') {
        end += 1;
    }
    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        end = frac_end;
    }

    if digits == 0 {
        return None;
    }

    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok()
}

// ============================================================================
// Projection
// ============================================================================

/// Annual figures, payback and NPV for one set of inputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FinancialResult {
    pub annual_revenue: f64,
    pub annual_operating_cost: f64,
    pub annual_net_profit: f64,
    /// Years of net profit needed to recover the investment
    pub payback_period_years: f64,
    pub five_year_npv: f64,
}

/// Compute the projection, or `None` when a required input is missing or zero.
pub fn project(inputs: &FinancialInputs) -> Option<FinancialResult> {
    required(inputs.venue_area)?;
    let daily_visitors = required(inputs.daily_visitors)?;
    let avg_ticket_price = required(inputs.avg_ticket_price)?;
    let operating_days = required(inputs.operating_days_per_year)?;
    let investment = required(inputs.equipment_investment)?;

    let annual_revenue = daily_visitors * avg_ticket_price * operating_days;
    let annual_operating_cost = annual_revenue * (inputs.effective_operating_cost_percent() / 100.0);
    let annual_net_profit = annual_revenue - annual_operating_cost;

    let payback_period_years = if investment == 0.0 {
        0.0
    } else {
        investment / annual_net_profit
    };

    let five_year_npv = net_present_value(
        annual_net_profit,
        inputs.effective_discount_rate_percent(),
        NPV_HORIZON_YEARS,
        investment,
    );

    tracing::debug!(
        annual_revenue,
        annual_net_profit,
        payback_period_years,
        five_year_npv,
        "financial projection"
    );

    Some(FinancialResult {
        annual_revenue,
        annual_operating_cost,
        annual_net_profit,
        payback_period_years,
        five_year_npv,
    })
}

/// NPV of a level annual cash flow received at the end of years `1..=years`,
/// less an up-front investment.
pub fn net_present_value(annual_cash_flow: f64, discount_rate_percent: f64, years: u32, investment: f64) -> f64 {
    let factor = 1.0 + discount_rate_percent / 100.0;
    let discounted: f64 = (1..=years)
        .map(|year| annual_cash_flow / factor.powi(year as i32))
        .sum();
    discounted - investment
}

/// Convenience for form-driven callers: parse then project.
pub fn project_form(form: &FinancialForm) -> Option<FinancialResult> {
    project(&FinancialInputs::from_form(form))
}

// ============================================================================
// Capacity-based revenue curve
// ============================================================================

/// Industry-average ticket price per ride in USD
pub const CAPACITY_TICKET_PRICE: f64 = 5.0;
pub const CAPACITY_DAILY_OPERATING_HOURS: f64 = 10.0;
pub const CAPACITY_DAYS_PER_YEAR: f64 = 365.0;
/// Average share of seats filled per hour of operation
pub const CAPACITY_UTILISATION: f64 = 0.7;
pub const CAPACITY_ANNUAL_GROWTH: f64 = 0.15;

/// Projected revenue for one year of the capacity curve
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearRevenue {
    pub year: u32,
    /// Whole dollars
    pub revenue: i64,
}

/// Five-year revenue curve for a set of rides, based on seat capacity alone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapacityProjection {
    /// Sum of riders per cycle across all rides
    pub total_capacity: i64,
    pub product_count: usize,
    pub base_annual_revenue: f64,
    pub years: Vec<YearRevenue>,
}

impl CapacityProjection {
    /// Highest yearly revenue, used to scale the chart
    pub fn peak_revenue(&self) -> i64 {
        self.years.iter().map(|y| y.revenue).max().unwrap_or(0)
    }
}

/// Project revenue from the combined rider capacity of `items`.
///
/// Riders that do not read as an integer count as zero, and the total
/// saturates instead of overflowing. Returns `None` when the total capacity
/// is zero.
pub fn capacity_projection<'a, I>(items: I) -> Option<CapacityProjection>
where
    I: IntoIterator<Item = &'a CatalogItem>,
{
    let (total_capacity, product_count) = items
        .into_iter()
        .fold((0i64, 0usize), |(sum, count), item| {
            (sum.saturating_add(item.rider_count().unwrap_or(0)), count + 1)
        });

    if total_capacity == 0 {
        return None;
    }

    let base_daily_revenue = total_capacity as f64
        * CAPACITY_TICKET_PRICE
        * CAPACITY_UTILISATION
        * CAPACITY_DAILY_OPERATING_HOURS;
    let base_annual_revenue = base_daily_revenue * CAPACITY_DAYS_PER_YEAR;

    let years = (1..=NPV_HORIZON_YEARS)
        .map(|year| YearRevenue {
            year,
            revenue: (base_annual_revenue * (1.0 + CAPACITY_ANNUAL_GROWTH).powi(year as i32 - 1)).round()
                as i64,
        })
        .collect();

    Some(CapacityProjection {
        total_capacity,
        product_count,
        base_annual_revenue,
        years,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::LocalizedText;

    fn reference_inputs() -> FinancialInputs {
        FinancialInputs {
            venue_area: Some(1200.0),
            daily_visitors: Some(500.0),
            avg_ticket_price: Some(25.0),
            operating_days_per_year: Some(300.0),
            equipment_investment: Some(500_000.0),
            operating_cost_percent: Some(30.0),
            discount_rate_percent: Some(10.0),
        }
    }

    #[test]
    fn test_reference_scenario() {
        let result = project(&reference_inputs()).unwrap();

        assert_eq!(result.annual_revenue, 3_750_000.0);
        assert!((result.annual_operating_cost - 1_125_000.0).abs() < 1e-6);
        assert!((result.annual_net_profit - 2_625_000.0).abs() < 1e-6);
        assert!((result.payback_period_years - 0.190476).abs() < 1e-4);

        let expected_npv: f64 = (1..=5).map(|n| 2_625_000.0 / 1.1f64.powi(n)).sum::<f64>() - 500_000.0;
        assert!((result.five_year_npv - expected_npv).abs() < 1e-6);
        assert!((result.five_year_npv - 9_450_815.27).abs() < 0.01);
    }

    #[test]
    fn test_defaults_apply_when_rates_missing() {
        let mut inputs = reference_inputs();
        inputs.operating_cost_percent = None;
        inputs.discount_rate_percent = None;
        assert_eq!(project(&inputs), project(&reference_inputs()));

        inputs.operating_cost_percent = Some(f64::NAN);
        assert_eq!(inputs.effective_operating_cost_percent(), DEFAULT_OPERATING_COST_PERCENT);
    }

    #[test]
    fn test_explicit_zero_cost_is_respected() {
        let mut inputs = reference_inputs();
        inputs.operating_cost_percent = Some(0.0);
        let result = project(&inputs).unwrap();
        assert_eq!(result.annual_operating_cost, 0.0);
        assert_eq!(result.annual_net_profit, result.annual_revenue);
    }

    #[test]
    fn test_incomplete_inputs_have_no_result() {
        let mut inputs = reference_inputs();
        inputs.venue_area = None;
        assert!(project(&inputs).is_none());
        assert_eq!(inputs.missing_fields(), vec!["venue_area"]);

        let mut inputs = reference_inputs();
        inputs.daily_visitors = Some(0.0);
        assert!(project(&inputs).is_none());

        let mut inputs = reference_inputs();
        inputs.equipment_investment = Some(f64::NAN);
        assert!(project(&inputs).is_none());

        assert!(project(&FinancialInputs::default()).is_none());
        assert_eq!(FinancialInputs::default().missing_fields().len(), 5);
    }

    #[test]
    fn test_venue_area_does_not_affect_figures() {
        let mut inputs = reference_inputs();
        inputs.venue_area = Some(1.0);
        assert_eq!(project(&inputs), project(&reference_inputs()));
    }

    #[test]
    fn test_zero_net_profit_gives_infinite_payback() {
        let mut inputs = reference_inputs();
        inputs.operating_cost_percent = Some(100.0);
        let result = project(&inputs).unwrap();
        assert_eq!(result.annual_net_profit, 0.0);
        assert!(result.payback_period_years.is_infinite());
        assert!(result.payback_period_years > 0.0);
        assert!((result.five_year_npv + 500_000.0).abs() < 1e-6);
    }

    #[test]
    fn test_loss_gives_negative_payback() {
        let mut inputs = reference_inputs();
        inputs.operating_cost_percent = Some(150.0);
        let result = project(&inputs).unwrap();
        assert!(result.annual_net_profit < 0.0);
        assert!(result.payback_period_years < 0.0);
        assert!(result.five_year_npv < -500_000.0);
    }

    #[test]
    fn test_negative_investment_is_not_clamped() {
        let mut inputs = reference_inputs();
        inputs.equipment_investment = Some(-100_000.0);
        let result = project(&inputs).unwrap();
        assert!(result.payback_period_years < 0.0);
        let base = project(&reference_inputs()).unwrap();
        assert!((result.five_year_npv - (base.five_year_npv + 600_000.0)).abs() < 1e-6);
    }

    #[test]
    fn test_zero_discount_rate_is_plain_sum() {
        assert_eq!(net_present_value(100.0, 0.0, 5, 50.0), 450.0);
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("500"), Some(500.0));
        assert_eq!(parse_number(" 25.5 "), Some(25.5));
        assert_eq!(parse_number("25 USD"), Some(25.0));
        assert_eq!(parse_number("-3"), Some(-3.0));
        assert_eq!(parse_number(".5"), Some(0.5));
        assert_eq!(parse_number("1e3"), Some(1000.0));
        assert_eq!(parse_number("2e"), Some(2.0));
        assert_eq!(parse_number("1,000"), Some(1.0));
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("abc"), None);
        assert_eq!(parse_number("-"), None);
        assert_eq!(parse_number("."), None);
    }

    #[test]
    fn test_project_form() {
        let form = FinancialForm {
            venue_area: "1200".to_string(),
            daily_visitors: "500".to_string(),
            avg_ticket_price: "25".to_string(),
            operating_days_per_year: "300".to_string(),
            equipment_investment: "500000".to_string(),
            operating_cost_percent: "".to_string(),
            discount_rate_percent: "ten".to_string(),
        };
        let result = project_form(&form).unwrap();
        assert!((result.annual_net_profit - 2_625_000.0).abs() < 1e-6);

        let incomplete = FinancialForm {
            equipment_investment: String::new(),
            ..form
        };
        assert!(project_form(&incomplete).is_none());
    }

    fn ride(riders: &str) -> CatalogItem {
        CatalogItem::new(LocalizedText::new("Ride", ""), LocalizedText::new("Family Ride", "")).with_riders(riders)
    }

    #[test]
    fn test_capacity_projection() {
        let items = vec![ride("36"), ride("2"), ride("N/A")];
        let projection = capacity_projection(&items).unwrap();

        assert_eq!(projection.total_capacity, 38);
        assert_eq!(projection.product_count, 3);
        // 38 × 5 × 0.7 × 10 × 365
        assert!((projection.base_annual_revenue - 485_450.0).abs() < 1e-6);
        assert_eq!(projection.years.len(), 5);
        assert_eq!(projection.years[0], YearRevenue { year: 1, revenue: 485_450 });
        assert_eq!(projection.years[1].revenue, 558_268);
        assert_eq!(projection.peak_revenue(), projection.years[4].revenue);
    }

    #[test]
    fn test_capacity_projection_saturates_huge_rider_counts() {
        let items = vec![ride("9223372036854775807"), ride("9223372036854775807")];
        let projection = capacity_projection(&items).unwrap();

        assert_eq!(projection.total_capacity, i64::MAX);
        assert_eq!(projection.product_count, 2);
        // Float to integer casts clamp at the i64 range
        assert!(projection.years.iter().all(|y| y.revenue == i64::MAX));
    }

    #[test]
    fn test_capacity_projection_empty() {
        assert!(capacity_projection(&Vec::<CatalogItem>::new()).is_none());
        assert!(capacity_projection(&[ride("N/A")]).is_none());
    }
}
