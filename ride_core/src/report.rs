//! # ROI Report Export
//!
//! Renders a financial projection as a plain-text report in the caller's
//! display language and writes it next to other downloads.
//!
//! The report is for people, not machines: it echoes every input, lists
//! the five result figures, and formats money with zero decimals.
//!
//! ## Example
//!
//! ```rust,no_run
//! use chrono::NaiveDate;
//! use ride_core::catalog::Lang;
//! use ride_core::finance::{project, FinancialInputs};
//! use ride_core::report::export_report;
//! use std::path::Path;
//!
//! let inputs = FinancialInputs {
//!     venue_area: Some(1200.0),
//!     daily_visitors: Some(500.0),
//!     avg_ticket_price: Some(25.0),
//!     operating_days_per_year: Some(300.0),
//!     equipment_investment: Some(500_000.0),
//!     ..Default::default()
//! };
//! let result = project(&inputs).unwrap();
//! let date = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
//! let path = export_report(Path::new("."), &inputs, &result, Lang::En, date)?;
//! assert!(path.ends_with("roi-report-2026-10-18.txt"));
//! # Ok::<(), ride_core::errors::RideError>(())
//! ```

use std::fmt::Write as _;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::catalog::Lang;
use crate::errors::{RideError, RideResult};
use crate::finance::FinancialInputs;
use crate::finance::FinancialResult;

struct ReportLabels {
    title: &'static str,
    generated: &'static str,
    inputs: &'static str,
    results: &'static str,
    venue_area: &'static str,
    daily_visitors: &'static str,
    avg_ticket_price: &'static str,
    operating_days: &'static str,
    equipment_investment: &'static str,
    operating_cost_percent: &'static str,
    discount_rate_percent: &'static str,
    annual_revenue: &'static str,
    annual_operating_cost: &'static str,
    annual_net_profit: &'static str,
    payback_period: &'static str,
    years: &'static str,
    five_year_npv: &'static str,
    area_unit: &'static str,
    currency_prefix: &'static str,
}

const LABELS_EN: ReportLabels = ReportLabels {
    title: "Ride Investment ROI Report",
    generated: "Generated",
    inputs: "Inputs",
    results: "Results",
    venue_area: "Venue area",
    daily_visitors: "Daily visitors",
    avg_ticket_price: "Average ticket price",
    operating_days: "Operating days per year",
    equipment_investment: "Equipment investment",
    operating_cost_percent: "Operating cost",
    discount_rate_percent: "Discount rate",
    annual_revenue: "Annual revenue",
    annual_operating_cost: "Annual operating cost",
    annual_net_profit: "Annual net profit",
    payback_period: "Payback period",
    years: "years",
    five_year_npv: "5-year NPV",
    area_unit: "m²",
    currency_prefix: "$",
};

const LABELS_ZH: ReportLabels = ReportLabels {
    title: "游乐设备投资回报报告",
    generated: "生成日期",
    inputs: "输入参数",
    results: "计算结果",
    venue_area: "场地面积",
    daily_visitors: "日均游客量",
    avg_ticket_price: "平均票价",
    operating_days: "年运营天数",
    equipment_investment: "设备投资",
    operating_cost_percent: "运营成本占比",
    discount_rate_percent: "折现率",
    annual_revenue: "年收入",
    annual_operating_cost: "年运营成本",
    annual_net_profit: "年净利润",
    payback_period: "投资回收期",
    years: "年",
    five_year_npv: "5年净现值",
    area_unit: "平方米",
    currency_prefix: "US$",
};

fn labels(lang: Lang) -> &'static ReportLabels {
    match lang {
        Lang::En => &LABELS_EN,
        Lang::Zh => &LABELS_ZH,
    }
}

/// Format a USD amount with no decimals and thousands separators.
///
/// English uses `$1,234`, Chinese `US$1,234`. Non-finite amounts print as
/// `∞`, `-∞` or `NaN` so degenerate projections stay readable.
pub fn format_currency(value: f64, lang: Lang) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "∞".to_string() } else { "-∞".to_string() };
    }

    let rounded = value.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!(
        "{}{}{}",
        sign,
        labels(lang).currency_prefix,
        group_thousands(rounded.abs())
    )
}

/// Whole-number part of a non-negative value with `,` every three digits
fn group_thousands(value: f64) -> String {
    let digits = format!("{:.0}", value);
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Plain number with up to two decimals, trailing zeros dropped
fn format_plain(value: f64) -> String {
    if !value.is_finite() {
        return format!("{}", value);
    }
    let text = format!("{:.2}", value);
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

fn format_years(value: f64, lang: Lang) -> String {
    if value.is_infinite() {
        let sign = if value < 0.0 { "-" } else { "" };
        return format!("{}∞ {}", sign, labels(lang).years);
    }
    format!("{:.2} {}", value, labels(lang).years)
}

/// Render the report text.
pub fn render_report(
    inputs: &FinancialInputs,
    result: &FinancialResult,
    lang: Lang,
    generated: NaiveDate,
) -> String {
    let l = labels(lang);
    let missing = || "-".to_string();
    let money = |v: Option<f64>| v.map(|v| format_currency(v, lang)).unwrap_or_else(missing);
    let plain = |v: Option<f64>| v.map(format_plain).unwrap_or_else(missing);

    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = writeln!(out, "{}", l.title);
    let _ = writeln!(out, "{}: {}", l.generated, generated.format("%Y-%m-%d"));
    let _ = writeln!(out);

    let _ = writeln!(out, "{}", l.inputs);
    let _ = writeln!(
        out,
        "  {}: {}",
        l.venue_area,
        inputs
            .venue_area
            .map(|v| format!("{} {}", format_plain(v), l.area_unit))
            .unwrap_or_else(missing)
    );
    let _ = writeln!(out, "  {}: {}", l.daily_visitors, plain(inputs.daily_visitors));
    let _ = writeln!(out, "  {}: {}", l.avg_ticket_price, money(inputs.avg_ticket_price));
    let _ = writeln!(out, "  {}: {}", l.operating_days, plain(inputs.operating_days_per_year));
    let _ = writeln!(out, "  {}: {}", l.equipment_investment, money(inputs.equipment_investment));
    let _ = writeln!(
        out,
        "  {}: {}%",
        l.operating_cost_percent,
        format_plain(inputs.effective_operating_cost_percent())
    );
    let _ = writeln!(
        out,
        "  {}: {}%",
        l.discount_rate_percent,
        format_plain(inputs.effective_discount_rate_percent())
    );
    let _ = writeln!(out);

    let _ = writeln!(out, "{}", l.results);
    out.push_str(&render_results(result, lang));
    out
}

/// The five result lines of the report, indented, one per line.
pub fn render_results(result: &FinancialResult, lang: Lang) -> String {
    let l = labels(lang);
    let mut out = String::new();
    let _ = writeln!(out, "  {}: {}", l.annual_revenue, format_currency(result.annual_revenue, lang));
    let _ = writeln!(
        out,
        "  {}: {}",
        l.annual_operating_cost,
        format_currency(result.annual_operating_cost, lang)
    );
    let _ = writeln!(out, "  {}: {}", l.annual_net_profit, format_currency(result.annual_net_profit, lang));
    let _ = writeln!(out, "  {}: {}", l.payback_period, format_years(result.payback_period_years, lang));
    let _ = writeln!(out, "  {}: {}", l.five_year_npv, format_currency(result.five_year_npv, lang));
    out
}

/// File name of the report for a given day
pub fn report_file_name(date: NaiveDate) -> String {
    format!("roi-report-{}.txt", date.format("%Y-%m-%d"))
}

/// Write the report into `dir` with atomic write semantics.
///
/// The text goes to a `.tmp` file first, is synced, then renamed over the
/// final name, so an interrupted export never leaves a half-written report.
pub fn export_report(
    dir: &Path,
    inputs: &FinancialInputs,
    result: &FinancialResult,
    lang: Lang,
    date: NaiveDate,
) -> RideResult<PathBuf> {
    let text = render_report(inputs, result, lang, date);
    let path = dir.join(report_file_name(date));
    let tmp_path = path.with_extension("txt.tmp");

    let mut tmp_file = File::create(&tmp_path).map_err(|e| {
        RideError::file_error("create temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.write_all(text.as_bytes()).map_err(|e| {
        RideError::file_error("write temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.sync_all().map_err(|e| {
        RideError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    fs::rename(&tmp_path, &path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        RideError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    tracing::info!(path = %path.display(), "exported ROI report");
    Ok(path)
}
