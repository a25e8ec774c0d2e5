//! Builds the JSON report printed by the explorer.

use anyhow::Context;
use livingcost_core::budget::{BudgetAllocator, BudgetSession, FlowBand, flow_bands};
use livingcost_core::color::{Domain, LegendSpec};
use livingcost_core::compare::{ComparisonTable, SortKey};
use livingcost_core::currency::{CurrencyConverter, RateTable};
use livingcost_core::data::{Category, DataError, DataIndex, Metric};
use livingcost_data::StaticData;
use livingcost_shared::{AppConfig, AppError, AppResult, CurrencyCode, Money};
use serde::Serialize;
use tracing::{info, warn};

/// Everything the explorer prints.
#[derive(Debug, Serialize)]
pub struct Report {
    /// Min/max of every metric over the loaded countries.
    pub domains: Vec<MetricDomain>,
    /// Heatmap legends for the three map tabs.
    pub legends: Vec<LegendSpec>,
    /// Configured comparison.
    pub comparison: ComparisonTable,
    /// Configured budget session.
    pub budget: BudgetReport,
}

/// Domain of one metric; `None` when no location has data.
#[derive(Debug, Serialize)]
pub struct MetricDomain {
    /// Metric name.
    pub metric: String,
    /// Observed range.
    pub domain: Option<Domain>,
}

/// Budget session with its flow diagram.
#[derive(Debug, Serialize)]
pub struct BudgetReport {
    /// Location the averages come from.
    pub location: String,
    /// Session state.
    pub session: BudgetSession,
    /// Total with currency symbol.
    pub total_display: String,
    /// Savings with currency symbol.
    pub savings_display: String,
    /// Flow diagram bands.
    pub flow: Vec<FlowBand>,
}

/// Builds the report for the given configuration.
///
/// # Errors
///
/// Fails when configured locations, currencies or sort keys are invalid.
pub fn build(config: &AppConfig, data: &StaticData) -> anyhow::Result<Report> {
    let domains = metric_domains(&data.index)?;
    let legends = legends(&data.index)?;

    let sort = config
        .compare
        .sort
        .as_deref()
        .map(str::parse::<SortKey>)
        .transpose()
        .map_err(AppError::Config)?;
    let comparison = ComparisonTable::build(
        &data.index,
        &config.compare.locations,
        &config.compare.base,
        sort,
    )
    .map_err(AppError::from)
    .context("building comparison table")?;
    if !comparison.excluded.is_empty() {
        warn!(excluded = comparison.excluded.len(), "Some locations could not be compared");
    }

    let budget = budget(config, data).context("building budget session")?;

    info!(
        metrics = domains.len(),
        compared = comparison.rows.len(),
        categories = budget.session.categories().len(),
        "Report built"
    );

    Ok(Report {
        domains,
        legends,
        comparison,
        budget,
    })
}

fn metrics() -> impl Iterator<Item = Metric> {
    [Metric::NetSalary, Metric::TotalExpenses, Metric::Savings]
        .into_iter()
        .chain(Category::ALL.into_iter().map(Metric::Category))
}

fn observed(index: &DataIndex, metric: Metric) -> AppResult<Option<Domain>> {
    match index.domain(metric) {
        Ok(domain) => Ok(Some(domain)),
        Err(DataError::NoData(_)) => Ok(None),
        Err(err) => Err(err.into()),
    }
}

fn metric_domains(index: &DataIndex) -> AppResult<Vec<MetricDomain>> {
    metrics()
        .map(|metric| {
            Ok(MetricDomain {
                metric: metric.to_string(),
                domain: observed(index, metric)?,
            })
        })
        .collect()
}

fn legends(index: &DataIndex) -> AppResult<Vec<LegendSpec>> {
    let mut legends = vec![LegendSpec::earn(), LegendSpec::spend(None)];
    legends.extend(Category::ALL.into_iter().map(|c| LegendSpec::spend(Some(c))));

    match observed(index, Metric::Savings)? {
        Some(domain) => match LegendSpec::saving(domain) {
            Ok(legend) => legends.push(legend),
            Err(err) => warn!(error = %err, "Skipping savings legend"),
        },
        None => warn!("No location has savings data"),
    }
    Ok(legends)
}

fn budget(config: &AppConfig, data: &StaticData) -> AppResult<BudgetReport> {
    let rates: &RateTable = &data.rates;
    let currency: CurrencyCode = config
        .budget
        .currency
        .parse()
        .map_err(AppError::UnknownCurrency)?;
    let base = rates
        .base()
        .cloned()
        .ok_or_else(|| AppError::InvalidData("rate table has no base currency".to_string()))?;

    let record = data.index.resolve(&config.budget.location)?;

    // Statistics are in the base currency; the configured total is not.
    let total_in_base =
        CurrencyConverter::convert_money(config.budget.total, &currency, &base, rates)?;
    let session = BudgetSession::from_location(record, total_in_base, base)?;
    let session = BudgetAllocator::set_total_budget(&session, total_in_base)?;
    let session = BudgetAllocator::change_currency(&session, &currency, rates)?;

    let flow = flow_bands(&session)?;

    Ok(BudgetReport {
        location: record.code.clone(),
        total_display: Money::new(session.total_budget(), currency.clone()).with_symbol(),
        savings_display: Money::new(session.savings(), currency).with_symbol(),
        session,
        flow,
    })
}
