//! Report rendering.

use std::io::Write;

use chrono::NaiveDate;
use clap::Args;

use sales_tracker_core::report::{AttendantReport, CommissionedSale, Report};
use sales_tracker_core::types::money::format_brl;
use sales_tracker_core::{DISPLAY_DATE_FORMAT, FilterSpec, ReportBuilder, Sale, UserId};

use crate::error::CliError;
use crate::file_store::FileStore;

/// Filter options shared by both report views.
#[derive(Debug, Clone, Default, Args)]
pub struct FilterArgs {
    /// Free-text search. The admin view matches client name, phone,
    /// attendant name and month name; the attendant view matches client
    /// name, phone, date (dd/mm/yyyy) and value.
    #[arg(short, long)]
    pub search: Option<String>,

    /// Only sales recorded by this attendant id
    #[arg(short, long)]
    pub attendant: Option<String>,

    /// Only sales in this year
    #[arg(short, long)]
    pub year: Option<i32>,

    /// Only sales in this month (1-12)
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=12))]
    pub month: Option<u32>,

    /// Only sales on or after this date (YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<NaiveDate>,

    /// Only sales on or before this date (YYYY-MM-DD)
    #[arg(long)]
    pub to: Option<NaiveDate>,
}

impl From<FilterArgs> for FilterSpec {
    fn from(args: FilterArgs) -> Self {
        Self {
            search_term: args.search,
            attendant_id: args.attendant.map(UserId::from),
            year: args.year,
            month: args.month,
            date_from: args.from,
            date_to: args.to,
        }
    }
}

/// Print the full report.
///
/// # Errors
///
/// Returns an error if the data file cannot be read or the output cannot be written.
pub async fn admin(
    store: &FileStore,
    spec: &FilterSpec,
    json: bool,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let data = store.load().await?;
    let report = ReportBuilder::new(&data).build(spec)?;

    if json {
        serde_json::to_writer_pretty(&mut *out, &report)?;
        writeln!(out)?;
    } else {
        render_admin(&report, out)?;
    }
    Ok(())
}

/// Print one attendant's own report.
///
/// # Errors
///
/// Returns `CliError::NotAnAttendant` if `id` is an admin account, or an
/// error if the account does not exist or the output cannot be written.
pub async fn attendant(
    store: &FileStore,
    id: &UserId,
    spec: &FilterSpec,
    json: bool,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let data = store.load().await?;
    if data.user(id).is_some_and(|u| !u.is_attendant()) {
        return Err(CliError::NotAnAttendant(id.clone()));
    }
    let report = ReportBuilder::new(&data).build_for_attendant(id, spec)?;

    if json {
        serde_json::to_writer_pretty(&mut *out, &report)?;
        writeln!(out)?;
    } else {
        render_attendant(&report, out)?;
    }
    Ok(())
}

fn render_admin(report: &Report, out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out, "Total de vendas: {}", format_brl(report.totals.value))?;
    writeln!(out, "Quantidade:      {}", report.totals.count)?;
    writeln!(
        out,
        "Ticket médio:    {}",
        format_brl(report.totals.average_ticket)
    )?;
    if report.malformed_dates > 0 {
        writeln!(
            out,
            "Sem data válida: {} (fora do resumo mensal)",
            report.malformed_dates
        )?;
    }

    for group in &report.monthly_groups {
        writeln!(out)?;
        writeln!(
            out,
            "{} {} - {} venda(s), {}",
            group.month_name,
            group.year,
            group.count,
            format_brl(group.total_value)
        )?;
        for sale in &group.sales {
            write_sale(sale, true, out)?;
        }
    }

    writeln!(out)?;
    writeln!(out, "Desempenho por atendente")?;
    if report.attendant_stats.is_empty() {
        writeln!(out, "  (nenhum atendente cadastrado)")?;
    }
    for stat in &report.attendant_stats {
        writeln!(
            out,
            "  {:<20} {:>3} venda(s)  total {}  comissão {}% = {}  ticket médio {}",
            stat.name,
            stat.sale_count,
            format_brl(stat.total_value),
            stat.commission_rate.normalize(),
            format_brl(stat.total_commission),
            format_brl(stat.average_ticket)
        )?;
    }
    Ok(())
}

fn render_attendant(report: &AttendantReport, out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out, "{} ({})", report.attendant_name, report.attendant_id)?;
    writeln!(out, "Total de vendas: {}", format_brl(report.totals.value))?;
    writeln!(out, "Quantidade:      {}", report.totals.count)?;
    writeln!(
        out,
        "Comissão ({}%):  {}",
        report.commission_rate.normalize(),
        format_brl(report.total_commission)
    )?;
    writeln!(out)?;

    if report.sales.is_empty() {
        writeln!(out, "Nenhuma venda encontrada.")?;
    }
    for row in &report.sales {
        write_own_sale(row, out)?;
    }
    Ok(())
}

fn write_own_sale(row: &CommissionedSale, out: &mut impl Write) -> std::io::Result<()> {
    let sale = &row.sale;
    let date = sale.date.date().map_or_else(
        || sale.date.to_string(),
        |d| d.format(DISPLAY_DATE_FORMAT).to_string(),
    );
    writeln!(
        out,
        "  {date:<10}  {:<24} {:<16} {:<18} {:>14}  comissão {}",
        sale.client_name,
        sale.client_phone,
        sale.payment_method.label(),
        format_brl(sale.value),
        format_brl(row.commission)
    )
}

fn write_sale(sale: &Sale, with_attendant: bool, out: &mut impl Write) -> std::io::Result<()> {
    write!(
        out,
        "  {}  {:<24} {:<16} {:>14}  {}",
        sale.date,
        sale.client_name,
        sale.client_phone,
        format_brl(sale.value),
        sale.payment_method.label()
    )?;
    if with_attendant {
        write!(out, "  {}", sale.attendant_name)?;
    }
    writeln!(out)
}
