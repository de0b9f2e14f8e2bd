use crate::{
    Dashboard, InvoiceDetail, LedgerRow, MonthlyReport, ResultEngine, SaleSummary, summary,
};

use super::{Engine, ListOrder};

impl Engine {
    /// Sums the ledger per calendar month of the sale date.
    pub async fn monthly_report(&self) -> ResultEngine<MonthlyReport> {
        let sales = self.sales(ListOrder::OldestFirst).await?;
        let report = summary::monthly_summary(&sales);
        if report.excluded > 0 {
            tracing::info!(
                excluded = report.excluded,
                "sales with unparseable dates left out of monthly summary"
            );
        }
        Ok(report)
    }

    /// Overall profit, split by party and by supplier.
    pub async fn dashboard_report(&self) -> ResultEngine<Dashboard> {
        let sales = self.sales(ListOrder::OldestFirst).await?;
        Ok(summary::dashboard(&sales))
    }

    /// Full-detail rows in insertion order, for spreadsheet exports.
    pub async fn ledger_rows(&self) -> ResultEngine<Vec<LedgerRow>> {
        let sales = self.sales(ListOrder::OldestFirst).await?;
        Ok(sales.into_iter().map(LedgerRow::from).collect())
    }

    /// Listing rows, most recent first.
    pub async fn sale_summaries(&self, order: ListOrder) -> ResultEngine<Vec<SaleSummary>> {
        let sales = self.sales(order).await?;
        Ok(sales.into_iter().map(SaleSummary::from).collect())
    }

    /// One sale with display-rounded derived values, for invoice rendering.
    pub async fn invoice_detail(&self, id: i64) -> ResultEngine<InvoiceDetail> {
        self.sale(id).await.map(InvoiceDetail::from)
    }
}
