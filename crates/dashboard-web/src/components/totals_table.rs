use leptos::prelude::*;
use report_core::format_date;

use super::table::{EmptyState, TableState};
use crate::api::{FinancialTotal, format_brl, format_percent};

pub const TOTALS_COLUMNS: usize = 5;

/// Sum of income, expenses and balance across categories
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PeriodTotals {
    pub income: f64,
    pub expenses: f64,
    pub balance: f64,
}

impl PeriodTotals {
    pub fn sum(rows: &[FinancialTotal]) -> Self {
        rows.iter().fold(Self::default(), |acc, row| Self {
            income: acc.income + row.income,
            expenses: acc.expenses + row.expenses,
            balance: acc.balance + row.net_balance(),
        })
    }
}

/// Financial totals by category, or the matching empty/unavailable message
#[component]
pub fn FinancialTotalsTable(rows: Option<Vec<FinancialTotal>>) -> impl IntoView {
    let state = TableState::of(rows.as_deref());
    match (state, rows) {
        (TableState::Populated(_), Some(rows)) => view! { <TotalsRows rows=rows /> }.into_any(),
        (TableState::Empty, _) => {
            view! { <EmptyState message="Nenhum lançamento financeiro neste período." /> }.into_any()
        }
        _ => view! { <EmptyState message="Totais financeiros indisponíveis no momento." /> }.into_any(),
    }
}

#[component]
fn TotalsRows(rows: Vec<FinancialTotal>) -> impl IntoView {
    let totals = PeriodTotals::sum(&rows);

    view! {
        <table class="w-full text-left">
            <thead>
                <tr class="text-[var(--ink-light)]">
                    <th class="pr-4">"Categoria"</th>
                    <th class="pr-4 text-right">"Receitas"</th>
                    <th class="pr-4 text-right">"Despesas"</th>
                    <th class="pr-4 text-right">"Saldo"</th>
                    <th>"Atualizado em"</th>
                </tr>
            </thead>
            <tbody>
                {rows.into_iter().map(|row| {
                    let balance = format_brl(row.net_balance());
                    let margin = row.margin_percent().map(|m| format!(" ({})", format_percent(m, 1)));
                    let updated = format_date(row.updated_at.as_deref());
                    view! {
                        <tr>
                            <td class="pr-4">{row.category}</td>
                            <td class="pr-4 text-right">{format_brl(row.income)}</td>
                            <td class="pr-4 text-right">{format_brl(row.expenses)}</td>
                            <td class="pr-4 text-right">{balance} {margin}</td>
                            <td>{updated}</td>
                        </tr>
                    }
                }).collect_view()}
            </tbody>
            <tfoot>
                <tr class="font-bold">
                    <td class="pr-4">"Total"</td>
                    <td class="pr-4 text-right">{format_brl(totals.income)}</td>
                    <td class="pr-4 text-right">{format_brl(totals.expenses)}</td>
                    <td class="pr-4 text-right">{format_brl(totals.balance)}</td>
                    <td></td>
                </tr>
            </tfoot>
        </table>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn total(category: &str, income: f64, expenses: f64, balance: Option<f64>) -> FinancialTotal {
        FinancialTotal {
            category: category.to_string(),
            income,
            expenses,
            balance,
            updated_at: None,
        }
    }

    #[test]
    fn test_period_totals_sum() {
        let rows = vec![
            total("Mensalidades", 5000.0, 0.0, None),
            total("Aluguel", 0.0, 1800.0, None),
            total("Material", 200.0, 350.0, Some(-100.0)),
        ];

        let totals = PeriodTotals::sum(&rows);
        assert_eq!(totals.income, 5200.0);
        assert_eq!(totals.expenses, 2150.0);
        assert_eq!(totals.balance, 3100.0);
    }

    #[test]
    fn test_period_totals_empty() {
        assert_eq!(PeriodTotals::sum(&[]), PeriodTotals::default());
    }
}
