//! Budget engine
//!
//! Turns a month's configuration into a half-month budget: charity gifts on
//! the confirmed income, half of every monthly expense, the bills that fall
//! due in the selected half, and whatever is left over. All arithmetic is
//! exact; nothing is rounded until it is displayed. A figure that leaves the
//! decimal range is an [`PaydayError::AmountOverflow`].

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

use crate::error::{PaydayError, PaydayResult};
use crate::models::{Bill, BudgetConfig, Charity, Expense, HalfMonth, Money};
use crate::reports::rows::{BILLS_CAPTION, CHARITIES_CAPTION, EXPENSES_CAPTION};
use crate::reports::{BalanceOutcome, ReportSection};
use crate::services::income::sum_income;

/// Share of a monthly expense budgeted in one half-month
pub const HALF_MONTH_SHARE: Decimal = dec!(0.5);

/// A finished half-month budget
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BudgetResult {
    pub half: HalfMonth,
    pub income: Money,
    pub charities: ReportSection,
    pub expenses: ReportSection,
    pub bills: ReportSection,
    pub balance: Money,
}

impl BudgetResult {
    /// Sign classification of the balance
    pub fn outcome(&self) -> BalanceOutcome {
        BalanceOutcome::from_balance(self.balance)
    }

    /// The three sections in report order
    pub fn sections(&self) -> [&ReportSection; 3] {
        [&self.charities, &self.expenses, &self.bills]
    }
}

/// Charity gifts for the period
///
/// Percentage charities take their share of `income`; flat charities give
/// their configured amount whatever the income.
pub fn compute_charity_rows(charities: &[Charity], income: Money) -> PaydayResult<ReportSection> {
    let mut section = ReportSection::new(CHARITIES_CAPTION);
    for charity in charities {
        let amount = charity
            .contribution
            .amount_for(income)
            .ok_or_else(|| PaydayError::amount_overflow(format!("charity '{}'", charity.name)))?;
        tracing::debug!(charity = %charity.name, amount = %amount, "charity contribution");
        section.push(charity.name.clone(), amount)?;
    }
    Ok(section)
}

/// Half of every monthly expense
pub fn compute_expense_rows(expenses: &[Expense]) -> PaydayResult<ReportSection> {
    let mut section = ReportSection::new(EXPENSES_CAPTION);
    for expense in expenses {
        let budgeted = expense
            .amount
            .checked_scale_by(HALF_MONTH_SHARE)
            .ok_or_else(|| PaydayError::amount_overflow(format!("expense '{}'", expense.name)))?;
        tracing::debug!(expense = %expense.name, monthly = %expense.amount, budgeted = %budgeted, "expense halved");
        section.push(expense.name.clone(), budgeted)?;
    }
    Ok(section)
}

/// Bills due in the given half, in configuration order
pub fn select_bills_for_half(bills: &[Bill], half: HalfMonth) -> Vec<&Bill> {
    bills.iter().filter(|bill| bill.is_due_in(half)).collect()
}

/// Rows for the selected bills at their full amounts
pub fn compute_bill_rows(selected: &[&Bill]) -> PaydayResult<ReportSection> {
    let mut section = ReportSection::new(BILLS_CAPTION);
    for bill in selected {
        section.push(bill.name.clone(), bill.amount)?;
    }
    Ok(section)
}

/// `income - charity_total - expense_total - bill_total`
pub fn compute_balance(
    income: Money,
    charity_total: Money,
    expense_total: Money,
    bill_total: Money,
) -> PaydayResult<Money> {
    income
        .checked_sub(charity_total)
        .and_then(|rest| rest.checked_sub(expense_total))
        .and_then(|rest| rest.checked_sub(bill_total))
        .ok_or_else(|| PaydayError::amount_overflow("balance"))
}

/// Service that runs the budget engine over a loaded configuration
pub struct BudgetService<'a> {
    config: &'a BudgetConfig,
}

impl<'a> BudgetService<'a> {
    /// Create a new budget service
    pub fn new(config: &'a BudgetConfig) -> Self {
        Self { config }
    }

    /// Income expected from the configured paydays
    pub fn total_income(&self) -> PaydayResult<Money> {
        sum_income(&self.config.paydays)
    }

    /// Bills due in the given half
    pub fn bills_due(&self, half: HalfMonth) -> Vec<&'a Bill> {
        select_bills_for_half(&self.config.bills, half)
    }

    /// Build the half-month budget for a confirmed income
    pub fn calculate(&self, half: HalfMonth, income: Money) -> PaydayResult<BudgetResult> {
        let charities = compute_charity_rows(&self.config.charities, income)?;
        let expenses = compute_expense_rows(&self.config.expenses)?;
        let bills = compute_bill_rows(&self.bills_due(half))?;
        let balance = compute_balance(income, charities.total, expenses.total, bills.total)?;

        tracing::info!(
            half = %half,
            income = %income,
            charities = %charities.total,
            expenses = %expenses.total,
            bills = %bills.total,
            balance = %balance,
            "budget calculated"
        );

        Ok(BudgetResult {
            half,
            income,
            charities,
            expenses,
            bills,
            balance,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::IncomeSource;

    fn money(amount: Decimal) -> Money {
        Money::new(amount)
    }

    fn sample_bills() -> Vec<Bill> {
        vec![
            Bill::new("Rent", money(dec!(1200)), 1),
            Bill::new("Phone", money(dec!(55)), 14),
            Bill::new("Insurance", money(dec!(130)), 15),
            Bill::new("Gym", money(dec!(40)), 5),
            Bill::new("Internet", money(dec!(70)), 31),
        ]
    }

    #[test]
    fn test_percentage_charity_ignores_amount() {
        // amount is irrelevant once a percentage is set
        let charities = vec![Charity::percentage("Church", dec!(0.20))];
        let section = compute_charity_rows(&charities, money(dec!(1000.00))).unwrap();

        assert_eq!(section.rows[0].amount, money(dec!(200.00)));
        assert_eq!(section.total, money(dec!(200.00)));
    }

    #[test]
    fn test_flat_charity_ignores_income() {
        let charities = vec![Charity::flat("Food Bank", money(dec!(50.00)))];

        for income in [dec!(0), dec!(1000), dec!(123456.78)] {
            let section = compute_charity_rows(&charities, money(income)).unwrap();
            assert_eq!(section.rows[0].amount, money(dec!(50.00)));
        }
    }

    #[test]
    fn test_no_charities() {
        let section = compute_charity_rows(&[], money(dec!(1500))).unwrap();
        assert!(section.is_empty());
        assert!(section.total.is_zero());
    }

    #[test]
    fn test_expense_halving_is_exact() {
        let expenses = vec![Expense::new("Odd", money(dec!(33.33)))];
        let section = compute_expense_rows(&expenses).unwrap();

        assert_eq!(section.rows[0].amount.amount().to_string(), "16.665");
        assert_eq!(section.rows[0].amount.to_string(), "$16.67");
        assert_eq!(section.total, money(dec!(16.665)));
    }

    #[test]
    fn test_expense_total_sums_unrounded_halves() {
        let expenses = vec![
            Expense::new("A", money(dec!(33.33))),
            Expense::new("B", money(dec!(33.33))),
        ];
        let section = compute_expense_rows(&expenses).unwrap();
        // rounding each half first would give 33.34
        assert_eq!(section.total, money(dec!(33.33)));
    }

    #[test]
    fn test_no_expenses() {
        assert!(compute_expense_rows(&[]).unwrap().total.is_zero());
    }

    #[test]
    fn test_bill_selection_by_half() {
        let bills = sample_bills();

        let first: Vec<&str> = select_bills_for_half(&bills, HalfMonth::First)
            .iter()
            .map(|b| b.name.as_str())
            .collect();
        let second: Vec<&str> = select_bills_for_half(&bills, HalfMonth::Second)
            .iter()
            .map(|b| b.name.as_str())
            .collect();

        assert_eq!(first, vec!["Rent", "Phone", "Gym"]);
        assert_eq!(second, vec!["Insurance", "Internet"]);
    }

    #[test]
    fn test_bill_halves_partition_the_month() {
        let bills: Vec<Bill> = (1..=31)
            .map(|day| Bill::new(format!("bill-{day}"), money(Decimal::from(day)), day))
            .collect();

        let first = select_bills_for_half(&bills, HalfMonth::First);
        let second = select_bills_for_half(&bills, HalfMonth::Second);

        assert_eq!(first.len() + second.len(), bills.len());
        for bill in &bills {
            let in_first = first.iter().any(|b| b.name == bill.name);
            let in_second = second.iter().any(|b| b.name == bill.name);
            assert!(in_first ^ in_second, "{} must be in exactly one half", bill.name);
        }
    }

    #[test]
    fn test_bills_are_charged_in_full() {
        let bills = sample_bills();
        let selected = select_bills_for_half(&bills, HalfMonth::Second);
        let section = compute_bill_rows(&selected).unwrap();

        assert_eq!(section.rows[0].amount, money(dec!(130)));
        assert_eq!(section.total, money(dec!(200)));
    }

    #[test]
    fn test_balance_break_even() {
        let balance = compute_balance(
            money(dec!(1000)),
            money(dec!(100)),
            money(dec!(200)),
            money(dec!(700)),
        )
        .unwrap();
        assert!(balance.is_zero());
        assert_eq!(BalanceOutcome::from_balance(balance), BalanceOutcome::BreakEven);
    }

    #[test]
    fn test_balance_shortfall() {
        let balance = compute_balance(
            money(dec!(1000)),
            money(dec!(200)),
            money(dec!(300)),
            money(dec!(700)),
        )
        .unwrap();
        assert_eq!(balance, money(dec!(-200)));
        assert_eq!(
            BalanceOutcome::from_balance(balance),
            BalanceOutcome::Shortfall(money(dec!(200.00)))
        );
    }

    #[test]
    fn test_balance_surplus() {
        let balance = compute_balance(
            money(dec!(1000)),
            money(dec!(100)),
            money(dec!(200)),
            money(dec!(300)),
        )
        .unwrap();
        assert_eq!(
            BalanceOutcome::from_balance(balance),
            BalanceOutcome::Surplus(money(dec!(400.00)))
        );
    }

    #[test]
    fn test_end_to_end_first_half() {
        let config = BudgetConfig {
            paydays: vec![IncomeSource::new("semimonthly", money(dec!(1500)))],
            charities: vec![Charity::percentage("A", dec!(0.1))],
            expenses: vec![Expense::new("Rent", money(dec!(1000)))],
            bills: vec![Bill::new("Gym", money(dec!(40)), 5)],
        };
        let service = BudgetService::new(&config);
        let income = service.total_income().unwrap();
        let result = service.calculate(HalfMonth::First, income).unwrap();

        assert_eq!(result.income, money(dec!(1500)));
        assert_eq!(result.charities.total, money(dec!(150.00)));
        assert_eq!(result.expenses.total, money(dec!(500.00)));
        assert_eq!(result.bills.total, money(dec!(40.00)));
        assert_eq!(result.balance, money(dec!(810.00)));
        assert_eq!(result.outcome(), BalanceOutcome::Surplus(money(dec!(810))));
    }

    #[test]
    fn test_end_to_end_second_half_skips_first_half_bills() {
        let config = BudgetConfig {
            paydays: vec![IncomeSource::new("semimonthly", money(dec!(1500)))],
            charities: vec![Charity::percentage("A", dec!(0.1))],
            expenses: vec![Expense::new("Rent", money(dec!(1000)))],
            bills: vec![Bill::new("Gym", money(dec!(40)), 5)],
        };
        let result = BudgetService::new(&config)
            .calculate(HalfMonth::Second, money(dec!(1500)))
            .unwrap();

        assert!(result.bills.is_empty());
        assert_eq!(result.balance, money(dec!(850.00)));
    }

    #[test]
    fn test_rows_follow_configuration_order() {
        let config = BudgetConfig {
            paydays: vec![],
            charities: vec![
                Charity::flat("Zeta", money(dec!(5))),
                Charity::percentage("Alpha", dec!(0.01)),
            ],
            expenses: vec![
                Expense::new("Utilities", money(dec!(10))),
                Expense::new("Groceries", money(dec!(800))),
                Expense::new("Books", money(dec!(40))),
            ],
            bills: sample_bills(),
        };
        let result = BudgetService::new(&config)
            .calculate(HalfMonth::First, money(dec!(2000)))
            .unwrap();

        assert_eq!(result.charities.names(), vec!["Zeta", "Alpha"]);
        assert_eq!(result.expenses.names(), vec!["Utilities", "Groceries", "Books"]);
        assert_eq!(result.bills.names(), vec!["Rent", "Phone", "Gym"]);
    }

    #[test]
    fn test_bill_due_before_the_first_lands_in_second_half() {
        let bills = vec![
            Bill::new("Odd", money(dec!(10)), -1),
            Bill::new("Zero", money(dec!(20)), 0),
            Bill::new("Gym", money(dec!(40)), 5),
        ];

        let second = select_bills_for_half(&bills, HalfMonth::Second);
        let names: Vec<&str> = second.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["Odd", "Zero"]);
        assert!(select_bills_for_half(&bills, HalfMonth::First)
            .iter()
            .all(|b| b.name == "Gym"));
    }

    #[test]
    fn test_balance_overflow_is_an_error() {
        let err = compute_balance(
            Money::new(Decimal::MIN),
            Money::zero(),
            Money::zero(),
            money(dec!(1)),
        )
        .unwrap_err();
        assert!(matches!(err, PaydayError::AmountOverflow(_)));
    }

    #[test]
    fn test_huge_configuration_fails_instead_of_panicking() {
        let config = BudgetConfig {
            paydays: vec![
                IncomeSource::new("semimonthly", Money::new(Decimal::MAX)),
                IncomeSource::new("semimonthly", Money::new(Decimal::MAX)),
            ],
            charities: vec![Charity::percentage("Double", dec!(2))],
            expenses: vec![],
            bills: vec![],
        };
        let service = BudgetService::new(&config);

        assert!(matches!(
            service.total_income(),
            Err(PaydayError::AmountOverflow(_))
        ));
        let err = service
            .calculate(HalfMonth::First, Money::new(Decimal::MAX))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Amounts are too large to budget: charity 'Double' overflowed"
        );
    }
}
