//! Command-line simulator for Simples Nacional tax obligations.
//!
//! Collects a trailing-twelve-month revenue and a business category, asks
//! the core for one assessment per applicable annex, and renders the results
//! in Brazilian formatting. All domain logic lives in `simples-core`; this
//! binary only gathers input and prints.

mod format;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use rust_decimal::Decimal;
use simples_core::{Category, TaxAssessment};
use tracing_subscriber::EnvFilter;

use crate::format::{format_brl, format_percent, parse_revenue};

/// Simulate Simples Nacional tax for a small business.
#[derive(Parser, Debug)]
#[command(name = "simples")]
#[command(version, about, long_about = None)]
struct Args {
    /// Trailing-twelve-month gross revenue (RBT12), up to 4800000.
    #[arg(short, long, value_parser = parse_revenue)]
    revenue: Decimal,

    /// Business category; selects which annexes are assessed.
    #[arg(short, long, value_enum, default_value = "todos")]
    category: CategoryArg,
}

/// Category choices, named as the published regime names them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum CategoryArg {
    /// Comércio (Anexo I).
    Comercio,
    /// Indústria (Anexo II).
    Industria,
    /// Outros serviços (Anexos III, IV e V).
    Outros,
    /// Todos os anexos, side by side.
    Todos,
}

impl From<CategoryArg> for Category {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::Comercio => Category::Commerce,
            CategoryArg::Industria => Category::Industry,
            CategoryArg::Outros => Category::Other,
            CategoryArg::Todos => Category::All,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let category = Category::from(args.category);
    tracing::debug!(revenue = %args.revenue, category = %category, "assessing");

    println!(
        "Simples Nacional — RBT12 {} ({})",
        format_brl(args.revenue),
        category.label(),
    );

    for annex in category.annexes() {
        let assessment = TaxAssessment::compute(args.revenue, *annex);
        println!();
        print!("{}", render_assessment(&assessment));
    }

    Ok(())
}

/// Renders one assessment as the four-line block shown per annex.
fn render_assessment(assessment: &TaxAssessment) -> String {
    let mut block = String::new();
    block.push_str(&format!("{}\n", assessment.annex));
    block.push_str(&format!(
        "  Alíquota nominal:  {}\n",
        format_percent(assessment.nominal_rate),
    ));
    block.push_str(&format!(
        "  Parcela a deduzir: {}\n",
        format_brl(assessment.deduction),
    ));
    block.push_str(&format!(
        "  Alíquota efetiva:  {}\n",
        format_percent(assessment.effective_rate),
    ));
    block.push_str(&format!(
        "  Valor do imposto:  {}\n",
        format_brl(assessment.tax_amount),
    ));
    block
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;
    use simples_core::Annex;

    use super::*;

    #[test]
    fn category_args_map_to_the_core_categories() {
        assert_eq!(Category::from(CategoryArg::Comercio), Category::Commerce);
        assert_eq!(Category::from(CategoryArg::Industria), Category::Industry);
        assert_eq!(Category::from(CategoryArg::Outros), Category::Other);
        assert_eq!(Category::from(CategoryArg::Todos), Category::All);
    }

    #[test]
    fn render_assessment_formats_the_four_quantities() {
        let assessment = TaxAssessment::compute(dec!(200000), Annex::One);

        let block = render_assessment(&assessment);

        assert_eq!(
            block,
            "Anexo I\n\
             \x20 Alíquota nominal:  7,30%\n\
             \x20 Parcela a deduzir: R$ 5.940,00\n\
             \x20 Alíquota efetiva:  4,33%\n\
             \x20 Valor do imposto:  R$ 8.660,00\n",
        );
    }

    #[test]
    fn args_parse_revenue_and_category() {
        let args = Args::parse_from(["simples", "--revenue", "200000", "--category", "comercio"]);

        assert_eq!(args.revenue, dec!(200000));
        assert_eq!(args.category, CategoryArg::Comercio);
    }

    #[test]
    fn args_default_to_all_annexes() {
        let args = Args::parse_from(["simples", "--revenue", "0"]);

        assert_eq!(args.category, CategoryArg::Todos);
    }

    #[test]
    fn args_reject_over_ceiling_revenue() {
        let result = Args::try_parse_from(["simples", "--revenue", "5000000"]);

        assert!(result.is_err());
    }
}
