//! Integration tests for valuate-portfolio.
//!
//! These tests verify end-to-end behaviour with realistic portfolios.

use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;
use valuate_core::{AssetError, PaybackPeriod};
use valuate_portfolio::prelude::*;

// =============================================================================
// TEST FIXTURES
// =============================================================================

const ABC_RETURNS: [f64; 10] = [0.09, 0.07, 0.11, 0.13, 0.10, 0.06, 0.05, 0.14, 0.19, 0.20];
const XYZ_RETURNS: [f64; 10] = [0.05, 0.17, 0.13, -0.05, 0.20, 0.16, 0.09, 0.11, 0.12, 0.04];

/// Two stocks with known returns.
fn create_stock_portfolio() -> Portfolio {
    let abc = Asset::builder("ABC")
        .initial_capital(2100.0)
        .discount(0.17)
        .returns(ABC_RETURNS.to_vec())
        .build()
        .unwrap();
    let xyz = Asset::builder("XYZ")
        .initial_capital(3600.0)
        .discount(0.14)
        .returns(XYZ_RETURNS.to_vec())
        .build()
        .unwrap();

    PortfolioBuilder::new()
        .name("Stocks")
        .add_asset(abc)
        .add_asset(xyz)
        .build()
}

/// Level rental income with no expenses.
fn create_rental() -> Asset {
    Asset::builder("Rental")
        .initial_capital(1000.0)
        .discount(0.1)
        .cash_flows(vec![300.0; 5])
        .expense_weights(0.0, 0.0)
        .build()
        .unwrap()
}

// =============================================================================
// SINGLE ASSET SCENARIO
// =============================================================================

#[test]
fn test_rental_discounting_and_payback() {
    let rental = create_rental();

    let dcf = rental.discount_cash_flow();
    let expected = [272.727, 247.934, 225.394, 204.904, 186.276];
    assert_eq!(dcf.len(), expected.len());
    for (actual, expected) in dcf.iter().zip(expected) {
        assert_relative_eq!(*actual, expected, epsilon = 1e-3);
    }

    assert_relative_eq!(rental.net_present_value().unwrap(), 137.236, epsilon = 1e-3);

    let after_four: f64 = dcf[..4].iter().sum();
    assert!(after_four < 1000.0);
    assert_eq!(rental.payback_period(), PaybackPeriod::Recovered(5));

    let adjusted = rental
        .adjust_for_expenses_with(&mut StdRng::seed_from_u64(1))
        .unwrap();
    assert_eq!(adjusted, dcf);
}

// =============================================================================
// PORTFOLIO ANALYTICS
// =============================================================================

#[test]
fn test_stock_weights_and_expected_return() {
    let portfolio = create_stock_portfolio();

    let weights = portfolio.weights().unwrap();
    assert_relative_eq!(weights[0], 0.3684, epsilon = 1e-4);
    assert_relative_eq!(weights[1], 0.6316, epsilon = 1e-4);

    let averages: Vec<f64> = portfolio
        .iter()
        .map(|asset| asset.average_return().unwrap())
        .collect();
    assert_relative_eq!(averages[0], 0.114, epsilon = 1e-12);
    assert_relative_eq!(averages[1], 0.102, epsilon = 1e-12);

    let manual: f64 = weights.iter().zip(&averages).map(|(w, r)| w * r).sum();
    let expected = portfolio.expected_return().unwrap();
    assert_relative_eq!(expected, manual, epsilon = 1e-12);
    assert_relative_eq!(expected, 606.6 / 5700.0, epsilon = 1e-12);
}

#[test]
fn test_stock_correlation_and_dispersion() {
    let portfolio = create_stock_portfolio();

    let entries = portfolio.return_all_correlation_coefficients().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].first, "ABC");
    assert_eq!(entries[0].second, "XYZ");
    assert!(entries[0].coefficient.abs() <= 1.0);

    let abc = &portfolio.assets[0];
    assert_relative_eq!(portfolio.correlation(abc, abc).unwrap(), 1.0, epsilon = 1e-12);

    let deviations = portfolio.return_all_standard_deviations().unwrap();
    assert_eq!(deviations.len(), 2);
    assert!(deviations.iter().all(|d| d.standard_deviation > 0.0));
    assert_relative_eq!(
        deviations[0].standard_deviation,
        portfolio.standard_deviation(abc).unwrap()
    );
}

#[test]
fn test_mixed_portfolio_length_mismatch() {
    let mut portfolio = create_stock_portfolio();
    portfolio.add(create_rental());

    // Rental has 5 percent returns, the stocks have 10.
    let err = portfolio.return_all_correlation_coefficients().unwrap_err();
    match err {
        PortfolioError::IncompatibleSeriesLength {
            first_len,
            second,
            second_len,
            ..
        } => {
            assert_eq!(first_len, 10);
            assert_eq!(second, "Rental");
            assert_eq!(second_len, 5);
        }
        other => panic!("unexpected error: {other}"),
    }

    // Expected return does not need aligned series.
    assert!(portfolio.expected_return().is_ok());
}

#[test]
fn test_undefined_return_surfaces() {
    let zero_start = Asset::builder("Startup")
        .initial_capital(500.0)
        .discount(0.1)
        .cash_flows(vec![0.0, 50.0, 80.0])
        .expense_weights(0.0, 0.1)
        .build()
        .unwrap();

    let portfolio = PortfolioBuilder::new().add_asset(zero_start).build();
    let err = portfolio.expected_return().unwrap_err();
    assert_eq!(
        err,
        PortfolioError::Asset(AssetError::UndefinedReturn { period: 2 })
    );
}

#[test]
fn test_shared_asset_across_portfolios() {
    let rental = Arc::new(create_rental());
    let first = PortfolioBuilder::new()
        .add_asset(Arc::clone(&rental))
        .build();
    let second = PortfolioBuilder::new()
        .add_asset(Arc::clone(&rental))
        .add_asset(Arc::clone(&rental))
        .build();

    assert_eq!(first.total_money_invested(), 1000.0);
    assert_eq!(second.total_money_invested(), 2000.0);
    assert_eq!(Arc::strong_count(&rental), 4);
}

// =============================================================================
// DEFINITIONS & REPORTS
// =============================================================================

#[test]
fn test_definition_round_trip_through_reports() {
    let toml = r#"
        name = "Stocks"

        [config]
        parallel = false

        [[assets]]
        name = "ABC"
        initial_capital = 2100.0
        discount = 0.17
        returns = [0.09, 0.07, 0.11, 0.13, 0.10, 0.06, 0.05, 0.14, 0.19, 0.20]

        [[assets]]
        name = "XYZ"
        initial_capital = 3600.0
        discount = 0.14
        returns = [0.05, 0.17, 0.13, -0.05, 0.20, 0.16, 0.09, 0.11, 0.12, 0.04]
    "#;
    let portfolio = PortfolioDefinition::from_toml_str(toml)
        .unwrap()
        .build()
        .unwrap();
    let reference = create_stock_portfolio();

    assert_relative_eq!(
        portfolio.expected_return().unwrap(),
        reference.expected_return().unwrap()
    );

    let mut out = Vec::new();
    portfolio.write_expected_return_data(&mut out).unwrap();
    portfolio.write_all_standard_deviations(&mut out).unwrap();
    portfolio.write_all_correlation_coefficients(&mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(text.contains("Expected Return: "));
    assert!(text.contains("ABC:\nWeight: "));
    assert!(text.contains("Average Return: 11.4000%"));
    assert!(text.contains("Average Return: 10.2000%"));
    assert!(text.contains("Standard deviation for XYZ: "));
    assert!(text.contains("Correlation between ABC and XYZ: "));
}

#[test]
fn test_parallel_and_sequential_agree() {
    let assets: Vec<Asset> = (0..150)
        .map(|i| {
            let returns = (0..8)
                .map(|j| ((i * 7 + j * 3) % 11) as f64 / 100.0 - 0.03)
                .collect();
            Asset::builder(format!("A{i}"))
                .initial_capital(100.0 + i as f64)
                .discount(0.05)
                .returns(returns)
                .build()
                .unwrap()
        })
        .collect();

    let parallel = PortfolioBuilder::new()
        .add_assets(assets.clone())
        .config(AnalyticsConfig::default().with_threshold(10))
        .build();
    let sequential = PortfolioBuilder::new()
        .add_assets(assets)
        .config(AnalyticsConfig::sequential())
        .build();

    assert_eq!(
        parallel.return_all_standard_deviations().unwrap(),
        sequential.return_all_standard_deviations().unwrap()
    );

    let p = parallel.correlation_coefficients().unwrap();
    let s = sequential.correlation_coefficients().unwrap();
    assert_eq!(p.len(), 150 * 149 / 2);
    assert!(p
        .iter()
        .zip(&s)
        .all(|(a, b)| a.to_bits() == b.to_bits()));
}
