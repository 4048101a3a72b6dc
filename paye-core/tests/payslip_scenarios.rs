//! End-to-end payslip scenarios through the public API.

use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use paye_core::{
    ParseRequestError, PayeCalculator, ProgressiveTax, RequestError, TaxBand, TaxPolicy,
    TaxPolicyKind, TaxRequest,
};

fn progressive(salary: Decimal, bonus: Decimal) -> paye_core::TaxResponse {
    let request = TaxRequest::new(salary, bonus).expect("non-negative amounts");
    ProgressiveTax::default()
        .calculate(&request)
        .expect("statutory table is valid")
}

// =============================================================================
// Statutory schedule scenarios
// =============================================================================

#[test]
fn salary_within_the_allowance_pays_no_tax() {
    let response = progressive(dec!(150000), dec!(0));

    assert_eq!(response.tax_amount, dec!(0.00));
    assert_eq!(response.gross_pay, dec!(150000.00));
    assert_eq!(response.net_pay, dec!(150000.00));
}

#[test]
fn mid_band_salaries_pay_marginal_tax_only() {
    let cases = [
        (dec!(400000), dec!(20000.00), dec!(380000.00)),
        (dec!(800000), dec!(65000.00), dec!(735000.00)),
        (dec!(1200000), dec!(135000.00), dec!(1065000.00)),
    ];

    for (salary, tax, net) in cases {
        let response = progressive(salary, dec!(0));

        assert_eq!(response.tax_amount, tax, "salary {salary}");
        assert_eq!(response.gross_pay, salary);
        assert_eq!(response.net_pay, net, "salary {salary}");
    }
}

#[test]
fn band_boundaries_tax_the_full_lower_bands_and_nothing_above() {
    let cases = [
        (dec!(200000), dec!(0.00)),
        (dec!(700000), dec!(50000.00)),
        (dec!(1000000), dec!(95000.00)),
    ];

    for (salary, tax) in cases {
        let response = progressive(salary, dec!(0));

        assert_eq!(response.tax_amount, tax, "salary {salary}");
    }
}

#[test]
fn bonus_raises_gross_pay_but_never_the_tax() {
    let with_bonus = progressive(dec!(900000), dec!(100000));
    let without_bonus = progressive(dec!(900000), dec!(0));

    assert_eq!(with_bonus.tax_amount, without_bonus.tax_amount);
    assert_eq!(with_bonus.tax_amount, dec!(80000.00));
    assert_eq!(with_bonus.gross_pay, dec!(1000000.00));
    assert_eq!(with_bonus.net_pay, dec!(920000.00));
}

#[test]
fn fractional_salary_quantizes_half_up() {
    let response = progressive(dec!(200100.50), dec!(0));

    assert_eq!(response.tax_amount, dec!(10.05));
    assert_eq!(response.gross_pay, dec!(200100.50));
    assert_eq!(response.net_pay, dec!(200090.45));
}

// =============================================================================
// Properties
// =============================================================================

#[test]
fn tax_never_decreases_as_salary_grows() {
    let mut previous = dec!(0);

    for step in 0..=60 {
        let salary = Decimal::from(step * 25_000);
        let response = progressive(salary, dec!(0));

        assert!(
            response.tax_amount >= previous,
            "tax fell from {previous} to {} at salary {salary}",
            response.tax_amount
        );
        previous = response.tax_amount;
    }
}

#[test]
fn outputs_reconcile_to_within_one_cent() {
    let cases = [
        (dec!(0), dec!(0)),
        (dec!(199999.99), dec!(0.01)),
        (dec!(200100.505), dec!(0)),
        (dec!(333333.33), dec!(66666.67)),
        (dec!(1048576.105), dec!(42.424)),
    ];

    for (salary, bonus) in cases {
        let response = progressive(salary, bonus);
        let drift = response.gross_pay - response.tax_amount - response.net_pay;

        assert!(
            drift.abs() <= dec!(0.01),
            "drift {drift} for salary {salary}, bonus {bonus}"
        );
        assert!(response.tax_amount >= dec!(0));
        assert_eq!(
            response.gross_pay,
            (salary + bonus).round_dp_with_strategy(
                2,
                rust_decimal::RoundingStrategy::MidpointAwayFromZero
            )
        );
    }
}

// =============================================================================
// Policy selection
// =============================================================================

#[test]
fn no_tax_policy_passes_gross_through() {
    let request = TaxRequest::new(dec!(900000), dec!(100000)).unwrap();
    let policy = TaxPolicyKind::parse("no-tax").unwrap().policy();

    let response = policy.calculate(&request).unwrap();

    assert_eq!(response.tax_amount, dec!(0.00));
    assert_eq!(response.net_pay, response.gross_pay);
}

#[test]
fn progressive_policy_matches_the_raw_calculator() {
    let request = TaxRequest::new(dec!(800000), dec!(25000)).unwrap();
    let bands = TaxBand::statutory();

    let via_policy = TaxPolicyKind::Progressive
        .policy()
        .calculate(&request)
        .unwrap();
    let via_calculator = PayeCalculator::new(&bands).calculate(&request).unwrap();

    assert_eq!(via_policy, via_calculator);
}

// =============================================================================
// Request boundary
// =============================================================================

#[test]
fn negative_amounts_never_reach_a_calculator() {
    assert_eq!(
        TaxRequest::new(dec!(-500000), dec!(0)),
        Err(RequestError::NegativeSalary(dec!(-500000)))
    );
    assert_eq!(
        TaxRequest::new(dec!(500000), dec!(-1)),
        Err(RequestError::NegativeBonus(dec!(-1)))
    );
}

#[test]
fn malformed_text_fails_with_a_distinct_error_kind() {
    let malformed = TaxRequest::parse("one million", "0");
    let negative = TaxRequest::parse("-1000", "0");

    assert!(matches!(
        malformed,
        Err(ParseRequestError::MalformedAmount { field: "salary", .. })
    ));
    assert!(matches!(
        negative,
        Err(ParseRequestError::Invalid(RequestError::NegativeSalary(_)))
    ));
}
