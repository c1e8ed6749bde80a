// Property tests for the quote calculator over the default catalog.

use proptest::prelude::*;
use swap_common::quote::quote;
use swap_common::{Catalog, SwapError};

fn symbols() -> Vec<String> {
    Catalog::default().iter().map(|t| t.symbol.clone()).collect()
}

fn arb_symbol() -> impl Strategy<Value = String> {
    prop::sample::select(symbols())
}

fn arb_distinct_pair() -> impl Strategy<Value = (String, String)> {
    (arb_symbol(), arb_symbol()).prop_filter("tokens must differ", |(a, b)| a != b)
}

#[test]
fn known_pairs_quote_to_hand_computed_values() {
    let catalog = Catalog::default();
    let cases = [
        ("1", "ETH", "USDC", 0.0, "2456.780000"),
        ("2", "LINK", "USDC", 0.0, "29.120000"),
        ("2456.78", "USDC", "ETH", 0.0, "1.000000"),
        ("10", "UNI", "USDC", 0.0, "83.400000"),
        ("0.5", "BTC", "USDT", 0.0, "33979.039039"),
        ("1", "ETH", "USDC", 1.0, "2432.212200"),
        ("100", "USDT", "LINK", 0.5, "6.826957"),
    ];
    for (amount, from, to, slippage, expected) in cases {
        assert_eq!(
            quote(amount, from, to, slippage, &catalog).unwrap(),
            expected,
            "{amount} {from} -> {to} at {slippage}%"
        );
    }
}

proptest! {
    #[test]
    fn zero_slippage_is_plain_conversion(
        (from, to) in arb_distinct_pair(),
        x in 0.000_001f64..1_000_000.0,
    ) {
        let catalog = Catalog::default();
        let pa = catalog.get(&from).unwrap().price;
        let pb = catalog.get(&to).unwrap().price;
        let out: f64 = quote(&x.to_string(), &from, &to, 0.0, &catalog).unwrap().parse().unwrap();
        let expected = (x * pa) / pb;
        let tolerance = 1e-6 + expected.abs() * 1e-12;
        prop_assert!(
            (out - expected).abs() <= tolerance,
            "{} {} -> {}: got {}, expected {}", x, from, to, out, expected
        );
    }

    #[test]
    fn higher_slippage_never_quotes_more(
        (from, to) in arb_distinct_pair(),
        x in 0.000_001f64..1_000_000.0,
        s1 in 0.0f64..=50.0,
        s2 in 0.0f64..=50.0,
    ) {
        let catalog = Catalog::default();
        let (lo, hi) = if s1 <= s2 { (s1, s2) } else { (s2, s1) };
        let amount = x.to_string();
        let a: f64 = quote(&amount, &from, &to, lo, &catalog).unwrap().parse().unwrap();
        let b: f64 = quote(&amount, &from, &to, hi, &catalog).unwrap().parse().unwrap();
        prop_assert!(b <= a, "slippage {} -> {}, {} -> {}", lo, a, hi, b);
    }

    #[test]
    fn identical_tokens_always_rejected(
        sym in arb_symbol(),
        amount in ".*",
        s in 0.0f64..=50.0,
    ) {
        let result = quote(&amount, &sym, &sym, s, &Catalog::default());
        prop_assert!(matches!(result, Err(SwapError::IdenticalTokens(_))));
    }

    #[test]
    fn non_positive_amounts_rejected(
        (from, to) in arb_distinct_pair(),
        x in -1_000_000.0f64..=0.0,
    ) {
        let result = quote(&x.to_string(), &from, &to, 0.5, &Catalog::default());
        prop_assert!(matches!(result, Err(SwapError::InvalidAmount(_))));
    }

    #[test]
    fn quote_is_deterministic(
        (from, to) in arb_distinct_pair(),
        amount in ".{0,12}",
        s in 0.0f64..=50.0,
    ) {
        let catalog = Catalog::default();
        let a = quote(&amount, &from, &to, s, &catalog).map_err(|e| e.to_string());
        let b = quote(&amount, &from, &to, s, &catalog).map_err(|e| e.to_string());
        prop_assert_eq!(a, b);
    }
}
