use std::sync::Arc;

use gf_tables::{get_field, FieldError, FieldTable};
use proptest::prelude::*;

/// A width together with two nonzero symbols of that field.
fn width_and_nonzero_pair() -> impl Strategy<Value = (u8, u32, u32)> {
    (2u8..=16).prop_flat_map(|width| {
        let size = 1u32 << width;
        (Just(width), 1..size, 1..size)
    })
}

fn field(width: u8) -> Arc<FieldTable> {
    get_field(width).expect("width in range")
}

proptest! {
    #[test]
    fn division_undoes_multiplication((width, a, b) in width_and_nonzero_pair()) {
        let field = field(width);
        let product = field.multiply(a, b).unwrap();
        prop_assert_eq!(field.divide(product, b).unwrap(), a);
        prop_assert_eq!(field.multiply(field.divide(a, b).unwrap(), b).unwrap(), a);
    }

    #[test]
    fn multiplication_commutes((width, a, b) in width_and_nonzero_pair()) {
        let field = field(width);
        prop_assert_eq!(field.multiply(a, b).unwrap(), field.multiply(b, a).unwrap());
    }

    #[test]
    fn multiplication_distributes_over_xor((width, a, b) in width_and_nonzero_pair(), c_seed in any::<u32>()) {
        let field = field(width);
        let c = c_seed % field.size();
        let lhs = field.multiply(a, b ^ c).unwrap();
        let rhs = field.multiply(a, b).unwrap() ^ field.multiply(a, c).unwrap();
        prop_assert_eq!(lhs, rhs);
    }

    #[test]
    fn identity_and_zero((width, a, _b) in width_and_nonzero_pair()) {
        let field = field(width);
        prop_assert_eq!(field.multiply(a, 1).unwrap(), a);
        prop_assert_eq!(field.multiply(a, 0).unwrap(), 0);
        prop_assert_eq!(field.multiply(0, a).unwrap(), 0);
        prop_assert_eq!(field.divide(0, a).unwrap(), 0);
        prop_assert_eq!(field.divide(a, 0), Err(FieldError::DivideByZero));
    }

    #[test]
    fn log_antilog_round_trip((width, a, _b) in width_and_nonzero_pair()) {
        let field = field(width);
        let log = field.log_table()[a as usize] as usize;
        prop_assert_eq!(field.antilog_table()[log], a);
    }

    #[test]
    fn exponent_adds_one_multiplication((width, a, _b) in width_and_nonzero_pair(), e in 1u32..64) {
        let field = field(width);
        let next = field.exponentiate(a, e + 1).unwrap();
        prop_assert_eq!(next, field.multiply(field.exponentiate(a, e).unwrap(), a).unwrap());
    }

    #[test]
    fn out_of_range_operand_fails((width, a, _b) in width_and_nonzero_pair(), excess in 0u32..1024) {
        let field = field(width);
        let outside = field.size() + excess;
        prop_assert!(field.multiply(a, outside).unwrap_err().is_out_of_range());
        prop_assert!(field.divide(outside, a).unwrap_err().is_out_of_range());
        prop_assert_eq!(field.exponentiate(outside, 0).unwrap(), 1);
    }
}

#[test]
fn antilog_starts_at_one() {
    for width in 2..=20 {
        let field = field(width);
        assert_eq!(field.antilog_table()[0], 1);
        assert_eq!(field.antilog_table()[field.order() as usize], 1);
    }
}

#[test]
fn tables_verify_up_to_width_twenty() {
    for width in 2..=20 {
        field(width)
            .verify()
            .unwrap_or_else(|err| panic!("GF(2^{}) failed verification: {}", width, err));
    }
}
