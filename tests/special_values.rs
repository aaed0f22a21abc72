use half::bf16;
use num_complex::Complex;
use numext::math;
use numext::scalar::{ScalarType, SpecialValue};
use numext::traits::{bf16_bits, descriptor, NumTraits, SpecialValues};
use numext::Error;

mod common;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Category {
    Finite,
    Infinite,
    Nan,
}

fn category(x: bf16) -> Category {
    match (math::isnan(x), math::isinf(x), math::isfinite(x)) {
        (true, false, false) => Category::Nan,
        (false, true, false) => Category::Infinite,
        (false, false, true) => Category::Finite,
        other => panic!("inconsistent classification of {x:?}: {other:?}"),
    }
}

#[test]
fn bf16_constants_are_exact_bit_patterns() {
    let constants = [
        ("epsilon", <bf16 as NumTraits>::epsilon(), 0x3c00, Category::Finite),
        ("highest", bf16::highest(), 0x7f7f, Category::Finite),
        ("lowest", bf16::lowest(), 0xff7f, Category::Finite),
        ("infinity", bf16::infinity(), 0x7f80, Category::Infinite),
        ("quiet_nan", bf16::quiet_nan(), 0xffc1, Category::Nan),
    ];
    for (name, value, bits, expected) in constants {
        assert_eq!(value.to_bits(), bits, "{name}");
        let stored = bf16::from_bits(value.to_bits());
        assert_eq!(stored.to_bits(), bits, "{name}");
        assert_eq!(category(value), expected, "{name}");
    }
    assert_eq!(bf16_bits::EPSILON, 0x3c00);
    assert_eq!(bf16_bits::QUIET_NAN, 0xffc1);
}

#[test]
fn bf16_constant_values() {
    assert_eq!(<bf16 as NumTraits>::epsilon().to_f32(), 0.0078125);
    // (2 - 2^-7) * 2^127
    assert_eq!(bf16::highest().to_f64(), 255.0 * 2f64.powi(120));
    assert_eq!(bf16::lowest().to_f64(), -255.0 * 2f64.powi(120));
    assert_eq!(bf16::infinity().to_f32(), f32::INFINITY);
    assert!(bf16::quiet_nan().to_f32().is_nan());
    // the widened NaN keeps the quiet bit and the sign
    assert!(bf16::quiet_nan().to_f32().is_sign_negative());

    // highest is the largest finite value: the next bit pattern is infinity
    assert_eq!(bf16::from_bits(bf16::highest().to_bits() + 1), bf16::infinity());
    assert!(bf16::highest() > bf16::from_bits(0x7f7e));
}

#[test]
fn real_special_values() {
    assert_eq!(f32::highest(), f32::MAX);
    assert_eq!(f64::lowest(), f64::MIN);
    assert_eq!(f32::infinity(), f32::INFINITY);
    assert!(f64::quiet_nan().is_nan());
    assert_eq!(<f32 as NumTraits>::dummy_precision(), 1e-5);
    assert_eq!(<f64 as NumTraits>::dummy_precision(), 1e-12);
}

#[test]
fn complex_traits_delegate_to_component() {
    fn check<T>()
    where
        T: NumTraits<Real = T> + PartialEq + std::fmt::Debug,
        Complex<T>: NumTraits<Real = T>,
    {
        assert_eq!(<Complex<T> as NumTraits>::epsilon(), T::epsilon());
        assert_eq!(
            <Complex<T> as NumTraits>::dummy_precision(),
            T::dummy_precision()
        );
        assert_eq!(<Complex<T> as NumTraits>::digits10(), T::digits10());
        assert!(<Complex<T> as NumTraits>::IS_COMPLEX);
        assert!(!T::IS_COMPLEX);
        assert_eq!(<Complex<T> as NumTraits>::READ_COST, 2 * T::READ_COST);
        assert_eq!(<Complex<T> as NumTraits>::ADD_COST, 2 * T::ADD_COST);
        assert_eq!(
            <Complex<T> as NumTraits>::MUL_COST,
            4 * T::MUL_COST + 2 * T::ADD_COST
        );
    }
    check::<f32>();
    check::<f64>();
}

#[test]
fn descriptors() {
    let bf = descriptor::<bf16>();
    assert!(bf.is_signed && !bf.is_integer && !bf.is_complex && !bf.require_initialization);

    let c = descriptor::<Complex<f64>>();
    assert!(c.is_complex && !c.is_integer);
    assert_eq!((c.read_cost, c.add_cost, c.mul_cost), (2, 2, 6));

    for t in ScalarType::ALL {
        let d = t.descriptor();
        assert_eq!(d.is_complex, t.real() != t, "{t}");
    }
}

#[test]
fn complex_extreme_values_go_through_the_component() {
    let t: ScalarType = "complex64".parse().unwrap();
    assert_eq!(
        t.special_value(SpecialValue::Highest),
        Err(Error::NotSupported)
    );
    assert_eq!(
        t.real().special_value(SpecialValue::Highest),
        Ok(f64::from(f32::MAX))
    );
    assert_eq!(
        "bfloat16"
            .parse::<ScalarType>()
            .unwrap()
            .special_value(SpecialValue::Epsilon),
        Ok(0.0078125)
    );
}
