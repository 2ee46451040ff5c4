#![cfg(feature = "dev")]

use fracdiff_rs::internals::primitives::errors::FracDiffError;

#[test]
fn test_fracdiff_error_display() {
    // EmptyInput
    let err = FracDiffError::EmptyInput;
    assert_eq!(format!("{}", err), "input series must not be empty");

    // InvalidNumericValue
    let err = FracDiffError::InvalidNumericValue("series[2]=NaN".to_string());
    assert_eq!(
        format!("{}", err),
        "input contains a non-finite value: series[2]=NaN"
    );

    // InvalidOrder
    let err = FracDiffError::InvalidOrder(f64::NAN);
    assert_eq!(
        format!("{}", err),
        "differencing order must be finite, got NaN"
    );

    // InvalidThreshold
    let err = FracDiffError::InvalidThreshold(-0.5);
    assert_eq!(
        format!("{}", err),
        "threshold must be finite and non-negative, got -0.5"
    );

    // InvalidMaxWeights
    let err = FracDiffError::InvalidMaxWeights(0);
    assert_eq!(format!("{}", err), "max_weights must be at least 1, got 0");

    // NumericOverflow
    let err = FracDiffError::NumericOverflow { index: 7 };
    assert_eq!(
        format!("{}", err),
        "transform overflowed to a non-finite value at index 7"
    );

    // DuplicateParameter
    let err = FracDiffError::DuplicateParameter { parameter: "order" };
    assert_eq!(
        format!("{}", err),
        "parameter 'order' was set more than once"
    );
}

#[test]
fn test_fracdiff_error_properties() {
    let err1 = FracDiffError::EmptyInput;
    let err2 = err1.clone();
    assert_eq!(err1, err2);
    assert_ne!(err1, FracDiffError::InvalidMaxWeights(0));
}

#[cfg(feature = "std")]
#[test]
fn test_fracdiff_error_is_std_error() {
    fn assert_error<T: std::error::Error>() {}
    assert_error::<FracDiffError>();
}
