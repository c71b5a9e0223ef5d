//! Taylor-Series Cosine Examples
//!
//! This example walks through:
//! - Evaluating cos(x) and inspecting the running approximation
//! - Reporting the log10 relative error after each term
//! - Range reduction for inputs far from zero
//! - Reusing the engine for sin(x) and exp(x)

#[cfg(feature = "std")]
use taylor_cos::prelude::*;

#[cfg(feature = "std")]
fn main() -> Result<(), SeriesError> {
    println!("{}", "=".repeat(80));
    println!("Taylor-Series Evaluation - Examples");
    println!("{}", "=".repeat(80));
    println!();

    example_1_values()?;
    example_2_errors()?;
    example_3_reduction()?;
    example_4_other_functions()?;

    Ok(())
}

#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
/// Example 1: Running approximation of cos(π/4)
fn example_1_values() -> Result<(), SeriesError> {
    println!("Example 1: cos(π/4), value per term");
    println!("{}", "-".repeat(80));

    let model = Taylor::new().expansion(Cosine).build()?;
    let result = model.evaluate(core::f64::consts::FRAC_PI_4)?;
    println!("{}", result);

    Ok(())
}

#[cfg(feature = "std")]
/// Example 2: Digits gained per term for cos(1)
fn example_2_errors() -> Result<(), SeriesError> {
    println!("Example 2: cos(1), log10 relative error per term");
    println!("{}", "-".repeat(80));

    let model = Taylor::new().report_error(true).expansion(Cosine).build()?;
    let result = model.evaluate(1.0_f64)?;

    for point in &result.series {
        println!("  n = {:>2}   correct digits ≈ {:>5.1}", point.x, -point.y);
    }
    println!();

    Ok(())
}

#[cfg(feature = "std")]
/// Example 3: Large inputs are folded into [-π, π] first
fn example_3_reduction() -> Result<(), SeriesError> {
    println!("Example 3: range reduction");
    println!("{}", "-".repeat(80));

    let model = Taylor::new().expansion(Cosine).build()?;
    for x in [10.0_f64, -25.0, 1000.0] {
        let result = model.evaluate(x)?;
        println!(
            "  cos({x:>7}) ≈ {:>20.16}  (reduced x = {:>8.5}, {} terms, library {:>20.16})",
            result.value,
            result.reduced_x,
            result.last_index,
            x.cos()
        );
    }
    println!();

    Ok(())
}

#[cfg(feature = "std")]
/// Example 4: Same engine, other expansions
fn example_4_other_functions() -> Result<(), SeriesError> {
    println!("Example 4: sin(x) and exp(x)");
    println!("{}", "-".repeat(80));

    let sin = Taylor::new().expansion(Sine).build()?.evaluate(0.5_f64)?;
    let exp = Taylor::new().expansion(Exponential).build()?.evaluate(0.5_f64)?;
    println!("  sin(0.5) ≈ {:.16}  (library {:.16})", sin.value, 0.5_f64.sin());
    println!("  exp(0.5) ≈ {:.16}  (library {:.16})", exp.value, 0.5_f64.exp());

    Ok(())
}
